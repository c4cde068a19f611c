use crate::types::AlignmentResult;
use std::io::{self, Write};

/// Destination for rendered alignments
pub trait ResultSink {
    fn write_result(&mut self, result: &AlignmentResult) -> io::Result<()>;
}

/// Three alignment lines followed by `Alignment Score: <score>`
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for TextSink<W> {
    fn write_result(&mut self, result: &AlignmentResult) -> io::Result<()> {
        writeln!(self.writer, "{}", result.top)?;
        writeln!(self.writer, "{}", result.marker)?;
        writeln!(self.writer, "{}", result.bottom)?;
        writeln!(self.writer, "Alignment Score: {}", result.score)?;
        self.writer.flush()
    }
}

/// One JSON object per line
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn write_result(&mut self, result: &AlignmentResult) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, result)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}
