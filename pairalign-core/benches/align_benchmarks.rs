use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pairalign_core::{Aligner, AlignmentMode, DpMatrixBuilder, ScoringScheme, Sequence};

fn generate_test_sequence(length: usize, pattern: &[u8]) -> Vec<u8> {
    let mut sequence = Vec::with_capacity(length);

    while sequence.len() < length {
        let remaining = length - sequence.len();
        let chunk_size = std::cmp::min(pattern.len(), remaining);
        sequence.extend_from_slice(&pattern[..chunk_size]);
    }

    sequence
}

fn bench_matrix_fill(c: &mut Criterion) {
    let seq_a = generate_test_sequence(1000, b"ATCGATCG");
    let seq_b = generate_test_sequence(1000, b"ATCCGATG");

    let builder = DpMatrixBuilder::new(ScoringScheme::global_default(), AlignmentMode::Global);
    c.bench_function("fill_global_1kb", |b| {
        b.iter(|| black_box(builder.build(black_box(&seq_a), black_box(&seq_b))))
    });
}

fn bench_full_alignment(c: &mut Criterion) {
    let seq_a = generate_test_sequence(1000, b"ATCGATCG");
    let seq_b = generate_test_sequence(800, b"GATTACA");

    for mode in [AlignmentMode::Global, AlignmentMode::Local] {
        let aligner = Aligner::with_defaults(mode);
        c.bench_function(&format!("align_{}_1kb", mode), |b| {
            b.iter(|| black_box(aligner.align(black_box(&seq_a), black_box(&seq_b))))
        });
    }
}

fn bench_all_pairs(c: &mut Criterion) {
    let sequences: Vec<Sequence> = (0..16)
        .map(|i| Sequence::new(generate_test_sequence(200 + i * 10, b"ACGGTCA")))
        .collect();
    let aligner = Aligner::with_defaults(AlignmentMode::Local);

    c.bench_function("all_pairs_16x200", |b| {
        b.iter(|| black_box(aligner.align_all_pairs(black_box(&sequences))))
    });
}

criterion_group!(benches, bench_matrix_fill, bench_full_alignment, bench_all_pairs);
criterion_main!(benches);
