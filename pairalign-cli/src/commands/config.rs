use crate::config::Config;
use anyhow::Result;
use std::path::Path;

pub fn run(example: bool, out: Option<&Path>) -> Result<()> {
    match (example, out) {
        (true, Some(path)) => {
            Config::example().save_to_file(path)?;
            log::info!("Wrote example configuration to {}", path.display());
        }
        (true, None) => print!("{}", Config::example_toml()?),
        (false, _) => log::warn!("Nothing to do; pass --example to print a sample configuration"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_example_written_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pairalign.toml");

        run(true, Some(&path)).unwrap();
        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.global.gap, Some(-1));
        assert_eq!(loaded.local.match_score, Some(3));
    }

    #[test]
    fn test_without_example_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pairalign.toml");

        run(false, Some(&path)).unwrap();
        assert!(!path.exists());
    }
}
