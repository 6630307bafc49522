//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod count;
pub mod exact;
pub mod find;
pub mod info;
pub mod repeats;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> Utf8PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn reads_file_within_limit() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "a.txt", "hello hello");
        assert_eq!(read_input_file(&path, Some(100)).unwrap(), "hello hello");
        assert_eq!(read_input_file(&path, None).unwrap(), "hello hello");
    }

    #[test]
    fn rejects_file_over_limit() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "a.txt", "hello hello");
        let err = read_input_file(&path, Some(4)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_errors() {
        let err = read_input_file(Utf8Path::new("/nonexistent/wordscan.txt"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
