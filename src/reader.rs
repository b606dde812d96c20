use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::script_parser::split_lines;

/// Failures at the file boundary; structural problems inside a script are never errors
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("UTF-8 decoding error in {} at line {line}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("Failed to serialize play document: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ScriptError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ScriptError::FileNotFound(path.to_path_buf())
        } else {
            ScriptError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Configuration for script reading
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

/// Statistics for one script read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Reads a whole script into memory as a list of lines
pub struct ScriptReader {
    config: ReaderConfig,
}

impl ScriptReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read the file fully, decode it as UTF-8 and split it into lines.
    /// Any mix of `\n`, `\r\n` and `\r` line endings is accepted.
    pub async fn read_script_lines<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<(Vec<String>, ReadStats), ScriptError> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of script: {}", path.display());

        let file = File::open(path).await.map_err(|e| {
            warn!("Failed to open script {}: {}", path.display(), e);
            ScriptError::io(path, e)
        })?;

        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .await
            .map_err(|e| ScriptError::io(path, e))?;
        let byte_count = bytes.len() as u64;

        let text = String::from_utf8(bytes).map_err(|e| {
            let valid_up_to = e.utf8_error().valid_up_to();
            let line = e.as_bytes()[..valid_up_to].iter().filter(|&&b| b == b'\n').count() + 1;
            warn!("Invalid UTF-8 in {} at line {}", path.display(), line);
            ScriptError::Decode {
                path: path.to_path_buf(),
                line,
                source: e,
            }
        })?;

        let lines = split_lines(&text);
        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: lines.len() as u64,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Read {}: {} lines, {} bytes in {}ms",
            path.display(),
            stats.lines_read,
            stats.bytes_read,
            stats.duration_ms
        );
        Ok((lines, stats))
    }
}

/// Convenience function for reading a single script with default configuration
pub async fn read_script_lines<P: AsRef<Path>>(file_path: P) -> Result<Vec<String>, ScriptError> {
    let reader = ScriptReader::new(ReaderConfig::default());
    let (lines, _stats) = reader.read_script_lines(file_path).await?;
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs;

    async fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let file_path = dir.join(name);
        fs::write(&file_path, content).await.unwrap();
        file_path
    }

    #[tokio::test]
    async fn test_read_valid_script() {
        let temp_dir = TempDir::new().unwrap();
        let reader = ScriptReader::new(ReaderConfig::default());

        let file_path = create_test_file(temp_dir.path(), "play.txt", b"ACT I\r\nSCENE I.\rEnter Romeo.\n").await;
        let (lines, stats) = reader.read_script_lines(&file_path).await.unwrap();

        assert_eq!(lines, vec!["ACT I", "SCENE I.", "Enter Romeo."]);
        assert_eq!(stats.lines_read, 3);
        assert_eq!(stats.bytes_read, 29);
    }

    #[tokio::test]
    async fn test_read_empty_script() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = create_test_file(temp_dir.path(), "empty.txt", b"").await;

        let lines = read_script_lines(&file_path).await.unwrap();
        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.txt");

        let error = read_script_lines(&missing).await.unwrap_err();
        assert!(matches!(error, ScriptError::FileNotFound(ref path) if path == &missing));
        assert!(error.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_reports_line() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = create_test_file(temp_dir.path(), "bad.txt", b"ACT I\nSCENE I.\n\xFF\xFE\n").await;

        let error = read_script_lines(&file_path).await.unwrap_err();
        assert!(matches!(error, ScriptError::Decode { line: 3, .. }));
    }

    #[tokio::test]
    async fn test_small_buffer_reads_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let reader = ScriptReader::new(ReaderConfig { buffer_size: 16 });

        let content = "x".repeat(2048) + "\n" + &"y".repeat(2048);
        let file_path = create_test_file(temp_dir.path(), "large.txt", content.as_bytes()).await;
        let (lines, _) = reader.read_script_lines(&file_path).await.unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 2048);
        assert_eq!(lines[1].len(), 2048);
    }
}
