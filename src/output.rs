use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::document::PlayDocument;
use crate::reader::ScriptError;

/// Write the document as pretty-printed UTF-8 JSON, replacing any existing file
pub async fn write_document_json(path: &Path, document: &PlayDocument) -> Result<(), ScriptError> {
    let json = document.to_json_pretty()?;
    let io_error = |source: std::io::Error| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }

    let mut file = tokio::fs::File::create(path).await.map_err(io_error)?;
    file.write_all(json.as_bytes()).await.map_err(io_error)?;
    file.flush().await.map_err(io_error)?;

    info!("Wrote {} ({} bytes)", path.display(), json.len());
    Ok(())
}
