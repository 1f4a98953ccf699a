use crate::domain::entities::record::Record;
use crate::domain::repositories::RepositoryError;
use std::fs;
use std::path::{Path, PathBuf};

fn temp_path(file_path: &Path) -> PathBuf {
    let mut name = file_path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

// Save to JSON; the target is replaced by renaming a fully written temp file over it
pub fn save_records<R: Record>(records: &[R], file_path: &Path) -> Result<(), RepositoryError> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| RepositoryError::IoError(format!("Failed to serialize records: {}", e)))?;

    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                RepositoryError::IoError(format!("Failed to create directory: {}", e))
            })?;
        }
    }

    let tmp = temp_path(file_path);
    fs::write(&tmp, json)
        .map_err(|e| RepositoryError::IoError(format!("Failed to write file: {}", e)))?;

    if let Err(e) = fs::rename(&tmp, file_path) {
        let _ = fs::remove_file(&tmp);
        return Err(RepositoryError::IoError(format!(
            "Failed to replace {}: {}",
            file_path.display(),
            e
        )));
    }
    Ok(())
}

// Load from JSON; a missing file is an empty collection
pub fn load_records<R: Record>(file_path: &Path) -> Result<Vec<R>, RepositoryError> {
    if !file_path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(file_path)
        .map_err(|e| RepositoryError::IoError(format!("Failed to read file: {}", e)))?;
    let records: Vec<R> = serde_json::from_str(&data)
        .map_err(|e| RepositoryError::ParseError(format!("Failed to parse JSON: {}", e)))?;
    Ok(records)
}
