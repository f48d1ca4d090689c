//! Resume download.
//!
//! The resume is a static file shipped next to the binary (or pointed at by
//! configuration). "Downloading" it copies the file into the visitor's
//! download directory under the name the page offers it as.

use std::path::{Path, PathBuf};

use crate::error::{FolioError, FolioResult};

/// Where the resume comes from and where it is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeSettings {
    /// Source file
    pub source: PathBuf,
    /// Directory the copy is written to
    pub download_dir: PathBuf,
    /// File name the copy is saved under
    pub file_name: String,
}

/// Default download directory: the user's download dir, then home, then cwd.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Copy `source` into `dest_dir` as `file_name`, creating the directory if
/// needed. Returns the path written.
pub fn download_resume(source: &Path, dest_dir: &Path, file_name: &str) -> FolioResult<PathBuf> {
    if !source.is_file() {
        return Err(FolioError::ResumeNotFound {
            path: source.to_path_buf(),
        });
    }

    let dest = dest_dir.join(file_name);
    std::fs::create_dir_all(dest_dir).map_err(|source| FolioError::ResumeCopy {
        dest: dest.clone(),
        source,
    })?;
    std::fs::copy(source, &dest).map_err(|source| FolioError::ResumeCopy {
        dest: dest.clone(),
        source,
    })?;

    tracing::info!(dest = %dest.display(), "Resume saved");
    Ok(dest)
}

impl ResumeSettings {
    pub fn download(&self) -> FolioResult<PathBuf> {
        download_resume(&self.source, &self.download_dir, &self.file_name)
    }
}
