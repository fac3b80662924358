//! ZIP archive unpacking into a scoped workspace.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tempfile::TempDir;
use tracing::{debug, warn};
use zip::ZipArchive;

use crate::batch::InputDocument;
use crate::error::ArchiveError;

/// Result type for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// PDF documents unpacked from a ZIP archive.
///
/// The backing directory is uniquely named per invocation and removed
/// when this value is dropped, so concurrent unpacks cannot collide and
/// no extraction folder outlives its batch.
pub struct UnpackedArchive {
    workspace: TempDir,
    documents: Vec<InputDocument>,
}

impl UnpackedArchive {
    /// Unpacked PDF documents, in archive entry order.
    pub fn documents(&self) -> &[InputDocument] {
        &self.documents
    }

    /// Path of the extraction workspace.
    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }
}

/// Unpack the `.pdf` entries of a ZIP archive into a scoped workspace.
///
/// Non-PDF entries and directories are skipped. Entries with unsafe
/// paths (absolute, or escaping the workspace) are skipped with a
/// warning. An archive that cannot be opened at all is a fatal error.
pub fn unpack_pdfs(zip_path: &Path) -> Result<UnpackedArchive> {
    let file = File::open(zip_path).map_err(|e| ArchiveError::Open(e.to_string()))?;
    let mut archive = ZipArchive::new(file).map_err(|e| ArchiveError::Open(e.to_string()))?;

    let workspace = TempDir::new().map_err(ArchiveError::Workspace)?;
    let mut documents = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| ArchiveError::Entry {
            name: format!("#{}", i),
            reason: e.to_string(),
        })?;

        if entry.is_dir() {
            continue;
        }

        let name = entry.name().to_string();
        if !name.to_lowercase().ends_with(".pdf") {
            continue;
        }

        let Some(relative) = entry.enclosed_name() else {
            warn!("Skipping archive entry with unsafe path: {}", name);
            continue;
        };

        let out_path = workspace.path().join(&relative);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ArchiveError::Entry {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        }

        let mut out = File::create(&out_path).map_err(|e| ArchiveError::Entry {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        io::copy(&mut entry, &mut out).map_err(|e| ArchiveError::Entry {
            name: name.clone(),
            reason: e.to_string(),
        })?;

        let filename = relative
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or(name);

        documents.push(InputDocument {
            filename,
            path: out_path,
        });
    }

    debug!(
        "Unpacked {} PDF documents to {}",
        documents.len(),
        workspace.path().display()
    );

    Ok(UnpackedArchive {
        workspace,
        documents,
    })
}
