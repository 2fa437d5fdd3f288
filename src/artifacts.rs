use crate::error::{Error, Result};
use crate::serialize::{fold_table_from_json, multimap_from_json, to_json};
use crate::tables::CaseFoldTables;
use crate::types::FoldStatus;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const SIMPLE_FILE_NAME: &str = "simple-case-folding-mappings.json";
pub const IU_FILE_NAME: &str = "iu-mappings.json";

/// Where the two artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub simple: PathBuf,
    pub iu: PathBuf,
}

impl ArtifactPaths {
    /// The default file names inside \p dir.
    pub fn in_dir(dir: impl AsRef<Path>) -> ArtifactPaths {
        let dir = dir.as_ref();
        ArtifactPaths {
            simple: dir.join(SIMPLE_FILE_NAME),
            iu: dir.join(IU_FILE_NAME),
        }
    }
}

/// Render both documents. Nothing is written.
pub fn render_artifacts(tables: &CaseFoldTables) -> Result<(String, String)> {
    Ok((to_json(&tables.simple)?, to_json(&tables.iu)?))
}

/// Write both artifacts, or neither.
pub fn write_artifacts(paths: &ArtifactPaths, tables: &CaseFoldTables) -> Result<()> {
    let (simple, iu) = render_artifacts(tables)?;
    write_all_or_nothing(&[
        (paths.simple.as_path(), simple.as_bytes()),
        (paths.iu.as_path(), iu.as_bytes()),
    ])
}

/// Read an artifact pair written by `write_artifacts`.
pub fn read_artifacts(paths: &ArtifactPaths) -> Result<CaseFoldTables> {
    let simple = fs::read_to_string(&paths.simple).map_err(|e| Error::io(&paths.simple, e))?;
    let iu = fs::read_to_string(&paths.iu).map_err(|e| Error::io(&paths.iu, e))?;
    Ok(CaseFoldTables {
        simple: fold_table_from_json(FoldStatus::Simple, &simple)?,
        iu: multimap_from_json(&iu)?,
    })
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn stage(path: &Path, bytes: &[u8]) -> Result<NamedTempFile> {
    let parent = parent_dir(path);
    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    let mut file = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    file.write_all(bytes).map_err(|e| Error::io(path, e))?;
    file.as_file().sync_all().map_err(|e| Error::io(path, e))?;
    Ok(file)
}

fn read_previous(path: &Path) -> Result<Option<Vec<u8>>> {
    // Renaming over a directory fails later; there is nothing to restore.
    if path.is_dir() {
        return Ok(None);
    }
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(Error::io(path, err)),
    }
}

/// Put \p path back the way it was before this write.
fn restore(path: &Path, previous: Option<&[u8]>) -> Result<()> {
    match previous {
        Some(bytes) => {
            let staged = stage(path, bytes)?;
            staged.persist(path).map_err(|e| Error::Persist {
                path: path.to_path_buf(),
                source: e.error,
            })?;
        }
        None => match fs::remove_file(path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(Error::io(path, err)),
        },
    }
    Ok(())
}

/// Write every file in \p files, or leave all of them as they were.
/// All contents are staged next to their destinations before any is
/// renamed into place; a failed rename rolls back the earlier ones.
pub fn write_all_or_nothing(files: &[(&Path, &[u8])]) -> Result<()> {
    let mut staged = Vec::with_capacity(files.len());
    for &(path, bytes) in files {
        staged.push((path, stage(path, bytes)?, read_previous(path)?));
    }

    let mut done: Vec<(&Path, Option<Vec<u8>>)> = Vec::new();
    for (path, file, previous) in staged {
        match file.persist(path) {
            Ok(_) => {
                tracing::info!(target: "iufold", path = %path.display(), "wrote artifact");
                done.push((path, previous));
            }
            Err(err) => {
                for (written, previous) in done.iter().rev() {
                    if let Err(restore_err) = restore(written, previous.as_deref()) {
                        tracing::warn!(
                            target: "iufold",
                            path = %written.display(),
                            error = %restore_err,
                            "failed to roll back artifact"
                        );
                    } else {
                        tracing::warn!(
                            target: "iufold",
                            path = %written.display(),
                            "rolled back artifact"
                        );
                    }
                }
                return Err(Error::Persist {
                    path: path.to_path_buf(),
                    source: err.error,
                });
            }
        }
    }
    Ok(())
}
