//! Removal script rendering and writing
//!
//! The script is plain text: one `apt purge <package>` line per package, one
//! block per kernel, no blank lines, terminated by a newline.

use std::fs::Permissions;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::Kernel;
use crate::error::{Result, fs::write_failed};

/// Concatenate the removal commands of every kernel
///
/// Returns an empty string when there is nothing to remove.
pub fn render_script(kernels: &[Kernel]) -> String {
    let blocks: Vec<String> = kernels
        .iter()
        .map(Kernel::tocmd)
        .filter(|block| !block.is_empty())
        .collect();

    if blocks.is_empty() {
        return String::new();
    }
    let mut script = blocks.join("\n");
    script.push('\n');
    script
}

/// Mode of a newly created script
#[cfg(unix)]
const SCRIPT_MODE: u32 = 0o644;

/// Writes the script to a fixed path
#[derive(Debug, Clone)]
pub struct ScriptWriter {
    path: PathBuf,
}

impl ScriptWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the script with `content`, creating parent directories
    ///
    /// Content goes to a temporary file next to the destination first, so the
    /// destination holds either the previous script or the complete new one.
    /// An existing script keeps its permissions; a new one is created 0644.
    pub fn write(&self, content: &str) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| self.error(e))?;

        let mut file = NamedTempFile::new_in(parent).map_err(|e| self.error(e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| self.error(e))?;
        file.flush().map_err(|e| self.error(e))?;
        if let Some(permissions) = self.permissions() {
            file.as_file()
                .set_permissions(permissions)
                .map_err(|e| self.error(e))?;
        }
        file.persist(&self.path).map_err(|e| self.error(e.error))?;
        Ok(())
    }

    fn permissions(&self) -> Option<Permissions> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Some(meta.permissions()),
            #[cfg(unix)]
            Err(_) => Some(Permissions::from_mode(SCRIPT_MODE)),
            #[cfg(not(unix))]
            Err(_) => None,
        }
    }

    fn error(&self, err: std::io::Error) -> crate::error::RemokError {
        write_failed(self.path.display().to_string(), err.to_string())
    }
}
