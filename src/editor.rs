use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::Command;

/// Opens `files` in `editor`, from the directory of the first file.
pub fn open(editor: &str, files: &[PathBuf]) -> Result<()> {
    if files.is_empty() {
        bail!("No files to open");
    }
    let mut command = Command::new(editor);
    command.args(files);
    if let Some(dir) = files[0].parent().filter(|d| d.is_dir()) {
        command.current_dir(dir);
    }

    let status = command
        .status()
        .with_context(|| format!("Failed to launch editor '{editor}'"))?;
    if !status.success() {
        bail!("Editor exited with status: {status}");
    }
    Ok(())
}
