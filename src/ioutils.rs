use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use std::path::Path;

/// Ensures the output file is safe to write to.
pub fn check_output_file<P: AsRef<Path>>(output: P, force: bool) -> Result<()> {
    let output = output.as_ref();
    if output.exists() && !force {
        return Err(Error::OutputExistsError { output: output.display().to_string() });
    }
    Ok(())
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Comment line placed on top of every generated configuration
pub fn document_header(generated_at: DateTime<Local>) -> String {
    format!(
        "# generated by {} {} on {}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        generated_at.to_rfc3339()
    )
}
