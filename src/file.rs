// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::OutputOptions;

/// Write rendered output to the file implied by `opts.out_path`.
/// Returns the final path written to, or `None` when no path was set.
pub fn write_output(opts: &OutputOptions, contents: &str) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let Some(path) = opts.resolved_path() else { return Ok(None) };
    write_file(&path, contents)?;
    Ok(Some(path))
}

/// Ensure parent dir exists; create/truncate file.
pub fn write_file(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    logd!("File: wrote {} bytes → {}", contents.len(), path.display());
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::OutputFormat;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rigcheck-file-{}-{}", name, std::process::id()))
    }

    #[test]
    fn no_path_means_nothing_written() {
        let opts = OutputOptions::default();
        assert_eq!(write_output(&opts, "x").unwrap(), None);
    }

    #[test]
    fn creates_parent_directories() {
        let dir = scratch("nested");
        let target = dir.join("a").join("b.json");
        let opts = OutputOptions {
            format: OutputFormat::Json,
            out_path: Some(target.clone()),
            ..Default::default()
        };
        let written = write_output(&opts, "{}\n").unwrap();
        assert_eq!(written.as_deref(), Some(target.as_path()));
        assert_eq!(fs::read_to_string(&target).unwrap(), "{}\n");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn refuses_file_as_directory() {
        let f = scratch("plainfile");
        fs::write(&f, "x").unwrap();
        assert!(ensure_directory(&f).is_err());
        let _ = fs::remove_file(f);
    }
}
