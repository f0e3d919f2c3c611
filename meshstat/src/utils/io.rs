//! I/O and path utilities

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Prefix of every statistics report file name
pub const REPORT_PREFIX: &str = "stat_";

/// Build the report file name for an input file
///
/// The name is `stat_<input stem>_<timestamp>.txt`. Only the stem of the
/// input is used, so reports land in the output directory regardless of
/// where the input lives.
pub fn report_file_name(input: &Path, timestamp: &str) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| "input".into());
    format!("{REPORT_PREFIX}{stem}_{timestamp}.txt")
}

/// Full path of the report file for an input file
pub fn report_path(output_dir: &Path, input: &Path, timestamp: &str) -> PathBuf {
    output_dir.join(report_file_name(input, timestamp))
}

/// Write report contents to `path`, replacing any existing file
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name(Path::new("models/teapot.obj"), "2024-01-02_03-04-05.000006"),
            "stat_teapot_2024-01-02_03-04-05.000006.txt"
        );
        assert_eq!(
            report_file_name(Path::new("cube"), "ts"),
            "stat_cube_ts.txt"
        );
        assert_eq!(
            report_file_name(Path::new("archive.tar.obj"), "ts"),
            "stat_archive.tar_ts.txt"
        );
    }

    #[test]
    fn test_report_path() {
        assert_eq!(
            report_path(Path::new("out"), Path::new("/data/mesh.obj"), "ts"),
            Path::new("out").join("stat_mesh_ts.txt")
        );
    }

    #[test]
    fn test_write_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stat_cube_ts.txt");

        write_report(&path, "# of vertices: 0\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# of vertices: 0\n");
    }

    #[test]
    fn test_write_report_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.txt");

        let err = write_report(&path, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to create report file"));
    }
}
