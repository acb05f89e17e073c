//! Shared TOML configuration file.
//!
//! Both binaries read the same file. The client owns the `[pomodoro]` table
//! and the daemon owns `[pomodorod]`; each ignores the other's table.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::CoreError;

/// Default config location: `<config dir>/pomodoro/config.toml`.
///
/// Returns `None` when the platform has no notion of a config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pomodoro").join("config.toml"))
}

/// Load one table of the config file into `T`.
///
/// A missing file, or a file without `table`, yields `T::default()`.
///
/// # Errors
/// Returns [`CoreError::ConfigRead`] if the file exists but cannot be read,
/// and [`CoreError::ConfigParse`] if it is not valid TOML or the table does
/// not match `T`.
pub fn load_section<T>(path: &Path, table: &str) -> Result<T, CoreError>
where
    T: DeserializeOwned + Default,
{
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(source) => return Err(CoreError::ConfigRead { path: path.to_owned(), source }),
    };
    parse_section(&content, table).map_err(|reason| CoreError::ConfigParse {
        path: path.to_owned(),
        reason,
    })
}

fn parse_section<T>(content: &str, table: &str) -> Result<T, String>
where
    T: DeserializeOwned + Default,
{
    let mut doc: toml::Table = toml::from_str(content).map_err(|e| e.to_string())?;
    match doc.remove(table) {
        Some(value) => value.try_into::<T>().map_err(|e: toml::de::Error| format!("[{table}]: {e}")),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        name: Option<String>,
        count: u32,
    }

    #[test]
    fn missing_file_yields_default() {
        let dir = match tempfile::tempdir() {
            Ok(d) => d,
            Err(e) => panic!("tempdir: {e}"),
        };
        let loaded: Sample = match load_section(&dir.path().join("absent.toml"), "sample") {
            Ok(s) => s,
            Err(e) => panic!("missing file must not be an error: {e}"),
        };
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn reads_only_the_requested_table() {
        let mut file = match tempfile::NamedTempFile::new() {
            Ok(f) => f,
            Err(e) => panic!("tempfile: {e}"),
        };
        let written = writeln!(file, "[other]\ncount = 9\n\n[sample]\nname = \"x\"\ncount = 3");
        assert!(written.is_ok());

        let loaded: Sample = match load_section(file.path(), "sample") {
            Ok(s) => s,
            Err(e) => panic!("load failed: {e}"),
        };
        assert_eq!(loaded, Sample { name: Some("x".to_owned()), count: 3 });
    }

    #[test]
    fn absent_table_yields_default() {
        let loaded: Result<Sample, _> = parse_section("[other]\ncount = 1\n", "sample");
        assert_eq!(loaded, Ok(Sample::default()));
    }

    #[test]
    fn wrong_type_reports_table_name() {
        let loaded: Result<Sample, _> = parse_section("[sample]\ncount = \"many\"\n", "sample");
        match loaded {
            Err(reason) => assert!(reason.starts_with("[sample]"), "got {reason}"),
            Ok(s) => panic!("expected parse error, got {s:?}"),
        }
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let mut file = match tempfile::NamedTempFile::new() {
            Ok(f) => f,
            Err(e) => panic!("tempfile: {e}"),
        };
        assert!(write!(file, "[sample\ncount = ").is_ok());
        let loaded: Result<Sample, _> = load_section(file.path(), "sample");
        assert!(matches!(loaded, Err(CoreError::ConfigParse { .. })));
    }
}
