//! Settings sources behind [`Config`](crate::Config) resolution.
//!
//! Three layers feed the chain: the built-in defaults table, live process
//! environment variables, and an optional `.env` settings file whose
//! entries are imported into the process environment at construction.
//! The import is additive: variables already set keep their values, so
//! deployment-time environment variables always win over file entries.

use std::collections::HashMap;
use std::env;
use std::path::Path;

use tracing::debug;

use crate::config::{DOWNLOAD_CHUNK_SIZE, NUM_REQUESTS_WORKERS};

/// Built-in parallel request worker count.
pub(crate) const DEFAULT_NUM_REQUESTS_WORKERS: usize = 3;
/// Built-in download chunk size in bytes.
pub(crate) const DEFAULT_DOWNLOAD_CHUNK_SIZE: u64 = 4 * 1024 * 1024;

/// The defaults table every `Config` instance starts from.
pub(crate) fn builtin_defaults() -> HashMap<String, String> {
    HashMap::from([
        (
            NUM_REQUESTS_WORKERS.to_string(),
            DEFAULT_NUM_REQUESTS_WORKERS.to_string(),
        ),
        (
            DOWNLOAD_CHUNK_SIZE.to_string(),
            DEFAULT_DOWNLOAD_CHUNK_SIZE.to_string(),
        ),
    ])
}

/// Look up `key` in the process environment.
///
/// An empty value still counts as set; only an unset (or non-unicode)
/// variable yields `None`. Reads are live — no caching, so later external
/// mutation is visible to every instance.
pub(crate) fn process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Import `KEY=value` pairs from an optional `.env` settings file into the
/// process environment, without overwriting variables already set.
///
/// Searches the working directory and its ancestors first, then the
/// conventional per-user location `<config_dir>/harmony/.env`. A missing
/// file is not an error.
pub(crate) fn import_settings_file() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "imported settings file"),
        Err(err) if err.not_found() => {
            if let Some(fallback) = dirs::config_dir().map(|dir| dir.join("harmony/.env")) {
                import_settings_file_from(&fallback);
            }
        }
        Err(err) => debug!(%err, "skipping unreadable settings file"),
    }
}

/// Import a specific settings file, additively. Missing or unreadable
/// files are skipped.
pub(crate) fn import_settings_file_from(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => debug!(path = %path.display(), "imported settings file"),
        Err(err) if err.not_found() => {}
        Err(err) => debug!(path = %path.display(), %err, "skipping unreadable settings file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_settings(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn defaults_table_holds_both_settings() {
        let defaults = builtin_defaults();
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults[NUM_REQUESTS_WORKERS], "3");
        assert_eq!(defaults[DOWNLOAD_CHUNK_SIZE], "4194304");
    }

    #[test]
    fn unset_variable_is_none() {
        assert_eq!(process_env("HARMONY_SOURCES_TEST_UNSET"), None);
    }

    #[test]
    fn import_never_overwrites_set_variables() {
        unsafe { env::set_var("HARMONY_SOURCES_TEST_KEPT", "process") };
        let f = write_settings(
            "HARMONY_SOURCES_TEST_KEPT=file\nHARMONY_SOURCES_TEST_ADDED=file\n",
        );

        import_settings_file_from(f.path());

        assert_eq!(
            process_env("HARMONY_SOURCES_TEST_KEPT").as_deref(),
            Some("process")
        );
        assert_eq!(
            process_env("HARMONY_SOURCES_TEST_ADDED").as_deref(),
            Some("file")
        );
    }

    #[test]
    fn missing_file_is_skipped() {
        unsafe { env::set_var("HARMONY_SOURCES_TEST_UNTOUCHED", "kept") };

        import_settings_file_from(Path::new("/nonexistent/harmony/.env"));

        assert_eq!(
            process_env("HARMONY_SOURCES_TEST_UNTOUCHED").as_deref(),
            Some("kept")
        );
    }
}
