//! Platform path helpers.
//!
//! Rideboard reads its configuration from the platform config directory and
//! writes optional trace exports to the platform data directory. Paths given by
//! the user may start with `~`, which is expanded against the home directory.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "rideboard";

/// Returns the data directory, e.g. `~/.local/share/rideboard` on Linux.
///
/// Falls back to a directory under the system temp dir when the platform
/// reports no data directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Returns the default configuration file path, e.g.
/// `~/.config/rideboard/config.toml` on Linux.
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// ```
/// use rideboard::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/srv/fleet.json"), PathBuf::from("/srv/fleet.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_and_relative_paths_are_untouched() {
        assert_eq!(expand_tilde("/tmp/a.json"), PathBuf::from("/tmp/a.json"));
        assert_eq!(expand_tilde("fleet/a.json"), PathBuf::from("fleet/a.json"));
    }

    #[test]
    fn tilde_expands_against_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/fleet.json"), home.join("fleet.json"));
            assert_eq!(expand_tilde("~"), home);
        }
    }

    #[test]
    fn data_dir_ends_with_app_name() {
        assert!(get_data_dir().ends_with(APP_DIR));
    }
}
