use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Config, ConfigError, model};

/// Environment variable naming a config file to use instead of the search
/// path.
pub const CONFIG_ENV: &str = "SKIP_RM_CONFIG";

/// Per-user config file, relative to the home directory.
pub const USER_CONFIG: &str = ".config/skip-rm/skip-rm.conf";

/// System-wide config file.
pub const SYSTEM_CONFIG: &str = "/etc/skip-rm/skip-rm.conf";

/// Returns the files to try, in order.
///
/// An override replaces the search path entirely. Without a home directory
/// only the system file is searched.
///
/// ```
/// use config::search_paths;
/// use std::path::{Path, PathBuf};
///
/// let paths = search_paths(None, Some(Path::new("/home/me")));
/// assert_eq!(paths, [
///     PathBuf::from("/home/me/.config/skip-rm/skip-rm.conf"),
///     PathBuf::from("/etc/skip-rm/skip-rm.conf"),
/// ]);
/// ```
#[must_use]
pub fn search_paths(override_path: Option<OsString>, home: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = override_path.filter(|path| !path.is_empty()) {
        return vec![PathBuf::from(path)];
    }

    let mut paths = Vec::with_capacity(2);
    if let Some(home) = home {
        paths.push(home.join(USER_CONFIG));
    }
    paths.push(PathBuf::from(SYSTEM_CONFIG));
    paths
}

/// Loads the first readable file among `candidates`.
///
/// Files that cannot be read are skipped. The first file that is read is
/// authoritative: a parse or validation error in it is returned without
/// trying the remaining candidates.
pub fn load_first(candidates: &[PathBuf]) -> Result<Config, ConfigError> {
    for candidate in candidates {
        let text = match fs::read_to_string(candidate) {
            Ok(text) => text,
            Err(_error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "skip_rm::config",
                    path = %candidate.display(),
                    error = %_error,
                    "config candidate unreadable"
                );
                continue;
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "skip_rm::config", path = %candidate.display(), "using config");

        return model::parse(&text, Some(candidate));
    }

    Err(ConfigError::NotFound {
        searched: candidates.to_vec(),
    })
}
