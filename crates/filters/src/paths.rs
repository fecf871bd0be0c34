use std::borrow::Cow;
use std::env;
use std::path::{Component, Path, PathBuf};

use crate::FilterError;

/// Working and home directories captured once before matching starts.
///
/// Candidates are made absolute against the captured working directory, so
/// evaluating a matcher never touches the process environment again. Home
/// directory expansion covers `~` and `~/...` only.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathContext {
    cwd: PathBuf,
    home: Option<PathBuf>,
}

impl PathContext {
    /// Creates a context from explicit directories.
    ///
    /// `cwd` is expected to be absolute.
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home,
        }
    }

    /// Captures the process working directory and the user's home directory.
    ///
    /// A missing home directory is not an error here; it only fails when a
    /// `~` prefix actually needs expanding.
    pub fn from_env() -> Result<Self, FilterError> {
        let cwd = env::current_dir().map_err(FilterError::CurrentDir)?;
        Ok(Self::new(cwd, dirs::home_dir()))
    }

    /// Returns the captured working directory.
    #[must_use]
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Returns the captured home directory, if one is known.
    #[must_use]
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Resolves `candidate` to an absolute path without consulting the
    /// filesystem.
    ///
    /// `.` components are dropped and `..` removes the preceding component
    /// (never climbing above the root). Symbolic links are not followed, and
    /// an empty candidate resolves to the working directory.
    ///
    /// ```
    /// use filters::PathContext;
    /// use std::path::{Path, PathBuf};
    ///
    /// let context = PathContext::new("/work", None);
    /// assert_eq!(context.absolutize(Path::new("a/../b")), PathBuf::from("/work/b"));
    /// assert_eq!(context.absolutize(Path::new("/x/./y/..")), PathBuf::from("/x"));
    /// ```
    #[must_use]
    pub fn absolutize(&self, candidate: &Path) -> PathBuf {
        let mut resolved = if candidate.has_root() {
            PathBuf::new()
        } else {
            self.cwd.clone()
        };
        push_normalized(&mut resolved, candidate);
        resolved
    }

    /// Expands a leading `~` or `~/` in `text` to the home directory.
    ///
    /// The remainder is joined onto the home directory and normalised the
    /// same way as [`absolutize`](Self::absolutize): repeated and trailing
    /// slashes collapse, `.` is dropped and `..` removes the preceding
    /// component. Any other text, including `~user/...`, is returned
    /// unchanged.
    pub fn expand_home<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, FilterError> {
        let rest = match text.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
            _ => return Ok(Cow::Borrowed(text)),
        };

        let home = self.home.as_deref().ok_or_else(|| FilterError::UnknownHome {
            text: text.to_owned(),
        })?;
        let mut expanded = home.to_path_buf();
        push_normalized(&mut expanded, Path::new(rest));
        Ok(Cow::Owned(expanded.to_string_lossy().into_owned()))
    }

    /// Path flavour of [`expand_home`](Self::expand_home).
    pub fn expand_home_path(&self, path: &Path) -> Result<PathBuf, FilterError> {
        match path.to_str() {
            Some(text) => self.expand_home(text).map(|text| PathBuf::from(text.as_ref())),
            None => Ok(path.to_path_buf()),
        }
    }
}

/// Appends the components of `path` to `resolved`, resolving `.` and `..`
/// lexically.
fn push_normalized(resolved: &mut PathBuf, path: &Path) {
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => resolved.push(prefix.as_os_str()),
            Component::RootDir => resolved.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(part) => resolved.push(part),
        }
    }
}
