use std::fs;
use std::path::{Path, PathBuf};

use filters::{FilterMode, MatchSyntax, MatcherSet, PathContext};
use serde::Deserialize;

use crate::ConfigError;

/// Document shape as written on disk.
///
/// Enumerated fields stay strings here and are validated by
/// [`Config::from_raw`], so an unknown token is reported with the list of
/// accepted values rather than as a generic JSON error. Unknown keys are
/// ignored.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct RawConfig {
    /// Program to run with the forwarded arguments.
    pub command: String,
    /// Pattern syntax token.
    pub matcher: String,
    /// Filter mode token.
    pub mode: String,
    /// Pattern list used in blacklist mode.
    #[serde(default)]
    pub blacklist: Option<PathBuf>,
    /// Pattern list used in whitelist mode.
    #[serde(default)]
    pub whitelist: Option<PathBuf>,
}

/// Validated configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    command: String,
    matcher: MatchSyntax,
    mode: FilterMode,
    blacklist: Option<PathBuf>,
    whitelist: Option<PathBuf>,
    origin: Option<PathBuf>,
}

impl Config {
    /// Validates a raw document.
    ///
    /// # Errors
    ///
    /// Fails on an empty `command`, unknown `matcher` or `mode` tokens, and
    /// when the list selected by `mode` is missing or empty. The list for
    /// the inactive mode is not required.
    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        if raw.command.is_empty() {
            return Err(ConfigError::EmptyCommand);
        }
        let matcher: MatchSyntax = raw.matcher.parse()?;
        let mode: FilterMode = raw.mode.parse()?;

        let config = Self {
            command: raw.command,
            matcher,
            mode,
            blacklist: non_empty(raw.blacklist),
            whitelist: non_empty(raw.whitelist),
            origin: None,
        };
        if config.selected_list().is_none() {
            return Err(ConfigError::MissingList { mode });
        }
        Ok(config)
    }

    /// Parses and validates a JSON document.
    ///
    /// ```
    /// use config::Config;
    /// use filters::{FilterMode, MatchSyntax};
    ///
    /// let config = Config::from_json_str(
    ///     r#"{"command": "rm", "matcher": "glob", "mode": "blacklist", "blacklist": "~/.skip"}"#,
    /// )?;
    /// assert_eq!(config.command(), "rm");
    /// assert_eq!(config.matcher(), MatchSyntax::Glob);
    /// assert_eq!(config.mode(), FilterMode::Blacklist);
    /// # Ok::<(), config::ConfigError>(())
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        parse(text, None)
    }

    /// Reads, parses, and validates the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&text, Some(path))
    }

    /// Program to run.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Syntax of every pattern in the list.
    #[must_use]
    pub const fn matcher(&self) -> MatchSyntax {
        self.matcher
    }

    /// Active filter mode.
    #[must_use]
    pub const fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Blacklist path as written, if any.
    #[must_use]
    pub fn blacklist(&self) -> Option<&Path> {
        self.blacklist.as_deref()
    }

    /// Whitelist path as written, if any.
    #[must_use]
    pub fn whitelist(&self) -> Option<&Path> {
        self.whitelist.as_deref()
    }

    /// File the configuration was read from, when it came from disk.
    #[must_use]
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    fn selected_list(&self) -> Option<&Path> {
        match self.mode {
            FilterMode::Blacklist => self.blacklist(),
            FilterMode::Whitelist => self.whitelist(),
        }
    }

    /// Path of the list selected by [`mode`](Self::mode) with `~` expanded.
    pub fn pattern_list_path(&self, context: &PathContext) -> Result<PathBuf, ConfigError> {
        let list = self
            .selected_list()
            .ok_or(ConfigError::MissingList { mode: self.mode })?;
        Ok(context.expand_home_path(list)?)
    }

    /// Reads the active pattern list and compiles it.
    pub fn matcher_set(&self, context: PathContext) -> Result<MatcherSet, ConfigError> {
        let list = self.pattern_list_path(&context)?;
        Ok(MatcherSet::from_list_file(&list, self.matcher, context)?)
    }

    pub(crate) fn with_origin(mut self, origin: &Path) -> Self {
        self.origin = Some(origin.to_path_buf());
        self
    }
}

pub(crate) fn parse(text: &str, origin: Option<&Path>) -> Result<Config, ConfigError> {
    let raw: RawConfig = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
        path: origin.map(Path::to_path_buf),
        source,
    })?;
    let config = Config::from_raw(raw)?;
    Ok(match origin {
        Some(origin) => config.with_origin(origin),
        None => config,
    })
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|path| !path.as_os_str().is_empty())
}
