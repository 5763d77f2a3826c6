//! Environment and file driven configuration.
//!
//! - `STYLEKIT_COLOR=always|never` picks the color mode, `NO_COLOR` wins over it.
//! - Terminal width comes from the terminal, then `COLUMNS`, then [`FALLBACK_WIDTH`].
//! - Themes can be described in TOML and turned into a [`Theme`].

use std::fs;
use std::io::{IsTerminal, Stdout};
use std::path::Path;

use anstream::{AutoStream, ColorChoice};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::ui::palette;
use crate::ui::theme::{Theme, DEFAULT_THEME};

pub const COLOR_ENV: &str = "STYLEKIT_COLOR";
pub const FALLBACK_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl OutputMode {
    pub fn from_env() -> Self {
        Self::from_token(std::env::var(COLOR_ENV).ok().as_deref())
    }

    fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("always") => OutputMode::Always,
            Some("never") => OutputMode::Never,
            _ => OutputMode::Auto,
        }
    }
}

pub fn resolve_color_enabled(mode: OutputMode, is_tty: bool) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match mode {
        OutputMode::Always => true,
        OutputMode::Never => false,
        OutputMode::Auto => is_tty,
    }
}

/// Stdout stream that strips escape codes unless `mode` enables color.
pub fn stdout_stream(mode: OutputMode) -> AutoStream<Stdout> {
    let choice = if resolve_color_enabled(mode, std::io::stdout().is_terminal()) {
        ColorChoice::AlwaysAnsi
    } else {
        ColorChoice::Never
    };
    AutoStream::new(std::io::stdout(), choice)
}

/// Current terminal width in columns, re-queried on every call.
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => usize::from(columns),
        _ => {
            let width = width_from_columns(std::env::var("COLUMNS").ok().as_deref());
            tracing::debug!(width, "terminal size unavailable, using fallback width");
            width
        }
    }
}

fn width_from_columns(columns: Option<&str>) -> usize {
    columns
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|width| *width > 0)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Theme description as written in a TOML file.
///
/// ```toml
/// info = "fg_blue"
/// error = "\u001b[1;31m"
///
/// [styles]
/// heading = "bold"
/// ```
///
/// Values naming a palette entry resolve to its code; anything else is kept
/// verbatim as a raw escape code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub info: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
    #[serde(default)]
    pub styles: IndexMap<String, String>,
}

impl ThemeConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading theme file");
        toml::from_str(&raw).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds a theme on top of the default palette.
    pub fn into_theme(self) -> Theme {
        let base = &*DEFAULT_THEME;
        let info = self.info.map_or_else(|| base.info().to_owned(), resolve_code);
        let warning = self
            .warning
            .map_or_else(|| base.warning().to_owned(), resolve_code);
        let error = self.error.map_or_else(|| base.error().to_owned(), resolve_code);
        let success = self
            .success
            .map_or_else(|| base.success().to_owned(), resolve_code);

        let extra = self
            .styles
            .into_iter()
            .map(|(name, value)| (name, resolve_code(value)));
        let mut theme = Theme::new(info, warning, error, success);
        theme.set_styles(
            base.styles()
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        theme.with_styles(extra)
    }
}

fn resolve_code(value: String) -> String {
    palette::lookup(&value).map_or(value, palette::code)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
