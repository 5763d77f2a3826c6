//! Named style codes and the shared handle consoles and progress bars read from.
//!
//! A theme is an ordered mapping from style name to escape code. Five keys are
//! reserved: `info`, `warning`, `error` and `success` mirror dedicated fields,
//! and `default` always holds the reset code.
//!
//! `set_success` only updates its field. The `success` entry of the mapping is
//! refreshed the next time `set_info`, `set_warning` or `set_error` runs.

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::error::StyleError;
use crate::ui::palette::{self, code};
use crate::Help;

pub const INFO: &str = "info";
pub const WARNING: &str = "warning";
pub const ERROR: &str = "error";
pub const SUCCESS: &str = "success";
pub const DEFAULT: &str = "default";

/// Palette every default theme starts from.
pub static DEFAULT_THEME: LazyLock<Theme> = LazyLock::new(|| {
    use palette::*;

    Theme::new(code(FG_CYAN), code(FG_YELLOW), code(FG_RED), code(FG_GREEN)).with_styles([
        ("bold", code(BOLD)),
        ("dim", code(DIM)),
        ("italic", code(ITALIC)),
        ("underline", code(UNDERLINE)),
        ("blink", code(BLINK)),
        ("inverse", code(INVERSE)),
        ("hidden", code(HIDDEN)),
        ("strikethrough", code(STRIKETHROUGH)),
        ("fg_black", code(FG_BLACK)),
        ("fg_white", code(FG_WHITE)),
        ("fg_green", code(FG_GREEN)),
        ("fg_yellow", code(FG_YELLOW)),
        ("fg_blue", code(FG_BLUE)),
        ("fg_magenta", code(FG_MAGENTA)),
        ("fg_cyan", code(FG_CYAN)),
        ("bg_black", code(BG_BLACK)),
        ("bg_red", code(BG_RED)),
        ("bg_green", code(BG_GREEN)),
        ("bg_yellow", code(BG_YELLOW)),
        ("bg_blue", code(BG_BLUE)),
        ("bg_magenta", code(BG_MAGENTA)),
        ("bg_cyan", code(BG_CYAN)),
        ("bg_white", code(BG_WHITE)),
    ])
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    info: String,
    warning: String,
    error: String,
    success: String,
    styles: IndexMap<String, String>,
}

impl Theme {
    pub fn new(
        info: impl Into<String>,
        warning: impl Into<String>,
        error: impl Into<String>,
        success: impl Into<String>,
    ) -> Self {
        let mut theme = Self {
            info: info.into(),
            warning: warning.into(),
            error: error.into(),
            success: success.into(),
            styles: IndexMap::new(),
        };
        theme.sync_reserved();
        theme
    }

    /// Adds extra named styles. Reserved keys are written back over any
    /// colliding entry, so `with_styles([("info", ..)])` has no effect.
    pub fn with_styles<I, K, V>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.set_styles(styles);
        self.sync_reserved();
        self
    }

    pub fn get_style(&self, name: &str) -> Result<&str, StyleError> {
        self.styles
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| StyleError::Unknown(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn styles(&self) -> &IndexMap<String, String> {
        &self.styles
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn warning(&self) -> &str {
        &self.warning
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn success(&self) -> &str {
        &self.success
    }

    pub fn set_info(&mut self, code: impl Into<String>) {
        self.info = code.into();
        self.sync_reserved();
    }

    pub fn set_warning(&mut self, code: impl Into<String>) {
        self.warning = code.into();
        self.sync_reserved();
    }

    pub fn set_error(&mut self, code: impl Into<String>) {
        self.error = code.into();
        self.sync_reserved();
    }

    pub fn set_success(&mut self, code: impl Into<String>) {
        self.success = code.into();
    }

    /// Merges `styles` into the mapping, overwriting on collision.
    pub fn set_styles<I, K, V>(&mut self, styles: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let before = self.styles.len();
        self.styles
            .extend(styles.into_iter().map(|(k, v)| (k.into(), v.into())));
        tracing::debug!(added = self.styles.len() - before, "merged theme styles");
    }

    fn sync_reserved(&mut self) {
        self.styles.insert(INFO.to_owned(), self.info.clone());
        self.styles.insert(WARNING.to_owned(), self.warning.clone());
        self.styles.insert(SUCCESS.to_owned(), self.success.clone());
        self.styles.insert(ERROR.to_owned(), self.error.clone());
        self.styles
            .insert(DEFAULT.to_owned(), palette::DEFAULT.to_owned());
    }
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME.clone()
    }
}

impl Help for Theme {
    const NAME: &'static str = "Theme";
    const SUMMARY: &'static str =
        "Named style codes with reserved info, warning, error, success and default entries.";
}

/// Reference-counted theme handle. Clones share one theme, so a mutation made
/// through any clone is seen by every console and progress bar holding it.
#[derive(Debug, Clone, Default)]
pub struct SharedTheme(Rc<RefCell<Theme>>);

impl SharedTheme {
    pub fn new(theme: Theme) -> Self {
        Self(Rc::new(RefCell::new(theme)))
    }

    /// Resolves `name` to an owned code so no borrow outlives the call.
    pub fn get_style(&self, name: &str) -> Result<String, StyleError> {
        self.0.borrow().get_style(name).map(str::to_owned)
    }

    pub fn borrow(&self) -> Ref<'_, Theme> {
        self.0.borrow()
    }

    pub fn update<T>(&self, f: impl FnOnce(&mut Theme) -> T) -> T {
        let result = f(&mut self.0.borrow_mut());
        tracing::debug!("shared theme updated");
        result
    }

    pub fn snapshot(&self) -> Theme {
        self.0.borrow().clone()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Theme> for SharedTheme {
    fn from(theme: Theme) -> Self {
        Self::new(theme)
    }
}

#[cfg(test)]
#[path = "../tests/theme_tests.rs"]
mod tests;
