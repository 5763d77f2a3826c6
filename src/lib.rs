//! Themed terminal output: a style theme, a console with alignment and
//! prompts, a blocking progress bar and a plain-text table.

pub mod config;
pub mod error;
pub mod ui;

pub use config::{OutputMode, ThemeConfig};
pub use error::{AlignmentError, ConfigError, StyleError, TableError, UiError, UiResult};
pub use ui::{
    Alignment, Console, ProgressBar, SharedTheme, Table, Theme, WriteOptions, DEFAULT_THEME,
};

use ui::palette::{code, FG_CYAN, STOP};

/// Short self-description printed by interactive programs.
pub trait Help {
    const NAME: &'static str;
    const SUMMARY: &'static str;

    /// Type name in cyan, then a newline and the summary.
    fn help() -> String {
        format!("{}{}{STOP}\n{}", code(FG_CYAN), Self::NAME, Self::SUMMARY)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
