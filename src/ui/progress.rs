use std::io::{Stdout, Write};
use std::time::Duration;

use anstream::AutoStream;

use crate::config::{stdout_stream, OutputMode};
use crate::error::UiResult;
use crate::ui::palette::STOP;
use crate::ui::theme::SharedTheme;
use crate::Help;

pub const DEFAULT_SYMBOL: &str = "-";
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Blocking progress indicator: writes one styled symbol per step and sleeps
/// for `delay` between steps. Nothing is remembered between runs.
pub struct ProgressBar<W: Write = AutoStream<Stdout>> {
    values: usize,
    theme: SharedTheme,
    symbol: String,
    delay: Duration,
    writer: W,
}

impl ProgressBar<AutoStream<Stdout>> {
    /// Bar on stdout. Color follows [`OutputMode::from_env`].
    pub fn new(values: usize, theme: SharedTheme) -> Self {
        Self::with_mode(values, theme, OutputMode::from_env())
    }

    pub fn with_mode(values: usize, theme: SharedTheme, mode: OutputMode) -> Self {
        Self::with_writer(values, theme, stdout_stream(mode))
    }
}

impl<W: Write> ProgressBar<W> {
    pub fn with_writer(values: usize, theme: SharedTheme, writer: W) -> Self {
        Self {
            values,
            theme,
            symbol: DEFAULT_SYMBOL.to_owned(),
            delay: DEFAULT_DELAY,
            writer,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn values(&self) -> usize {
        self.values
    }

    pub fn set_values(&mut self, values: usize) {
        self.values = values;
    }

    pub fn theme(&self) -> &SharedTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: SharedTheme) {
        self.theme = theme;
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into();
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Runs every step from zero. The style is resolved before anything is
    /// written, so an unknown style fails even when `values` is zero.
    pub fn run(&mut self, style: &str) -> UiResult<()> {
        let code = self.theme.get_style(style)?;
        tracing::debug!(steps = self.values, delay = ?self.delay, "progress bar started");
        for step in 0..self.values {
            write!(self.writer, "{code}{}{STOP}", self.symbol)?;
            self.writer.flush()?;
            tracing::trace!(step, "progress step");
            std::thread::sleep(self.delay);
        }
        Ok(())
    }

    /// Runs once and consumes the bar.
    pub fn run_once(mut self, style: &str) -> UiResult<W> {
        self.run(style)?;
        Ok(self.writer)
    }
}

impl<W: Write> Help for ProgressBar<W> {
    const NAME: &'static str = "ProgressBar";
    const SUMMARY: &'static str = "Basic blocking progress bar that prints one symbol per step.";
}

#[cfg(test)]
#[path = "../tests/progress_tests.rs"]
mod tests;
