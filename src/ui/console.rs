use std::io::{BufRead, Stdin, Stdout, Write};

use anstream::AutoStream;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::config::{stdout_stream, terminal_width, OutputMode};
use crate::error::{UiError, UiResult};
use crate::ui::align::{align_text, Alignment};
use crate::ui::palette::{code, BOLD, STOP, UNDERLINE};
use crate::ui::theme::{SharedTheme, DEFAULT};
use crate::Help;

/// Per-call settings for [`Console::write`] and [`Console::log`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub end: String,
    pub sep: String,
    pub style: String,
    pub alignment: Alignment,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            end: format!("{STOP}\n"),
            sep: " ".to_owned(),
            style: DEFAULT.to_owned(),
            alignment: Alignment::Left,
        }
    }
}

impl WriteOptions {
    pub fn styled(style: impl Into<String>) -> Self {
        Self::default().with_style(style)
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }

    pub fn with_sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Where [`Console::prompt`] reads its lines from.
pub trait LineSource {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Process stdin, locked only while a line is being read.
#[derive(Debug)]
pub struct StdinLines(Stdin);

impl StdinLines {
    pub fn new() -> Self {
        Self(std::io::stdin())
    }
}

impl Default for StdinLines {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinLines {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        self.0.read_line(buf)
    }
}

/// Titled text surface that styles output through a shared theme.
pub struct Console<W: Write, R: LineSource> {
    title: String,
    theme: SharedTheme,
    writer: W,
    reader: R,
    width: Option<usize>,
}

impl<W: Write, R: LineSource> Console<W, R> {
    /// Builds a console without writing anything; call
    /// [`print_title`](Self::print_title) to announce it.
    pub fn new(title: impl Into<String>, theme: SharedTheme, writer: W, reader: R) -> Self {
        Self {
            title: title.into(),
            theme,
            writer,
            reader,
            width: None,
        }
    }

    /// Aligns against a fixed width instead of querying the terminal.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn theme(&self) -> &SharedTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: SharedTheme) {
        self.theme = theme;
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn print_title(&mut self) -> UiResult<()> {
        let banner = format!("{}{}{}{STOP}", code(BOLD), code(UNDERLINE), self.title);
        self.write(
            &banner,
            &WriteOptions::default().with_alignment(Alignment::Center),
        )
    }

    pub fn clear(&mut self, print_title: bool) -> UiResult<()> {
        queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        self.writer.flush()?;
        if print_title {
            self.print_title()?;
        }
        Ok(())
    }

    pub fn write(&mut self, text: &str, options: &WriteOptions) -> UiResult<()> {
        let style = self.theme.get_style(&options.style)?;
        let width = self.width.unwrap_or_else(terminal_width);
        let line = align_text(&format!("{style}{text}"), options.alignment, width);
        write!(self.writer, "{line}{}", options.end)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn log(&mut self, text: &str, options: &WriteOptions) -> UiResult<()> {
        self.write(text, options)
    }

    /// Joins `parts` with `options.sep` and writes them as one text.
    pub fn write_parts(&mut self, parts: &[&str], options: &WriteOptions) -> UiResult<()> {
        self.write(&parts.join(&options.sep), options)
    }

    /// Writes `style + text + end`, then blocks for one line of input and
    /// returns it without its line terminator.
    pub fn prompt(&mut self, text: &str, end: &str, style: &str) -> UiResult<String> {
        let style = self.theme.get_style(style)?;
        write!(self.writer, "{style}{text}{end}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(UiError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

impl Console<AutoStream<Stdout>, StdinLines> {
    /// Console on the process's stdout and stdin. Color follows
    /// [`OutputMode::from_env`].
    pub fn stdio(title: impl Into<String>, theme: SharedTheme, print_title: bool) -> UiResult<Self> {
        Self::stdio_with_mode(title, theme, print_title, OutputMode::from_env())
    }

    pub fn stdio_with_mode(
        title: impl Into<String>,
        theme: SharedTheme,
        print_title: bool,
        mode: OutputMode,
    ) -> UiResult<Self> {
        let mut console = Self::new(title, theme, stdout_stream(mode), StdinLines::new());
        if print_title {
            console.print_title()?;
        }
        Ok(console)
    }
}

impl<W: Write, R: LineSource> Help for Console<W, R> {
    const NAME: &'static str = "Console";
    const SUMMARY: &'static str =
        "Console on which styled, aligned text can be printed and input can be taken.";
}

#[cfg(test)]
#[path = "../tests/console_tests.rs"]
mod tests;
