//! Named ANSI styles shared by themes and theme files.

use anstyle::{AnsiColor, Color, Style};

/// Reset sequence written after styled output.
pub const STOP: &str = "\x1b[0m";

/// Code stored under the `default` key of every theme.
pub const DEFAULT: &str = STOP;

pub const BOLD: Style = Style::new().bold();
pub const DIM: Style = Style::new().dimmed();
pub const ITALIC: Style = Style::new().italic();
pub const UNDERLINE: Style = Style::new().underline();
pub const BLINK: Style = Style::new().blink();
pub const INVERSE: Style = Style::new().invert();
pub const HIDDEN: Style = Style::new().hidden();
pub const STRIKETHROUGH: Style = Style::new().strikethrough();

pub const FG_BLACK: Style = fg(AnsiColor::Black);
pub const FG_RED: Style = fg(AnsiColor::Red);
pub const FG_GREEN: Style = fg(AnsiColor::Green);
pub const FG_YELLOW: Style = fg(AnsiColor::Yellow);
pub const FG_BLUE: Style = fg(AnsiColor::Blue);
pub const FG_MAGENTA: Style = fg(AnsiColor::Magenta);
pub const FG_CYAN: Style = fg(AnsiColor::Cyan);
pub const FG_WHITE: Style = fg(AnsiColor::White);

pub const BG_BLACK: Style = bg(AnsiColor::Black);
pub const BG_RED: Style = bg(AnsiColor::Red);
pub const BG_GREEN: Style = bg(AnsiColor::Green);
pub const BG_YELLOW: Style = bg(AnsiColor::Yellow);
pub const BG_BLUE: Style = bg(AnsiColor::Blue);
pub const BG_MAGENTA: Style = bg(AnsiColor::Magenta);
pub const BG_CYAN: Style = bg(AnsiColor::Cyan);
pub const BG_WHITE: Style = bg(AnsiColor::White);

const NAMED: &[(&str, Style)] = &[
    ("bold", BOLD),
    ("dim", DIM),
    ("italic", ITALIC),
    ("underline", UNDERLINE),
    ("blink", BLINK),
    ("inverse", INVERSE),
    ("hidden", HIDDEN),
    ("strikethrough", STRIKETHROUGH),
    ("fg_black", FG_BLACK),
    ("fg_red", FG_RED),
    ("fg_green", FG_GREEN),
    ("fg_yellow", FG_YELLOW),
    ("fg_blue", FG_BLUE),
    ("fg_magenta", FG_MAGENTA),
    ("fg_cyan", FG_CYAN),
    ("fg_white", FG_WHITE),
    ("bg_black", BG_BLACK),
    ("bg_red", BG_RED),
    ("bg_green", BG_GREEN),
    ("bg_yellow", BG_YELLOW),
    ("bg_blue", BG_BLUE),
    ("bg_magenta", BG_MAGENTA),
    ("bg_cyan", BG_CYAN),
    ("bg_white", BG_WHITE),
];

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

const fn bg(color: AnsiColor) -> Style {
    Style::new().bg_color(Some(Color::Ansi(color)))
}

/// Escape sequence that switches the terminal into `style`.
pub fn code(style: Style) -> String {
    style.render().to_string()
}

/// Palette entry registered under `name`, if any.
pub fn lookup(name: &str) -> Option<Style> {
    NAMED
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, style)| *style)
}
