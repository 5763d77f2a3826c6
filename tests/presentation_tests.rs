use std::time::Duration;

use stylekit::ui::palette::{code, BOLD, STOP};
use stylekit::{
    Alignment, Console, ProgressBar, SharedTheme, Table, Theme, ThemeConfig, UiError,
    WriteOptions, DEFAULT_THEME,
};

#[test]
fn one_theme_drives_console_and_progress_bar() {
    let theme = SharedTheme::new(Theme::default());
    let mut console =
        Console::new("Report", theme.clone(), Vec::new(), std::io::empty()).with_width(0);
    let mut bar = ProgressBar::with_writer(2, theme.clone(), Vec::new())
        .with_symbol(".")
        .with_delay(Duration::ZERO);

    theme.update(|t| t.set_info("<i>"));

    console
        .write("ready", &WriteOptions::styled("info").with_end(""))
        .expect("write");
    bar.run("info").expect("run");

    assert_eq!(String::from_utf8(console.into_writer()).expect("utf8"), "<i>ready");
    assert_eq!(
        String::from_utf8(bar.into_writer()).expect("utf8"),
        format!("<i>.{STOP}<i>.{STOP}")
    );
}

#[test]
fn centered_console_line_has_terminal_width() {
    let mut console =
        Console::new("Report", SharedTheme::default(), Vec::new(), std::io::empty()).with_width(40);
    let options = WriteOptions::default()
        .with_alignment(Alignment::Center)
        .with_end("\n");
    console.write("status", &options).expect("write");

    let rendered = String::from_utf8(console.into_writer()).expect("utf8");
    let line = rendered.trim_end_matches('\n');
    assert_eq!(line.chars().count(), 40);
    // style code + "status" is 10 chars, so 15 spaces precede it.
    assert_eq!(line.find('\x1b'), Some(15));
}

#[test]
fn alignment_tokens_surface_as_errors() {
    let err: UiError = "diagonal"
        .parse::<Alignment>()
        .expect_err("should fail")
        .into();
    assert_eq!(err.to_string(), "invalid alignment: diagonal");
}

#[test]
fn table_end_to_end() {
    let mut table: Table<String> = Table::new(2);
    table.add_row(["a".to_owned(), "b".to_owned()]);
    table.add_row(["x".to_owned()]);

    assert_eq!(table.get_table(), "| a | b |\n| x |  |\n");

    table.add_column("-".to_owned());
    table.del_row(0).expect("delete row");
    assert_eq!(table.get_table(), "| x |  | - |\n");
}

#[test]
fn theme_file_feeds_a_console() {
    let theme = ThemeConfig::from_toml_str("[styles]\nheading = \"bold\"\n")
        .expect("parse")
        .into_theme();
    let mut console =
        Console::new("Report", theme.into(), Vec::new(), std::io::empty()).with_width(0);
    console
        .write("Totals", &WriteOptions::styled("heading").with_end(STOP))
        .expect("write");

    assert_eq!(
        String::from_utf8(console.into_writer()).expect("utf8"),
        format!("{}Totals{STOP}", code(BOLD))
    );
    assert_eq!(DEFAULT_THEME.get_style("bold").expect("bold"), code(BOLD));
}
