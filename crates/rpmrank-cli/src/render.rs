use std::fmt::Display;
use std::io::{stderr, IsTerminal};

use anstyle::{AnsiColor, Effects, Style};

fn ok_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::Green.into()))
        .effects(Effects::BOLD)
}

fn error_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::Red.into()))
        .effects(Effects::BOLD)
}

fn colorize(style: Style, text: &str) -> String {
    if stderr().is_terminal() {
        format!("{}{}{}", style.render(), text, style.render_reset())
    } else {
        text.to_string()
    }
}

fn status(label: &str, message: impl Display, style: Style) {
    let padded = format!("{label:>12}");
    eprintln!("{} {}", colorize(style, &padded), message);
}

pub fn ok(label: &str, message: impl Display) {
    status(label, message, ok_style());
}

pub fn error(label: &str, message: impl Display) {
    status(label, message, error_style());
}
