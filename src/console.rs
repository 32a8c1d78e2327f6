/// Console output helpers.
use crossterm::{
    queue,
    style::{self, Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

const NAME: &str = env!("CARGO_PKG_NAME");

/// Writes each line followed by a newline and flushes.
pub fn echo_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        queue!(out, Print(line), Print("\n"))?;
    }
    out.flush()
}

pub fn echo_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    queue!(out, Print(line), Print("\n"))?;
    out.flush()
}

/// Echoes an error message in red.
pub fn echo_error<W: Write>(out: &mut W, s: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::Red),
        Print(s),
        ResetColor,
        Print("\n")
    )?;
    out.flush()
}

pub fn print_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        style::SetAttribute(style::Attribute::Bold),
        SetForegroundColor(Color::Green),
        Print(format!("{}> ", NAME)),
        style::SetAttribute(style::Attribute::Reset),
    )?;
    out.flush()
}
