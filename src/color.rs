//! ANSI SGR codes per svn status marker
//! Codes are raw SGR parameters, so a marker can combine color with bold or a background

use std::borrow::Cow;

pub const ESC: &str = "\x1b[";
pub const RESET: &str = "\x1b[m";

/// A status marker and the SGR code its lines are wrapped in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusColor {
    pub marker: &'static str,
    pub code: &'static str,
}

const fn entry(marker: &'static str, code: &'static str) -> StatusColor {
    StatusColor { marker, code }
}

/// Marker table, searched in definition order. First match wins.
pub const STATUS_COLORS: &[StatusColor] = &[
    entry("M", "31"),    // red
    entry("?", "37"),    // grey
    entry("A", "32"),    // green
    entry("X", "33"),    // yellow
    entry("C", "30;41"), // black on red
    entry("-", "31"),    // red
    entry("D", "31;1"),  // bold red
    entry("+", "32"),    // green
];

/// First table entry whose marker prefixes `line`
#[must_use]
pub fn lookup<'t>(line: &[u8], table: &'t [StatusColor]) -> Option<&'t StatusColor> {
    table
        .iter()
        .find(|status| line.starts_with(status.marker.as_bytes()))
}

/// Wrap `line` in the color of its marker, or return it untouched.
///
/// The trailing newline stays inside the escape pair, so the reset is
/// emitted after it.
#[must_use]
pub fn colorize<'a>(line: &'a [u8], table: &[StatusColor]) -> Cow<'a, [u8]> {
    let Some(status) = lookup(line, table) else {
        return Cow::Borrowed(line);
    };

    let mut out =
        Vec::with_capacity(ESC.len() + status.code.len() + 1 + line.len() + RESET.len());
    out.extend_from_slice(ESC.as_bytes());
    out.extend_from_slice(status.code.as_bytes());
    out.push(b'm');
    out.extend_from_slice(line);
    out.extend_from_slice(RESET.as_bytes());
    Cow::Owned(out)
}
