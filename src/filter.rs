//! Line filter - copies input to output, colorizing status lines

use crate::color::{self, StatusColor};
use crate::error::Result;
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// What to do with each line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Wrap lines in the color of their status marker
    Colorize,
    /// Copy lines unchanged
    Passthrough,
}

/// Line counts for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub lines: usize,
    pub colorized: usize,
}

/// Filter `input` into `output` until end-of-stream, then flush.
///
/// Lines are raw bytes up to and including `\n`. A zero-length read is
/// end-of-stream; a bare `"\n"` is still a line.
pub fn run<R: BufRead, W: Write>(mode: Mode, input: R, output: W) -> Result<Stats> {
    run_with_table(mode, color::STATUS_COLORS, input, output)
}

pub fn run_with_table<R: BufRead, W: Write>(
    mode: Mode,
    table: &[StatusColor],
    mut input: R,
    mut output: W,
) -> Result<Stats> {
    let mut stats = Stats::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        stats.lines += 1;

        match mode {
            Mode::Colorize => {
                let out = color::colorize(&line, table);
                if matches!(out, Cow::Owned(_)) {
                    stats.colorized += 1;
                }
                output.write_all(&out)?;
            }
            Mode::Passthrough => output.write_all(&line)?,
        }
    }

    output.flush()?;
    Ok(stats)
}
