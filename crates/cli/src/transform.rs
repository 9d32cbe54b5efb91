//! Line transformer: upper-case (`fast`) or sort (`safe`) the input lines.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Upper-case every line
    #[default]
    Fast,
    /// Sort lines in byte order
    Safe,
}

/// Read lines from `path`, or from stdin when no path is given.
pub fn load_lines(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(p) => {
            let file = File::open(p).with_context(|| format!("opening {}", p.display()))?;
            read_lines(file).with_context(|| format!("reading {}", p.display()))
        }
        None => read_lines(io::stdin().lock()).context("reading stdin"),
    }
}

pub fn read_lines<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text.lines().map(str::to_owned).collect())
}

pub fn apply(mut lines: Vec<String>, mode: Mode) -> Vec<String> {
    match mode {
        Mode::Fast => lines.iter().map(|s| s.to_uppercase()).collect(),
        Mode::Safe => {
            lines.sort();
            lines
        }
    }
}

pub fn format_output(lines: &[String]) -> String {
    lines.join("\n")
}
