//! XKCD colour names for plotting
//!
//! Colours are read from a text file with one `<name> #rrggbb` entry per
//! line. The default file orders them so the most widely recognised names
//! (as ranked by the XKCD colour survey) come first. Lines that don't carry
//! a hex value are ignored.

use palette::Srgb;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::{KitError, Result};

/// Default colour definition file
pub const DEFAULT_COLOUR_FILE: &str = "bgr.txt";

/// Channel value below which a colour is considered "near black"
pub const BLACK_THRESHOLD: u8 = 10;

/// One parsed entry of the colour file
#[derive(Debug, Clone, PartialEq)]
pub struct XkcdColour {
    pub name: String,
    pub rgb: Srgb<u8>,
}

impl XkcdColour {
    /// Parse a line of the form `<name> #rrggbb`.
    ///
    /// The name is everything before the first run of whitespace followed by `#`.
    /// Returns `None` if there is no such delimiter or the value isn't six hex digits.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (name, rest) = split_at_hash(line)?;

        // Anything after a further delimiter is ignored
        let token = match split_at_hash(rest) {
            Some((token, _)) => token,
            None => rest,
        };
        let token = token.trim();

        if token.len() != 6 || !token.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let rgb = token.parse::<Srgb<u8>>().ok()?;

        Some(Self {
            name: name.to_string(),
            rgb,
        })
    }

    /// Identifier understood by plotting libraries, e.g. `xkcd:red`
    pub fn identifier(&self) -> String {
        format!("xkcd:{}", self.name)
    }
}

/// Split at the first `#` that follows whitespace, returning the text
/// before the whitespace run and the text after the `#`
fn split_at_hash(text: &str) -> Option<(&str, &str)> {
    let mut prev_was_space = false;
    for (idx, c) in text.char_indices() {
        if c == '#' && prev_was_space {
            return Some((text[..idx].trim_end(), &text[idx + 1..]));
        }
        prev_was_space = c.is_whitespace();
    }
    None
}

/// Filter that accepts every colour
pub fn any_colour(_r: u8, _g: u8, _b: u8) -> bool {
    true
}

/// Determines if a colour is near black based on [`BLACK_THRESHOLD`]
///
/// A colour is considered near black if all RGB values are below the threshold
pub fn is_near_black(r: u8, g: u8, b: u8) -> bool {
    r < BLACK_THRESHOLD && g < BLACK_THRESHOLD && b < BLACK_THRESHOLD
}

/// Lazy sequence of colour identifiers read from a colour file.
///
/// Reads the file one line at a time and can only be consumed once.
pub struct XkcdColours<F> {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    filter: F,
}

impl<F> Iterator for XkcdColours<F>
where
    F: FnMut(u8, u8, u8) -> bool,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(KitError::io(&self.path, e))),
            };

            let Some(colour) = XkcdColour::parse(&line) else {
                continue;
            };

            let (r, g, b) = colour.rgb.into_components();
            if (self.filter)(r, g, b) {
                return Some(Ok(colour.identifier()));
            }
        }
        None
    }
}

/// Generate XKCD colour identifiers from `file_name`, in file order,
/// keeping only those whose RGB values pass `filter`.
///
/// # Arguments
/// * `file_name` - Where the colours live, usually [`DEFAULT_COLOUR_FILE`]
/// * `filter` - Allows excluding colours based on RGB values; pass [`any_colour`] to keep all
///
/// # Returns
/// * `Ok(XkcdColours)` iterator over `xkcd:<name>` strings
/// * `Err(KitError::Io)` if the file can't be opened
pub fn generate_xkcd_colours<F>(file_name: impl AsRef<Path>, filter: F) -> Result<XkcdColours<F>>
where
    F: FnMut(u8, u8, u8) -> bool,
{
    let path = file_name.as_ref().to_path_buf();
    let file = File::open(&path).map_err(|e| KitError::io(&path, e))?;

    Ok(XkcdColours {
        path,
        lines: BufReader::new(file).lines(),
        filter,
    })
}

/// Create a list of the first `n` XKCD colours that pass `filter`.
///
/// Fails with [`KitError::Exhausted`] if the file has fewer qualifying colours.
pub fn create_xkcd_colours<F>(n: usize, file_name: impl AsRef<Path>, filter: F) -> Result<Vec<String>>
where
    F: FnMut(u8, u8, u8) -> bool,
{
    let mut colours = Vec::new();
    for colour in generate_xkcd_colours(file_name, filter)?.take(n) {
        colours.push(colour?);
    }

    if colours.len() < n {
        return Err(KitError::Exhausted {
            requested: n,
            available: colours.len(),
        });
    }

    Ok(colours)
}
