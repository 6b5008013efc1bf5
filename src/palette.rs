//! Icon colors
//!
//! Colors are written as CSS hex strings so they can be copied straight from
//! the design mockup. `#rrggbbaa` is used where a stroke is semi-transparent.

use anyhow::{anyhow, Result};
use image::Rgba;
use std::str::FromStr;

const GRADIENT_START: &str = "#6200EE";
const GRADIENT_END: &str = "#9C27B0";
const PAPER: &str = "#FFFFFF";
const FOLD: &str = "#E6E6F0";
const FOLD_SHADOW: &str = "#C8C8DC";
const TITLE_LINE: &str = "#A08CC8C8";
const BODY_LINE: &str = "#B4A0DCB4";
const HEADER: &str = "#7832C8";
const HOOK: &str = "#C8C8D2";
const DATE_DOT: &str = "#7832C8C8";
const HIGHLIGHT: &str = "#FF6464";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Top-left end of the background gradient
    pub gradient_start: Rgba<u8>,
    /// Bottom-right end of the background gradient
    pub gradient_end: Rgba<u8>,
    pub paper: Rgba<u8>,
    pub fold: Rgba<u8>,
    pub fold_shadow: Rgba<u8>,
    pub title_line: Rgba<u8>,
    pub body_line: Rgba<u8>,
    pub header: Rgba<u8>,
    pub hook: Rgba<u8>,
    pub date_dot: Rgba<u8>,
    /// "Today" marker in the calendar grid
    pub highlight: Rgba<u8>,
}

impl Palette {
    pub fn load() -> Result<Self> {
        Ok(Self {
            gradient_start: parse_color(GRADIENT_START)?,
            gradient_end: parse_color(GRADIENT_END)?,
            paper: parse_color(PAPER)?,
            fold: parse_color(FOLD)?,
            fold_shadow: parse_color(FOLD_SHADOW)?,
            title_line: parse_color(TITLE_LINE)?,
            body_line: parse_color(BODY_LINE)?,
            header: parse_color(HEADER)?,
            hook: parse_color(HOOK)?,
            date_dot: parse_color(DATE_DOT)?,
            highlight: parse_color(HIGHLIGHT)?,
        })
    }
}

/// Parse a CSS color string into 8-bit RGBA
pub fn parse_color(css: &str) -> Result<Rgba<u8>> {
    let color =
        css_color::Srgb::from_str(css).map_err(|_| anyhow!("Invalid CSS color: {css}"))?;

    Ok(Rgba([
        to_channel(color.red),
        to_channel(color.green),
        to_channel(color.blue),
        to_channel(color.alpha),
    ]))
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
