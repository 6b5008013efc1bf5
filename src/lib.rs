//! Procedural renderer for the memo + calendar app icon.
//!
//! [`icon_gen::render_icon`] composes the icon in memory and
//! [`icon_gen::generate_app_icon`] writes it to disk.

pub mod glyphs;
pub mod icon_gen;
pub mod palette;
pub mod shapes;
