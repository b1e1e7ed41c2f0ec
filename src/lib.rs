//! Box-shadow direction pad and color format converter.
//!
//! The two pieces with real computation are [`offset`] (pointer position to a
//! bounded shadow offset, and back) and [`convert`] (sRGB to HEX, HSL, HSV,
//! CMYK and L*a*b*). Everything else is state and presentation around them.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod convert;
pub mod formats;
pub mod logging;
pub mod offset;
pub mod picker;
pub mod shadow;
pub mod store;
pub mod tui;
