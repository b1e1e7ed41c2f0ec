//! CLI argument parsing and command handling.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

/// Output format for `convert`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `LABEL value` line per format
    #[default]
    Text,
    /// YAML mapping
    Yaml,
    /// JSON object
    Json,
}

/// Box-shadow direction pad and color format converter.
#[derive(Parser, Debug)]
#[command(name = "swatchpad")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Launch the interactive TUI (same as the `interactive` subcommand)
    #[arg(short, long)]
    pub interactive: bool,

    /// Load configuration from TOML file (default: ./swatchpad.toml if present)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path for the TUI (default: swatchpad.log)
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a color in every format (HEX, RGB, HSL, HSV, CMYK, LAB)
    Convert {
        /// Color as 6 hex digits, with or without '#'
        color: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print a box-shadow declaration
    Shadow(ShadowArgs),

    /// Map a pointer position on the direction pad to a shadow offset
    Offset {
        /// Pointer x relative to the pad's left edge (or offset x with --inverse)
        #[arg(allow_negative_numbers = true)]
        x: f64,

        /// Pointer y relative to the pad's top edge (or offset y with --inverse)
        #[arg(allow_negative_numbers = true)]
        y: f64,

        /// Map an offset back to the handle's top-left position instead
        #[arg(long)]
        inverse: bool,

        /// Pad size in pixels (square)
        #[arg(long)]
        size: Option<f64>,

        /// Handle diameter in pixels
        #[arg(long)]
        handle: Option<f64>,

        /// Largest offset on either axis
        #[arg(long)]
        max_offset: Option<i32>,
    },

    /// Launch the interactive TUI
    Interactive,
}

/// Shadow values given on the command line; unset ones come from config.
#[derive(Args, Debug, Clone, Default, Serialize)]
pub struct ShadowArgs {
    /// Horizontal offset in pixels
    #[arg(long, allow_negative_numbers = true)]
    #[serde(rename = "offset_x", skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,

    /// Vertical offset in pixels
    #[arg(long, allow_negative_numbers = true)]
    #[serde(rename = "offset_y", skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,

    /// Blur radius in pixels (0-50)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<i32>,

    /// Spread radius in pixels (-20-20)
    #[arg(long, allow_negative_numbers = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread: Option<i32>,

    /// Shadow color in any CSS format (hex, rgb(), hsl(), named)
    #[arg(
        long,
        value_parser = |s: &str| s.parse::<csscolorparser::Color>().map(|_| s.to_string()).map_err(|e| e.to_string())
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Pad overrides given on the command line.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PadOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_offset: Option<i32>,
}

/// Partial, TOML-shaped config holding only values set on the CLI.
///
/// Fields left `None` are skipped when serialized, so figment keeps the
/// values from lower layers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowArgs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad: Option<PadOverrides>,
}

impl Cli {
    /// Whether the TUI should be launched.
    pub fn wants_interactive(&self) -> bool {
        self.interactive || matches!(self.command, Some(Command::Interactive))
    }

    /// Convert subcommand flags into config overrides for figment merging.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        match &self.command {
            Some(Command::Shadow(args)) => ConfigOverrides {
                shadow: Some(args.clone()),
                pad: None,
            },
            Some(Command::Offset {
                size,
                handle,
                max_offset,
                ..
            }) => ConfigOverrides {
                shadow: None,
                pad: Some(PadOverrides {
                    width: *size,
                    height: *size,
                    handle: *handle,
                    max_offset: *max_offset,
                }),
            },
            _ => ConfigOverrides::default(),
        }
    }
}
