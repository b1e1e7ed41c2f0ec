//! CLI entry point for swatchpad.

use std::io;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};

use swatchpad::cli::{Cli, Command, OutputFormat};
use swatchpad::config::AppConfig;
use swatchpad::convert::parse_hex;
use swatchpad::formats::ColorFormats;
use swatchpad::offset::Offset;
use swatchpad::tui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "swatchpad", &mut io::stdout());
        return Ok(());
    }

    let config = AppConfig::layered(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    if cli.wants_interactive() {
        return tui::run(&cli, config);
    }

    match &cli.command {
        Some(Command::Convert { color, format }) => {
            let rgb = parse_hex(color).ok_or_else(|| eyre!("Invalid hex color '{}'", color))?;
            let formats = ColorFormats::from_rgb(rgb);

            let output = match format {
                OutputFormat::Text => formats.to_text(),
                OutputFormat::Yaml => serde_yaml::to_string(&formats)
                    .wrap_err("Failed to serialize formats to YAML")?,
                OutputFormat::Json => {
                    let mut json = serde_json::to_string_pretty(&formats)
                        .wrap_err("Failed to serialize formats to JSON")?;
                    json.push('\n');
                    json
                }
            };
            print!("{output}");
        }
        Some(Command::Shadow(_)) => {
            println!("{}", config.initial_shadow().declaration());
        }
        Some(Command::Offset { x, y, inverse, .. }) => {
            let pad = config.pad;
            if *inverse {
                let offset = Offset::new(x.round() as i32, y.round() as i32);
                let (left, top) = pad.handle_origin(offset);
                println!("left={left:.2} top={top:.2}");
            } else {
                let offset = pad.offset_at(*x, *y);
                println!("x={} y={}", offset.x, offset.y);
            }
        }
        Some(Command::Interactive) => unreachable!("handled above"),
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
