//! Netvalidate - network state compliance validation
//!
//! This is the main entry point for the netvalidate CLI.

mod cli;

use anyhow::{Context, Result};
use cli::Cli;
use colored::Colorize;
use netvalidate::{validate, PlatformFamily, State, ValidateConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    init_logging(cli.verbosity());

    if cli.no_color {
        colored::control::set_override(false);
    }

    let platform = PlatformFamily::from_alias(&cli.platform)
        .ok_or_else(|| netvalidate::Error::UnsupportedPlatform(cli.platform.clone()))?;

    let input = netvalidate::load_input_file(&cli.input)?;
    let cmd_output = load_cmd_output(&cli)?;

    let mut config = ValidateConfig::new(&cli.host, platform).with_groups(cli.groups.clone());
    if let Some(dir) = &cli.report_dir {
        config = config.with_report_dir(dir);
    }

    let envelope = validate(&config, &input, &cmd_output)?;

    if envelope.failed {
        println!("{}", format!("❌ {} is not compliant", cli.host).red().bold());
        println!("{}", serde_json::to_string_pretty(&envelope.report)?);
    } else {
        println!("{}", envelope.result.as_str().unwrap_or_default().green());
    }
    if !envelope.report_text.is_empty() {
        println!("{}", envelope.report_text);
    }

    std::process::exit(i32::from(envelope.failed));
}

/// Load the captured command-output JSON file into a command-keyed tree.
fn load_cmd_output(cli: &Cli) -> Result<State> {
    let text = std::fs::read_to_string(&cli.cmd_output).with_context(|| {
        format!(
            "Failed to read command output file: {}",
            cli.cmd_output.display()
        )
    })?;
    serde_json::from_str(&text).with_context(|| {
        format!(
            "Command output file is not a JSON object of command -> output: {}",
            cli.cmd_output.display()
        )
    })
}

/// Initialize logging based on verbosity level
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(verbosity >= 3))
        .with(env_filter)
        .init();
}
