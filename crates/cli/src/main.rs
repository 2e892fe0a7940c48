use std::process::ExitCode;

use anyhow::Result;
use buildinfo_lib::FormatOptions;
use buildinfo_lib::format::DEFAULT_INDENT;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

mod embedded;
mod output;

use output::{OutputFormat, print_error};

/// Exit status when the report cannot be rendered.
const EXIT_RENDER_FAILED: u8 = 2;

/// buildinfo - print the build provenance embedded in this binary
#[derive(Parser)]
#[command(name = "buildinfo")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Output format
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  format: OutputFormat,

  /// Prefix for each line in text format, or for the whole JSON document
  #[arg(long, default_value = "", allow_hyphen_values = true)]
  prefix: String,

  /// Indentation string for nested structures
  #[arg(long, default_value = DEFAULT_INDENT, allow_hyphen_values = true)]
  indent: String,

  /// Quote values in text format
  #[arg(long, default_value_t = true, action = ArgAction::Set)]
  quote: bool,

  /// Enable debug logging on stderr
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  init_logging(cli.verbose);

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&e.to_string());
      ExitCode::from(EXIT_RENDER_FAILED)
    }
  }
}

fn init_logging(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn run(cli: &Cli) -> Result<()> {
  let Some(record) = embedded::build_record() else {
    println!("No build info available.");
    return Ok(());
  };

  let options = FormatOptions {
    quote: cli.quote,
    prefix: cli.prefix.clone(),
    indent: cli.indent.clone(),
  };

  let report = match cli.format {
    OutputFormat::Text => options.render_text(&record),
    OutputFormat::Json => options.render_json(&record)?,
  };

  println!("{report}");
  Ok(())
}
