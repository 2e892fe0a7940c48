//! CLI output formatting utilities.
//!
//! Report selection and the colored error line printed on failure.

use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

/// Rendering selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

pub mod symbols {
  pub const ERROR: &str = "✗";
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}
