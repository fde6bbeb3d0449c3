use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::generator::codegen::Visibility;

#[derive(Parser, Debug)]
#[command(name = "entity-gen")]
#[command(author, version, about = "Entity metadata to Rust binding generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a metadata dump
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate Rust bindings from a metadata dump
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the JSON metadata dump
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory where the generated module tree will be written
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Namespace of the generated bindings; each dot-separated segment becomes a nested directory
  #[arg(long, value_name = "NAMESPACE")]
  pub namespace: Option<String>,

  /// Generate only these entities (comma-separated logical names)
  #[arg(long, value_name = "NAMES", value_delimiter = ',')]
  pub entities: Option<Vec<String>>,

  /// Leave files that already exist untouched
  #[arg(long, default_value_t = false)]
  pub skip_existing: bool,

  /// Visibility level for generated types and members (public, crate, or file)
  #[arg(long, value_name = "VISIBILITY", default_value = "public")]
  pub visibility: Visibility,

  /// Enable verbose output, including every warning
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every entity in the metadata dump with its generated names
  Entities {
    /// Path to the JSON metadata dump
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
