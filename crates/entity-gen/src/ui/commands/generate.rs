use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use inflections::Inflect;

use crate::{
  generator::{
    codegen::Visibility,
    metrics::GenerationStats,
    orchestrator::{GeneratedFile, Orchestrator},
  },
  metadata::MetadataDocument,
  ui::{Colors, GenerateCommand},
  utils::MetadataLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub namespace: Option<String>,
  pub entities: Option<Vec<String>>,
  pub skip_existing: bool,
  pub visibility: Visibility,
  pub verbose: bool,
  pub quiet: bool,
}

/// Outcome of writing the generated tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
  pub written: usize,
  pub skipped: usize,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      namespace,
      entities,
      skip_existing,
      visibility,
      verbose,
      quiet,
    } = command;

    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet cannot be combined");
    }
    if let Some(namespace) = &namespace
      && namespace_dir(namespace).as_os_str().is_empty()
    {
      anyhow::bail!("Namespace '{namespace}' has no usable segment");
    }

    Ok(Self {
      input,
      output,
      namespace,
      entities: entities.filter(|names| !names.is_empty()),
      skip_existing,
      visibility,
      verbose,
      quiet,
    })
  }

  /// Root directory of the generated tree: the output directory, nested by namespace.
  pub fn output_dir(&self) -> PathBuf {
    match &self.namespace {
      Some(namespace) => self.output.join(namespace_dir(namespace)),
      None => self.output.clone(),
    }
  }

  async fn load_document(&self) -> anyhow::Result<MetadataDocument> {
    MetadataLoader::open(&self.input).await?.parse()
  }

  fn create_orchestrator<'a>(&'a self, document: &'a MetadataDocument) -> Orchestrator<'a> {
    Orchestrator::new(document, self.visibility, self.entities.as_deref())
  }

  async fn write_files(&self, files: &[GeneratedFile]) -> anyhow::Result<WriteSummary> {
    let root = self.output_dir();
    let mut summary = WriteSummary::default();

    for file in files {
      let path = root.join(&file.path);
      if self.skip_existing && tokio::fs::try_exists(&path).await? {
        summary.skipped += 1;
        continue;
      }
      if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
      }
      tokio::fs::write(&path, &file.code).await?;
      summary.written += 1;
    }

    Ok(summary)
  }
}

/// `Contoso.Sales` becomes `contoso/sales`; empty segments are dropped.
fn namespace_dir(namespace: &str) -> PathBuf {
  namespace
    .split('.')
    .map(|segment| segment.trim().to_snake_case())
    .filter(|segment| !segment.is_empty())
    .collect()
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading metadata from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating Rust bindings...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Entities generated:", stats.entities_generated.to_string());
    self.stat("", format!("{} canonical members", stats.canonical_members));
    self.stat("", format!("{} friendly members", stats.friendly_members));
    if stats.suppressed_members > 0 {
      self.stat("", format!("{} suppressed members", stats.suppressed_members));
    }
    if stats.placeholders > 0 {
      self.stat("", format!("{} placeholders", stats.placeholders));
    }
    self.stat("Enums generated:", stats.enums_generated.to_string());
    self.stat("Collections generated:", stats.collections_generated.to_string());
    if self.config.verbose {
      self.stat("Lookup targets fetched:", stats.lookup_fetches.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      let should_print = warning.is_skipped_item() || self.config.verbose;
      if !should_print {
        continue;
      }

      if !printed_header {
        println!();
        printed_header = true;
      }

      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output_dir().display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self, summary: &WriteSummary) {
    if self.config.quiet {
      return;
    }
    self.stat("Files written:", summary.written.to_string());
    if summary.skipped > 0 {
      self.stat("Files skipped:", format!("{} (already exist)", summary.skipped));
    }
    println!();
    println!(
      "{} {}",
      format_timestamp().with(self.colors.timestamp()),
      "Successfully generated Rust bindings".with(self.colors.success())
    );
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_document().await?;

  logger.log_generating();
  let orchestrator = config.create_orchestrator(&document);
  let source_path = config.input.display().to_string();
  let output = orchestrator.generate_with_header(&source_path)?;
  logger.print_statistics(&output.stats);

  logger.log_writing();
  let summary = config.write_files(&output.files).await?;
  logger.log_success(&summary);
  Ok(())
}
