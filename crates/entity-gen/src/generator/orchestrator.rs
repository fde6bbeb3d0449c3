//! Orchestration for the metadata to Rust binding pipeline.
//!
//! The `Orchestrator` selects entities from a metadata document, runs the class builder over each of
//! them with one shared lookup cache, builds the `ServiceContext` aggregate, and formats every
//! generated file.
//!
//! ## Usage
//!
//! ```no_run
//! use entity_gen::generator::{codegen::Visibility, orchestrator::Orchestrator};
//!
//! # fn example(document: entity_gen::metadata::MetadataDocument) -> anyhow::Result<()> {
//! let orchestrator = Orchestrator::new(&document, Visibility::Public, None);
//! let output = orchestrator.generate_with_header("metadata.json")?;
//!
//! println!("Generated {} entities with {} warnings", output.stats.entities_generated, output.stats.warnings.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use indexmap::IndexSet;
use itertools::Itertools;
use proc_macro2::TokenStream;

use crate::{
  generator::{
    ast::EntityClassDef,
    codegen::{
      Visibility, context::ContextGenerator, entities::EntityGenerator, enums::EnumModuleGenerator, format_tokens,
      mod_file::ModFileGenerator,
    },
    converter::{ClassBuilder, EntityBuild, assign_module_names, build_context},
    metrics::GenerationStats,
  },
  metadata::{MetadataCache, MetadataDocument, SchemaError, SchemaObject},
};

const ROOT_MODULE_FILE: &str = "mod.rs";
const CONTEXT_FILE: &str = "service_context.rs";
const ENTITY_DIR: &str = "entity";
const ENUM_DIR: &str = "enums";

/// One formatted output file, with a path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub path: PathBuf,
  pub code: String,
}

impl GeneratedFile {
  fn format(path: impl Into<PathBuf>, tokens: TokenStream) -> anyhow::Result<Self> {
    Ok(Self {
      path: path.into(),
      code: format_tokens(tokens)?,
    })
  }

  fn with_header(mut self, header: &str) -> Self {
    self.code = format!("{header}\n{}", self.code);
    self
  }
}

#[derive(Debug)]
pub struct GeneratedOutput {
  pub files: Vec<GeneratedFile>,
  pub stats: GenerationStats,
}

/// High-level driver for binding generation.
pub struct Orchestrator<'a> {
  document: &'a MetadataDocument,
  visibility: Visibility,
  selection: Option<IndexSet<String>>,
}

impl<'a> Orchestrator<'a> {
  /// Creates an orchestrator over `document`.
  ///
  /// `entities` restricts generation to the named logical names; `None` generates every entity of the
  /// document.
  pub fn new(document: &'a MetadataDocument, visibility: Visibility, entities: Option<&[String]>) -> Self {
    Self {
      document,
      visibility,
      selection: entities.map(|names| names.iter().cloned().collect()),
    }
  }

  /// Entities to generate, ordered by logical name, each checked for its primary attributes.
  ///
  /// # Errors
  ///
  /// Returns an error if a requested entity is absent from the document or an entity lacks its
  /// primary id or primary name attribute.
  pub fn selected_entities(&self) -> Result<Vec<&'a SchemaObject>, SchemaError> {
    let entities: Vec<&SchemaObject> = match &self.selection {
      Some(names) => names
        .iter()
        .map(|name| {
          self
            .document
            .entity(name)
            .ok_or_else(|| SchemaError::EntityNotFound(name.clone()))
        })
        .collect::<Result<_, _>>()?,
      None => self.document.entities.iter().collect(),
    };

    let entities: Vec<&SchemaObject> = entities
      .into_iter()
      .sorted_by(|a, b| a.logical_name.cmp(&b.logical_name))
      .dedup_by(|a, b| a.logical_name == b.logical_name)
      .collect();

    for entity in &entities {
      entity.validate()?;
    }
    Ok(entities)
  }

  /// Generates every output file without headers.
  ///
  /// Files are ordered: root module, aggregate, entity module, enum module, then the entity and enum
  /// files of each entity by logical name. Each entity lives in a module named after its normalized
  /// logical name, suffixed when two entities would share one.
  ///
  /// # Errors
  ///
  /// Returns an error if entity selection fails or a generated file does not parse.
  pub fn generate(&self) -> anyhow::Result<GeneratedOutput> {
    let entities = self.selected_entities()?;
    let mut cache = MetadataCache::new(self.document);
    let mut stats = GenerationStats::default();

    let mut classes: Vec<EntityClassDef> = entities
      .into_iter()
      .map(|entity| {
        let EntityBuild { class, warnings } = ClassBuilder::new(entity, &mut cache).build();
        stats.record_entity(&class);
        stats.record_warnings(warnings);
        class
      })
      .collect();

    stats.lookup_fetches = cache.fetches();
    stats.record_warnings(assign_module_names(&mut classes));

    let (context, context_warnings) = build_context(&classes);
    stats.record_context(&context);
    stats.record_warnings(context_warnings);

    let modules = ModFileGenerator::new(&classes, self.visibility);
    let entity_dir = PathBuf::from(ENTITY_DIR);
    let enum_dir = entity_dir.join(ENUM_DIR);

    let mut files = vec![
      GeneratedFile::format(ROOT_MODULE_FILE, modules.root(&context))?,
      GeneratedFile::format(
        CONTEXT_FILE,
        ContextGenerator::new(&context, self.visibility).generate(),
      )?,
      GeneratedFile::format(entity_dir.join(ROOT_MODULE_FILE), modules.entity())?,
      GeneratedFile::format(enum_dir.join(ROOT_MODULE_FILE), modules.enums())?,
    ];

    for class in &classes {
      let file_name = format!("{}.rs", class.module_name);
      files.push(GeneratedFile::format(
        entity_dir.join(&file_name),
        EntityGenerator::new(class, self.visibility).generate(),
      )?);
      files.push(GeneratedFile::format(
        enum_dir.join(&file_name),
        EnumModuleGenerator::new(class, self.visibility).generate(),
      )?);
    }

    Ok(GeneratedOutput { files, stats })
  }

  /// Generates every output file, each prefixed with a header naming the tool and `source_path`.
  ///
  /// The header carries no timestamp, so identical input yields identical files.
  ///
  /// # Errors
  ///
  /// Returns the same errors as `generate()`.
  pub fn generate_with_header(&self, source_path: &str) -> anyhow::Result<GeneratedOutput> {
    let GeneratedOutput { files, stats } = self.generate()?;
    let header = file_header(source_path);
    let files = files.into_iter().map(|file| file.with_header(&header)).collect();
    Ok(GeneratedOutput { files, stats })
  }
}

fn file_header(source_path: &str) -> String {
  format!(
    r"//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Source: {source_path}
//! Generated by `entity-gen` v{}
",
    env!("CARGO_PKG_VERSION")
  )
}
