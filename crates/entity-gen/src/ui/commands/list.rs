use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::converter::{class_name, collection_name},
  metadata::MetadataDocument,
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::MetadataLoader,
};

/// One row of the entity listing.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EntitySummary {
  logical_name: String,
  class_name: String,
  collection_name: String,
  attribute_count: usize,
  type_code: Option<i32>,
}

fn summarize(document: &MetadataDocument) -> Vec<EntitySummary> {
  let mut summaries: Vec<EntitySummary> = document
    .entities
    .iter()
    .map(|entity| {
      let class_name = class_name(entity);
      EntitySummary {
        logical_name: entity.logical_name.clone(),
        collection_name: collection_name(entity, &class_name),
        class_name,
        attribute_count: entity.attributes.len(),
        type_code: entity.object_type_code,
      }
    })
    .collect();
  summaries.sort_by(|a, b| a.logical_name.cmp(&b.logical_name));
  summaries
}

pub async fn list_entities(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = MetadataLoader::open(input).await?.parse()?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in ["LOGICAL NAME", "CLASS", "COLLECTION", "ATTRIBUTES", "TYPE CODE"] {
    row.add_cell(Cell::new(header).fg(IntoComfyColor::into(colors.label())));
  }
  table.set_header(row);

  for summary in summarize(&document) {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(summary.logical_name)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(summary.class_name).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(Cell::new(summary.collection_name).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(
      Cell::new(summary.attribute_count)
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(
      Cell::new(summary.type_code.map_or_else(|| "-".to_string(), |code| code.to_string()))
        .fg(IntoComfyColor::into(colors.info()))
        .set_alignment(CellAlignment::Right),
    );
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
