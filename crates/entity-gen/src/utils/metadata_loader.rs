use std::path::Path;

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::metadata::MetadataDocument;

/// Memory-mapped metadata dump.
pub struct MetadataLoader {
  file: AsyncMmapFile,
}

impl MetadataLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("Unable to open metadata dump {}", path.display()))?;
    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<MetadataDocument> {
    parse_document(self.file.as_slice())
  }
}

/// Parses a JSON metadata dump, naming the path of the offending value on failure.
pub fn parse_document(bytes: &[u8]) -> anyhow::Result<MetadataDocument> {
  let mut deserializer = serde_json::Deserializer::from_slice(bytes);
  serde_path_to_error::deserialize(&mut deserializer)
    .map_err(|err| anyhow::anyhow!("Invalid metadata at '{}': {}", err.path(), err.inner()))
}
