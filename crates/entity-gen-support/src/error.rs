#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
  #[error("failed to retrieve '{logical_name}' records: {message}")]
  Retrieve { logical_name: String, message: String },

  #[error("expected '{expected}' records, service returned '{actual}'")]
  LogicalNameMismatch { expected: String, actual: String },
}
