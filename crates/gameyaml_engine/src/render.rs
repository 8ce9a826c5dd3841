use crate::{CanonicalRecord, RenderError};

/// Serializes a record as a YAML document with keys in schema order.
pub fn render_yaml(record: &CanonicalRecord) -> Result<String, RenderError> {
    Ok(serde_yaml::to_string(record)?)
}
