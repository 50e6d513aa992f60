//! Configuration for conversions and operator construction

use crate::error::{GraphError, GraphResult};
use crate::matrix::SparseFormat;
use serde::{Deserialize, Serialize};

/// Attribute name written by `to_attributed_graph`
pub const DEFAULT_VALUE_ATTRIBUTE: &str = "value";

/// Library-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphArrayConfig {
    /// Node/edge attribute receiving array values on graph export
    pub value_attribute: String,
    /// Storage scheme for operators built with `with_config`
    pub sparse_format: SparseFormat,
}

impl Default for GraphArrayConfig {
    fn default() -> Self {
        Self {
            value_attribute: DEFAULT_VALUE_ATTRIBUTE.to_string(),
            sparse_format: SparseFormat::default(),
        }
    }
}

impl GraphArrayConfig {
    /// Parse a JSON object; missing fields take their defaults
    pub fn from_json_str(s: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(s)
            .map_err(|e| GraphError::InvalidArgument(format!("invalid configuration: {}", e)))?;
        if config.value_attribute.is_empty() {
            return Err(GraphError::InvalidArgument(
                "value_attribute must not be empty".to_string(),
            ));
        }
        Ok(config)
    }
}
