//! Values exchanged at the provider boundary.

use serde::{Deserialize, Serialize};

/// Resource type of a Coralogix alert.
pub const ALERT_RESOURCE_TYPE: &str = "coralogix_alert";

/// A resource adopted by an import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedResource {
    /// The resource type.
    pub resource_type: String,
    /// The resource state, as `read` would return it.
    pub state: serde_json::Value,
}

impl ImportedResource {
    /// Create a new imported resource.
    pub fn new(resource_type: impl Into<String>, state: serde_json::Value) -> Self {
        Self {
            resource_type: resource_type.into(),
            state,
        }
    }
}

/// What a provider serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProviderMetadata {
    /// Resource type names.
    pub resources: Vec<String>,
    /// Data source type names.
    pub data_sources: Vec<String>,
}

impl ProviderMetadata {
    /// Whether `resource_type` is served.
    pub fn serves(&self, resource_type: &str) -> bool {
        self.resources.iter().any(|r| r == resource_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_imported_resource() {
        let imported = ImportedResource::new(ALERT_RESOURCE_TYPE, json!({"id": "a-1"}));
        assert_eq!(imported.resource_type, "coralogix_alert");
        assert_eq!(imported.state["id"], "a-1");
    }

    #[test]
    fn test_metadata_serves() {
        let metadata = ProviderMetadata {
            resources: vec![ALERT_RESOURCE_TYPE.to_string()],
            data_sources: vec![],
        };
        assert!(metadata.serves("coralogix_alert"));
        assert!(!metadata.serves("coralogix_dashboard"));
    }
}
