use serde::{Deserialize, Serialize};

/// A node in the system/subsystem/stack/layer hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyNode {
    /// Join key used by capabilities and bounded contexts.
    pub name: String,
    /// Fully-qualified dotted path, e.g. `platform.billing.api`.
    #[serde(default)]
    pub fqtn: String,
    #[serde(default)]
    pub node_type: String,
}

impl TaxonomyNode {
    pub fn new(
        name: impl Into<String>,
        fqtn: impl Into<String>,
        node_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            fqtn: fqtn.into(),
            node_type: node_type.into(),
        }
    }
}
