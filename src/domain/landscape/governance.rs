//! Governance artifacts: personas, user stories and capabilities.

use serde::{Deserialize, Serialize};

/// Literal left behind by governance templates when no taxonomy node was chosen.
pub const TAXONOMY_NODE_PLACEHOLDER: &str = "taxonomy_node";

/// A user archetype the landscape is built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub persona_type: String,
    /// Capability ids this persona typically exercises.
    #[serde(default)]
    pub typical_capabilities: Vec<String>,
}

impl Persona {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            persona_type: String::new(),
            typical_capabilities: Vec::new(),
        }
    }

    pub fn with_typical_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.typical_capabilities = capabilities.into_iter().map(Into::into).collect();
        self
    }
}

/// A user story tying a persona to the capabilities it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStory {
    pub id: String,
    pub title: String,
    /// Persona id.
    #[serde(default)]
    pub persona: String,
    /// Capability ids, at least one expected.
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub status: String,
}

impl UserStory {
    pub fn new(id: impl Into<String>, title: impl Into<String>, persona: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            persona: persona.into(),
            capabilities: Vec::new(),
            status: String::new(),
        }
    }

    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities = capabilities.into_iter().map(Into::into).collect();
        self
    }
}

/// A governance-tracked unit of system functionality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: String,
    /// Name of the taxonomy node this capability lives under.
    #[serde(default)]
    pub taxonomy_node: Option<String>,
    #[serde(default)]
    pub road_count: u32,
    #[serde(default)]
    pub story_count: u32,
}

impl Capability {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: String::new(),
            taxonomy_node: None,
            road_count: 0,
            story_count: 0,
        }
    }

    pub fn with_taxonomy_node(mut self, node: impl Into<String>) -> Self {
        self.taxonomy_node = Some(node.into());
        self
    }

    pub fn with_counts(mut self, road_count: u32, story_count: u32) -> Self {
        self.road_count = road_count;
        self.story_count = story_count;
        self
    }

    /// Returns the taxonomy node name when it is actually set.
    ///
    /// Empty strings and the template placeholder count as unset.
    pub fn taxonomy_node_ref(&self) -> Option<&str> {
        self.taxonomy_node
            .as_deref()
            .filter(|node| !node.is_empty() && *node != TAXONOMY_NODE_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_node_ref_returns_real_node() {
        let cap = Capability::new("CAP-001", "Billing").with_taxonomy_node("billing-svc");
        assert_eq!(cap.taxonomy_node_ref(), Some("billing-svc"));
    }

    #[test]
    fn taxonomy_node_ref_treats_placeholder_and_empty_as_unset() {
        let placeholder = Capability::new("CAP-001", "Billing").with_taxonomy_node("taxonomy_node");
        let empty = Capability::new("CAP-002", "Search").with_taxonomy_node("");
        let absent = Capability::new("CAP-003", "Audit");

        assert_eq!(placeholder.taxonomy_node_ref(), None);
        assert_eq!(empty.taxonomy_node_ref(), None);
        assert_eq!(absent.taxonomy_node_ref(), None);
    }

    #[test]
    fn persona_deserializes_type_field() {
        let json = r#"{"id":"PER-001","name":"Operator","type":"primary"}"#;
        let persona: Persona = serde_json::from_str(json).unwrap();
        assert_eq!(persona.persona_type, "primary");
        assert!(persona.typical_capabilities.is_empty());
    }

    #[test]
    fn user_story_deserializes_with_missing_collections() {
        let json = r#"{"id":"US-001","title":"Pay invoice","persona":"PER-001"}"#;
        let story: UserStory = serde_json::from_str(json).unwrap();
        assert!(story.capabilities.is_empty());
        assert_eq!(story.status, "");
    }

    #[test]
    fn capability_deserializes_camel_case_counts() {
        let json = r#"{"id":"CAP-1","title":"Billing","roadCount":2,"storyCount":5,"taxonomyNode":"billing"}"#;
        let cap: Capability = serde_json::from_str(json).unwrap();
        assert_eq!(cap.road_count, 2);
        assert_eq!(cap.story_count, 5);
        assert_eq!(cap.taxonomy_node_ref(), Some("billing"));
    }
}
