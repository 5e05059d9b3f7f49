//! Registry of custom (user-defined) section and block types.
//!
//! Section and block instances share one `type` namespace, so a custom type
//! may not take any reserved name, section or block.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{SchemaError, SchemaResult};
use crate::fields::InputField;
use crate::schema::{BlockTarget, SchemaInstance, is_reserved_schema_type};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Section,
    Block,
}

/// Definition of a custom section or block type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTypeDefinition {
    /// Machine name used as the instance `type` (e.g. "acme-pricing").
    pub type_name: String,
    pub kind: SchemaKind,
    /// Human-readable label (e.g. "Pricing table").
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Editor fields describing the instance config.
    #[serde(default)]
    pub fields: Vec<InputField>,
    /// Where a block may be placed. Empty means anywhere.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<BlockTarget>,
}

impl CustomTypeDefinition {
    pub fn new(type_name: impl Into<String>, kind: SchemaKind, label: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            kind,
            label: label.into(),
            description: None,
            fields: Vec::new(),
            targets: Vec::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<InputField>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_targets(mut self, targets: Vec<BlockTarget>) -> Self {
        self.targets = targets;
        self
    }

    /// Whether instances of this type may be placed in `target`.
    pub fn allows_target(&self, target: BlockTarget) -> bool {
        self.targets.is_empty()
            || self
                .targets
                .iter()
                .any(|t| *t == BlockTarget::Any || *t == target)
    }
}

/// Custom type definitions, keyed by type name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomTypeRegistry {
    types: BTreeMap<String, CustomTypeDefinition>,
}

impl CustomTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition.
    ///
    /// Fails if the name is blank, reserved by the engine, or taken.
    pub fn register(&mut self, definition: CustomTypeDefinition) -> SchemaResult<()> {
        let name = definition.type_name.as_str();
        let rejection = if name.trim().is_empty() {
            Some(SchemaError::EmptyTypeName)
        } else if is_reserved_schema_type(name) {
            Some(SchemaError::ReservedTypeName(name.to_string()))
        } else if self.types.contains_key(name) {
            Some(SchemaError::DuplicateTypeName(name.to_string()))
        } else {
            None
        };

        if let Some(err) = rejection {
            warn!(type_name = name, kind = ?definition.kind, error = %err, "rejected custom type");
            return Err(err);
        }

        debug!(type_name = name, kind = ?definition.kind, "registered custom type");
        self.types.insert(definition.type_name.clone(), definition);
        Ok(())
    }

    /// Remove a definition, returning it if it was registered.
    pub fn unregister(&mut self, type_name: &str) -> Option<CustomTypeDefinition> {
        self.types.remove(type_name)
    }

    pub fn get(&self, type_name: &str) -> Option<&CustomTypeDefinition> {
        self.types.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    /// Definitions of one kind, sorted by type name.
    pub fn of_kind(&self, kind: SchemaKind) -> impl Iterator<Item = &CustomTypeDefinition> {
        self.types.values().filter(move |d| d.kind == kind)
    }

    /// Whether `type_name` is reserved or registered.
    pub fn is_known(&self, type_name: &str) -> bool {
        is_reserved_schema_type(type_name) || self.contains(type_name)
    }

    /// Instances whose type is neither reserved nor registered.
    pub fn unknown_instances<'a>(&self, instances: &'a [SchemaInstance]) -> Vec<&'a SchemaInstance> {
        instances
            .iter()
            .filter(|i| !self.is_known(&i.schema_type))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn section(name: &str) -> CustomTypeDefinition {
        CustomTypeDefinition::new(name, SchemaKind::Section, name)
    }

    fn block(name: &str) -> CustomTypeDefinition {
        CustomTypeDefinition::new(name, SchemaKind::Block, name)
    }

    #[test]
    fn register_and_look_up() {
        let mut registry = CustomTypeRegistry::new();
        assert!(registry.is_empty());
        registry.register(section("custom-testimonials")).unwrap();
        registry.register(block("acme-badge")).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("acme-badge"));
        assert_eq!(registry.get("custom-testimonials").unwrap().kind, SchemaKind::Section);
        assert_eq!(registry.type_names(), vec!["acme-badge", "custom-testimonials"]);
        assert_eq!(registry.of_kind(SchemaKind::Block).count(), 1);
    }

    #[test]
    fn reserved_names_are_rejected_for_either_kind() {
        let mut registry = CustomTypeRegistry::new();
        let err = registry.register(block("hero-banner")).unwrap_err();
        assert!(matches!(err, SchemaError::ReservedTypeName(ref n) if n == "hero-banner"));
        let err = registry.register(section("markdown")).unwrap_err();
        assert!(matches!(err, SchemaError::ReservedTypeName(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn reserved_check_is_case_sensitive() {
        let mut registry = CustomTypeRegistry::new();
        registry.register(section("Hero-Banner")).unwrap();
        assert!(registry.contains("Hero-Banner"));
    }

    #[test]
    fn blank_and_duplicate_names() {
        let mut registry = CustomTypeRegistry::new();
        assert!(matches!(
            registry.register(section("  ")),
            Err(SchemaError::EmptyTypeName)
        ));
        registry.register(section("acme-pricing")).unwrap();
        assert!(matches!(
            registry.register(block("acme-pricing")),
            Err(SchemaError::DuplicateTypeName(_))
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn known_and_unknown_instances() {
        let mut registry = CustomTypeRegistry::new();
        registry.register(block("acme-badge")).unwrap();
        assert!(registry.is_known("markdown"));
        assert!(registry.is_known("acme-badge"));
        assert!(!registry.is_known("acme-missing"));

        let instances = vec![
            SchemaInstance::new("b1", "markdown"),
            SchemaInstance::new("b2", "acme-badge"),
            SchemaInstance::new("b3", "acme-missing"),
        ];
        let unknown = registry.unknown_instances(&instances);
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].id, "b3");

        assert!(registry.unregister("acme-badge").is_some());
        assert_eq!(registry.unknown_instances(&instances).len(), 2);
    }

    #[test]
    fn block_targets() {
        let anywhere = block("acme-badge");
        assert!(anywhere.allows_target(BlockTarget::Footer));

        let posts_only = block("acme-quote").with_targets(vec![BlockTarget::BlogPost]);
        assert!(posts_only.allows_target(BlockTarget::BlogPost));
        assert!(!posts_only.allows_target(BlockTarget::Form));

        let any = block("acme-any").with_targets(vec![BlockTarget::Any]);
        assert!(any.allows_target(BlockTarget::Form));
    }
}
