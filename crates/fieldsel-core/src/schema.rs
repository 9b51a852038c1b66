//! Admin list schema
//!
//! Declarative description of the lists an admin dashboard manages and the
//! field types of their fields. Loaded from YAML, TOML or JSON.
//!
//! ```yaml
//! query:
//!   page_size: 25
//! lists:
//!   - key: Post
//!     fields:
//!       title: text
//!       cover: image
//! ```

use crate::error::SchemaError;
use crate::query::QueryConfig;
use crate::registry::FieldSelectionRegistry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One admin list and its fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDef {
    /// List key, e.g. `Post`
    pub key: String,

    /// Query field name for many items; derived from `key` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,

    /// Field name → field type tag, in display order
    #[serde(default)]
    pub fields: IndexMap<String, String>,
}

impl ListDef {
    /// Create a list with no fields
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            plural: None,
            fields: IndexMap::new(),
        }
    }

    /// Add a field
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, field_type: impl Into<String>) -> Self {
        self.fields.insert(name.into(), field_type.into());
        self
    }

    /// Override the plural query name
    #[must_use]
    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = Some(plural.into());
        self
    }

    /// Query field name used to fetch many items
    ///
    /// `BlogPost` → `blogPosts` unless overridden.
    #[must_use]
    pub fn plural_key(&self) -> String {
        if let Some(plural) = &self.plural {
            return plural.clone();
        }
        let mut chars = self.key.chars();
        let mut out = String::with_capacity(self.key.len() + 1);
        if let Some(first) = chars.next() {
            out.extend(first.to_lowercase());
        }
        out.extend(chars);
        out.push('s');
        out
    }
}

/// Every list the dashboard knows about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSchema {
    /// Query shaping options
    #[serde(default)]
    pub query: QueryConfig,

    /// Lists in declaration order
    #[serde(default)]
    pub lists: Vec<ListDef>,
}

impl ListSchema {
    /// Parse YAML
    ///
    /// # Errors
    /// [`SchemaError::Yaml`] on malformed input
    pub fn from_yaml_str(s: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Parse TOML
    ///
    /// # Errors
    /// [`SchemaError::Toml`] on malformed input
    pub fn from_toml_str(s: &str) -> Result<Self, SchemaError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse JSON
    ///
    /// # Errors
    /// [`SchemaError::Json`] on malformed input
    pub fn from_json_str(s: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a schema file, picking the parser from its extension
    ///
    /// # Errors
    /// - [`SchemaError::UnsupportedFormat`] for unknown extensions
    /// - [`SchemaError::Io`] if the file cannot be read
    /// - a parse error from the selected format
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, SchemaError> = match ext.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str,
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(SchemaError::UnsupportedFormat(path.to_path_buf())),
        };

        let content =
            std::fs::read_to_string(path).map_err(|e| SchemaError::io_error(path, e))?;
        let schema = parse(&content)?;

        tracing::debug!(
            path = %path.display(),
            lists = schema.lists.len(),
            "Loaded list schema"
        );
        Ok(schema)
    }

    /// Find a list by key
    ///
    /// # Errors
    /// [`SchemaError::UnknownList`] if no list has this key
    pub fn list(&self, key: &str) -> Result<&ListDef, SchemaError> {
        self.lists
            .iter()
            .find(|l| l.key == key)
            .ok_or_else(|| SchemaError::UnknownList(key.to_string()))
    }

    /// Check every field type against a registry
    ///
    /// # Errors
    /// [`SchemaError::InvalidField`] for the first unregistered tag
    pub fn validate(&self, registry: &FieldSelectionRegistry) -> Result<(), SchemaError> {
        for list in &self.lists {
            for (field, field_type) in &list.fields {
                if let Err(source) = registry.strategy(field_type) {
                    tracing::warn!(list = %list.key, %field, %field_type, "Unregistered field type");
                    return Err(SchemaError::InvalidField {
                        list: list.key.clone(),
                        field: field.clone(),
                        source,
                    });
                }
            }
        }
        Ok(())
    }
}
