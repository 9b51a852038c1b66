//! Field selection registry
//!
//! Provides [`FieldSelectionRegistry`] for mapping field type tags to their
//! selection strategies.

use crate::error::{SelectionError, SelectionResult};
use crate::field_type::FieldTypeId;
use crate::fragment::SelectionFragment;
use crate::path::FieldPath;
use crate::strategy::SelectionFn;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

static DEFAULT_REGISTRY: Lazy<FieldSelectionRegistry> =
    Lazy::new(FieldSelectionRegistry::with_defaults);

/// Immutable table from field type tag to selection strategy
///
/// Built once, then only read. Adding a field type means registering one
/// more entry through [`FieldSelectionRegistryBuilder`]; existing entries
/// cannot be replaced.
#[derive(Debug, Clone)]
pub struct FieldSelectionRegistry {
    entries: IndexMap<String, SelectionFn>,
}

impl FieldSelectionRegistry {
    /// Registry holding every built-in [`FieldTypeId`]
    #[must_use]
    pub fn with_defaults() -> Self {
        let entries = FieldTypeId::ALL
            .into_iter()
            .map(|id| (id.as_str().to_string(), id.selection_fn()))
            .collect();
        Self { entries }
    }

    /// Process-wide registry of built-in field types
    #[inline]
    #[must_use]
    pub fn global() -> &'static Self {
        &DEFAULT_REGISTRY
    }

    /// Start from the built-in field types and add more
    #[inline]
    #[must_use]
    pub fn builder() -> FieldSelectionRegistryBuilder {
        FieldSelectionRegistryBuilder {
            entries: Self::with_defaults().entries,
        }
    }

    /// Start from an empty table
    #[inline]
    #[must_use]
    pub fn empty_builder() -> FieldSelectionRegistryBuilder {
        FieldSelectionRegistryBuilder {
            entries: IndexMap::new(),
        }
    }

    /// Look up the strategy for a tag
    ///
    /// # Errors
    /// [`SelectionError::UnknownFieldType`] if the tag is not registered
    #[inline]
    pub fn strategy(&self, field_type: &str) -> SelectionResult<SelectionFn> {
        self.entries
            .get(field_type)
            .copied()
            .ok_or_else(|| SelectionError::UnknownFieldType(field_type.to_string()))
    }

    /// Selection fragment for `path` under `field_type`
    ///
    /// # Errors
    /// [`SelectionError::UnknownFieldType`] if the tag is not registered.
    /// There is no scalar fallback.
    pub fn selection_for(
        &self,
        field_type: &str,
        path: impl Into<FieldPath>,
    ) -> SelectionResult<SelectionFragment> {
        let strategy = self.strategy(field_type)?;
        Ok(strategy(path.into()))
    }

    /// Check if a tag is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, field_type: &str) -> bool {
        self.entries.contains_key(field_type)
    }

    /// Registered tags in registration order
    pub fn field_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered tags
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FieldSelectionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Startup-time assembly of a [`FieldSelectionRegistry`]
#[derive(Debug, Clone)]
pub struct FieldSelectionRegistryBuilder {
    entries: IndexMap<String, SelectionFn>,
}

impl FieldSelectionRegistryBuilder {
    /// Add a strategy for a new tag
    ///
    /// # Errors
    /// [`SelectionError::DuplicateFieldType`] if the tag is already present
    pub fn register(
        mut self,
        field_type: impl Into<String>,
        strategy: SelectionFn,
    ) -> SelectionResult<Self> {
        let field_type = field_type.into();
        if self.entries.contains_key(&field_type) {
            return Err(SelectionError::DuplicateFieldType(field_type));
        }
        self.entries.insert(field_type, strategy);
        Ok(self)
    }

    /// Freeze into an immutable registry
    #[inline]
    #[must_use]
    pub fn build(self) -> FieldSelectionRegistry {
        FieldSelectionRegistry {
            entries: self.entries,
        }
    }
}

/// Selection fragment from the built-in registry
///
/// # Errors
/// [`SelectionError::UnknownFieldType`] if the tag is not a built-in
pub fn selection_for(field_type: &str, path: &str) -> SelectionResult<String> {
    FieldSelectionRegistry::global()
        .selection_for(field_type, path)
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy;
    use pretty_assertions::assert_eq;

    fn relationship(path: FieldPath) -> SelectionFragment {
        SelectionFragment::inline(path, &["id", "label"])
    }

    #[test]
    fn registry_with_defaults() {
        let registry = FieldSelectionRegistry::with_defaults();
        assert_eq!(registry.len(), 8);
        for id in FieldTypeId::ALL {
            assert!(registry.contains(id.as_str()));
        }
    }

    #[test]
    fn registry_order_follows_registration() {
        let registry = FieldSelectionRegistry::builder()
            .register("relationship", relationship)
            .unwrap()
            .build();
        let tags: Vec<_> = registry.field_types().collect();
        assert_eq!(tags.first(), Some(&"checkbox"));
        assert_eq!(tags.last(), Some(&"relationship"));
    }

    #[test]
    fn builtin_fragments() {
        assert_eq!(selection_for("text", "title").unwrap(), "title");
        assert_eq!(selection_for("checkbox", "isActive").unwrap(), "isActive");
        assert_eq!(
            selection_for("password", "secret").unwrap(),
            "secret { isSet }"
        );
        assert_eq!(
            selection_for("image", "avatar").unwrap(),
            "avatar {\n  url\n  id\n  extension\n  width\n  height\n  filesize\n}"
        );
    }

    #[test]
    fn unknown_type_is_an_error() {
        let err = selection_for("relationship", "author").unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownFieldType("relationship".to_string())
        );
    }

    #[test]
    fn unknown_type_never_falls_back_to_scalar() {
        let registry = FieldSelectionRegistry::with_defaults();
        assert!(registry.selection_for("Image", "avatar").is_err());
        assert!(registry.strategy("").is_err());
    }

    #[test]
    fn register_new_type() {
        let registry = FieldSelectionRegistry::builder()
            .register("relationship", relationship)
            .unwrap()
            .build();
        assert_eq!(registry.len(), 9);
        let fragment = registry.selection_for("relationship", "author").unwrap();
        assert_eq!(fragment.to_string(), "author { id label }");
        // built-ins untouched
        assert_eq!(
            registry.selection_for("password", "pw").unwrap().to_string(),
            "pw { isSet }"
        );
    }

    #[test]
    fn register_rejects_builtin_override() {
        let err = FieldSelectionRegistry::builder()
            .register("image", strategy::scalar)
            .unwrap_err();
        assert_eq!(err, SelectionError::DuplicateFieldType("image".to_string()));
    }

    #[test]
    fn register_rejects_duplicate_custom() {
        let result = FieldSelectionRegistry::empty_builder()
            .register("relationship", relationship)
            .and_then(|b| b.register("relationship", strategy::scalar));
        assert!(matches!(result, Err(SelectionError::DuplicateFieldType(_))));
    }

    #[test]
    fn empty_builder_has_no_defaults() {
        let registry = FieldSelectionRegistry::empty_builder().build();
        assert!(registry.is_empty());
        assert!(registry.selection_for("text", "title").is_err());
    }

    #[test]
    fn global_is_shared() {
        let a = FieldSelectionRegistry::global();
        let b = FieldSelectionRegistry::global();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), FieldTypeId::ALL.len());
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldSelectionRegistry>();
    }
}
