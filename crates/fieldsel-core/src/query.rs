//! List item query composition
//!
//! Embeds per-field selection fragments into the query document a list
//! view sends to the backend.

use crate::error::QueryError;
use crate::fragment::SelectionFragment;
use crate::registry::FieldSelectionRegistry;
use crate::schema::ListDef;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter, Write};

/// Field every list item is fetched with
pub const ID_FIELD: &str = "id";

/// Query shaping options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Items per page (`take`)
    pub page_size: usize,
    /// Items to skip
    pub skip: usize,
    /// Spaces per nesting level
    pub indent: usize,
    /// Also request the total item count
    pub count: bool,
}

impl QueryConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With page size
    #[inline]
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// With skip offset
    #[inline]
    #[must_use]
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// With indent width
    #[inline]
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// With item count
    #[inline]
    #[must_use]
    pub fn with_count(mut self, count: bool) -> Self {
        self.count = count;
        self
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: 50,
            skip: 0,
            indent: 2,
            count: false,
        }
    }
}

/// Items query for one list
///
/// ```text
/// query {
///   items: posts(take: 50, skip: 0) {
///     id
///     title
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    plural: String,
    selections: Vec<SelectionFragment>,
    config: QueryConfig,
}

impl ItemQuery {
    /// Compose the query for `list`
    ///
    /// `id` is always selected first and only once. A declared `id` field
    /// goes through the registry like any other field.
    ///
    /// # Errors
    /// [`QueryError::Selection`] if a field type is not registered
    pub fn new(
        registry: &FieldSelectionRegistry,
        list: &ListDef,
        config: &QueryConfig,
    ) -> Result<Self, QueryError> {
        let select = |name: &str, field_type: &str| {
            registry
                .selection_for(field_type, name)
                .map_err(|source| QueryError::Selection {
                    field: name.to_string(),
                    source,
                })
        };

        let id = match list.fields.get(ID_FIELD) {
            Some(field_type) => select(ID_FIELD, field_type.as_str())?,
            None => SelectionFragment::scalar(ID_FIELD.into()),
        };

        let mut selections = Vec::with_capacity(list.fields.len() + 1);
        selections.push(id);
        for (name, field_type) in &list.fields {
            if name != ID_FIELD {
                selections.push(select(name.as_str(), field_type.as_str())?);
            }
        }

        tracing::debug!(
            list = %list.key,
            fields = selections.len(),
            "Composed item query"
        );

        Ok(Self {
            plural: list.plural_key(),
            selections,
            config: *config,
        })
    }

    /// Query field name
    #[inline]
    #[must_use]
    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Fragments in selection order
    #[inline]
    #[must_use]
    pub fn selections(&self) -> &[SelectionFragment] {
        &self.selections
    }

    /// Query shaping options
    #[inline]
    #[must_use]
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }
}

impl Display for ItemQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let unit = " ".repeat(self.config.indent);
        let level1 = unit.as_str();

        let mut out = String::new();
        out.push_str("query {\n");
        writeln!(
            out,
            "{level1}items: {}(take: {}, skip: {}) {{",
            self.plural, self.config.page_size, self.config.skip
        )?;
        for fragment in &self.selections {
            out.push_str(&fragment.render_nested(&unit, 2));
            out.push('\n');
        }
        writeln!(out, "{level1}}}")?;
        if self.config.count {
            writeln!(out, "{level1}count: {}Count", self.plural)?;
        }
        out.push('}');

        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectionError;
    use pretty_assertions::assert_eq;

    fn post() -> ListDef {
        ListDef::new("Post")
            .with_field("title", "text")
            .with_field("secret", "password")
    }

    #[test]
    fn config_defaults() {
        let config = QueryConfig::new();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.skip, 0);
        assert_eq!(config.indent, 2);
        assert!(!config.count);
    }

    #[test]
    fn config_builder() {
        let config = QueryConfig::new()
            .with_page_size(10)
            .with_skip(20)
            .with_indent(4)
            .with_count(true);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.skip, 20);
        assert_eq!(config.indent, 4);
        assert!(config.count);
    }

    #[test]
    fn renders_scalar_and_inline_fields() {
        let query = ItemQuery::new(
            FieldSelectionRegistry::global(),
            &post(),
            &QueryConfig::default(),
        )
        .unwrap();
        assert_eq!(
            query.to_string(),
            "query {\n  items: posts(take: 50, skip: 0) {\n    id\n    title\n    secret { isSet }\n  }\n}"
        );
    }

    #[test]
    fn reindents_block_fragments() {
        let list = ListDef::new("User").with_field("avatar", "image");
        let config = QueryConfig::new().with_page_size(5).with_count(true);
        let query = ItemQuery::new(FieldSelectionRegistry::global(), &list, &config).unwrap();
        let expected = "\
query {
  items: users(take: 5, skip: 0) {
    id
    avatar {
      url
      id
      extension
      width
      height
      filesize
    }
  }
  count: usersCount
}";
        assert_eq!(query.to_string(), expected);
    }

    #[test]
    fn id_selected_once() {
        let list = ListDef::new("Post")
            .with_field("id", "id")
            .with_field("title", "text");
        let query = ItemQuery::new(
            FieldSelectionRegistry::global(),
            &list,
            &QueryConfig::default(),
        )
        .unwrap();
        let paths: Vec<_> = query
            .selections()
            .iter()
            .map(|s| s.path().as_str())
            .collect();
        assert_eq!(paths, ["id", "title"]);
    }

    #[test]
    fn unknown_type_names_the_field() {
        let list = post().with_field("author", "relationship");
        let err = ItemQuery::new(
            FieldSelectionRegistry::global(),
            &list,
            &QueryConfig::default(),
        )
        .unwrap_err();
        match err {
            QueryError::Selection { field, source } => {
                assert_eq!(field, "author");
                assert_eq!(
                    source,
                    SelectionError::UnknownFieldType("relationship".to_string())
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn custom_indent() {
        let list = ListDef::new("Tag").with_field("name", "text");
        let config = QueryConfig::new().with_indent(4);
        let query = ItemQuery::new(FieldSelectionRegistry::global(), &list, &config).unwrap();
        assert_eq!(
            query.to_string(),
            "query {\n    items: tags(take: 50, skip: 0) {\n        id\n        name\n    }\n}"
        );
        assert_eq!(query.plural(), "tags");
    }

    #[test]
    fn custom_indent_applies_inside_block_fragments() {
        let list = ListDef::new("User").with_field("avatar", "image");
        let config = QueryConfig::new().with_indent(4);
        let query = ItemQuery::new(FieldSelectionRegistry::global(), &list, &config).unwrap();
        let expected = "\
query {
    items: users(take: 50, skip: 0) {
        id
        avatar {
            url
            id
            extension
            width
            height
            filesize
        }
    }
}";
        assert_eq!(query.to_string(), expected);
    }

    #[test]
    fn declared_id_with_unknown_type_is_rejected() {
        let list = ListDef::new("User").with_field("id", "bogus");
        let err = ItemQuery::new(
            FieldSelectionRegistry::global(),
            &list,
            &QueryConfig::default(),
        )
        .unwrap_err();
        match err {
            QueryError::Selection { field, source } => {
                assert_eq!(field, "id");
                assert_eq!(
                    source,
                    SelectionError::UnknownFieldType("bogus".to_string())
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn declared_id_keeps_its_fragment_first() {
        let list = ListDef::new("User")
            .with_field("name", "text")
            .with_field("id", "password");
        let query = ItemQuery::new(
            FieldSelectionRegistry::global(),
            &list,
            &QueryConfig::default(),
        )
        .unwrap();
        let rendered: Vec<_> = query.selections().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["id { isSet }", "name"]);
    }
}
