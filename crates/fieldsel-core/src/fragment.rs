//! Selection fragments
//!
//! Provides [`SelectionFragment`], the part of a query document that names
//! which properties of a field to retrieve.

use crate::path::FieldPath;
use std::fmt::{self, Display, Formatter};

/// Indent unit of a standalone block fragment
const BLOCK_INDENT: &str = "  ";

/// How a sub-selection is laid out when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// `path { a b }`
    #[default]
    Inline,

    /// One sub-field per line, indented by two spaces
    Block,
}

/// GraphQL selection-set entry for a single field
///
/// Scalar fragments render as the bare path. Composite fragments render as
/// the path followed by a brace-delimited list of sub-field names:
///
/// ```text
/// secret { isSet }
///
/// avatar {
///   url
///   id
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionFragment {
    path: FieldPath,
    sub_fields: &'static [&'static str],
    layout: Layout,
}

impl SelectionFragment {
    /// Fragment that fetches the field value directly
    #[inline]
    #[must_use]
    pub fn scalar(path: FieldPath) -> Self {
        Self {
            path,
            sub_fields: &[],
            layout: Layout::Inline,
        }
    }

    /// Composite fragment rendered on one line
    #[inline]
    #[must_use]
    pub fn inline(path: FieldPath, sub_fields: &'static [&'static str]) -> Self {
        Self {
            path,
            sub_fields,
            layout: Layout::Inline,
        }
    }

    /// Composite fragment rendered one sub-field per line
    #[inline]
    #[must_use]
    pub fn block(path: FieldPath, sub_fields: &'static [&'static str]) -> Self {
        Self {
            path,
            sub_fields,
            layout: Layout::Block,
        }
    }

    /// Field path the fragment selects
    #[inline]
    #[must_use]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Sub-fields requested below the path (empty for scalars)
    #[inline]
    #[must_use]
    pub fn sub_fields(&self) -> &'static [&'static str] {
        self.sub_fields
    }

    /// Rendering layout of the sub-selection
    #[inline]
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// True when no sub-selection is requested
    #[inline]
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.sub_fields.is_empty()
    }

    /// Render nested `depth` levels deep, one `unit` per level
    ///
    /// Block sub-fields sit one level below the path, so the fragment
    /// follows the indentation of an enclosing selection set.
    #[must_use]
    pub fn render_nested(&self, unit: &str, depth: usize) -> String {
        let outer = unit.repeat(depth);
        let mut out = format!("{outer}{}", self.path);
        if self.sub_fields.is_empty() {
            return out;
        }

        match self.layout {
            Layout::Inline => {
                out.push_str(" {");
                for field in self.sub_fields {
                    out.push(' ');
                    out.push_str(field);
                }
                out.push_str(" }");
            }
            Layout::Block => {
                let inner = unit.repeat(depth + 1);
                out.push_str(" {");
                for field in self.sub_fields {
                    out.push('\n');
                    out.push_str(&inner);
                    out.push_str(field);
                }
                out.push('\n');
                out.push_str(&outer);
                out.push('}');
            }
        }
        out
    }
}

impl Display for SelectionFragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_nested(BLOCK_INDENT, 0))
    }
}

impl From<SelectionFragment> for String {
    #[inline]
    fn from(fragment: SelectionFragment) -> Self {
        fragment.to_string()
    }
}
