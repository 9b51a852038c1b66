//! Built-in field type tags
//!
//! Provides [`FieldTypeId`] for the field kinds the admin dashboard ships
//! with.

use crate::error::SelectionError;
use crate::fragment::SelectionFragment;
use crate::path::FieldPath;
use crate::strategy::{self, SelectionFn};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Kind of value a dashboard field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldTypeId {
    /// Boolean toggle
    Checkbox,
    /// Floating point number
    Float,
    /// Item identifier
    Id,
    /// Uploaded image with metadata
    Image,
    /// Whole number
    Integer,
    /// Write-only secret
    Password,
    /// One of a fixed set of options
    Select,
    /// Free-form text
    Text,
}

impl FieldTypeId {
    /// Every built-in field type, in tag order
    pub const ALL: [Self; 8] = [
        Self::Checkbox,
        Self::Float,
        Self::Id,
        Self::Image,
        Self::Integer,
        Self::Password,
        Self::Select,
        Self::Text,
    ];

    /// Wire tag for this field type
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Float => "float",
            Self::Id => "id",
            Self::Image => "image",
            Self::Integer => "integer",
            Self::Password => "password",
            Self::Select => "select",
            Self::Text => "text",
        }
    }

    /// Selection builder for this field type
    ///
    /// Exhaustive so a new variant cannot ship without a builder.
    #[inline]
    #[must_use]
    pub const fn selection_fn(self) -> SelectionFn {
        match self {
            Self::Checkbox
            | Self::Float
            | Self::Id
            | Self::Integer
            | Self::Select
            | Self::Text => strategy::scalar,
            Self::Password => strategy::password,
            Self::Image => strategy::image,
        }
    }

    /// Build the selection fragment for a field of this type
    #[inline]
    #[must_use]
    pub fn selection_for(self, path: impl Into<FieldPath>) -> SelectionFragment {
        (self.selection_fn())(path.into())
    }
}

impl Display for FieldTypeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldTypeId {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SelectionError::UnknownFieldType(s.to_string()))
    }
}
