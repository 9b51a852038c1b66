//! Per-field-type selection strategies
//!
//! Each strategy is a pure function from a [`FieldPath`] to the
//! [`SelectionFragment`] that fetches enough data to rebuild the field's
//! value. Strategies take no other input and hold no state.

use crate::fragment::SelectionFragment;
use crate::path::FieldPath;

/// Selection strategy for one field type
pub type SelectionFn = fn(FieldPath) -> SelectionFragment;

/// Sub-fields of a password field; the secret itself is never fetched
pub const PASSWORD_FIELDS: &[&str] = &["isSet"];

/// Sub-fields needed to display an image
pub const IMAGE_FIELDS: &[&str] = &["url", "id", "extension", "width", "height", "filesize"];

/// checkbox, float, id, integer, select, text
#[must_use]
pub fn scalar(path: FieldPath) -> SelectionFragment {
    SelectionFragment::scalar(path)
}

/// `path { isSet }`
#[must_use]
pub fn password(path: FieldPath) -> SelectionFragment {
    SelectionFragment::inline(path, PASSWORD_FIELDS)
}

/// Image metadata in block layout
#[must_use]
pub fn image(path: FieldPath) -> SelectionFragment {
    SelectionFragment::block(path, IMAGE_FIELDS)
}
