//! Testing utilities for fieldsel workspace
//!
//! Shared schema fixtures and proptest strategies.

#![allow(missing_docs)]

use proptest::prelude::*;

/// Two lists covering every built-in field type
pub const SAMPLE_SCHEMA_YAML: &str = r"
query:
  page_size: 25
lists:
  - key: Post
    fields:
      title: text
      isPublished: checkbox
      cover: image
      rating: float
  - key: User
    plural: people
    fields:
      id: id
      name: text
      age: integer
      role: select
      password: password
";

pub const SAMPLE_SCHEMA_TOML: &str = r#"
[query]
page_size = 25

[[lists]]
key = "Post"

[lists.fields]
title = "text"
isPublished = "checkbox"
cover = "image"
rating = "float"

[[lists]]
key = "User"
plural = "people"

[lists.fields]
id = "id"
name = "text"
age = "integer"
role = "select"
password = "password"
"#;

pub const SAMPLE_SCHEMA_JSON: &str = r#"{
  "query": { "page_size": 25 },
  "lists": [
    {
      "key": "Post",
      "fields": {
        "title": "text",
        "isPublished": "checkbox",
        "cover": "image",
        "rating": "float"
      }
    },
    {
      "key": "User",
      "plural": "people",
      "fields": {
        "id": "id",
        "name": "text",
        "age": "integer",
        "role": "select",
        "password": "password"
      }
    }
  ]
}"#;

pub const BUILTIN_TAGS: [&str; 8] = [
    "checkbox", "float", "id", "image", "integer", "password", "select", "text",
];

pub const SCALAR_TAGS: [&str; 6] = ["checkbox", "float", "id", "integer", "select", "text"];

/// Non-empty field paths, optionally dotted
pub fn field_path() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,15}(\\.[a-zA-Z_][a-zA-Z0-9_]{0,15}){0,2}"
}

/// Any built-in tag
pub fn builtin_tag() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(BUILTIN_TAGS.to_vec())
}

/// Built-in tags that select the bare path
pub fn scalar_tag() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(SCALAR_TAGS.to_vec())
}

/// Lowercase tags that are not built in
pub fn unknown_tag() -> impl Strategy<Value = String> {
    "[a-z]{1,12}".prop_filter("built-in tag", |s| !BUILTIN_TAGS.contains(&s.as_str()))
}
