//! Flat extraction of translatable text.
//!
//! Walks a page in render order and emits `(address, value)` for every
//! allow-listed, non-empty text leaf. The emission order is deterministic:
//! components in page order; per field the allow-listed attributes in list
//! order, then nested items, tab groups, hours rows and finally the props
//! bag (props iterate key-sorted). Whitespace-only values never appear in
//! the output, so they can never register as "changed" downstream.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use vitrine_model::{Field, Page};

use crate::path::{FieldPath, PathSegment};

/// Field names treated as translatable text, in emission order.
pub const DEFAULT_TEXT_FIELDS: [&str; 10] = [
    "content",
    "title",
    "description",
    "label",
    "buttonText",
    "highlight",
    "alt",
    "address",
    "phone",
    "email",
];

/// Ordered allow-list of extractable field names. Hours rows (`day`/`time`)
/// and string props are always extracted and do not consult the list.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAllowList {
    fields: Vec<String>,
}

impl TextAllowList {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}

impl Default for TextAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_FIELDS)
    }
}

/// Extract every translatable leaf with the default allow-list.
pub fn extract_text(page: &Page) -> IndexMap<String, String> {
    extract_text_with(page, &TextAllowList::default())
}

/// Extract every translatable leaf, addressed by its canonical path.
pub fn extract_text_with(page: &Page, allow: &TextAllowList) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    for (index, component) in page.components.iter().enumerate() {
        let identity = component.identity(index);
        let mut segments = Vec::new();
        for (item_index, item) in component.items.iter().enumerate() {
            segments.push(PathSegment::Items(item_index));
            collect_field(item, &identity, &mut segments, allow, &mut out);
            segments.pop();
        }
        collect_props(&component.props, &identity, &segments, &mut out);
    }
    out
}

fn collect_field(
    field: &Field,
    identity: &str,
    segments: &mut Vec<PathSegment>,
    allow: &TextAllowList,
    out: &mut IndexMap<String, String>,
) {
    for name in allow.iter() {
        if let Some(value) = field.text_value(name) {
            emit(out, identity, segments, name, value);
        }
    }

    for (index, child) in field.items.iter().enumerate() {
        segments.push(PathSegment::Items(index));
        collect_field(child, identity, segments, allow, out);
        segments.pop();
    }

    for (tab_index, tab) in field.tabs.iter().enumerate() {
        segments.push(PathSegment::Tabs(tab_index));
        if allow.contains("label") {
            emit(out, identity, segments, "label", &tab.label);
        }
        for (index, child) in tab.content.iter().enumerate() {
            segments.push(PathSegment::Content(index));
            collect_field(child, identity, segments, allow, out);
            segments.pop();
        }
        segments.pop();
    }

    for (index, entry) in field.hours.iter().enumerate() {
        segments.push(PathSegment::Hours(index));
        emit(out, identity, segments, "day", &entry.day);
        emit(out, identity, segments, "time", &entry.time);
        segments.pop();
    }

    collect_props(&field.props, identity, segments, out);
}

fn collect_props(
    props: &Map<String, Value>,
    identity: &str,
    segments: &[PathSegment],
    out: &mut IndexMap<String, String>,
) {
    for (key, value) in props {
        if let Some(text) = value.as_str() {
            let mut prop_segments = segments.to_vec();
            prop_segments.push(PathSegment::Props);
            emit(out, identity, &prop_segments, key, text);
        }
    }
}

fn emit(
    out: &mut IndexMap<String, String>,
    identity: &str,
    segments: &[PathSegment],
    field: &str,
    value: &str,
) {
    if value.trim().is_empty() {
        return;
    }
    let path = FieldPath::new(identity, segments.to_vec(), field);
    out.insert(path.to_string(), value.to_string());
}
