//! Stable leaf addressing for content trees.
//!
//! Every translatable leaf has exactly one canonical address derived from
//! structure alone: the owning component's identity plus the index path down
//! to the leaf and the field name. Two structurally identical trees produce
//! identical addresses, which is what lets flat overlays produced from one
//! language apply onto another.
//!
//! Parsing is permissive and resolution is strict: any well-formed string
//! parses, and addresses that do not match the tree simply fail to resolve.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;
use vitrine_model::{Field, Page};

pub type PathResult<T> = Result<T, PathError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path does not start with 'component_': {0}")]
    MissingComponentPrefix(String),

    #[error("path has no field segment: {0}")]
    MissingField(String),

    #[error("unknown path segment '{segment}'")]
    UnknownSegment { segment: String },

    #[error("bad index in path segment '{segment}'")]
    BadIndex { segment: String },
}

/// One step from a component down to a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Child field at an index (component items or nested field items).
    Items(usize),
    /// Tab group at an index.
    Tabs(usize),
    /// Field inside the active tab group.
    Content(usize),
    /// Opening-hours row at an index.
    Hours(usize),
    /// The props bag of the current node; the path's field is the prop key.
    Props,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Items(index) => write!(f, "items[{}]", index),
            PathSegment::Tabs(index) => write!(f, "tabs[{}]", index),
            PathSegment::Content(index) => write!(f, "content[{}]", index),
            PathSegment::Hours(index) => write!(f, "hours[{}]", index),
            PathSegment::Props => write!(f, "props"),
        }
    }
}

/// Canonical address of one leaf value.
///
/// Rendered form: `component_{identity}.items[0].tabs[1].content[2].title`.
/// Two leaves in two trees are the same field iff their rendered addresses
/// are equal. Identities containing `.` cannot be parsed back; the validator
/// flags them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    /// Component identity (key, type or position fallback).
    pub component: String,
    pub segments: Vec<PathSegment>,
    /// Leaf field name or prop key.
    pub field: String,
}

impl FieldPath {
    pub fn new(
        component: impl Into<String>,
        segments: Vec<PathSegment>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            segments,
            field: field.into(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component_{}", self.component)?;
        for segment in &self.segments {
            write!(f, ".{}", segment)?;
        }
        write!(f, ".{}", self.field)
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(text: &str) -> PathResult<Self> {
        let rest = text
            .strip_prefix("component_")
            .ok_or_else(|| PathError::MissingComponentPrefix(text.to_string()))?;

        let mut parts = rest.split('.');
        let component = parts.next().unwrap_or_default().to_string();
        let mut middle: Vec<&str> = parts.collect();

        let field = match middle.pop() {
            Some(field) if !field.is_empty() => field.to_string(),
            _ => return Err(PathError::MissingField(text.to_string())),
        };

        let segments = middle
            .into_iter()
            .map(parse_segment)
            .collect::<PathResult<Vec<_>>>()?;

        Ok(Self {
            component,
            segments,
            field,
        })
    }
}

fn parse_segment(text: &str) -> PathResult<PathSegment> {
    if text == "props" {
        return Ok(PathSegment::Props);
    }

    let open = text.find('[');
    let (name, index_text) = match open {
        Some(open) if text.ends_with(']') => (&text[..open], &text[open + 1..text.len() - 1]),
        _ => {
            return Err(PathError::UnknownSegment {
                segment: text.to_string(),
            })
        }
    };

    let index = index_text
        .parse::<usize>()
        .map_err(|_| PathError::BadIndex {
            segment: text.to_string(),
        })?;

    match name {
        "items" => Ok(PathSegment::Items(index)),
        "tabs" => Ok(PathSegment::Tabs(index)),
        "content" => Ok(PathSegment::Content(index)),
        "hours" => Ok(PathSegment::Hours(index)),
        _ => Err(PathError::UnknownSegment {
            segment: text.to_string(),
        }),
    }
}

/// Read the leaf a path points at. `None` when any hop is missing, the shape
/// does not match or the value is not text.
pub fn leaf_value<'a>(page: &'a Page, path: &FieldPath) -> Option<&'a str> {
    let component = page.component(&path.component)?;
    match path.segments.as_slice() {
        [PathSegment::Props] => component.props.get(&path.field).and_then(Value::as_str),
        [PathSegment::Items(index), rest @ ..] => {
            field_value(component.items.get(*index)?, rest, &path.field)
        }
        _ => None,
    }
}

fn field_value<'a>(field: &'a Field, segments: &[PathSegment], name: &str) -> Option<&'a str> {
    match segments {
        [] => field.text_value(name),
        [PathSegment::Props] => field.props.get(name).and_then(Value::as_str),
        [PathSegment::Items(index), rest @ ..] => {
            field_value(field.items.get(*index)?, rest, name)
        }
        [PathSegment::Tabs(index)] if name == "label" => {
            field.tabs.get(*index).map(|tab| tab.label.as_str())
        }
        [PathSegment::Tabs(tab_index), PathSegment::Content(index), rest @ ..] => {
            field_value(
                field.tabs.get(*tab_index)?.content.get(*index)?,
                rest,
                name,
            )
        }
        [PathSegment::Hours(index)] => {
            let entry = field.hours.get(*index)?;
            match name {
                "day" => Some(entry.day.as_str()),
                "time" => Some(entry.time.as_str()),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Write `value` at `path`, reporting whether the address resolved. A miss
/// leaves the page untouched; prop keys are inserted when absent, matching
/// plain property assignment.
pub fn set_leaf(page: &mut Page, path: &FieldPath, value: &str) -> bool {
    let Some(component) = page.component_mut(&path.component) else {
        return false;
    };
    match path.segments.as_slice() {
        [PathSegment::Props] => {
            component
                .props
                .insert(path.field.clone(), Value::String(value.to_string()));
            true
        }
        [PathSegment::Items(index), rest @ ..] => match component.items.get_mut(*index) {
            Some(field) => set_field_value(field, rest, &path.field, value),
            None => false,
        },
        _ => false,
    }
}

fn set_field_value(field: &mut Field, segments: &[PathSegment], name: &str, value: &str) -> bool {
    match segments {
        [] => {
            field.set_text_value(name, value);
            true
        }
        [PathSegment::Props] => {
            field
                .props
                .insert(name.to_string(), Value::String(value.to_string()));
            true
        }
        [PathSegment::Items(index), rest @ ..] => match field.items.get_mut(*index) {
            Some(child) => set_field_value(child, rest, name, value),
            None => false,
        },
        [PathSegment::Tabs(index)] if name == "label" => match field.tabs.get_mut(*index) {
            Some(tab) => {
                tab.label = value.to_string();
                true
            }
            None => false,
        },
        [PathSegment::Tabs(tab_index), PathSegment::Content(index), rest @ ..] => {
            let child = field
                .tabs
                .get_mut(*tab_index)
                .and_then(|tab| tab.content.get_mut(*index));
            match child {
                Some(child) => set_field_value(child, rest, name, value),
                None => false,
            }
        }
        [PathSegment::Hours(index)] => match field.hours.get_mut(*index) {
            Some(entry) => match name {
                "day" => {
                    entry.day = value.to_string();
                    true
                }
                "time" => {
                    entry.time = value.to_string();
                    true
                }
                _ => false,
            },
            None => false,
        },
        _ => false,
    }
}
