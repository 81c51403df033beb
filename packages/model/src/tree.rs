//! Content tree for marketing pages.
//!
//! A page is an ordered list of components; each component owns an ordered
//! list of fields. Fields are leaves (text, headings, images, buttons) that
//! may additionally carry repeatable children: nested `items`, tab groups,
//! opening-hours rows, or a free-form `props` bag. The shapes here mirror
//! what the renderer consumes, so keys this model has no column for are kept
//! verbatim and written back on save.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single editable content node.
///
/// The `kind` tag ("text", "heading", "image", "carousel", ...) says which
/// attributes are meaningful to the renderer; it never changes how the tree
/// is walked. The container vectors are not mutually exclusive and each one
/// is handled independently.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,

    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Main text payload for text-like fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Image source for image-like fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Nested child fields, in render order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Field>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<TabGroup>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hours: Vec<HoursEntry>,

    /// Free-form key/value bag. Values stay JSON so malformed legacy data
    /// degrades at the point of use instead of failing the whole load.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,

    /// Every key this model has no column for, preserved verbatim so
    /// hand-edited or migrated pages survive a load/save round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Field {
    pub fn new(key: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Shorthand for a text field with its content set.
    pub fn text(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(key, "text").with_content(content)
    }

    /// Shorthand for an image field with its source set.
    pub fn image(key: impl Into<String>, src: impl Into<String>) -> Self {
        let mut field = Self::new(key, "image");
        field.src = Some(src.into());
        field
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_item(mut self, item: Field) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_tab(mut self, tab: TabGroup) -> Self {
        self.tabs.push(tab);
        self
    }

    pub fn with_hours(mut self, entry: HoursEntry) -> Self {
        self.hours.push(entry);
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), Value::String(value.into()));
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Read a named text attribute. Typed attributes win over `extra`;
    /// non-string `extra` values read as absent.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        match name {
            "content" => self.content.as_deref(),
            "src" => self.src.as_deref(),
            "alt" => self.alt.as_deref(),
            "link" => self.link.as_deref(),
            _ => self.extra.get(name).and_then(Value::as_str),
        }
    }

    /// Write a named text attribute. Names without a typed column land in
    /// `extra`, matching plain property assignment on the wire shape.
    pub fn set_text_value(&mut self, name: &str, value: &str) {
        match name {
            "content" => self.content = Some(value.to_string()),
            "src" => self.src = Some(value.to_string()),
            "alt" => self.alt = Some(value.to_string()),
            "link" => self.link = Some(value.to_string()),
            _ => {
                self.extra
                    .insert(name.to_string(), Value::String(value.to_string()));
            }
        }
    }
}

/// One labelled tab and the fields shown when it is active.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabGroup {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Field>,
}

impl TabGroup {
    pub fn new(label: impl Into<String>, content: Vec<Field>) -> Self {
        Self {
            label: label.into(),
            content,
        }
    }
}

/// One opening-hours row.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursEntry {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub day: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub time: String,
}

impl HoursEntry {
    pub fn new(day: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            time: time.into(),
        }
    }
}

/// A top-level page section (hero, contact block, testimonial wall, ...).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Explicit stable identity. Preferred over `kind` when addressing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Field>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Component {
    pub fn new(key: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// A component addressed only by its type (no explicit key).
    pub fn of_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_item(mut self, item: Field) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), Value::String(value.into()));
        self
    }

    /// Stable identity used in leaf addresses: the explicit key, else the
    /// component type, else the page position. Empty strings count as absent.
    pub fn identity(&self, index: usize) -> String {
        if let Some(key) = self.key.as_deref().filter(|key| !key.is_empty()) {
            return key.to_string();
        }
        if !self.kind.is_empty() {
            return self.kind.clone();
        }
        index.to_string()
    }
}

/// An ordered sequence of components. Order is render order and every
/// transform in this workspace preserves it.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page {
    pub components: Vec<Component>,
}

impl Page {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// First component whose identity matches. Later components shadowed by
    /// a duplicate identity are unreachable by address.
    pub fn component(&self, identity: &str) -> Option<&Component> {
        self.components
            .iter()
            .enumerate()
            .find(|(index, component)| component.identity(*index) == identity)
            .map(|(_, component)| component)
    }

    pub fn component_mut(&mut self, identity: &str) -> Option<&mut Component> {
        self.components
            .iter_mut()
            .enumerate()
            .find(|(index, component)| component.identity(*index) == identity)
            .map(|(_, component)| component)
    }
}
