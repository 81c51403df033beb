//! Conversion between native list items and the uniform editable node.
//!
//! Array items arrive in whatever shape the component's original authoring
//! produced. [`to_uniform`] lifts one native item into an editable
//! [`Field`]; [`from_uniform`] merges the edited canonical values back over
//! the original object, so keys the editor never touched survive verbatim.
//! Dual-alias fields are written to every alias on the way back to stay
//! compatible with legacy renderers reading either name.

use serde_json::{Map, Value};
use vitrine_model::Field;

use crate::normalizer::{field_to_value, value_to_field, ArrayKind};

/// One canonical editable field and the native keys it may live under.
/// `aliases[0]` is the canonical key; reads take the first present alias,
/// writes go to every alias.
struct CanonicalField {
    key: &'static str,
    kind: &'static str,
    aliases: &'static [&'static str],
}

const TESTIMONIAL_FIELDS: [CanonicalField; 4] = [
    CanonicalField {
        key: "name",
        kind: "text",
        aliases: &["name"],
    },
    CanonicalField {
        key: "quote",
        kind: "text",
        aliases: &["quote", "content"],
    },
    CanonicalField {
        key: "role",
        kind: "text",
        aliases: &["role", "position"],
    },
    CanonicalField {
        key: "image",
        kind: "image",
        aliases: &["image", "avatar"],
    },
];

const TEAM_MEMBER_FIELDS: [CanonicalField; 4] = [
    CanonicalField {
        key: "name",
        kind: "text",
        aliases: &["name"],
    },
    CanonicalField {
        key: "role",
        kind: "text",
        aliases: &["role", "position"],
    },
    CanonicalField {
        key: "bio",
        kind: "text",
        aliases: &["bio", "description"],
    },
    CanonicalField {
        key: "image",
        kind: "image",
        aliases: &["image", "photo"],
    },
];

const FAQ_FIELDS: [CanonicalField; 2] = [
    CanonicalField {
        key: "question",
        kind: "text",
        aliases: &["question"],
    },
    CanonicalField {
        key: "answer",
        kind: "text",
        aliases: &["answer"],
    },
];

const IMAGE_SRC_ALIASES: [&str; 2] = ["src", "url"];

/// Lift one native item into the uniform editable node for its kind.
/// Non-object input degrades to an empty node of the right shape.
pub fn to_uniform(kind: ArrayKind, native: &Value) -> Field {
    match kind {
        ArrayKind::Testimonials => sub_noded(native, "testimonial", &TESTIMONIAL_FIELDS),
        ArrayKind::TeamMembers => sub_noded(native, "teamMember", &TEAM_MEMBER_FIELDS),
        ArrayKind::Faqs => sub_noded(native, "faq", &FAQ_FIELDS),
        ArrayKind::Carousel | ArrayKind::Gallery => image_node(native),
        ArrayKind::ClientLogos | ArrayKind::CtaButtons | ArrayKind::Generic => {
            value_to_field(native.clone())
        }
    }
}

/// Merge the edited node back over the original native item. The result is
/// always `{...original, ...edited canonical fields}`; it never drops keys
/// the node has no column for.
pub fn from_uniform(kind: ArrayKind, original: &Value, edited: &Field) -> Value {
    match kind {
        ArrayKind::Testimonials => merge_sub_noded(original, edited, &TESTIMONIAL_FIELDS),
        ArrayKind::TeamMembers => merge_sub_noded(original, edited, &TEAM_MEMBER_FIELDS),
        ArrayKind::Faqs => merge_sub_noded(original, edited, &FAQ_FIELDS),
        ArrayKind::Carousel | ArrayKind::Gallery => merge_image_node(original, edited),
        ArrayKind::ClientLogos | ArrayKind::CtaButtons | ArrayKind::Generic => {
            merge_field_node(original, edited)
        }
    }
}

fn object(native: &Value) -> Map<String, Value> {
    native.as_object().cloned().unwrap_or_default()
}

fn read_alias<'a>(map: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .find_map(|alias| map.get(*alias).and_then(Value::as_str))
}

fn write_aliases(map: &mut Map<String, Value>, aliases: &[&str], value: &str) {
    for alias in aliases {
        map.insert((*alias).to_string(), Value::String(value.to_string()));
    }
}

/// Uniform shape for testimonial-like kinds: one node per item with a fixed
/// set of child fields, present even when the native value is missing so the
/// editor always shows the same slots.
fn sub_noded(native: &Value, node_kind: &str, table: &[CanonicalField]) -> Field {
    let map = native.as_object();
    let mut node = Field::new("", node_kind);
    for canonical in table {
        let value = map.and_then(|map| read_alias(map, canonical.aliases));
        let child = match value {
            Some(text) if canonical.kind == "image" => Field::image(canonical.key, text),
            Some(text) => Field::text(canonical.key, text),
            None => Field::new(canonical.key, canonical.kind),
        };
        node.items.push(child);
    }
    node
}

fn merge_sub_noded(original: &Value, edited: &Field, table: &[CanonicalField]) -> Value {
    let mut merged = object(original);
    for canonical in table {
        let child = edited.items.iter().find(|item| item.key == canonical.key);
        let Some(child) = child else { continue };
        let value = if canonical.kind == "image" {
            child.src.as_deref()
        } else {
            child.content.as_deref()
        };
        if let Some(value) = value {
            write_aliases(&mut merged, canonical.aliases, value);
        }
    }
    Value::Object(merged)
}

/// Carousel and gallery items become flat image fields.
fn image_node(native: &Value) -> Field {
    let map = native.as_object();
    let mut node = Field::new("", "image");
    node.src = map
        .and_then(|map| read_alias(map, &IMAGE_SRC_ALIASES))
        .map(str::to_string);
    node.alt = map
        .and_then(|map| map.get("alt"))
        .and_then(Value::as_str)
        .map(str::to_string);
    node.link = map
        .and_then(|map| map.get("link"))
        .and_then(Value::as_str)
        .map(str::to_string);
    node
}

fn merge_image_node(original: &Value, edited: &Field) -> Value {
    let mut merged = object(original);
    if let Some(src) = edited.src.as_deref() {
        write_aliases(&mut merged, &IMAGE_SRC_ALIASES, src);
    }
    if let Some(alt) = edited.alt.as_deref() {
        merged.insert("alt".to_string(), Value::String(alt.to_string()));
    }
    if let Some(link) = edited.link.as_deref() {
        merged.insert("link".to_string(), Value::String(link.to_string()));
    }
    Value::Object(merged)
}

/// Generic items are already field-shaped; the edited node's wire form is
/// spread over the original object key by key.
fn merge_field_node(original: &Value, edited: &Field) -> Value {
    let mut merged = object(original);
    if let Value::Object(changes) = field_to_value(edited) {
        for (key, value) in changes {
            merged.insert(key, value);
        }
    }
    if let Some(src) = edited.src.as_deref() {
        write_aliases(&mut merged, &IMAGE_SRC_ALIASES, src);
    }
    Value::Object(merged)
}
