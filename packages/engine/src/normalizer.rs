//! Array-kind detection and uniform list access.
//!
//! Components keep their repeatable list under whatever property their
//! original authoring produced: `testimonials`, `teamMembers`, `slides`,
//! plain nested `items` and a few more. Detection is a single ordered rule
//! table scanned top to bottom, each rule checking every item before the
//! next rule runs. Property priority therefore beats item position, which
//! keeps the result deterministic for legacy components that carry more
//! than one candidate array.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use vitrine_model::{Component, Field};

/// Semantic category of a component's repeatable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArrayKind {
    Carousel,
    Gallery,
    Testimonials,
    TeamMembers,
    Faqs,
    ClientLogos,
    CtaButtons,
    Generic,
}

impl ArrayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrayKind::Carousel => "carousel",
            ArrayKind::Gallery => "gallery",
            ArrayKind::Testimonials => "testimonials",
            ArrayKind::TeamMembers => "teamMembers",
            ArrayKind::Faqs => "faqs",
            ArrayKind::ClientLogos => "clientLogos",
            ArrayKind::CtaButtons => "ctaButtons",
            ArrayKind::Generic => "generic",
        }
    }
}

impl std::fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a component keeps its repeatable list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrayDetection {
    pub kind: ArrayKind,
    #[serde(rename = "propertyName")]
    pub property: &'static str,
}

/// One detection rule: an optional item-type gate plus the property that
/// must hold a non-empty array.
struct DetectionRule {
    item_type: Option<&'static str>,
    property: &'static str,
    kind: ArrayKind,
}

/// Evaluated top to bottom; first match wins. `slides` is a legacy alias
/// for carousels and maps onto the same kind.
const DETECTION_RULES: [DetectionRule; 9] = [
    DetectionRule {
        item_type: Some("carousel"),
        property: "images",
        kind: ArrayKind::Carousel,
    },
    DetectionRule {
        item_type: Some("gallery"),
        property: "value",
        kind: ArrayKind::Gallery,
    },
    DetectionRule {
        item_type: None,
        property: "testimonials",
        kind: ArrayKind::Testimonials,
    },
    DetectionRule {
        item_type: None,
        property: "teamMembers",
        kind: ArrayKind::TeamMembers,
    },
    DetectionRule {
        item_type: None,
        property: "faqs",
        kind: ArrayKind::Faqs,
    },
    DetectionRule {
        item_type: None,
        property: "slides",
        kind: ArrayKind::Carousel,
    },
    DetectionRule {
        item_type: None,
        property: "clientLogos",
        kind: ArrayKind::ClientLogos,
    },
    DetectionRule {
        item_type: None,
        property: "ctaButtons",
        kind: ArrayKind::CtaButtons,
    },
    DetectionRule {
        item_type: None,
        property: "items",
        kind: ArrayKind::Generic,
    },
];

/// Candidate properties that live in `extra` rather than a typed column.
/// The validator uses this list to flag non-array values under these names.
pub(crate) const CANDIDATE_EXTRA_PROPERTIES: [&str; 8] = [
    "images",
    "value",
    "testimonials",
    "teamMembers",
    "faqs",
    "slides",
    "clientLogos",
    "ctaButtons",
];

impl DetectionRule {
    fn matches(&self, item: &Field) -> bool {
        if let Some(required) = self.item_type {
            if item.kind != required {
                return false;
            }
        }
        if self.property == "items" {
            !item.items.is_empty()
        } else {
            extra_array(item, self.property).map_or(false, |array| !array.is_empty())
        }
    }
}

/// The array under `property` on one item, if it is a JSON array. Non-array
/// values under a candidate name count as absent.
pub(crate) fn extra_array<'a>(item: &'a Field, property: &str) -> Option<&'a Vec<Value>> {
    item.extra.get(property).and_then(Value::as_array)
}

fn detect_with_index(component: &Component) -> (ArrayDetection, Option<usize>) {
    for rule in &DETECTION_RULES {
        for (index, item) in component.items.iter().enumerate() {
            if rule.matches(item) {
                return (
                    ArrayDetection {
                        kind: rule.kind,
                        property: rule.property,
                    },
                    Some(index),
                );
            }
        }
    }
    (
        ArrayDetection {
            kind: ArrayKind::Generic,
            property: "items",
        },
        None,
    )
}

/// Detect which property holds the component's repeatable list.
/// Falls back to `generic`/`items` when nothing matches.
pub fn detect_array_kind(component: &Component) -> ArrayDetection {
    detect_with_index(component).0
}

/// The detected list in its native shape, or empty when nothing matches.
/// Typed nested items are handed out in their wire shape so every kind
/// returns plain JSON values.
pub fn array_items(component: &Component) -> Vec<Value> {
    let (detection, index) = detect_with_index(component);
    let Some(index) = index else {
        return Vec::new();
    };
    let item = &component.items[index];
    if detection.property == "items" {
        item.items.iter().map(field_to_value).collect()
    } else {
        extra_array(item, detection.property)
            .cloned()
            .unwrap_or_default()
    }
}

/// New component with the detected list replaced by `new_items`. The list
/// lands on the item that carried it, or on the first item when nothing was
/// detected; everything else is preserved unchanged. A component with no
/// items at all comes back as a plain clone.
pub fn with_array_items(component: &Component, new_items: Vec<Value>) -> Component {
    let (detection, index) = detect_with_index(component);
    let mut updated = component.clone();

    let slot = match index {
        Some(index) => updated.items.get_mut(index),
        None => updated.items.first_mut(),
    };
    let Some(item) = slot else {
        return updated;
    };

    if detection.property == "items" {
        item.items = new_items.into_iter().map(value_to_field).collect();
    } else {
        item.extra
            .insert(detection.property.to_string(), Value::Array(new_items));
    }
    updated
}

/// UI branching helper: does this component have any repeatable content?
/// Not part of the diff engine.
pub fn has_array_content(component: &Component) -> bool {
    if detect_array_kind(component).kind != ArrayKind::Generic {
        return true;
    }
    component.items.iter().any(|item| {
        !item.items.is_empty()
            || extra_array(item, "images").map_or(false, |array| !array.is_empty())
            || extra_array(item, "value").map_or(false, |array| !array.is_empty())
    })
}

pub(crate) fn field_to_value(field: &Field) -> Value {
    serde_json::to_value(field).unwrap_or(Value::Null)
}

pub(crate) fn value_to_field(value: Value) -> Field {
    serde_json::from_value(value).unwrap_or_default()
}
