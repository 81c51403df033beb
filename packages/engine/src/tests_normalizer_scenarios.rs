//! Repeatable-list editing flows across detection and the uniform adapters.

use serde_json::json;
use vitrine_model::Component;

use crate::normalizer::{array_items, detect_array_kind, with_array_items, ArrayKind};
use crate::uniform::{from_uniform, to_uniform};

fn carousel_component() -> Component {
    serde_json::from_value(json!({
        "key": "showcase",
        "type": "gallerySection",
        "items": [{
            "key": "slider",
            "type": "carousel",
            "autoplay": true,
            "images": [
                { "src": "a.png", "alt": "Dining room" },
                { "url": "b.png" }
            ]
        }]
    }))
    .unwrap()
}

#[test]
fn test_carousel_detection_scenario() {
    let component = carousel_component();

    let detection = detect_array_kind(&component);
    assert_eq!(detection.kind, ArrayKind::Carousel);
    assert_eq!(detection.property, "images");

    let items = array_items(&component);
    assert_eq!(
        items,
        vec![
            json!({ "src": "a.png", "alt": "Dining room" }),
            json!({ "url": "b.png" })
        ]
    );
}

#[test]
fn test_carousel_slide_edit_round_trip() {
    let component = carousel_component();
    let detection = detect_array_kind(&component);
    let natives = array_items(&component);

    // Edit the second slide through its uniform node.
    let mut edited: Vec<_> = natives
        .iter()
        .map(|native| to_uniform(detection.kind, native))
        .collect();
    edited[1].alt = Some("Terrace at noon".to_string());

    let rebuilt: Vec<_> = natives
        .iter()
        .zip(&edited)
        .map(|(native, node)| from_uniform(detection.kind, native, node))
        .collect();
    let updated = with_array_items(&component, rebuilt);

    let slides = array_items(&updated);
    assert_eq!(slides[1]["alt"], json!("Terrace at noon"));
    // src was read from the url alias and written back to both.
    assert_eq!(slides[1]["src"], json!("b.png"));
    assert_eq!(slides[1]["url"], json!("b.png"));
    // Untouched slide and sibling keys survive.
    assert_eq!(slides[0]["alt"], json!("Dining room"));
    assert_eq!(updated.items[0].extra.get("autoplay"), Some(&json!(true)));
    // The input component is unchanged.
    assert_eq!(array_items(&component)[1], json!({ "url": "b.png" }));
}

#[test]
fn test_testimonial_wall_edit_preserves_unknown_keys() {
    let component: Component = serde_json::from_value(json!({
        "key": "wall",
        "type": "socialProof",
        "items": [{
            "key": "list",
            "type": "group",
            "testimonials": [
                { "name": "Ada", "quote": "Great service", "rating": 5 },
                { "name": "Grace", "content": "Superb food", "avatar": "grace.png" }
            ]
        }]
    }))
    .unwrap();

    let detection = detect_array_kind(&component);
    assert_eq!(detection.kind, ArrayKind::Testimonials);

    let natives = array_items(&component);
    let mut second = to_uniform(detection.kind, &natives[1]);
    for child in &mut second.items {
        if child.key == "quote" {
            child.content = Some("Nourriture superbe".to_string());
        }
    }

    let merged = from_uniform(detection.kind, &natives[1], &second);
    let updated = with_array_items(
        &component,
        vec![natives[0].clone(), merged],
    );

    let rebuilt = array_items(&updated);
    assert_eq!(rebuilt[1]["quote"], json!("Nourriture superbe"));
    assert_eq!(rebuilt[1]["content"], json!("Nourriture superbe"));
    assert_eq!(rebuilt[1]["avatar"], json!("grace.png"));
    assert_eq!(rebuilt[0]["rating"], json!(5));
}

#[test]
fn test_uniform_nodes_expose_one_shape_per_kind() {
    // Items with disjoint alias sets still produce identical child slots.
    let with_aliases = to_uniform(
        ArrayKind::TeamMembers,
        &json!({ "name": "Ada", "position": "CEO", "photo": "ada.png" }),
    );
    let with_canonical = to_uniform(
        ArrayKind::TeamMembers,
        &json!({ "name": "Grace", "role": "CTO", "image": "grace.png" }),
    );

    let keys = |node: &vitrine_model::Field| {
        node.items
            .iter()
            .map(|child| child.key.clone())
            .collect::<Vec<_>>()
    };

    assert_eq!(keys(&with_aliases), keys(&with_canonical));
    assert_eq!(keys(&with_aliases), vec!["name", "role", "bio", "image"]);
}
