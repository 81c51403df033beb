//! End-to-end translation flows: extract, diff, apply.

use serde_json::json;
use vitrine_model::Page;

use crate::differ::diff;
use crate::extract::extract_text;
use crate::overlay::{apply_overlay, overlay_from_diff, Overlay};

/// A small but representative page in its wire shape.
fn bistro_page() -> Page {
    serde_json::from_value(json!([
        {
            "key": "hero",
            "type": "heroSection",
            "items": [
                { "key": "headline", "type": "heading", "content": "Welcome" },
                { "key": "sub", "type": "text", "content": "Fresh, local cooking" },
                { "key": "cta", "type": "button", "content": "Book a table", "analyticsId": "cta-1" }
            ],
            "props": { "tagline": "Since 1998" }
        },
        {
            "type": "aboutSection",
            "items": [
                {
                    "key": "story",
                    "type": "text",
                    "content": "Our story",
                    "items": [
                        { "key": "detail", "type": "text", "content": "Two brothers, one kitchen" }
                    ]
                }
            ]
        },
        {
            "type": "contactSection",
            "items": [
                {
                    "key": "schedule",
                    "type": "hours",
                    "hours": [
                        { "day": "Monday", "time": "9-17" },
                        { "day": "Saturday", "time": "10-14" }
                    ]
                }
            ]
        }
    ]))
    .unwrap()
}

#[test]
fn test_extraction_doubles_as_identity_overlay() {
    let page = bistro_page();
    let extracted = extract_text(&page);

    let overlay: Overlay = extracted.into_iter().collect();
    let reapplied = apply_overlay(&page, &overlay);

    assert_eq!(reapplied, page);
}

#[test]
fn test_hero_translation_flow() {
    let base = bistro_page();

    let mut current = base.clone();
    current.components[0].items[0].content = Some("Bienvenue".to_string());

    let changes = diff(&current, &base);
    assert_eq!(changes.len(), 1);

    let entry = &changes["component_hero.items[0].content"];
    assert_eq!(entry.value, "Bienvenue");
    assert_eq!(entry.source_text, "Welcome");

    let translated = apply_overlay(&base, &overlay_from_diff(&changes));

    // The only difference from base is the translated leaf.
    let mut expected = base.clone();
    expected.components[0].items[0].content = Some("Bienvenue".to_string());
    assert_eq!(translated, expected);
}

#[test]
fn test_overlay_survives_unrelated_base_edits() {
    let base = bistro_page();

    // Translate the headline against today's base.
    let mut overlay = Overlay::new();
    overlay.insert(
        "component_hero.items[0].content".to_string(),
        "Bienvenue".to_string(),
    );

    // The page is edited later without touching structure.
    let mut updated_base = base.clone();
    updated_base.components[0].items[1].content = Some("Seasonal menu weekly".to_string());

    let view = apply_overlay(&updated_base, &overlay);

    assert_eq!(
        view.components[0].items[0].content.as_deref(),
        Some("Bienvenue")
    );
    assert_eq!(
        view.components[0].items[1].content.as_deref(),
        Some("Seasonal menu weekly")
    );
}

#[test]
fn test_stale_overlay_entries_skip_after_structure_change() {
    let base = bistro_page();

    let mut overlay = Overlay::new();
    overlay.insert(
        "component_hero.items[2].content".to_string(),
        "Réserver".to_string(),
    );
    overlay.insert(
        "component_hero.items[0].content".to_string(),
        "Bienvenue".to_string(),
    );

    // The CTA is removed after the translation was stored.
    let mut shrunk = base.clone();
    shrunk.components[0].items.truncate(2);

    let view = apply_overlay(&shrunk, &overlay);

    assert_eq!(view.components[0].items.len(), 2);
    assert_eq!(
        view.components[0].items[0].content.as_deref(),
        Some("Bienvenue")
    );
}

#[test]
fn test_patched_tree_shares_no_storage_with_base() {
    let mut base = bistro_page();
    let patched = apply_overlay(&base, &Overlay::new());

    base.components[0].items[0].content = Some("Mutated".to_string());
    base.components[1].items[0].items.clear();
    base.components[2].items[0].hours[0].day = "Mardi".to_string();

    assert_eq!(
        patched.components[0].items[0].content.as_deref(),
        Some("Welcome")
    );
    assert_eq!(patched.components[1].items[0].items.len(), 1);
    assert_eq!(patched.components[2].items[0].hours[0].day, "Monday");
}

#[test]
fn test_hours_and_props_translate_like_any_leaf() {
    let base = bistro_page();

    let mut overlay = Overlay::new();
    overlay.insert(
        "component_contactSection.items[0].hours[0].day".to_string(),
        "Lundi".to_string(),
    );
    overlay.insert(
        "component_hero.props.tagline".to_string(),
        "Depuis 1998".to_string(),
    );

    let view = apply_overlay(&base, &overlay);

    assert_eq!(view.components[2].items[0].hours[0].day, "Lundi");
    assert_eq!(
        view.components[0].props.get("tagline"),
        Some(&json!("Depuis 1998"))
    );

    // Round-trip through diff reproduces the same overlay.
    let changes = diff(&view, &base);
    assert_eq!(overlay_from_diff(&changes), overlay);
}
