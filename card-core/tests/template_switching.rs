//! Template Switching Integration Tests
//!
//! Tests template application against real catalog entries:
//! - Overrides relocate content, empty logos stay hidden
//! - Re-applying a template keeps user text
//! - Switching A -> B -> A restores A's look
//! - Whole-card application

use std::collections::BTreeMap;

use card_core::catalog;
use card_core::{
    apply_template, apply_template_to_card, CardInfo, Element, ElementPatch, ElementType,
    PhysicalCardConfig, Side, Template, TemplateStyle, TextStyle,
};
use pretty_assertions::assert_eq;

fn card() -> PhysicalCardConfig {
    PhysicalCardConfig::from_card_info(&CardInfo {
        name: "Grace Hopper".to_string(),
        title: "Rear Admiral".to_string(),
        company: "Navy".to_string(),
        email: "grace@example.com".to_string(),
        phone: "555-0100".to_string(),
        logo: String::new(),
    })
}

/// `(type, content)` of every user element, in order.
fn user_content(side: &Side) -> Vec<(ElementType, String)> {
    side.user_elements()
        .map(|e| (e.kind, e.content_str().to_string()))
        .collect()
}

/// Everything about the decorations except their ids.
fn decoration_look(side: &Side) -> Vec<String> {
    side.decorations()
        .map(|e| {
            format!(
                "{}|{}|{}|{}|{:?}|{:?}|{:?}",
                e.kind, e.content_str(), e.x, e.y, e.width, e.height, e.opacity
            )
        })
        .collect()
}

// ============================================================================
// Override Semantics
// ============================================================================

#[test]
fn test_name_override_and_hidden_empty_logo() {
    let side = Side::with_elements(vec![
        Element::new(ElementType::Name, 20.0, 30.0).with_id("n"),
        Element::new(ElementType::Logo, 350.0, 20.0)
            .with_id("l")
            .with_content("")
            .with_visible(true),
    ]);
    let template = Template {
        id: "plain".to_string(),
        name: "Plain".to_string(),
        description: String::new(),
        preview_color: "#ffffff".to_string(),
        thumbnail_gradient: None,
        style: TemplateStyle {
            background_color: "#ffffff".to_string(),
            background_image: None,
            text_style: TextStyle::default(),
            decorations: Vec::new(),
            layout_overrides: BTreeMap::from([(ElementType::Name, ElementPatch::at(70.0, 40.0))]),
        },
    };

    let result = apply_template(&side, &template);

    let name = result.get(&"n".into()).expect("name kept");
    assert_eq!((name.x, name.y), (70.0, 40.0));
    let logo = result.get(&"l".into()).expect("logo kept");
    assert!(!logo.is_visible);
}

#[test]
fn test_catalog_template_restyles_front() {
    let template = catalog::require("swiss").expect("swiss exists");
    let front = apply_template(&card().front, template);

    assert_eq!(front.background_color.as_deref(), Some(template.style.background_color.as_str()));
    assert_eq!(front.decorations().count(), template.style.decorations.len());
    assert_eq!(user_content(&front), user_content(&card().front));

    let name = front.get(&"name".into()).expect("name");
    assert_eq!(name.color, template.style.text_style.color);
    assert!(!front.get(&"logo".into()).expect("logo").is_visible);
    front.validate().expect("well-formed");
}

// ============================================================================
// Idempotence and Round Trips
// ============================================================================

#[test]
fn test_every_template_is_idempotent_on_content() {
    for template in catalog::templates() {
        let once = apply_template(&card().front, template);
        let twice = apply_template(&once, template);
        assert_eq!(user_content(&once), user_content(&twice), "{}", template.id);
        assert_eq!(decoration_look(&once), decoration_look(&twice));
        twice.validate().expect("ids unique");
    }
}

#[test]
fn test_switch_a_b_a_restores_look_and_content() {
    let a = catalog::require("bauhaus_v2").expect("bauhaus_v2");
    let b = catalog::require("vaporwave").expect("vaporwave");
    let original = card().front;

    let first = apply_template(&original, a);
    let switched = apply_template(&first, b);
    let back = apply_template(&switched, a);

    assert_eq!(decoration_look(&back), decoration_look(&first));
    assert_eq!(back.background_color, first.background_color);
    assert_eq!(back.background_image, first.background_image);
    assert_eq!(user_content(&back), user_content(&original));

    let positions = |side: &Side| -> Vec<(f32, f32)> {
        side.user_elements().map(|e| (e.x, e.y)).collect()
    };
    assert_eq!(positions(&back), positions(&first));
}

#[test]
fn test_decorations_never_accumulate() {
    let mut side = card().front;
    for template in catalog::templates().iter().cycle().take(45) {
        side = apply_template(&side, template);
        assert_eq!(side.decorations().count(), template.style.decorations.len());
        assert_eq!(side.user_elements().count(), 6);
    }
}

// ============================================================================
// Whole Card
// ============================================================================

#[test]
fn test_card_application_keeps_logo_singleton() {
    let mut config = card();
    config.assign_logo("data:image/png;base64,AAAA");
    let template = catalog::require("celestial").expect("celestial");
    let styled = apply_template_to_card(&config, template);

    for side in [&styled.front, &styled.back] {
        let logos: Vec<_> = side
            .user_elements()
            .filter(|e| e.kind == ElementType::Logo)
            .collect();
        assert_eq!(logos.len(), 1);
        assert!(logos[0].is_visible);
    }

    let json = styled.to_json().expect("serialize");
    let parsed = PhysicalCardConfig::from_json(&json).expect("parse");
    assert_eq!(parsed, styled);
}
