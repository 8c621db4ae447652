//! Redesign Integration Tests
//!
//! Tests the procedural redesign on real templates:
//! - Collision bound under the left archetype
//! - Deterministic exhaustion paths with a fixed random source
//! - Blur fallback under the left and asym archetypes
//! - Redesign after template application keeps content

use card_core::catalog;
use card_core::redesign::{FORCED_OPACITY, MAX_PLACEMENT_ATTEMPTS};
use card_core::{
    apply_template, redesign, redesign_with_rng, Archetype, CardInfo, Element, ElementType,
    PhysicalCardConfig, RedesignOptions, Side,
};
use proptest::prelude::*;
use rand::RngCore;
use std::ops::RangeInclusive;

/// A random source stuck at the midpoint of every range.
struct Midpoint;

impl RngCore for Midpoint {
    fn next_u32(&mut self) -> u32 {
        0x8000_0000
    }

    fn next_u64(&mut self) -> u64 {
        0x8000_0000_0000_0000
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0x80);
    }
}

fn styled_front(template: &str) -> Side {
    let card = PhysicalCardConfig::from_card_info(&CardInfo {
        name: "Ada Lovelace".to_string(),
        title: "Analyst".to_string(),
        company: "Engines Ltd".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555".to_string(),
        logo: "data:image/png;base64,AAAA".to_string(),
    });
    let template = catalog::require(template).expect("template exists");
    apply_template(&card.front, template)
}

fn single_decoration() -> Side {
    Side::with_elements(vec![
        Element::new(ElementType::Logo, 0.0, 0.0)
            .with_id("blob")
            .with_size(100.0, 100.0)
            .as_decoration(),
        Element::new(ElementType::Name, 0.0, 0.0)
            .with_id("n")
            .with_content("Ada"),
    ])
}

fn scattered_side(decorations: usize) -> Side {
    let mut elements: Vec<Element> = (0..decorations)
        .map(|i| {
            Element::new(ElementType::Logo, 0.0, 0.0)
                .with_id(format!("dot-{i}"))
                .with_size(30.0, 30.0)
                .as_decoration()
        })
        .collect();
    for (kind, id) in [
        (ElementType::Name, "name"),
        (ElementType::Title, "title"),
        (ElementType::Company, "company"),
        (ElementType::Email, "email"),
        (ElementType::Phone, "phone"),
    ] {
        elements.push(Element::new(kind, 0.0, 0.0).with_id(id).with_content(id));
    }
    Side::with_elements(elements)
}

const MIDDLE_THIRD: RangeInclusive<f32> = 100.0..=350.0;

// ============================================================================
// Collision Bound
// ============================================================================

proptest! {
    #[test]
    fn prop_left_keeps_prominent_decorations_out_of_text_zone(
        seed in any::<u64>(),
        template_index in 0usize..catalog::templates().len(),
    ) {
        let template = &catalog::templates()[template_index];
        let side = styled_front(&template.id);
        let zone = Archetype::Left.text_zone();

        let options = RedesignOptions { archetype: Some(Archetype::Left), seed: Some(seed) };
        let (result, report) = redesign(&side, &options);

        for decoration in result.decorations() {
            let opacity = decoration.opacity.unwrap_or(1.0);
            if decoration.is_visible && opacity > 0.25 {
                prop_assert!(
                    !decoration.bounds().intersects(&zone),
                    "{} overlaps the text zone at opacity {}",
                    decoration.id,
                    opacity
                );
            }
        }
        for placement in report.placements.iter().filter(|p| p.forced) {
            let decoration = result.get(&placement.id).expect("placed");
            prop_assert!(decoration.opacity.unwrap_or(1.0) <= FORCED_OPACITY);
            prop_assert_eq!(placement.attempts, MAX_PLACEMENT_ATTEMPTS);
        }
    }

    #[test]
    fn prop_redesign_preserves_content(seed in any::<u64>()) {
        let side = styled_front("memphis");
        let (result, _) = redesign(&side, &RedesignOptions { archetype: None, seed: Some(seed) });

        prop_assert!(result.validate().is_ok());
        let before: Vec<_> = side.user_elements().map(|e| (e.id.clone(), e.content.clone())).collect();
        let after: Vec<_> = result.user_elements().map(|e| (e.id.clone(), e.content.clone())).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(result.decorations().count(), side.decorations().count());
        prop_assert_eq!(&result.background_color, &side.background_color);
    }
}

// ============================================================================
// Deterministic Exhaustion Paths
// ============================================================================

#[test]
fn test_left_succeeds_on_first_edge_biased_attempt() {
    let (result, report) = redesign_with_rng(&single_decoration(), Some(Archetype::Left), &mut Midpoint);

    let placement = &report.placements[0];
    assert!(!placement.forced);
    assert_eq!(placement.attempts, 7);

    let blob = result.get(&"blob".into()).expect("blob");
    assert!(blob.x >= Archetype::Left.text_zone().right());
    assert!(blob.opacity.expect("opacity") > 0.25);
}

#[test]
fn test_asym_exhausts_and_forces_low_opacity() {
    let (result, report) = redesign_with_rng(&single_decoration(), Some(Archetype::Asym), &mut Midpoint);

    let placement = &report.placements[0];
    assert!(placement.forced);
    assert_eq!(placement.attempts, MAX_PLACEMENT_ATTEMPTS);
    assert_eq!(report.forced_count(), 1);

    let blob = result.get(&"blob".into()).expect("blob");
    assert_eq!(blob.opacity, Some(FORCED_OPACITY));
}

#[test]
fn test_center_blurs_primary_text_regardless_of_decorations() {
    let side = styled_front("scandi");
    let (result, report) = redesign(
        &side,
        &RedesignOptions {
            archetype: Some(Archetype::Center),
            seed: Some(99),
        },
    );
    assert!(report.backdrop_blur);
    for id in ["name", "title", "company"] {
        assert!(result.get(&id.into()).expect("kept").has_backdrop_blur);
    }
}

#[test]
fn test_template_after_redesign_clears_blur() {
    let side = styled_front("glass_v2");
    let (redesigned, _) = redesign(
        &side,
        &RedesignOptions {
            archetype: Some(Archetype::Center),
            seed: Some(5),
        },
    );
    let template = catalog::require("glass_v2").expect("glass_v2");
    let restyled = apply_template(&redesigned, template);
    assert!(restyled.user_elements().all(|e| !e.has_backdrop_blur));
}

// ============================================================================
// Blur Fallback
// ============================================================================

#[test]
fn test_blur_follows_prominent_decorations_in_middle_third() {
    let side = scattered_side(3);
    let (mut blurred, mut clear) = (0, 0);

    for archetype in [Archetype::Left, Archetype::Asym] {
        for seed in 0..200 {
            let options = RedesignOptions { archetype: Some(archetype), seed: Some(seed) };
            let (result, report) = redesign(&side, &options);

            let expected = result.decorations().any(|d| {
                d.is_visible && d.opacity.unwrap_or(1.0) > 0.4 && MIDDLE_THIRD.contains(&d.x)
            });
            assert_eq!(report.backdrop_blur, expected, "{archetype} seed {seed}");
            for id in ["name", "title", "company"] {
                let element = result.get(&id.into()).expect("kept");
                assert_eq!(element.has_backdrop_blur, expected, "{id} {archetype} seed {seed}");
            }
            for id in ["email", "phone"] {
                assert!(!result.get(&id.into()).expect("kept").has_backdrop_blur);
            }

            if expected {
                blurred += 1;
            } else {
                clear += 1;
            }
        }
    }

    assert!(blurred > 0, "no run triggered the blur");
    assert!(clear > 0, "every run triggered the blur");
}

#[test]
fn test_no_decorations_means_no_blur_off_center() {
    let side = scattered_side(0);
    for archetype in [Archetype::Left, Archetype::Asym] {
        for seed in 0..20 {
            let options = RedesignOptions { archetype: Some(archetype), seed: Some(seed) };
            let (result, report) = redesign(&side, &options);
            assert!(!report.backdrop_blur, "{archetype} seed {seed}");
            assert!(result.user_elements().all(|e| !e.has_backdrop_blur));
        }
    }
}

#[test]
fn test_forced_placement_is_too_faint_to_blur() {
    let (result, report) = redesign_with_rng(&scattered_side(1), Some(Archetype::Asym), &mut Midpoint);

    let dot = result.get(&"dot-0".into()).expect("dot");
    assert!(MIDDLE_THIRD.contains(&dot.x));
    assert_eq!(dot.opacity, Some(FORCED_OPACITY));
    assert!(!report.backdrop_blur);
    assert!(result.user_elements().all(|e| !e.has_backdrop_blur));
}
