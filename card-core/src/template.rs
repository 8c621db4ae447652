//! Template styles and the template application algorithm.
//!
//! Applying a template never touches user-authored content strings. It
//! replaces the background, throws away old decorations, instantiates the
//! template's decorations under fresh ids, and restyles or relocates user
//! elements according to the template's layout overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementId, ElementPatch, ElementType};
use crate::side::{PhysicalCardConfig, Side, SideKind};

/// Default text styling stamped onto user text when a template is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// CSS font family list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

/// The visual part of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyle {
    /// Side background color.
    pub background_color: String,
    /// Side background image or gradient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    /// Base text styling.
    #[serde(default)]
    pub text_style: TextStyle,
    /// Decorative elements, all flagged as template decorations.
    #[serde(default)]
    pub decorations: Vec<Element>,
    /// Per-type position and style hints.
    #[serde(default)]
    pub layout_overrides: BTreeMap<ElementType, ElementPatch>,
}

/// A named catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Swatch color for the template picker.
    pub preview_color: String,
    /// Optional gradient for the picker thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_gradient: Option<String>,
    /// What applying the template does.
    pub style: TemplateStyle,
}

impl Template {
    /// Apply this template to one side. See [`apply_template`].
    #[must_use]
    pub fn apply(&self, side: &Side) -> Side {
        apply_template(side, self)
    }

    /// Fresh copies of the decorations, each under a new id.
    fn instantiate_decorations(&self) -> Vec<Element> {
        self.style
            .decorations
            .iter()
            .map(|decoration| {
                let mut element = decoration.clone();
                element.id = ElementId::scoped(decoration.id.as_str());
                element.is_template_decoration = true;
                element
            })
            .collect()
    }
}

/// Produce a side that looks like `template` while keeping the user's content.
///
/// 1. Background color and image come from the template.
/// 2. Old decorations are dropped; user elements are kept in order.
/// 3. Empty user logos are hidden.
/// 4. Text elements get the template's text style as a base layer, then the
///    layout override for their type. Text never inherits a background color
///    and loses any backdrop blur. An override cannot un-hide an empty logo.
/// 5. The template's decorations are instantiated under fresh ids.
/// 6. Decorations come first, so they draw behind user content.
#[must_use]
pub fn apply_template(side: &Side, template: &Template) -> Side {
    let style = &template.style;

    let mut user_elements: Vec<Element> = side
        .user_elements()
        .cloned()
        .map(|mut element| {
            restyle(&mut element, style);
            element
        })
        .collect();

    let mut elements = template.instantiate_decorations();
    let decoration_count = elements.len();
    elements.append(&mut user_elements);

    tracing::info!(
        template = %template.id,
        decorations = decoration_count,
        user_elements = elements.len() - decoration_count,
        "Applied template"
    );

    Side {
        elements,
        background_color: Some(style.background_color.clone()),
        background_image: style.background_image.clone(),
    }
}

/// Apply `template` to both faces of a card.
#[must_use]
pub fn apply_template_to_card(config: &PhysicalCardConfig, template: &Template) -> PhysicalCardConfig {
    let mut result = config.clone();
    for kind in SideKind::BOTH {
        *result.side_mut(kind) = apply_template(config.side(kind), template);
    }
    result
}

fn restyle(element: &mut Element, style: &TemplateStyle) {
    let empty_logo = element.kind == ElementType::Logo && !element.has_content();
    if empty_logo {
        element.is_visible = false;
    }

    if element.kind.is_textual() {
        if let Some(color) = &style.text_style.color {
            element.color = Some(color.clone());
        }
        if let Some(font_family) = &style.text_style.font_family {
            element.font_family = Some(font_family.clone());
        }
        element.has_backdrop_blur = false;
        element.background_color = None;
    }

    if let Some(patch) = style.layout_overrides.get(&element.kind) {
        if element.kind.is_textual() && patch.background_color.is_some() {
            let mut patch = patch.clone();
            patch.background_color = None;
            patch.apply_to(element);
        } else {
            patch.apply_to(element);
        }
    }

    if empty_logo {
        element.is_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Align;

    fn template(overrides: BTreeMap<ElementType, ElementPatch>) -> Template {
        Template {
            id: "test".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            preview_color: "#ffffff".to_string(),
            thumbnail_gradient: None,
            style: TemplateStyle {
                background_color: "#101010".to_string(),
                background_image: Some("linear-gradient(to right, #000, #fff)".to_string()),
                text_style: TextStyle {
                    color: Some("#eeeeee".to_string()),
                    font_family: Some("serif".to_string()),
                },
                decorations: vec![Element::new(ElementType::Logo, 0.0, 0.0)
                    .with_id("bar")
                    .with_size(20.0, 270.0)
                    .as_decoration()],
                layout_overrides: overrides,
            },
        }
    }

    fn side() -> Side {
        Side::with_elements(vec![
            Element::new(ElementType::Name, 20.0, 30.0)
                .with_id("n")
                .with_content("Ada"),
            Element::new(ElementType::Logo, 350.0, 20.0)
                .with_id("l")
                .with_content(""),
        ])
    }

    #[test]
    fn test_override_moves_name_and_hides_empty_logo() {
        let overrides = BTreeMap::from([(ElementType::Name, ElementPatch::at(70.0, 40.0))]);
        let result = apply_template(&side(), &template(overrides));

        let name = result.get(&"n".into()).expect("name kept");
        assert_eq!((name.x, name.y), (70.0, 40.0));
        let logo = result.get(&"l".into()).expect("logo kept");
        assert!(!logo.is_visible);
    }

    #[test]
    fn test_logo_override_cannot_resurrect_empty_logo() {
        let overrides = BTreeMap::from([(
            ElementType::Logo,
            ElementPatch::at(280.0, 80.0).size(60.0, 60.0).visible(true),
        )]);
        let result = apply_template(&side(), &template(overrides));
        let logo = result.get(&"l".into()).expect("logo kept");
        assert!(!logo.is_visible);
        assert_eq!((logo.x, logo.y), (280.0, 80.0));
    }

    #[test]
    fn test_text_style_is_base_layer_under_override() {
        let overrides = BTreeMap::from([(
            ElementType::Name,
            ElementPatch::at(10.0, 10.0).color("#ff0000").align(Align::Right),
        )]);
        let mut input = side();
        input.elements.push(
            Element::new(ElementType::Title, 0.0, 0.0)
                .with_id("t")
                .with_content("Analyst"),
        );
        let result = apply_template(&input, &template(overrides));

        let name = result.get(&"n".into()).expect("name");
        assert_eq!(name.color.as_deref(), Some("#ff0000"));
        assert_eq!(name.font_family.as_deref(), Some("serif"));
        assert_eq!(name.align, Some(Align::Right));

        // No override for title: only the palette changes
        let title = result.get(&"t".into()).expect("title");
        assert_eq!((title.x, title.y), (0.0, 0.0));
        assert_eq!(title.color.as_deref(), Some("#eeeeee"));
    }

    #[test]
    fn test_text_never_inherits_background_and_loses_blur() {
        let mut patch = ElementPatch::at(10.0, 10.0);
        patch.background_color = Some("#123456".to_string());
        let overrides = BTreeMap::from([(ElementType::Name, patch)]);
        let mut input = side();
        input.elements[0].has_backdrop_blur = true;
        input.elements[0].background_color = Some("#abcdef".to_string());

        let result = apply_template(&input, &template(overrides));
        let name = result.get(&"n".into()).expect("name");
        assert!(!name.has_backdrop_blur);
        assert_eq!(name.background_color, None);
    }

    #[test]
    fn test_decorations_first_with_fresh_ids() {
        let tpl = template(BTreeMap::new());
        let once = apply_template(&side(), &tpl);
        let twice = apply_template(&once, &tpl);

        assert!(once.elements[0].is_template_decoration);
        assert_eq!(once.background_color.as_deref(), Some("#101010"));
        assert_eq!(twice.decorations().count(), 1);
        assert_eq!(twice.user_elements().count(), 2);
        assert_ne!(once.elements[0].id, twice.elements[0].id);
        assert_ne!(once.elements[0].id.as_str(), "bar");
        twice.validate().expect("ids unique");
    }

    #[test]
    fn test_card_application_covers_both_sides() {
        let config = PhysicalCardConfig {
            front: side(),
            back: side(),
        };
        let result = apply_template_to_card(&config, &template(BTreeMap::new()));
        assert_eq!(result.front.decorations().count(), 1);
        assert_eq!(result.back.decorations().count(), 1);
    }
}
