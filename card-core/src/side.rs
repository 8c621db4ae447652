//! Card sides and the two-sided physical card configuration.
//!
//! A [`Side`] is the value exchanged with every collaborator of the engine:
//! the canvas mutates it, the template and redesign transformers consume and
//! produce it, and the export renderer draws it verbatim.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::element::{Align, Element, ElementId, ElementType};
use crate::error::{CardError, CardResult};

/// Effective z of a selected element in the preview draw order.
const SELECTED_Z: i32 = 100;

/// Effective z of an element without an explicit `zIndex`.
const BASE_Z: i32 = 1;

/// Logo box size used when no previous logo defined one.
const LOGO_SIZE: f32 = 60.0;

/// Which face of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideKind {
    /// Front face.
    Front,
    /// Back face.
    Back,
}

impl SideKind {
    /// Both faces, front first.
    pub const BOTH: [Self; 2] = [Self::Front, Self::Back];

    /// Where a freshly assigned logo goes when the side had none.
    #[must_use]
    pub const fn logo_anchor(self) -> (f32, f32) {
        match self {
            Self::Front => (350.0, 20.0),
            Self::Back => (195.0, 85.0),
        }
    }
}

/// One face of a physical card: ordered elements plus background.
///
/// List order is draw order; later elements are drawn on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Side {
    /// Elements in draw order.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Background image: a gradient descriptor or an image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl Side {
    /// Create an empty side.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a side holding the given elements.
    #[must_use]
    pub fn with_elements(elements: Vec<Element>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }

    /// Get an element by ID.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    /// Check whether an element with this ID exists.
    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.get(id).is_some()
    }

    /// Elements authored by the user (not template decorations).
    pub fn user_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| !e.is_template_decoration)
    }

    /// Elements injected by a template.
    pub fn decorations(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.is_template_decoration)
    }

    /// Number of elements on the side.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the side has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Overwrite the content of every user element bound to `kind`.
    ///
    /// This is the hook the basic-info editor uses when a card field changes.
    /// Returns the number of elements updated.
    pub fn sync_field(&mut self, kind: ElementType, value: &str) -> usize {
        if !kind.is_bound() {
            tracing::trace!("Ignoring sync for unbound type {kind}");
            return 0;
        }
        let mut updated = 0;
        for element in self
            .elements
            .iter_mut()
            .filter(|e| e.kind == kind && !e.is_template_decoration)
        {
            element.content = Some(value.to_string());
            updated += 1;
        }
        updated
    }

    /// Visible elements in preview draw order.
    ///
    /// Elements are stable-sorted by effective z: selected elements are lifted
    /// above everything else, the rest use their `zIndex` or a base of 1.
    /// Stored `zIndex` values are left untouched.
    #[must_use]
    pub fn draw_order(&self, selected: &[ElementId]) -> Vec<&Element> {
        let mut visible: Vec<&Element> = self.elements.iter().filter(|e| e.is_visible).collect();
        visible.sort_by_key(|e| {
            if selected.contains(&e.id) {
                SELECTED_Z
            } else {
                e.z_index.unwrap_or(BASE_Z)
            }
        });
        visible
    }

    /// Check the structural invariants of the side.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or duplicated, or if a position is
    /// not finite.
    pub fn validate(&self) -> CardResult<()> {
        let mut seen = HashSet::with_capacity(self.elements.len());
        for (index, element) in self.elements.iter().enumerate() {
            if element.id.is_empty() {
                return Err(CardError::EmptyId(index));
            }
            if !seen.insert(&element.id) {
                return Err(CardError::DuplicateId(element.id.to_string()));
            }
            if !element.x.is_finite() || !element.y.is_finite() {
                return Err(CardError::NonFiniteCoordinate(element.id.to_string()));
            }
        }
        Ok(())
    }

    /// Serialize the side to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CardResult<String> {
        serde_json::to_string(self).map_err(CardError::Serialization)
    }

    /// Deserialize and validate a side from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the side is not well-formed.
    pub fn from_json(json: &str) -> CardResult<Self> {
        let side: Self = serde_json::from_str(json)?;
        side.validate()?;
        Ok(side)
    }

    /// Replace every user logo with a single logo carrying `value`.
    fn assign_logo(&mut self, kind: SideKind, value: &str) {
        let previous = self
            .elements
            .iter()
            .find(|e| e.kind == ElementType::Logo && !e.is_template_decoration)
            .map(|e| (e.x, e.y, e.width, e.height));
        self.elements
            .retain(|e| e.kind != ElementType::Logo || e.is_template_decoration);

        let (x, y, width, height) = previous.unwrap_or_else(|| {
            let (x, y) = kind.logo_anchor();
            (x, y, Some(LOGO_SIZE), Some(LOGO_SIZE))
        });
        let mut logo = Element::new(ElementType::Logo, x, y)
            .with_id(ElementId::scoped("logo"))
            .with_content(value)
            .with_visible(!value.is_empty());
        logo.width = width;
        logo.height = height;
        self.elements.push(logo);
    }
}

/// The card-level fields that bound elements display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// Holder's full name.
    #[serde(default)]
    pub name: String,
    /// Job title.
    #[serde(default)]
    pub title: String,
    /// Company or organisation.
    #[serde(default)]
    pub company: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
    /// Logo image as a data URI; empty when the card has none.
    #[serde(default)]
    pub logo: String,
}

impl CardInfo {
    /// Value of the card field bound to `kind`, if any.
    #[must_use]
    pub fn field(&self, kind: ElementType) -> Option<&str> {
        match kind {
            ElementType::Name => Some(&self.name),
            ElementType::Title => Some(&self.title),
            ElementType::Company => Some(&self.company),
            ElementType::Email => Some(&self.email),
            ElementType::Phone => Some(&self.phone),
            ElementType::Logo => Some(&self.logo),
            ElementType::QrCode | ElementType::Text => None,
        }
    }
}

/// Both faces of a physical card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalCardConfig {
    /// Front face.
    pub front: Side,
    /// Back face.
    pub back: Side,
}

impl PhysicalCardConfig {
    /// Create the default layout for a card that is edited for the first time.
    ///
    /// The front carries name, title, company, email, phone and logo; the back
    /// carries a centered logo and the company line. Logos are hidden while
    /// the card has no logo.
    #[must_use]
    pub fn from_card_info(info: &CardInfo) -> Self {
        let text = |id: &str, kind: ElementType, x: f32, y: f32, size: f32| {
            Element::new(kind, x, y)
                .with_id(id)
                .with_content(info.field(kind).unwrap_or_default())
                .with_font_size(size)
                .with_color("#000000")
        };
        let has_logo = !info.logo.is_empty();

        let front = Side {
            elements: vec![
                text("name", ElementType::Name, 20.0, 30.0, 24.0),
                text("title", ElementType::Title, 20.0, 65.0, 14.0),
                text("company", ElementType::Company, 20.0, 90.0, 14.0),
                text("email", ElementType::Email, 20.0, 210.0, 10.0),
                text("phone", ElementType::Phone, 20.0, 228.0, 10.0),
                Element::new(ElementType::Logo, 350.0, 20.0)
                    .with_id("logo")
                    .with_content(info.logo.clone())
                    .with_size(LOGO_SIZE, LOGO_SIZE)
                    .with_visible(has_logo),
            ],
            background_color: Some("#ffffff".to_string()),
            background_image: None,
        };

        let mut company = text("back-company", ElementType::Company, 25.0, 160.0, 16.0)
            .with_align(Align::Center);
        company.width = Some(400.0);
        let back = Side {
            elements: vec![
                Element::new(ElementType::Logo, 195.0, 85.0)
                    .with_id("back-logo")
                    .with_content(info.logo.clone())
                    .with_size(LOGO_SIZE, LOGO_SIZE)
                    .with_visible(has_logo),
                company,
            ],
            background_color: Some("#ffffff".to_string()),
            background_image: None,
        };

        Self { front, back }
    }

    /// Borrow a side.
    #[must_use]
    pub fn side(&self, kind: SideKind) -> &Side {
        match kind {
            SideKind::Front => &self.front,
            SideKind::Back => &self.back,
        }
    }

    /// Mutably borrow a side.
    pub fn side_mut(&mut self, kind: SideKind) -> &mut Side {
        match kind {
            SideKind::Front => &mut self.front,
            SideKind::Back => &mut self.back,
        }
    }

    /// Set the card-level logo.
    ///
    /// On each side every existing user logo is removed and exactly one new
    /// logo is inserted, keeping the previous logo's position and size when
    /// there was one. The logo is visible only if `value` is non-empty.
    pub fn assign_logo(&mut self, value: &str) {
        for kind in SideKind::BOTH {
            self.side_mut(kind).assign_logo(kind, value);
        }
        tracing::debug!("Assigned logo ({} bytes) to both sides", value.len());
    }

    /// Propagate a changed card field to both sides.
    pub fn sync_field(&mut self, kind: ElementType, value: &str) -> usize {
        SideKind::BOTH
            .into_iter()
            .map(|side| self.side_mut(side).sync_field(kind, value))
            .sum()
    }

    /// Check the structural invariants of both sides.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found.
    pub fn validate(&self) -> CardResult<()> {
        self.front.validate()?;
        self.back.validate()
    }

    /// Serialize the card to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CardResult<String> {
        serde_json::to_string_pretty(self).map_err(CardError::Serialization)
    }

    /// Deserialize and validate a card from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a side is not well-formed.
    pub fn from_json(json: &str) -> CardResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
