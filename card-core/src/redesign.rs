//! Procedural redesign: a randomized layout that keeps text readable.
//!
//! A run picks a layout [`Archetype`], moves content into the archetype's
//! slots, scatters decorations with a bounded collision search against the
//! archetype's text zone, and finally decides whether the primary text needs
//! a blurred backdrop.
//!
//! ```text
//!   archetype ──► content slots ──► decorations ──► shuffle ──► blur check
//!       │                               │
//!   text zone ──────────────────────────┘ (≤ 8 attempts, then forced 0.15)
//! ```
//!
//! Every random draw goes through the caller's RNG, so a seeded run is fully
//! reproducible.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::element::{Align, Element, ElementId, ElementType, Rect, CARD_HEIGHT, CARD_WIDTH};
use crate::side::{Side, SideKind};

/// Placement attempts per decoration before the position is forced.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 8;

/// Attempts after which sampling is biased toward the archetype's free edges.
const EDGE_BIAS_AFTER: u32 = 6;

/// Decorations above this opacity may not overlap the text zone.
const PROMINENT_OPACITY: f32 = 0.25;

/// Opacity of a decoration whose placement had to be forced.
pub const FORCED_OPACITY: f32 = 0.15;

/// Decorations above this opacity in the middle third trigger the blur.
const BLUR_TRIGGER_OPACITY: f32 = 0.4;

/// Horizontal middle third of the card.
const MIDDLE_THIRD: (f32, f32) = (100.0, 350.0);

/// Vertical distance between stacked contact lines.
const CONTACT_STEP: f32 = 16.0;

/// Mixed into the seed when redesigning the back face.
const BACK_SEED_MASK: u64 = 0x9e37_79b9_7f4a_7c15;

/// Logo box size when the logo has none.
const LOGO_SIZE: f32 = 60.0;

/// A layout strategy for [`redesign`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    /// Text block anchored left, logo upper-right.
    Left,
    /// Text centered, logo top-center.
    Center,
    /// Identity block left, contact lines right, logo lower-left.
    Asym,
}

impl Archetype {
    /// Every archetype, in selection order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Asym];

    /// The region this archetype's text occupies.
    ///
    /// The `Asym` zone spans nearly the whole card, so collision avoidance
    /// under it mostly ends in forced low-opacity placements.
    #[must_use]
    pub fn text_zone(self) -> Rect {
        match self {
            Self::Left => Rect::from_corners(20.0, 20.0, 320.0, 250.0),
            Self::Center => Rect::from_corners(60.0, 30.0, 390.0, 240.0),
            Self::Asym => Rect::from_corners(20.0, 20.0, 420.0, 250.0),
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Asym => "asym",
        }
    }

    fn logo_anchor(self) -> (f32, f32) {
        match self {
            Self::Left => (360.0, 20.0),
            Self::Center => (195.0, 20.0),
            Self::Asym => (20.0, 200.0),
        }
    }

    /// Slot for name, title or company.
    fn identity_slot(self, kind: ElementType) -> Option<Slot> {
        let (x, width, align) = match self {
            Self::Left => (30.0, None, Align::Left),
            Self::Center => (75.0, Some(300.0), Align::Center),
            Self::Asym => (20.0, None, Align::Left),
        };
        let y = match (self, kind) {
            (Self::Left, ElementType::Name) => 50.0,
            (Self::Left, ElementType::Title) => 90.0,
            (Self::Left, ElementType::Company) => 115.0,
            (Self::Center, ElementType::Name) => 95.0,
            (Self::Center, ElementType::Title) => 130.0,
            (Self::Center, ElementType::Company) => 150.0,
            (Self::Asym, ElementType::Name) => 40.0,
            (Self::Asym, ElementType::Title) => 80.0,
            (Self::Asym, ElementType::Company) => 105.0,
            _ => return None,
        };
        Some(Slot { x, y, width, align })
    }

    /// Slot for the bottom contact line; lines above it stack upward.
    fn contact_base(self) -> Slot {
        match self {
            Self::Left => Slot {
                x: 30.0,
                y: 225.0,
                width: None,
                align: Align::Left,
            },
            Self::Center => Slot {
                x: 75.0,
                y: 230.0,
                width: Some(300.0),
                align: Align::Center,
            },
            Self::Asym => Slot {
                x: 230.0,
                y: 230.0,
                width: Some(200.0),
                align: Align::Right,
            },
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "asym" => Ok(Self::Asym),
            other => Err(format!("unknown archetype: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    x: f32,
    y: f32,
    width: Option<f32>,
    align: Align,
}

impl Slot {
    fn apply_to(self, element: &mut Element) {
        element.x = self.x;
        element.y = self.y;
        element.align = Some(self.align);
        if self.width.is_some() {
            element.width = self.width;
        }
    }
}

/// Knobs for a redesign run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RedesignOptions {
    /// Use this archetype instead of picking one at random.
    pub archetype: Option<Archetype>,
    /// Seed for a reproducible run.
    pub seed: Option<u64>,
}

impl RedesignOptions {
    /// Options for one face of a card.
    ///
    /// The front keeps the seed as given and the back uses a derived one, so a
    /// seeded two-sided run draws independently per face.
    #[must_use]
    pub fn for_side(self, kind: SideKind) -> Self {
        let seed = match kind {
            SideKind::Front => self.seed,
            SideKind::Back => self.seed.map(|seed| seed ^ BACK_SEED_MASK),
        };
        Self { seed, ..self }
    }
}

/// How one decoration was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementReport {
    /// The decoration.
    pub id: ElementId,
    /// Positions sampled, including the accepted one.
    pub attempts: u32,
    /// The search ran out and the last position was accepted at low opacity.
    pub forced: bool,
}

/// Summary of a redesign run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedesignReport {
    /// The archetype used.
    pub archetype: Archetype,
    /// One entry per decoration, in original order.
    pub placements: Vec<PlacementReport>,
    /// Whether the primary text received a blurred backdrop.
    pub backdrop_blur: bool,
}

impl RedesignReport {
    /// Number of decorations whose placement was forced.
    #[must_use]
    pub fn forced_count(&self) -> usize {
        self.placements.iter().filter(|p| p.forced).count()
    }
}

/// Redesign a side with the given options.
///
/// A seed makes the run deterministic; without one the thread RNG is used.
#[must_use]
pub fn redesign(side: &Side, options: &RedesignOptions) -> (Side, RedesignReport) {
    match options.seed {
        Some(seed) => redesign_with_rng(side, options.archetype, &mut StdRng::seed_from_u64(seed)),
        None => redesign_with_rng(side, options.archetype, &mut rand::rng()),
    }
}

/// Redesign a side drawing every random choice from `rng`.
///
/// Never fails: a decoration that cannot be placed clear of the text zone is
/// accepted at [`FORCED_OPACITY`].
pub fn redesign_with_rng<R: Rng + ?Sized>(
    side: &Side,
    archetype: Option<Archetype>,
    rng: &mut R,
) -> (Side, RedesignReport) {
    let archetype =
        archetype.unwrap_or_else(|| Archetype::ALL[rng.random_range(0..Archetype::ALL.len())]);
    let zone = archetype.text_zone();

    let mut content: Vec<Element> = side.user_elements().cloned().collect();
    place_content(&mut content, archetype);

    let mut decorations: Vec<Element> = side.decorations().cloned().collect();
    let placements: Vec<PlacementReport> = decorations
        .iter_mut()
        .map(|decoration| place_decoration(decoration, archetype, zone, rng))
        .collect();
    decorations.shuffle(rng);

    let backdrop_blur = archetype == Archetype::Center
        || decorations.iter().any(|d| {
            d.is_visible
                && d.opacity.unwrap_or(1.0) > BLUR_TRIGGER_OPACITY
                && (MIDDLE_THIRD.0..=MIDDLE_THIRD.1).contains(&d.x)
        });
    if backdrop_blur {
        for element in content.iter_mut().filter(|e| {
            matches!(
                e.kind,
                ElementType::Name | ElementType::Title | ElementType::Company
            )
        }) {
            element.has_backdrop_blur = true;
        }
    }

    let report = RedesignReport {
        archetype,
        placements,
        backdrop_blur,
    };
    tracing::info!(
        archetype = %archetype,
        decorations = report.placements.len(),
        forced = report.forced_count(),
        blur = backdrop_blur,
        "Redesigned side"
    );

    decorations.append(&mut content);
    let result = Side {
        elements: decorations,
        background_color: side.background_color.clone(),
        background_image: side.background_image.clone(),
    };
    (result, report)
}

fn place_content(content: &mut [Element], archetype: Archetype) {
    let contacts = content
        .iter()
        .filter(|e| matches!(e.kind, ElementType::Email | ElementType::Phone))
        .count();
    let mut contact_index = 0;

    for element in content.iter_mut() {
        element.has_backdrop_blur = false;
        match element.kind {
            ElementType::Logo => {
                let (x, y) = archetype.logo_anchor();
                element.x = x;
                element.y = y;
                element.width.get_or_insert(LOGO_SIZE);
                element.height.get_or_insert(LOGO_SIZE);
            }
            ElementType::Name | ElementType::Title | ElementType::Company => {
                if let Some(slot) = archetype.identity_slot(element.kind) {
                    slot.apply_to(element);
                }
            }
            ElementType::Email | ElementType::Phone => {
                let mut slot = archetype.contact_base();
                #[allow(clippy::cast_precision_loss)]
                let above = (contacts - 1 - contact_index) as f32;
                slot.y -= above * CONTACT_STEP;
                slot.apply_to(element);
                contact_index += 1;
            }
            ElementType::QrCode | ElementType::Text => {}
        }
    }
}

fn place_decoration<R: Rng + ?Sized>(
    decoration: &mut Element,
    archetype: Archetype,
    zone: Rect,
    rng: &mut R,
) -> PlacementReport {
    decoration.rotation = Some(rng.random_range(0.0..360.0));
    let opacity: f32 = rng.random_range(0.1..=0.8);
    decoration.opacity = Some(opacity);
    if rng.random_bool(0.5) {
        let factor: f32 = rng.random_range(0.8..=1.2);
        if let Some(width) = decoration.width.as_mut() {
            *width *= factor;
        }
        if let Some(height) = decoration.height.as_mut() {
            *height *= factor;
        }
    }

    let (width, height) = decoration.display_size();
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let x = if attempt > EDGE_BIAS_AFTER {
            edge_biased_x(archetype, zone, width, rng)
        } else {
            rng.random_range(0.0..CARD_WIDTH) - width / 2.0
        };
        let y = rng.random_range(0.0..CARD_HEIGHT) - height / 2.0;
        decoration.x = x;
        decoration.y = y;

        let overlaps = decoration.is_visible && Rect::new(x, y, width, height).intersects(&zone);
        if !(overlaps && opacity > PROMINENT_OPACITY) {
            return PlacementReport {
                id: decoration.id.clone(),
                attempts: attempt,
                forced: false,
            };
        }
    }

    tracing::warn!(
        id = %decoration.id,
        archetype = %archetype,
        "No clear position for decoration, forcing low opacity"
    );
    decoration.opacity = Some(FORCED_OPACITY);
    PlacementReport {
        id: decoration.id.clone(),
        attempts: MAX_PLACEMENT_ATTEMPTS,
        forced: true,
    }
}

/// An x that pushes the footprint toward the archetype's free edge.
fn edge_biased_x<R: Rng + ?Sized>(archetype: Archetype, zone: Rect, width: f32, rng: &mut R) -> f32 {
    let right = (zone.right(), CARD_WIDTH - width / 2.0);
    match archetype {
        Archetype::Left => uniform(rng, right.0, right.1),
        Archetype::Center => {
            if rng.random_bool(0.5) {
                uniform(rng, -width / 2.0, zone.x - width)
            } else {
                uniform(rng, right.0, right.1)
            }
        }
        Archetype::Asym => rng.random_range(0.0..CARD_WIDTH) - width / 2.0,
    }
}

/// Uniform draw from `[lo, hi)`, or `lo` when the range is empty.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}
