//! Card elements - the placeable items on a card side.
//!
//! Positions live in a fixed design space of 450×270 units that maps onto the
//! 90mm×54mm physical card, independent of the on-screen scale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Width of the card in design units.
pub const CARD_WIDTH: f32 = 450.0;

/// Height of the card in design units.
pub const CARD_HEIGHT: f32 = 270.0;

/// Box size used for non-text elements without an explicit size.
pub const FALLBACK_SIZE: f32 = 40.0;

/// Font size assumed when an element does not carry one.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Unique identifier for an element within a side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Create a new random element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create a fresh ID that keeps a readable prefix, e.g. `text-3f2a…`.
    #[must_use]
    pub fn scoped(prefix: &str) -> Self {
        Self(format!("{prefix}-{}", Uuid::new_v4().simple()))
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// What an element shows.
///
/// The bound types (`Name` through `Phone`) carry card fields that the
/// basic-info editor keeps in sync; `Logo`, `QrCode` and `Text` are free-form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Person's name.
    Name,
    /// Job title.
    Title,
    /// Company or brand.
    Company,
    /// Contact email.
    Email,
    /// Contact phone.
    Phone,
    /// Logo or image.
    Logo,
    /// QR code.
    QrCode,
    /// Free text.
    Text,
}

impl ElementType {
    /// Every element type, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Title,
        Self::Company,
        Self::Email,
        Self::Phone,
        Self::Logo,
        Self::QrCode,
        Self::Text,
    ];

    /// Whether elements of this type render as a line of text.
    #[must_use]
    pub const fn is_textual(self) -> bool {
        match self {
            Self::Name | Self::Title | Self::Company | Self::Email | Self::Phone | Self::Text => {
                true
            }
            Self::Logo | Self::QrCode => false,
        }
    }

    /// Whether the content of this type is bound to a card field.
    #[must_use]
    pub const fn is_bound(self) -> bool {
        match self {
            Self::Name | Self::Title | Self::Company | Self::Email | Self::Phone => true,
            Self::Logo | Self::QrCode | Self::Text => false,
        }
    }

    /// Serialized name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Title => "title",
            Self::Company => "company",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Logo => "logo",
            Self::QrCode => "qrcode",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown element type: {s}"))
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left aligned.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

/// Axis-aligned rectangle in design units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from position and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its top-left and bottom-right corners.
    #[must_use]
    pub fn from_corners(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// The whole card surface.
    #[must_use]
    pub const fn card() -> Self {
        Self::new(0.0, 0.0, CARD_WIDTH, CARD_HEIGHT)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Check if a point lies within the rectangle (edges inclusive).
    #[must_use]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// A placeable item on a card side.
///
/// Field names serialize in camelCase, which is the shape the export renderer
/// consumes verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Element {
    /// Unique identifier within the side.
    pub id: ElementId,
    /// What the element shows.
    #[serde(rename = "type")]
    pub kind: ElementType,
    /// Text value, image reference, or decoration markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// X position in design units.
    pub x: f32,
    /// Y position in design units.
    pub y: f32,
    /// Explicit box width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Explicit box height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Font size in design units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// CSS font family list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Text alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// Font weight, e.g. `bold`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Italic text.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
    /// Extra spacing between letters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    /// Panel color behind the element. Never kept on text after a template switch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Hidden elements are neither displayed nor considered for collisions.
    #[serde(default = "Element::default_visible")]
    pub is_visible: bool,
    /// Set on elements injected by a template; they are replaced on every template switch.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_template_decoration: bool,
    /// Rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    /// Opacity from 0.0 to 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Draw a translucent blurred panel behind the element.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_backdrop_blur: bool,
    /// Explicit draw order; list order applies otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl Element {
    /// Create a visible element of the given type at a position.
    #[must_use]
    pub fn new(kind: ElementType, x: f32, y: f32) -> Self {
        Self {
            id: ElementId::new(),
            kind,
            content: None,
            x,
            y,
            width: None,
            height: None,
            font_size: None,
            font_family: None,
            color: None,
            align: None,
            font_weight: None,
            italic: false,
            letter_spacing: None,
            background_color: None,
            is_visible: true,
            is_template_decoration: false,
            rotation: None,
            opacity: None,
            has_backdrop_blur: false,
            z_index: None,
        }
    }

    const fn default_visible() -> bool {
        true
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set an explicit box size.
    #[must_use]
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Set the text color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the alignment.
    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Set visibility.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }

    /// Mark the element as a template decoration.
    #[must_use]
    pub fn as_decoration(mut self) -> Self {
        self.is_template_decoration = true;
        self
    }

    /// Content as a string slice, empty when absent.
    #[must_use]
    pub fn content_str(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    /// Whether the element carries non-empty content.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.content_str().is_empty()
    }

    /// Text shown on the canvas: the content, or the type name as a placeholder.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.has_content() {
            self.content_str()
        } else {
            self.kind.as_str()
        }
    }

    /// Rendered box size.
    ///
    /// Text sizes itself to its content, so its extent is estimated from the
    /// character count and font size. Other elements use their explicit size
    /// or [`FALLBACK_SIZE`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn display_size(&self) -> (f32, f32) {
        if self.kind.is_textual() {
            let font_size = self.font_size.unwrap_or(DEFAULT_FONT_SIZE);
            let chars = self.display_text().chars().count() as f32;
            (chars * font_size * 0.6, font_size * 1.2)
        } else {
            (
                self.width.unwrap_or(FALLBACK_SIZE),
                self.height.unwrap_or(FALLBACK_SIZE),
            )
        }
    }

    /// Axis-aligned footprint at the current position (rotation ignored).
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let (width, height) = self.display_size();
        Rect::new(self.x, self.y, width, height)
    }

    /// Check if a point (in design units) is within this element.
    #[must_use]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.bounds().contains_point(x, y)
    }
}

/// A partial element: every field set here overwrites the target's field.
///
/// Used for style edits on the canvas and for template layout overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    /// Replacement text or image data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Left edge in design units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Top edge in design units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Box width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Box height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Font size in design units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// CSS font family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Text or fill color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Horizontal text alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// CSS font weight, e.g. `bold`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Italic text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    /// Extra spacing between characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    /// Fill behind the element box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    /// Rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    /// Opacity from 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Frosted backdrop behind text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_backdrop_blur: Option<bool>,
    /// Explicit stacking order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl ElementPatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A patch that moves to a position.
    #[must_use]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Set content.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set box size.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set box width only.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set font size.
    #[must_use]
    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Set font family.
    #[must_use]
    pub fn font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    /// Set color.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set alignment.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Set font weight.
    #[must_use]
    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    /// Set italic.
    #[must_use]
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set letter spacing.
    #[must_use]
    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    /// Set visibility.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.is_visible = Some(visible);
        self
    }

    /// Set rotation in degrees.
    #[must_use]
    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Set opacity.
    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Whether the patch sets no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite every field of `element` that this patch sets.
    pub fn apply_to(&self, element: &mut Element) {
        fn set<T: Clone>(slot: &mut Option<T>, value: Option<&T>) {
            if let Some(value) = value {
                *slot = Some(value.clone());
            }
        }

        set(&mut element.content, self.content.as_ref());
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        set(&mut element.width, self.width.as_ref());
        set(&mut element.height, self.height.as_ref());
        set(&mut element.font_size, self.font_size.as_ref());
        set(&mut element.font_family, self.font_family.as_ref());
        set(&mut element.color, self.color.as_ref());
        set(&mut element.align, self.align.as_ref());
        set(&mut element.font_weight, self.font_weight.as_ref());
        if let Some(italic) = self.italic {
            element.italic = italic;
        }
        set(&mut element.letter_spacing, self.letter_spacing.as_ref());
        set(&mut element.background_color, self.background_color.as_ref());
        if let Some(visible) = self.is_visible {
            element.is_visible = visible;
        }
        set(&mut element.rotation, self.rotation.as_ref());
        set(&mut element.opacity, self.opacity.as_ref());
        if let Some(blur) = self.has_backdrop_blur {
            element.has_backdrop_blur = blur;
        }
        set(&mut element.z_index, self.z_index.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_round_trips_lowercase() {
        let json = serde_json::to_string(&ElementType::QrCode).expect("serialize");
        assert_eq!(json, "\"qrcode\"");
        assert_eq!("qrcode".parse::<ElementType>(), Ok(ElementType::QrCode));
        assert!("badge".parse::<ElementType>().is_err());
    }

    #[test]
    fn test_textual_and_bound_types() {
        assert!(ElementType::Text.is_textual());
        assert!(!ElementType::Text.is_bound());
        assert!(ElementType::Email.is_bound());
        assert!(!ElementType::Logo.is_textual());
        assert!(!ElementType::QrCode.is_bound());
    }

    #[test]
    fn test_element_serializes_camel_case() {
        let element = Element::new(ElementType::Name, 20.0, 30.0)
            .with_id("n")
            .with_content("Ada")
            .as_decoration();
        let value = serde_json::to_value(&element).expect("serialize");
        assert_eq!(value["type"], "name");
        assert_eq!(value["isVisible"], true);
        assert_eq!(value["isTemplateDecoration"], true);
        assert!(value.get("hasBackdropBlur").is_none());
        assert!(value.get("width").is_none());
    }

    #[test]
    fn test_element_deserializes_with_defaults() {
        let element: Element =
            serde_json::from_str(r#"{"id":"l","type":"logo","x":350,"y":20}"#).expect("parse");
        assert!(element.is_visible);
        assert!(!element.is_template_decoration);
        assert_eq!(element.display_size(), (FALLBACK_SIZE, FALLBACK_SIZE));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<Element, _> =
            serde_json::from_str(r#"{"id":"x","type":"sticker","x":0,"y":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_text_size_is_intrinsic() {
        let mut element = Element::new(ElementType::Text, 0.0, 0.0)
            .with_content("abcd")
            .with_font_size(10.0)
            .with_size(300.0, 300.0);
        let (width, height) = element.display_size();
        assert!((width - 24.0).abs() < 1e-4);
        assert!((height - 12.0).abs() < 1e-4);

        element.content = None;
        assert_eq!(element.display_text(), "text");
    }

    #[test]
    fn test_rect_intersection_is_strict() {
        let zone = Rect::from_corners(20.0, 20.0, 320.0, 250.0);
        assert!(zone.intersects(&Rect::new(300.0, 100.0, 50.0, 50.0)));
        assert!(!zone.intersects(&Rect::new(320.0, 100.0, 50.0, 50.0)));
        assert!(!zone.intersects(&Rect::new(0.0, 0.0, 20.0, 20.0)));
    }

    #[test]
    fn test_patch_overwrites_only_set_fields() {
        let mut element = Element::new(ElementType::Title, 10.0, 10.0)
            .with_color("#111111")
            .with_font_size(12.0);
        let patch = ElementPatch::at(70.0, 40.0).align(Align::Right);
        patch.apply_to(&mut element);

        assert_eq!((element.x, element.y), (70.0, 40.0));
        assert_eq!(element.align, Some(Align::Right));
        assert_eq!(element.color.as_deref(), Some("#111111"));
        assert_eq!(element.font_size, Some(12.0));
        assert!(ElementPatch::new().is_empty());
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_scoped_ids_are_unique() {
        let a = ElementId::scoped("text");
        let b = ElementId::scoped("text");
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("text-"));
    }
}
