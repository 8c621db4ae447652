//! The fixed library of physical card templates.
//!
//! Decorations are simple SVG shapes embedded as base64 data URIs, so a side
//! stays self-contained when handed to the export renderer.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::element::{Align, Element, ElementPatch, ElementType};
use crate::error::{CardError, CardResult};
use crate::template::{Template, TemplateStyle, TextStyle};

static CATALOG: OnceLock<Vec<Template>> = OnceLock::new();

/// All templates, in picker order.
#[must_use]
pub fn templates() -> &'static [Template] {
    CATALOG.get_or_init(build)
}

/// Look up a template by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Template> {
    templates().iter().find(|t| t.id == id)
}

/// Look up a template by id, failing if it does not exist.
///
/// # Errors
///
/// Returns [`CardError::TemplateNotFound`] for an unknown id.
pub fn require(id: &str) -> CardResult<&'static Template> {
    find(id).ok_or_else(|| CardError::TemplateNotFound(id.to_string()))
}

/// Identifiers of every template.
pub fn ids() -> impl Iterator<Item = &'static str> {
    templates().iter().map(|t| t.id.as_str())
}

// ============================================================================
// SVG shapes
// ============================================================================

/// Embed SVG markup as a data URI.
#[must_use]
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn rect_svg(color: &str) -> String {
    svg_data_uri(&format!(
        r#"<svg xmlns="{SVG_NS}" width="100%" height="100%" viewBox="0 0 1 1" preserveAspectRatio="none"><rect width="1" height="1" fill="{color}"/></svg>"#
    ))
}

fn circle_svg(color: &str) -> String {
    svg_data_uri(&format!(
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 100 100"><circle cx="50" cy="50" r="50" fill="{color}"/></svg>"#
    ))
}

fn ring_svg(color: &str) -> String {
    svg_data_uri(&format!(
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 100 100"><circle cx="50" cy="50" r="48" fill="none" stroke="{color}" stroke-width="1"/></svg>"#
    ))
}

fn triangle_svg(color: &str) -> String {
    svg_data_uri(&format!(
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 100 100"><polygon points="50,0 100,100 0,100" fill="{color}"/></svg>"#
    ))
}

fn line_svg(color: &str) -> String {
    svg_data_uri(&format!(
        r#"<svg xmlns="{SVG_NS}" width="100%" height="100%" preserveAspectRatio="none"><line x1="0" y1="50%" x2="100%" y2="50%" stroke="{color}" stroke-width="2"/></svg>"#
    ))
}

fn grid_svg(color: &str) -> String {
    svg_data_uri(&format!(
        r#"<svg xmlns="{SVG_NS}" width="100%" height="100%" fill="none"><defs><pattern id="grid" width="20" height="20" patternUnits="userSpaceOnUse"><path d="M 20 0 L 0 0 0 20" fill="none" stroke="{color}" stroke-width="0.5"/></pattern></defs><rect width="100%" height="100%" fill="url(#grid)"/></svg>"#
    ))
}

fn star_svg(color: &str) -> String {
    svg_data_uri(&format!(
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 100 100"><polygon points="50,0 61,35 98,35 68,57 79,91 50,70 21,91 32,57 2,35 39,35" fill="{color}"/></svg>"#
    ))
}

fn wave_svg(color: &str) -> String {
    svg_data_uri(&format!(
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 100 20" preserveAspectRatio="none"><path d="M0,10 C20,0 30,20 50,10 C70,0 80,20 100,10" fill="none" stroke="{color}" stroke-width="2"/></svg>"#
    ))
}

fn dots_svg(color: &str) -> String {
    svg_data_uri(&format!(
        r#"<svg xmlns="{SVG_NS}" width="100%" height="100%"><defs><pattern id="dots" width="10" height="10" patternUnits="userSpaceOnUse"><circle cx="2" cy="2" r="1.5" fill="{color}"/></pattern></defs><rect width="100%" height="100%" fill="url(#dots)"/></svg>"#
    ))
}

fn leaf_svg(color: &str) -> String {
    svg_data_uri(&format!(
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 100 100"><path d="M50 0 C20 0 0 50 50 100 C80 50 100 0 50 0" fill="{color}"/></svg>"#
    ))
}

fn crosshair_svg(color: &str) -> String {
    svg_data_uri(&format!(
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 50 50"><line x1="25" y1="0" x2="25" y2="50" stroke="{color}" stroke-width="1"/><line x1="0" y1="25" x2="50" y2="25" stroke="{color}" stroke-width="1"/><circle cx="25" cy="25" r="15" fill="none" stroke="{color}" stroke-width="1"/></svg>"#
    ))
}

// ============================================================================
// Builders
// ============================================================================

fn shape(id: &str, content: String, x: f32, y: f32, width: f32, height: f32) -> Element {
    Element::new(ElementType::Logo, x, y)
        .with_id(id)
        .with_content(content)
        .with_size(width, height)
        .as_decoration()
}

struct Entry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    preview: &'static str,
    thumbnail: Option<&'static str>,
    background: &'static str,
    background_image: Option<&'static str>,
    color: &'static str,
    font: &'static str,
}

impl Entry {
    fn build(
        self,
        decorations: Vec<Element>,
        overrides: impl IntoIterator<Item = (ElementType, ElementPatch)>,
    ) -> Template {
        Template {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            preview_color: self.preview.to_string(),
            thumbnail_gradient: self.thumbnail.map(str::to_string),
            style: TemplateStyle {
                background_color: self.background.to_string(),
                background_image: self.background_image.map(str::to_string),
                text_style: TextStyle {
                    color: Some(self.color.to_string()),
                    font_family: Some(self.font.to_string()),
                },
                decorations,
                layout_overrides: overrides.into_iter().collect::<BTreeMap<_, _>>(),
            },
        }
    }
}

fn text(x: f32, y: f32, size: f32, align: Align) -> ElementPatch {
    ElementPatch::at(x, y).font_size(size).align(align)
}

fn logo(x: f32, y: f32, size: f32) -> ElementPatch {
    ElementPatch::at(x, y).size(size, size)
}

use Align::{Center, Left, Right};
use ElementType::{Company, Email, Logo, Name, Phone, Title};

#[allow(clippy::too_many_lines)]
fn build() -> Vec<Template> {
    vec![
        Entry {
            id: "swiss",
            name: "Swiss",
            description: "Strict grid, asymmetrical layout, bold sans-serif.",
            preview: "#e0e0e0",
            thumbnail: None,
            background: "#f5f5f5",
            background_image: None,
            color: "#000000",
            font: "'Helvetica Neue', 'Arial', sans-serif",
        }
        .build(
            vec![
                shape("swiss_grid", grid_svg("#cccccc"), 0.0, 0.0, 450.0, 270.0),
                shape("swiss_bar", rect_svg("#ff3333"), 25.0, 0.0, 20.0, 270.0),
            ],
            [
                (Name, text(70.0, 40.0, 32.0, Left).color("#000000")),
                (Title, text(70.0, 80.0, 14.0, Left).color("#333333")),
                (Company, text(70.0, 230.0, 16.0, Left).color("#000000")),
                (Email, text(280.0, 40.0, 10.0, Left)),
                (Phone, text(280.0, 55.0, 10.0, Left)),
                (Logo, logo(280.0, 80.0, 60.0)),
            ],
        ),
        Entry {
            id: "art_deco",
            name: "Art Deco",
            description: "Geometric symmetry, gold outlines, decorative.",
            preview: "#2b2b2b",
            thumbnail: Some("linear-gradient(to right, #2b2b2b, #d4af37)"),
            background: "#1f1f1f",
            background_image: None,
            color: "#e5c100",
            font: "serif",
        }
        .build(
            vec![
                shape("ad_border_outer", rect_svg("#e5c100"), 15.0, 15.0, 420.0, 240.0),
                shape("ad_bg_cover", rect_svg("#1f1f1f"), 17.0, 17.0, 416.0, 236.0),
                shape("ad_ctr_line", rect_svg("#e5c100"), 224.0, 25.0, 2.0, 220.0),
                shape("ad_dia", triangle_svg("#e5c100"), 215.0, 125.0, 20.0, 20.0),
            ],
            [
                (Name, text(25.0, 80.0, 24.0, Center).width(400.0)),
                (Title, text(25.0, 110.0, 14.0, Center).width(400.0)),
                (Company, text(25.0, 50.0, 18.0, Center).width(400.0)),
                (Email, text(25.0, 200.0, 10.0, Center).width(400.0)),
                (Phone, text(25.0, 215.0, 10.0, Center).width(400.0)),
                (Logo, logo(195.0, 150.0, 60.0)),
            ],
        ),
        Entry {
            id: "architectural",
            name: "Architectural",
            description: "Structural lines, blueprint style, corner text.",
            preview: "#f0f0f0",
            thumbnail: None,
            background: "#f8f9fa",
            background_image: None,
            color: "#555555",
            font: "monospace",
        }
        .build(
            vec![
                shape("arch_cross", line_svg("#aaaaaa"), 0.0, 135.0, 450.0, 1.0),
                shape("arch_cross_v", rect_svg("#aaaaaa"), 225.0, 0.0, 1.0, 270.0),
                shape("arch_dot", circle_svg("#000000"), 222.0, 132.0, 6.0, 6.0),
            ],
            [
                (Name, text(25.0, 25.0, 18.0, Left)),
                (Title, text(25.0, 50.0, 12.0, Left)),
                (Company, text(295.0, 25.0, 14.0, Right).width(130.0)),
                (Email, text(25.0, 225.0, 10.0, Left)),
                (Phone, text(295.0, 225.0, 10.0, Right).width(130.0)),
                (Logo, logo(295.0, 150.0, 50.0)),
            ],
        ),
        Entry {
            id: "wabi_sabi",
            name: "Wabi-Sabi",
            description: "Vertical text, organic imperfections, earthy.",
            preview: "#e8e4dc",
            thumbnail: None,
            background: "#e6e2d8",
            background_image: None,
            color: "#4a4640",
            font: "serif",
        }
        .build(
            vec![shape("wabi_ink", circle_svg("#d0cdc5"), 340.0, 140.0, 80.0, 80.0)],
            [
                (Name, text(290.0, 50.0, 28.0, Right).font_family("serif")),
                (Title, text(290.0, 90.0, 14.0, Right)),
                (Company, text(40.0, 220.0, 12.0, Left)),
                (Email, text(290.0, 200.0, 10.0, Right)),
                (Phone, text(290.0, 215.0, 10.0, Right)),
                (Logo, logo(40.0, 40.0, 60.0)),
            ],
        ),
        Entry {
            id: "bauhaus_v2",
            name: "Bauhaus",
            description: "Geometric shapes, primary colors.",
            preview: "#e31d2b",
            thumbnail: None,
            background: "#f4f4f4",
            background_image: None,
            color: "#111111",
            font: "sans-serif",
        }
        .build(
            vec![
                shape("bau_c", circle_svg("#e31d2b"), -50.0, 50.0, 200.0, 200.0),
                shape("bau_t", triangle_svg("#0055a4"), 350.0, 150.0, 150.0, 150.0),
                shape("bau_r", rect_svg("#f0ad00"), 150.0, 250.0, 150.0, 20.0),
            ],
            [
                (Name, text(160.0, 100.0, 32.0, Left)),
                (Title, text(160.0, 140.0, 14.0, Left)),
                (Company, text(20.0, 25.0, 12.0, Left).color("#ffffff")),
                (Email, text(160.0, 170.0, 10.0, Left)),
                (Phone, text(160.0, 185.0, 10.0, Left)),
                (Logo, logo(360.0, 20.0, 60.0)),
            ],
        ),
        Entry {
            id: "neo_brutalist",
            name: "Neo-Brutalist",
            description: "Thick borders, high saturation.",
            preview: "#ccff00",
            thumbnail: None,
            background: "#ccff00",
            background_image: None,
            color: "#000000",
            font: "sans-serif",
        }
        .build(
            vec![
                shape("nb_border", rect_svg("#000000"), 10.0, 10.0, 430.0, 250.0),
                shape("nb_inner", rect_svg("#ccff00"), 14.0, 14.0, 422.0, 242.0),
                shape("nb_shadow", rect_svg("#000000"), 20.0, 20.0, 430.0, 250.0),
            ],
            [
                (Name, text(50.0, 50.0, 40.0, Left).font_family("Arial Black")),
                (Title, text(50.0, 100.0, 24.0, Left).color("#000000")),
                (Company, text(50.0, 215.0, 18.0, Left)),
                (Email, text(240.0, 215.0, 12.0, Right).width(150.0)),
                (Phone, text(240.0, 230.0, 12.0, Right).width(150.0)),
                (Logo, logo(340.0, 40.0, 70.0)),
            ],
        ),
        Entry {
            id: "glass_v2",
            name: "Glassmorphism",
            description: "Gradient background, blurry panels.",
            preview: "#a8c0ff",
            thumbnail: None,
            background: "#ffffff",
            background_image: Some("linear-gradient(45deg, #ff9a9e 0%, #fad0c4 99%, #fad0c4 100%)"),
            color: "#ffffff",
            font: "sans-serif",
        }
        .build(
            vec![shape("gls_panel", rect_svg("rgba(255,255,255,0.4)"), 40.0, 40.0, 370.0, 190.0)],
            [
                (Name, text(60.0, 60.0, 28.0, Left).color("#ffffff")),
                (Title, text(60.0, 100.0, 14.0, Left).color("#ffffff")),
                (Company, text(60.0, 180.0, 14.0, Left).color("#ffffff")),
                (Email, text(240.0, 180.0, 10.0, Right).color("#ffffff").width(140.0)),
                (Phone, text(240.0, 195.0, 10.0, Right).color("#ffffff").width(140.0)),
                (Logo, logo(320.0, 60.0, 60.0)),
            ],
        ),
        Entry {
            id: "data_viz",
            name: "Data Viz",
            description: "Tech lines, coordinates, code-like.",
            preview: "#0b1021",
            thumbnail: None,
            background: "#0b1021",
            background_image: None,
            color: "#00d4ff",
            font: "monospace",
        }
        .build(
            vec![
                shape("dv_ruler_t", rect_svg("#00d4ff"), 20.0, 20.0, 410.0, 1.0),
                shape("dv_ruler_b", rect_svg("#00d4ff"), 20.0, 250.0, 410.0, 1.0),
                shape("dv_graph", rect_svg("#333333"), 320.0, 50.0, 100.0, 60.0),
            ],
            [
                (Name, text(30.0, 40.0, 20.0, Left)),
                (Title, text(30.0, 70.0, 12.0, Left)),
                (Company, text(30.0, 215.0, 12.0, Left).font_family("monospace")),
                (Email, text(280.0, 215.0, 10.0, Right).width(150.0)),
                (Phone, text(280.0, 230.0, 10.0, Right).width(150.0)),
                (Logo, logo(320.0, 130.0, 60.0)),
            ],
        ),
        Entry {
            id: "liquid",
            name: "Liquid",
            description: "Organic shapes, smooth gradients.",
            preview: "#ff9a9e",
            thumbnail: Some("linear-gradient(to top, #a18cd1 0%, #fbc2eb 100%)"),
            background: "#fbc2eb",
            background_image: Some("linear-gradient(to top, #a18cd1 0%, #fbc2eb 100%)"),
            color: "#ffffff",
            font: "sans-serif",
        }
        .build(
            Vec::new(),
            [
                (Name, text(40.0, 90.0, 36.0, Left).color("#ffffff")),
                (Title, text(40.0, 135.0, 16.0, Left).color("#ffffff")),
                (Company, text(250.0, 40.0, 14.0, Right).width(160.0).color("#ffffff")),
                (Email, text(250.0, 200.0, 12.0, Right).width(160.0)),
                (Phone, text(250.0, 220.0, 12.0, Right).width(160.0)),
                (Logo, logo(40.0, 180.0, 60.0)),
            ],
        ),
        Entry {
            id: "mid_century",
            name: "Mid-Century",
            description: "Olive and mustard tones, organic shapes.",
            preview: "#d6c66b",
            thumbnail: None,
            background: "#f4f3e9",
            background_image: None,
            color: "#4a5d23",
            font: "serif",
        }
        .build(
            vec![
                shape("mc_circle", circle_svg("#d6c66b"), 300.0, -50.0, 200.0, 200.0),
                shape("mc_rect", rect_svg("#cf5c36"), 0.0, 220.0, 450.0, 50.0),
            ],
            [
                (Name, text(40.0, 80.0, 28.0, Left).color("#2f3a16")),
                (Title, text(40.0, 115.0, 14.0, Left)),
                (Company, text(40.0, 40.0, 12.0, Left).letter_spacing(2.0)),
                (Email, text(40.0, 235.0, 12.0, Left).color("#ffffff")),
                (Phone, text(200.0, 235.0, 12.0, Left).color("#ffffff")),
                (Logo, logo(350.0, 150.0, 70.0)),
            ],
        ),
        Entry {
            id: "botanical",
            name: "Botanical",
            description: "Fine lines, earth tones, nature.",
            preview: "#e0e7df",
            thumbnail: None,
            background: "#f7f9f7",
            background_image: None,
            color: "#4a5d4a",
            font: "serif",
        }
        .build(
            vec![
                shape("bot_border", rect_svg("#8f9e8f"), 20.0, 20.0, 410.0, 230.0),
                shape("bot_bg", rect_svg("#ffffff"), 21.0, 21.0, 408.0, 228.0),
            ],
            [
                (Name, text(60.0, 60.0, 24.0, Left)),
                (Title, text(60.0, 90.0, 14.0, Left).color("#8f9e8f")),
                (Company, text(60.0, 190.0, 12.0, Left)),
                (Email, text(250.0, 60.0, 12.0, Right).width(140.0)),
                (Phone, text(250.0, 80.0, 12.0, Right).width(140.0)),
                (Logo, logo(280.0, 140.0, 60.0)),
            ],
        ),
        Entry {
            id: "clean_cyber",
            name: "Clean Cyber",
            description: "Minimal dark, thin neon lines.",
            preview: "#0a0a0a",
            thumbnail: None,
            background: "#0a0a0a",
            background_image: None,
            color: "#00ffaa",
            font: "monospace",
        }
        .build(
            vec![
                shape("cc_line_l", rect_svg("#00ffaa"), 20.0, 20.0, 2.0, 40.0),
                shape("cc_line_b", rect_svg("#00ffaa"), 20.0, 250.0, 40.0, 2.0),
            ],
            [
                (Name, text(50.0, 30.0, 22.0, Left)),
                (Title, text(50.0, 60.0, 12.0, Left).color("#888888")),
                (Company, text(40.0, 220.0, 14.0, Left)),
                (Email, text(280.0, 220.0, 10.0, Right)),
                (Phone, text(280.0, 235.0, 10.0, Right)),
                (Logo, logo(370.0, 20.0, 50.0)),
            ],
        ),
        Entry {
            id: "monochrome",
            name: "Monochrome",
            description: "Black background, centered embossed look.",
            preview: "#000000",
            thumbnail: None,
            background: "#000000",
            background_image: None,
            color: "#ffffff",
            font: "sans-serif",
        }
        .build(
            Vec::new(),
            [
                (Name, text(25.0, 90.0, 28.0, Center).width(400.0).color("#ffffff")),
                (
                    Title,
                    text(25.0, 130.0, 12.0, Center)
                        .width(400.0)
                        .color("#888888")
                        .letter_spacing(4.0),
                ),
                (Company, text(25.0, 60.0, 10.0, Center).width(400.0).color("#444444")),
                (Email, text(25.0, 200.0, 10.0, Center).width(400.0)),
                (Phone, text(25.0, 215.0, 10.0, Center).width(400.0)),
                (Logo, logo(195.0, 25.0, 60.0)),
            ],
        ),
        Entry {
            id: "scandi",
            name: "Scandi",
            description: "Light wood tones, geometric.",
            preview: "#e8e0d5",
            thumbnail: None,
            background: "#f2ece4",
            background_image: None,
            color: "#5e5046",
            font: "sans-serif",
        }
        .build(
            vec![shape("sc_c", circle_svg("#d8d0c5"), 300.0, 150.0, 200.0, 200.0)],
            [
                (Name, text(40.0, 100.0, 26.0, Left)),
                (Title, text(40.0, 135.0, 14.0, Left).color("#8c7b70")),
                (Company, text(40.0, 40.0, 14.0, Left)),
                (Email, text(40.0, 210.0, 11.0, Left)),
                (Phone, text(40.0, 225.0, 11.0, Left)),
                (Logo, logo(300.0, 50.0, 60.0)),
            ],
        ),
        Entry {
            id: "classic_serif",
            name: "Classic Serif",
            description: "Traditional center alignment, rules.",
            preview: "#ffffff",
            thumbnail: None,
            background: "#ffffff",
            background_image: None,
            color: "#000000",
            font: "serif",
        }
        .build(
            vec![shape("cl_line", rect_svg("#000000"), 175.0, 145.0, 100.0, 1.0)],
            [
                (Name, text(25.0, 90.0, 32.0, Center).width(400.0)),
                (Title, text(25.0, 125.0, 14.0, Center).width(400.0).color("#555555")),
                (Company, text(25.0, 50.0, 16.0, Center).width(400.0)),
                (Email, text(25.0, 200.0, 11.0, Center).width(400.0)),
                (Phone, text(25.0, 215.0, 11.0, Center).width(400.0)),
                (Logo, logo(195.0, 160.0, 60.0)),
            ],
        ),
        Entry {
            id: "vaporwave",
            name: "Vaporwave",
            description: "80s aesthetics, grid horizon, purple.",
            preview: "#240046",
            thumbnail: Some("linear-gradient(to bottom, #240046, #ff9e00)"),
            background: "#240046",
            background_image: Some("linear-gradient(to bottom, #240046 60%, #9d4edd 100%)"),
            color: "#00fff2",
            font: "sans-serif",
        }
        .build(
            vec![
                shape("vap_sun", circle_svg("#ff9e00"), 175.0, 150.0, 100.0, 100.0),
                shape("vap_grid", grid_svg("rgba(0, 255, 242, 0.3)"), 0.0, 200.0, 450.0, 70.0),
            ],
            [
                (Name, text(20.0, 20.0, 24.0, Left).color("#ff9e00")),
                (Title, text(20.0, 50.0, 14.0, Left)),
                (Company, text(20.0, 220.0, 16.0, Left).color("#00fff2").width(200.0)),
                (Email, text(300.0, 20.0, 10.0, Right)),
                (Phone, text(300.0, 35.0, 10.0, Right)),
                (Logo, logo(360.0, 100.0, 60.0)),
            ],
        ),
        Entry {
            id: "industrial",
            name: "Industrial",
            description: "Concrete texture, technical labels.",
            preview: "#7a7a7a",
            thumbnail: None,
            background: "#dcdcdc",
            background_image: None,
            color: "#333333",
            font: "monospace",
        }
        .build(
            vec![
                shape("ind_bar", rect_svg("#000000"), 0.0, 0.0, 30.0, 270.0),
                Element::new(ElementType::Text, 350.0, 20.0)
                    .with_id("ind_serial")
                    .with_content("NO. 849-22")
                    .with_font_size(10.0)
                    .with_color("#666666")
                    .as_decoration(),
            ],
            [
                (Name, text(50.0, 100.0, 22.0, Left).font_family("Arial Black")),
                (Title, text(50.0, 130.0, 12.0, Left)),
                (Company, text(50.0, 50.0, 10.0, Left).letter_spacing(1.0)),
                (Email, text(50.0, 215.0, 10.0, Left)),
                (Phone, text(50.0, 230.0, 10.0, Left)),
                (Logo, logo(350.0, 50.0, 60.0)),
            ],
        ),
        Entry {
            id: "high_fashion",
            name: "High Fashion",
            description: "High contrast, compressed type.",
            preview: "#ffffff",
            thumbnail: None,
            background: "#ffffff",
            background_image: None,
            color: "#000000",
            font: "sans-serif",
        }
        .build(
            vec![shape("hf_border", rect_svg("#000000"), 0.0, 0.0, 450.0, 4.0)],
            [
                (
                    Name,
                    text(25.0, 120.0, 40.0, Center)
                        .width(400.0)
                        .letter_spacing(-2.0)
                        .font_family("sans-serif"),
                ),
                (Title, text(25.0, 160.0, 12.0, Center).width(400.0).letter_spacing(4.0)),
                (Company, text(25.0, 30.0, 14.0, Center).width(400.0).font_weight("bold")),
                (Email, text(25.0, 245.0, 10.0, Left)),
                (Phone, text(380.0, 245.0, 10.0, Right).width(50.0)),
                (Logo, logo(195.0, 70.0, 60.0)),
            ],
        ),
        Entry {
            id: "origami",
            name: "Origami",
            description: "Sharp angles, shadows.",
            preview: "#e0f7fa",
            thumbnail: None,
            background: "#ffffff",
            background_image: None,
            color: "#006064",
            font: "sans-serif",
        }
        .build(
            vec![shape("ori_tri", triangle_svg("#b2ebf2"), 0.0, 0.0, 200.0, 200.0)],
            [
                (Name, text(220.0, 50.0, 24.0, Left)),
                (Title, text(220.0, 80.0, 14.0, Left)),
                (Company, text(220.0, 20.0, 12.0, Left).color("#00bcd4")),
                (Email, text(180.0, 215.0, 10.0, Right).width(250.0)),
                (Phone, text(180.0, 230.0, 10.0, Right).width(250.0)),
                (Logo, logo(360.0, 120.0, 60.0)),
            ],
        ),
        Entry {
            id: "light_leaks",
            name: "Light Leaks",
            description: "Dreamy light effects.",
            preview: "#1a1a2e",
            thumbnail: Some("linear-gradient(45deg, #1a1a2e, #16213e)"),
            background: "#16213e",
            background_image: Some("radial-gradient(circle at 10% 10%, rgba(255, 0, 150, 0.3), transparent 40%), radial-gradient(circle at 90% 90%, rgba(0, 255, 255, 0.3), transparent 40%)"),
            color: "#ffffff",
            font: "sans-serif",
        }
        .build(
            Vec::new(),
            [
                (Name, text(25.0, 110.0, 26.0, Center).width(400.0).color("#ffffff")),
                (
                    Title,
                    text(25.0, 145.0, 14.0, Center)
                        .width(400.0)
                        .color("rgba(255,255,255,0.7)"),
                ),
                (Company, text(25.0, 60.0, 12.0, Center).width(400.0).letter_spacing(2.0)),
                (Email, text(25.0, 230.0, 10.0, Left).color("rgba(255,255,255,0.5)")),
                (
                    Phone,
                    text(325.0, 230.0, 10.0, Right)
                        .color("rgba(255,255,255,0.5)")
                        .width(100.0),
                ),
                (Logo, logo(200.0, 20.0, 50.0)),
            ],
        ),
        Entry {
            id: "celestial",
            name: "Celestial",
            description: "Gold stars, midnight blue.",
            preview: "#0c1445",
            thumbnail: None,
            background: "#0c1445",
            background_image: None,
            color: "#ffd700",
            font: "serif",
        }
        .build(
            vec![
                shape("cel_circle", ring_svg("#ffd700"), 125.0, 35.0, 200.0, 200.0),
                shape("cel_star1", star_svg("#ffd700"), 20.0, 20.0, 30.0, 30.0),
                shape("cel_star2", star_svg("#ffd700"), 400.0, 220.0, 20.0, 20.0),
            ],
            [
                (Name, text(135.0, 100.0, 24.0, Center).width(180.0).color("#ffd700")),
                (Title, text(135.0, 130.0, 12.0, Center).width(180.0).color("#b0c4de")),
                (Company, text(135.0, 150.0, 10.0, Center).width(180.0).color("#ffd700")),
                (Email, text(25.0, 230.0, 10.0, Left).color("#87cefa")),
                (Phone, text(325.0, 230.0, 10.0, Right).color("#87cefa").width(100.0)),
                (Logo, logo(200.0, 50.0, 50.0)),
            ],
        ),
        Entry {
            id: "memphis",
            name: "Memphis",
            description: "Pop art patterns, fun.",
            preview: "#ffec40",
            thumbnail: None,
            background: "#ffec40",
            background_image: None,
            color: "#000000",
            font: "sans-serif",
        }
        .build(
            vec![
                shape("mem_dots", dots_svg("rgba(0,0,0,0.1)"), 0.0, 0.0, 450.0, 270.0),
                shape("mem_tri", triangle_svg("#ff0055"), 350.0, 50.0, 80.0, 80.0),
                shape("mem_wave", wave_svg("#3333ff"), 20.0, 220.0, 100.0, 20.0),
                shape("mem_card", rect_svg("#ffffff"), 110.0, 35.0, 230.0, 200.0),
            ],
            [
                (Name, text(120.0, 60.0, 22.0, Center).width(210.0).color("#000000")),
                (Title, text(120.0, 90.0, 14.0, Center).width(210.0).color("#333333")),
                (Company, text(120.0, 120.0, 12.0, Center).width(210.0)),
                (Email, text(120.0, 190.0, 10.0, Center).width(210.0)),
                (Phone, text(120.0, 205.0, 10.0, Center).width(210.0)),
                (Logo, logo(205.0, 140.0, 40.0)),
            ],
        ),
        Entry {
            id: "mesh_gradient",
            name: "Mesh Gradient",
            description: "Fluid, grain texture.",
            preview: "#ff9a9e",
            thumbnail: Some("radial-gradient(at 0% 0%, hsla(253,16%,7%,1) 0, transparent 50%), radial-gradient(at 50% 0%, hsla(225,39%,30%,1) 0, transparent 50%), radial-gradient(at 100% 0%, hsla(339,49%,30%,1) 0, transparent 50%)"),
            background: "#000000",
            background_image: Some("radial-gradient(at 0% 0%, #4a00e0 0, transparent 50%), radial-gradient(at 100% 100%, #8e2de2 0, transparent 50%)"),
            color: "#ffffff",
            font: "sans-serif",
        }
        .build(
            Vec::new(),
            [
                (Name, text(25.0, 115.0, 32.0, Center).width(400.0).font_weight("bold")),
                (Title, text(25.0, 155.0, 14.0, Center).width(400.0).letter_spacing(2.0)),
                (Company, text(25.0, 30.0, 12.0, Center).width(400.0).opacity(0.8)),
                (Email, text(25.0, 230.0, 10.0, Center).width(400.0).opacity(0.7)),
                (Phone, text(25.0, 245.0, 10.0, Center).width(400.0).opacity(0.7)),
                (Logo, logo(200.0, 60.0, 50.0)),
            ],
        ),
        Entry {
            id: "cyber_east",
            name: "Cyber-East",
            description: "Vertical layout, neon red.",
            preview: "#000000",
            thumbnail: None,
            background: "#080808",
            background_image: None,
            color: "#ff003c",
            font: "monospace",
        }
        .build(
            vec![
                shape("cyb_v_line", rect_svg("#ff003c"), 380.0, 20.0, 2.0, 230.0),
                shape("cyb_h_box", rect_svg("rgba(255, 0, 60, 0.1)"), 20.0, 220.0, 340.0, 30.0),
            ],
            [
                (Name, text(320.0, 30.0, 24.0, Center).width(40.0).font_family("serif")),
                (Title, text(280.0, 30.0, 14.0, Center).width(30.0)),
                (Company, text(20.0, 20.0, 18.0, Left).font_family("Arial Black")),
                (Email, text(30.0, 228.0, 10.0, Left).color("#ffffff")),
                (Phone, text(180.0, 228.0, 10.0, Right).color("#ffffff").width(140.0)),
                (Logo, logo(20.0, 50.0, 60.0)),
            ],
        ),
        Entry {
            id: "baroque",
            name: "Baroque",
            description: "Luxury, dark velvet, borders.",
            preview: "#2b0a0d",
            thumbnail: None,
            background: "#2b0a0d",
            background_image: None,
            color: "#e5c100",
            font: "serif",
        }
        .build(
            vec![
                shape("bar_border_out", rect_svg("#e5c100"), 10.0, 10.0, 430.0, 250.0),
                shape("bar_border_in", rect_svg("#2b0a0d"), 12.0, 12.0, 426.0, 246.0),
                shape("bar_inner", rect_svg("none"), 20.0, 20.0, 410.0, 230.0),
            ],
            [
                (
                    Name,
                    text(25.0, 100.0, 30.0, Center)
                        .width(400.0)
                        .color("#e5c100")
                        .italic(true),
                ),
                (Title, text(25.0, 140.0, 14.0, Center).width(400.0).color("#cfb53b")),
                (Company, text(25.0, 70.0, 16.0, Center).width(400.0).color("#cfb53b")),
                (Email, text(25.0, 210.0, 10.0, Center).width(400.0)),
                (Phone, text(25.0, 225.0, 10.0, Center).width(400.0)),
                (Logo, logo(195.0, 25.0, 60.0)),
            ],
        ),
        Entry {
            id: "flat_2",
            name: "Flat 2.0",
            description: "Cards within cards, soft shadows.",
            preview: "#f1f5f9",
            thumbnail: None,
            background: "#f1f5f9",
            background_image: None,
            color: "#334155",
            font: "sans-serif",
        }
        .build(
            vec![
                shape("fl_card_l", rect_svg("#ffffff"), 20.0, 20.0, 250.0, 230.0),
                shape("fl_card_r1", rect_svg("#ffffff"), 290.0, 20.0, 140.0, 100.0),
                shape("fl_card_r2", rect_svg("#ffffff"), 290.0, 140.0, 140.0, 110.0),
            ],
            [
                (Name, text(40.0, 100.0, 28.0, Left).color("#1e293b")),
                (Title, text(40.0, 140.0, 14.0, Left).color("#64748b")),
                (Company, text(40.0, 40.0, 12.0, Left).color("#94a3b8")),
                (Logo, logo(330.0, 40.0, 60.0)),
                (Email, text(300.0, 160.0, 10.0, Center).width(120.0).color("#64748b")),
                (Phone, text(300.0, 190.0, 10.0, Center).width(120.0).color("#64748b")),
            ],
        ),
        Entry {
            id: "editorial",
            name: "Editorial",
            description: "Big typography, grid lines.",
            preview: "#ffffff",
            thumbnail: None,
            background: "#ffffff",
            background_image: None,
            color: "#000000",
            font: "serif",
        }
        .build(
            vec![
                shape("ed_line_v", rect_svg("#000000"), 225.0, 20.0, 1.0, 230.0),
                shape("ed_line_h", rect_svg("#000000"), 20.0, 135.0, 410.0, 1.0),
            ],
            [
                (Name, text(25.0, 50.0, 36.0, Right).width(190.0).font_weight("bold")),
                (Title, text(240.0, 60.0, 14.0, Left).width(190.0).italic(true)),
                (Company, text(25.0, 20.0, 10.0, Left)),
                (Email, text(25.0, 150.0, 10.0, Left)),
                (Phone, text(25.0, 170.0, 10.0, Left)),
                (Logo, logo(350.0, 150.0, 60.0)),
            ],
        ),
        Entry {
            id: "tropical",
            name: "Tropical",
            description: "Leaf shadows, sage green.",
            preview: "#e0efe0",
            thumbnail: None,
            background: "#eaf4ea",
            background_image: None,
            color: "#3c5c3c",
            font: "sans-serif",
        }
        .build(
            vec![shape("trop_leaf", leaf_svg("#ccdcc6"), -50.0, 0.0, 300.0, 300.0)],
            [
                (Name, text(200.0, 80.0, 26.0, Right).width(230.0)),
                (Title, text(200.0, 120.0, 14.0, Right).width(230.0)),
                (Company, text(200.0, 40.0, 14.0, Right).width(230.0).letter_spacing(2.0)),
                (Email, text(200.0, 210.0, 10.0, Right).width(230.0)),
                (Phone, text(200.0, 225.0, 10.0, Right).width(230.0)),
                (Logo, logo(370.0, 150.0, 60.0)),
            ],
        ),
        Entry {
            id: "schematic",
            name: "Schematic",
            description: "Blueprint blue, white dashed lines.",
            preview: "#0044aa",
            thumbnail: None,
            background: "#0055cc",
            background_image: None,
            color: "#ffffff",
            font: "monospace",
        }
        .build(
            vec![
                shape("sch_grid", grid_svg("rgba(255,255,255,0.2)"), 0.0, 0.0, 450.0, 270.0),
                shape("sch_cross", crosshair_svg("#ffffff"), 225.0, 135.0, 50.0, 50.0),
            ],
            [
                (Name, text(25.0, 20.0, 20.0, Left).color("#ffffff")),
                (Title, text(25.0, 50.0, 12.0, Left).color("#dddddd")),
                (Company, text(300.0, 20.0, 12.0, Right).color("#ffffff").width(120.0)),
                (Email, text(25.0, 220.0, 10.0, Left)),
                (Phone, text(25.0, 240.0, 10.0, Left)),
                (Logo, logo(200.0, 110.0, 50.0)),
            ],
        ),
        Entry {
            id: "glitch",
            name: "Glitch",
            description: "RGB offset, noise.",
            preview: "#000000",
            thumbnail: None,
            background: "#121212",
            background_image: None,
            color: "#ffffff",
            font: "sans-serif",
        }
        .build(
            vec![
                shape("gl_red", rect_svg("rgba(255,0,0,0.5)"), 24.0, 40.0, 150.0, 40.0),
                shape("gl_cyan", rect_svg("rgba(0,255,255,0.5)"), 20.0, 38.0, 150.0, 40.0),
            ],
            [
                (Name, text(22.0, 39.0, 32.0, Left).color("#ffffff").font_weight("bold")),
                (Title, text(22.0, 80.0, 14.0, Left).color("#aaaaaa")),
                (Company, text(22.0, 215.0, 14.0, Left).letter_spacing(3.0)),
                (Email, text(250.0, 215.0, 10.0, Right).width(180.0)),
                (Phone, text(250.0, 230.0, 10.0, Right).width(180.0)),
                (Logo, logo(350.0, 40.0, 60.0)),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_template_ids_are_unique() {
        let ids: HashSet<&str> = ids().collect();
        assert_eq!(ids.len(), templates().len());
        assert_eq!(templates().len(), 30);
    }

    #[test]
    fn test_picker_order() {
        let order: Vec<&str> = ids().collect();
        assert_eq!(
            order,
            [
                "swiss", "art_deco", "architectural", "wabi_sabi", "bauhaus_v2",
                "neo_brutalist", "glass_v2", "data_viz", "liquid", "mid_century",
                "botanical", "clean_cyber", "monochrome", "scandi", "classic_serif",
                "vaporwave", "industrial", "high_fashion", "origami", "light_leaks",
                "celestial", "memphis", "mesh_gradient", "cyber_east", "baroque",
                "flat_2", "editorial", "tropical", "schematic", "glitch",
            ]
        );
    }

    #[test]
    fn test_decoration_layers_keep_declared_order() {
        let layers = |id: &str| -> Vec<String> {
            require(id)
                .expect("template exists")
                .style
                .decorations
                .iter()
                .map(|d| d.id.to_string())
                .collect()
        };
        assert_eq!(layers("neo_brutalist"), ["nb_border", "nb_inner", "nb_shadow"]);
        assert_eq!(layers("baroque"), ["bar_border_out", "bar_border_in", "bar_inner"]);
        assert!(layers("light_leaks").is_empty());
        assert!(layers("mesh_gradient").is_empty());
    }

    #[test]
    fn test_leaf_and_crosshair_shapes() {
        use base64::Engine as _;

        let decode = |template: &str| -> String {
            let decorations = &require(template).expect("template exists").style.decorations;
            let uri = decorations
                .last()
                .and_then(|d| d.content.as_deref())
                .expect("decoration content");
            let encoded = uri.trim_start_matches("data:image/svg+xml;base64,");
            String::from_utf8(STANDARD.decode(encoded).expect("base64")).expect("utf-8")
        };
        assert!(decode("tropical").contains("C80 50 100 0 50 0\" fill=\"#ccdcc6\""));
        let crosshair = decode("schematic");
        assert!(crosshair.contains("viewBox=\"0 0 50 50\""));
        assert!(crosshair.contains("<circle cx=\"25\" cy=\"25\" r=\"15\""));
    }

    #[test]
    fn test_text_overrides_carry_weight_italic_and_opacity() {
        let patch = |template: &str, kind: ElementType| {
            require(template).expect("template exists").style.layout_overrides[&kind].clone()
        };
        assert_eq!(patch("baroque", Name).italic, Some(true));
        assert_eq!(patch("editorial", Title).italic, Some(true));
        assert_eq!(patch("editorial", Name).font_weight.as_deref(), Some("bold"));
        assert_eq!(patch("mesh_gradient", Email).opacity, Some(0.7));
        assert_eq!(patch("light_leaks", Company).letter_spacing, Some(2.0));
        assert_eq!(patch("swiss", Name).italic, None);
    }

    #[test]
    fn test_decorations_are_flagged_and_unique() {
        for template in templates() {
            let mut seen = HashSet::new();
            for decoration in &template.style.decorations {
                assert!(decoration.is_template_decoration, "{}", template.id);
                assert!(seen.insert(decoration.id.clone()), "{}", template.id);
            }
        }
    }

    #[test]
    fn test_every_template_places_bound_fields() {
        for template in templates() {
            for kind in [Name, Title, Company, Email, Phone, Logo] {
                assert!(
                    template.style.layout_overrides.contains_key(&kind),
                    "{} lacks {kind}",
                    template.id
                );
            }
        }
    }

    #[test]
    fn test_find_and_require() {
        assert_eq!(find("swiss").map(|t| t.name.as_str()), Some("Swiss"));
        assert!(find("nope").is_none());
        assert!(matches!(require("nope"), Err(CardError::TemplateNotFound(id)) if id == "nope"));
    }

    #[test]
    fn test_svg_data_uri_is_base64() {
        let uri = svg_data_uri("<svg/>");
        assert_eq!(uri, "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn test_template_json_uses_type_keys() {
        let template = require("swiss").expect("swiss exists");
        let value = serde_json::to_value(template).expect("serialize");
        assert_eq!(value["style"]["layoutOverrides"]["name"]["x"], 70.0);
        let back: Template = serde_json::from_value(value).expect("deserialize");
        assert_eq!(&back, template);
    }
}
