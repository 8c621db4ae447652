//! Interactive placement canvas for one card side.
//!
//! The canvas owns a [`Side`], a selection set and at most one drag session.
//! Every operation is total: ids that no longer exist, empty selections and
//! read-only mode all turn into silent no-ops, because ids can be invalidated
//! by delete-then-edit sequences in the gesture stream.
//!
//! ## Drag transactions
//!
//! ```text
//!  begin_drag ──► drag(Δ) ──► drag(Δ) ──► commit_drag(final)
//!      │             │                          │
//!   snapshot     origin + ΣΔ               origin + (final − origin)
//!   origins      (clamped)                 anchor set to final exactly
//!      │
//!      └────────────────► cancel_drag: restore snapshot
//! ```

use serde::{Deserialize, Serialize};

use crate::config::CanvasConfig;
use crate::element::{Element, ElementId, ElementPatch, ElementType, CARD_HEIGHT, CARD_WIDTH};
use crate::side::Side;

/// Where [`CardCanvas::add_text`] places new text.
const NEW_TEXT_POSITION: (f32, f32) = (20.0, 20.0);

/// Font size of new text.
const NEW_TEXT_FONT_SIZE: f32 = 12.0;

/// Pre-drag position of one moving element.
#[derive(Debug, Clone, PartialEq)]
struct Origin {
    id: ElementId,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

/// A drag gesture in progress.
#[derive(Debug, Clone, PartialEq)]
struct DragSession {
    /// The element under the pointer.
    anchor: ElementId,
    /// Snapshot of every element that moves with the anchor.
    origins: Vec<Origin>,
    /// Accumulated pointer delta since the gesture started.
    offset: (f32, f32),
}

/// An interactive editing surface over one card side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCanvas {
    side: Side,
    config: CanvasConfig,
    selected: Vec<ElementId>,
    #[serde(skip)]
    drag: Option<DragSession>,
}

impl CardCanvas {
    /// Create a canvas over a side.
    #[must_use]
    pub fn new(side: Side, config: CanvasConfig) -> Self {
        Self {
            side,
            config,
            selected: Vec::new(),
            drag: None,
        }
    }

    /// The side being edited.
    #[must_use]
    pub fn side(&self) -> &Side {
        &self.side
    }

    /// Consume the canvas and return the edited side.
    #[must_use]
    pub fn into_side(self) -> Side {
        self.side
    }

    /// Replace the side, e.g. after a template switch or an edit made outside
    /// the canvas. Selection entries whose element disappeared are dropped and
    /// any drag in progress is abandoned.
    pub fn replace_side(&mut self, side: Side) {
        self.side = side;
        self.drag = None;
        let side = &self.side;
        self.selected.retain(|id| side.contains(id));
    }

    /// Overwrite the content of every user element bound to `kind`.
    pub fn sync_field(&mut self, kind: ElementType, value: &str) -> usize {
        self.side.sync_field(kind, value)
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Change the configuration. Entering read-only mode clears the selection.
    pub fn set_config(&mut self, config: CanvasConfig) {
        self.config = config;
        if config.read_only {
            self.cancel_drag();
            self.selected.clear();
        }
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Currently selected element IDs, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[ElementId] {
        &self.selected
    }

    /// The first selected element; the toolbar displays its style.
    #[must_use]
    pub fn primary_selection(&self) -> Option<&Element> {
        self.selected.first().and_then(|id| self.side.get(id))
    }

    /// Check whether an element is selected.
    #[must_use]
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected.contains(id)
    }

    /// Select an element.
    ///
    /// With `additive` (the multi-select modifier held) the element's
    /// membership is toggled. Otherwise the selection becomes just this
    /// element, unless it is already selected, so that pressing on one member
    /// of a group keeps the group for dragging.
    pub fn select(&mut self, id: &ElementId, additive: bool) {
        if self.config.read_only {
            return;
        }
        if !self.side.contains(id) {
            tracing::trace!("Select ignored, no element {id}");
            return;
        }
        if additive {
            if let Some(pos) = self.selected.iter().position(|s| s == id) {
                self.selected.remove(pos);
            } else {
                self.selected.push(id.clone());
            }
        } else if !self.selected.contains(id) {
            self.selected = vec![id.clone()];
        }
        tracing::debug!("Selection: {} element(s)", self.selected.len());
    }

    /// Clear the selection (a click on empty canvas).
    pub fn clear_selection(&mut self) {
        if self.config.read_only {
            return;
        }
        self.selected.clear();
    }

    /// Handle a click at a design-space point: select the topmost element
    /// there, or clear the selection if the point is empty.
    pub fn click(&mut self, x: f32, y: f32, additive: bool) {
        match self.hit_test(x, y) {
            Some(id) => self.select(&id, additive),
            None => self.clear_selection(),
        }
    }

    /// Topmost visible element containing a design-space point.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32) -> Option<ElementId> {
        self.side
            .draw_order(&self.selected)
            .into_iter()
            .rev()
            .find(|e| e.contains_point(x, y))
            .map(|e| e.id.clone())
    }

    /// Convert an on-screen point to design units.
    #[must_use]
    pub fn to_design_space(&self, px: f32, py: f32) -> (f32, f32) {
        let scale = if self.config.display_scale > 0.0 {
            self.config.display_scale
        } else {
            1.0
        };
        (px / scale, py / scale)
    }

    /// Visible elements in preview draw order, selected ones on top.
    #[must_use]
    pub fn draw_order(&self) -> Vec<&Element> {
        self.side.draw_order(&self.selected)
    }

    // ------------------------------------------------------------------------
    // Dragging
    // ------------------------------------------------------------------------

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start a drag gesture on an element.
    ///
    /// If the element is selected, the whole selection moves with it;
    /// otherwise only the element itself moves. Pre-drag positions are
    /// snapshotted so moves never accumulate drift and a cancel can restore
    /// them exactly.
    pub fn begin_drag(&mut self, id: &ElementId) {
        if self.config.read_only {
            return;
        }
        if self.drag.as_ref().is_some_and(|d| &d.anchor == id) {
            return;
        }
        self.cancel_drag();
        let Some(session) = self.snapshot(id) else {
            tracing::trace!("Drag ignored, no element {id}");
            return;
        };
        tracing::debug!("Drag started on {id} with {} element(s)", session.origins.len());
        self.drag = Some(session);
    }

    /// Move the dragged group by an incremental pointer delta.
    ///
    /// Starts a session implicitly if none is running for `id`.
    pub fn drag(&mut self, id: &ElementId, dx: f32, dy: f32) {
        if self.config.read_only {
            return;
        }
        self.begin_drag(id);
        let Some(mut session) = self.drag.take() else {
            return;
        };
        session.offset.0 += dx;
        session.offset.1 += dy;
        let (cdx, cdy) = clamp_delta(&session.origins, session.offset.0, session.offset.1);
        self.move_group(&session.origins, cdx, cdy);
        self.drag = Some(session);
    }

    /// Finish a drag with the anchor's final position.
    ///
    /// The final position is snapped to the grid if snapping is on. The
    /// anchor lands on it exactly and every other moving element shifts by
    /// the same delta from its pre-drag position. If the group would leave
    /// the card, the delta is clamped for all members alike.
    pub fn commit_drag(&mut self, id: &ElementId, final_x: f32, final_y: f32) {
        if self.config.read_only {
            return;
        }
        let session = match self.drag.take() {
            Some(session) if &session.anchor == id => Some(session),
            Some(other) => {
                self.restore(&other.origins);
                self.snapshot(id)
            }
            None => self.snapshot(id),
        };
        let Some(session) = session else {
            tracing::trace!("Commit ignored, no element {id}");
            return;
        };
        let Some(anchor) = session.origins.iter().find(|o| &o.id == id) else {
            return;
        };

        let fx = self.config.snap(final_x);
        let fy = self.config.snap(final_y);
        let (dx, dy) = (fx - anchor.x, fy - anchor.y);
        let (cdx, cdy) = clamp_delta(&session.origins, dx, dy);
        #[allow(clippy::float_cmp)]
        let exact = cdx == dx && cdy == dy;

        self.move_group(&session.origins, cdx, cdy);
        if exact {
            if let Some(element) = self.side.get_mut(id) {
                element.x = fx;
                element.y = fy;
            }
        }
        tracing::debug!(
            "Drag committed on {id}: moved {} element(s) by ({cdx}, {cdy})",
            session.origins.len()
        );
    }

    /// Abort the drag in progress, restoring every pre-drag position.
    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            self.restore(&session.origins);
            tracing::debug!("Drag on {} cancelled", session.anchor);
        }
    }

    fn snapshot(&self, id: &ElementId) -> Option<DragSession> {
        self.side.get(id)?;
        let moving: Vec<&ElementId> = if self.selected.contains(id) {
            self.selected.iter().collect()
        } else {
            vec![id]
        };
        let origins = moving
            .into_iter()
            .filter_map(|mid| self.side.get(mid))
            .map(|e| {
                let (width, height) = e.display_size();
                Origin {
                    id: e.id.clone(),
                    x: e.x,
                    y: e.y,
                    width,
                    height,
                }
            })
            .collect();
        Some(DragSession {
            anchor: id.clone(),
            origins,
            offset: (0.0, 0.0),
        })
    }

    fn move_group(&mut self, origins: &[Origin], dx: f32, dy: f32) {
        for origin in origins {
            if let Some(element) = self.side.get_mut(&origin.id) {
                element.x = origin.x + dx;
                element.y = origin.y + dy;
            }
        }
    }

    fn restore(&mut self, origins: &[Origin]) {
        self.move_group(origins, 0.0, 0.0);
    }

    // ------------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------------

    /// Insert a new text element at the default position and select it.
    ///
    /// Returns the new element's id, or `None` in read-only mode.
    pub fn add_text(&mut self) -> Option<ElementId> {
        if self.config.read_only {
            return None;
        }
        let (x, y) = NEW_TEXT_POSITION;
        let element = Element::new(ElementType::Text, x, y)
            .with_id(ElementId::scoped("text"))
            .with_content("New Text")
            .with_font_size(NEW_TEXT_FONT_SIZE)
            .with_color("#000000");
        let id = element.id.clone();
        self.side.elements.push(element);
        self.selected = vec![id.clone()];
        tracing::debug!("Added text element {id}");
        Some(id)
    }

    /// Remove every selected element and clear the selection.
    pub fn delete_selected(&mut self) {
        if self.config.read_only || self.selected.is_empty() {
            return;
        }
        self.cancel_drag();
        let selected = std::mem::take(&mut self.selected);
        let before = self.side.len();
        self.side.elements.retain(|e| !selected.contains(&e.id));
        tracing::debug!("Deleted {} element(s)", before - self.side.len());
    }

    /// Apply a partial update to every element in `targets`.
    ///
    /// Content is single-target: when more than one element is targeted the
    /// patch's content is ignored and the remaining fields still apply.
    pub fn update_style(&mut self, targets: &[ElementId], patch: &ElementPatch) {
        if self.config.read_only || targets.is_empty() {
            return;
        }
        let mut distinct: Vec<&ElementId> = targets.iter().collect();
        distinct.sort();
        distinct.dedup();

        let stripped;
        let patch = if distinct.len() > 1 && patch.content.is_some() {
            tracing::debug!("Ignoring content edit across {} elements", distinct.len());
            stripped = ElementPatch {
                content: None,
                ..patch.clone()
            };
            &stripped
        } else {
            patch
        };

        for element in self
            .side
            .elements
            .iter_mut()
            .filter(|e| distinct.contains(&&e.id))
        {
            patch.apply_to(element);
        }
    }

    /// Apply a partial update to the current selection.
    pub fn update_selected_style(&mut self, patch: &ElementPatch) {
        let targets = self.selected.clone();
        self.update_style(&targets, patch);
    }

    /// Replace the side's background color and image.
    pub fn set_background(&mut self, color: Option<String>, image: Option<String>) {
        if self.config.read_only {
            return;
        }
        self.side.background_color = color;
        self.side.background_image = image;
    }
}

/// Limit a group delta so no moving element is pushed further off the card.
///
/// Each member allows movement up to the card edge, and always allows
/// movement back toward the card, so elements that already bleed past an
/// edge (template decorations) never block or force a move.
fn clamp_delta(origins: &[Origin], dx: f32, dy: f32) -> (f32, f32) {
    let mut lo = (f32::NEG_INFINITY, f32::NEG_INFINITY);
    let mut hi = (f32::INFINITY, f32::INFINITY);
    for o in origins {
        lo.0 = lo.0.max((-o.x).min(0.0));
        lo.1 = lo.1.max((-o.y).min(0.0));
        hi.0 = hi.0.min((CARD_WIDTH - o.width - o.x).max(0.0));
        hi.1 = hi.1.min((CARD_HEIGHT - o.height - o.y).max(0.0));
    }
    (dx.clamp(lo.0, hi.0), dy.clamp(lo.1, hi.1))
}
