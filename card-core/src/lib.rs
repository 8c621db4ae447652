//! # Card Core
//!
//! Layout engine for two-sided physical business cards.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 card-core                   │
//! ├─────────────────────────────────────────────┤
//! │  Element Model   │  Canvas Engine           │
//! │  - Elements      │  - Selection             │
//! │  - Sides         │  - Drag transactions     │
//! │  - Card config   │  - Style edits           │
//! ├─────────────────────────────────────────────┤
//! │  Templates       │  Redesign                │
//! │  - Catalog       │  - Archetypes            │
//! │  - Application   │  - Collision search      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every transformer consumes and produces a [`Side`], so template
//! application, redesign and canvas edits can be chained freely.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod canvas;
pub mod catalog;
pub mod config;
pub mod element;
pub mod error;
pub mod redesign;
pub mod side;
pub mod template;

pub use canvas::CardCanvas;
pub use config::CanvasConfig;
pub use element::{Align, Element, ElementId, ElementPatch, ElementType, Rect, CARD_HEIGHT, CARD_WIDTH};
pub use error::{CardError, CardResult};
pub use redesign::{redesign, redesign_with_rng, Archetype, RedesignOptions, RedesignReport};
pub use side::{CardInfo, PhysicalCardConfig, Side, SideKind};
pub use template::{apply_template, apply_template_to_card, Template, TemplateStyle, TextStyle};

/// Card core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
