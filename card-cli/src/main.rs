//! # Card CLI
//!
//! Command line driver for the card layout engine. Cards are read as JSON
//! from a file or stdin (`-`) and written to stdout.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use card_core::{
    apply_template, apply_template_to_card, catalog, redesign, Archetype, CanvasConfig,
    CardCanvas, CardInfo, ElementId, PhysicalCardConfig, RedesignOptions, SideKind,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "card")]
#[command(about = "Layout engine for two-sided physical business cards")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the template catalog.
    Templates {
        /// Print full template definitions as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the default card layout for the given details.
    New {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// Logo image reference or data URI.
        #[arg(long, default_value = "")]
        logo: String,
    },
    /// Apply a catalog template.
    Apply {
        /// Template id (see `card templates`).
        #[arg(long)]
        template: String,
        /// Restrict to one side.
        #[arg(long, value_enum, default_value_t = SideArg::Both)]
        side: SideArg,
        /// Card JSON file, or `-` for stdin.
        input: PathBuf,
    },
    /// Randomize the layout of one side.
    Redesign {
        #[arg(long, value_enum, default_value_t = SideArg::Front)]
        side: SideArg,
        /// Force a layout archetype (left, center, asym).
        #[arg(long)]
        archetype: Option<Archetype>,
        /// Seed for a reproducible run.
        #[arg(long, env = "CARD_SEED")]
        seed: Option<u64>,
        /// Print the redesign report to stderr.
        #[arg(long)]
        report: bool,
        /// Card JSON file, or `-` for stdin.
        input: PathBuf,
    },
    /// Move one element as a committed drag, with grid snapping.
    Move {
        #[arg(long, value_enum, default_value_t = SideArg::Front)]
        side: SideArg,
        /// Element id.
        #[arg(long)]
        id: String,
        #[arg(long, allow_negative_numbers = true)]
        x: f32,
        #[arg(long, allow_negative_numbers = true)]
        y: f32,
        /// Card JSON file, or `-` for stdin.
        input: PathBuf,
    },
    /// Check that a card is well-formed.
    Validate {
        /// Card JSON file, or `-` for stdin.
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SideArg {
    Front,
    Back,
    Both,
}

impl SideArg {
    fn kinds(self) -> &'static [SideKind] {
        match self {
            Self::Front => &[SideKind::Front],
            Self::Back => &[SideKind::Back],
            Self::Both => &SideKind::BOTH,
        }
    }
}

/// Initialize tracing on stderr so stdout stays pure JSON.
///
/// Set `RUST_LOG` to control log levels (default: info,card_core=debug).
/// Set `RUST_LOG_FORMAT=json` for JSON output.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,card_core=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Templates { json } => list_templates(json),
        Command::New {
            name,
            title,
            company,
            email,
            phone,
            logo,
        } => {
            let card = PhysicalCardConfig::from_card_info(&CardInfo {
                name,
                title,
                company,
                email,
                phone,
                logo,
            });
            print_card(&card)
        }
        Command::Apply {
            template,
            side,
            input,
        } => {
            let template = catalog::require(&template)?;
            let card = read_card(&input)?;
            let card = if side == SideArg::Both {
                apply_template_to_card(&card, template)
            } else {
                let mut card = card;
                for &kind in side.kinds() {
                    let styled = apply_template(card.side(kind), template);
                    *card.side_mut(kind) = styled;
                }
                card
            };
            print_card(&card)
        }
        Command::Redesign {
            side,
            archetype,
            seed,
            report,
            input,
        } => {
            let mut card = read_card(&input)?;
            let options = RedesignOptions { archetype, seed };
            for &kind in side.kinds() {
                let (redesigned, summary) = redesign(card.side(kind), &options.for_side(kind));
                if report {
                    eprintln!("{}", serde_json::to_string_pretty(&summary)?);
                }
                *card.side_mut(kind) = redesigned;
            }
            print_card(&card)
        }
        Command::Move {
            side,
            id,
            x,
            y,
            input,
        } => {
            let mut card = read_card(&input)?;
            let config = CanvasConfig::from_env();
            let id = ElementId::from(id);
            let mut found = false;
            for &kind in side.kinds() {
                let mut canvas = CardCanvas::new(card.side(kind).clone(), config);
                found |= canvas.side().contains(&id);
                canvas.commit_drag(&id, x, y);
                *card.side_mut(kind) = canvas.into_side();
            }
            if !found {
                bail!("no element with id {id}");
            }
            print_card(&card)
        }
        Command::Validate { input } => {
            let card = read_card(&input)?;
            tracing::info!(
                front = card.front.len(),
                back = card.back.len(),
                "Card is well-formed"
            );
            println!("ok");
            Ok(())
        }
    }
}

fn list_templates(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog::templates())?);
        return Ok(());
    }
    for template in catalog::templates() {
        println!(
            "{:<16} {:<20} {}",
            template.id, template.name, template.description
        );
    }
    Ok(())
}

/// Read and validate a card from a file, or stdin when `path` is `-`.
fn read_card(path: &Path) -> anyhow::Result<PhysicalCardConfig> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read card from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    PhysicalCardConfig::from_json(&json)
        .with_context(|| format!("Invalid card in {}", path.display()))
}

fn print_card(card: &PhysicalCardConfig) -> anyhow::Result<()> {
    println!("{}", card.to_json()?);
    Ok(())
}
