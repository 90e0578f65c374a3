//! Terminal front-end for the storefront engine.
//!
//! Loads the equipment and item payloads, applies the requested facets and
//! query, replays `--select` toggles in order, and either renders the
//! listing or prints the stock inquiry together with its WhatsApp link.

use anyhow::{Context, Result, anyhow, bail};
use chrono::{Local, NaiveTime, Timelike};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vitrine::config::{ENV_CATALOGS, ENV_LOG, ENV_PHONE};
use vitrine::{
    Action, CatalogStore, EntryId, Facet, FacetValue, StorefrontConfig, StorefrontState, render_facets,
    render_listing, request_label, whatsapp_link,
};

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser)]
#[command(name = "vitrine", version, about = "Browse the catalog and build stock inquiries")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the filtered catalog.
    List {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        view: ViewArgs,
        /// Print the visible entries as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Show how many entries carry each facet value.
    Facets {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Compose the inquiry for the selected entries and print its send link.
    Inquire {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        view: ViewArgs,
        /// Hour of day (0-23) to greet for instead of the local clock.
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
        /// Destination phone, including country code.
        #[arg(long, env = ENV_PHONE)]
        phone: Option<String>,
    },
    /// Load and validate the catalog payloads.
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Catalog payload file; repeat to concatenate sources in order.
    #[arg(long = "catalog", value_name = "PATH")]
    catalogs: Vec<PathBuf>,
}

#[derive(Args)]
struct ViewArgs {
    /// Case-insensitive text matched against entry names.
    #[arg(long, short)]
    query: Option<String>,
    #[arg(long = "category", value_name = "LABEL")]
    categories: Vec<String>,
    #[arg(long = "brand", value_name = "LABEL")]
    brands: Vec<String>,
    #[arg(long = "state", value_name = "LABEL")]
    states: Vec<String>,
    /// Accept a facet value given as `category=`, `brand=` or `state=LABEL`.
    #[arg(long = "facet", value_name = "NAME=LABEL")]
    facets: Vec<String>,
    /// Toggle an entry by id; repeating an id deselects it again.
    #[arg(long = "select", value_name = "ID")]
    selected: Vec<String>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::List { source, view, json } => {
            let store = load_store(&source)?;
            let state = build_state(&store, &view)?;
            if json {
                let visible = state.visible(&store);
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                let mut output = String::new();
                render_listing(&store, &state, &mut output)?;
                print!("{output}");
            }
            Ok(())
        }
        Command::Facets { source } => {
            let store = load_store(&source)?;
            let mut output = String::new();
            render_facets(&store.facet_summary(), &mut output)?;
            print!("{output}");
            Ok(())
        }
        Command::Inquire {
            source,
            view,
            hour,
            phone,
        } => {
            let config = StorefrontConfig::from_env().with_overrides(phone, source.catalogs.clone());
            let store = CatalogStore::load(&config.catalog_paths)?;
            let state = build_state(&store, &view)?;
            let now = match hour {
                Some(hour) => NaiveTime::from_hms_opt(hour, 0, 0)
                    .ok_or_else(|| anyhow!("invalid hour {hour}"))?,
                None => Local::now().time(),
            };
            let Some(message) = state.inquiry(&now) else {
                warn!("inquiry requested with an empty selection");
                bail!("Nothing selected; pass --select ID for each entry to ask about");
            };
            let link = whatsapp_link(&config.phone, &message)?;
            info!(
                selected = state.selection.len(),
                hour = now.hour(),
                "inquiry composed"
            );
            println!("{}", request_label(state.selection.len()));
            println!("{message}");
            println!("{link}");
            Ok(())
        }
        Command::Validate { source } => {
            let store = load_store(&source)?;
            println!("validate: PASS ({} entries)", store.len());
            Ok(())
        }
    }
}

fn load_store(source: &SourceArgs) -> Result<CatalogStore> {
    let config = StorefrontConfig::from_env().with_overrides(None, source.catalogs.clone());
    CatalogStore::load(&config.catalog_paths).with_context(|| {
        format!("loading catalogs (set --catalog or {ENV_CATALOGS})")
    })
}

fn build_state(store: &CatalogStore, view: &ViewArgs) -> Result<StorefrontState> {
    let mut actions = Vec::new();
    if let Some(query) = &view.query {
        actions.push(Action::SetQuery(query.clone()));
    }
    for (facet, labels) in [
        (Facet::Category, &view.categories),
        (Facet::Brand, &view.brands),
        (Facet::State, &view.states),
    ] {
        for label in labels {
            actions.push(Action::AcceptFacet(facet.value(label)?));
        }
    }
    for raw in &view.facets {
        actions.push(Action::AcceptFacet(FacetValue::parse(raw)?));
    }
    for raw in &view.selected {
        let id = EntryId(raw.trim().to_string());
        let entry = store
            .entry(&id)
            .ok_or_else(|| anyhow!("Unknown entry id: {raw}"))?;
        actions.push(Action::ToggleEntry(entry.clone()));
    }
    Ok(StorefrontState::default().reduce_all(actions))
}
