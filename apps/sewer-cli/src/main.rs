//! # Sewer Directory CLI
//!
//! Command-line host for the directory client.
//!
//! ## Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sewer [--config PATH] [--public] [--json] <COMMAND>                   │
//! │                                                                         │
//! │  states         [--page N] [--per-page N]      StatesListing           │
//! │  companies      <STATE> [--city C] [--page..]  CompaniesListing        │
//! │  search-states  <QUERY> [--country C]          StatesSearch            │
//! │  autocomplete   <QUERY> [--limit N]            LocationAutocomplete    │
//! │  contractors    [--state S] [--city C] [--id]  static dataset, offline │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use sewer_client::search::{DebouncedSearch, SearchSource};
use sewer_client::{
    ApiClient, ChannelHandler, ClientConfig, CompaniesListing, ListingOptions,
    LocationAutocomplete, SessionError, SessionEvent, StatesListing, StatesSearch,
};
use sewer_core::contractors::{
    cities_by_state, contractor_by_id, contractors_by_city, contractors_by_state,
};
use sewer_core::slug::format_slug_to_title;
use sewer_core::{Contractor, ResourceEnvelope, STATES};

#[derive(Parser)]
#[command(name = "sewer")]
#[command(about = "Browse the sewer directory from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use the public client (no identifying header, no session handling)
    #[arg(long, global = true)]
    public: bool,

    /// Print raw JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Remote(RemoteCommand),

    /// Browse the bundled contractor list (no network)
    Contractors {
        /// State name, e.g. "California"
        #[arg(long)]
        state: Option<String>,
        /// City name (requires --state)
        #[arg(long)]
        city: Option<String>,
        /// Contractor id
        #[arg(long)]
        id: Option<String>,
    },
}

/// Commands that talk to the backend.
#[derive(Subcommand)]
enum RemoteCommand {
    /// List states, one page at a time
    States {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// List companies in a state, optionally narrowed to a city
    Companies {
        /// State slug, e.g. "new-york"
        state: String,
        /// City slug
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Search states by name
    SearchStates {
        query: String,
        /// Country code filter
        #[arg(long)]
        country: Option<String>,
    },
    /// Location suggestions for a partial name
    Autocomplete {
        query: String,
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Contractors { state, city, id } => {
            show_contractors(state.as_deref(), city.as_deref(), id.as_deref(), cli.json)
        }
        Commands::Remote(command) => run_remote(command, cli.config, cli.public, cli.json).await,
    }
}

/// Runs a backend command, then reports any session events it raised.
async fn run_remote(
    command: RemoteCommand,
    config_path: Option<PathBuf>,
    public: bool,
    json: bool,
) -> Result<()> {
    let mut config = ClientConfig::load(config_path).context("loading client config")?;
    let (client, mut events) = build_client(&config, public)?;
    info!(base_url = %client.base_url(), public = client.is_public(), "Client ready");

    let outcome = execute(command, client, &mut config, json).await;
    if let Some(events) = events.as_mut() {
        report_session_events(events);
    }
    outcome
}

async fn execute(
    command: RemoteCommand,
    client: ApiClient,
    config: &mut ClientConfig,
    json: bool,
) -> Result<()> {
    match command {
        RemoteCommand::States { page, per_page } => {
            let listing = StatesListing::states(client, ListingOptions::from(&config.listing));
            listing.fetch(page, per_page).await;
            let snapshot = listing.snapshot();
            fail_on(snapshot.last_error.as_ref())?;

            print_items(&snapshot.items, json, |state| {
                format!(
                    "{:<24} {:<4} {:>5} companies",
                    state.name, state.code, state.companies_count
                )
            })?;
            if let Some(p) = &snapshot.pagination {
                println!("page {}/{} ({} total)", p.current_page, p.total_pages, p.total_items);
            }
        }
        RemoteCommand::Companies {
            state,
            city,
            page,
            per_page,
        } => {
            let listing = CompaniesListing::companies(
                client,
                state,
                city,
                ListingOptions::from(&config.listing),
            );
            listing.fetch(page, per_page).await;
            let snapshot = listing.snapshot();
            fail_on(snapshot.last_error.as_ref())?;

            print_items(&snapshot.items, json, |company| {
                format!(
                    "{:<36} {:<16} {:>4} ({} reviews)",
                    company.name,
                    company.phone,
                    company.average_rating,
                    company.total_reviews
                )
            })?;
            if !json && !snapshot.extra.is_empty() {
                let cities: Vec<_> = snapshot
                    .extra
                    .iter()
                    .map(|c| c.attributes.name.as_str())
                    .collect();
                println!("cities: {}", cities.join(", "));
            }
            if listing.has_next_page() {
                println!("more results: --page {}", snapshot.page + 1);
            }
        }
        RemoteCommand::SearchStates { query, country } => {
            let search = StatesSearch::states(client, &config.search, country);
            search.search(&query);
            search.settle().await;
            fail_on(search.last_error().as_ref())?;

            print_items(&search.results(), json, |state| {
                format!("{:<24} {}", state.name, state.slug)
            })?;
        }
        RemoteCommand::Autocomplete { query, limit } => {
            if let Some(limit) = limit {
                config.search.location_limit = limit;
            }
            let search = LocationAutocomplete::locations(client, &config.search);
            search.search(&query);
            search.settle().await;
            fail_on(search.last_error().as_ref())?;

            print_items(&search.results(), json, |location| location.address.clone())?;
            if let Some(meta) = search.meta() {
                debug!(query = %meta.query, count = meta.count, limit = meta.limit, "Autocomplete meta");
            }
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// Default level is `info`; override with `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sewer_client=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the client. Unless public, session events are queued on the
/// returned receiver.
fn build_client(
    config: &ClientConfig,
    public: bool,
) -> Result<(ApiClient, Option<UnboundedReceiver<SessionEvent>>)> {
    if public {
        return Ok((ApiClient::public(config)?, None));
    }

    let (handler, events) = ChannelHandler::new();
    let client = ApiClient::new(config)?.with_event_handler(Arc::new(handler));
    Ok((client, Some(events)))
}

fn report_session_events(events: &mut UnboundedReceiver<SessionEvent>) {
    while let Ok(event) = events.try_recv() {
        match event {
            SessionEvent::Expired { redirect_to } => {
                warn!(redirect_to = %redirect_to, "Session expired, sign in again");
            }
        }
    }
}

fn fail_on(error: Option<&SessionError>) -> Result<()> {
    match error {
        Some(err) => bail!("{err}"),
        None => Ok(()),
    }
}

fn print_items<A: Serialize>(
    items: &[ResourceEnvelope<A>],
    json: bool,
    line: impl Fn(&A) -> String,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("no results");
    }
    for item in items {
        println!("{}", line(&item.attributes));
    }
    Ok(())
}

fn show_contractors(
    state: Option<&str>,
    city: Option<&str>,
    id: Option<&str>,
    json: bool,
) -> Result<()> {
    if let Some(id) = id {
        let contractor = contractor_by_id(id).with_context(|| format!("no contractor {id}"))?;
        if json {
            println!("{}", serde_json::to_string_pretty(contractor)?);
        } else {
            print_contractor(contractor);
            if let Some(review) = contractor.latest_review() {
                println!("  latest review: {} ({}★) \"{}\"", review.author, review.rating, review.text);
            }
        }
        return Ok(());
    }

    let contractors = match (state, city) {
        (Some(state), Some(city)) => contractors_by_city(state, city),
        (Some(state), None) => {
            if !json {
                println!("cities: {}", cities_by_state(state).join(", "));
            }
            contractors_by_state(state)
        }
        (None, Some(_)) => bail!("--city requires --state"),
        (None, None) => {
            if !json {
                println!("states: {}", STATES.join(", "));
            }
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&contractors)?);
    } else if contractors.is_empty() {
        println!("no contractors");
    } else {
        for contractor in contractors {
            print_contractor(contractor);
        }
    }
    Ok(())
}

fn print_contractor(c: &Contractor) {
    println!(
        "{:<4} {:<36} {:<16} {:.1}★ {:<4} /{}/{}/{}",
        c.id,
        c.name,
        c.city,
        c.rating,
        c.price.to_string(),
        c.state_slug(),
        c.city_slug(),
        c.provider_slug()
    );
    debug!(title = %format_slug_to_title(Some(&c.provider_slug())), "Provider page title");
}

/// Waits for a search session to finish its debounce window and request.
trait Settle {
    async fn settle(&self);
}

impl<S: SearchSource> Settle for DebouncedSearch<S> {
    async fn settle(&self) {
        tokio::time::sleep(self.options().debounce).await;
        while self.has_pending_timer() || self.has_in_flight_request() {
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
    }
}
