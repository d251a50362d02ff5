//! Event Dashboard
//!
//! Main application entry point. Prints the dashboard report, or the
//! registrations of one event when its id is given as the first argument.

use anyhow::Context;
use tracing::{info, error};

use event_dashboard::{
    config::Settings,
    dashboard::{self, render},
    sources,
    store::DataStore,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", event_dashboard::info());

    let source = sources::from_config(&settings.sources)?;
    let store = DataStore::new(source);

    let event_id = std::env::args().nth(1);
    let report = match event_id {
        Some(event_id) => event_report(&store, &event_id).await,
        None => dashboard_report(&store, &settings).await,
    };

    match report {
        Ok(text) => {
            print!("{}", text);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Failed to build dashboard report");
            Err(e)
        }
    }
}

async fn dashboard_report(store: &DataStore, settings: &Settings) -> anyhow::Result<String> {
    // Both queries share a single load
    let (events, stats) = tokio::try_join!(store.get_events(), store.get_stats())
        .context("Failed to load data. Please make sure the JSON files are available.")?;

    let config = &settings.dashboard;
    let selected = dashboard::select_events(events, config.filter, config.sort_by);
    let mut out = render::render_dashboard(&stats, &selected);

    if config.show_registrations {
        for event in selected.iter().filter(|event| event.has_registrations()) {
            let registrations = store.get_event_registrations(&event.id).await?;
            out.push_str(&format!("-- {} --\n", event.title));
            out.push_str(&render::render_registrations(&registrations));
            out.push('\n');
        }
    }

    Ok(out)
}

async fn event_report(store: &DataStore, event_id: &str) -> anyhow::Result<String> {
    let event = store
        .get_event(event_id)
        .await
        .context("Failed to load registrations")?
        .with_context(|| format!("no event with id {}", event_id))?;

    let registrations = store.get_event_registrations(event_id).await?;
    let mut out = render::render_event(event);
    out.push('\n');
    out.push_str(&render::render_registrations(&registrations));
    Ok(out)
}
