//! # domod — domo daemon
//!
//! Composition root that wires the adapters together and runs one
//! simulation pass over the stored house layout.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Construct the storage adapter and in-process activity feed
//! - Construct application services, injecting adapters via port traits
//! - Seed a demo layout on first run
//! - Evaluate the simulation parameters and commit the derived state
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::future::Future;
use std::sync::Arc;

use domo_adapter_storage_json::JsonLayoutStore;
use domo_app::activity_feed::InProcessActivityFeed;
use domo_app::ports::UserDirectory;
use domo_app::services::layout_service::LayoutService;
use domo_app::services::simulation_service::SimulationService;
use domo_domain::device::{Device, Light};
use domo_domain::error::DomoError;
use domo_domain::geometry::Geometry;
use domo_domain::inhabitant::Inhabitant;
use domo_domain::layout::HouseLayout;
use domo_domain::log::LogImportance;
use domo_domain::parameters::{SimulationParameters, SimulationStatus};
use domo_domain::room::Room;

use crate::config::Config;

/// Resolves the current user from the `USER` environment variable.
struct EnvUserDirectory;

impl UserDirectory for EnvUserDirectory {
    fn current_username(&self) -> impl Future<Output = Result<String, DomoError>> + Send {
        let name = std::env::var("USER").unwrap_or_else(|_| "resident".to_string());
        async { Ok(name) }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Activity feed: services append, we forward entries to tracing.
    let feed = Arc::new(InProcessActivityFeed::new(256));
    let mut entries = feed.subscribe();
    let forwarder = tokio::spawn(async move {
        while let Ok(entry) = entries.recv().await {
            match entry.importance {
                LogImportance::Important => {
                    tracing::info!(component = %entry.component, "{}", entry.message);
                }
                LogImportance::Minor => {
                    tracing::debug!(component = %entry.component, "{}", entry.message);
                }
            }
        }
    });

    let store = JsonLayoutStore::new(&config.storage.path);
    let layouts = LayoutService::new(store, Arc::clone(&feed));
    let simulation = SimulationService::new(Arc::clone(&feed), EnvUserDirectory);

    // Load the stored house, seeding a demo layout on first run.
    let layout = match layouts.list_layouts().await?.into_iter().next() {
        Some(layout) => layout,
        None => {
            tracing::info!("no stored layout found, seeding a demo house");
            let layout = demo_layout()?;
            layouts.save_layout(&layout).await?;
            layout
        }
    };

    let (min_lights, max_lights) = config.lights_window()?;
    let now = chrono::Utc::now();
    let parameters = SimulationParameters::builder()
        .status(SimulationStatus::Running)
        .away_mode(config.simulation.away_mode)
        .temperature(config.simulation.temperature)
        .date(now.date_naive())
        .time(now.time())
        .lights_window(min_lights, max_lights)
        .build();

    let evaluation = simulation.run(&layout, &parameters).await;
    for label in simulation.roster(&evaluation.layout).await? {
        tracing::info!(occupant = %label, "present in the house");
    }
    for room in evaluation.layout.rooms() {
        tracing::info!(
            room = %room.name(),
            temperature = room.desired_temperature(),
            devices_on = room.devices().iter().filter(|d| d.is_opened()).count(),
            "derived room state"
        );
    }

    layouts.save_if_changed(&layout, &evaluation.layout).await?;

    // Drop the last feed handles so the forwarder can drain and exit.
    drop(layouts);
    drop(simulation);
    drop(feed);
    let _ = forwarder.await;

    Ok(())
}

/// Build the demo house used on first run: two living rooms grouped in a
/// heating zone, an automatic light, and one resident.
fn demo_layout() -> Result<HouseLayout, DomoError> {
    let mut layout = HouseLayout::new("Demo House")?;

    let mut kitchen = Room::builder()
        .name("Kitchen")
        .geometry(Geometry::new(0, 0, 12, 8))
        .build()?;
    let mut ceiling_light = Light::new(Geometry::at(6, 4));
    ceiling_light.auto_on = true;
    kitchen.add_device(Device::Light(ceiling_light));
    kitchen.add_inhabitant(Inhabitant::new(
        std::env::var("USER").unwrap_or_else(|_| "resident".to_string()),
    )?);
    layout.add_room(kitchen)?;

    let living_room = Room::builder()
        .name("Living Room")
        .geometry(Geometry::new(12, 0, 14, 10))
        .build()?;
    layout.add_room(living_room)?;

    layout.add_heating_zone("Ground Floor")?;
    layout.move_room("Kitchen", "Ground Floor", false)?;
    layout.move_room("Living Room", "Ground Floor", false)?;
    layout
        .heating_zone_mut("Ground Floor")
        .ok_or_else(|| domo_domain::error::NotFoundError {
            kind: "heating zone",
            name: "Ground Floor".to_string(),
        })?
        .set_desired_temperature(21.0);

    Ok(layout)
}
