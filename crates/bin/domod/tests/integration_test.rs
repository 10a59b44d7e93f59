//! End-to-end smoke tests for the full domod stack.
//!
//! Each test wires the real storage adapter (in a throwaway temp
//! directory), the real activity feed, and the real services — only the
//! presentation layer is absent.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use domo_adapter_storage_json::JsonLayoutStore;
use domo_app::activity_feed::InProcessActivityFeed;
use domo_app::ports::UserDirectory;
use domo_app::services::layout_service::LayoutService;
use domo_app::services::simulation_service::SimulationService;
use domo_domain::device::{Device, Light};
use domo_domain::error::DomoError;
use domo_domain::geometry::Geometry;
use domo_domain::inhabitant::Inhabitant;
use domo_domain::parameters::{Season, SimulationParameters, SimulationStatus};
use domo_domain::room::Room;

struct FixedUser(&'static str);

impl UserDirectory for FixedUser {
    fn current_username(&self) -> impl Future<Output = Result<String, DomoError>> + Send {
        let name = self.0.to_string();
        async { Ok(name) }
    }
}

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("domod-test-{}", uuid::Uuid::new_v4()))
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[tokio::test]
async fn should_persist_edits_and_survive_a_reload() {
    let dir = temp_dir();
    let feed = Arc::new(InProcessActivityFeed::new(64));
    let layouts = LayoutService::new(JsonLayoutStore::new(&dir), Arc::clone(&feed));

    let original = layouts.create_layout("Home").await.unwrap();

    // Edit a working copy, the way the map editor does.
    let mut edited = original.clone();
    let mut kitchen = Room::builder()
        .name("Kitchen")
        .geometry(Geometry::new(0, 0, 10, 10))
        .build()
        .unwrap();
    let mut light = Light::new(Geometry::at(5, 5));
    light.auto_on = true;
    kitchen.add_device(Device::Light(light));
    kitchen.add_inhabitant(Inhabitant::new("Alex").unwrap());
    edited.add_room(kitchen).unwrap();
    edited.add_heating_zone("Ground Floor").unwrap();
    edited.move_room("Kitchen", "Ground Floor", false).unwrap();

    assert!(layouts.save_if_changed(&original, &edited).await.unwrap());

    // A second service over the same directory sees the committed state.
    let reopened = LayoutService::new(JsonLayoutStore::new(&dir), Arc::clone(&feed));
    let reloaded = reopened.get_layout(original.id()).await.unwrap();
    assert_eq!(reloaded, edited);
}

#[tokio::test]
async fn should_derive_device_state_without_touching_the_stored_layout() {
    let dir = temp_dir();
    let feed = Arc::new(InProcessActivityFeed::new(64));
    let layouts = LayoutService::new(JsonLayoutStore::new(&dir), Arc::clone(&feed));
    let simulation = SimulationService::new(Arc::clone(&feed), FixedUser("Alex"));

    let mut layout = layouts.create_layout("Home").await.unwrap();
    let mut bedroom = Room::builder()
        .name("Bedroom")
        .geometry(Geometry::new(0, 0, 8, 8))
        .build()
        .unwrap();
    let mut light = Light::new(Geometry::at(4, 4));
    light.auto_on = true;
    bedroom.add_device(Device::Light(light));
    layout.add_room(bedroom).unwrap();
    layouts.save_layout(&layout).await.unwrap();

    let parameters = SimulationParameters::builder()
        .status(SimulationStatus::Running)
        .date(NaiveDate::from_ymd_opt(2021, 12, 24).unwrap())
        .time(time(23, 0))
        .lights_window(time(18, 0), time(6, 0))
        .winter(335, 59)
        .build();

    let evaluation = simulation.run(&layout, &parameters).await;
    assert_eq!(evaluation.season, Season::Winter);
    assert!(evaluation.layout.room("Bedroom").unwrap().devices()[0].is_opened());

    // The stored layout still has the light off until the caller commits.
    let stored = layouts.get_layout(layout.id()).await.unwrap();
    assert!(!stored.room("Bedroom").unwrap().devices()[0].is_opened());

    layouts
        .save_if_changed(&layout, &evaluation.layout)
        .await
        .unwrap();
    let committed = layouts.get_layout(layout.id()).await.unwrap();
    assert!(committed.room("Bedroom").unwrap().devices()[0].is_opened());
}

#[tokio::test]
async fn should_publish_activity_entries_for_layout_lifecycle() {
    let dir = temp_dir();
    let feed = Arc::new(InProcessActivityFeed::new(64));
    let mut entries = feed.subscribe();
    let layouts = LayoutService::new(JsonLayoutStore::new(&dir), Arc::clone(&feed));

    let layout = layouts.create_layout("Home").await.unwrap();
    layouts.delete_layout(layout.id()).await.unwrap();

    let created = entries.recv().await.unwrap();
    assert!(created.message.contains("created"));
    let deleted = entries.recv().await.unwrap();
    assert!(deleted.message.contains("deleted"));
}

#[tokio::test]
async fn should_tag_current_user_in_roster_across_the_full_stack() {
    let dir = temp_dir();
    let feed = Arc::new(InProcessActivityFeed::new(64));
    let layouts = LayoutService::new(JsonLayoutStore::new(&dir), Arc::clone(&feed));
    let simulation = SimulationService::new(Arc::clone(&feed), FixedUser("Alex"));

    let mut layout = layouts.create_layout("Home").await.unwrap();
    layout
        .room_mut(Room::GARAGE)
        .unwrap()
        .add_inhabitant(Inhabitant::new("Alex").unwrap());
    layouts.save_layout(&layout).await.unwrap();

    let roster = simulation.roster(&layout).await.unwrap();
    assert_eq!(roster, ["Alex (you)"]);
}
