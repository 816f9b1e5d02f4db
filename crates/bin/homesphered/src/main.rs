//! # homesphered — homesphere daemon
//!
//! Composition root that wires the household, the event bus and the scene
//! engine together.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the tracing subscriber
//! - Seed the demo household when enabled
//! - Trigger the configured scene and log its outcomes
//! - Log an energy report over the configured window
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod demo;

use chrono::TimeDelta;
use homesphere_app::event_bus::InProcessEventBus;
use homesphere_app::services::system::HomeSphereSystem;
use homesphere_domain::id::{HouseholdId, SceneId};
use homesphere_domain::time::{Timestamp, now};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let env_filter =
        EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if !config.demo.enabled {
        tracing::info!("demo disabled, nothing to run");
        return Ok(());
    }

    // Household
    let scene_id = SceneId::new(config.demo.scene_id);
    let household = demo::seed(
        HouseholdId::new(config.household.id),
        &config.household.address,
        scene_id,
    )?;
    tracing::info!(
        household_id = %household.id,
        address = %household.address,
        rooms = household.rooms().len(),
        devices = household.list_all_devices().len(),
        "household ready"
    );

    // Event bus
    let event_bus = InProcessEventBus::default();
    let mut events = event_bus.subscribe();

    // System
    let mut system = HomeSphereSystem::new(household, event_bus);
    system.login("admin", "111111")?;

    let report = system.trigger_scene(scene_id)?;
    for outcome in &report.outcomes {
        tracing::info!(scene = %report.scene_name, "{outcome}");
    }
    tracing::info!(
        succeeded = report.succeeded(),
        total = report.outcomes.len(),
        "scene finished"
    );
    while let Ok(event) = events.try_recv() {
        tracing::debug!(
            event_type = %event.event_type,
            data = %event.data,
            "event published"
        );
    }

    let end = now();
    let start = report_start(end, config.demo.report_hours)?;
    for reading in system.energy_report(start, end) {
        tracing::info!(hours = config.demo.report_hours, "{reading}");
    }

    system.logoff();
    Ok(())
}

/// Start of a report window of `hours` ending at `end`.
#[allow(clippy::cast_possible_truncation)]
fn report_start(end: Timestamp, hours: f64) -> Result<Timestamp, Box<dyn std::error::Error>> {
    let millis = (hours * 3_600_000.0).round() as i64;
    TimeDelta::try_milliseconds(millis)
        .and_then(|window| end.checked_sub_signed(window))
        .ok_or_else(|| "report window out of range".into())
}
