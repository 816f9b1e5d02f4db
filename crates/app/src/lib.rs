//! # homesphere-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Resolve and apply single actions ([`dispatcher::ActionDispatcher`])
//! - Execute scenes best-effort, in order, with per-action outcomes
//!   ([`scene_engine::SceneEngine`])
//! - Define the `EventPublisher` port and an in-process broadcast bus
//! - Household use-cases: sessions, registration, energy reporting and
//!   triggering scenes by id ([`services::system::HomeSphereSystem`])
//!
//! ## Concurrency
//! Everything here is synchronous. Devices are shared behind a mutex, so a
//! host that triggers scenes from several threads gets per-device mutual
//! exclusion for each action, but no ordering between scenes.
//!
//! ## Dependency rule
//! Depends on `homesphere-domain` only (plus `tokio::sync` for the bus).

pub mod dispatcher;
pub mod event_bus;
pub mod ports;
pub mod reporting;
pub mod scene_engine;
pub mod services;
