//! # homesphere-domain
//!
//! Pure domain model for the homesphere home automation hub.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** and their closed set of variants (climate unit,
//!   luminaire, lock, scale) together with the capability traits each exposes
//! - Define the **Energy** capability (power draw, energy over an interval)
//! - Define the **Command registry** mapping abstract command names to typed
//!   device operations
//! - Define **Actions** and **Scenes** (ordered, manually triggered batches)
//! - Define **Rooms**, **Users**, **Manufacturers** and the **Household**
//!   that owns them
//! - Define **Events** describing scene execution
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or from IO crates.

pub mod error;
pub mod id;
pub mod time;

pub mod action;
pub mod command;
pub mod device;
pub mod energy;
pub mod event;
pub mod household;
pub mod manufacturer;
pub mod room;
pub mod running_log;
pub mod scene;
pub mod user;
