//! Pure gameplay logic for Deepwake.
//!
//! This crate contains the survival and traversal logic of the player
//! character, independent of any engine, renderer, or audio runtime.
//! Transitions take plain data and queue plain-data notifications, making
//! everything unit-testable and portable.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`camera`] | First-/third-person camera rig parameter sets |
//! | [`config`] | Serializable survival tuning with validation |
//! | [`constants`] | Oxygen, camera, movement, and death tuning constants |
//! | [`events`] | Fire-and-forget notifications for the presentation layer |
//! | [`health`] | Minimal health component shared by player and AI |
//! | [`input`] | Action/axis binding table routed through movement guards |
//! | [`movement`] | Traversal input guards and direction math |
//! | [`objective`] | Objective triggers updating the player's quest label |
//! | [`survival`] | Player survival state machine — POV, oxygen loop, death |
//! | [`timers`] | Deterministic purpose-keyed timer bank |

pub mod camera;
pub mod config;
pub mod constants;
pub mod events;
pub mod health;
pub mod input;
pub mod movement;
pub mod objective;
pub mod survival;
pub mod timers;
