//! Burger Shift
//!
//! A restaurant shift game built on a small retained scene engine. The game
//! runs headless from the console or inside a Bevy window.

pub mod scene;
pub mod screens;
pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
