#![cfg_attr(not(test), no_std)]

//! Platform-independent core of the wrist display firmware: device state,
//! screen selection, sleep policy, and companion-event orchestration.

pub mod app;
pub mod companion;
pub mod render;
pub mod screen;
pub mod sleep;
pub mod state;
pub mod text_policy;
