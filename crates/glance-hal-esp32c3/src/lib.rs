#![no_std]

//! ESP32-C3 board layer: display adapter, frame renderer, wake button
//! interrupt plumbing, and the companion UART link.

pub mod input;
pub mod link;
pub mod platform;
pub mod render;
