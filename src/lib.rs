//! Draws names from a fixed roster without repetition, revealing each pick
//! after a short loading, fade-in and blink animation.
//!
//! The logical core is [`selection::SelectionState`] and
//! [`animation::AnimationSequencer`]; both are driven by discrete events and
//! know nothing about terminals or clocks. [`app::App`] wires them to the
//! ratatui host in `ui` and `input`.

pub mod animation;
pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod labels;
pub mod logging;
pub mod models;
pub mod roster;
pub mod selection;
pub mod theme;
pub mod ui;
