//! Keymap logic of the Preonic: layers, custom keycodes, encoder, dip switches
//! and the music-mode sequencer.
//!
//! The crate doesn't drive any hardware by itself. The host firmware feeds it
//! key events, encoder steps, dip switch changes and scan ticks through
//! [`keyboard::Keyboard`], and receives key reports, notes and indicator
//! changes through the traits in [`host`] and [`indicator`].

#![no_std]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub mod config;
pub mod event;
pub mod host;
pub mod indicator;
pub mod keyboard;
pub mod keymap;
pub mod layout;
pub mod layout_macro;
pub mod muse;
pub mod music;
pub mod sequencer;

pub use preonic_types as types;
