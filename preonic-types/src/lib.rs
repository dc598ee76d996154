//! # Preonic Types
//!
//! Fundamental type definitions shared by the Preonic keymap.
//!
//! ## Modules
//!
//! - [`action`] - Actions stored in the layout (key presses, tap/hold, custom keycodes)
//! - [`keycode`] - HID, consumer and system control keycodes, plus the keymap's custom keycodes
//! - [`layer`] - The closed set of layers, ordered by priority
//! - [`modifier`] - Modifier key combinations

#![no_std]

pub mod action;
pub mod keycode;
pub mod layer;
pub mod modifier;
