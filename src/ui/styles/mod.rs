// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod container;
pub mod svg;

pub use button::{link as button_link, overlay as button_overlay};
