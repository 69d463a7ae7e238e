// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept apart from the widgets that render it, so it can
//! be driven in tests without a window.

pub mod drag;

pub use drag::{DragPhase, DragState};
