// SPDX-License-Identifier: MPL-2.0
//! Image handling for the page: embedded assets, decoding and the loaded
//! image store.

pub mod assets;
pub mod image;
pub mod store;

pub use image::ImageData;
pub use store::{ImageStore, Lookup};
