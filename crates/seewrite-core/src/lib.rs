//! Shared primitives for the `SeeWrite` accessibility pipeline

#![allow(clippy::must_use_candidate)]

mod image;
mod text;

pub use image::{ImagePayload, InvalidImage};
pub use text::{ELLIPSIS, truncate_with_ellipsis};
