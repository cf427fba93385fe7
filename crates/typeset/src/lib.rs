#![warn(missing_docs)]
//! # Text rasterization
//!
//! This crate renders word-wrapped text onto a raster canvas. It measures
//! the loaded font to decide where lines break, grows the canvas to fit
//! the wrapped text and draws each line in black onto a white background.
//!
//! The whole pipeline is a pure function of a [RenderRequest], see
//! [render] and [render_to_file].

pub mod canvas;
pub mod error;
pub mod font;
pub mod layout;
pub mod render;

pub use canvas::Canvas;
pub use error::RenderError;
pub use font::TypeFace;
pub use render::{render, render_to_file, RenderRequest};
