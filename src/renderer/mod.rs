//! Rendering module
//!
//! Composes the diagram from engine state; drawing primitives come from the
//! platform's `RenderSurface`.

pub mod scene;

pub use scene::draw;
