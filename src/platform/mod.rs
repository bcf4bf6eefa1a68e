//! Platform abstraction layer
//!
//! Browser-only pieces: the 2D canvas draw surface. The native build draws
//! into [`crate::renderer::MeshSurface`] instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
