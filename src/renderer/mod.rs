//! Rendering module
//!
//! The scene is drawn through the `DrawSurface` trait: a Canvas 2D context
//! in the browser, a `CommandRecorder` headless.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod recorder;
pub mod scene;
pub mod shapes;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2d;
pub use recorder::{CommandRecorder, DrawCommand};
pub use scene::draw_scene;
pub use surface::DrawSurface;
