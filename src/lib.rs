#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod input;
pub mod manifest;
pub mod panels;
pub mod precache;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;
pub mod web_assets;

pub use app::WhiteboardApp;
pub use color::HexColor;
pub use config::WhiteboardConfig;
pub use controller::CanvasController;
pub use error::{WhiteboardError, WhiteboardResult};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use renderer::CanvasRenderer;
pub use state::GestureState;
pub use surface::{DrawingSurface, RasterCanvas, RecordingSurface};
pub use tools::Tool;
