mod swatch;
mod tool_button;

pub use swatch::Swatch;
pub use tool_button::ToolButton;
