//! CLI command handlers. Each command is in its own file.

mod completions;
mod endpoint;
mod render;
mod render_file;
mod stylesheet;
mod validate;

pub use completions::run_completions;
pub use endpoint::run_endpoint;
pub use render::{run_render, RenderArgs};
pub use render_file::run_render_file;
pub use stylesheet::run_stylesheet;
pub use validate::run_validate;
