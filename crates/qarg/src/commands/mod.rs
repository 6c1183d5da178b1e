//! CLI command implementations.

mod render;

pub use render::{parse_render_options, render_request, run_render, RenderOptions, RenderRequest};
