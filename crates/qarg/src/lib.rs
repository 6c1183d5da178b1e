//! Query Argument Renderer CLI
//!
//! Reads a render request (the caller's arguments plus one validation error)
//! as JSON and prints the annotated argument tree followed by the message.
//!
//! ```text
//! { "arguments": { "select": { "titel": true } },
//!   "error": { "kind": "UnknownSelectionField", "selectionPath": ["titel"], ... } }
//! ```

pub mod commands;
mod error;

use std::sync::Once;

pub use commands::{parse_render_options, render_request, run_render, RenderOptions, RenderRequest};
pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
