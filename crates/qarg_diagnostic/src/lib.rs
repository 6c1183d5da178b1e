//! Query Argument Diagnostics
//!
//! Renders a validation error against the arguments it was reported for.
//! The output has two parts:
//!
//! - the argument tree, pretty-printed, with offending fields underlined and
//!   valid alternatives inserted as `?`-marked suggestion lines
//! - a human-readable message describing the problem
//!
//! # Flow
//!
//! ```text
//! JSON arguments -> ArgumentsRenderingTree -> apply_validation_error -> ErrorWriter
//! ```
//!
//! A fresh tree is built for every render. Applying an error mutates the tree
//! in place and queues a message; the writer then prints the annotated tree
//! and the tree renders its queued messages.
//!
//! # Modules
//!
//! - [`emphasis`]: Styling capability (plain or ANSI)
//! - [`writer`]: Pretty-printer with underline and margin annotations
//! - [`tree`]: Argument tree plus collected messages
//! - [`apply`]: Per-kind validation error handlers

pub mod apply;
pub mod emphasis;
mod error;
pub mod tree;
pub mod writer;

use std::fmt;

use qarg_ir::{ObjectValue, ValidationError};

pub use apply::apply_validation_error;
pub use emphasis::{ColorMode, Emphasis, PlainEmphasis, TerminalEmphasis};
pub use error::ApplyError;
pub use tree::{ArgumentsRenderingTree, MessageBuilder};
pub use writer::{write_to_string, ErrorWriter, RenderConfig, WriteTo, INDENT_WIDTH};

/// The two halves of a rendered validation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedError {
    /// The annotated argument tree.
    pub arguments: String,
    /// Every message, separated by blank lines.
    pub message: String,
}

impl fmt::Display for RenderedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.arguments, self.message)
    }
}

/// Render a tree and its collected messages.
pub fn render_tree(
    tree: &ArgumentsRenderingTree,
    emphasis: &dyn Emphasis,
    config: RenderConfig,
) -> RenderedError {
    RenderedError {
        arguments: write_to_string(tree, emphasis, config),
        message: tree.render_all_messages(emphasis),
    }
}

/// Apply `error` to `arguments` and render the result.
pub fn render_validation_error(
    arguments: ObjectValue,
    error: &ValidationError,
    emphasis: &dyn Emphasis,
    config: RenderConfig,
) -> Result<RenderedError, ApplyError> {
    let mut tree = ArgumentsRenderingTree::new(arguments);
    apply_validation_error(error, &mut tree)?;
    Ok(render_tree(&tree, emphasis, config))
}
