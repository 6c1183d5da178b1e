//! Arguments rendering tree.
//!
//! Owns the argument tree for one render and the messages collected while
//! validation errors are applied to it.

use std::fmt;

use qarg_ir::{build_arguments_tree, JsonArguments, ObjectValue};

use crate::emphasis::Emphasis;
use crate::writer::{ErrorWriter, WriteTo};

/// Builds one message from the emphasis it is rendered with.
pub type MessageBuilder = Box<dyn Fn(&dyn Emphasis) -> String>;

/// Separator placed between rendered messages.
pub const MESSAGE_SEPARATOR: &str = "\n\n";

/// The argument tree of one render plus its pending messages.
pub struct ArgumentsRenderingTree {
    arguments: ObjectValue,
    messages: Vec<MessageBuilder>,
}

impl ArgumentsRenderingTree {
    pub fn new(arguments: ObjectValue) -> Self {
        ArgumentsRenderingTree {
            arguments,
            messages: Vec::new(),
        }
    }

    /// Build the tree from a caller's JSON arguments object.
    pub fn from_json(args: &JsonArguments) -> Self {
        Self::new(build_arguments_tree(args))
    }

    pub fn arguments(&self) -> &ObjectValue {
        &self.arguments
    }

    pub fn arguments_mut(&mut self) -> &mut ObjectValue {
        &mut self.arguments
    }

    pub fn add_error_message(&mut self, builder: impl Fn(&dyn Emphasis) -> String + 'static) {
        self.messages.push(Box::new(builder));
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Render every collected message, separated by a blank line.
    pub fn render_all_messages(&self, emphasis: &dyn Emphasis) -> String {
        self.messages
            .iter()
            .map(|builder| builder(emphasis))
            .collect::<Vec<_>>()
            .join(MESSAGE_SEPARATOR)
    }
}

impl WriteTo for ArgumentsRenderingTree {
    fn write_to(&self, writer: &mut ErrorWriter<'_>) {
        self.arguments.write_to(writer);
    }
}

impl fmt::Debug for ArgumentsRenderingTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentsRenderingTree")
            .field("arguments", &self.arguments)
            .field("messages", &self.messages.len())
            .finish()
    }
}
