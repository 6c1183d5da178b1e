//! Error Writer
//!
//! Line-oriented pretty-printer for argument trees. Text is accumulated into
//! the current line, indented lazily on first write; finishing a line flushes
//! two kinds of annotation attached to it:
//!
//! - a margin symbol replacing the first indentation column (suggestions)
//! - underline lines emitted right after it (error-marked fields)
//!
//! Because underlines wait for the line to finish, a separator written after a
//! field (`,`) stays on the field's line and the underline lands below both.

use qarg_ir::{
    ArrayValue, ObjectEntry, ObjectField, ObjectFieldSuggestion, ObjectValue, Scalar, Value,
};

use crate::emphasis::Emphasis;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 2;

/// Character repeated under an error-marked field name.
pub const UNDERLINE_CHAR: char = '~';

/// Margin marker for suggestion lines.
pub const SUGGESTION_MARGIN: &str = "?";

/// Configuration for rendering argument trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Indentation size in spaces.
    /// Defaults to 2 spaces.
    pub indent_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: INDENT_WIDTH,
        }
    }
}

impl RenderConfig {
    /// Create a new config with the specified indent width.
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self { indent_width }
    }
}

/// Something the writer can print.
pub trait WriteTo {
    fn write_to(&self, writer: &mut ErrorWriter<'_>);
}

impl<T: WriteTo + ?Sized> WriteTo for &T {
    fn write_to(&self, writer: &mut ErrorWriter<'_>) {
        (**self).write_to(writer);
    }
}

#[derive(Clone, Copy, Debug)]
struct Underline {
    column: usize,
    width: usize,
}

/// Indentation-tracking text builder with annotation support.
pub struct ErrorWriter<'e> {
    emphasis: &'e dyn Emphasis,
    config: RenderConfig,
    indent_level: usize,
    lines: Vec<String>,
    current_line: String,
    margin_symbol: Option<String>,
    pending_underlines: Vec<Underline>,
}

impl<'e> ErrorWriter<'e> {
    /// Create a writer with the default config.
    pub fn new(emphasis: &'e dyn Emphasis) -> Self {
        Self::with_config(emphasis, RenderConfig::default())
    }

    pub fn with_config(emphasis: &'e dyn Emphasis, config: RenderConfig) -> Self {
        ErrorWriter {
            emphasis,
            config,
            indent_level: 0,
            lines: Vec::new(),
            current_line: String::new(),
            margin_symbol: None,
            pending_underlines: Vec::new(),
        }
    }

    /// The emphasis used for annotations and suggestions.
    pub fn emphasis(&self) -> &'e dyn Emphasis {
        self.emphasis
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Column at which text of the current indentation level starts.
    pub fn indentation(&self) -> usize {
        self.indent_level * self.config.indent_width
    }

    /// Append text to the current line.
    pub fn write(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        if self.current_line.is_empty() {
            let indentation = self.indentation();
            self.current_line.push_str(&" ".repeat(indentation));
        }
        self.current_line.push_str(text);
        self
    }

    /// Append text, then finish the line.
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        self.write(text).new_line()
    }

    /// Finish the current line and flush its annotations.
    pub fn new_line(&mut self) -> &mut Self {
        let mut line = std::mem::take(&mut self.current_line);
        if let Some(symbol) = self.margin_symbol.take() {
            line = with_margin(&line, &symbol);
        }
        self.lines.push(line);

        for underline in std::mem::take(&mut self.pending_underlines) {
            let marker = self
                .emphasis
                .negative(&UNDERLINE_CHAR.to_string().repeat(underline.width));
            self.lines.push(format!("{}{marker}", " ".repeat(underline.column)));
        }
        self
    }

    /// Run `body` one indentation level deeper.
    pub fn with_indent(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.indent_level += 1;
        body(self);
        self.indent_level -= 1;
        self
    }

    /// Write `items`, finishing each but the last with `separator` and a newline.
    pub fn write_joined<T: WriteTo>(
        &mut self,
        separator: &str,
        items: impl IntoIterator<Item = T>,
    ) -> &mut Self {
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.write_line(separator);
            }
            item.write_to(self);
        }
        self
    }

    /// Mark the current line with a symbol in its first column.
    pub fn add_margin_symbol(&mut self, symbol: impl Into<String>) -> &mut Self {
        self.margin_symbol = Some(symbol.into());
        self
    }

    /// Underline `width` columns starting at `column`, on the line after the
    /// current one.
    pub fn underline_after_newline(&mut self, column: usize, width: usize) -> &mut Self {
        self.pending_underlines.push(Underline { column, width });
        self
    }

    /// Finish any open line and return the text, without a trailing newline.
    pub fn into_string(mut self) -> String {
        if !self.current_line.is_empty() || !self.pending_underlines.is_empty() {
            self.new_line();
        }
        self.lines.join("\n")
    }
}

fn with_margin(line: &str, symbol: &str) -> String {
    match line.strip_prefix(' ') {
        Some(rest) => format!("{symbol}{rest}"),
        None => format!("{symbol} {line}"),
    }
}

/// Render any printable node to a string.
pub fn write_to_string(
    node: &impl WriteTo,
    emphasis: &dyn Emphasis,
    config: RenderConfig,
) -> String {
    let mut writer = ErrorWriter::with_config(emphasis, config);
    node.write_to(&mut writer);
    writer.into_string()
}

impl WriteTo for Value {
    fn write_to(&self, writer: &mut ErrorWriter<'_>) {
        match self {
            Value::Scalar(scalar) => scalar.write_to(writer),
            Value::Object(object) => object.write_to(writer),
            Value::Array(array) => array.write_to(writer),
        }
    }
}

impl WriteTo for Scalar {
    fn write_to(&self, writer: &mut ErrorWriter<'_>) {
        writer.write(self.as_str());
    }
}

impl WriteTo for ObjectValue {
    fn write_to(&self, writer: &mut ErrorWriter<'_>) {
        // Only real fields count; suggestions alone do not open a block.
        if self.is_empty() {
            writer.write("{}");
            return;
        }

        writer.write_line("{").with_indent(|writer| {
            writer.write_joined(",", self.entries()).new_line();
        });
        writer.write("}");
    }
}

impl WriteTo for ArrayValue {
    fn write_to(&self, writer: &mut ErrorWriter<'_>) {
        if self.is_empty() {
            writer.write("[]");
            return;
        }

        writer.write_line("[").with_indent(|writer| {
            writer.write_joined(",", self.items()).new_line();
        });
        writer.write("]");
    }
}

impl WriteTo for ObjectEntry<'_> {
    fn write_to(&self, writer: &mut ErrorWriter<'_>) {
        match self {
            ObjectEntry::Field(field) => field.write_to(writer),
            ObjectEntry::Suggestion(suggestion) => suggestion.write_to(writer),
        }
    }
}

impl WriteTo for ObjectField {
    fn write_to(&self, writer: &mut ErrorWriter<'_>) {
        if self.is_error() {
            let column = writer.indentation();
            writer.underline_after_newline(column, self.name().chars().count());
        }
        writer.write(self.name()).write(": ");
        self.value().write_to(writer);
    }
}

impl WriteTo for ObjectFieldSuggestion {
    fn write_to(&self, writer: &mut ErrorWriter<'_>) {
        let emphasis = writer.emphasis();
        let text = format!("{}: {}", self.field_name(), self.suggested_value());
        writer
            .add_margin_symbol(emphasis.positive(SUGGESTION_MARGIN))
            .write(&emphasis.positive(&text));
    }
}
