//! The `render` command.

use std::io::Read;
use std::path::PathBuf;

use qarg_diagnostic::{
    render_validation_error, ColorMode, RenderConfig, RenderedError, TerminalEmphasis,
};
use qarg_ir::{build_arguments_tree, JsonArguments, ValidationError};
use serde::Deserialize;

use crate::CliError;

/// Path argument that reads the request from stdin.
const STDIN_PATH: &str = "-";

/// A validation error together with the arguments it was reported for.
#[derive(Clone, Debug, Deserialize)]
pub struct RenderRequest {
    pub arguments: JsonArguments,
    /// Decoded separately so unsupported kinds get their own error.
    pub error: serde_json::Value,
}

/// Options for the `render` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub color_mode: ColorMode,
    pub config: RenderConfig,
}

/// Parse `render` flags. The first non-flag argument is returned as the input path.
pub fn parse_render_options(args: &[String]) -> Result<(Option<String>, RenderOptions), CliError> {
    let mut options = RenderOptions::default();
    let mut path = None;

    for arg in args {
        if let Some(mode) = arg.strip_prefix("--color=") {
            options.color_mode = ColorMode::from_flag(mode).ok_or_else(|| {
                CliError::Usage(format!(
                    "unknown color mode '{mode}', options: auto, always, never"
                ))
            })?;
        } else if let Some(width) = arg.strip_prefix("--indent=") {
            // The suggestion margin takes the first indentation column.
            let width = width
                .parse()
                .ok()
                .filter(|&width: &usize| width > 0)
                .ok_or_else(|| {
                    CliError::Usage(format!(
                        "invalid indent width '{width}', expected a positive number"
                    ))
                })?;
            options.config = RenderConfig::with_indent_width(width);
        } else if arg == STDIN_PATH || !arg.starts_with('-') {
            if path.is_some() {
                return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
            }
            path = Some(arg.clone());
        } else {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        }
    }

    Ok((path, options))
}

/// Render a request given as JSON text.
pub fn render_request(
    source: &str,
    options: RenderOptions,
    is_tty: bool,
) -> Result<RenderedError, CliError> {
    let request: RenderRequest = serde_json::from_str(source)?;
    let error = ValidationError::from_json(request.error)?;
    tracing::debug!(kind = error.kind(), "rendering validation error");

    let emphasis = TerminalEmphasis::with_color_mode(options.color_mode, is_tty);
    let rendered = render_validation_error(
        build_arguments_tree(&request.arguments),
        &error,
        &emphasis,
        options.config,
    )?;
    Ok(rendered)
}

/// Read the request at `path` (`-` for stdin) and render it.
pub fn run_render(path: &str, options: RenderOptions, is_tty: bool) -> Result<String, CliError> {
    let source = read_source(path)?;
    let rendered = render_request(&source, options, is_tty)?;
    Ok(rendered.to_string())
}

fn read_source(path: &str) -> Result<String, CliError> {
    let io_error = |source: std::io::Error| CliError::Io {
        path: PathBuf::from(path),
        source,
    };

    if path == STDIN_PATH {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(io_error)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path).map_err(io_error)
    }
}
