//! Query Argument Renderer CLI

use std::io::IsTerminal;

use qarg::{init_tracing, parse_render_options, run_render};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "render" => {
            let (path, options) = match parse_render_options(&args[2..]) {
                Ok(parsed) => parsed,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!("Usage: qarg render <request.json|-> [options]");
                    std::process::exit(1);
                }
            };

            let Some(path) = path else {
                eprintln!("error: missing request path");
                eprintln!("Usage: qarg render <request.json|-> [options]");
                std::process::exit(1);
            };

            match run_render(&path, options, std::io::stdout().is_terminal()) {
                Ok(output) => println!("{output}"),
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("qarg {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Query argument validation error renderer");
    println!();
    println!("Usage: qarg <command> [options]");
    println!();
    println!("Commands:");
    println!("  render <request.json|->  Render a validation error against its arguments");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Render options:");
    println!("  --color=<mode>      Color output: auto, always, never (default: auto)");
    println!("  --indent=<n>        Spaces per indentation level (default: 2)");
    println!();
    println!("The request is a JSON object with `arguments` and `error` keys.");
    println!("Set RUST_LOG=debug to trace how the error was applied.");
}
