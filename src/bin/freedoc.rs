//! Command-line interface for freedoc
//! This binary classifies freeform document files into typed elements and
//! serializes the result.
//!
//! Usage:
//!   freedoc process `<path>` [--format `<format>`]  - Classify a document and print it
//!   freedoc list-formats                          - List all available formats

use clap::{Arg, Command};
use freedoc::freedoc::processor::{self, ProcessingSpec};

fn main() {
    let matches = Command::new("freedoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A classifier for freeform business documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("process")
                .about("Classify a document and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the document file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'elements-tag', 'elements-json', 'lines-json')")
                        .default_value("elements-tag"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("process", process_matches)) => {
            let path = process_matches.get_one::<String>("path").unwrap();
            let format = process_matches.get_one::<String>("format").unwrap();
            handle_process_command(path, format);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the process command
fn handle_process_command(path: &str, format: &str) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = processor::process_file(path, &spec).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in processor::available_formats() {
        println!("  {}", format);
    }
}
