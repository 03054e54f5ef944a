//! Data-management resource CLI
//!
//! Command-line interface for decoding, re-encoding and validating
//! polymorphic resource collections.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dm_resources::{
    decode, encode, load_document, select, validate_wire, wire_schema, Context, Resource,
    ValidateError,
};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "dm-resources")]
#[command(about = "Decode, re-encode and validate polymorphic data-management resources")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a collection and list its resources
    Decode {
        /// JSON document to read
        input: PathBuf,

        /// Polymorphic context (e.g. folder-contents, refs, relationship-refs-links)
        #[arg(long, short)]
        context: Context,

        /// JSON Pointer to the collection inside the document (e.g. /data)
        #[arg(long, default_value = "")]
        pointer: String,

        /// Output the listing as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// Decode a collection and write its canonical encoding
    Encode {
        /// JSON document to read
        input: PathBuf,

        /// Polymorphic context (e.g. folder-contents, refs, relationship-refs-links)
        #[arg(long, short)]
        context: Context,

        /// JSON Pointer to the collection inside the document (e.g. /data)
        #[arg(long, default_value = "")]
        pointer: String,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check a collection against its wire shape, reporting every violation
    Validate {
        /// JSON document to read
        input: PathBuf,

        /// Polymorphic context (e.g. folder-contents, refs, relationship-refs-links)
        #[arg(long, short)]
        context: Context,

        /// JSON Pointer to the collection inside the document (e.g. /data)
        #[arg(long, default_value = "")]
        pointer: String,

        /// Output results as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// Print the JSON Schema describing a context's wire shape
    Schema {
        /// Polymorphic context (e.g. folder-contents, refs, relationship-refs-links)
        #[arg(long, short)]
        context: Context,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            input,
            context,
            pointer,
            json,
        } => run_decode(&input, context, &pointer, json),

        Commands::Encode {
            input,
            context,
            pointer,
            output,
            pretty,
        } => run_encode(&input, context, &pointer, output, pretty),

        Commands::Validate {
            input,
            context,
            pointer,
            json,
        } => run_validate(&input, context, &pointer, json),

        Commands::Schema { context, pretty } => {
            print_json(&wire_schema(context), pretty, None)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

/// Load `input` and select the collection at `pointer`.
fn load_collection(input: &Path, pointer: &str, json_output: bool) -> Result<Value, u8> {
    let document = load_document(input).map_err(|e| {
        report_error(json_output, &e.to_string());
        e.exit_code() as u8
    })?;

    match select(&document, pointer) {
        Some(collection) => Ok(collection.clone()),
        None => {
            report_error(
                json_output,
                &format!("pointer {} not found in {}", pointer, input.display()),
            );
            Err(2)
        }
    }
}

fn decode_collection(
    value: &Value,
    context: Context,
    json_output: bool,
) -> Result<Vec<Resource>, u8> {
    decode(value, context).map_err(|e| {
        report_error(json_output, &e.to_string());
        e.exit_code() as u8
    })
}

fn run_decode(input: &Path, context: Context, pointer: &str, json_output: bool) -> Result<(), u8> {
    let collection = load_collection(input, pointer, json_output)?;
    let resources = decode_collection(&collection, context, json_output)?;

    if json_output {
        let listing: Vec<Value> = resources
            .iter()
            .enumerate()
            .map(|(index, resource)| {
                json!({
                    "index": index,
                    "kind": resource.kind(),
                    "id": resource.id(),
                    "name": resource.display_name(),
                    "href": resource.href(),
                })
            })
            .collect();
        println!("{}", json!({ "context": context, "resources": listing }));
    } else {
        for (index, resource) in resources.iter().enumerate() {
            let label = resource.id().or(resource.href()).unwrap_or("-");
            match resource.display_name() {
                Some(name) => println!("{}\t{}\t{}\t{}", index, resource.kind(), label, name),
                None => println!("{}\t{}\t{}", index, resource.kind(), label),
            }
        }
    }

    Ok(())
}

fn run_encode(
    input: &Path,
    context: Context,
    pointer: &str,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<(), u8> {
    let collection = load_collection(input, pointer, false)?;
    let resources = decode_collection(&collection, context, false)?;

    let encoded = encode(&resources, context).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    print_json(&encoded, pretty, output.as_deref())
}

fn run_validate(input: &Path, context: Context, pointer: &str, json_output: bool) -> Result<(), u8> {
    let collection = load_collection(input, pointer, json_output)?;

    match validate_wire(&collection, context) {
        Ok(()) => {
            if json_output {
                println!(r#"{{"valid":true}}"#);
            } else {
                println!("Valid");
            }
            Ok(())
        }
        Err(ValidateError::Invalid { errors }) => {
            if json_output {
                let output = json!({
                    "valid": false,
                    "errors": errors
                });
                println!("{}", output);
            } else {
                eprintln!("Validation failed:");
                for error in errors {
                    eprintln!("  {}", error);
                }
            }
            Err(1)
        }
        Err(e) => {
            report_error(json_output, &e.to_string());
            Err(e.exit_code() as u8)
        }
    }
}

/// Write JSON to `output`, or stdout when no path is given.
fn print_json(value: &Value, pretty: bool, output: Option<&Path>) -> Result<(), u8> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    match output {
        Some(path) => std::fs::write(path, &text).map_err(|e| {
            eprintln!("Error writing to {}: {}", path.display(), e);
            3u8
        }),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

/// Output an error message in plain text or JSON format.
fn report_error(json_output: bool, msg: &str) {
    if json_output {
        println!("{}", json!({ "error": msg }));
    } else {
        eprintln!("Error: {}", msg);
    }
}
