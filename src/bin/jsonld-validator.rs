//! # JSON-LD Validator
//!
//! A command-line front end for generating and validating JSON-LD asset
//! descriptions against a property schema.
//!
//! ## Usage
//!
//! ### Validate a Document
//!
//! ```bash
//! cargo run --bin jsonld-validator validate schema.json carrier.html
//! ```
//!
//! The document may be a bare JSON-LD file or an HTML page embedding a
//! `<script type="application/ld+json">` block. With the `http` feature the
//! document may also be an http(s) URL.
//!
//! ### Generate a Document
//!
//! ```bash
//! cargo run --bin jsonld-validator generate schema.json values.json carrier.jsonld
//! ```
//!
//! `values.json` maps property names to entered text or lists of texts.
//! The document is only written when it validates.
//!
//! ## Output Examples
//!
//! ```text
//! Validating document: carrier.html
//! Schema: 3 properties (Number: 2, Enum: 1)
//!
//! Projected document:
//! {
//!   "@context": "https://example.org/ftf-context",
//!   "payload": 800
//! }
//!
//! ❌ Document is invalid (1 error):
//!   - value for 'speed' must be ≤ 10
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: The document is valid, was generated, or the schema declares no
//!   properties to check it against
//! - `1`: The document is invalid, or loading failed

use asset_attributes::schema::Schema;
use asset_attributes::{
    EngineConfig, EngineError, FormValues, SessionState, ValidationSession, prepare_export,
};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("validate") if args.len() == 4 => validate(&args[2], &args[3]).await,
        Some("generate") if args.len() == 4 || args.len() == 5 => {
            generate(&args[2], &args[3], args.get(4).map(String::as_str))
        }
        _ => {
            usage(&args[0]);
            process::exit(1);
        }
    }
}

fn usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {} validate <schema.json> <document>", program);
    eprintln!("  {} generate <schema.json> <values.json> [output]", program);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} validate schema.json carrier.html", program);
    eprintln!("  {} generate schema.json values.json carrier.jsonld", program);
}

async fn validate(schema_path: &str, document: &str) {
    println!("Validating document: {}", document);

    let schema = load_schema(Path::new(schema_path)).unwrap_or_else(|e| fail(e));
    print_schema_summary(&schema);

    let mut session = ValidationSession::new();
    session.load_schema(schema);

    let loaded = if asset_attributes::fetch::is_remote_reference(document) {
        load_remote(&mut session, document).await
    } else {
        fs::read_to_string(document)
            .map_err(|e| format!("cannot read '{}': {}", document, e))
            .and_then(|text| session.load_document_text(&text).map_err(|e| e.to_string()))
    };

    if let Err(e) = loaded {
        fail(e);
    }

    if let Some(projected) = session.projected() {
        match projected.to_json_pretty() {
            Ok(text) => println!("\nProjected document:\n{}", text),
            Err(e) => fail(e.to_string()),
        }
    }

    println!();
    let state = session.state();
    match state {
        SessionState::Valid => println!("✓ Document is valid!"),
        SessionState::DocumentLoaded => {
            println!("✓ Schema declares no properties; nothing to validate")
        }
        _ => {
            let errors = session.errors();
            eprintln!(
                "❌ Document is invalid ({} error{}):",
                errors.len(),
                if errors.len() == 1 { "" } else { "s" }
            );
            for error in errors {
                eprintln!("  - {}", error);
            }
        }
    }
    process::exit(exit_code(state));
}

/// Process exit code for the state a validation run ends in.
fn exit_code(state: SessionState) -> i32 {
    match state {
        SessionState::Valid | SessionState::DocumentLoaded => 0,
        _ => 1,
    }
}

#[cfg(feature = "http")]
async fn load_remote(session: &mut ValidationSession, reference: &str) -> Result<SessionState, String> {
    let fetcher = asset_attributes::HttpFetcher::new().map_err(|e| e.to_string())?;
    session
        .load_document_from(reference, &fetcher)
        .await
        .map_err(|e| e.to_string())
}

#[cfg(not(feature = "http"))]
async fn load_remote(_session: &mut ValidationSession, reference: &str) -> Result<SessionState, String> {
    Err(format!(
        "cannot fetch '{}': built without the `http` feature",
        reference
    ))
}

fn generate(schema_path: &str, values_path: &str, output: Option<&str>) {
    let schema = load_schema(Path::new(schema_path)).unwrap_or_else(|e| fail(e));
    let values: FormValues = fs::read_to_string(values_path)
        .map_err(|e| format!("cannot read '{}': {}", values_path, e))
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
        .unwrap_or_else(|e| fail(e));

    let config = EngineConfig::default();
    match prepare_export(&config, &schema, &values, output) {
        Ok(export) => {
            if let Err(e) = fs::write(&export.file_name, &export.content) {
                fail(format!("cannot write '{}': {}", export.file_name, e));
            }
            println!("✓ Document written to {}", export.file_name);
        }
        Err(EngineError::ValidationFailed(report)) => {
            eprintln!("❌ Document not written ({} errors):", report.len());
            for error in report.errors() {
                eprintln!("  - {}", error);
            }
            process::exit(1);
        }
        Err(e) => fail(e.to_string()),
    }
}

fn load_schema(path: &Path) -> Result<Schema, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("cannot read schema '{}': {}", path.display(), e))?;
    Schema::from_json(&content).map_err(|e| format!("invalid schema '{}': {}", path.display(), e))
}

fn print_schema_summary(schema: &Schema) {
    let mut kind_counts = BTreeMap::new();
    for property in schema {
        *kind_counts.entry(property.kind.as_str()).or_insert(0) += 1;
    }
    let kinds: Vec<String> = kind_counts
        .iter()
        .map(|(kind, count)| format!("{}: {}", kind, count))
        .collect();

    println!("Schema: {} properties ({})", schema.len(), kinds.join(", "));
    for property in schema {
        println!(
            "  - {} [{}] {}",
            property.name,
            property.kind,
            property.constraint_summary()
        );
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("❌ {}", message);
    process::exit(1);
}
