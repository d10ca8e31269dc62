/// Dictionary Linter — validates a RON dictionary overlay against the
/// built-in table.
///
/// Usage: dictionary_linter <overlay.ron | dir>

use std::collections::BTreeMap;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;
use tuacavo::core::decompose::{Decomposer, Segment};
use tuacavo::core::lexer::tokenize;
use tuacavo::schema::token::TokenKind;
use tuacavo::SymbolDictionary;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: dictionary_linter <overlay.ron | dir>");
        process::exit(0);
    }

    let overlay_path = Path::new(&args[1]);
    let mut raw: BTreeMap<String, String> = BTreeMap::new();

    if overlay_path.is_file() {
        if let Err(e) = load_raw(overlay_path, &mut raw) {
            eprintln!("ERROR: Failed to load dictionary file: {}", e);
            process::exit(1);
        }
    } else if overlay_path.is_dir() {
        load_raw_recursive(overlay_path, &mut raw);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", overlay_path.display());
        process::exit(1);
    }

    println!("Loaded {} overlay entries", raw.len());

    let (errors, warnings) = lint_entries(&raw);

    println!("\n=== Dictionary Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

/// Entries are read without validation so that empty keys and values can
/// be reported instead of aborting the load.
fn load_raw(path: &Path, raw: &mut BTreeMap<String, String>) -> Result<(), String> {
    let contents = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let entries: BTreeMap<String, String> = ron::from_str(&contents).map_err(|e| e.to_string())?;
    raw.extend(entries);
    Ok(())
}

fn load_raw_recursive(dir: &Path, raw: &mut BTreeMap<String, String>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                load_raw_recursive(&path, raw);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                match load_raw(&path, raw) {
                    Ok(()) => println!("  Loaded: {}", path.display()),
                    Err(e) => eprintln!("  ERROR loading {}: {}", path.display(), e),
                }
            }
        }
    }
}

fn lint_entries(raw: &BTreeMap<String, String>) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let builtin = SymbolDictionary::builtin();

    let valid: Vec<(String, String)> = raw
        .iter()
        .filter(|(k, v)| !k.is_empty() && !v.trim().is_empty())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    let mut merged = builtin.clone();
    match SymbolDictionary::from_entries(valid) {
        Ok(overlay) => merged.merge(overlay),
        Err(e) => errors.push(format!("Overlay could not be built: {}", e)),
    }

    for (key, value) in raw {
        if key.is_empty() {
            errors.push(format!("Empty key (fragment {:?})", value));
            continue;
        }
        if value.trim().is_empty() {
            errors.push(format!("Key '{}' has an empty fragment", key));
        }

        match tokenize(key).as_deref() {
            Ok([token]) if token.kind.is_tag_list_member() => {}
            Ok([token]) if is_operator_literal(token.kind) => {
                warnings.push(format!(
                    "Key '{}' collides with the {} and is never looked up as a tag",
                    key,
                    token.kind.describe()
                ));
            }
            Ok(tokens) => errors.push(format!(
                "Key '{}' does not lex as a single tag ({} tokens)",
                key,
                tokens.len()
            )),
            Err(e) => errors.push(format!("Key '{}' does not lex: {}", key, e)),
        }

        if let Some(previous) = builtin.get(key) {
            if previous != value {
                warnings.push(format!(
                    "Key '{}' overrides built-in fragment {:?} with {:?}",
                    key, previous, value
                ));
            }
        }

        let others = merged.without(key);
        let segments = Decomposer::new(&others).segment(key);
        let composed = segments.len() > 1
            && segments.iter().all(|s| matches!(s, Segment::Known(_)));
        if composed {
            let parts: Vec<&str> = segments
                .iter()
                .filter_map(|s| match s {
                    Segment::Known(k) => Some(*k),
                    _ => None,
                })
                .collect();
            warnings.push(format!(
                "Key '{}' is also composable from shorter keys: {}",
                key,
                parts.join(" + ")
            ));
        }
    }

    (errors, warnings)
}

fn is_operator_literal(kind: TokenKind) -> bool {
    kind.is_binary_operator() || matches!(kind, TokenKind::Eth | TokenKind::At)
}
