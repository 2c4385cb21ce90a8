//! Build script for generating the message catalogs from `locales/*.json`.
//!
//! Each `locales/<code>.json` is a flat object of message id → template string.
//! The script emits `$OUT_DIR/messages_gen.rs` with one sorted static slice per
//! locale (`EN`, `ES`, ...), so lookups are a binary search over `&'static str`.

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_LOCALE: &str = "en";

fn main() {
    println!("cargo:rerun-if-changed=locales");

    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR not set"));

    if let Err(e) = generate(&manifest_dir.join("locales"), &out_dir.join("messages_gen.rs")) {
        panic!("Failed to generate message catalogs: {:#}", e);
    }
}

fn generate(locales_dir: &Path, output: &Path) -> Result<()> {
    let catalogs = read_catalogs(locales_dir)?;

    let Some(reference) = catalogs.get(DEFAULT_LOCALE) else {
        bail!("default catalog {}/{}.json is missing", locales_dir.display(), DEFAULT_LOCALE);
    };

    // Incomplete catalogs are allowed; call sites fall back to the id or their default text.
    for (code, messages) in &catalogs {
        for id in reference.keys().filter(|id| !messages.contains_key(*id)) {
            println!("cargo:warning=locale '{}' has no message '{}'", code, id);
        }
    }

    let mut code = String::from("// @generated by build.rs from locales/*.json. Do not edit.\n");
    for (locale, messages) in &catalogs {
        writeln!(code, "\npub static {}: &[(&str, &str)] = &[", locale.to_uppercase())?;
        for (id, template) in messages {
            writeln!(code, "    ({:?}, {:?}),", id, template)?;
        }
        code.push_str("];\n");
    }

    fs::write(output, code).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

fn read_catalogs(locales_dir: &Path) -> Result<BTreeMap<String, BTreeMap<String, String>>> {
    let mut catalogs = BTreeMap::new();

    let entries = fs::read_dir(locales_dir).with_context(|| format!("reading {}", locales_dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        println!("cargo:rerun-if-changed={}", path.display());

        let Some(locale) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };
        if locale.is_empty() || !locale.chars().all(|c| c.is_ascii_alphabetic()) {
            bail!("catalog file name {} is not a plain language code", path.display());
        }

        let raw = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let object: Map<String, Value> =
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;

        let mut messages = BTreeMap::new();
        for (id, value) in object {
            let Value::String(template) = value else {
                bail!("{}: message '{}' is not a string", path.display(), id);
            };
            messages.insert(id, template);
        }
        catalogs.insert(locale, messages);
    }

    Ok(catalogs)
}
