use std::fs;
use std::path::Path;

use anyhow::Context;

use stockworth_valuation::InventoryFacts;

use crate::cli::FactsArgs;
use crate::config::{OutputFormat, Settings};

/// Read facts from a JSON file.
pub fn load_facts(path: &Path) -> anyhow::Result<InventoryFacts> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read facts file {}", path.display()))?;
    let facts = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse facts file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded inventory facts");
    Ok(facts)
}

/// Resolve the facts for a command: file or built-in example, then env
/// settings, then flags.
pub fn resolve_facts(args: &FactsArgs, settings: &Settings) -> anyhow::Result<InventoryFacts> {
    let mut facts = match &args.input {
        Some(path) => load_facts(path)?,
        None => InventoryFacts::default(),
    };

    if let Some(method) = args.method.or(settings.method) {
        facts.valuation_method = method;
    }
    if let Some(currency) = args.currency.as_ref().or(settings.currency.as_ref()) {
        facts.currency = currency.clone();
    }
    Ok(facts)
}

pub fn resolve_format(flag: Option<OutputFormat>, settings: &Settings) -> OutputFormat {
    flag.unwrap_or(settings.output)
}
