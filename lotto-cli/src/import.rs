use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

use lotto_core::models::RawCombination;

/// JSON input: either a bare list of combinations or a `{"combinations": [...]}`
/// request body.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonBatch {
    Bare(Vec<RawCombination>),
    Request { combinations: Vec<RawCombination> },
}

/// Parses one combination written as numbers separated by spaces, commas,
/// semicolons, or the ` - ` used when combinations are displayed.
pub fn parse_combination(s: &str) -> Result<RawCombination> {
    s.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|part| !part.is_empty() && *part != "-")
        .map(|part| {
            part.parse::<i64>()
                .with_context(|| format!("'{}' is not an integer", part))
        })
        .collect()
}

fn parse_json(content: &str) -> Result<Vec<RawCombination>> {
    let batch: JsonBatch =
        serde_json::from_str(content).context("Expected a list of integer lists")?;
    Ok(match batch {
        JsonBatch::Bare(combinations) => combinations,
        JsonBatch::Request { combinations } => combinations,
    })
}

fn parse_csv(path: &Path) -> Result<Vec<RawCombination>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Cannot open {:?}", path))?;

    let mut combinations = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Cannot read line {}", i + 1))?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        let numbers = record
            .iter()
            .filter(|field| !field.is_empty())
            .map(|field| field.parse::<i64>())
            .collect::<Result<RawCombination, _>>()
            .with_context(|| {
                format!("Combination {} contains non-integer values", combinations.len() + 1)
            })?;
        combinations.push(numbers);
    }
    Ok(combinations)
}

/// Reads a batch from `path`; `.json` files are parsed as JSON, anything else
/// as comma-separated lines, one combination per line.
pub fn load_file(path: &Path) -> Result<Vec<RawCombination>> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {:?}", path))?;
        parse_json(&content).with_context(|| format!("Invalid JSON in {:?}", path))
    } else {
        parse_csv(path)
    }
}

/// Gathers combinations from an optional file followed by inline `--combo`
/// arguments, keeping that order for indexing.
pub fn load_combinations(file: Option<&Path>, inline: &[String]) -> Result<Vec<RawCombination>> {
    let mut combinations = match file {
        Some(path) => load_file(path)?,
        None => Vec::new(),
    };

    for s in inline {
        let index = combinations.len() + 1;
        let numbers = parse_combination(s)
            .with_context(|| format!("Combination {} contains non-integer values", index))?;
        combinations.push(numbers);
    }

    if combinations.is_empty() {
        bail!("No combinations provided. Use --file or --combo");
    }
    Ok(combinations)
}
