//! Library query command

use anyhow::{Context, Result};
use folio_library::SectionLibrary;
use folio_query::{execute_query, format_json, format_toml, parse_query};

pub fn run(library: &SectionLibrary, query_str: &str, format: &str) -> Result<()> {
    let query = parse_query(query_str).context("Failed to parse query")?;
    let result = execute_query(library, &query)?;

    let output = match format {
        "json" => format_json(&result),
        "toml" => format_toml(&result),
        _ => anyhow::bail!("Unknown format: {}", format),
    };

    println!("{}", output);
    Ok(())
}
