//! Design spec resolution command

use super::{read_json, to_pretty_json};
use anyhow::{Context, Result};
use folio_core::Tone;
use folio_library::SectionLibrary;
use folio_resolve::{resolve_spec, DesignSpec};

pub fn run(
    library: &SectionLibrary,
    spec_path: Option<&str>,
    preset: Option<Tone>,
    nodes: bool,
) -> Result<()> {
    let spec: DesignSpec = match (spec_path, preset) {
        (Some(path), None) => read_json(path).context("Failed to load design spec")?,
        (None, Some(tone)) => DesignSpec::preset(tone),
        (Some(_), Some(_)) => anyhow::bail!("Pass either a spec file or --preset, not both"),
        (None, None) => anyhow::bail!("Pass a spec file or --preset <tone>"),
    };

    let page = resolve_spec(library, &spec)?;

    let output = if nodes {
        to_pretty_json(&page.to_nodes(library)?)?
    } else {
        to_pretty_json(&page)?
    };
    println!("{}", output);
    Ok(())
}
