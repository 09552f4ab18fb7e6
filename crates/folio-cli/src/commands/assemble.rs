//! Beam-search assembly command

use super::{read_brand, read_content, to_pretty_json};
use crate::config::FolioConfig;
use anyhow::Result;
use folio_assemble::{AssembleOptions, Assembler, Assembly};
use folio_core::Tone;
use folio_library::SectionLibrary;
use tracing::info;

pub struct AssembleArgs {
    pub content: String,
    pub tone: Tone,
    pub kinds: Vec<String>,
    pub brand: Option<String>,
    pub beam_width: Option<usize>,
    pub max_depth: Option<usize>,
    pub alternates: Option<usize>,
    pub format: String,
}

pub fn run(library: &SectionLibrary, config: &FolioConfig, args: AssembleArgs) -> Result<()> {
    let content = read_content(&args.content)?;
    let brand = read_brand(args.brand.as_deref())?;

    // Flags override folio.toml
    let defaults = config.assemble;
    let options = AssembleOptions {
        beam_width: args.beam_width.unwrap_or(defaults.beam_width),
        max_depth: args.max_depth.unwrap_or(defaults.max_depth),
        alternates: args.alternates.unwrap_or(defaults.alternates),
    };

    let assembly = Assembler::new(library, &content, &brand, args.tone)
        .with_weights(config.weights)
        .search(&args.kinds, &options)?;
    info!(fingerprint = %assembly.fingerprint().to_hex(), "assembled page");

    match args.format.as_str() {
        "json" => println!("{}", to_pretty_json(&assembly)?),
        "text" => print_text(&assembly),
        other => anyhow::bail!("Unknown format: {}", other),
    }
    Ok(())
}

fn print_text(assembly: &Assembly) {
    println!(
        "Primary (score {:.3}): {}",
        assembly.trace.primary_score(),
        assembly.primary_keys().join(" → ")
    );
    for breakdown in &assembly.trace.primary {
        println!(
            "  {:<24} total {:.3}  content {:.2}  tone {:.2}  a11y {:.2}  perf {:.2}  soft {}",
            breakdown.key,
            breakdown.total,
            breakdown.content_fit,
            breakdown.tone_match,
            breakdown.accessibility,
            breakdown.performance,
            breakdown.soft_violations,
        );
    }

    if !assembly.alternates.is_empty() {
        println!();
        println!("Alternates:");
        for (i, keys) in assembly.alternate_keys().iter().enumerate() {
            let points = assembly.trace.totals.get(i + 1).copied().unwrap_or_default();
            println!(
                "  {}. (score {:.3}) {}",
                i + 1,
                folio_score::from_points(points),
                keys.join(" → ")
            );
        }
    }
}
