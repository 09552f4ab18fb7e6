//! Beam search over section variants

use crate::assembly::{Assembly, DepthTrace, ScoreTrace};
use crate::options::AssembleOptions;
use folio_core::{BrandTokens, FolioError, Result, Tone};
use folio_library::{ContentGraph, SectionLibrary, SectionMeta, SectionNode};
use folio_score::{Evaluator, PlacementContext, ScoreBreakdown, ScoreWeights};
use std::cmp::Ordering;
use tracing::{debug, info};

/// A partial or complete sequence of chosen variants
#[derive(Debug, Clone)]
struct Entry<'l> {
    picks: Vec<&'l SectionMeta>,
    keys: Vec<String>,
    /// Registry insertion index of each pick
    indices: Vec<usize>,
    breakdowns: Vec<ScoreBreakdown>,
    points: i64,
}

impl<'l> Entry<'l> {
    fn root() -> Self {
        Self {
            picks: Vec::new(),
            keys: Vec::new(),
            indices: Vec::new(),
            breakdowns: Vec::new(),
            points: 0,
        }
    }

    fn kinds(&self) -> Vec<&'l str> {
        self.picks.iter().map(|&m| m.kind.as_str()).collect()
    }

    fn has_kind(&self, kind: &str) -> bool {
        self.picks.iter().any(|m| m.kind == kind)
    }

    fn is_complete(&self, required: &[String]) -> bool {
        required.iter().all(|k| self.has_kind(k))
    }

    fn extend(&self, index: usize, meta: &'l SectionMeta, breakdown: ScoreBreakdown) -> Self {
        let mut next = self.clone();
        next.points += breakdown.points;
        next.picks.push(meta);
        next.keys.push(meta.key());
        next.indices.push(index);
        next.breakdowns.push(breakdown);
        next
    }
}

/// Higher score first, then key sequence, then registry order
fn rank(a: &Entry, b: &Entry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| a.keys.cmp(&b.keys))
        .then_with(|| a.indices.cmp(&b.indices))
}

/// Beam-search assembler bound to one library and one request's inputs.
///
/// Stateless between calls; every `search` allocates its own pools.
pub struct Assembler<'a> {
    library: &'a SectionLibrary,
    evaluator: Evaluator<'a>,
}

impl<'a> Assembler<'a> {
    pub fn new(
        library: &'a SectionLibrary,
        content: &'a ContentGraph,
        brand: &'a BrandTokens,
        tone: Tone,
    ) -> Self {
        Self {
            library,
            evaluator: Evaluator::new(content, brand, tone),
        }
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.evaluator = self.evaluator.with_weights(weights);
        self
    }

    /// Assemble a page containing every kind in `required_kinds`
    pub fn search(&self, required_kinds: &[String], options: &AssembleOptions) -> Result<Assembly> {
        let required = dedup_kinds(required_kinds);
        if required.is_empty() {
            return Err(FolioError::InvalidOptions(
                "no section kinds requested".to_string(),
            ));
        }
        options.validate(required.len())?;
        self.preflight(&required)?;

        let mut beam = vec![Entry::root()];
        let mut depths = Vec::new();

        for depth in 0..options.max_depth {
            if beam.iter().all(|e| e.is_complete(&required)) {
                break;
            }

            let mut pool = self.expand(&beam, &required);
            let pool_size = pool.len();
            if pool.is_empty() {
                depths.push(DepthTrace {
                    depth,
                    pool_size,
                    kept: 0,
                });
                debug!(depth, "beam exhausted");
                break;
            }

            pool.sort_by(rank);
            pool.truncate(options.beam_width);
            debug!(
                depth,
                pool = pool_size,
                kept = pool.len(),
                best = pool[0].points,
                "beam step"
            );
            depths.push(DepthTrace {
                depth,
                pool_size,
                kept: pool.len(),
            });
            beam = pool;
        }

        let complete: Vec<&Entry> = beam.iter().filter(|e| e.is_complete(&required)).collect();
        let Some(&best) = complete.first() else {
            return Err(self.dead_end(&beam, &required));
        };

        let mut chosen: Vec<&Entry> = vec![best];
        for &entry in complete.iter().skip(1) {
            if chosen.len() > options.alternates {
                break;
            }
            if chosen.iter().all(|c| c.keys != entry.keys) {
                chosen.push(entry);
            }
        }

        let primary = self.materialize(best);
        let alternates = chosen[1..].iter().map(|e| self.materialize(e)).collect();
        let trace = ScoreTrace {
            depths,
            primary: best.breakdowns.clone(),
            totals: chosen.iter().map(|e| e.points).collect(),
        };

        info!(
            primary = %best.keys.join(","),
            alternates = chosen.len() - 1,
            points = best.points,
            "assembled page"
        );

        Ok(Assembly {
            primary,
            alternates,
            trace,
        })
    }

    /// Every admissible one-section extension of the beam. Complete entries
    /// are carried forward unchanged.
    fn expand(&self, beam: &[Entry<'a>], required: &[String]) -> Vec<Entry<'a>> {
        let mut pool = Vec::new();
        for entry in beam {
            if entry.is_complete(required) {
                pool.push(entry.clone());
                continue;
            }

            let placed = entry.kinds();
            let ctx = PlacementContext::new(&placed, required);
            for (index, meta) in self.library.all().iter().enumerate() {
                if !required.contains(&meta.kind) || entry.has_kind(&meta.kind) {
                    continue;
                }
                if !self.evaluator.is_admissible(meta, &ctx) {
                    continue;
                }
                let breakdown = self.evaluator.score(meta, &ctx);
                pool.push(entry.extend(index, meta, breakdown));
            }
        }
        pool
    }

    /// Fail fast on kinds no variant can ever satisfy for this content
    fn preflight(&self, required: &[String]) -> Result<()> {
        for kind in required {
            let variants = self.library.variants_of(kind);
            if variants.is_empty() {
                return Err(FolioError::NoViableAssembly {
                    kind: kind.clone(),
                    reason: "no registered variants".to_string(),
                });
            }

            let failures: Vec<String> = variants
                .iter()
                .filter_map(|meta| {
                    self.evaluator
                        .static_failure(meta)
                        .map(|c| format!("{} {}", meta.key(), c))
                })
                .collect();
            if failures.len() == variants.len() {
                return Err(FolioError::NoViableAssembly {
                    kind: kind.clone(),
                    reason: failures.join("; "),
                });
            }
        }
        Ok(())
    }

    fn dead_end(&self, beam: &[Entry], required: &[String]) -> FolioError {
        let best = beam.iter().min_by(|a, b| rank(a, b));
        let kind = best
            .and_then(|e| required.iter().find(|k| !e.has_kind(k)))
            .or_else(|| required.first())
            .cloned()
            .unwrap_or_default();
        let placed = best.map(|e| e.keys.join(", ")).unwrap_or_default();
        FolioError::NoViableAssembly {
            kind,
            reason: format!("no admissible variant after [{}]", placed),
        }
    }

    fn materialize(&self, entry: &Entry) -> Vec<SectionNode> {
        entry
            .picks
            .iter()
            .enumerate()
            .map(|(position, meta)| {
                SectionNode::new((*meta).clone(), self.evaluator.props(meta), position)
            })
            .collect()
    }
}

/// Drop repeated kinds, keeping first occurrences
fn dedup_kinds(kinds: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let kind = kind.trim();
        if !kind.is_empty() && !out.iter().any(|k| k == kind) {
            out.push(kind.to_string());
        }
    }
    out
}
