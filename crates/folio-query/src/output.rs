//! Query result formatting

use folio_library::SectionMeta;
use serde::Serialize;

/// Query result types
#[derive(Debug, Clone)]
pub enum QueryResult {
    Sections(Vec<SectionMeta>),
    Kinds(Vec<String>),
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        match self {
            QueryResult::Sections(s) => s.len(),
            QueryResult::Kinds(k) => k.len(),
        }
    }
}

/// Format query result as JSON
pub fn format_json(result: &QueryResult) -> String {
    let rendered = match result {
        QueryResult::Sections(sections) => serde_json::to_string_pretty(sections),
        QueryResult::Kinds(kinds) => serde_json::to_string_pretty(kinds),
    };
    rendered.unwrap_or_else(|_| "[]".to_string())
}

/// Format query result as TOML
pub fn format_toml(result: &QueryResult) -> String {
    let rendered = match result {
        QueryResult::Sections(sections) => toml::to_string_pretty(&SectionListWrapper {
            section: sections.iter().map(SectionRow::from).collect(),
        }),
        QueryResult::Kinds(kinds) => toml::to_string_pretty(&KindListWrapper {
            kinds: kinds.clone(),
        }),
    };
    rendered.unwrap_or_default()
}

#[derive(Serialize)]
struct SectionListWrapper {
    section: Vec<SectionRow>,
}

/// Flat TOML row; constraint lists mix tagged tables, so they are rendered
/// as readable strings instead.
#[derive(Serialize)]
struct SectionRow {
    key: String,
    kind: String,
    variant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    cost: u8,
    slots: Vec<String>,
    hard: Vec<String>,
    soft: Vec<String>,
    a11y: Vec<String>,
    emphasis: String,
    layout: String,
    tones: Vec<String>,
}

impl From<&SectionMeta> for SectionRow {
    fn from(meta: &SectionMeta) -> Self {
        Self {
            key: meta.key(),
            kind: meta.kind.clone(),
            variant: meta.variant.clone(),
            description: meta.description.clone(),
            cost: meta.cost,
            slots: meta.content_slots.clone(),
            hard: meta.hard_constraints.iter().map(|c| c.to_string()).collect(),
            soft: meta.soft_constraints.iter().map(|c| c.to_string()).collect(),
            a11y: meta.a11y_checklist.iter().map(|c| c.to_string()).collect(),
            emphasis: meta.style.emphasis.to_string(),
            layout: meta.style.layout.to_string(),
            tones: meta.style.tones.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Serialize)]
struct KindListWrapper {
    kinds: Vec<String>,
}
