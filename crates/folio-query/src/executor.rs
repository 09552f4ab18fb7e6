//! Query execution against a SectionLibrary

use crate::output::QueryResult;
use crate::parser::{Condition, Operator, Query, QueryValue, Resource};
use folio_core::{FolioError, Result};
use folio_library::{SectionLibrary, SectionMeta};

/// Execute a query against a section library.
///
/// Results keep registry order. Fails with `QueryError` when the condition
/// names a field sections do not have.
pub fn execute_query(library: &SectionLibrary, query: &Query) -> Result<QueryResult> {
    let mut sections = Vec::new();
    for meta in library.all() {
        let keep = match &query.condition {
            None => true,
            Some(cond) => matches_condition(meta, cond)?,
        };
        if keep {
            sections.push(meta.clone());
        }
    }

    match query.resource {
        Resource::Sections => Ok(QueryResult::Sections(sections)),
        Resource::Kinds => {
            let mut kinds: Vec<String> = Vec::new();
            for meta in &sections {
                if !kinds.contains(&meta.kind) {
                    kinds.push(meta.kind.clone());
                }
            }
            Ok(QueryResult::Kinds(kinds))
        }
    }
}

#[derive(Debug, Clone)]
enum FieldValue {
    String(String),
    Number(f64),
    List(Vec<String>),
}

fn matches_condition(meta: &SectionMeta, condition: &Condition) -> Result<bool> {
    let field = get_field_value(meta, &condition.field)?;
    Ok(match field {
        None => false,
        Some(value) => compare_values(&value, condition.operator, &condition.value),
    })
}

fn get_field_value(meta: &SectionMeta, field: &str) -> Result<Option<FieldValue>> {
    let style = &meta.style;
    let value = match field {
        "kind" => Some(FieldValue::String(meta.kind.clone())),
        "variant" => Some(FieldValue::String(meta.variant.clone())),
        "key" => Some(FieldValue::String(meta.key())),
        "description" => meta.description.clone().map(FieldValue::String),
        "cost" => Some(FieldValue::Number(f64::from(meta.cost))),
        "style.emphasis" => Some(FieldValue::String(style.emphasis.to_string())),
        "style.layout" => Some(FieldValue::String(style.layout.to_string())),
        "style.spacing" => Some(FieldValue::String(style.spacing.to_string())),
        "style.motion" => Some(FieldValue::String(style.motion.to_string())),
        "style.typography" => Some(FieldValue::String(style.typography.to_string())),
        "slots" => Some(FieldValue::List(meta.content_slots.clone())),
        "tones" => Some(FieldValue::List(
            style.tones.iter().map(|t| t.to_string()).collect(),
        )),
        other => {
            return Err(FolioError::QueryError(format!(
                "unknown field '{}'",
                other
            )))
        }
    };
    Ok(value)
}

fn compare_values(field: &FieldValue, op: Operator, query: &QueryValue) -> bool {
    match (field, query) {
        (FieldValue::String(f), QueryValue::String(q)) => match op {
            Operator::Equal => f == q,
            Operator::NotEqual => f != q,
            Operator::Contains => f.contains(q.as_str()),
            _ => false,
        },
        (FieldValue::Number(f), QueryValue::Number(q)) => match op {
            Operator::Equal => (f - q).abs() < f64::EPSILON,
            Operator::NotEqual => (f - q).abs() >= f64::EPSILON,
            Operator::GreaterThan => f > q,
            Operator::LessThan => f < q,
            Operator::GreaterThanOrEqual => f >= q,
            Operator::LessThanOrEqual => f <= q,
            Operator::Contains => false,
        },
        (FieldValue::List(items), QueryValue::String(q)) => match op {
            Operator::Contains | Operator::Equal => items.iter().any(|i| i == q),
            Operator::NotEqual => items.iter().all(|i| i != q),
            _ => false,
        },
        // Type mismatch
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_query;

    fn library() -> SectionLibrary {
        let mut library = SectionLibrary::new();
        library
            .load_string(
                r#"
[[section]]
kind = "hero"
variant = "statement"
slots = ["headline"]
cost = 2
[section.style]
emphasis = "dramatic"
tones = ["bold", "retro"]

[[section]]
kind = "hero"
variant = "split"
slots = ["headline", "image"]
cost = 5

[[section]]
kind = "cta"
variant = "banner"
slots = ["headline"]
cost = 2
[section.style]
emphasis = "dramatic"
layout = "full-bleed"
"#,
            )
            .unwrap();
        library
    }

    fn keys(result: QueryResult) -> Vec<String> {
        match result {
            QueryResult::Sections(sections) => sections.iter().map(|s| s.key()).collect(),
            QueryResult::Kinds(_) => panic!("Expected Sections result"),
        }
    }

    #[test]
    fn test_query_all_sections() {
        let query = parse_query("sections").unwrap();
        let result = execute_query(&library(), &query).unwrap();
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_query_by_style() {
        let query = parse_query("sections where style.emphasis == 'dramatic'").unwrap();
        let result = execute_query(&library(), &query).unwrap();
        assert_eq!(keys(result), vec!["hero-statement", "cta-banner"]);
    }

    #[test]
    fn test_query_list_membership() {
        let query = parse_query("sections where slots contains 'image'").unwrap();
        assert_eq!(keys(execute_query(&library(), &query).unwrap()), vec!["hero-split"]);

        let query = parse_query("sections where tones contains 'bold'").unwrap();
        assert_eq!(
            keys(execute_query(&library(), &query).unwrap()),
            vec!["hero-statement"]
        );
    }

    #[test]
    fn test_query_numeric() {
        let query = parse_query("sections where cost > 2").unwrap();
        assert_eq!(keys(execute_query(&library(), &query).unwrap()), vec!["hero-split"]);
    }

    #[test]
    fn test_kinds_are_distinct_in_registry_order() {
        let query = parse_query("kinds where cost <= 2").unwrap();
        match execute_query(&library(), &query).unwrap() {
            QueryResult::Kinds(kinds) => assert_eq!(kinds, vec!["hero", "cta"]),
            QueryResult::Sections(_) => panic!("Expected Kinds result"),
        }
    }

    #[test]
    fn test_unknown_field_is_error() {
        let query = parse_query("sections where weight > 3").unwrap();
        let err = execute_query(&library(), &query).unwrap_err();
        assert!(matches!(err, FolioError::QueryError(_)));
    }

    #[test]
    fn test_missing_description_never_matches() {
        let query = parse_query("sections where description contains 'x'").unwrap();
        assert!(execute_query(&library(), &query).unwrap().is_empty());
    }
}
