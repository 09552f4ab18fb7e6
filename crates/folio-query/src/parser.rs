//! Query language parser

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use std::fmt;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct QueryParser;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// What a query lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Section variants
    Sections,
    /// Distinct section kinds
    Kinds,
}

/// A parsed query
#[derive(Debug, Clone)]
pub struct Query {
    pub resource: Resource,
    pub condition: Option<Condition>,
}

/// A query condition
#[derive(Debug, Clone)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: QueryValue,
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    Contains,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Contains => "contains",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
        };
        f.write_str(text)
    }
}

/// Query values
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl QueryValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            QueryValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            QueryValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Parse a query string
pub fn parse_query(input: &str) -> Result<Query, QueryError> {
    let pairs = QueryParser::parse(Rule::query, input)
        .map_err(|e| QueryError::ParseError(e.to_string()))?;

    let mut resource = Resource::Sections;
    let mut condition = None;

    for inner in pairs.flat_map(|pair| pair.into_inner()) {
        match inner.as_rule() {
            Rule::resource => {
                resource = match inner.as_str() {
                    "kinds" => Resource::Kinds,
                    _ => Resource::Sections,
                };
            }
            Rule::where_clause => {
                if let Some(cond) = inner.into_inner().find(|p| p.as_rule() == Rule::condition) {
                    condition = Some(parse_condition(cond)?);
                }
            }
            _ => {}
        }
    }

    Ok(Query { resource, condition })
}

fn parse_condition(pair: Pair<Rule>) -> Result<Condition, QueryError> {
    let mut field = String::new();
    let mut operator = Operator::Equal;
    let mut value = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::field => field = inner.as_str().to_string(),
            Rule::operator => operator = parse_operator(inner.as_str())?,
            Rule::value => value = Some(parse_value(inner)?),
            _ => {}
        }
    }

    let value = value.ok_or_else(|| QueryError::InvalidValue("empty value".to_string()))?;
    Ok(Condition {
        field,
        operator,
        value,
    })
}

fn parse_operator(op: &str) -> Result<Operator, QueryError> {
    match op {
        "==" => Ok(Operator::Equal),
        "!=" => Ok(Operator::NotEqual),
        "contains" => Ok(Operator::Contains),
        ">" => Ok(Operator::GreaterThan),
        "<" => Ok(Operator::LessThan),
        ">=" => Ok(Operator::GreaterThanOrEqual),
        "<=" => Ok(Operator::LessThanOrEqual),
        _ => Err(QueryError::InvalidOperator(op.to_string())),
    }
}

fn parse_value(pair: Pair<Rule>) -> Result<QueryValue, QueryError> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| QueryError::InvalidValue("empty value".to_string()))?;

    match inner.as_rule() {
        Rule::string => {
            // Quotes are not part of the inner token
            let text = inner
                .into_inner()
                .next()
                .map(|s| s.as_str().to_string())
                .unwrap_or_default();
            Ok(QueryValue::String(text))
        }
        Rule::number => inner
            .as_str()
            .parse()
            .map(QueryValue::Number)
            .map_err(|_| QueryError::InvalidValue(inner.as_str().to_string())),
        Rule::boolean => Ok(QueryValue::Boolean(inner.as_str() == "true")),
        _ => Err(QueryError::InvalidValue(inner.as_str().to_string())),
    }
}
