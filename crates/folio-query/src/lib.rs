//! Folio Query - Query language for the section library
//!
//! A small filter language for browsing registered section variants, e.g.
//! `sections where style.emphasis == 'dramatic'` or `kinds where cost <= 2`.

mod executor;
mod output;
mod parser;

pub use executor::execute_query;
pub use output::{format_json, format_toml, QueryResult};
pub use parser::{parse_query, Condition, Operator, Query, QueryError, QueryValue, Resource};
