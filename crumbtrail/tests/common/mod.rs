//! Common test utilities for integration tests.
//!
//! Table-backed routers and translators standing in for a host
//! application's collaborators.

use std::collections::HashMap;

use crumbtrail::{FnRouter, FnTranslator, Result, RouteDefinition, RouteRecord, RouteTable};

/// A router answering from a fixed map of path to matched records.
#[allow(dead_code)]
pub fn map_router(
    entries: &[(&str, Vec<RouteRecord>)],
) -> FnRouter<impl Fn(&str) -> Result<Option<Vec<RouteRecord>>>> {
    let table: HashMap<String, Vec<RouteRecord>> = entries
        .iter()
        .map(|(path, records)| ((*path).to_string(), records.clone()))
        .collect();
    FnRouter(move |path: &str| -> Result<Option<Vec<RouteRecord>>> {
        Ok(table.get(path).cloned())
    })
}

/// A translator knowing only the given keys.
#[allow(dead_code)]
pub fn map_translator(entries: &[(&str, &str)]) -> FnTranslator<impl Fn(&str, &str) -> Result<String>> {
    let table: HashMap<String, String> = entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect();
    FnTranslator(move |key: &str, fallback: &str| -> Result<String> {
        Ok(table.get(key).cloned().unwrap_or_else(|| fallback.to_string()))
    })
}

/// The route table of a small documentation site.
#[allow(dead_code)]
pub fn docs_site() -> RouteTable {
    RouteTable::new(vec![
        RouteDefinition::new("index", "/").with_title("Home"),
        RouteDefinition::new("about___en", "/about"),
        RouteDefinition::new("about___fr", "/fr/about"),
        RouteDefinition::new("docs-slug", "/docs/:slug(.*)*"),
    ])
    .expect("valid docs site routes")
}
