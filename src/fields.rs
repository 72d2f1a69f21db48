/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde_json::{Map, Value};

/// Named request fields, kept in insertion order
pub type ApiFields = Vec<(&'static str, String)>;

/// Joins identifiers the way the server expects lists: `a,b,c`
pub fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}

/// Joins a destination followed by its sources.
/// The server takes the first entry as the destination.
pub fn join_dest_and_sources<S: AsRef<str>>(dest_id: &str, source_ids: &[S]) -> String {
    std::iter::once(dest_id)
        .chain(source_ids.iter().map(AsRef::as_ref))
        .collect::<Vec<_>>()
        .join(",")
}

/// Uses `fallback` when `value` is missing or empty
pub(crate) fn or_default<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(fallback)
}

pub(crate) fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

// JSON body for servers that don't accept forms
pub(crate) fn to_json_object(fields: &[(&'static str, String)]) -> Value {
    let map: Map<String, Value> = fields
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.clone())))
        .collect();
    Value::Object(map)
}
