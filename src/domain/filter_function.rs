//! Filter functions declared by the design documents of a database.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

const DESIGN_PREFIX: &str = "_design/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterFunction {
    /// `<ddoc>/<filter>`, the value the replicator expects in `filter`.
    pub id: String,
    pub label: String,
}

/// Body of `GET /{db}/_all_docs?include_docs=true`, reduced to what filter
/// discovery reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AllDocsResponse {
    #[serde(default)]
    pub rows: Vec<AllDocsRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllDocsRow {
    pub id: String,
    #[serde(default)]
    pub doc: Option<DesignDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DesignDocument {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub filters: Option<BTreeMap<String, Value>>,
}

/// Rows keep their order; filters within one document come out sorted by name.
pub fn extract_filter_functions(response: &AllDocsResponse) -> Vec<FilterFunction> {
    response
        .rows
        .iter()
        .filter_map(|row| {
            let doc = row.doc.as_ref()?;
            let filters = doc.filters.as_ref()?;
            let doc_id = doc.id.as_deref().unwrap_or(&row.id);
            let ddoc = doc_id.strip_prefix(DESIGN_PREFIX).unwrap_or(doc_id);
            Some(filters.keys().map(move |name| FilterFunction {
                id: format!("{ddoc}/{name}"),
                label: name.clone(),
            }))
        })
        .flatten()
        .collect()
}
