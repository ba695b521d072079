//! Rendering of query results as JSON text, for writing to report files
use std::fmt::Display;
use std::fs;
use std::path::Path;

use crate::metabolic_model::query::MetaboliteReactions;

/// Separator placed between array elements, the last element gets none
const SEPARATOR: &str = ",\n";

fn json_array<T: Display>(items: &[T]) -> String {
    let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", rendered.join(SEPARATOR))
}

/// Render `{"<key>":[item,\nitem]}`, each item rendered through its Display implementation
///
/// # Examples
/// ```rust
/// use metapenta_core::metabolic_model::metabolite::Metabolite;
/// use metapenta_core::report::json_array_report;
/// let mets = vec![Metabolite::new("a", "A", "c"), Metabolite::new("b", "B", "c")];
/// let report = json_array_report("commonMetabolites", &mets);
/// assert!(report.ends_with("\"charge\":0}]}"));
/// ```
pub fn json_array_report<T: Display>(key: &str, items: &[T]) -> String {
    format!("{{\"{}\":{}}}", key, json_array(items))
}

/// Render the reactions of a metabolite as `{"isSubstrate":[...],"isProduct":[...]}`
pub fn metabolite_reactions_report(reactions: &MetaboliteReactions<'_>) -> String {
    format!(
        "{{\"isSubstrate\":{},\n\"isProduct\":{}}}",
        json_array(&reactions.as_reactant),
        json_array(&reactions.as_product)
    )
}

/// Write a rendered report to `path`, replacing any existing file
pub fn write_report<P: AsRef<Path>>(path: P, report: &str) -> std::io::Result<()> {
    fs::write(path, report)
}
