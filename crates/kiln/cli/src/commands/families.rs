//! List catalog families

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use kiln_catalog::{Catalog, FamilyEntry};
use serde::Serialize;
use tabled::Tabled;

/// Table row for family display
#[derive(Debug, Serialize, Tabled)]
struct FamilyRow {
    /// Family or product line name
    family: String,
    /// factory or creator
    kind: String,
    /// Registered variant or creator keys
    keys: String,
}

impl From<FamilyEntry> for FamilyRow {
    fn from(entry: FamilyEntry) -> Self {
        let keys: Vec<&str> = entry.keys.iter().map(|k| k.as_str()).collect();
        Self {
            family: entry.name,
            kind: entry.kind.to_string(),
            keys: keys.join(", "),
        }
    }
}

/// Execute the families command
pub fn execute(catalog: &Catalog, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<FamilyRow> = catalog.families().into_iter().map(FamilyRow::from).collect();
            output::print_output(rows, format)
        }
        _ => output::print_single(&catalog.families(), format),
    }
}
