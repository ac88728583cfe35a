//! Build a whole family in one variant

use super::RenditionRow;
use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use kiln_catalog::Catalog;
use tracing::info;

/// Execute the build command
pub fn execute(catalog: &Catalog, family: &str, variant: &str, format: OutputFormat) -> CliResult<()> {
    let renditions = catalog.build(family, variant)?;
    info!(family, variant, products = renditions.len(), "Built family");
    let rows: Vec<RenditionRow> = renditions.into_iter().map(RenditionRow::from).collect();
    output::print_output(rows, format)
}
