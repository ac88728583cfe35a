//! Run one creator of a product line

use super::RenditionRow;
use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use kiln_catalog::Catalog;

/// Execute the craft command
pub fn execute(catalog: &Catalog, line: &str, creator: &str, format: OutputFormat) -> CliResult<()> {
    let rendition = catalog.craft(line, creator)?;
    output::print_output(vec![RenditionRow::from(rendition)], format)
}
