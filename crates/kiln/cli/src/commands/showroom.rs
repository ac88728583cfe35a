//! Build every family with the configured selections

use super::RenditionRow;
use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use kiln_catalog::{Catalog, CatalogConfig};

/// Execute the showroom command
pub fn execute(catalog: &Catalog, config: &CatalogConfig, format: OutputFormat) -> CliResult<()> {
    let stands = catalog.showroom(config)?;
    if format != OutputFormat::Table {
        return output::print_single(&stands, format);
    }

    for stand in stands {
        output::print_heading(&format!("{} ({})", stand.family, stand.selection));
        let rows: Vec<RenditionRow> = stand.renditions.into_iter().map(RenditionRow::from).collect();
        output::print_output(rows, format)?;
        println!();
    }
    Ok(())
}
