//! Catalog command - prints the keyword table the server would use.

use super::load_catalog;
use crate::cli::CatalogArgs;
use crate::output::{OutputFormat, print_table};

/// Run the catalog command
pub fn run(args: &CatalogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(&args.catalog)?;

    match OutputFormat::from(args.format) {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = catalog
                .categories()
                .iter()
                .flat_map(|category| {
                    let keywords = category.keywords.join(", ");
                    category.tools.iter().map(move |tool| {
                        vec![
                            category.name.clone(),
                            tool.name.clone(),
                            tool.url.clone(),
                            keywords.clone(),
                        ]
                    })
                })
                .collect();
            print_table(&["CATEGORY", "TOOL", "URL", "KEYWORDS"], &rows);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
    }

    Ok(())
}
