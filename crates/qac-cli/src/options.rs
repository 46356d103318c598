//! # Options Subcommand
//!
//! Prints the static option catalogs the form's choice questions offer.

use std::fmt;

use anyhow::Result;
use clap::Args;

use qac_core::Catalog;

/// Arguments for the `qac options` subcommand.
#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Catalog name, e.g. `brands` or `kfc-products`. Prints every catalog
    /// when omitted.
    pub catalog: Option<String>,
}

/// Execute the options subcommand.
pub fn run_options(args: &OptionsArgs) -> Result<u8> {
    match &args.catalog {
        Some(name) => {
            let catalog: Catalog = name.parse()?;
            print!("{}", CatalogListing(catalog));
        }
        None => {
            for (i, catalog) in Catalog::all().iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!("{}", CatalogListing(*catalog));
            }
        }
    }
    Ok(0)
}

/// A catalog as a heading followed by one numbered option per line.
pub struct CatalogListing(pub Catalog);

impl fmt::Display for CatalogListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = self.0.options();
        writeln!(f, "{} ({} options)", self.0.name(), options.len())?;
        for (i, option) in options.iter().enumerate() {
            writeln!(f, "  {:>2}. {option}", i + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_heading_and_options_in_order() {
        let text = CatalogListing(Catalog::DcWhPositions).to_string();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            format!("dc-wh-positions ({} options)", Catalog::DcWhPositions.options().len())
        );
        let first = Catalog::DcWhPositions.options()[0];
        assert_eq!(lines.next().unwrap(), format!("   1. {first}"));
    }

    #[test]
    fn unknown_catalog_errors() {
        let args = OptionsArgs {
            catalog: Some("sauces".into()),
        };
        let err = run_options(&args).unwrap_err();
        assert!(err.to_string().contains("sauces"));
    }

    #[test]
    fn known_catalog_succeeds() {
        let args = OptionsArgs {
            catalog: Some("complaint-types".into()),
        };
        assert_eq!(run_options(&args).unwrap(), 0);
    }
}
