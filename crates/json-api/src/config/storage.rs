//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Product file settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// JSON file holding the product catalog
    #[arg(long, env = "PRODUCTS_FILE", default_value = "docs/db/products.json")]
    pub products_file: PathBuf,
}
