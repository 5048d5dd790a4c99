pub mod csv_loader;

use crate::model::{LoaderError, PricePoint};

pub use csv_loader::CsvLoader;

/// Source of price rows, in chronological order.
pub trait Loader {
    fn load(&self) -> Result<Vec<PricePoint>, LoaderError>;
}
