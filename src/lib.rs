pub mod catalog;
pub mod classification;
pub mod constants;
pub mod exo_errors;
pub mod explorer;
pub mod habitability;
pub mod normalize;
pub mod orbital;
pub mod planet;
pub mod similarity;

pub use catalog::{Catalog, CatalogFilter, CatalogSummary};
pub use exo_errors::ExoError;
pub use explorer::{Analysis, Explorer};
pub use planet::{PlanetId, PlanetRecord, RawPlanetRecord};
