pub mod aggregate;
pub mod error;
pub mod filters;
pub mod form;

pub use aggregate::{CatalogItem, CatalogItemId};
pub use error::CatalogError;
pub use filters::CatalogFilters;
pub use form::{CatalogItemForm, CatalogItemFormErrors};
