//! Static datasets compiled into the application.
//!
//! - `countries`: selectable countries and their center coordinates

pub mod countries;

pub use countries::CountryCatalog;
