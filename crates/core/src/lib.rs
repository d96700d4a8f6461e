#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod preloaded;

pub use catalog::Catalog;
pub use preloaded::ContentStore;
