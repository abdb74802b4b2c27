pub mod repository;

pub use repository::{StoreError, TaxStore};
