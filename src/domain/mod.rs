// Domain layer: the product model and the storage port. No AWS types here.

pub mod model;
pub mod ports;

pub use model::{FieldViolation, Product};
pub use ports::{ProductStore, StoreError, StoreResult, SCAN_PAGE_SIZE};
