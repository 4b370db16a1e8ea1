// Adapters layer: concrete ProductStore implementations.

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod memory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;
pub use memory::InMemoryStore;
