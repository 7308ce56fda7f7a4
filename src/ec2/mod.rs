// Upstream inventory modules
pub mod client;
pub mod error;
pub mod instances;

// Re-export commonly used items
pub use client::{Ec2Inventory, InstanceSource};
pub use error::InventoryError;
pub use instances::flatten_reservations;
