pub mod auditable;
pub mod identifiable;
pub mod customer;

// Re-exports
pub use auditable::*;
pub use identifiable::*;
pub use customer::*;
