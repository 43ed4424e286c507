pub mod create;
pub mod find_by_id;
pub mod load_audits;
pub mod pagination;
pub mod update;

// Re-exports
pub use create::*;
pub use find_by_id::*;
pub use load_audits::*;
pub use pagination::*;
pub use update::*;
