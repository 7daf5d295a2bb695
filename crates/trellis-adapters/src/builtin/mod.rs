//! The built-in catalog: six blueprints, their content builders and the
//! canonical version table.

pub mod catalog;
pub mod content;
pub mod store;
pub mod versions;

pub use store::BuiltinStore;
pub use versions::canonical;
