//! Violation categories and the tag-to-rule registry.

mod category;
mod registry;

pub use category::Category;
pub use registry::RuleRegistry;
