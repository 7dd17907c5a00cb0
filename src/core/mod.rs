// Core algorithm exports
pub mod compatibility;
pub mod levels;
pub mod matcher;

pub use compatibility::{compute_compatibility, NO_REQUIREMENTS_REASON};
pub use levels::{level_ordinal, meets_requirement};
pub use matcher::Matcher;
