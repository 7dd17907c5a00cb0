// Service exports
pub mod lookup;
pub mod memory;
pub mod postgres;

pub use lookup::{LookupError, OfferRequirementLookup, UserSkillLookup};
pub use memory::InMemoryStore;
pub use postgres::{PostgresClient, PostgresError};
