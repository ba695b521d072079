//! Module providing the MetabolicNetwork struct and the entities it owns.

pub mod gene;
pub mod metabolite;
pub mod network;
pub mod query;
pub mod reaction;

/// Entities which are identified within a network by a unique string key
///
/// Identity, equality, and cross-network comparison all go through this key, never
/// through the other attributes of an entity.
pub trait Keyed {
    /// The identity key of the entity
    fn key(&self) -> &str;
}
