//! Process wide defaults used when building entities and loading networks
use std::sync::{LazyLock, RwLock};

pub static CONFIGURATION: LazyLock<RwLock<Configuration>> =
    LazyLock::new(|| RwLock::new(Configuration::default()));

pub struct Configuration {
    /// Compartment assigned to metabolites which don't specify one
    pub default_compartment: String,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// What a loader does when an id appears more than once in a file
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            default_compartment: "c".to_string(),
            lower_bound: -1000.,
            upper_bound: 1000.,
            duplicate_policy: DuplicatePolicy::KeepLast,
        }
    }
}

/// Enum used to specify how duplicate ids are handled while loading a network
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Later entries replace earlier ones, matching the network's own add semantics
    KeepLast,
    /// The first entry wins, later ones are skipped
    KeepFirst,
    /// Loading fails on the first duplicate
    Reject,
}

/// Read the current configuration, recovering the value if the lock was poisoned
pub(crate) fn read_configuration<T>(f: impl FnOnce(&Configuration) -> T) -> T {
    match CONFIGURATION.read() {
        Ok(config) => f(&config),
        Err(poisoned) => f(&poisoned.into_inner()),
    }
}

pub(crate) fn default_compartment() -> String {
    read_configuration(|c| c.default_compartment.clone())
}

pub(crate) fn default_lower_bound() -> f64 {
    read_configuration(|c| c.lower_bound)
}

pub(crate) fn default_upper_bound() -> f64 {
    read_configuration(|c| c.upper_bound)
}

pub(crate) fn duplicate_policy() -> DuplicatePolicy {
    read_configuration(|c| c.duplicate_policy)
}
