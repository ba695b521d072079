//! This module provides the GeneProduct struct, representing an enzyme which catalyzes reactions
use std::fmt::{Display, Formatter};
use std::hash::Hash;

use derive_builder::Builder;
use serde::Serialize;

use crate::metabolic_model::Keyed;

/// Structure Representing a gene product (an enzyme or other catalyst)
#[derive(Builder, Clone, Debug, Serialize)]
pub struct GeneProduct {
    /// Used to identify the gene product
    #[builder(setter(into))]
    pub id: String,
    /// Human Readable name, used when searching for the reactions an enzyme catalyzes
    #[builder(setter(into), default = "self.id.clone().unwrap_or_default()")]
    pub name: String,
}

impl GeneProduct {
    pub fn new(id: &str, name: &str) -> GeneProduct {
        GeneProduct {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

impl Keyed for GeneProduct {
    fn key(&self) -> &str {
        &self.id
    }
}

impl PartialEq for GeneProduct {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GeneProduct {}

impl Hash for GeneProduct {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for GeneProduct {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(rendered) => write!(f, "{}", rendered),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_defaults_to_id() {
        let gene = GeneProductBuilder::default().id("b1241").build().unwrap();
        assert_eq!(gene.name, "b1241");
        let gene = GeneProductBuilder::default()
            .id("b1241")
            .name("adhE")
            .build()
            .unwrap();
        assert_eq!(gene.name, "adhE");
    }

    #[test]
    fn display() {
        let gene = GeneProduct::new("b3916", "pfkA");
        assert_eq!(format!("{}", gene), r#"{"id":"b3916","name":"pfkA"}"#);
    }
}
