//! This module provides the metabolite struct representing a metabolite

use std::fmt::{Display, Formatter};
use std::hash::Hash;

use derive_builder::Builder;
use serde::Serialize;

use crate::configuration::default_compartment;
use crate::metabolic_model::Keyed;

/// Represents a metabolite, a place of the network's Petri net view
#[derive(Builder, Debug, Clone, Serialize)]
pub struct Metabolite {
    /// Used to identify the metabolite (must be unique within a network)
    #[builder(setter(into))]
    pub id: String,
    /// Human Readable name of the metabolite
    #[builder(setter(into), default = "self.id.clone().unwrap_or_default()")]
    pub name: String,
    /// Which compartment the metabolite is in
    #[builder(setter(into), default = "default_compartment()")]
    pub compartment: String,
    /// Chemical Formula of the metabolite
    #[builder(default = "None")]
    #[serde(rename = "chemicalFormula", skip_serializing_if = "Option::is_none")]
    pub chemical_formula: Option<String>,
    /// Electrical charge of the Metabolite
    #[builder(default = "0")]
    pub charge: i32,
}

impl Metabolite {
    /// Create a new metabolite without a chemical formula
    ///
    /// # Examples
    /// ```rust
    /// use metapenta_core::metabolic_model::metabolite::Metabolite;
    /// let glucose = Metabolite::new("glc__D_c", "D-Glucose", "c");
    /// assert_eq!(glucose.compartment, "c");
    /// assert!(glucose.chemical_formula.is_none());
    /// ```
    pub fn new(id: &str, name: &str, compartment: &str) -> Metabolite {
        Metabolite {
            id: id.to_string(),
            name: name.to_string(),
            compartment: compartment.to_string(),
            chemical_formula: None,
            charge: 0,
        }
    }

    /// Return the metabolite with its chemical formula set
    pub fn with_formula(mut self, formula: &str) -> Metabolite {
        self.chemical_formula = Some(formula.to_string());
        self
    }
}

impl Keyed for Metabolite {
    fn key(&self) -> &str {
        &self.id
    }
}

impl PartialEq for Metabolite {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Metabolite {}

impl Hash for Metabolite {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state); // Hash only depends on id
    }
}

impl Display for Metabolite {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(rendered) => write!(f, "{}", rendered),
            Err(_) => Err(std::fmt::Error),
        }
    }
}
