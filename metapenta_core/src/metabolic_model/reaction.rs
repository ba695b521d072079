//! This module provides structs for representing reactions and their components
use std::fmt::{Display, Formatter};
use std::hash::Hash;

use derive_builder::Builder;
use serde::Serialize;

use crate::configuration::{default_lower_bound, default_upper_bound};
use crate::metabolic_model::gene::GeneProduct;
use crate::metabolic_model::metabolite::Metabolite;
use crate::metabolic_model::Keyed;

/// Which side of a reaction a component is on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentRole {
    /// Consumed by the reaction (an arc from the place to the transition)
    Reactant,
    /// Produced by the reaction (an arc from the transition to the place)
    Product,
}

/// A metabolite taking part in a reaction, together with its stoichiometric coefficient
///
/// The component only refers to its metabolite by id, the metabolite itself is owned by the
/// network. A component can only be created from an existing [`Metabolite`] (or through
/// [`MetabolicNetwork::component`](crate::metabolic_model::network::MetabolicNetwork::component),
/// which checks that the metabolite has been added).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReactionComponent {
    #[serde(rename = "metabolite")]
    metabolite_id: String,
    stoichiometry: f64,
    role: ComponentRole,
}

impl ReactionComponent {
    /// Create a new component, the stoichiometry is stored as a magnitude since the
    /// direction is carried by `role`
    pub fn new(metabolite: &Metabolite, stoichiometry: f64, role: ComponentRole) -> Self {
        ReactionComponent {
            metabolite_id: metabolite.id.clone(),
            stoichiometry: stoichiometry.abs(),
            role,
        }
    }

    /// Id of the metabolite this component refers to
    pub fn metabolite_id(&self) -> &str {
        &self.metabolite_id
    }

    pub fn stoichiometry(&self) -> f64 {
        self.stoichiometry
    }

    pub fn role(&self) -> ComponentRole {
        self.role
    }
}

impl Display for ReactionComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(rendered) => write!(f, "{}", rendered),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

/// Represents a reaction in the metabolic network, a transition of its Petri net view
#[derive(Builder, Debug, Clone, Serialize)]
#[builder(build_fn(validate = "Self::validate"))]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    /// Used to identify the reaction
    #[builder(setter(into))]
    pub id: String,
    /// Human-readable reaction name
    #[builder(setter(into), default = "self.id.clone().unwrap_or_default()")]
    pub name: String,
    /// Consumed metabolites, in declaration order
    #[builder(default = "Vec::new()")]
    pub reactants: Vec<ReactionComponent>,
    /// Produced metabolites, in declaration order
    #[builder(default = "Vec::new()")]
    pub products: Vec<ReactionComponent>,
    /// Ids of the gene products catalyzing the reaction, without repeats
    ///
    /// The gene products themselves are owned by the network, names are resolved there.
    #[builder(setter(custom), default = "Vec::new()")]
    pub catalysts: Vec<String>,
    /// Whether the reaction can run backwards, defaults to a negative lower bound
    #[builder(default = "self.lower_bound.unwrap_or_else(default_lower_bound) < 0.")]
    pub reversible: bool,
    /// Lower flux bound
    #[builder(default = "default_lower_bound()")]
    pub lower_bound: f64,
    /// Upper flux bound
    #[builder(default = "default_upper_bound()")]
    pub upper_bound: f64,
}

impl ReactionBuilder {
    /// Add a consumed metabolite
    pub fn reactant(&mut self, metabolite: &Metabolite, stoichiometry: f64) -> &mut Self {
        self.reactants
            .get_or_insert_with(Vec::new)
            .push(ReactionComponent::new(
                metabolite,
                stoichiometry,
                ComponentRole::Reactant,
            ));
        self
    }

    /// Add a produced metabolite
    pub fn product(&mut self, metabolite: &Metabolite, stoichiometry: f64) -> &mut Self {
        self.products
            .get_or_insert_with(Vec::new)
            .push(ReactionComponent::new(
                metabolite,
                stoichiometry,
                ComponentRole::Product,
            ));
        self
    }

    /// Add a single catalyst, ignored if a catalyst with the same id is already present
    pub fn catalyst(&mut self, gene: &GeneProduct) -> &mut Self {
        let catalysts = self.catalysts.get_or_insert_with(Vec::new);
        if !catalysts.contains(&gene.id) {
            catalysts.push(gene.id.clone());
        }
        self
    }

    /// Set the catalysts, keeping the first occurrence of each id
    pub fn catalysts(&mut self, genes: &[GeneProduct]) -> &mut Self {
        self.catalysts = Some(Vec::new());
        for gene in genes {
            self.catalyst(gene);
        }
        self
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(ref reactants) = self.reactants {
            if reactants.iter().any(|c| c.role != ComponentRole::Reactant) {
                return Err("Product component found among the reactants".to_string());
            }
        }
        if let Some(ref products) = self.products {
            if products.iter().any(|c| c.role != ComponentRole::Product) {
                return Err("Reactant component found among the products".to_string());
            }
        }
        Ok(())
    }
}

impl Reaction {
    /// Whether the reaction lacks reactants or products (an exchange or boundary reaction)
    pub fn is_boundary(&self) -> bool {
        self.reactants.is_empty() || self.products.is_empty()
    }

    pub fn is_reversible(&self) -> bool {
        self.reversible
    }

    /// Iterate over the reactant and product components
    pub fn components(&self) -> impl Iterator<Item = &ReactionComponent> {
        self.reactants.iter().chain(self.products.iter())
    }

    /// Whether the metabolite with id `metabolite_id` is consumed by this reaction
    pub fn has_reactant(&self, metabolite_id: &str) -> bool {
        self.reactants
            .iter()
            .any(|c| c.metabolite_id == metabolite_id)
    }

    /// Whether the metabolite with id `metabolite_id` is produced by this reaction
    pub fn has_product(&self, metabolite_id: &str) -> bool {
        self.products.iter().any(|c| c.metabolite_id == metabolite_id)
    }

    /// Whether the gene product with id `gene_id` catalyzes this reaction
    pub fn has_catalyst(&self, gene_id: &str) -> bool {
        self.catalysts.iter().any(|id| id == gene_id)
    }
}

impl Keyed for Reaction {
    fn key(&self) -> &str {
        &self.id
    }
}

impl PartialEq for Reaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Reaction {}

impl Hash for Reaction {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Reaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(rendered) => write!(f, "{}", rendered),
            Err(_) => Err(std::fmt::Error),
        }
    }
}
