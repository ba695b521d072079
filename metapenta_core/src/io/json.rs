//! Module providing JSON input for metabolic networks stored in the COBRA JSON format
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::configuration::{duplicate_policy, DuplicatePolicy};
use crate::io::gene_rule::{parse_gene_rule, GeneRuleParseError};
use crate::metabolic_model::gene::GeneProduct;
use crate::metabolic_model::metabolite::{Metabolite, MetaboliteBuilder, MetaboliteBuilderError};
use crate::metabolic_model::network::MetabolicNetwork;
use crate::metabolic_model::reaction::{ComponentRole, ReactionBuilder, ReactionBuilderError};

// region JSON Model
/// Represents a JSON serialized model, only the fields used by the network are read
#[derive(Deserialize)]
struct JsonModel {
    metabolites: Vec<JsonMetabolite>,
    reactions: Vec<JsonReaction>,
    #[serde(default)]
    genes: Vec<JsonGene>,
    id: Option<String>,
    name: Option<String>,
}

#[derive(Deserialize)]
struct JsonMetabolite {
    id: String,
    name: Option<String>,
    compartment: Option<String>,
    charge: Option<i32>,
    formula: Option<String>,
}

#[derive(Deserialize)]
struct JsonReaction {
    id: String,
    name: Option<String>,
    /// Stoichiometry keyed by metabolite id, negative for reactants
    metabolites: IndexMap<String, f64>,
    lower_bound: Option<f64>,
    upper_bound: Option<f64>,
    #[serde(default)]
    gene_reaction_rule: String,
}

#[derive(Deserialize)]
struct JsonGene {
    id: String,
    name: Option<String>,
}
// endregion JSON Model

// region Conversions
impl From<JsonGene> for GeneProduct {
    fn from(g: JsonGene) -> Self {
        let name = match g.name {
            Some(name) if !name.is_empty() => name,
            _ => g.id.clone(),
        };
        GeneProduct { id: g.id, name }
    }
}

impl TryFrom<JsonMetabolite> for Metabolite {
    type Error = MetaboliteBuilderError;

    fn try_from(m: JsonMetabolite) -> Result<Self, Self::Error> {
        let mut builder = MetaboliteBuilder::default();
        builder
            .id(m.id)
            .chemical_formula(m.formula)
            .charge(m.charge.unwrap_or_default());
        if let Some(name) = m.name.filter(|n| !n.is_empty()) {
            builder.name(name);
        }
        if let Some(compartment) = m.compartment.filter(|c| !c.is_empty()) {
            builder.compartment(compartment);
        }
        builder.build()
    }
}
// endregion Conversions

impl MetabolicNetwork {
    /// Read a network from a COBRA JSON file, handling duplicate ids according to the
    /// configured [`DuplicatePolicy`]
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<MetabolicNetwork, LoadError> {
        MetabolicNetwork::read_json_with_policy(path, duplicate_policy())
    }

    /// Read a network from a COBRA JSON file
    pub fn read_json_with_policy<P: AsRef<Path>>(
        path: P,
        policy: DuplicatePolicy,
    ) -> Result<MetabolicNetwork, LoadError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let network = MetabolicNetwork::from_json_str(&data, policy)?;
        info!(
            "Loaded {} with {} metabolites, {} reactions and {} gene products",
            path.display(),
            network.metabolite_count(),
            network.reaction_count(),
            network.gene_product_count()
        );
        Ok(network)
    }

    /// Build a network from a COBRA JSON string
    ///
    /// Gene products are added first, then metabolites, then reactions, so that every
    /// reaction can be checked against the metabolites it references.
    pub fn from_json_str(
        data: &str,
        policy: DuplicatePolicy,
    ) -> Result<MetabolicNetwork, LoadError> {
        let json_model: JsonModel = serde_json::from_str(data)?;
        let mut network = MetabolicNetwork::new_empty();
        if let Some(name) = json_model.name.or(json_model.id) {
            network.set_name(&name);
        }

        let mut seen = HashSet::new();
        for g in json_model.genes {
            if admit(&mut seen, "gene", &g.id, policy)? {
                network.add_gene_product(GeneProduct::from(g));
            }
        }

        seen.clear();
        for m in json_model.metabolites {
            if admit(&mut seen, "metabolite", &m.id, policy)? {
                network.add_metabolite(Metabolite::try_from(m)?);
            }
        }

        seen.clear();
        for rxn in json_model.reactions {
            if !admit(&mut seen, "reaction", &rxn.id, policy)? {
                continue;
            }
            let mut builder = ReactionBuilder::default();
            builder.id(rxn.id.clone());
            if let Some(name) = rxn.name.filter(|n| !n.is_empty()) {
                builder.name(name);
            }
            if let Some(lower_bound) = rxn.lower_bound {
                builder.lower_bound(lower_bound);
            }
            if let Some(upper_bound) = rxn.upper_bound {
                builder.upper_bound(upper_bound);
            }

            let mut reactants = Vec::new();
            let mut products = Vec::new();
            for (metabolite_id, coefficient) in &rxn.metabolites {
                let role = if *coefficient < 0. {
                    ComponentRole::Reactant
                } else if *coefficient > 0. {
                    ComponentRole::Product
                } else {
                    continue;
                };
                let component = network
                    .component(metabolite_id, *coefficient, role)
                    .ok_or_else(|| LoadError::UnknownMetabolite {
                        reaction: rxn.id.clone(),
                        metabolite: metabolite_id.clone(),
                    })?;
                match role {
                    ComponentRole::Reactant => reactants.push(component),
                    ComponentRole::Product => products.push(component),
                }
            }
            builder.reactants(reactants).products(products);

            if !rxn.gene_reaction_rule.trim().is_empty() {
                let rule = parse_gene_rule(&rxn.gene_reaction_rule).map_err(|source| {
                    LoadError::InvalidGeneRule {
                        reaction: rxn.id.clone(),
                        source,
                    }
                })?;
                for gene_id in rule.gene_ids() {
                    if !network.contains_gene_product(gene_id) {
                        debug!("Adding gene {} referenced by reaction {}", gene_id, rxn.id);
                        network.add_gene_product(GeneProduct::new(gene_id, gene_id));
                    }
                    if let Some(gene) = network.get_gene_product(gene_id) {
                        builder.catalyst(gene);
                    }
                }
            }
            network.add_reaction(builder.build()?);
        }
        Ok(network)
    }
}

/// Record `id` as seen, returning whether the entity should be added under `policy`
fn admit(
    seen: &mut HashSet<String>,
    kind: &'static str,
    id: &str,
    policy: DuplicatePolicy,
) -> Result<bool, LoadError> {
    if seen.insert(id.to_string()) {
        return Ok(true);
    }
    match policy {
        DuplicatePolicy::KeepLast => {
            warn!("Duplicate {} id {}, keeping the last definition", kind, id);
            Ok(true)
        }
        DuplicatePolicy::KeepFirst => {
            warn!("Duplicate {} id {}, keeping the first definition", kind, id);
            Ok(false)
        }
        DuplicatePolicy::Reject => Err(LoadError::DuplicateId {
            kind,
            id: id.to_string(),
        }),
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Unable to read file")]
    UnableToRead(#[from] std::io::Error),
    #[error("Unable to parse json")]
    UnableToParse(#[from] serde_json::Error),
    #[error("Unable to parse the gene reaction rule of reaction {reaction}")]
    InvalidGeneRule {
        reaction: String,
        source: GeneRuleParseError,
    },
    #[error("Reaction {reaction} references metabolite {metabolite} which is not in the network")]
    UnknownMetabolite { reaction: String, metabolite: String },
    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("Unable to build metabolite")]
    UnableToBuildMetabolite(#[from] MetaboliteBuilderError),
    #[error("Unable to build reaction")]
    UnableToBuildReaction(#[from] ReactionBuilderError),
}
