//! Relational queries over the reactions of a network
use std::collections::{BTreeMap, BTreeSet};

use crate::metabolic_model::network::MetabolicNetwork;
use crate::metabolic_model::reaction::{ComponentRole, Reaction};

/// The reactions a metabolite takes part in, split by the side it appears on
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetaboliteReactions<'n> {
    /// Reactions consuming the metabolite, ordered by reaction id
    pub as_reactant: Vec<&'n Reaction>,
    /// Reactions producing the metabolite, ordered by reaction id
    pub as_product: Vec<&'n Reaction>,
}

impl MetaboliteReactions<'_> {
    pub fn is_empty(&self) -> bool {
        self.as_reactant.is_empty() && self.as_product.is_empty()
    }
}

impl MetabolicNetwork {
    /// Find the reactions consuming and producing the metabolite `metabolite_id`
    ///
    /// Scans every reaction. Unknown ids give empty lists. A reaction listing the metabolite
    /// more than once on one side is reported once for that side.
    pub fn reactions_of_metabolite(&self, metabolite_id: &str) -> MetaboliteReactions<'_> {
        let mut found = MetaboliteReactions::default();
        for reaction in self.reactions_as_list() {
            if reaction.has_reactant(metabolite_id) {
                found.as_reactant.push(reaction);
            }
            if reaction.has_product(metabolite_id) {
                found.as_product.push(reaction);
            }
        }
        found
    }

    /// Find the reactions with a catalyst named exactly `enzyme_name`
    ///
    /// # Note:
    /// Matching is on the gene product name, not its id, and is case sensitive. Distinct
    /// gene products sharing a name are not told apart. Names are looked up among the gene
    /// products of the network, so replacing a gene product changes which reactions match.
    pub fn reactions_catalyzed_by(&self, enzyme_name: &str) -> Vec<&Reaction> {
        let enzyme_ids: BTreeSet<&str> = self
            .gene_products_as_list()
            .into_iter()
            .filter(|g| g.name == enzyme_name)
            .map(|g| g.id.as_str())
            .collect();
        if enzyme_ids.is_empty() {
            return Vec::new();
        }
        self.reactions_as_list()
            .into_iter()
            .filter(|r| r.catalysts.iter().any(|id| enzyme_ids.contains(id.as_str())))
            .collect()
    }

    /// Build a reverse index from metabolite ids to the reactions using them
    ///
    /// The index borrows the network, so no entity can be added while it is alive.
    pub fn usage_index(&self) -> MetaboliteUsageIndex<'_> {
        MetaboliteUsageIndex::new(self)
    }
}

/// Precomputed answer to [`MetabolicNetwork::reactions_of_metabolite`] for every metabolite
#[derive(Debug)]
pub struct MetaboliteUsageIndex<'n> {
    usage: BTreeMap<&'n str, MetaboliteReactions<'n>>,
}

impl<'n> MetaboliteUsageIndex<'n> {
    fn new(network: &'n MetabolicNetwork) -> Self {
        let mut usage: BTreeMap<&'n str, MetaboliteReactions<'n>> = BTreeMap::new();
        // Reactions are visited in id order, so every list ends up ordered by id
        for reaction in network.reactions_as_list() {
            for component in reaction.components() {
                let entry = usage.entry(component.metabolite_id()).or_default();
                let side = match component.role() {
                    ComponentRole::Reactant => &mut entry.as_reactant,
                    ComponentRole::Product => &mut entry.as_product,
                };
                if side.last().map(|r| r.id != reaction.id).unwrap_or(true) {
                    side.push(reaction);
                }
            }
        }
        MetaboliteUsageIndex { usage }
    }

    /// Reactions consuming and producing `metabolite_id`
    pub fn reactions_of_metabolite(&self, metabolite_id: &str) -> MetaboliteReactions<'n> {
        self.usage.get(metabolite_id).cloned().unwrap_or_default()
    }

    /// Whether the metabolite is referenced by any reaction
    pub fn is_used(&self, metabolite_id: &str) -> bool {
        self.usage.contains_key(metabolite_id)
    }

    /// Whether some reaction consumes the metabolite
    pub fn is_consumed(&self, metabolite_id: &str) -> bool {
        self.usage
            .get(metabolite_id)
            .is_some_and(|found| !found.as_reactant.is_empty())
    }

    /// Whether some reaction produces the metabolite
    pub fn is_produced(&self, metabolite_id: &str) -> bool {
        self.usage
            .get(metabolite_id)
            .is_some_and(|found| !found.as_product.is_empty())
    }
}
