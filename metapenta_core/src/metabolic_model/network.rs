//! This module provides the MetabolicNetwork struct, which owns the metabolites, reactions and
//! gene products of a network, and the operations comparing two networks
use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::metabolic_model::gene::GeneProduct;
use crate::metabolic_model::metabolite::Metabolite;
use crate::metabolic_model::reaction::{ComponentRole, Reaction, ReactionComponent};
use crate::metabolic_model::Keyed;

/// Represents a metabolic network of reactions on metabolites
///
/// Entities are indexed by their id. Adding an entity whose id is already present replaces
/// the previous entry (last write wins). All listings are ordered by id.
#[derive(Clone, Debug, Default)]
pub struct MetabolicNetwork {
    /// Optional name of the network
    name: Option<String>,
    /// Map of metabolite ids to Metabolites
    metabolites: BTreeMap<String, Metabolite>,
    /// Map of reaction ids to Reactions
    reactions: BTreeMap<String, Reaction>,
    /// Map of gene product ids to GeneProducts
    gene_products: BTreeMap<String, GeneProduct>,
    /// Distinct compartments of all metabolites added so far
    compartments: BTreeSet<String>,
}

impl MetabolicNetwork {
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    // region Adding entities
    /// Add a metabolite to the network, replacing any metabolite with the same id
    ///
    /// # Examples
    /// ```rust
    /// use metapenta_core::metabolic_model::metabolite::Metabolite;
    /// use metapenta_core::metabolic_model::network::MetabolicNetwork;
    /// let mut network = MetabolicNetwork::new_empty();
    /// network.add_metabolite(Metabolite::new("atp_c", "ATP", "c"));
    /// network.add_metabolite(Metabolite::new("atp_c", "Adenosine triphosphate", "c"));
    /// assert_eq!(network.get_metabolite("atp_c").unwrap().name, "Adenosine triphosphate");
    /// ```
    pub fn add_metabolite(&mut self, metabolite: Metabolite) {
        self.compartments.insert(metabolite.compartment.clone());
        let id = metabolite.id.clone();
        if let Some(previous) = self.metabolites.insert(id, metabolite) {
            debug!("Replaced existing metabolite with id {}", previous.id);
        }
    }

    /// Add a reaction to the network, replacing any reaction with the same id
    ///
    /// The metabolites referenced by the reaction's components are expected to have been
    /// added already, this is not checked here.
    pub fn add_reaction(&mut self, reaction: Reaction) {
        let id = reaction.id.clone();
        if let Some(previous) = self.reactions.insert(id, reaction) {
            debug!("Replaced existing reaction with id {}", previous.id);
        }
    }

    /// Add a gene product to the network, replacing any gene product with the same id
    pub fn add_gene_product(&mut self, gene_product: GeneProduct) {
        let id = gene_product.id.clone();
        if let Some(previous) = self.gene_products.insert(id, gene_product) {
            debug!("Replaced existing gene product with id {}", previous.id);
        }
    }
    // endregion Adding entities

    // region Lookups
    pub fn get_metabolite(&self, id: &str) -> Option<&Metabolite> {
        self.metabolites.get(id)
    }

    pub fn get_reaction(&self, id: &str) -> Option<&Reaction> {
        self.reactions.get(id)
    }

    pub fn get_gene_product(&self, id: &str) -> Option<&GeneProduct> {
        self.gene_products.get(id)
    }

    pub fn contains_metabolite(&self, id: &str) -> bool {
        self.metabolites.contains_key(id)
    }

    pub fn contains_reaction(&self, id: &str) -> bool {
        self.reactions.contains_key(id)
    }

    pub fn contains_gene_product(&self, id: &str) -> bool {
        self.gene_products.contains_key(id)
    }

    /// Create a component referring to the metabolite `metabolite_id`
    ///
    /// Returns None if no metabolite with that id has been added, which lets loaders
    /// enforce that metabolites are added before the reactions using them.
    pub fn component(
        &self,
        metabolite_id: &str,
        stoichiometry: f64,
        role: ComponentRole,
    ) -> Option<ReactionComponent> {
        self.get_metabolite(metabolite_id)
            .map(|m| ReactionComponent::new(m, stoichiometry, role))
    }

    /// Names of the catalysts of the reaction `reaction_id`, None if there is no such reaction
    ///
    /// Names are those of the gene products currently in the network. Catalyst ids with no
    /// gene product are skipped.
    pub fn enzyme_names(&self, reaction_id: &str) -> Option<Vec<&str>> {
        self.get_reaction(reaction_id).map(|r| {
            r.catalysts
                .iter()
                .filter_map(|id| self.gene_products.get(id))
                .map(|g| g.name.as_str())
                .collect()
        })
    }
    // endregion Lookups

    // region Listings
    /// Metabolites ordered by id
    pub fn metabolites_as_list(&self) -> Vec<&Metabolite> {
        self.metabolites.values().collect()
    }

    /// Metabolite ids in order
    pub fn metabolite_ids_as_list(&self) -> Vec<&str> {
        self.metabolites.keys().map(String::as_str).collect()
    }

    /// Reactions ordered by id
    pub fn reactions_as_list(&self) -> Vec<&Reaction> {
        self.reactions.values().collect()
    }

    /// Reaction ids in order
    pub fn reaction_ids_as_list(&self) -> Vec<&str> {
        self.reactions.keys().map(String::as_str).collect()
    }

    /// Gene products ordered by id
    pub fn gene_products_as_list(&self) -> Vec<&GeneProduct> {
        self.gene_products.values().collect()
    }

    /// Distinct compartments of the metabolites added so far, in lexicographic order
    ///
    /// Compartments are never removed, even if every metabolite of a compartment has been
    /// replaced by one in another compartment.
    pub fn compartments(&self) -> Vec<&str> {
        self.compartments.iter().map(String::as_str).collect()
    }

    pub fn metabolite_count(&self) -> usize {
        self.metabolites.len()
    }

    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }

    pub fn gene_product_count(&self) -> usize {
        self.gene_products.len()
    }
    // endregion Listings

    // region Network comparison
    /// Metabolites of `other` whose id is also present in this network
    pub fn common_metabolites<'o>(&self, other: &'o MetabolicNetwork) -> Vec<&'o Metabolite> {
        common_metabolites(self, other)
    }

    /// Reactions of `other` whose id is also present in this network
    pub fn common_reactions<'o>(&self, other: &'o MetabolicNetwork) -> Vec<&'o Reaction> {
        common_reactions(self, other)
    }
    // endregion Network comparison
}

/// Keep the items whose key satisfies `present`, preserving their order
fn filter_by_key<'a, T: Keyed>(items: Vec<&'a T>, present: impl Fn(&str) -> bool) -> Vec<&'a T> {
    items.into_iter().filter(|item| present(item.key())).collect()
}

/// Metabolites of `b` whose id is also a metabolite id of `a`
///
/// The returned metabolites are `b`'s instances, ordered by id. Only ids are compared, the
/// other attributes of the metabolites may differ between the networks.
///
/// # Examples
/// ```rust
/// use metapenta_core::metabolic_model::metabolite::Metabolite;
/// use metapenta_core::metabolic_model::network::{common_metabolites, MetabolicNetwork};
/// let mut a = MetabolicNetwork::new_empty();
/// a.add_metabolite(Metabolite::new("m1", "M1", "c"));
/// a.add_metabolite(Metabolite::new("m2", "M2", "c"));
/// let mut b = MetabolicNetwork::new_empty();
/// b.add_metabolite(Metabolite::new("m2", "M2 in b", "e"));
/// b.add_metabolite(Metabolite::new("m3", "M3", "c"));
/// let common = common_metabolites(&a, &b);
/// assert_eq!(common.len(), 1);
/// assert_eq!(common[0].name, "M2 in b");
/// ```
pub fn common_metabolites<'b>(
    a: &MetabolicNetwork,
    b: &'b MetabolicNetwork,
) -> Vec<&'b Metabolite> {
    filter_by_key(b.metabolites_as_list(), |id| a.contains_metabolite(id))
}

/// Reactions of `b` whose id is also a reaction id of `a`, ordered by id
pub fn common_reactions<'b>(a: &MetabolicNetwork, b: &'b MetabolicNetwork) -> Vec<&'b Reaction> {
    filter_by_key(b.reactions_as_list(), |id| a.contains_reaction(id))
}

/// Gene products of `b` whose id is also a gene product id of `a`, ordered by id
pub fn common_gene_products<'b>(
    a: &MetabolicNetwork,
    b: &'b MetabolicNetwork,
) -> Vec<&'b GeneProduct> {
    filter_by_key(b.gene_products_as_list(), |id| a.contains_gene_product(id))
}

/// Metabolites of `b` whose id is not a metabolite id of `a`, ordered by id
pub fn unique_metabolites<'b>(
    a: &MetabolicNetwork,
    b: &'b MetabolicNetwork,
) -> Vec<&'b Metabolite> {
    filter_by_key(b.metabolites_as_list(), |id| !a.contains_metabolite(id))
}

/// Reactions of `b` whose id is not a reaction id of `a`, ordered by id
pub fn unique_reactions<'b>(a: &MetabolicNetwork, b: &'b MetabolicNetwork) -> Vec<&'b Reaction> {
    filter_by_key(b.reactions_as_list(), |id| !a.contains_reaction(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metabolic_model::reaction::ReactionBuilder;

    fn setup_network() -> MetabolicNetwork {
        let mut network = MetabolicNetwork::new_empty();
        let m1 = Metabolite::new("m1", "Metabolite 1", "c");
        let m2 = Metabolite::new("m2", "Metabolite 2", "c");
        let r1 = ReactionBuilder::default()
            .id("r1")
            .reactant(&m1, 1.0)
            .product(&m2, 1.0)
            .build()
            .unwrap();
        network.add_metabolite(m2);
        network.add_metabolite(m1);
        network.add_reaction(r1);
        network
    }

    #[test]
    fn overwrite_keeps_last() {
        let mut network = setup_network();
        network.add_metabolite(Metabolite::new("m1", "Replaced", "e").with_formula("H2O"));
        let met = network.get_metabolite("m1").unwrap();
        assert_eq!(met.name, "Replaced");
        assert_eq!(met.compartment, "e");
        assert_eq!(met.chemical_formula.as_deref(), Some("H2O"));
        assert_eq!(network.metabolite_count(), 2);
        // The compartment of the replaced metabolite is still recorded
        assert_eq!(network.compartments(), vec!["c", "e"]);

        network.add_gene_product(GeneProduct::new("g1", "HK1"));
        network.add_gene_product(GeneProduct::new("g1", "HK2"));
        assert_eq!(network.get_gene_product("g1").unwrap().name, "HK2");
        assert_eq!(network.gene_product_count(), 1);

        let m1 = network.get_metabolite("m1").unwrap().clone();
        let m2 = network.get_metabolite("m2").unwrap().clone();
        let reversed = ReactionBuilder::default()
            .id("r1")
            .name("Reversed")
            .reactant(&m2, 1.0)
            .product(&m1, 1.0)
            .build()
            .unwrap();
        network.add_reaction(reversed);
        assert_eq!(network.reaction_count(), 1);
        let rxn = network.get_reaction("r1").unwrap();
        assert_eq!(rxn.name, "Reversed");
        assert!(rxn.has_reactant("m2"));
        assert!(rxn.has_product("m1"));
        assert!(network.reactions_of_metabolite("m1").as_reactant.is_empty());
    }

    #[test]
    fn catalyst_names_follow_overwrite() {
        let mut network = setup_network();
        let hk = GeneProduct::new("g1", "HK1");
        let m1 = network.get_metabolite("m1").unwrap().clone();
        let hex = ReactionBuilder::default()
            .id("HEX")
            .reactant(&m1, 1.0)
            .catalyst(&hk)
            .build()
            .unwrap();
        network.add_gene_product(hk);
        network.add_reaction(hex);
        assert_eq!(network.enzyme_names("HEX"), Some(vec!["HK1"]));

        network.add_gene_product(GeneProduct::new("g1", "HK2"));
        assert_eq!(network.enzyme_names("HEX"), Some(vec!["HK2"]));
        let by_new: Vec<&str> = network
            .reactions_catalyzed_by("HK2")
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(by_new, vec!["HEX"]);
        assert!(network.reactions_catalyzed_by("HK1").is_empty());
    }

    #[test]
    fn missing_lookups() {
        let network = setup_network();
        assert!(network.get_metabolite("m9").is_none());
        assert!(network.get_reaction("r9").is_none());
        assert!(network.get_gene_product("g9").is_none());
        assert!(network.enzyme_names("r9").is_none());
        assert_eq!(network.enzyme_names("r1"), Some(vec![]));
    }

    #[test]
    fn listings_ordered_by_id() {
        let mut network = setup_network();
        network.add_metabolite(Metabolite::new("a0", "First", "p"));
        let m1 = network.get_metabolite("m1").unwrap().clone();
        let exchange = ReactionBuilder::default()
            .id("EX_m1")
            .product(&m1, 1.0)
            .build()
            .unwrap();
        network.add_reaction(exchange);
        assert_eq!(network.metabolite_ids_as_list(), vec!["a0", "m1", "m2"]);
        let ids: Vec<&str> = network.metabolites_as_list().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a0", "m1", "m2"]);
        assert_eq!(network.reaction_ids_as_list(), vec!["EX_m1", "r1"]);
        assert_eq!(network.reactions_as_list()[1].id, "r1");
    }

    #[test]
    fn component_requires_metabolite() {
        let network = setup_network();
        let component = network.component("m1", -2.0, ComponentRole::Reactant).unwrap();
        assert_eq!(component.metabolite_id(), "m1");
        assert_eq!(component.stoichiometry(), 2.0);
        assert!(network.component("m9", 1.0, ComponentRole::Product).is_none());
    }

    #[test]
    fn common_entities() {
        let a = setup_network();
        let mut b = MetabolicNetwork::new_empty();
        b.add_metabolite(Metabolite::new("m3", "Metabolite 3", "c"));
        b.add_metabolite(Metabolite::new("m2", "Metabolite 2 in b", "e"));

        let common = common_metabolites(&a, &b);
        assert_eq!(common.len(), 1);
        assert_eq!(common[0].id, "m2");
        // Instances come from the second network
        assert_eq!(common[0].name, "Metabolite 2 in b");
        let swapped = b.common_metabolites(&a);
        assert_eq!(swapped[0].name, "Metabolite 2");

        assert!(common_reactions(&a, &b).is_empty());
        let unique: Vec<&str> = unique_metabolites(&a, &b).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(unique, vec!["m3"]);
    }

    #[test]
    fn compare_with_self() {
        let mut a = setup_network();
        a.add_gene_product(GeneProduct::new("g1", "HK1"));
        let all_metabolites = a.metabolites_as_list();
        assert_eq!(a.common_metabolites(&a), all_metabolites);
        assert_eq!(a.common_reactions(&a), a.reactions_as_list());
        assert_eq!(common_gene_products(&a, &a).len(), 1);
        assert!(unique_reactions(&a, &a).is_empty());
    }
}
