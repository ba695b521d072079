//! Petri net view of a [`MetabolicNetwork`]: metabolites are places, reactions are transitions
use crate::metabolic_model::metabolite::Metabolite;
use crate::metabolic_model::network::MetabolicNetwork;
use crate::metabolic_model::reaction::{Reaction, ReactionComponent};
use crate::petri_net::{Arc, ArcDirection, PetriNet};

fn component_arcs<'a>(
    reaction: &'a Reaction,
    components: &'a [ReactionComponent],
    direction: ArcDirection,
) -> Vec<Arc<'a>> {
    components
        .iter()
        .map(|c| Arc {
            place: c.metabolite_id(),
            transition: &reaction.id,
            direction,
            weight: c.stoichiometry(),
        })
        .collect()
}

impl PetriNet for MetabolicNetwork {
    type Place = Metabolite;
    type Transition = Reaction;

    fn places(&self) -> Vec<&Metabolite> {
        self.metabolites_as_list()
    }

    fn transitions(&self) -> Vec<&Reaction> {
        self.reactions_as_list()
    }

    fn place(&self, id: &str) -> Option<&Metabolite> {
        self.get_metabolite(id)
    }

    fn input_arcs<'a>(&'a self, transition: &'a Reaction) -> Vec<Arc<'a>> {
        component_arcs(transition, &transition.reactants, ArcDirection::PlaceToTransition)
    }

    fn output_arcs<'a>(&'a self, transition: &'a Reaction) -> Vec<Arc<'a>> {
        component_arcs(transition, &transition.products, ArcDirection::TransitionToPlace)
    }

    // Answered from the usage index instead of materializing every arc
    fn sources(&self) -> Vec<&Metabolite> {
        let usage = self.usage_index();
        self.metabolites_as_list()
            .into_iter()
            .filter(|m| !usage.is_produced(&m.id))
            .collect()
    }

    fn sinks(&self) -> Vec<&Metabolite> {
        let usage = self.usage_index();
        self.metabolites_as_list()
            .into_iter()
            .filter(|m| !usage.is_consumed(&m.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::metabolic_model::metabolite::Metabolite;
    use crate::metabolic_model::network::MetabolicNetwork;
    use crate::metabolic_model::reaction::ReactionBuilder;
    use crate::petri_net::{Arc, ArcDirection, PathNode, PetriNet};

    fn ids(places: Vec<&Metabolite>) -> Vec<&str> {
        places.into_iter().map(|m| m.id.as_str()).collect()
    }

    /// m1 -> m2 via r1, plus the unused m4
    fn small_network() -> MetabolicNetwork {
        let mut network = MetabolicNetwork::new_empty();
        let m1 = Metabolite::new("m1", "M1", "c");
        let m2 = Metabolite::new("m2", "M2", "c");
        let r1 = ReactionBuilder::default()
            .id("r1")
            .reactant(&m1, 2.0)
            .product(&m2, 1.0)
            .build()
            .unwrap();
        network.add_metabolite(m1);
        network.add_metabolite(m2);
        network.add_metabolite(Metabolite::new("m4", "M4", "c"));
        network.add_reaction(r1);
        network
    }

    /// a -> b -> c -> d, b -> d directly, and c -> a closing a cycle
    fn chain_network() -> MetabolicNetwork {
        let mut network = MetabolicNetwork::new_empty();
        let mets: Vec<Metabolite> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|id| Metabolite::new(id, id, "c"))
            .collect();
        let steps = [("t1", 0, 1), ("t2", 1, 2), ("t3", 2, 3), ("t4", 1, 3), ("t5", 2, 0)];
        for (id, from, to) in steps {
            network.add_reaction(
                ReactionBuilder::default()
                    .id(id)
                    .reactant(&mets[from], 1.0)
                    .product(&mets[to], 1.0)
                    .build()
                    .unwrap(),
            );
        }
        for m in mets {
            network.add_metabolite(m);
        }
        network
    }

    #[test]
    fn arcs_follow_roles() {
        let network = small_network();
        let arcs = network.arcs();
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[0].place, "m1");
        assert_eq!(arcs[0].transition, "r1");
        assert_eq!(arcs[0].direction, ArcDirection::PlaceToTransition);
        assert_eq!(arcs[0].weight, 2.0);
        assert_eq!(
            arcs[1],
            Arc {
                place: "m2",
                transition: "r1",
                direction: ArcDirection::TransitionToPlace,
                weight: 1.0,
            }
        );
    }

    #[test]
    fn sources_and_sinks() {
        let network = small_network();
        assert_eq!(ids(network.sources()), vec!["m1", "m4"]);
        assert_eq!(ids(network.sinks()), vec!["m2", "m4"]);
    }

    #[test]
    fn sources_match_arc_definition() {
        // The overridden implementations must agree with the arc based defaults
        struct ArcsOnly<'n>(&'n MetabolicNetwork);
        impl PetriNet for ArcsOnly<'_> {
            type Place = Metabolite;
            type Transition = crate::metabolic_model::reaction::Reaction;
            fn places(&self) -> Vec<&Self::Place> {
                self.0.places()
            }
            fn transitions(&self) -> Vec<&Self::Transition> {
                self.0.transitions()
            }
            fn place(&self, id: &str) -> Option<&Self::Place> {
                self.0.place(id)
            }
            fn input_arcs<'a>(&'a self, t: &'a Self::Transition) -> Vec<Arc<'a>> {
                self.0.input_arcs(t)
            }
            fn output_arcs<'a>(&'a self, t: &'a Self::Transition) -> Vec<Arc<'a>> {
                self.0.output_arcs(t)
            }
        }
        for network in [small_network(), chain_network()] {
            let view = ArcsOnly(&network);
            assert_eq!(ids(view.sources()), ids(network.sources()));
            assert_eq!(ids(view.sinks()), ids(network.sinks()));
        }
    }

    #[test]
    fn reachability() {
        let network = chain_network();
        assert_eq!(ids(network.successors("b")), vec!["c", "d"]);
        // a lies on the cycle a -> b -> c -> a
        assert_eq!(ids(network.reachable_places("a")), vec!["a", "b", "c", "d"]);
        assert!(network.reachable_places("d").is_empty());
        assert!(network.reachable_places("e").is_empty());
        assert_eq!(ids(network.sources()), vec!["e"]);
        assert_eq!(ids(network.sinks()), vec!["d", "e"]);
    }

    #[test]
    fn shortest_paths() {
        let network = chain_network();
        assert_eq!(
            network.shortest_path("a", "d"),
            Some(vec![
                PathNode::Place("a"),
                PathNode::Transition("t1"),
                PathNode::Place("b"),
                PathNode::Transition("t4"),
                PathNode::Place("d"),
            ])
        );
        assert_eq!(network.shortest_path("c", "c"), Some(vec![PathNode::Place("c")]));
        assert_eq!(network.shortest_path("d", "a"), None);
        assert_eq!(network.shortest_path("a", "e"), None);
        assert_eq!(network.shortest_path("a", "missing"), None);
    }
}
