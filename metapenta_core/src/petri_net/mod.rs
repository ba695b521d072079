//! The bipartite (Petri net) view of a network.
//!
//! Places and transitions are the two node kinds, every arc joins a place and a transition.
//! Implementors only describe their nodes and arcs, the structural queries (sources, sinks,
//! reachability, shortest paths) are provided on top of that. Nothing here simulates token
//! flow.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::metabolic_model::Keyed;

mod metabolic;

/// Direction of an arc
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArcDirection {
    /// From a place into a transition (the place is consumed)
    PlaceToTransition,
    /// From a transition into a place (the place is produced)
    TransitionToPlace,
}

/// A weighted arc between a place and a transition, both referred to by id
#[derive(Clone, Debug, PartialEq)]
pub struct Arc<'a> {
    pub place: &'a str,
    pub transition: &'a str,
    pub direction: ArcDirection,
    pub weight: f64,
}

/// A step of a path through the net
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathNode<'a> {
    Place(&'a str),
    Transition(&'a str),
}

/// Structural queries over a bipartite graph of places and transitions
pub trait PetriNet {
    /// The node type playing the role of places
    type Place: Keyed;
    /// The node type playing the role of transitions
    type Transition: Keyed;

    /// All places, ordered by id
    fn places(&self) -> Vec<&Self::Place>;

    /// All transitions, ordered by id
    fn transitions(&self) -> Vec<&Self::Transition>;

    /// Look up a place by id
    fn place(&self, id: &str) -> Option<&Self::Place>;

    /// Arcs leading into `transition`
    fn input_arcs<'a>(&'a self, transition: &'a Self::Transition) -> Vec<Arc<'a>>;

    /// Arcs leaving `transition`
    fn output_arcs<'a>(&'a self, transition: &'a Self::Transition) -> Vec<Arc<'a>>;

    /// Every arc of the net, grouped by transition with inputs before outputs
    fn arcs(&self) -> Vec<Arc<'_>> {
        let mut arcs = Vec::new();
        for transition in self.transitions() {
            arcs.extend(self.input_arcs(transition));
            arcs.extend(self.output_arcs(transition));
        }
        arcs
    }

    /// Places without incoming arcs
    ///
    /// A place without any arc at all is both a source and a sink.
    fn sources(&self) -> Vec<&Self::Place> {
        let produced: BTreeSet<&str> = self
            .arcs()
            .into_iter()
            .filter(|arc| arc.direction == ArcDirection::TransitionToPlace)
            .map(|arc| arc.place)
            .collect();
        self.places()
            .into_iter()
            .filter(|p| !produced.contains(p.key()))
            .collect()
    }

    /// Places without outgoing arcs
    fn sinks(&self) -> Vec<&Self::Place> {
        let consumed: BTreeSet<&str> = self
            .arcs()
            .into_iter()
            .filter(|arc| arc.direction == ArcDirection::PlaceToTransition)
            .map(|arc| arc.place)
            .collect();
        self.places()
            .into_iter()
            .filter(|p| !consumed.contains(p.key()))
            .collect()
    }

    /// Places produced by a transition consuming `place_id`, ordered by id
    fn successors(&self, place_id: &str) -> Vec<&Self::Place> {
        let mut next: BTreeSet<&str> = BTreeSet::new();
        for transition in self.transitions() {
            let consumes = self
                .input_arcs(transition)
                .iter()
                .any(|arc| arc.place == place_id);
            if consumes {
                next.extend(self.output_arcs(transition).iter().map(|arc| arc.place));
            }
        }
        next.into_iter().filter_map(|id| self.place(id)).collect()
    }

    /// Places reachable from `place_id` through one or more transitions, ordered by id
    ///
    /// The starting place is only included when it lies on a cycle.
    fn reachable_places(&self, place_id: &str) -> Vec<&Self::Place> {
        let adjacency = place_adjacency(self);
        let mut reached: BTreeSet<&str> = BTreeSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(place_id);
        while let Some(current) = queue.pop_front() {
            for &(next, _) in adjacency.get(current).into_iter().flatten() {
                if reached.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        reached.into_iter().filter_map(|id| self.place(id)).collect()
    }

    /// A shortest path from place `from` to place `to`, alternating places and transitions
    ///
    /// Returns None if either place is missing or `to` can't be reached. Among paths of
    /// equal length the one using the smallest ids at each step is returned.
    fn shortest_path<'a>(&'a self, from: &'a str, to: &'a str) -> Option<Vec<PathNode<'a>>> {
        let start = self.place(from)?.key();
        self.place(to)?;
        if from == to {
            return Some(vec![PathNode::Place(start)]);
        }
        let adjacency = place_adjacency(self);
        // For each visited place, the place and transition it was reached from
        let mut parent: BTreeMap<&str, (&str, &str)> = BTreeMap::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            for &(next, transition) in adjacency.get(current).into_iter().flatten() {
                if next == start || parent.contains_key(next) {
                    continue;
                }
                parent.insert(next, (current, transition));
                if next == to {
                    return Some(unwind_path(&parent, start, next));
                }
                queue.push_back(next);
            }
        }
        None
    }
}

/// Map each place to the (place, transition) pairs one firing away, ordered by transition id
/// then place id
fn place_adjacency<N: PetriNet + ?Sized>(net: &N) -> BTreeMap<&str, Vec<(&str, &str)>> {
    let mut adjacency: BTreeMap<&str, Vec<(&str, &str)>> = BTreeMap::new();
    for transition in net.transitions() {
        let outputs: BTreeSet<&str> = net
            .output_arcs(transition)
            .iter()
            .map(|arc| arc.place)
            .collect();
        let inputs: BTreeSet<&str> = net
            .input_arcs(transition)
            .iter()
            .map(|arc| arc.place)
            .collect();
        for input in inputs {
            let entry = adjacency.entry(input).or_default();
            entry.extend(outputs.iter().map(|&output| (output, transition.key())));
        }
    }
    adjacency
}

fn unwind_path<'a>(
    parent: &BTreeMap<&'a str, (&'a str, &'a str)>,
    start: &'a str,
    end: &'a str,
) -> Vec<PathNode<'a>> {
    let mut path = vec![PathNode::Place(end)];
    let mut current = end;
    while current != start {
        let Some(&(previous, transition)) = parent.get(current) else {
            break;
        };
        path.push(PathNode::Transition(transition));
        path.push(PathNode::Place(previous));
        current = previous;
    }
    path.reverse();
    path
}
