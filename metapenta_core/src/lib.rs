//! Core rust implementation of Metapenta, a crate for structural queries over metabolic
//! networks viewed as bipartite (Petri net) graphs.

pub mod configuration;
pub mod io;
pub mod metabolic_model;
pub mod petri_net;
pub mod report;

pub use metabolic_model::gene::GeneProduct;
pub use metabolic_model::metabolite::Metabolite;
pub use metabolic_model::network::{common_metabolites, common_reactions, MetabolicNetwork};
pub use metabolic_model::reaction::{ComponentRole, Reaction, ReactionComponent};
pub use petri_net::PetriNet;
