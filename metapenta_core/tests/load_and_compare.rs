use std::path::PathBuf;

use metapenta_core::metabolic_model::network::{common_gene_products, unique_reactions};
use metapenta_core::petri_net::PathNode;
use metapenta_core::report::{json_array_report, metabolite_reactions_report};
use metapenta_core::{common_metabolites, common_reactions, MetabolicNetwork, PetriNet};

fn load(file: &str) -> MetabolicNetwork {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join("test_networks")
        .join(file);
    MetabolicNetwork::read_json(path).unwrap()
}

#[test]
fn compare_glycolysis_halves() {
    let upper = load("glycolysis_upper.json");
    let lower = load("glycolysis_lower.json");
    assert_eq!(lower.name(), Some("Lower glycolysis"));

    let common: Vec<&str> = common_metabolites(&upper, &lower)
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(common, vec!["adp_c", "atp_c", "f6p_c", "fdp_c", "h_c"]);
    // The second network's instances are returned
    assert_eq!(common_metabolites(&upper, &lower)[1].name, "Adenosine triphosphate");
    assert_eq!(common_metabolites(&lower, &upper)[1].name, "ATP C10H12N5O13P3");

    let reactions: Vec<&str> = common_reactions(&upper, &lower)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(reactions, vec!["PFK"]);
    let only_lower: Vec<&str> = unique_reactions(&upper, &lower)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(only_lower, vec!["FBA", "TPI"]);
    assert_eq!(common_gene_products(&upper, &lower)[0].id, "b3916");

    let report = json_array_report("commonReactions", &common_reactions(&upper, &lower));
    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(parsed["commonReactions"][0]["catalysts"][0], "b3916");
}

#[test]
fn glycolysis_structure() {
    let upper = load("glycolysis_upper.json");
    let sources: Vec<&str> = upper.sources().iter().map(|m| m.id.as_str()).collect();
    let sinks: Vec<&str> = upper.sinks().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(sources, vec!["atp_c", "glc__D_e", "pi_c"]);
    assert_eq!(sinks, vec!["adp_c", "fdp_c", "h_c", "pi_c"]);

    let atp = upper.reactions_of_metabolite("atp_c");
    let consumers: Vec<&str> = atp.as_reactant.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(consumers, vec!["HEX1", "PFK"]);
    assert!(atp.as_product.is_empty());
    let report = metabolite_reactions_report(&atp);
    assert!(report.starts_with("{\"isSubstrate\":[{\"id\":\"HEX1\""));

    let catalyzed: Vec<&str> = upper
        .reactions_catalyzed_by("pfkB")
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(catalyzed, vec!["PFK"]);
    assert!(upper.reactions_catalyzed_by("b1723").is_empty());

    let path = upper.shortest_path("glc__D_e", "fdp_c").unwrap();
    assert_eq!(
        path,
        vec![
            PathNode::Place("glc__D_e"),
            PathNode::Transition("GLCt"),
            PathNode::Place("glc__D_c"),
            PathNode::Transition("HEX1"),
            PathNode::Place("g6p_c"),
            PathNode::Transition("PGI"),
            PathNode::Place("f6p_c"),
            PathNode::Transition("PFK"),
            PathNode::Place("fdp_c"),
        ]
    );
}
