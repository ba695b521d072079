//! Module for reading metabolic networks from files
pub mod gene_rule;
pub mod json;
