// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Property-based tests for model conversion using proptest.
//!
//! These tests verify that:
//! 1. Node count equals the number of model entities
//! 2. Edge count equals the number of resolvable stoichiometric references
//! 3. Canonical names are unique across the network
//! 4. Converting the same model twice yields the same network
//! 5. Every edge joins a species and a reaction

use std::collections::HashSet;

use proptest::prelude::*;

use crate::attributes::{ATTR_CN, ATTR_TYPE};
use crate::convert;
use crate::datamodel::{ChemEqElement, Compartment, GlobalQuantity, Model, Reaction, Species};

fn multiplicity_strategy() -> impl Strategy<Value = f64> + Clone {
    prop_oneof![Just(1.0), Just(2.0), (1i32..8).prop_map(|x| x as f64 / 2.0)]
}

/// Mostly species references, some past the end of the species list, plus
/// references to the canonical names of other entity kinds.
fn reference_strategy(n_species: usize) -> impl Strategy<Value = String> + Clone {
    prop_oneof![
        6 => (0usize..n_species + 2).prop_map(species_cn),
        1 => (0usize..3).prop_map(compartment_cn),
        1 => (0usize..4).prop_map(quantity_cn),
        1 => (0usize..5).prop_map(reaction_cn),
    ]
}

/// Builds a model with unique canonical names.
fn model_strategy() -> impl Strategy<Value = Model> {
    (0usize..3, 0usize..4, 0usize..6).prop_flat_map(|(n_comp, n_param, n_species)| {
        let element = (reference_strategy(n_species), multiplicity_strategy());
        let reaction = (
            any::<bool>(),
            prop::collection::vec(element.clone(), 0..3),
            prop::collection::vec(element, 0..3),
        );
        prop::collection::vec(reaction, 0..5).prop_map(move |reactions| {
            let compartments = (0..n_comp)
                .map(|i| Compartment {
                    key: format!("Compartment_{i}"),
                    cn: compartment_cn(i),
                    name: format!("c{i}"),
                    dimensionality: 3,
                    initial_size: 1.0,
                    ..Default::default()
                })
                .collect();
            let global_quantities = (0..n_param)
                .map(|i| GlobalQuantity {
                    key: format!("ModelValue_{i}"),
                    cn: quantity_cn(i),
                    initial_value: i as f64,
                    ..Default::default()
                })
                .collect();
            let species = (0..n_species)
                .map(|i| Species {
                    key: format!("Metabolite_{i}"),
                    cn: species_cn(i),
                    name: format!("S{i}"),
                    ..Default::default()
                })
                .collect();
            let reactions = reactions
                .into_iter()
                .enumerate()
                .map(|(i, (reversible, substrates, products))| {
                    let to_elements = |els: Vec<(String, f64)>| -> Vec<ChemEqElement> {
                        els.into_iter()
                            .map(|(species, multiplicity)| ChemEqElement {
                                species,
                                multiplicity,
                            })
                            .collect()
                    };
                    Reaction {
                        key: format!("Reaction_{i}"),
                        cn: reaction_cn(i),
                        reversible,
                        substrates: to_elements(substrates),
                        products: to_elements(products),
                        ..Default::default()
                    }
                })
                .collect();
            Model {
                key: "Model_1".to_owned(),
                compartments,
                global_quantities,
                species,
                reactions,
                ..Default::default()
            }
        })
    })
}

fn compartment_cn(i: usize) -> String {
    format!("CN=Root,Model=m,Vector=Compartments[c{i}]")
}

fn quantity_cn(i: usize) -> String {
    format!("CN=Root,Model=m,Vector=Values[k{i}]")
}

fn species_cn(i: usize) -> String {
    format!("CN=Root,Model=m,Vector=Metabolites[S{i}]")
}

fn reaction_cn(i: usize) -> String {
    format!("CN=Root,Model=m,Vector=Reactions[r{i}]")
}

proptest! {
    #[test]
    fn node_count_matches_entities(model in model_strategy()) {
        let conversion = convert(Some(&model), "model.cps").unwrap();
        prop_assert_eq!(model.entity_count(), conversion.network.node_count());
    }

    #[test]
    fn edges_plus_warnings_cover_every_reference(model in model_strategy()) {
        let known: HashSet<&str> = model.species.iter().map(|s| s.cn.as_str()).collect();
        let references = model
            .reactions
            .iter()
            .flat_map(|r| r.substrates.iter().chain(r.products.iter()));
        let resolvable = references
            .clone()
            .filter(|el| known.contains(el.species.as_str()))
            .count();
        let total = references.count();

        let conversion = convert(Some(&model), "model.cps").unwrap();
        prop_assert_eq!(resolvable, conversion.network.edge_count());
        prop_assert_eq!(total - resolvable, conversion.warnings.len());
    }

    #[test]
    fn canonical_names_are_unique(model in model_strategy()) {
        let conversion = convert(Some(&model), "model.cps").unwrap();
        let mut seen = HashSet::new();
        for node in conversion.network.nodes() {
            let cn = node.attrs.get_str(ATTR_CN).unwrap();
            prop_assert!(seen.insert(cn.to_owned()), "duplicate cn {}", cn);
        }
    }

    #[test]
    fn edges_join_species_and_reactions(model in model_strategy()) {
        let conversion = convert(Some(&model), "model.cps").unwrap();
        let network = &conversion.network;
        let kind = |id| network.node(id).and_then(|n| n.attrs.get_str(ATTR_TYPE));
        for edge in network.edges() {
            let ends = (kind(edge.source), kind(edge.target));
            prop_assert!(
                ends == (Some("species"), Some("reaction"))
                    || ends == (Some("reaction"), Some("species")),
                "edge {:?} joins {:?}",
                edge.id,
                ends
            );
        }
    }

    #[test]
    fn conversion_is_deterministic(model in model_strategy()) {
        let first = convert(Some(&model), "model.cps").unwrap();
        let second = convert(Some(&model), "model.cps").unwrap();
        prop_assert_eq!(&first.network, &second.network);
        prop_assert_eq!(first.warnings, second.warnings);
    }
}
