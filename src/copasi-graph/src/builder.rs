// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use log::{debug, trace};

use crate::attributes::{self, ATTR_NETWORK_MARKER, ATTR_TYPE, ATTR_VERSION};
use crate::common::{EquationRole, Warning};
use crate::config::{CollisionPolicy, ConversionConfig};
use crate::datamodel::{ChemEqElement, DataObject, Entity, EntityKind, Model, Reaction};
use crate::graph::{NetworkBuilder, NodeId};
use crate::registry::IdentifierRegistry;

/// Populates a network from a model in a single ordered pass.
///
/// Holds the per-conversion state: the registry of created nodes and the
/// warnings collected so far.  Construct one per conversion.
pub struct GraphBuilder<'a> {
    config: &'a ConversionConfig,
    registry: IdentifierRegistry,
    warnings: Vec<Warning>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(config: &'a ConversionConfig, registry: IdentifierRegistry) -> Self {
        Self {
            config,
            registry,
            warnings: Vec::new(),
        }
    }

    /// Write the network-level attributes and one node per model entity,
    /// plus the stoichiometric edges of every reaction.
    pub fn populate(&mut self, model: &Model, network: &mut NetworkBuilder) {
        network
            .attrs_mut()
            .set(ATTR_NETWORK_MARKER, self.config.network_marker.as_str())
            .set(ATTR_VERSION, model.version.as_str());
        attributes::project(network.attrs_mut(), model);

        let compartment_names = model.compartment_names();
        for entity in model.entities() {
            let node = self.add_node(network, entity);
            let attrs = network.node_attrs_mut(node);
            match entity {
                Entity::Compartment(compartment) => {
                    attributes::project_compartment(attrs, compartment);
                }
                Entity::Quantity(quantity) => {
                    attributes::project_quantity(attrs, quantity);
                }
                Entity::Species(species) => {
                    let compartment_name = compartment_names
                        .get(species.compartment.as_str())
                        .copied()
                        .unwrap_or_default();
                    attributes::project_species(attrs, species, compartment_name);
                }
                Entity::Reaction(reaction) => {
                    attributes::project_reaction(attrs, reaction);
                    self.add_reaction_edges(network, node, reaction);
                }
            }
        }
    }

    pub fn registry(&self) -> &IdentifierRegistry {
        &self.registry
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }

    fn add_node(&mut self, network: &mut NetworkBuilder, entity: Entity<'_>) -> NodeId {
        let obj = entity.object();
        let node = network.add_node();
        let attrs = network.node_attrs_mut(node);
        attrs.set(ATTR_TYPE, entity.kind().tag());
        attributes::project(attrs, obj);

        trace!("{} node {} for '{}'", entity.kind(), node, obj.cn());

        if self.registry.register(obj.cn(), entity.kind(), node).is_some()
            && self.config.collision_policy == CollisionPolicy::Warn
        {
            debug!("duplicate canonical name '{}'", obj.cn());
            self.warnings.push(Warning::DuplicateCanonicalName {
                cn: obj.cn().to_owned(),
            });
        }

        node
    }

    fn add_reaction_edges(
        &mut self,
        network: &mut NetworkBuilder,
        reaction_node: NodeId,
        reaction: &Reaction,
    ) {
        for el in &reaction.substrates {
            self.add_stoichiometric_edge(
                network,
                reaction,
                reaction_node,
                el,
                EquationRole::Substrate,
            );
        }
        for el in &reaction.products {
            self.add_stoichiometric_edge(
                network,
                reaction,
                reaction_node,
                el,
                EquationRole::Product,
            );
        }
    }

    fn add_stoichiometric_edge(
        &mut self,
        network: &mut NetworkBuilder,
        reaction: &Reaction,
        reaction_node: NodeId,
        el: &ChemEqElement,
        role: EquationRole,
    ) {
        // only species may be stoichiometric partners of a reaction
        let Some(species_node) = self.registry.lookup_kind(&el.species, EntityKind::Species)
        else {
            debug!(
                "reaction '{}': {} '{}' does not name a species, skipping edge",
                reaction.key(),
                role,
                el.species
            );
            self.warnings.push(Warning::UnresolvedReference {
                reaction: reaction.key().to_owned(),
                species: el.species.clone(),
                role,
            });
            return;
        };

        let (source, target) = match role {
            EquationRole::Substrate => (species_node, reaction_node),
            EquationRole::Product => (reaction_node, species_node),
        };
        let edge = network.add_edge(source, target);
        attributes::project_stoichiometry(network.edge_attrs_mut(edge), el.multiplicity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{ATTR_COMPARTMENT, ATTR_STOICHIOMETRY};
    use crate::datamodel::{Compartment, GlobalQuantity, Species};

    fn species(cn: &str) -> Species {
        Species {
            key: format!("Metabolite_{cn}"),
            cn: cn.to_owned(),
            name: cn.to_owned(),
            compartment: "cell".to_owned(),
            ..Default::default()
        }
    }

    fn el(species: &str, multiplicity: f64) -> ChemEqElement {
        ChemEqElement {
            species: species.to_owned(),
            multiplicity,
        }
    }

    fn run(model: &Model, config: &ConversionConfig) -> (crate::graph::Network, Vec<Warning>) {
        let mut network = NetworkBuilder::new();
        let mut builder = GraphBuilder::new(config, IdentifierRegistry::new());
        builder.populate(model, &mut network);
        (
            network.build(String::new(), String::new()),
            builder.into_warnings(),
        )
    }

    #[test]
    fn test_edge_directions() {
        let model = Model {
            compartments: vec![Compartment {
                cn: "cell".to_owned(),
                name: "cytosol".to_owned(),
                ..Default::default()
            }],
            species: vec![species("A"), species("B")],
            reactions: vec![Reaction {
                key: "Reaction_0".to_owned(),
                cn: "R".to_owned(),
                substrates: vec![el("A", 2.0)],
                products: vec![el("B", 1.0)],
                ..Default::default()
            }],
            ..Default::default()
        };
        let (network, warnings) = run(&model, &ConversionConfig::default());
        assert!(warnings.is_empty());
        assert_eq!(4, network.node_count());
        assert_eq!(2, network.edge_count());

        let a = network.find_node_by_cn("A").unwrap().id;
        let b = network.find_node_by_cn("B").unwrap().id;
        let r = network.find_node_by_cn("R").unwrap().id;

        let substrate_edge = &network.edges()[0];
        assert_eq!((a, r), (substrate_edge.source, substrate_edge.target));
        assert_eq!(Some(2.0), substrate_edge.attrs.get_f64(ATTR_STOICHIOMETRY));

        let product_edge = &network.edges()[1];
        assert_eq!((r, b), (product_edge.source, product_edge.target));

        let a_node = network.node(a).unwrap();
        assert_eq!(Some("cytosol"), a_node.attrs.get_str(ATTR_COMPARTMENT));
    }

    #[test]
    fn test_unresolved_reference_is_skipped() {
        let model = Model {
            species: vec![species("A")],
            reactions: vec![Reaction {
                key: "Reaction_0".to_owned(),
                cn: "R".to_owned(),
                substrates: vec![el("A", 1.0)],
                products: vec![el("Ghost", 1.0)],
                ..Default::default()
            }],
            ..Default::default()
        };
        let (network, warnings) = run(&model, &ConversionConfig::default());
        assert_eq!(2, network.node_count());
        assert_eq!(1, network.edge_count());
        assert_eq!(
            vec![Warning::UnresolvedReference {
                reaction: "Reaction_0".to_owned(),
                species: "Ghost".to_owned(),
                role: EquationRole::Product,
            }],
            warnings
        );
        // species with an unknown compartment get an empty compartment name
        let a = network.find_node_by_cn("A").unwrap();
        assert_eq!(Some(""), a.attrs.get_str(ATTR_COMPARTMENT));
    }

    #[test]
    fn test_non_species_reference_is_unresolved() {
        let model = Model {
            compartments: vec![Compartment {
                cn: "cell".to_owned(),
                ..Default::default()
            }],
            global_quantities: vec![GlobalQuantity {
                cn: "k1".to_owned(),
                ..Default::default()
            }],
            reactions: vec![Reaction {
                key: "Reaction_0".to_owned(),
                cn: "R".to_owned(),
                substrates: vec![el("cell", 1.0), el("k1", 1.0)],
                products: vec![el("R", 1.0)],
                ..Default::default()
            }],
            ..Default::default()
        };
        let (network, warnings) = run(&model, &ConversionConfig::default());
        assert_eq!(3, network.node_count());
        assert_eq!(0, network.edge_count());

        let unresolved = |species: &str, role| Warning::UnresolvedReference {
            reaction: "Reaction_0".to_owned(),
            species: species.to_owned(),
            role,
        };
        assert_eq!(
            vec![
                unresolved("cell", EquationRole::Substrate),
                unresolved("k1", EquationRole::Substrate),
                unresolved("R", EquationRole::Product),
            ],
            warnings
        );
    }

    #[test]
    fn test_collision_policy() {
        let model = Model {
            species: vec![species("A"), species("A")],
            reactions: vec![Reaction {
                cn: "R".to_owned(),
                substrates: vec![el("A", 1.0)],
                ..Default::default()
            }],
            ..Default::default()
        };

        let (network, warnings) = run(&model, &ConversionConfig::default());
        assert!(warnings.is_empty());
        assert_eq!(3, network.node_count());
        // the edge resolves to the second (last registered) species node
        assert_eq!(1, network.edges()[0].source.0);

        let config = ConversionConfig {
            collision_policy: CollisionPolicy::Warn,
            ..Default::default()
        };
        let (_, warnings) = run(&model, &config);
        assert_eq!(
            vec![Warning::DuplicateCanonicalName {
                cn: "A".to_owned()
            }],
            warnings
        );
    }

    #[test]
    fn test_registry_holds_every_entity() {
        let model = Model {
            species: vec![species("A"), species("B")],
            ..Default::default()
        };
        let config = ConversionConfig::default();
        let mut network = NetworkBuilder::new();
        let mut builder = GraphBuilder::new(&config, IdentifierRegistry::new());
        builder.populate(&model, &mut network);
        assert_eq!(2, builder.registry().len());
        assert!(builder.registry().lookup("B").is_some());
    }
}
