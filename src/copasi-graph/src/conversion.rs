// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use log::debug;

use crate::builder::GraphBuilder;
use crate::common::{Result, Warning};
use crate::config::ConversionConfig;
use crate::datamodel::Model;
use crate::graph::{Network, NetworkBuilder};
use crate::model_err;
use crate::naming::network_names;
use crate::registry::IdentifierRegistry;

/// A finished network plus the non-fatal problems found building it.
#[derive(Clone, Debug)]
pub struct Conversion {
    pub network: Network,
    pub warnings: Vec<Warning>,
}

impl Conversion {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Convert a parsed model into an attributed network using the default
/// configuration.
///
/// `document_label` names the originating document and is only used when
/// the model carries no identifier of its own.  An absent model is a fatal
/// error; unresolved stoichiometric references are returned as warnings.
pub fn convert(model: Option<&Model>, document_label: &str) -> Result<Conversion> {
    convert_with_config(model, document_label, &ConversionConfig::default())
}

pub fn convert_with_config(
    model: Option<&Model>,
    document_label: &str,
    config: &ConversionConfig,
) -> Result<Conversion> {
    let Some(model) = model else {
        return model_err!(NoModel, format!("no model loaded from '{document_label}'"));
    };

    debug!(
        "converting '{}': {} compartments, {} global quantities, {} species, {} reactions",
        document_label,
        model.compartments.len(),
        model.global_quantities.len(),
        model.species.len(),
        model.reactions.len()
    );

    let mut network = NetworkBuilder::new();
    let mut builder = GraphBuilder::new(config, IdentifierRegistry::new());
    builder.populate(model, &mut network);
    let warnings = builder.into_warnings();

    let names = network_names(model, document_label, &config.network_prefix);
    let network = network.build(names.network, names.collection);

    debug!(
        "converted '{}': {} nodes, {} edges, {} warnings",
        network.collection_name,
        network.node_count(),
        network.edge_count(),
        warnings.len()
    );

    Ok(Conversion { network, warnings })
}
