// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Attribute column names and the projection of model-object metadata onto
//! node, edge and network attribute records.

use crate::datamodel::{Compartment, DataObject, GlobalQuantity, Reaction, Species};
use crate::graph::Attributes;

pub const ATTR_TYPE: &str = "type";
pub const ATTR_ID: &str = "id";
pub const ATTR_CN: &str = "cn";
pub const ATTR_NAME: &str = "name";
pub const ATTR_DISPLAY_NAME: &str = "displayName";

pub const ATTR_DIMENSIONS: &str = "dimensions";
pub const ATTR_SIZE: &str = "size";
pub const ATTR_VALUE: &str = "value";
pub const ATTR_COMPARTMENT: &str = "compartment";
pub const ATTR_INITIAL_CONCENTRATION: &str = "initial concentration";
pub const ATTR_REVERSIBLE: &str = "reversible";
pub const ATTR_STOICHIOMETRY: &str = "stoichiometry";

pub const ATTR_NETWORK_MARKER: &str = "copasiNetwork";
pub const ATTR_VERSION: &str = "copasiVersion";

/// Edge `type` for stoichiometric edges.
pub const EDGE_TYPE_REACTION: &str = "reaction";

/// Copy the descriptive fields shared by every model object.  Never fails:
/// absent source fields are already empty strings.
pub fn project(target: &mut Attributes, obj: &dyn DataObject) {
    target
        .set(ATTR_ID, obj.key())
        .set(ATTR_CN, obj.cn())
        .set(ATTR_NAME, obj.name())
        .set(ATTR_DISPLAY_NAME, obj.display_name());
}

pub fn project_compartment(target: &mut Attributes, compartment: &Compartment) {
    target
        .set(ATTR_DIMENSIONS, compartment.dimensionality as f64)
        .set(ATTR_SIZE, compartment.initial_size);
}

pub fn project_quantity(target: &mut Attributes, quantity: &GlobalQuantity) {
    target.set(ATTR_VALUE, quantity.initial_value);
}

/// `compartment_name` is the containing compartment's name, or empty when
/// the species' compartment reference does not resolve.
pub fn project_species(target: &mut Attributes, species: &Species, compartment_name: &str) {
    target
        .set(ATTR_COMPARTMENT, compartment_name)
        .set(ATTR_INITIAL_CONCENTRATION, species.initial_concentration);
}

pub fn project_reaction(target: &mut Attributes, reaction: &Reaction) {
    target.set(ATTR_REVERSIBLE, reaction.reversible);
}

pub fn project_stoichiometry(target: &mut Attributes, multiplicity: f64) {
    target
        .set(ATTR_TYPE, EDGE_TYPE_REACTION)
        .set(ATTR_STOICHIOMETRY, multiplicity);
}
