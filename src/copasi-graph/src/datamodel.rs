// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! The parsed reaction-network model consumed by the converter.
//!
//! These types are the in-memory rendering of a loaded COPASI model.  Every
//! field a model document may omit carries `#[serde(default)]`, so a missing
//! value decodes to its zero-value instead of failing.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

fn is_zero_f64(val: &f64) -> bool {
    *val == 0.0
}

fn is_false(val: &bool) -> bool {
    !*val
}

fn is_empty_string(val: &str) -> bool {
    val.is_empty()
}

fn is_empty_vec<T>(val: &[T]) -> bool {
    val.is_empty()
}

/// Descriptive fields common to every model object.
pub trait DataObject {
    /// Short local identifier (the COPASI object key).
    fn key(&self) -> &str;
    /// Canonical name: the object's unique path within the model hierarchy.
    fn cn(&self) -> &str;
    fn name(&self) -> &str;
    fn display_name(&self) -> &str;
}

macro_rules! impl_data_object {
    ($($ty:ty),*) => {
        $(
            impl DataObject for $ty {
                fn key(&self) -> &str {
                    &self.key
                }
                fn cn(&self) -> &str {
                    &self.cn
                }
                fn name(&self) -> &str {
                    &self.name
                }
                fn display_name(&self) -> &str {
                    &self.display_name
                }
            }
        )*
    };
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Compartment {
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub key: String,
    pub cn: String,
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub name: String,
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub display_name: String,
    /// Spatial dimensionality, 0 through 3.
    #[serde(default)]
    pub dimensionality: i32,
    #[serde(skip_serializing_if = "is_zero_f64", default)]
    pub initial_size: f64,
}

/// A model-level scalar parameter (a COPASI "model value").
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalQuantity {
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub key: String,
    pub cn: String,
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub name: String,
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub display_name: String,
    #[serde(skip_serializing_if = "is_zero_f64", default)]
    pub initial_value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Species {
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub key: String,
    pub cn: String,
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub name: String,
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub display_name: String,
    /// Canonical name of the containing compartment.
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub compartment: String,
    #[serde(skip_serializing_if = "is_zero_f64", default)]
    pub initial_concentration: f64,
}

/// One element of a chemical equation: a species and its multiplicity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemEqElement {
    /// Canonical name of the referenced species.
    pub species: String,
    #[serde(default = "default_multiplicity")]
    pub multiplicity: f64,
}

fn default_multiplicity() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Reaction {
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub key: String,
    pub cn: String,
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub name: String,
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub display_name: String,
    #[serde(skip_serializing_if = "is_false", default)]
    pub reversible: bool,
    #[serde(skip_serializing_if = "is_empty_vec", default)]
    pub substrates: Vec<ChemEqElement>,
    #[serde(skip_serializing_if = "is_empty_vec", default)]
    pub products: Vec<ChemEqElement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub key: String,
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub cn: String,
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub name: String,
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub display_name: String,
    /// Version string of the modeling engine that produced the model.
    #[serde(skip_serializing_if = "is_empty_string", default)]
    pub version: String,
    #[serde(skip_serializing_if = "is_empty_vec", default)]
    pub compartments: Vec<Compartment>,
    #[serde(skip_serializing_if = "is_empty_vec", default)]
    pub global_quantities: Vec<GlobalQuantity>,
    #[serde(skip_serializing_if = "is_empty_vec", default)]
    pub species: Vec<Species>,
    #[serde(skip_serializing_if = "is_empty_vec", default)]
    pub reactions: Vec<Reaction>,
}

impl_data_object!(Compartment, GlobalQuantity, Species, Reaction, Model);

impl Model {
    pub fn entity_count(&self) -> usize {
        self.compartments.len()
            + self.global_quantities.len()
            + self.species.len()
            + self.reactions.len()
    }

    /// Compartment names keyed by canonical name.  A repeated canonical
    /// name maps to the last compartment carrying it.
    pub fn compartment_names(&self) -> HashMap<&str, &str> {
        self.compartments
            .iter()
            .map(|c| (c.cn.as_str(), c.name.as_str()))
            .collect()
    }

    /// All entities in conversion order: compartments, global quantities,
    /// species, then reactions.  Reactions must come last because their
    /// edges resolve species through the registry.
    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> {
        self.compartments
            .iter()
            .map(Entity::Compartment)
            .chain(self.global_quantities.iter().map(Entity::Quantity))
            .chain(self.species.iter().map(Entity::Species))
            .chain(self.reactions.iter().map(Entity::Reaction))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Compartment,
    Quantity,
    Species,
    Reaction,
}

impl EntityKind {
    /// The node `type` attribute for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            EntityKind::Compartment => "compartment",
            EntityKind::Quantity => "parameter",
            EntityKind::Species => "species",
            EntityKind::Reaction => "reaction",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Entity<'a> {
    Compartment(&'a Compartment),
    Quantity(&'a GlobalQuantity),
    Species(&'a Species),
    Reaction(&'a Reaction),
}

impl<'a> Entity<'a> {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Compartment(_) => EntityKind::Compartment,
            Entity::Quantity(_) => EntityKind::Quantity,
            Entity::Species(_) => EntityKind::Species,
            Entity::Reaction(_) => EntityKind::Reaction,
        }
    }

    pub fn object(&self) -> &'a dyn DataObject {
        match *self {
            Entity::Compartment(c) => c,
            Entity::Quantity(q) => q,
            Entity::Species(s) => s,
            Entity::Reaction(r) => r,
        }
    }
}
