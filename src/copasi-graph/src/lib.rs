// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Convert parsed COPASI reaction-network models into directed, attributed
//! graphs: one node per compartment, global quantity, species and reaction,
//! and one stoichiometric edge per substrate and product reference.

#![forbid(unsafe_code)]

pub mod attributes;
pub mod builder;
pub mod common;
pub mod config;
mod conversion;
pub mod datamodel;
pub mod graph;
pub mod json;
pub mod naming;
pub mod registry;
pub mod sniff;

#[cfg(test)]
mod convert_proptest;

pub use self::common::{EquationRole, Error, ErrorCode, ErrorKind, Result, Warning};
pub use self::config::{CollisionPolicy, ConversionConfig};
pub use self::conversion::{Conversion, convert, convert_with_config};
pub use self::datamodel::Model;
pub use self::graph::{AttrValue, Attributes, Edge, EdgeId, Network, Node, NodeId};
pub use self::json::{open_json, to_json};
