// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::HashMap;

use crate::datamodel::EntityKind;
use crate::graph::NodeId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Binding {
    node: NodeId,
    kind: EntityKind,
}

/// Maps canonical names to the nodes created for them during one
/// conversion.  A fresh registry is created per conversion.
///
/// Registering a canonical name that is already bound replaces the earlier
/// binding (last write wins).  Well-formed model documents never produce
/// such collisions; `register` reports the replaced node so callers can
/// surface it.
#[derive(Debug, Default)]
pub struct IdentifierRegistry {
    nodes: HashMap<String, Binding>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    /// Bind `cn` to a node of the given kind, returning the node previously
    /// bound to `cn`.
    pub fn register(&mut self, cn: &str, kind: EntityKind, node: NodeId) -> Option<NodeId> {
        self.nodes
            .insert(cn.to_owned(), Binding { node, kind })
            .map(|prev| prev.node)
    }

    pub fn lookup(&self, cn: &str) -> Option<NodeId> {
        self.nodes.get(cn).map(|b| b.node)
    }

    /// The node bound to `cn`, only if it was registered as `kind`.
    pub fn lookup_kind(&self, cn: &str, kind: EntityKind) -> Option<NodeId> {
        self.nodes
            .get(cn)
            .filter(|b| b.kind == kind)
            .map(|b| b.node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
