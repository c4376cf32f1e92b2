// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

/// A single attribute value on a node, edge or the network itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    Float(f64),
    Bool(bool),
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

/// Attribute record keyed by column name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, AttrValue>);

impl Attributes {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<AttrValue>) -> &mut Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(AttrValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.0.get(key) {
            Some(AttrValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.0.get(key) {
            Some(AttrValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Index of a node within its network, assigned in creation order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EdgeId(pub usize);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub attrs: Attributes,
}

/// A directed edge.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub attrs: Attributes,
}

/// Immutable attributed directed graph.  Use `NetworkBuilder` to construct.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Network {
    pub name: String,
    pub collection_name: String,
    pub attrs: Attributes,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    adj: BTreeMap<NodeId, Vec<EdgeId>>,
    #[serde(skip)]
    adj_incoming: BTreeMap<NodeId, Vec<EdgeId>>,
}

impl Network {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Nodes whose `type` attribute equals `tag`, in creation order.
    pub fn nodes_of_type<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes
            .iter()
            .filter(move |n| n.attrs.get_str("type") == Some(tag))
    }

    pub fn find_node_by_cn(&self, cn: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.attrs.get_str("cn") == Some(cn))
    }

    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        self.adj
            .get(&node)
            .into_iter()
            .flat_map(|ids| ids.iter().map(|id| &self.edges[id.0]))
    }

    pub fn incoming(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        self.adj_incoming
            .get(&node)
            .into_iter()
            .flat_map(|ids| ids.iter().map(|id| &self.edges[id.0]))
    }

    /// Number of edges touching `node` in either direction.
    pub fn degree(&self, node: NodeId) -> usize {
        self.adj.get(&node).map_or(0, |v| v.len())
            + self.adj_incoming.get(&node).map_or(0, |v| v.len())
    }

    /// Whether the network contains a directed cycle.  Reaction networks
    /// are routinely cyclic; this is informational only.
    ///
    /// Iterative depth-first search, so long linear pathways do not grow
    /// the call stack.
    pub fn has_cycle(&self) -> bool {
        let mut visited = BTreeSet::new();
        let mut on_path = BTreeSet::new();
        // (node, index of the next outgoing edge to follow)
        let mut stack: Vec<(NodeId, usize)> = Vec::new();

        for node in &self.nodes {
            if visited.contains(&node.id) {
                continue;
            }
            visited.insert(node.id);
            on_path.insert(node.id);
            stack.push((node.id, 0));

            while let Some(frame) = stack.last_mut() {
                let current = frame.0;
                let out = self.adj.get(&current).map_or(&[][..], |v| v.as_slice());
                let Some(edge_id) = out.get(frame.1) else {
                    on_path.remove(&current);
                    stack.pop();
                    continue;
                };
                frame.1 += 1;

                let target = self.edges[edge_id.0].target;
                if on_path.contains(&target) {
                    return true;
                }
                if visited.insert(target) {
                    on_path.insert(target);
                    stack.push((target, 0));
                }
            }
        }
        false
    }
}

/// Builder for constructing an immutable `Network`.
#[derive(Default)]
pub struct NetworkBuilder {
    attrs: Attributes,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adj: BTreeMap<NodeId, Vec<EdgeId>>,
    adj_incoming: BTreeMap<NodeId, Vec<EdgeId>>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            attrs: Attributes::new(),
        });
        id
    }

    /// Attributes of a node created by this builder.
    pub fn node_attrs_mut(&mut self, node: NodeId) -> &mut Attributes {
        &mut self.nodes[node.0].attrs
    }

    /// Adds a directed edge between two nodes created by this builder.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        debug_assert!(source.0 < self.nodes.len() && target.0 < self.nodes.len());
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            id,
            source,
            target,
            attrs: Attributes::new(),
        });
        self.adj.entry(source).or_default().push(id);
        self.adj_incoming.entry(target).or_default().push(id);
        id
    }

    pub fn edge_attrs_mut(&mut self, edge: EdgeId) -> &mut Attributes {
        &mut self.edges[edge.0].attrs
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn build(self, name: String, collection_name: String) -> Network {
        Network {
            name,
            collection_name,
            attrs: self.attrs,
            nodes: self.nodes,
            edges: self.edges,
            adj: self.adj,
            adj_incoming: self.adj_incoming,
        }
    }
}
