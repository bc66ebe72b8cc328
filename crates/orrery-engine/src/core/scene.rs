// core/scene.rs
//
// Scene graph: flat node storage plus a parent/child hierarchy.
//
// Every node has at most one parent, set when it is attached. Re-parenting is
// rejected: a mesh belongs to exactly one node for the lifetime of the scene.
//
// Usage:
//   let mut scene = SceneGraph::new();
//   let pivot = scene.spawn(Node::new(scene.next_id()).with_tag("pivot"));
//   let planet = scene.spawn_child(pivot, Node::new(scene.next_id()))?;
//   let world = scene.world_matrices();

use std::collections::HashMap;
use glam::Mat4;
use crate::api::types::NodeId;
use crate::components::node::Node;
use crate::error::{OrreryError, Result};

#[derive(Debug, Clone, Default)]
struct Link {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Node storage with a transform hierarchy.
/// Designed for small scenes (tens of nodes, not thousands).
pub struct SceneGraph {
    nodes: Vec<Node>,
    links: HashMap<NodeId, Link>,
    /// Nodes with no parent, in spawn order.
    roots: Vec<NodeId>,
    next_id: u32,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(32),
            links: HashMap::new(),
            roots: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a node at the root of the scene.
    pub fn spawn(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.push(node);
        self.links.entry(id).or_default();
        self.roots.push(id);
        id
    }

    /// Add a node as a child of `parent`.
    pub fn spawn_child(&mut self, parent: NodeId, node: Node) -> Result<NodeId> {
        if !self.links.contains_key(&parent) {
            return Err(OrreryError::UnknownNode(parent));
        }
        let id = self.spawn(node);
        self.attach(id, parent)?;
        Ok(id)
    }

    /// Attach a root node under `parent`. Fails if the child already has a parent.
    pub fn attach(&mut self, child: NodeId, parent: NodeId) -> Result<()> {
        if !self.links.contains_key(&parent) {
            return Err(OrreryError::UnknownNode(parent));
        }
        let link = self.links.get(&child).ok_or(OrreryError::UnknownNode(child))?;
        if let Some(existing) = link.parent {
            return Err(OrreryError::AlreadyParented { child, parent: existing });
        }
        if child == parent || self.is_ancestor(child, parent) {
            return Err(OrreryError::AlreadyParented { child, parent });
        }

        if let Some(link) = self.links.get_mut(&child) {
            link.parent = Some(parent);
        }
        if let Some(link) = self.links.get_mut(&parent) {
            link.children.push(child);
        }
        self.roots.retain(|&r| r != child);
        Ok(())
    }

    /// Whether `ancestor` appears on the parent chain of `node`.
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = self.parent(node);
        while let Some(p) = cursor {
            if p == ancestor {
                return true;
            }
            cursor = self.parent(p);
        }
        false
    }

    /// Get a reference to a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get a mutable reference to a node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.links.get(&id).and_then(|l| l.parent)
    }

    pub fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.links.get(&id).map(|l| l.children.as_slice())
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate over all nodes mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// World matrix of a single node, composed up the parent chain.
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let mut matrix = self.get(id)?.local_matrix();
        let mut cursor = self.parent(id);
        while let Some(p) = cursor {
            matrix = self.get(p)?.local_matrix() * matrix;
            cursor = self.parent(p);
        }
        Some(matrix)
    }

    /// World matrices for every active node, walking down from the roots.
    /// Inactive nodes hide their whole subtree.
    pub fn world_matrices(&self) -> Vec<(NodeId, Mat4)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        for &root in &self.roots {
            self.propagate_recursive(root, Mat4::IDENTITY, &mut out);
        }
        out
    }

    fn propagate_recursive(&self, id: NodeId, parent_world: Mat4, out: &mut Vec<(NodeId, Mat4)>) {
        let Some(node) = self.get(id) else { return };
        if !node.active {
            return;
        }
        let world = parent_world * node.local_matrix();
        out.push((id, world));

        if let Some(link) = self.links.get(&id) {
            for &child in &link.children {
                self.propagate_recursive(child, world, out);
            }
        }
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
