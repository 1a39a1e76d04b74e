use std::collections::BTreeMap;

use crate::{
    foundation::core::Mat4,
    foundation::error::{StageError, StageResult},
    graph::node::{AnimatedNode, NodeSpec},
    graph::primitive::{Material, Primitive},
};

/// Index of a node inside its [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct NodeId(pub usize);

#[derive(Clone, Debug)]
struct Slot {
    node: AnimatedNode,
    parent: Option<NodeId>,
    primitive: Primitive,
    material: Option<Material>,
    world: Mat4,
    world_opacity: f64,
}

/// Arena scene graph.
///
/// Parents are always inserted before their children, so one forward pass in
/// insertion order resolves every world transform.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    slots: Vec<Slot>,
    by_id: BTreeMap<String, NodeId>,
    roots: Vec<NodeId>,
}

/// Borrowed view of one resolved node.
#[derive(Clone, Copy, Debug)]
pub struct NodeView<'a> {
    pub id: NodeId,
    pub node: &'a AnimatedNode,
    pub parent: Option<NodeId>,
    pub primitive: &'a Primitive,
    pub material: Option<&'a Material>,
    pub world: Mat4,
    pub world_opacity: f64,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `spec` and append it under `parent` (or as a root).
    pub fn insert(&mut self, spec: NodeSpec, parent: Option<NodeId>) -> StageResult<NodeId> {
        if self.by_id.contains_key(&spec.id) {
            return Err(StageError::validation(format!(
                "duplicate node id '{}'",
                spec.id
            )));
        }
        if let Some(p) = parent {
            if p.0 >= self.slots.len() {
                return Err(StageError::validation(format!(
                    "node '{}' references unknown parent #{}",
                    spec.id, p.0
                )));
            }
        }
        spec.primitive.validate(&spec.id)?;
        if let Some(m) = &spec.material {
            m.validate(&spec.id)?;
        }

        let node = AnimatedNode::from_spec(&spec)?;
        let id = NodeId(self.slots.len());
        let state = node.state();
        let (parent_world, parent_opacity) = self.parent_frame(parent);
        self.slots.push(Slot {
            node,
            parent,
            primitive: spec.primitive,
            material: spec.material,
            world: parent_world * state.local_matrix(),
            world_opacity: parent_opacity * state.opacity,
        });
        self.by_id.insert(spec.id, id);
        if parent.is_none() {
            self.roots.push(id);
        }
        Ok(id)
    }

    fn parent_frame(&self, parent: Option<NodeId>) -> (Mat4, f64) {
        match parent {
            Some(p) => {
                let s = &self.slots[p.0];
                (s.world, s.world_opacity)
            }
            None => (Mat4::IDENTITY, 1.0),
        }
    }

    /// Recompute every node's local state, then compose world transforms.
    pub fn update(&mut self, elapsed: f64) {
        for i in 0..self.slots.len() {
            let (parent_world, parent_opacity) = self.parent_frame(self.slots[i].parent);
            let slot = &mut self.slots[i];
            let state = slot.node.update(elapsed);
            slot.world = parent_world * state.local_matrix();
            slot.world_opacity = parent_opacity * state.opacity;
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Top-level nodes in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.by_id.get(id).copied()
    }

    pub fn view(&self, id: NodeId) -> Option<NodeView<'_>> {
        let s = self.slots.get(id.0)?;
        Some(NodeView {
            id,
            node: &s.node,
            parent: s.parent,
            primitive: &s.primitive,
            material: s.material.as_ref(),
            world: s.world,
            world_opacity: s.world_opacity,
        })
    }

    pub fn get(&self, id: &str) -> Option<NodeView<'_>> {
        self.find(id).and_then(|n| self.view(n))
    }

    /// Direct children of `id`, in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeView<'_>> + '_ {
        self.iter().filter(move |v| v.parent == Some(id))
    }

    /// Every node in insertion (parent-before-child) order.
    pub fn iter(&self) -> impl Iterator<Item = NodeView<'_>> + '_ {
        (0..self.slots.len()).filter_map(|i| self.view(NodeId(i)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/scene_graph.rs"]
mod tests;
