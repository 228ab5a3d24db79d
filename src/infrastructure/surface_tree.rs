// SPDX-License-Identifier: MPL-2.0
//! In-memory retained element tree.
//!
//! [`SurfaceTree`] is an arena of [`SurfaceNode`]s addressed by [`SurfaceId`]
//! slots. It implements [`SurfaceHost`] for the gallery and is what the iced
//! frontend renders from.

use crate::application::port::{
    DiscoveredImage, ElementSpec, SurfaceHost, SurfaceId, SurfaceRole,
};
use std::collections::HashMap;

/// One element of the tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurfaceNode {
    pub role: SurfaceRole,
    pub source: Option<String>,
    pub text: Option<String>,
    pub caption: Option<String>,
    /// Identifier a container can be looked up by.
    pub element_id: Option<String>,
    /// Catalog index tag.
    pub index: Option<usize>,
    pub visible: bool,
    pub parent: Option<SurfaceId>,
    pub children: Vec<SurfaceId>,
}

impl SurfaceNode {
    fn from_spec(spec: ElementSpec) -> Self {
        Self {
            role: spec.role,
            source: spec.source,
            text: spec.text,
            caption: spec.caption,
            visible: spec.visible,
            ..Self::default()
        }
    }
}

/// Arena-backed element tree.
#[derive(Debug, Clone, Default)]
pub struct SurfaceTree {
    nodes: Vec<SurfaceNode>,
    named: HashMap<String, SurfaceId>,
    origin: String,
}

impl SurfaceTree {
    /// Creates an empty tree for a document served from `origin`.
    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..Self::default()
        }
    }

    /// Adds a root container that can be found by `element_id`.
    pub fn insert_container(&mut self, element_id: impl Into<String>) -> SurfaceId {
        let element_id = element_id.into();
        let id = self.push(SurfaceNode {
            element_id: Some(element_id.clone()),
            ..SurfaceNode::from_spec(ElementSpec::new(SurfaceRole::Container))
        });
        if self.named.insert(element_id.clone(), id).is_some() {
            tracing::warn!(element_id, "container id reused, lookups now resolve to the newest");
        }
        id
    }

    /// Adds a document image with a caption attribute under `parent`.
    pub fn insert_image(
        &mut self,
        parent: SurfaceId,
        source: impl Into<String>,
        caption: impl Into<String>,
    ) -> SurfaceId {
        let id = self.create(ElementSpec::image(SurfaceRole::Image, source, caption));
        self.append_child(parent, id);
        id
    }

    #[must_use]
    pub fn node(&self, id: SurfaceId) -> Option<&SurfaceNode> {
        self.nodes.get(id.slot())
    }

    /// Children of `id` in document order (empty for unknown ids).
    #[must_use]
    pub fn children(&self, id: SurfaceId) -> &[SurfaceId] {
        self.node(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// Whether `id` and all of its ancestors are visible.
    #[must_use]
    pub fn is_displayed(&self, id: SurfaceId) -> bool {
        let mut current = Some(id);
        while let Some(id) = current {
            match self.node(id) {
                Some(node) if node.visible => current = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// Number of elements ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: SurfaceNode) -> SurfaceId {
        let id = SurfaceId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn node_mut(&mut self, id: SurfaceId) -> Option<&mut SurfaceNode> {
        let node = self.nodes.get_mut(id.slot());
        if node.is_none() {
            tracing::warn!(slot = id.slot(), "unknown surface id");
        }
        node
    }

    fn is_ancestor(&self, candidate: SurfaceId, of: SurfaceId) -> bool {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.node(id).and_then(|node| node.parent);
        }
        false
    }

    fn detach(&mut self, child: SurfaceId) {
        let Some(parent) = self.node(child).and_then(|node| node.parent) else {
            return;
        };
        if let Some(parent) = self.nodes.get_mut(parent.slot()) {
            parent.children.retain(|id| *id != child);
        }
        if let Some(child) = self.nodes.get_mut(child.slot()) {
            child.parent = None;
        }
    }
}

impl SurfaceHost for SurfaceTree {
    fn find_container(&self, container_id: &str) -> Option<SurfaceId> {
        self.named.get(container_id).copied()
    }

    fn create(&mut self, spec: ElementSpec) -> SurfaceId {
        self.push(SurfaceNode::from_spec(spec))
    }

    fn append_child(&mut self, parent: SurfaceId, child: SurfaceId) {
        if self.node(parent).is_none() || self.node(child).is_none() {
            tracing::warn!(
                parent = parent.slot(),
                child = child.slot(),
                "append with unknown surface id"
            );
            return;
        }
        if self.is_ancestor(child, parent) {
            tracing::warn!(
                parent = parent.slot(),
                child = child.slot(),
                "append would create a cycle"
            );
            return;
        }
        self.detach(child);
        if let Some(node) = self.nodes.get_mut(child.slot()) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent.slot()) {
            node.children.push(child);
        }
    }

    fn clone_surface(&mut self, id: SurfaceId) -> SurfaceId {
        let Some(original) = self.node(id).cloned() else {
            tracing::warn!(slot = id.slot(), "cloning unknown surface id");
            return self.push(SurfaceNode::default());
        };
        let clone = self.push(SurfaceNode {
            parent: None,
            children: Vec::new(),
            element_id: None,
            ..original.clone()
        });
        for child in original.children {
            let child_clone = self.clone_surface(child);
            self.append_child(clone, child_clone);
        }
        clone
    }

    fn set_visible(&mut self, id: SurfaceId, visible: bool) {
        if let Some(node) = self.node_mut(id) {
            node.visible = visible;
        }
    }

    fn set_text(&mut self, id: SurfaceId, text: &str) {
        if let Some(node) = self.node_mut(id) {
            node.text = Some(text.to_string());
        }
    }

    fn set_index(&mut self, id: SurfaceId, index: usize) {
        if let Some(node) = self.node_mut(id) {
            node.index = Some(index);
        }
    }

    fn discover_images(&self, container: SurfaceId) -> Vec<DiscoveredImage> {
        let mut found = Vec::new();
        let mut stack: Vec<SurfaceId> = self.children(container).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            if node.role == SurfaceRole::Image {
                found.push(DiscoveredImage {
                    id,
                    source: node.source.clone().unwrap_or_default(),
                    caption: node.caption.clone().unwrap_or_default(),
                });
            }
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    fn source(&self, id: SurfaceId) -> Option<&str> {
        self.node(id)?.source.as_deref()
    }

    fn origin(&self) -> &str {
        &self.origin
    }
}
