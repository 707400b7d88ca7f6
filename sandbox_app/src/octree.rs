//! Octree spatial partitioning structure
//!
//! Divides the arena into nested [`Cube`]s. A node splits into its 8
//! octants at its own center once it holds too many items; the child for a
//! position is `center.to_octant(position)`, so classification and child
//! construction share the kernel's octant convention.

use fvector3d::{Cube, Vt};
use slotmap::{new_key_type, SlotMap};

use crate::config::OctreeConfig;
use crate::error::SandboxError;

new_key_type! {
    /// Handle to an item stored in an [`Octree`]
    pub struct ItemKey;
}

/// Item stored in the octree with position and bounding radius
#[derive(Debug, Clone)]
pub struct OctreeItem<T> {
    /// Position used for node placement
    pub position: Vt,
    /// Bounding sphere radius
    pub radius: f64,
    /// Caller payload
    pub data: T,
}

/// Single node in the octree hierarchy
#[derive(Debug, Clone)]
pub struct OctreeNode {
    /// World-space bounds of this node
    pub bounds: Cube,

    /// Items held directly by this node (leaves only)
    pub items: Vec<ItemKey>,

    /// Child nodes indexed by octant code, `None` for a leaf
    pub children: Option<Box<[OctreeNode; 8]>>,

    /// Depth in the tree (0 = root)
    pub depth: u32,
}

impl OctreeNode {
    /// Create a new leaf node
    pub const fn new(bounds: Cube, depth: u32) -> Self {
        Self {
            bounds,
            items: Vec::new(),
            children: None,
            depth,
        }
    }

    /// Check if this node is a leaf (has no children)
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    fn child_index(&self, position: Vt) -> usize {
        self.bounds.center().to_octant(position).index()
    }

    fn subdivide<T>(&mut self, store: &SlotMap<ItemKey, OctreeItem<T>>) {
        if self.children.is_some() {
            return;
        }

        let depth = self.depth + 1;
        let octants = self.bounds.octants(self.bounds.center());
        let mut children = Box::new(octants.map(|bounds| Self::new(bounds, depth)));

        for key in std::mem::take(&mut self.items) {
            let index = self.child_index(store[key].position);
            children[index].items.push(key);
        }
        log::trace!("Subdivided node at depth {} ({})", self.depth, self.bounds);
        self.children = Some(children);
    }

    fn insert<T>(
        &mut self,
        key: ItemKey,
        store: &SlotMap<ItemKey, OctreeItem<T>>,
        config: &OctreeConfig,
    ) {
        if self.is_leaf() {
            let should_subdivide = self.items.len() >= config.max_items_per_node
                && self.depth < config.max_depth
                && self.bounds.size_vector().x() / 2.0 > config.min_node_size;

            if !should_subdivide {
                self.items.push(key);
                return;
            }
            self.subdivide(store);
        }

        let index = self.child_index(store[key].position);
        if let Some(children) = self.children.as_mut() {
            children[index].insert(key, store, config);
        }
    }

    fn remove(&mut self, key: ItemKey, position: Vt) -> bool {
        if let Some(children) = self.children.as_mut() {
            let index = self.bounds.center().to_octant(position).index();
            return children[index].remove(key, position);
        }

        match self.items.iter().position(|&k| k == key) {
            Some(index) => {
                self.items.swap_remove(index);
                true
            }
            None => false,
        }
    }

    fn query_sphere<T>(
        &self,
        center: Vt,
        radius: f64,
        reach: f64,
        store: &SlotMap<ItemKey, OctreeItem<T>>,
        results: &mut Vec<ItemKey>,
    ) {
        if !self.bounds.is_contact(center, reach) {
            return;
        }

        for &key in &self.items {
            let item = &store[key];
            let combined = radius + item.radius;
            if item.position.sqd(center) <= combined * combined {
                results.push(key);
            }
        }

        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.query_sphere(center, radius, reach, store, results);
            }
        }
    }

    fn query_box<T>(
        &self,
        region: &Cube,
        store: &SlotMap<ItemKey, OctreeItem<T>>,
        results: &mut Vec<ItemKey>,
    ) {
        if !self.bounds.is_overlap(region) {
            return;
        }

        results.extend(
            self.items
                .iter()
                .copied()
                .filter(|&key| store[key].position.is_in(region)),
        );

        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.query_box(region, store, results);
            }
        }
    }

    /// Get all leaf nodes (for visualization)
    pub fn get_all_leaves<'a>(&'a self, leaves: &mut Vec<&'a Self>) {
        match self.children.as_ref() {
            None => leaves.push(self),
            Some(children) => {
                for child in children.iter() {
                    child.get_all_leaves(leaves);
                }
            }
        }
    }

    /// Leaves below and including this node
    pub fn leaf_count(&self) -> usize {
        self.children
            .as_ref()
            .map_or(1, |children| children.iter().map(Self::leaf_count).sum())
    }

    /// Deepest level below and including this node
    pub fn max_depth(&self) -> u32 {
        self.children.as_ref().map_or(self.depth, |children| {
            children.iter().map(Self::max_depth).max().unwrap_or(self.depth)
        })
    }
}

/// Octree spatial partitioning structure
#[derive(Debug, Clone)]
pub struct Octree<T> {
    /// Root node containing the entire world space
    root: OctreeNode,

    /// Item storage; nodes only hold keys
    items: SlotMap<ItemKey, OctreeItem<T>>,

    /// Configuration
    config: OctreeConfig,

    /// Largest item radius inserted since the last clear
    max_item_radius: f64,
}

impl<T> Octree<T> {
    /// Create a new octree with given world bounds
    pub fn new(world_bounds: Cube, config: OctreeConfig) -> Self {
        Self {
            root: OctreeNode::new(world_bounds, 0),
            items: SlotMap::with_key(),
            config,
            max_item_radius: 0.0,
        }
    }

    /// Root node
    pub const fn root(&self) -> &OctreeNode {
        &self.root
    }

    /// Bounds of the root node
    pub const fn bounds(&self) -> &Cube {
        &self.root.bounds
    }

    /// Insert an item; positions outside the root bounds are rejected
    pub fn insert(&mut self, position: Vt, radius: f64, data: T) -> Result<ItemKey, SandboxError> {
        if !position.is_in(&self.root.bounds) {
            return Err(SandboxError::OutOfBounds {
                position,
                bounds: self.root.bounds,
            });
        }

        if radius > self.max_item_radius {
            self.max_item_radius = radius;
        }

        let key = self.items.insert(OctreeItem { position, radius, data });
        self.root.insert(key, &self.items, &self.config);
        Ok(key)
    }

    /// Remove an item, returning its payload
    pub fn remove(&mut self, key: ItemKey) -> Option<T> {
        let position = self.items.get(key)?.position;
        if !self.root.remove(key, position) {
            log::warn!("Item {key:?} at {position} had no node entry");
        }
        self.items.remove(key).map(|item| item.data)
    }

    /// Move an item to a new position, re-placing it in the tree
    pub fn relocate(&mut self, key: ItemKey, position: Vt) -> Result<(), SandboxError> {
        let old = self.items.get(key).ok_or(SandboxError::UnknownItem)?.position;
        if !position.is_in(&self.root.bounds) {
            return Err(SandboxError::OutOfBounds {
                position,
                bounds: self.root.bounds,
            });
        }

        if !self.root.remove(key, old) {
            log::warn!("Item {key:?} at {old} had no node entry while relocating");
        }
        self.items[key].position = position;
        self.root.insert(key, &self.items, &self.config);
        Ok(())
    }

    /// Look up an item
    pub fn get(&self, key: ItemKey) -> Option<&OctreeItem<T>> {
        self.items.get(key)
    }

    /// All items whose bounding sphere touches the sphere at `center`
    pub fn query_sphere(&self, center: Vt, radius: f64) -> Vec<ItemKey> {
        let mut results = Vec::new();
        // Items can stick out of their node by up to the largest radius
        let reach = radius + self.max_item_radius;
        self.root
            .query_sphere(center, radius, reach, &self.items, &mut results);
        results
    }

    /// All items whose position lies inside `region`
    pub fn query_box(&self, region: &Cube) -> Vec<ItemKey> {
        let mut results = Vec::new();
        self.root.query_box(region, &self.items, &mut results);
        results
    }

    /// Iterate over all items
    pub fn iter(&self) -> impl Iterator<Item = (ItemKey, &OctreeItem<T>)> {
        self.items.iter()
    }

    /// Get all leaf nodes (for visualization)
    pub fn get_all_leaves(&self) -> Vec<&OctreeNode> {
        let mut leaves = Vec::new();
        self.root.get_all_leaves(&mut leaves);
        leaves
    }

    /// Number of leaf nodes
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Deepest node level currently in the tree
    pub fn depth(&self) -> u32 {
        self.root.max_depth()
    }

    /// Get total item count
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the tree holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clear the octree
    pub fn clear(&mut self) {
        self.root = OctreeNode::new(self.root.bounds, 0);
        self.items.clear();
        self.max_item_radius = 0.0;
    }
}
