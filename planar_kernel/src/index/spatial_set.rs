use super::interval_tree::{IntervalTree, NodeId, Search};
use crate::core::traits::{ControlFlow, Real};
use crate::shape::Box2;
use std::collections::BTreeMap;

/// Set of items indexed by bounding box.
///
/// Items are small copyable handles (edge or face ids for example), each stored at most once. The
/// box is supplied alongside the item since the handle itself does not own any geometry. Overlap
/// queries are answered by an [IntervalTree], membership by a map from item to tree node.
#[derive(Debug, Clone)]
pub struct SpatialSet<V, T = f64> {
    tree: IntervalTree<V, T>,
    nodes: BTreeMap<V, NodeId>,
}

impl<V, T> Default for SpatialSet<V, T>
where
    V: Copy + Ord,
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, T> SpatialSet<V, T>
where
    V: Copy + Ord,
    T: Real,
{
    pub fn new() -> Self {
        SpatialSet {
            tree: IntervalTree::new(),
            nodes: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
        self.nodes.clear();
    }

    /// Merged bounds of all stored boxes.
    #[inline]
    pub fn bounds(&self) -> Box2<T> {
        self.tree.bounds()
    }

    /// Adds `item` under `bbox`. Returns `false` (leaving the set unchanged) if `item` is already
    /// present.
    pub fn add(&mut self, item: V, bbox: Box2<T>) -> bool {
        if self.nodes.contains_key(&item) {
            return false;
        }
        let id = self.tree.insert(bbox, item);
        self.nodes.insert(item, id);
        true
    }

    /// Removes `item`, returns `false` if it was not present.
    pub fn delete(&mut self, item: &V) -> bool {
        match self.nodes.remove(item) {
            Some(id) => {
                let removed = self.tree.remove(id);
                debug_assert!(removed.is_some(), "set and tree out of sync");
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, item: &V) -> bool {
        self.nodes.contains_key(item)
    }

    /// Box `item` was added with.
    pub fn bbox_of(&self, item: &V) -> Option<Box2<T>> {
        self.nodes
            .get(item)
            .and_then(|&id| self.tree.get(id))
            .map(|(key, _)| *key)
    }

    /// Lazy query for every item whose box intersects `query` (touching counts).
    pub fn search<'a>(&'a self, query: &Box2<T>) -> SetSearch<'a, V, T> {
        SetSearch {
            inner: self.tree.search(query),
        }
    }

    /// Visit every item whose box intersects `query`, the visitor may break to stop the query.
    pub fn visit_search<C, F>(&self, query: &Box2<T>, mut visitor: F) -> C
    where
        C: ControlFlow,
        F: FnMut(V) -> C,
    {
        self.tree
            .visit_search(query, |_, _, item: &V| visitor(*item))
    }

    /// Iterate all items in box key order.
    pub fn iter(&self) -> impl Iterator<Item = (V, Box2<T>)> + '_ {
        self.tree.iter().map(|(_, key, item)| (*item, *key))
    }

    /// Copy of all items, for callers that mutate the set while walking it.
    pub fn snapshot(&self) -> Vec<V> {
        self.tree.iter().map(|(_, _, item)| *item).collect()
    }

    /// Validates the underlying tree and that every item maps to its own node.
    pub fn check(&self) -> bool {
        self.tree.check()
            && self.tree.len() == self.nodes.len()
            && self
                .nodes
                .iter()
                .all(|(item, &id)| self.tree.get(id).is_some_and(|(_, v)| v == item))
    }
}

/// Iterator returned by [SpatialSet::search].
pub struct SetSearch<'a, V, T> {
    inner: Search<'a, V, T>,
}

impl<V, T> Iterator for SetSearch<'_, V, T>
where
    V: Copy,
    T: Real,
{
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, item)| *item)
    }
}
