//! Augmented red-black interval tree keyed by boxes.
//!
//! Nodes live in an arena and are addressed by [NodeId]. Each node is keyed by the `low` corner of
//! its box (ties broken by `high`) and caches the merged bounds of its whole subtree, which keeps
//! overlap searches to O(log n + k).
use super::arena::{Arena, impl_arena_key};
use crate::core::traits::{ControlFlow, Real};
use crate::shape::Box2;
use std::cmp::Ordering;

/// Stable handle to a node of an [IntervalTree].
///
/// A handle stays valid until its node is removed, rebalancing never moves items between nodes.
/// Handles of removed nodes stay stale even when their slot is reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl_arena_key!(NodeId);

#[derive(Debug, Clone)]
struct Node<V, T> {
    key: Box2<T>,
    item: V,
    /// Merged bounds of this node's key and its subtree.
    max: Box2<T>,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
    red: bool,
}

/// Red-black interval tree over 2D boxes with an item attached to each box.
///
/// Duplicate keys are allowed.
///
/// # Examples
///
/// ```
/// # use planar_kernel::index::IntervalTree;
/// # use planar_kernel::shape::Box2;
/// let mut tree = IntervalTree::new();
/// tree.insert(Box2::new(0.0, 0.0, 1.0, 1.0), "a");
/// let b = tree.insert(Box2::new(5.0, 5.0, 6.0, 6.0), "b");
/// tree.insert(Box2::new(0.5, 0.5, 5.5, 5.5), "c");
///
/// let mut found: Vec<_> = tree.search(&Box2::new(4.0, 4.0, 7.0, 7.0)).map(|(_, v)| *v).collect();
/// found.sort();
/// assert_eq!(found, vec!["b", "c"]);
///
/// assert_eq!(tree.remove(b).map(|(_, v)| v), Some("b"));
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalTree<V, T = f64> {
    nodes: Arena<NodeId, Node<V, T>>,
    root: Option<NodeId>,
    len: usize,
}

impl<V, T> Default for IntervalTree<V, T>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, T> IntervalTree<V, T>
where
    T: Real,
{
    pub fn new() -> Self {
        IntervalTree {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Merged bounds of every key in the tree (empty box if the tree is empty).
    #[inline]
    pub fn bounds(&self) -> Box2<T> {
        match self.root {
            Some(r) => self.node(r).max,
            None => Box2::empty(),
        }
    }

    /// Key and item stored at `id`, `None` if the node has been removed.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<(&Box2<T>, &V)> {
        self.nodes.get(id).map(|n| (&n.key, &n.item))
    }

    /// Inserts `item` under `key`, returning the handle of the new node.
    pub fn insert(&mut self, key: Box2<T>, item: V) -> NodeId {
        let id = self.alloc(Node {
            key,
            item,
            max: key,
            parent: None,
            left: None,
            right: None,
            red: true,
        });

        let mut parent = None;
        let mut cur = self.root;
        while let Some(c) = cur {
            parent = Some(c);
            cur = if key.key_cmp(&self.node(c).key) == Ordering::Less {
                self.node(c).left
            } else {
                self.node(c).right
            };
        }

        self.node_mut(id).parent = parent;
        match parent {
            None => self.root = Some(id),
            Some(p) => {
                if key.key_cmp(&self.node(p).key) == Ordering::Less {
                    self.node_mut(p).left = Some(id);
                } else {
                    self.node_mut(p).right = Some(id);
                }
            }
        }

        self.propagate_max(parent);
        self.insert_fix(id);
        self.len += 1;
        id
    }

    /// Removes the node `id`, returning its key and item. No-op returning `None` if `id` is stale.
    pub fn remove(&mut self, id: NodeId) -> Option<(Box2<T>, V)> {
        if self.get(id).is_none() {
            return None;
        }

        let z = id;
        let z_left = self.node(z).left;
        let z_right = self.node(z).right;
        let mut removed_red = self.node(z).red;
        let x;
        let x_parent;

        match (z_left, z_right) {
            (None, _) => {
                x = z_right;
                x_parent = self.node(z).parent;
                self.transplant(z, z_right);
            }
            (Some(_), None) => {
                x = z_left;
                x_parent = self.node(z).parent;
                self.transplant(z, z_left);
            }
            (Some(zl), Some(zr)) => {
                // splice in the successor node (relinked, not copied, so handles stay stable)
                let y = self.subtree_min(zr);
                removed_red = self.node(y).red;
                x = self.node(y).right;
                if self.node(y).parent == Some(z) {
                    x_parent = Some(y);
                } else {
                    x_parent = self.node(y).parent;
                    self.transplant(y, x);
                    self.node_mut(y).right = Some(zr);
                    self.node_mut(zr).parent = Some(y);
                }
                self.transplant(z, Some(y));
                self.node_mut(y).left = Some(zl);
                self.node_mut(zl).parent = Some(y);
                self.node_mut(y).red = self.node(z).red;
            }
        }

        self.propagate_max(x_parent);
        if !removed_red {
            self.remove_fix(x, x_parent);
        }

        self.len -= 1;
        let node = self.free(z);
        Some((node.key, node.item))
    }

    /// Lazy search for every entry whose key box intersects `query` (touching counts).
    pub fn search<'a>(&'a self, query: &Box2<T>) -> Search<'a, V, T> {
        Search {
            tree: self,
            query: *query,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Visit every entry whose key box intersects `query`, stopping early when the visitor breaks.
    pub fn visit_search<C, F>(&self, query: &Box2<T>, mut visitor: F) -> C
    where
        C: ControlFlow,
        F: FnMut(NodeId, &Box2<T>, &V) -> C,
    {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if !self.push_candidates(node, query, &mut stack) {
                continue;
            }
            if node.key.intersects(query) {
                try_cf!(visitor(id, &node.key, &node.item));
            }
        }

        C::continuing()
    }

    /// In order (key order) iteration over all entries.
    pub fn iter(&self) -> Iter<'_, V, T> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Height of the tree (0 for an empty tree).
    pub fn height(&self) -> usize {
        fn height_of<V, T: Real>(tree: &IntervalTree<V, T>, id: Option<NodeId>) -> usize {
            match id {
                None => 0,
                Some(n) => {
                    let node = tree.node(n);
                    1 + height_of(tree, node.left).max(height_of(tree, node.right))
                }
            }
        }
        height_of(self, self.root)
    }

    /// Validates parent links, key ordering, red-black colouring and cached subtree bounds.
    ///
    /// Intended for tests, runs in O(n).
    pub fn check(&self) -> bool {
        if let Some(r) = self.root {
            if self.node(r).red || self.node(r).parent.is_some() {
                return false;
            }
        }
        self.check_subtree(self.root).is_some()
    }

    /// Returns black height of the subtree, `None` if any invariant is broken.
    fn check_subtree(&self, id: Option<NodeId>) -> Option<usize> {
        let Some(id) = id else {
            return Some(1);
        };
        let node = self.node(id);
        let mut max = node.key;
        for (child, is_left) in [(node.left, true), (node.right, false)] {
            if let Some(c) = child {
                let child_node = self.node(c);
                if child_node.parent != Some(id) || (node.red && child_node.red) {
                    return None;
                }
                let ord = child_node.key.key_cmp(&node.key);
                if (is_left && ord == Ordering::Greater) || (!is_left && ord == Ordering::Less) {
                    return None;
                }
                max = max.merge(&child_node.max);
            }
        }

        if max != node.max {
            return None;
        }

        let lh = self.check_subtree(node.left)?;
        let rh = self.check_subtree(node.right)?;
        if lh != rh {
            return None;
        }
        Some(lh + if node.red { 0 } else { 1 })
    }

    /// Pushes the children of `node` worth visiting, returns `false` if the whole subtree rooted
    /// at `node` cannot hold a match.
    #[inline]
    fn push_candidates(&self, node: &Node<V, T>, query: &Box2<T>, stack: &mut Vec<NodeId>) -> bool {
        if !node.max.intersects(query) {
            return false;
        }

        if let Some(l) = node.left {
            stack.push(l);
        }

        // every key in the right subtree has low >= node low, when that is already past the query
        // high corner (lexicographically) nothing in the right subtree can overlap
        if let Some(r) = node.right {
            if !query.high().lex_lt(&node.key.low()) {
                stack.push(r);
            }
        }

        true
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node<V, T> {
        self.nodes
            .get(id)
            .expect("node handle refers to a live node")
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<V, T> {
        self.nodes
            .get_mut(id)
            .expect("node handle refers to a live node")
    }

    #[inline]
    fn alloc(&mut self, node: Node<V, T>) -> NodeId {
        self.nodes.insert(node)
    }

    fn free(&mut self, id: NodeId) -> Node<V, T> {
        self.nodes
            .remove(id)
            .expect("node handle refers to a live node")
    }

    #[inline]
    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.is_some_and(|n| self.node(n).red)
    }

    #[inline]
    fn set_red(&mut self, id: NodeId, red: bool) {
        self.node_mut(id).red = red;
    }

    fn subtree_min(&self, mut id: NodeId) -> NodeId {
        while let Some(l) = self.node(id).left {
            id = l;
        }
        id
    }

    fn update_max(&mut self, id: NodeId) {
        let node = self.node(id);
        let mut max = node.key;
        if let Some(l) = node.left {
            max = max.merge(&self.node(l).max);
        }
        if let Some(r) = node.right {
            max = max.merge(&self.node(r).max);
        }
        self.node_mut(id).max = max;
    }

    fn propagate_max(&mut self, mut cur: Option<NodeId>) {
        while let Some(id) = cur {
            self.update_max(id);
            cur = self.node(id).parent;
        }
    }

    /// Points `parent`'s link that referenced `old` at `new` (or the root if `parent` is `None`).
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                if self.node(p).left == Some(old) {
                    self.node_mut(p).left = new;
                } else {
                    self.node_mut(p).right = new;
                }
            }
        }
    }

    fn transplant(&mut self, u: NodeId, v: Option<NodeId>) {
        let up = self.node(u).parent;
        self.replace_child(up, u, v);
        if let Some(v) = v {
            self.node_mut(v).parent = up;
        }
    }

    fn rotate_left(&mut self, x: NodeId) {
        let y = self
            .node(x)
            .right
            .expect("rotate_left requires a right child");
        let y_left = self.node(y).left;
        self.node_mut(x).right = y_left;
        if let Some(b) = y_left {
            self.node_mut(b).parent = Some(x);
        }
        let xp = self.node(x).parent;
        self.node_mut(y).parent = xp;
        self.replace_child(xp, x, Some(y));
        self.node_mut(y).left = Some(x);
        self.node_mut(x).parent = Some(y);

        // subtree bounds of y equal the old bounds of x, ancestors stay valid
        self.update_max(x);
        self.update_max(y);
    }

    fn rotate_right(&mut self, x: NodeId) {
        let y = self
            .node(x)
            .left
            .expect("rotate_right requires a left child");
        let y_right = self.node(y).right;
        self.node_mut(x).left = y_right;
        if let Some(b) = y_right {
            self.node_mut(b).parent = Some(x);
        }
        let xp = self.node(x).parent;
        self.node_mut(y).parent = xp;
        self.replace_child(xp, x, Some(y));
        self.node_mut(y).right = Some(x);
        self.node_mut(x).parent = Some(y);

        self.update_max(x);
        self.update_max(y);
    }

    fn insert_fix(&mut self, mut z: NodeId) {
        while let Some(p) = self.node(z).parent.filter(|&p| self.node(p).red) {
            // a red node is never the root, so the grandparent exists
            let g = self
                .node(p)
                .parent
                .expect("red parent always has a parent");
            if self.node(g).left == Some(p) {
                let uncle = self.node(g).right;
                if self.is_red(uncle) {
                    self.set_red(p, false);
                    if let Some(u) = uncle {
                        self.set_red(u, false);
                    }
                    self.set_red(g, true);
                    z = g;
                } else {
                    if self.node(p).right == Some(z) {
                        z = p;
                        self.rotate_left(z);
                    }
                    let p = self.node(z).parent.expect("rotated node has a parent");
                    let g = self.node(p).parent.expect("red parent always has a parent");
                    self.set_red(p, false);
                    self.set_red(g, true);
                    self.rotate_right(g);
                }
            } else {
                let uncle = self.node(g).left;
                if self.is_red(uncle) {
                    self.set_red(p, false);
                    if let Some(u) = uncle {
                        self.set_red(u, false);
                    }
                    self.set_red(g, true);
                    z = g;
                } else {
                    if self.node(p).left == Some(z) {
                        z = p;
                        self.rotate_right(z);
                    }
                    let p = self.node(z).parent.expect("rotated node has a parent");
                    let g = self.node(p).parent.expect("red parent always has a parent");
                    self.set_red(p, false);
                    self.set_red(g, true);
                    self.rotate_left(g);
                }
            }
        }

        if let Some(r) = self.root {
            self.set_red(r, false);
        }
    }

    fn remove_fix(&mut self, mut x: Option<NodeId>, mut parent: Option<NodeId>) {
        while x != self.root && !self.is_red(x) {
            let Some(p) = parent else {
                break;
            };

            if self.node(p).left == x {
                let mut w = self
                    .node(p)
                    .right
                    .expect("doubly black node always has a sibling");
                if self.node(w).red {
                    self.set_red(w, false);
                    self.set_red(p, true);
                    self.rotate_left(p);
                    w = self.node(p).right.expect("sibling after rotation");
                }
                if !self.is_red(self.node(w).left) && !self.is_red(self.node(w).right) {
                    self.set_red(w, true);
                    x = Some(p);
                    parent = self.node(p).parent;
                } else {
                    if !self.is_red(self.node(w).right) {
                        if let Some(wl) = self.node(w).left {
                            self.set_red(wl, false);
                        }
                        self.set_red(w, true);
                        self.rotate_right(w);
                        w = self.node(p).right.expect("sibling after rotation");
                    }
                    let p_red = self.node(p).red;
                    self.set_red(w, p_red);
                    self.set_red(p, false);
                    if let Some(wr) = self.node(w).right {
                        self.set_red(wr, false);
                    }
                    self.rotate_left(p);
                    x = self.root;
                    parent = None;
                }
            } else {
                let mut w = self
                    .node(p)
                    .left
                    .expect("doubly black node always has a sibling");
                if self.node(w).red {
                    self.set_red(w, false);
                    self.set_red(p, true);
                    self.rotate_right(p);
                    w = self.node(p).left.expect("sibling after rotation");
                }
                if !self.is_red(self.node(w).left) && !self.is_red(self.node(w).right) {
                    self.set_red(w, true);
                    x = Some(p);
                    parent = self.node(p).parent;
                } else {
                    if !self.is_red(self.node(w).left) {
                        if let Some(wr) = self.node(w).right {
                            self.set_red(wr, false);
                        }
                        self.set_red(w, true);
                        self.rotate_left(w);
                        w = self.node(p).left.expect("sibling after rotation");
                    }
                    let p_red = self.node(p).red;
                    self.set_red(w, p_red);
                    self.set_red(p, false);
                    if let Some(wl) = self.node(w).left {
                        self.set_red(wl, false);
                    }
                    self.rotate_right(p);
                    x = self.root;
                    parent = None;
                }
            }
        }

        if let Some(x) = x {
            self.set_red(x, false);
        }
    }
}

/// Iterator returned by [IntervalTree::search].
///
/// Lazy: the tree is walked as items are pulled, subtrees whose cached bounds miss the query are
/// never entered.
pub struct Search<'a, V, T> {
    tree: &'a IntervalTree<V, T>,
    query: Box2<T>,
    stack: Vec<NodeId>,
}

impl<'a, V, T> Iterator for Search<'a, V, T>
where
    T: Real,
{
    type Item = (&'a Box2<T>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = self.tree.node(id);
            if !self.tree.push_candidates(node, &self.query, &mut self.stack) {
                continue;
            }
            if node.key.intersects(&self.query) {
                return Some((&node.key, &node.item));
            }
        }
        None
    }
}

/// In order iterator returned by [IntervalTree::iter].
pub struct Iter<'a, V, T> {
    tree: &'a IntervalTree<V, T>,
    stack: Vec<NodeId>,
}

impl<V, T> Iter<'_, V, T>
where
    T: Real,
{
    fn push_left_spine(&mut self, mut cur: Option<NodeId>) {
        while let Some(id) = cur {
            self.stack.push(id);
            cur = self.tree.node(id).left;
        }
    }
}

impl<'a, V, T> Iterator for Iter<'a, V, T>
where
    T: Real,
{
    type Item = (NodeId, &'a Box2<T>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.node(id);
        self.push_left_spine(node.right);
        Some((id, &node.key, &node.item))
    }
}
