// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Left-leaning red-black tree carrying subtree sizes for order statistics.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use crate::error::{Error, Result};

/// Color of the link from a node's parent to the node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
    color: Color,
    size: usize,
}

impl<K, V> Node<K, V> {
    fn red(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            color: Color::Red,
            size: 1,
        }
    }

    fn resize(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }
}

fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |n| n.size)
}

fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_some_and(|n| n.color == Color::Red)
}

// The replacement inherits the old top's color; the demoted node hangs off a red link.
fn rotate_left<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut x) = h.right.take() else {
        return h;
    };
    h.right = x.left.take();
    x.color = h.color;
    h.color = Color::Red;
    h.resize();
    x.left = Some(h);
    x.resize();
    log::trace!("ordmap: rotate left, subtree size {}", x.size);
    x
}

fn rotate_right<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut x) = h.left.take() else {
        return h;
    };
    h.left = x.right.take();
    x.color = h.color;
    h.color = Color::Red;
    h.resize();
    x.right = Some(h);
    x.resize();
    log::trace!("ordmap: rotate right, subtree size {}", x.size);
    x
}

fn flip_colors<K, V>(h: &mut Node<K, V>) {
    h.color = Color::Red;
    for child in [h.left.as_mut(), h.right.as_mut()].into_iter().flatten() {
        child.color = Color::Black;
    }
    log::trace!("ordmap: color flip, subtree size {}", h.size);
}

fn put<K: Ord, V>(link: Link<K, V>, key: K, value: V, old: &mut Option<V>) -> Box<Node<K, V>> {
    let Some(mut h) = link else {
        return Box::new(Node::red(key, value));
    };
    match key.cmp(&h.key) {
        Ordering::Less => h.left = Some(put(h.left.take(), key, value, old)),
        Ordering::Greater => h.right = Some(put(h.right.take(), key, value, old)),
        Ordering::Equal => *old = Some(core::mem::replace(&mut h.value, value)),
    }

    if is_red(&h.right) && !is_red(&h.left) {
        h = rotate_left(h);
    }
    if is_red(&h.left) && h.left.as_ref().is_some_and(|l| is_red(&l.left)) {
        h = rotate_right(h);
    }
    if is_red(&h.left) && is_red(&h.right) {
        flip_colors(&mut h);
    }
    h.resize();
    h
}

fn floor<'a, K: Ord, V>(node: Option<&'a Node<K, V>>, key: &K) -> Option<&'a Node<K, V>> {
    let node = node?;
    match key.cmp(&node.key) {
        Ordering::Equal => Some(node),
        Ordering::Less => floor(node.left.as_deref(), key),
        Ordering::Greater => floor(node.right.as_deref(), key).or(Some(node)),
    }
}

fn ceiling<'a, K: Ord, V>(node: Option<&'a Node<K, V>>, key: &K) -> Option<&'a Node<K, V>> {
    let node = node?;
    match key.cmp(&node.key) {
        Ordering::Equal => Some(node),
        Ordering::Greater => ceiling(node.right.as_deref(), key),
        Ordering::Less => ceiling(node.left.as_deref(), key).or(Some(node)),
    }
}

fn rank<K: Ord, V>(node: Option<&Node<K, V>>, key: &K) -> usize {
    let Some(node) = node else {
        return 0;
    };
    match key.cmp(&node.key) {
        Ordering::Less => rank(node.left.as_deref(), key),
        Ordering::Greater => 1 + size(&node.left) + rank(node.right.as_deref(), key),
        Ordering::Equal => size(&node.left),
    }
}

/// Ordered map backed by a left-leaning red-black tree.
///
/// Red links always lean left and never appear twice in a row, and every path from the root to
/// an empty child crosses the same number of black links, so the height stays logarithmic.
/// Each node also records the size of its subtree, which makes [`rank`](Self::rank) and
/// [`range_count`](Self::range_count) logarithmic too.
///
/// Entries are never removed; a repeated key overwrites the stored value.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    root: Link<K, V>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderedMap")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Create an empty map.
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        size(&self.root)
    }

    /// True if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Value stored under the smallest key.
    pub fn min(&self) -> Result<&V> {
        self.leftmost().map(|n| &n.value)
    }

    /// Value stored under the largest key.
    pub fn max(&self) -> Result<&V> {
        self.rightmost().map(|n| &n.value)
    }

    /// The smallest key.
    pub fn min_key(&self) -> Result<&K> {
        self.leftmost().map(|n| &n.key)
    }

    /// The largest key.
    pub fn max_key(&self) -> Result<&K> {
        self.rightmost().map(|n| &n.key)
    }

    /// Iterate over `(key, value, subtree size)` in ascending key order.
    ///
    /// The third element is the number of entries in the subtree rooted at the yielded entry's
    /// node, as stored when the iterator reached it.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref())
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _, _)| k)
    }

    /// Values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v, _)| v)
    }

    fn leftmost(&self) -> Result<&Node<K, V>> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyMap)?;
        while let Some(l) = node.left.as_deref() {
            node = l;
        }
        Ok(node)
    }

    fn rightmost(&self) -> Result<&Node<K, V>> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyMap)?;
        while let Some(r) = node.right.as_deref() {
            node = r;
        }
        Ok(node)
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Insert `value` under `key`, returning the value it replaced.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let mut old = None;
        let mut root = put(self.root.take(), key, value, &mut old);
        root.color = Color::Black;
        self.root = Some(root);
        old
    }

    /// Value stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// True if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Greatest key less than or equal to `key`.
    pub fn floor(&self, key: &K) -> Option<&K> {
        floor(self.root.as_deref(), key).map(|n| &n.key)
    }

    /// Least key greater than or equal to `key`.
    pub fn ceiling(&self, key: &K) -> Option<&K> {
        ceiling(self.root.as_deref(), key).map(|n| &n.key)
    }

    /// Number of keys strictly less than `key`. `key` need not be present.
    pub fn rank(&self, key: &K) -> usize {
        rank(self.root.as_deref(), key)
    }

    /// Number of keys in `[lo, hi]`.
    ///
    /// Computed as `rank(hi) - rank(lo)`, plus one when `hi` is present. The bounds are not
    /// checked: a reversed range gives a meaningless, usually negative, count.
    pub fn range_count(&self, lo: &K, hi: &K) -> isize {
        let count = self.rank(hi) as isize - self.rank(lo) as isize;
        if self.contains_key(hi) {
            count + 1
        } else {
            count
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V, usize);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator returned by [`OrderedMap::iter`].
///
/// Holds the left spine of the unvisited part of the tree on an explicit stack.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>) -> Self {
        let mut it = Self { stack: Vec::new() };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<K, V>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, &node.value, node.size))
    }
}

impl<K, V> Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("pending", &self.stack.len())
            .finish()
    }
}
