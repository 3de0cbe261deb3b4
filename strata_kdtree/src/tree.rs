// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: insertion, membership, range and nearest queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::{Error, Result};
use crate::types::{Axis, Point, Rectangle, Scalar, le, lt};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    point: Point<T>,
    left: Link<T>,
    right: Link<T>,
    size: usize,
}

impl<T> Node<T> {
    fn leaf(point: Point<T>) -> Self {
        Self {
            point,
            left: None,
            right: None,
            size: 1,
        }
    }
}

fn size<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.size)
}

fn height<T>(link: &Link<T>) -> usize {
    let mut stack: Vec<(&Node<T>, usize)> = link.as_deref().map(|n| (n, 1)).into_iter().collect();
    let mut max = 0;
    while let Some((node, level)) = stack.pop() {
        max = max.max(level);
        for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
            stack.push((child, level + 1));
        }
    }
    max
}

/// Whether `p` routes into the left subtree of `node` when `node` discriminates on `axis`.
///
/// Ties go left, so duplicates of a stored coordinate always end up in the left subtree.
#[inline]
fn goes_left<T: Scalar>(p: &Point<T>, node: &Point<T>, axis: Axis) -> bool {
    le(p.coord(axis), node.coord(axis))
}

/// 2D search tree whose levels alternate between x and y discrimination.
///
/// Points are stored one per node and never removed. Inserting a point that is already
/// present adds a second node for it, so [`len`](Self::len) counts insertions rather than
/// distinct points.
///
/// The tree is a plain owned structure: it is neither `Sync`-aware nor internally locked, and
/// callers that share it must serialize access themselves.
pub struct KdTree<T: Scalar> {
    root: Link<T>,
}

// Sorted input builds a degenerate tree, so neither teardown nor copying may recurse per level.
impl<T: Scalar> Drop for KdTree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Scalar> Clone for KdTree<T> {
    // Pre-order reinsertion reproduces the same shape.
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl<T: Scalar> Default for KdTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Debug for KdTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl<T: Scalar> KdTree<T> {
    /// Create an empty tree.
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Number of stored nodes (duplicates included).
    pub fn len(&self) -> usize {
        size(&self.root)
    }

    /// True if no point has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Insert a point.
    ///
    /// At each level the point goes left when its coordinate on the level's axis is less than
    /// or equal to the node's, and right otherwise. The new node is attached at the first
    /// empty child reached.
    pub fn insert(&mut self, point: Point<T>) {
        let mut link = &mut self.root;
        let mut axis = Axis::ROOT;
        let mut depth = 1;
        while let Some(node) = link {
            node.size += 1;
            link = if goes_left(&point, &node.point, axis) {
                &mut node.left
            } else {
                &mut node.right
            };
            axis = axis.next();
            depth += 1;
        }
        log::trace!("kdtree: placing {point:?} at level {depth}");
        *link = Some(Box::new(Node::leaf(point)));
    }

    /// Whether a point equal to `point` on both coordinates was inserted.
    ///
    /// A tie on the level's axis with a mismatch on the other axis continues down the left
    /// subtree only, mirroring where [`insert`](Self::insert) places ties.
    pub fn contains(&self, point: &Point<T>) -> bool {
        let mut link = self.root.as_deref();
        let mut axis = Axis::ROOT;
        while let Some(node) = link {
            let ours = point.coord(axis);
            let theirs = node.point.coord(axis);
            link = if lt(ours, theirs) {
                node.left.as_deref()
            } else if lt(theirs, ours) {
                node.right.as_deref()
            } else if ours.partial_cmp(&theirs).is_none() {
                return false;
            } else {
                let other = axis.next();
                if point.coord(other).partial_cmp(&node.point.coord(other))
                    == Some(core::cmp::Ordering::Equal)
                {
                    return true;
                }
                node.left.as_deref()
            };
            axis = axis.next();
        }
        false
    }

    /// Points contained in `rect` (inclusive bounds), in no particular order.
    ///
    /// Only the alternating-axis ordering is used for pruning: a subtree is skipped when the
    /// rectangle's interval on the node's axis lies entirely on the other side of the node.
    /// Each call starts a fresh traversal.
    pub fn range(&self, rect: &Rectangle<T>) -> Range<'_, T> {
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, Axis::ROOT));
        }
        Range {
            rect: *rect,
            stack,
            visited: 0,
        }
    }

    /// The points visited by a single descent towards `target`.
    ///
    /// Starting at the root, each step follows the child that [`insert`](Self::insert) would
    /// choose for `target`. Exactly one node per level is yielded.
    pub fn path(&self, target: Point<T>) -> Path<'_, T> {
        Path {
            target,
            next: self.root.as_deref(),
            axis: Axis::ROOT,
        }
    }

    /// Closest point to `target` among the points on its descent [`path`](Self::path).
    ///
    /// Candidates are compared by [`Point::distance_to`]; on equal distances the one closest
    /// to the root wins. This does not backtrack into sibling subtrees, so the result can be
    /// farther than the globally closest stored point, and the cost is one full descent rather
    /// than a pruned search.
    pub fn nearest(&self, target: &Point<T>) -> Result<Point<T>> {
        self.nearest_with_distance(target).map(|(p, _)| p)
    }

    /// Like [`nearest`](Self::nearest), also returning the rounded distance.
    pub fn nearest_with_distance(&self, target: &Point<T>) -> Result<(Point<T>, f64)> {
        let candidates: Vec<(f64, Point<T>)> = self
            .path(*target)
            .map(|p| (p.distance_to(target), p))
            .collect();
        let mut it = candidates.iter().copied();
        let first = it.next().ok_or(Error::EmptyTree)?;
        let (dist, best) = it.fold(first, |best, c| if c.0 < best.0 { c } else { best });
        log::debug!(
            "kdtree: nearest to {target:?} is {best:?} ({dist}) among {} candidates",
            candidates.len()
        );
        Ok((best, dist))
    }

    /// Iterate over every stored point in pre-order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }
}

impl<T: Scalar> FromIterator<Point<T>> for KdTree<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Scalar> Extend<Point<T>> for KdTree<T> {
    fn extend<I: IntoIterator<Item = Point<T>>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl<'a, T: Scalar> IntoIterator for &'a KdTree<T> {
    type Item = Point<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`KdTree::range`].
pub struct Range<'a, T: Scalar> {
    rect: Rectangle<T>,
    stack: Vec<(&'a Node<T>, Axis)>,
    visited: usize,
}

impl<T: Scalar> Iterator for Range<'_, T> {
    type Item = Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, axis)) = self.stack.pop() {
            self.visited += 1;
            let v = node.point.coord(axis);
            let (lo, hi) = self.rect.interval(axis);
            let (left, right) = if le(lo, v) {
                (true, lt(v, hi))
            } else {
                (false, true)
            };
            if right && let Some(r) = node.right.as_deref() {
                self.stack.push((r, axis.next()));
            }
            if left && let Some(l) = node.left.as_deref() {
                self.stack.push((l, axis.next()));
            }
            if self.rect.contains(&node.point) {
                return Some(node.point);
            }
        }
        log::debug!("kdtree: range {:?} visited {} nodes", self.rect, self.visited);
        None
    }
}

impl<T: Scalar> Debug for Range<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Range")
            .field("rect", &self.rect)
            .field("pending", &self.stack.len())
            .field("visited", &self.visited)
            .finish()
    }
}

/// Iterator returned by [`KdTree::path`].
pub struct Path<'a, T: Scalar> {
    target: Point<T>,
    next: Option<&'a Node<T>>,
    axis: Axis,
}

impl<T: Scalar> Iterator for Path<'_, T> {
    type Item = Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = if goes_left(&self.target, &node.point, self.axis) {
            node.left.as_deref()
        } else {
            node.right.as_deref()
        };
        self.axis = self.axis.next();
        Some(node.point)
    }
}

impl<T: Scalar> Debug for Path<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Path")
            .field("target", &self.target)
            .field("axis", &self.axis)
            .field("done", &self.next.is_none())
            .finish()
    }
}

/// Iterator returned by [`KdTree::iter`].
pub struct Iter<'a, T: Scalar> {
    stack: Vec<&'a Node<T>>,
}

impl<T: Scalar> Iterator for Iter<'_, T> {
    type Item = Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(r) = node.right.as_deref() {
            self.stack.push(r);
        }
        if let Some(l) = node.left.as_deref() {
            self.stack.push(l);
        }
        Some(node.point)
    }
}

impl<T: Scalar> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("pending", &self.stack.len())
            .finish()
    }
}
