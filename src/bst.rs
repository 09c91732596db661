use std::cmp::Ordering;

#[derive(Debug)]
struct Node<T> {
    key: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(key: T) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

/// An unbalanced binary search tree.
///
/// Every node owns its children. Keys in a left subtree are strictly
/// smaller, keys in a right subtree strictly larger; inserting a key that is
/// already present is a no-op.
///
/// There is no rebalancing: the shape is fully determined by insertion
/// order, so sorted input degrades the tree into a linked list of depth `n`.
#[derive(Debug)]
pub struct Bst<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Bst { root: None, len: 0 }
    }
}

impl<T: Ord> Bst<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`, walking down from the root. Iterative so that
    /// degenerate trees do not overflow the stack.
    pub fn insert(&mut self, key: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return,
            };
        }
        *slot = Some(Node::new(key));
        self.len += 1;
    }

    pub fn contains(&self, q: &T) -> bool {
        let mut cur = &self.root;
        while let Some(node) = cur {
            cur = match q.cmp(&node.key) {
                Ordering::Equal => return true,
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
            };
        }
        false
    }
}

impl<T> Bst<T> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![];
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, d)) = stack.pop() {
            max = max.max(d);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, d + 1));
            }
        }
        max
    }

    /// In-order (ascending) iteration.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut it = Iter { stack: vec![] };
        it.push_left(self.root.as_deref());
        it
    }
}

impl<T: Ord> Extend<T> for Bst<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for k in iter {
            self.insert(k);
        }
    }
}

impl<T: Ord> FromIterator<T> for Bst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Bst::new();
        t.extend(iter);
        t
    }
}

pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.key)
    }
}

impl<T> Drop for Bst<T> {
    // The derived drop recurses once per level, which overflows the stack on
    // the degenerate trees built from sorted input.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
