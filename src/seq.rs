/// A growable sequence of keys kept in insertion order.
///
/// No uniqueness invariant: duplicates are stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence<T> {
    vals: Vec<T>,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Sequence { vals: Vec::new() }
    }

    /// Add one value to the end.
    pub fn append(&mut self, v: T) {
        self.vals.push(v);
    }

    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.vals
    }

    pub fn into_vec(self) -> Vec<T> {
        self.vals
    }

    /// Replace the backing storage. Only used by the sorted variant once a
    /// merge has produced the new order.
    pub(crate) fn replace(&mut self, vals: Vec<T>) {
        self.vals = vals;
    }
}

impl<T: Clone> Sequence<T> {
    /// Bulk append, a single `extend` rather than repeated pushes.
    pub fn append_all(&mut self, vs: &[T]) {
        self.vals.extend_from_slice(vs);
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Linear scan from the start; stops at the first match.
    pub fn contains(&self, q: &T) -> bool {
        for v in &self.vals {
            if v == q {
                return true;
            }
        }
        false
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(vals: Vec<T>) -> Self {
        Sequence { vals }
    }
}
