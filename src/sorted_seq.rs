use crate::seq::Sequence;

/// A [`Sequence`] that can be sorted once and then queried with binary
/// search.
///
/// Appending does not maintain order. [`SortedSequence::binary_search`] is
/// only meaningful after [`SortedSequence::sort`] has been called since the
/// last append; on unsorted contents it returns an unspecified answer (it
/// never panics). This is not tracked at runtime.
#[derive(Debug, Clone, Default)]
pub struct SortedSequence<T> {
    seq: Sequence<T>,
}

impl<T> SortedSequence<T> {
    pub fn new() -> Self {
        SortedSequence {
            seq: Sequence::new(),
        }
    }

    pub fn append(&mut self, v: T) {
        self.seq.append(v);
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        self.seq.as_slice()
    }
}

impl<T: Clone> SortedSequence<T> {
    pub fn append_all(&mut self, vs: &[T]) {
        self.seq.append_all(vs);
    }
}

impl<T: Ord + Clone> SortedSequence<T> {
    /// Merge sort the contents and replace the backing storage with the
    /// result.
    pub fn sort(&mut self) {
        let sorted = merge_sort(self.seq.as_slice());
        self.seq.replace(sorted);
    }

    /// Iterative binary search over `[0, len-1]`.
    ///
    /// Requires the contents to be sorted, see the type docs.
    pub fn binary_search(&self, q: &T) -> bool {
        let vals = self.seq.as_slice();
        if vals.is_empty() {
            return false;
        }
        // Signed bounds: `high` goes to -1 when q is below the first value.
        let mut low: isize = 0;
        let mut high: isize = vals.len() as isize - 1;
        while low <= high {
            let mid = low + (high - low) / 2;
            let v = &vals[mid as usize];
            if v == q {
                return true;
            } else if v < q {
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }
        false
    }
}

/// Top-down merge sort into a fresh vector. O(n log n) time, O(n) extra
/// space.
///
/// Splits at `len / 2` (the left half is the shorter one for odd lengths).
/// The merge takes the left head only when it is strictly smaller, so among
/// equal keys the right half's copy goes first. For plain integers this is
/// unobservable.
pub fn merge_sort<T: Ord + Clone>(vals: &[T]) -> Vec<T> {
    if vals.len() <= 1 {
        return vals.to_vec();
    }
    let mid = vals.len() / 2;
    let left = merge_sort(&vals[..mid]);
    let right = merge_sort(&vals[mid..]);
    merge(left, right)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut l = left.into_iter().peekable();
    let mut r = right.into_iter().peekable();
    loop {
        let take_left = match (l.peek(), r.peek()) {
            (Some(a), Some(b)) => a < b,
            _ => break,
        };
        let next = if take_left { l.next() } else { r.next() };
        out.extend(next);
    }
    out.extend(l);
    out.extend(r);
    out
}
