use num_traits::PrimInt;

/// Deterministically pick `count` values that occur in `source`, at evenly
/// strided positions: `source[i * (len / count)]` for `i` in `0..count`.
///
/// Returns an empty sample when `source` is empty or `count` is 0.
///
/// When `count > source.len()` the stride is 0 and every pick is
/// `source[0]`: the result is `count` copies of the first value, not a
/// sample. This is left as-is; callers that sweep `count` upwards should
/// stop once it exceeds the source length.
pub fn existing_sample<T: Copy>(source: &[T], count: usize) -> Vec<T> {
    if source.is_empty() || count == 0 {
        return vec![];
    }
    let stride = source.len() / count;
    (0..count).map(|i| source[i * stride]).collect()
}

/// The `count` consecutive values `max + 1 ..= max + count` above the
/// largest value of `source`.
///
/// They are absent from `source` only because they exceed its maximum;
/// nothing is checked against the source itself. Values that would overflow
/// `T` are not produced, so the result may be shorter than `count` when the
/// maximum is close to `T::max_value()`.
pub fn nonexisting_sample<T: PrimInt>(source: &[T], count: usize) -> Vec<T> {
    let Some(&max) = source.iter().max() else {
        return vec![];
    };
    let mut out = Vec::with_capacity(count);
    let mut v = max;
    for _ in 0..count {
        match v.checked_add(&T::one()) {
            Some(next) => v = next,
            None => break,
        }
        out.push(v);
    }
    out
}
