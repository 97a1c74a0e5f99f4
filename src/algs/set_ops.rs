//! Sorted-array set algebra used by the deferred containers.
//!
//! Every routine works on `(key, value)` vectors sorted ascending by key with
//! at most one entry per key. Merges are a single linear pass over both
//! inputs, so reconciling a batch of `k` entries into `n` costs
//! `O(k log k + n + k)`.

use itertools::{EitherOrBoth, Itertools};

/// Stable sort of `(key, value)` pairs by key; equal keys keep insertion order.
#[inline]
pub fn sort_by_key<K: Ord, V>(entries: &mut [(K, V)]) {
    entries.sort_by(|a, b| a.0.cmp(&b.0));
}

/// Collapse runs of equal keys in a sorted batch, keeping the **last** entry
/// of each run (most recent write wins).
pub fn dedup_keep_last<K: Ord, V>(entries: &mut Vec<(K, V)>) {
    if entries.len() < 2 {
        return;
    }
    entries.reverse();
    entries.dedup_by(|later, kept| later.0 == kept.0);
    entries.reverse();
}

/// Sort and deduplicate a batch of bare keys.
#[inline]
pub fn sort_keys<K: Ord>(keys: &mut Vec<K>) {
    keys.sort_unstable();
    keys.dedup();
}

/// `dst ∪ src`, with `src` overriding `dst` on key collision.
///
/// Both inputs must be sorted and free of duplicate keys. Returns the new
/// length of `dst`.
pub fn merge_union<K: Ord, V>(dst: &mut Vec<(K, V)>, src: Vec<(K, V)>) -> usize {
    if src.is_empty() {
        return dst.len();
    }
    // Append fast path: streaming construction usually adds keys past the tail.
    let appends = match (dst.last(), src.first()) {
        (None, _) => true,
        (Some(last), Some(first)) => last.0 < first.0,
        (Some(_), None) => false,
    };
    if appends {
        dst.extend(src);
        return dst.len();
    }

    let old = std::mem::take(dst);
    dst.reserve(old.len() + src.len());
    dst.extend(
        old.into_iter()
            .merge_join_by(src, |a, b| a.0.cmp(&b.0))
            .map(|e| match e {
                EitherOrBoth::Left(kept) | EitherOrBoth::Right(kept) => kept,
                EitherOrBoth::Both(_, newer) => newer,
            }),
    );
    dst.len()
}

/// `dst \ remove`: drop every entry whose key appears in `remove`.
///
/// `remove` must be sorted ascending; keys absent from `dst` are ignored.
/// Returns the new length of `dst`.
pub fn merge_difference<K: Ord, V>(dst: &mut Vec<(K, V)>, remove: &[K]) -> usize {
    if remove.is_empty() || dst.is_empty() {
        return dst.len();
    }
    let mut cursor = remove.iter().peekable();
    dst.retain(|(k, _)| {
        while cursor.next_if(|r| **r < *k).is_some() {}
        cursor.peek().map_or(true, |r| **r != *k)
    });
    dst.len()
}
