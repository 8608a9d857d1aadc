// THEORY:
// A closed outline has no ends. When a window centred near the first vertex
// reaches "before" it, the points it needs are the last vertices of the outline,
// and vice versa. Circular padding maps any signed position along the outline
// back into `[0, len)` by treating the sequence as a ring.

/// Maps a signed `index` onto a ring of `len` elements.
///
/// Works for arbitrarily large positive or negative indices.
/// `len` must be non-zero.
pub fn circular_index(len: usize, index: isize) -> usize {
    debug_assert!(len > 0, "circular_index on an empty ring");
    index.rem_euclid(len as isize) as usize
}
