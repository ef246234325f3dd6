//! Right-biased merge for ordered key-value containers
//!
//! Used both for the generic ∪ movement table union and for layering the
//! generated settings over the template document.

/// Merge `right` into `left`
///
/// - Keys only in `left` keep their position and value
/// - Keys in both keep the `left` position with the `right` value
/// - Keys only in `right` are appended in `right`'s order
///
/// `left` must be an insertion-ordered map whose `Extend` replaces values in
/// place (`IndexMap`, or `serde_json::Map` with `preserve_order`).
pub fn merge<M, K, V, I>(mut left: M, right: I) -> M
where
    M: Extend<(K, V)>,
    I: IntoIterator<Item = (K, V)>,
{
    left.extend(right);
    left
}
