//! Range selection logic
//!
//! Pure functions for computing which ids a shift-style range covers.

/// Ids between `anchor` and `target` (inclusive) in `visible` order
///
/// - `target` not visible: nothing is selected
/// - `anchor` missing or not visible: only `target`
/// - otherwise the contiguous span, independent of which end comes first
///
/// # Examples
/// ```
/// use docdeck::logic::selection::range_span;
///
/// let visible = ["a", "b", "c", "d"];
/// assert_eq!(range_span(Some("b"), "d", &visible), vec!["b", "c", "d"]);
/// assert_eq!(range_span(Some("d"), "b", &visible), vec!["b", "c", "d"]);
/// assert_eq!(range_span(Some("zz"), "c", &visible), vec!["c"]);
/// assert!(range_span(Some("a"), "zz", &visible).is_empty());
/// ```
pub fn range_span<'a, S: AsRef<str>>(
    anchor: Option<&str>,
    target: &str,
    visible: &'a [S],
) -> Vec<&'a str> {
    let Some(target_pos) = position_of(target, visible) else {
        return Vec::new();
    };

    match anchor.and_then(|a| position_of(a, visible)) {
        Some(anchor_pos) => {
            let (start, end) = if anchor_pos <= target_pos {
                (anchor_pos, target_pos)
            } else {
                (target_pos, anchor_pos)
            };
            visible[start..=end].iter().map(|s| s.as_ref()).collect()
        }
        None => vec![visible[target_pos].as_ref()],
    }
}

/// Position of `id` in `visible`
pub fn position_of<S: AsRef<str>>(id: &str, visible: &[S]) -> Option<usize> {
    visible.iter().position(|v| v.as_ref() == id)
}
