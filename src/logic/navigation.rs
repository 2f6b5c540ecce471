//! Cursor movement logic
//!
//! Pure functions for moving the cursor through list and grid layouts.
//! Lists wrap at either end; grids clamp to their edges.

/// A cursor movement requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    First,
    Last,
}

/// Calculate the next cursor index in a single-column list (wrapping)
///
/// # Examples
/// ```
/// use docdeck::logic::navigation::next_in_list;
///
/// assert_eq!(next_in_list(None, 0), None);
/// assert_eq!(next_in_list(None, 3), Some(0));
/// assert_eq!(next_in_list(Some(1), 3), Some(2));
/// assert_eq!(next_in_list(Some(2), 3), Some(0));
/// ```
pub fn next_in_list(current: Option<usize>, len: usize) -> Option<usize> {
    match (current, len) {
        (_, 0) => None,
        (Some(i), _) if i + 1 < len => Some(i + 1),
        (Some(_), _) => Some(0),
        (None, _) => Some(0),
    }
}

/// Calculate the previous cursor index in a single-column list (wrapping)
///
/// # Examples
/// ```
/// use docdeck::logic::navigation::prev_in_list;
///
/// assert_eq!(prev_in_list(None, 0), None);
/// assert_eq!(prev_in_list(None, 3), Some(2));
/// assert_eq!(prev_in_list(Some(0), 3), Some(2));
/// assert_eq!(prev_in_list(Some(2), 3), Some(1));
/// ```
pub fn prev_in_list(current: Option<usize>, len: usize) -> Option<usize> {
    match (current, len) {
        (_, 0) => None,
        (Some(i), _) if i > 0 && i < len => Some(i - 1),
        _ => Some(len - 1),
    }
}

/// Apply a cursor movement
///
/// # Arguments
/// * `current` - Current cursor index (None if nothing is under the cursor)
/// * `len` - Number of entries
/// * `columns` - Entries per row (1 for lists)
/// * `page_size` - Rows per page for PageUp/PageDown
///
/// # Returns
/// New cursor index, or None when there are no entries
pub fn move_cursor(
    current: Option<usize>,
    len: usize,
    movement: CursorMove,
    columns: usize,
    page_size: usize,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let columns = columns.max(1);
    let last = len - 1;
    let cur = current.unwrap_or(0).min(last);

    if columns == 1 {
        return match movement {
            CursorMove::Up => prev_in_list(current, len),
            CursorMove::Down => next_in_list(current, len),
            CursorMove::Left | CursorMove::Right => Some(cur),
            CursorMove::PageUp => Some(cur.saturating_sub(page_size.max(1))),
            CursorMove::PageDown => Some((cur + page_size.max(1)).min(last)),
            CursorMove::First => Some(0),
            CursorMove::Last => Some(last),
        };
    }

    let step = columns * page_size.max(1);
    Some(match movement {
        CursorMove::Up => cur.checked_sub(columns).unwrap_or(cur),
        CursorMove::Down => {
            if cur + columns <= last {
                cur + columns
            } else {
                cur
            }
        }
        CursorMove::Left => cur.saturating_sub(1),
        CursorMove::Right => (cur + 1).min(last),
        CursorMove::PageUp => cur.saturating_sub(step),
        CursorMove::PageDown => (cur + step).min(last),
        CursorMove::First => 0,
        CursorMove::Last => last,
    })
}

/// Keep a cursor inside a list that may have shrunk
pub fn clamp_cursor(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(current.unwrap_or(0).min(len - 1))
    }
}
