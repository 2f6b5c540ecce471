//! Layout calculation logic
//!
//! Pure functions for calculating UI layout dimensions.

/// Minimum width of a grid card in terminal cells (borders included)
pub const MIN_CARD_WIDTH: u16 = 26;

/// Height of a grid card in terminal rows (borders included)
pub const CARD_HEIGHT: u16 = 6;

/// Calculate how many grid cards fit side by side
///
/// # Arguments
/// * `content_width` - Available horizontal space in terminal cells
/// * `min_card_width` - Narrowest a card may be drawn
///
/// # Returns
/// Number of columns, never less than 1
///
/// # Examples
/// ```
/// use docdeck::logic::layout::grid_columns;
///
/// assert_eq!(grid_columns(100, 25), 4);
/// assert_eq!(grid_columns(99, 25), 3);
/// assert_eq!(grid_columns(10, 25), 1); // Narrow terminals still get one column
/// ```
pub fn grid_columns(content_width: u16, min_card_width: u16) -> usize {
    (content_width / min_card_width.max(1)).max(1) as usize
}

/// Width of the folder explorer panel in tree mode
///
/// A quarter of the screen, kept between 20 and 40 cells, and never more
/// than half of the available width.
///
/// # Examples
/// ```
/// use docdeck::logic::layout::explorer_width;
///
/// assert_eq!(explorer_width(120), 30);
/// assert_eq!(explorer_width(200), 40);
/// assert_eq!(explorer_width(60), 20);
/// assert_eq!(explorer_width(30), 15);
/// ```
pub fn explorer_width(total_width: u16) -> u16 {
    (total_width / 4).clamp(20, 40).min(total_width / 2)
}

/// First row to draw so that `cursor_row` stays on screen
///
/// The offset only moves when the cursor leaves the window, so scrolling
/// feels the same as in a list widget.
///
/// # Arguments
/// * `cursor_row` - Row the cursor is on
/// * `current_offset` - Offset used for the previous frame
/// * `visible_rows` - Rows that fit in the viewport
///
/// # Examples
/// ```
/// use docdeck::logic::layout::scroll_offset;
///
/// assert_eq!(scroll_offset(0, 0, 3), 0);
/// assert_eq!(scroll_offset(5, 0, 3), 3);  // Scroll down so row 5 is last
/// assert_eq!(scroll_offset(4, 3, 3), 3);  // Still in window
/// assert_eq!(scroll_offset(1, 3, 3), 1);  // Scroll back up
/// ```
pub fn scroll_offset(cursor_row: usize, current_offset: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    if cursor_row < current_offset {
        cursor_row
    } else if cursor_row >= current_offset + visible_rows {
        cursor_row + 1 - visible_rows
    } else {
        current_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_exact_fit() {
        assert_eq!(grid_columns(MIN_CARD_WIDTH * 3, MIN_CARD_WIDTH), 3);
    }

    #[test]
    fn test_grid_columns_zero_card_width() {
        // Guard against division by zero
        assert_eq!(grid_columns(80, 0), 80);
    }

    #[test]
    fn test_explorer_width_bounds() {
        assert_eq!(explorer_width(0), 0);
        assert_eq!(explorer_width(80), 20);
        assert_eq!(explorer_width(400), 40);
    }

    #[test]
    fn test_scroll_offset_follows_cursor() {
        let mut offset = 0;
        for row in 0..10 {
            offset = scroll_offset(row, offset, 4);
            assert!(row >= offset && row < offset + 4);
        }
        assert_eq!(offset, 6);

        offset = scroll_offset(0, offset, 4);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_scroll_offset_zero_height() {
        assert_eq!(scroll_offset(3, 0, 0), 3);
    }
}
