//! Layout calculation logic
//!
//! Pure functions for placing the navigator strip over the list area.

use ratatui::layout::Rect;

/// Columns between the strip and the right edge of the list area
pub const NAV_RIGHT_INSET: u16 = 1;

/// Rows kept free above and below the strip
pub const NAV_VERTICAL_INSET: u16 = 1;

/// Blank columns on each side of a label
pub const NAV_ITEM_PADDING: u16 = 1;

/// Placement of the navigator strip and its rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripLayout {
    /// Bounds that claim pointer input
    pub strip: Rect,
    /// Uniform height shared by every row
    pub row_height: u16,
    /// Label rows, top to bottom
    pub rows: Vec<Rect>,
    /// Section shown on each row; all sections when every one gets a row
    pub sections: Vec<usize>,
}

/// Calculate where the navigator strip and its rows go
///
/// # Arguments
/// * `area` - The list area the strip overlays
/// * `label_width` - Width of the widest label
/// * `count` - Number of sections
///
/// # Layout Strategy
/// - Strip hugs the right edge, inset by [`NAV_RIGHT_INSET`]
/// - Strip spans the area height minus [`NAV_VERTICAL_INSET`] at each end,
///   or the full height when the sections don't fit inside the insets
/// - Every row gets `max(1, strip_height / count)` rows; the block of rows is
///   centred vertically
/// - With more sections than rows, each row shows the section picked by
///   [`row_section`], so the first and last sections always get a row
///
/// # Examples
/// ```
/// use alphalist::logic::layout::navigator_strip;
/// use ratatui::layout::Rect;
///
/// // 40x12 area, 5 one-column labels: inner height 10, two rows per label
/// let layout = navigator_strip(Rect::new(0, 0, 40, 12), 1, 5);
/// assert_eq!(layout.strip, Rect::new(36, 1, 3, 10));
/// assert_eq!(layout.row_height, 2);
/// assert_eq!(layout.rows[0], Rect::new(36, 1, 3, 2));
/// assert_eq!(layout.rows[4], Rect::new(36, 9, 3, 2));
/// assert_eq!(layout.sections, vec![0, 1, 2, 3, 4]);
/// ```
pub fn navigator_strip(area: Rect, label_width: u16, count: usize) -> StripLayout {
    let available_width = area.width.saturating_sub(NAV_RIGHT_INSET);
    let width = label_width
        .saturating_add(NAV_ITEM_PADDING * 2)
        .min(available_width);
    let x = area.x + available_width - width;

    let inset_height = area.height.saturating_sub(NAV_VERTICAL_INSET * 2);
    let (y, height) = if count > usize::from(inset_height) {
        (area.y, area.height)
    } else {
        (area.y + NAV_VERTICAL_INSET.min(area.height), inset_height)
    };
    let strip = Rect::new(x, y, width, height);

    if count == 0 || height == 0 || width == 0 {
        return StripLayout {
            strip,
            row_height: 0,
            rows: Vec::new(),
            sections: Vec::new(),
        };
    }

    // Fits in u16: bounded by the strip height
    let row_count = count.min(usize::from(height)) as u16;
    let row_height = (height / row_count).max(1);
    let top = y + (height - row_height * row_count) / 2;

    let rows = (0..row_count)
        .map(|i| Rect::new(x, top + i * row_height, width, row_height))
        .collect();
    let sections = (0..usize::from(row_count))
        .map(|row| row_section(row, usize::from(row_count), count))
        .collect();

    StripLayout {
        strip,
        row_height,
        rows,
        sections,
    }
}

/// Section shown on a strip row
///
/// With one row per section this is the row itself. With fewer rows, rows
/// are spread evenly over the sections (rounded), pinning the first row to
/// the first section and the last row to the last one.
///
/// # Examples
/// ```
/// use alphalist::logic::layout::row_section;
///
/// assert_eq!(row_section(3, 5, 5), 3);
/// // 21 rows over 26 sections
/// assert_eq!(row_section(0, 21, 26), 0);
/// assert_eq!(row_section(19, 21, 26), 24);
/// assert_eq!(row_section(20, 21, 26), 25);
/// ```
pub fn row_section(row: usize, rows: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    if rows >= count {
        return row.min(count - 1);
    }
    if rows <= 1 {
        return 0;
    }
    let row = row.min(rows - 1);
    (row * (count - 1) + (rows - 1) / 2) / (rows - 1)
}
