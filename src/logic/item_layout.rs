//! Item layout calculation
//!
//! Pure functions that turn section sizes and configured heights into row
//! offsets, so the list can scroll to any row without measuring it first.
//!
//! Each section contributes, in order: one header row, its items, one footer
//! row. Separators are folded into the length of every item except the last
//! one in its section.

use crate::model::list::{ListConfig, FALLBACK_ITEM_HEIGHT};

/// What a flattened row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header { section: usize },
    Item { section: usize, row: usize },
    Footer { section: usize },
}

impl RowKind {
    pub fn section(&self) -> usize {
        match *self {
            RowKind::Header { section }
            | RowKind::Item { section, .. }
            | RowKind::Footer { section } => section,
        }
    }
}

/// Offset and length of one flattened row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub kind: RowKind,
    pub index: usize,
    pub offset: usize,
    pub length: usize,
    /// Trailing rows of `length` that belong to the separator
    pub separator: usize,
}

impl RowLayout {
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Height of one item row
///
/// Only the first section uses the configured item height; every other
/// section uses [`FALLBACK_ITEM_HEIGHT`].
pub fn item_height(config: &ListConfig, section_index: usize, _row_index: usize) -> u16 {
    if section_index == 0 {
        config.item_height
    } else {
        FALLBACK_ITEM_HEIGHT
    }
}

pub fn section_header_height(config: &ListConfig, _section_index: usize) -> u16 {
    config.section_header_height
}

pub fn section_footer_height(config: &ListConfig, _section_index: usize) -> u16 {
    config.section_footer_height
}

/// Flatten sections into rows with precomputed offsets
///
/// # Examples
/// ```
/// use alphalist::logic::item_layout::{compute_layout, RowKind};
/// use alphalist::model::list::ListConfig;
///
/// // Section 0 has 2 items of height 2, section 1 has 1 item of height 1
/// let rows = compute_layout(&ListConfig::new(2), &[2, 1]);
/// let offsets: Vec<usize> = rows.iter().map(|r| r.offset).collect();
/// // header, item, item, footer(0), header, item, footer(0)
/// assert_eq!(offsets, vec![0, 1, 3, 5, 5, 6, 7]);
/// assert_eq!(rows[5].kind, RowKind::Item { section: 1, row: 0 });
/// ```
pub fn compute_layout(config: &ListConfig, section_lens: &[usize]) -> Vec<RowLayout> {
    let capacity = section_lens.iter().map(|len| len + 2).sum();
    let mut rows = Vec::with_capacity(capacity);
    let mut offset = 0usize;

    let mut push = |rows: &mut Vec<RowLayout>, kind: RowKind, length: usize, separator: usize| {
        rows.push(RowLayout {
            kind,
            index: rows.len(),
            offset,
            length,
            separator,
        });
        offset += length;
    };

    for (section, &len) in section_lens.iter().enumerate() {
        push(
            &mut rows,
            RowKind::Header { section },
            section_header_height(config, section) as usize,
            0,
        );

        for row in 0..len {
            let separator = if row + 1 < len {
                config.separator_height as usize
            } else {
                0
            };
            let length = item_height(config, section, row) as usize + separator;
            push(&mut rows, RowKind::Item { section, row }, length, separator);
        }

        push(
            &mut rows,
            RowKind::Footer { section },
            section_footer_height(config, section) as usize,
            0,
        );
    }

    rows
}

/// Total scrollable height of the rows
pub fn content_height(rows: &[RowLayout]) -> usize {
    rows.last().map(RowLayout::end).unwrap_or(0)
}

/// Index of the row covering `offset`, skipping zero-length rows
pub fn row_at_offset(rows: &[RowLayout], offset: usize) -> Option<usize> {
    let index = rows.partition_point(|row| row.end() <= offset);
    rows.get(index).filter(|row| row.offset <= offset).map(|row| row.index)
}

/// Offset of an item row, or of the section header when the item doesn't exist
///
/// Returns `None` when the section itself is out of range.
pub fn location_offset(rows: &[RowLayout], section_index: usize, item_index: usize) -> Option<LocationOffset> {
    let mut header = None;
    for row in rows {
        match row.kind {
            RowKind::Header { section } if section == section_index => header = Some(row.offset),
            RowKind::Item { section, row: item } if section == section_index && item == item_index => {
                return Some(LocationOffset::Item(row.offset));
            }
            RowKind::Footer { section } if section == section_index => break,
            _ => {}
        }
    }
    header.map(LocationOffset::Header)
}

/// Resolved position of a scroll target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationOffset {
    Item(usize),
    /// The section has no such item; its header offset is used instead
    Header(usize),
}
