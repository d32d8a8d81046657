//! Pointer-to-section mapping
//!
//! Pure functions behind the navigator's drag handling. All rows are assumed
//! to be as tall as the measured first row; only that row is ever measured, so
//! rows of differing heights make later indices drift.

use crate::model::navigator::LayoutMeasurement;

/// Resolve a pointer row to a section index
///
/// # Arguments
/// * `y` - Absolute row of the pointer
/// * `measure` - Reference measurement of the first navigator row
/// * `section_count` - Number of sections in the navigator
///
/// # Returns
/// * `None` - No measurement yet, a zero-height measurement, no sections, or
///   the pointer is above the first row
/// * `Some(index)` - `floor((y - measure.y) / measure.height)`, clamped to the
///   last section
///
/// # Examples
/// ```
/// use alphalist::logic::gesture::section_index_at;
/// use alphalist::model::navigator::LayoutMeasurement;
///
/// let measure = LayoutMeasurement { y: 100, width: 20, height: 40 };
/// assert_eq!(section_index_at(185, Some(&measure), 5), Some(2));
/// assert_eq!(section_index_at(50, Some(&measure), 5), None);
/// // Far below the strip clamps to the last section
/// assert_eq!(section_index_at(900, Some(&measure), 5), Some(4));
/// ```
pub fn section_index_at(y: u16, measure: Option<&LayoutMeasurement>, section_count: usize) -> Option<usize> {
    let measure = measure?;
    if measure.height == 0 || section_count == 0 || y < measure.y {
        return None;
    }

    let index = ((y - measure.y) / measure.height) as usize;
    Some(index.min(section_count - 1))
}
