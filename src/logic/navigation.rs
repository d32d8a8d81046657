//! Section stepping logic
//!
//! Pure functions for moving between active sections with wrapping behavior.
//! Inactive (empty) sections are skipped.

/// Calculate the next active section index with wrapping
///
/// # Arguments
/// * `current` - Section currently at the top of the list (None if unknown)
/// * `active` - Activity flag per section, in section order
///
/// # Returns
/// * `Some(index)` - The next active section after `current`
/// * `None` - If no section is active
///
/// # Examples
/// ```
/// use alphalist::logic::navigation::next_active_section;
///
/// let active = [true, false, true, false];
/// assert_eq!(next_active_section(None, &active), Some(0));
/// assert_eq!(next_active_section(Some(0), &active), Some(2));
/// // Wrapping past the end
/// assert_eq!(next_active_section(Some(2), &active), Some(0));
/// assert_eq!(next_active_section(Some(0), &[false, false]), None);
/// ```
pub fn next_active_section(current: Option<usize>, active: &[bool]) -> Option<usize> {
    let len = active.len();
    if len == 0 {
        return None;
    }

    let start = match current {
        Some(i) if i < len => i + 1,
        Some(_) | None => 0,
    };

    (0..len)
        .map(|step| (start + step) % len)
        .find(|&index| active[index])
}

/// Calculate the previous active section index with wrapping
///
/// # Examples
/// ```
/// use alphalist::logic::navigation::prev_active_section;
///
/// let active = [true, false, true, false];
/// assert_eq!(prev_active_section(Some(2), &active), Some(0));
/// // Wrapping at the beginning
/// assert_eq!(prev_active_section(Some(0), &active), Some(2));
/// assert_eq!(prev_active_section(None, &active), Some(2));
/// ```
pub fn prev_active_section(current: Option<usize>, active: &[bool]) -> Option<usize> {
    let len = active.len();
    if len == 0 {
        return None;
    }

    let start = match current {
        Some(i) if i < len => i + len - 1,
        Some(_) | None => len - 1,
    };

    (0..len)
        .map(|step| (start + len - step) % len)
        .find(|&index| active[index])
}
