//! Scroll offset logic
//!
//! Pure functions for clamping scroll offsets and easing animated scrolls.

/// Largest valid scroll offset for the given content and viewport heights
pub fn max_scroll_offset(content_height: usize, viewport_height: usize) -> usize {
    content_height.saturating_sub(viewport_height)
}

/// Apply a signed row delta to an offset, clamped to `0..=max_offset`
pub fn scroll_by(offset: usize, delta: isize, max_offset: usize) -> usize {
    offset.saturating_add_signed(delta).min(max_offset)
}

/// Next offset of an animated scroll
///
/// Covers a third of the remaining distance per step, at least one row, so
/// long jumps start fast and settle exactly on the target.
///
/// # Examples
/// ```
/// use alphalist::logic::scroll::animation_step;
///
/// assert_eq!(animation_step(0, 30), 10);
/// assert_eq!(animation_step(28, 30), 29);
/// assert_eq!(animation_step(30, 0), 20);
/// assert_eq!(animation_step(5, 5), 5);
/// ```
pub fn animation_step(current: usize, target: usize) -> usize {
    let distance = current.abs_diff(target);
    let step = (distance / 3).max(1).min(distance);
    if current < target {
        current + step
    } else {
        current - step
    }
}
