//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Largest side a baseline JPEG can store.
pub const MAX_DIMENSION: u32 = u16::MAX as u32;

/// Calculate output dimensions for a resize to a fixed height.
///
/// The width follows from the source aspect ratio, rounded to the nearest
/// pixel and never below 1. Sources shorter than the target are scaled up.
///
/// # Arguments
/// * `source` - Upright image dimensions (width, height)
/// * `target_height` - Height of the output in pixels
///
/// # Returns
/// * `Some((width, height))` - Output dimensions, height always equals `target_height`
/// * `None` - The width would exceed [`MAX_DIMENSION`]
pub fn calculate_height_fit(source: (u32, u32), target_height: u32) -> Option<(u32, u32)> {
    let (src_w, src_h) = source;
    let w = if src_h == 0 {
        src_w as f64
    } else {
        (src_w as f64 * target_height as f64 / src_h as f64).round()
    };
    if w > MAX_DIMENSION as f64 {
        return None;
    }
    Some(((w as u32).max(1), target_height))
}
