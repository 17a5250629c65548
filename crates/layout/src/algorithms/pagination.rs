pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Absorbs float noise from summed pixel heights.
pub const EPSILON: f32 = 0.01;

/// Centralized logic to check if a block fits under the page ceiling.
///
/// * `cursor_y`: The offset the block would start at, relative to the top of the content band.
/// * `height`: The height the block needs.
/// * `ceiling`: The usable height of the current page's content band.
pub fn check_fit(cursor_y: f32, height: f32, ceiling: f32) -> BreakAnalysis {
    let available = (ceiling - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: height > available + EPSILON,
        remaining_height: available,
    }
}

/// Whether a bottom edge lies beyond the ceiling.
pub fn overflows(bottom: f32, ceiling: f32) -> bool {
    bottom > ceiling + EPSILON
}
