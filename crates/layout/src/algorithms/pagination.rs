pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Checks whether a block of `block_height` written at `cursor_y` stays above
/// `limit` on the current page.
///
/// The comparison is strict: a block ending exactly on the limit still fits.
pub fn check_block_fit(cursor_y: f32, block_height: f32, limit: f32) -> BreakAnalysis {
    BreakAnalysis {
        should_break: cursor_y + block_height > limit,
        remaining_height: (limit - cursor_y).max(0.0),
    }
}

/// Fixed-threshold check used before headings whose following content is not
/// measured up front.
pub fn passes_threshold(cursor_y: f32, threshold: f32) -> bool {
    cursor_y > threshold
}
