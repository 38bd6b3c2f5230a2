//! Centred Cursor Sampling
//!
//! The walkthrough reads the cursor once per frame as an offset from the
//! window centre. The windowing layer is responsible for warping the cursor
//! back to the centre after each sample.

use glam::Vec2;

/// Cursor offset sampler anchored at the window centre.
///
/// # Example
///
/// ```rust,ignore
/// let mut cursor = CenteredCursor::for_window(1024, 768);
///
/// // Each frame: read the cursor, then warp it back to cursor.center()
/// let delta = cursor.sample(x, y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredCursor {
    center: Vec2,
    last_offset: Vec2,
}

impl Default for CenteredCursor {
    fn default() -> Self {
        Self::for_window(1024, 768)
    }
}

impl CenteredCursor {
    /// Centre of a `width` x `height` window, rounded down to whole pixels.
    pub fn for_window(width: u32, height: u32) -> Self {
        Self {
            center: Vec2::new((width / 2) as f32, (height / 2) as f32),
            last_offset: Vec2::ZERO,
        }
    }

    /// Reference point the cursor is re-centred to.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Record a cursor position and return its offset from the centre.
    ///
    /// Positive x is right, positive y is down (screen convention).
    pub fn sample(&mut self, x: f64, y: f64) -> Vec2 {
        self.last_offset = Vec2::new(x as f32, y as f32) - self.center;
        self.last_offset
    }

    /// Offset returned by the most recent `sample`.
    #[inline]
    pub fn last_offset(&self) -> Vec2 {
        self.last_offset
    }
}
