//! Drawing-sink abstraction.

use crate::layout::Rect;
use palette::Srgb;

/// Which of the face's two type styles a text run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextRole {
    /// Large HH:MM glyphs (digits and colon).
    Time,
    /// Smaller date line.
    Date,
}

/// Trait for abstracting the host's drawing surface.
///
/// Implement this for your canvas, framebuffer or display list. The face
/// calls it synchronously from [`crate::WatchFace::draw`] and nowhere else.
/// Colors are `Srgb<f32>` (0.0-1.0 range); convert them to your surface's
/// native format. Handle any drawing errors internally - these methods
/// cannot fail.
pub trait RenderSink {
    /// Fills the whole surface with the background color.
    fn draw_background(&mut self);

    /// Fills a rectangle.
    fn draw_rect(&mut self, bounds: Rect, color: Srgb);

    /// Draws a text run. `x` is the right edge of the run, `y` its baseline.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, role: TextRole, color: Srgb);
}
