//! Surface geometry: where every face element sits and how far it travels.

/// Number of animated digit slots (HH:MM).
pub const NUM_DIGITS: usize = 4;

/// Gap between adjacent glyph cells.
const SEPARATION: i32 = 5;

/// Height of the progress bar strip.
const BAR_HEIGHT: i32 = 10;

/// Integer pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Creates a rectangle from its edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// True when the rectangle covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }
}

/// Glyph advances measured by the host's text engine for the active face
/// size. Measuring is the host's job; the face only does arithmetic on the
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontMetrics {
    /// Advance of one time digit; also its nominal height.
    pub digit_width: i32,
    /// Advance of the colon.
    pub colon_width: i32,
    /// Advance of one date digit; also the date line's height step.
    pub date_size: i32,
}

impl FontMetrics {
    pub const fn new(digit_width: i32, colon_width: i32, date_size: i32) -> Self {
        Self {
            digit_width,
            colon_width,
            date_size,
        }
    }
}

/// Pixel placement of every face element for one surface geometry.
///
/// Round and square surfaces use slightly different nudges; both come out of
/// [`Layout::compute`] so the rest of the crate never branches on shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub surface_width: i32,
    pub surface_height: i32,
    pub round: bool,
    /// Advance (and nominal height) of one time digit.
    pub digit_size: i32,
    /// Bounding box of the HH:MM block.
    pub time_bounds: Rect,
    /// Right-aligned x anchor per digit slot.
    pub digit_x: [i32; NUM_DIGITS],
    /// Resting text baseline of the digits.
    pub digit_baseline: i32,
    /// Vertical travel that carries a digit fully above the surface.
    pub digit_lift: i32,
    /// Left edge per beam curtain.
    pub beam_x: [i32; NUM_DIGITS],
    /// Curtain width.
    pub beam_width: i32,
    /// Curtain bottom edge when fully dropped.
    pub beam_drop: i32,
    /// Progress bar strip; the right edge is animated separately.
    pub bar_top: i32,
    pub bar_bottom: i32,
    /// Right-aligned colon anchor.
    pub colon_x: i32,
    /// Right-aligned date anchor and baseline.
    pub date_x: i32,
    pub date_baseline: i32,
}

impl Layout {
    /// Computes the layout for a surface.
    pub fn compute(width: i32, height: i32, round: bool, metrics: FontMetrics) -> Layout {
        let digit = metrics.digit_width;
        let colon = metrics.colon_width;

        let total_width = 4 * digit + colon + 4 * SEPARATION;
        let time_left = (width - total_width) / 2;
        let time_top = (height - digit) / 2;
        let time_bounds = Rect::new(time_left, time_top, time_left + total_width, time_top + digit);

        // Horizontal offset of each slot from the first one; the colon sits
        // between slots 1 and 2.
        let slot_offsets = [
            0,
            digit + SEPARATION,
            2 * digit + 3 * SEPARATION + colon,
            3 * digit + 4 * SEPARATION + colon,
        ];

        let digit_base = time_left + digit + if round { 3 * SEPARATION } else { 2 * SEPARATION };
        let digit_x = slot_offsets.map(|offset| digit_base + offset);

        let beam_base = time_left + 2 - if round { 0 } else { SEPARATION - 2 };
        let beam_x = slot_offsets.map(|offset| beam_base + offset);

        let digit_baseline = time_top + digit;
        let bar_top = digit_baseline + SEPARATION;

        let colon_x =
            time_left + 2 * digit + colon + if round { 5 * SEPARATION } else { 4 * SEPARATION };

        let date_x = time_bounds.right + if round { SEPARATION + 2 } else { SEPARATION / 2 + 1 };
        let date_baseline = digit_baseline + metrics.date_size + BAR_HEIGHT + 2 * SEPARATION;

        Layout {
            surface_width: width,
            surface_height: height,
            round,
            digit_size: digit,
            time_bounds,
            digit_x,
            digit_baseline,
            digit_lift: time_top + 2 * digit,
            beam_x,
            beam_width: digit,
            beam_drop: digit_baseline,
            bar_top,
            bar_bottom: bar_top + BAR_HEIGHT,
            colon_x,
            date_x,
            date_baseline,
        }
    }

    /// Bar width at `quarter` of four (0 = reset, 4 = full).
    pub fn quarter_width(&self, quarter: u8) -> i32 {
        self.surface_width * i32::from(quarter.min(4)) / 4
    }
}
