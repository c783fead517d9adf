//! The face orchestrator: slots, the minute timeline and drawing.
//!
//! A [`WatchFace`] owns the four digit slots, their beam curtains and the
//! progress bar for the lifetime of one face session. The host feeds it
//! lifecycle signals and per-second ticks; the face answers with plain
//! delays for the host's one-shot timer and redraw requests for its surface.

use heapless::String;

use crate::clock::{ClockSample, WallClock};
use crate::layout::{FontMetrics, Layout, NUM_DIGITS, Rect};
use crate::render::{RenderSink, TextRole};
use crate::rollover::digits_that_will_change;
use crate::scheduler::TickScheduler;
use crate::sequence::{SequenceError, SlotSequence};
use crate::sequencer::{ServiceTiming, SlotSequencer};
use crate::time::TimeSource;
use crate::{COLOR_BACKGROUND, COLOR_DATE, COLOR_TIME};

/// Durations and relative delays of the minute-rollover choreography.
///
/// Only the relative ordering is load-bearing: the beam must already be
/// dropping when the digit rises, and the digit must land and reveal before
/// the beam finishes rising. The defaults satisfy that with room to spare;
/// the exact millisecond values are presentation tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choreography {
    /// One bar quarter-fill (and the reset at second 1).
    pub bar_fill_ms: u32,
    /// Digit travel, up or down.
    pub digit_travel_ms: u32,
    /// Wait before the digit rises, measured from the burst start.
    pub digit_rise_delay_ms: u32,
    /// Pause while the digit is aloft, off the surface.
    pub digit_hold_ms: u32,
    /// Wait after landing before the digit is shown again.
    pub digit_reveal_ms: u32,
    /// Beam travel, down or up.
    pub beam_travel_ms: u32,
    /// Pause while the beam is fully dropped.
    pub beam_hold_ms: u32,
}

impl Default for Choreography {
    fn default() -> Self {
        Self {
            bar_fill_ms: 500,
            digit_travel_ms: 300,
            digit_rise_delay_ms: 450,
            digit_hold_ms: 400,
            digit_reveal_ms: 200,
            beam_travel_ms: 300,
            beam_hold_ms: 1_400,
        }
    }
}

impl Choreography {
    /// Digit flight: rise off the surface, hold, land, then reveal.
    fn digit_sequence(&self, from_offset: i32, lift: i32) -> Result<SlotSequence, SequenceError> {
        SlotSequence::builder()
            .stage(from_offset, -lift, self.digit_rise_delay_ms, self.digit_travel_ms)
            .stage(-lift, 0, self.digit_hold_ms, self.digit_travel_ms)
            .stage(0, 0, self.digit_reveal_ms, 0)
            .conceal()
            .build()
    }

    /// Beam curtain: drop to full extent, hold, retract.
    fn beam_sequence(&self, from_extent: i32, drop: i32) -> Result<SlotSequence, SequenceError> {
        SlotSequence::builder()
            .stage(from_extent, drop, 0, self.beam_travel_ms)
            .stage(drop, 0, self.beam_hold_ms, self.beam_travel_ms)
            .build()
    }

    /// One bar fill step toward `target`.
    fn bar_sequence(&self, from_width: i32, target: i32) -> Result<SlotSequence, SequenceError> {
        SlotSequence::builder()
            .stage(from_width, target, 0, self.bar_fill_ms)
            .build()
    }
}

/// One of the four time digits.
#[derive(Debug)]
pub struct DigitSlot {
    value: u8,
    motion: SlotSequencer,
}

impl DigitSlot {
    fn new() -> Self {
        Self {
            value: 0,
            motion: SlotSequencer::new(0),
        }
    }

    /// Displayed digit value, 0-9.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Offset from the resting baseline; negative while lifted.
    pub fn offset(&self) -> i32 {
        self.motion.value()
    }

    /// Whether the glyph is currently hidden (painted in the background
    /// color while it swaps values off-screen).
    pub fn is_concealed(&self) -> bool {
        self.motion.is_concealed()
    }

    /// Whether the digit is mid-flight.
    pub fn is_animating(&self) -> bool {
        self.motion.is_running()
    }
}

/// One beam curtain.
#[derive(Debug)]
pub struct BeamSlot {
    motion: SlotSequencer,
}

impl BeamSlot {
    fn new() -> Self {
        Self {
            motion: SlotSequencer::new(0),
        }
    }

    /// Curtain bottom edge, in pixels from the surface top. Zero while
    /// retracted.
    pub fn extent(&self) -> i32 {
        self.motion.value()
    }

    /// Whether the curtain is mid-flight.
    pub fn is_animating(&self) -> bool {
        self.motion.is_running()
    }
}

/// A single watch face session.
///
/// Owns all slot state; every transition runs on the host's one logical
/// event loop, so no locking is involved anywhere.
pub struct WatchFace<'t, C: WallClock, T: TimeSource> {
    clock: C,
    time: &'t T,
    choreography: Choreography,
    scheduler: TickScheduler,
    layout: Option<Layout>,
    digits: [DigitSlot; NUM_DIGITS],
    beams: [BeamSlot; NUM_DIGITS],
    bar: SlotSequencer,
    date: String<8>,
    needs_redraw: bool,
}

impl<'t, C: WallClock, T: TimeSource> WatchFace<'t, C, T> {
    /// Creates a face with the default choreography.
    pub fn new(clock: C, time: &'t T) -> Self {
        Self::with_choreography(clock, time, Choreography::default())
    }

    /// Creates a face with custom rollover timing.
    pub fn with_choreography(clock: C, time: &'t T, choreography: Choreography) -> Self {
        Self {
            clock,
            time,
            choreography,
            scheduler: TickScheduler::new(),
            layout: None,
            digits: [
                DigitSlot::new(),
                DigitSlot::new(),
                DigitSlot::new(),
                DigitSlot::new(),
            ],
            beams: [
                BeamSlot::new(),
                BeamSlot::new(),
                BeamSlot::new(),
                BeamSlot::new(),
            ],
            bar: SlotSequencer::new(0),
            date: String::new(),
            needs_redraw: false,
        }
    }

    /// Visible and not in ambient mode. Only interactive sessions tick.
    pub fn is_interactive(&self) -> bool {
        self.scheduler.is_interactive()
    }

    /// Current layout, once the surface geometry has been established.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// The four digit slots, tens-of-hour first.
    pub fn digits(&self) -> &[DigitSlot; NUM_DIGITS] {
        &self.digits
    }

    /// The four beam curtains, mirroring the digit slots.
    pub fn beams(&self) -> &[BeamSlot; NUM_DIGITS] {
        &self.beams
    }

    /// Current filled width of the progress bar.
    pub fn bar_width(&self) -> i32 {
        self.bar.value()
    }

    /// Current date line.
    pub fn date_text(&self) -> &str {
        &self.date
    }

    // ---- host lifecycle -------------------------------------------------

    /// Establishes (or replaces) the surface geometry. Until the first call
    /// nothing can be drawn or animated.
    pub fn on_surface_changed(&mut self, width: i32, height: i32, round: bool, metrics: FontMetrics) {
        self.layout = Some(Layout::compute(width, height, round, metrics));
        self.needs_redraw = true;
    }

    /// Host visibility signal. Returns the delay to schedule for the next
    /// tick, or `None` to cancel any pending one.
    pub fn on_visibility_changed(&mut self, visible: bool) -> Option<u64> {
        self.scheduler.set_visible(visible);
        self.reactivate_or_park()
    }

    /// Host ambient (reduced display) signal. Same contract as
    /// [`Self::on_visibility_changed`].
    pub fn on_ambient_changed(&mut self, ambient: bool) -> Option<u64> {
        self.scheduler.set_ambient(ambient);
        self.reactivate_or_park()
    }

    /// Host time-tick entry point: runs the transition for the current
    /// second without touching the tick schedule.
    pub fn on_time_tick(&mut self) {
        let sample = self.clock.sample();
        self.run_second_transition(&sample);
    }

    /// The self-rescheduled per-second tick. Runs the transition for the
    /// current second and returns the delay to the next boundary, or `None`
    /// once the face is no longer interactive.
    pub fn on_timer_fire(&mut self) -> Option<u64> {
        self.needs_redraw = true;
        if !self.is_interactive() {
            self.scheduler.cancel();
            return None;
        }
        let sample = self.clock.sample();
        self.run_second_transition(&sample);
        self.scheduler.rearm(&sample)
    }

    // ---- animation servicing -------------------------------------------

    /// Advances every active sequence to now and aggregates their timing.
    ///
    /// An animation frame is just this call from an ordinary timer callback;
    /// interactive sessions get a redraw request whenever an observable
    /// moved.
    pub fn service(&mut self) -> ServiceTiming {
        let now = self.time.now();
        let mut changed = false;
        let mut timing = ServiceTiming::Idle;
        for digit in &mut self.digits {
            let (dirty, slot_timing) = digit.motion.service(now);
            changed |= dirty;
            timing = timing.merge(slot_timing);
        }
        for beam in &mut self.beams {
            let (dirty, slot_timing) = beam.motion.service(now);
            changed |= dirty;
            timing = timing.merge(slot_timing);
        }
        let (dirty, bar_timing) = self.bar.service(now);
        changed |= dirty;
        timing = timing.merge(bar_timing);

        if changed && self.is_interactive() {
            self.needs_redraw = true;
        }
        timing
    }

    /// Takes the pending redraw request, if any.
    pub fn take_needs_redraw(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }

    // ---- minute timeline ------------------------------------------------

    fn run_second_transition(&mut self, sample: &ClockSample) {
        match sample.second {
            0 => {
                self.refresh_time(sample);
                self.needs_redraw = true;
            }
            1 => {
                self.animate_bar(0);
                for digit in &mut self.digits {
                    digit.motion.reveal();
                }
            }
            15 => self.animate_bar_quarter(1),
            30 => self.animate_bar_quarter(2),
            45 => self.animate_bar_quarter(3),
            59 => {
                self.animate_bar_quarter(4);
                self.begin_minute_burst();
            }
            _ => {}
        }
    }

    fn refresh_time(&mut self, sample: &ClockSample) {
        for (slot, value) in self.digits.iter_mut().zip(sample.hhmm_digits()) {
            slot.value = value;
        }
        self.date = sample.date_text();
    }

    fn animate_bar_quarter(&mut self, quarter: u8) {
        let Some(layout) = self.layout else { return };
        self.animate_bar(layout.quarter_width(quarter));
    }

    fn animate_bar(&mut self, target: i32) {
        if self.layout.is_none() {
            return;
        }
        if let Ok(sequence) = self.choreography.bar_sequence(self.bar.value(), target) {
            self.bar.start(sequence, self.time.now());
        }
    }

    /// The minute-rollover burst: every slot whose digit is about to change
    /// gets its beam and digit sequences started together.
    fn begin_minute_burst(&mut self) {
        let Some(layout) = self.layout else { return };
        let now = self.time.now();
        let values: [u8; NUM_DIGITS] = core::array::from_fn(|i| self.digits[i].value);
        let changes = digits_that_will_change(values);
        for index in 0..NUM_DIGITS {
            if !changes[index] {
                continue;
            }
            if let Ok(sequence) = self
                .choreography
                .digit_sequence(self.digits[index].offset(), layout.digit_lift)
            {
                self.digits[index].motion.start(sequence, now);
            }
            if let Ok(sequence) = self
                .choreography
                .beam_sequence(self.beams[index].extent(), layout.beam_drop)
            {
                self.beams[index].motion.start(sequence, now);
            }
        }
    }

    fn reactivate_or_park(&mut self) -> Option<u64> {
        if !self.is_interactive() {
            self.scheduler.cancel();
            return None;
        }
        let sample = self.clock.sample();
        // Redisplay from the last quarter-minute boundary so the bar and
        // digits never come back in a stale phase.
        let rolled = ClockSample {
            second: TickScheduler::resync_second(sample.second),
            millis_of_second: 0,
            ..sample
        };
        self.run_second_transition(&rolled);
        self.refresh_time(&sample);
        self.needs_redraw = true;
        self.scheduler.rearm(&sample)
    }

    // ---- drawing --------------------------------------------------------

    /// Paints the whole face. A no-op until the surface geometry is known.
    pub fn draw<R: RenderSink>(&self, sink: &mut R) {
        let Some(layout) = &self.layout else { return };
        sink.draw_background();

        for index in 0..NUM_DIGITS {
            let beam = &self.beams[index];
            if beam.extent() > 0 {
                let bounds = Rect::new(
                    layout.beam_x[index],
                    0,
                    layout.beam_x[index] + layout.beam_width,
                    beam.extent(),
                );
                sink.draw_rect(bounds, COLOR_TIME);
            }

            let digit = &self.digits[index];
            let color = if digit.is_concealed() {
                COLOR_BACKGROUND
            } else {
                COLOR_TIME
            };
            sink.draw_text(
                digit_glyph(digit.value()),
                layout.digit_x[index],
                layout.digit_baseline + digit.offset(),
                TextRole::Time,
                color,
            );
        }

        sink.draw_text(
            ":",
            layout.colon_x,
            layout.digit_baseline,
            TextRole::Time,
            COLOR_TIME,
        );
        sink.draw_text(
            &self.date,
            layout.date_x,
            layout.date_baseline,
            TextRole::Date,
            COLOR_DATE,
        );

        let bar = Rect::new(0, layout.bar_top, self.bar.value(), layout.bar_bottom);
        if !bar.is_empty() {
            sink.draw_rect(bar, COLOR_TIME);
        }
    }
}

const DIGIT_GLYPHS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

fn digit_glyph(value: u8) -> &'static str {
    DIGIT_GLYPHS[usize::from(value) % DIGIT_GLYPHS.len()]
}
