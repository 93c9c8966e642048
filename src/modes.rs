use crate::solver::{ChannelParams, ForcingMode};
use crate::state::ChannelState;

/// Integrator steps between rendered frames, selected modulo the table.
pub const DURATION_PRESETS: [usize; 5] = [1, 10, 50, 100, 200];

/// Display intensity scale factors, selected modulo the table.
pub const BRIGHTNESS_PRESETS: [f64; 5] = [1.0, 0.75, 0.5, 0.25, 0.05];

/// Tracks the active forcing mode and the render pacing/intensity presets.
/// Mode changes reset the grid; preset changes touch only the renderer side.
pub struct ModeController {
    mode: ForcingMode,
    duration_ix: usize,
    brightness_ix: usize,
}

impl ModeController {
    pub fn new() -> Self {
        Self {
            mode: ForcingMode::default(),
            duration_ix: 0,
            brightness_ix: 0,
        }
    }

    pub fn mode(&self) -> ForcingMode {
        self.mode
    }

    /// Select a mode by ordinal (wraps modulo the mode count) and fully
    /// re-initialize the grid. Switching mid-run is a cold start.
    pub fn select_mode(
        &mut self,
        ordinal: usize,
        state: &mut ChannelState,
        params: &ChannelParams,
    ) -> ForcingMode {
        self.mode = ForcingMode::from_ordinal(ordinal);
        state.reset(params);
        self.mode
    }

    /// Advance to the next mode cyclically, with the same grid reset.
    pub fn advance_mode(
        &mut self,
        state: &mut ChannelState,
        params: &ChannelParams,
    ) -> ForcingMode {
        self.select_mode(self.mode.ordinal() + 1, state, params)
    }

    /// Select a duration preset by ordinal (wraps modulo the table).
    /// Returns the steps-per-frame value. No grid side effects.
    pub fn select_duration(&mut self, ordinal: usize) -> usize {
        self.duration_ix = ordinal % DURATION_PRESETS.len();
        self.steps_per_frame()
    }

    pub fn cycle_duration(&mut self) -> usize {
        self.select_duration(self.duration_ix + 1)
    }

    pub fn steps_per_frame(&self) -> usize {
        DURATION_PRESETS[self.duration_ix]
    }

    /// Select a brightness preset by ordinal (wraps modulo the table).
    /// Returns the scale factor. No grid side effects.
    pub fn select_brightness(&mut self, ordinal: usize) -> f64 {
        self.brightness_ix = ordinal % BRIGHTNESS_PRESETS.len();
        self.brightness()
    }

    pub fn cycle_brightness(&mut self) -> f64 {
        self.select_brightness(self.brightness_ix + 1)
    }

    pub fn brightness(&self) -> f64 {
        BRIGHTNESS_PRESETS[self.brightness_ix]
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}
