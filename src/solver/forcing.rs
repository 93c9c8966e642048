use std::f64::consts::{PI, TAU};

/// Boundary forcing mode. Each variant owns a forcing function and the
/// elevation bounds the renderer uses for color scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForcingMode {
    Square,
    Cosine,
    Triangle,
    PhasedDual,
}

impl Default for ForcingMode {
    fn default() -> Self {
        Self::Square
    }
}

/// All modes in ordinal order (selection wraps modulo this table).
pub const MODES: [ForcingMode; 4] = [
    ForcingMode::Square,
    ForcingMode::Cosine,
    ForcingMode::Triangle,
    ForcingMode::PhasedDual,
];

impl ForcingMode {
    /// Map an arbitrary ordinal onto a mode, wrapping cyclically.
    /// Out-of-range input is never an error.
    pub fn from_ordinal(ordinal: usize) -> Self {
        MODES[ordinal % MODES.len()]
    }

    /// The next mode in cyclic order (the "advance" gesture).
    pub fn next(self) -> Self {
        Self::from_ordinal(self.ordinal() + 1)
    }

    pub fn ordinal(self) -> usize {
        match self {
            Self::Square => 0,
            Self::Cosine => 1,
            Self::Triangle => 2,
            Self::PhasedDual => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Cosine => "cosine",
            Self::Triangle => "triangle",
            Self::PhasedDual => "dual",
        }
    }

    /// Elevation bounds (lower, upper) for display color scaling.
    /// Metadata for the renderer; the physics never clamps to these.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Square => (-1.5, 1.5),
            Self::Cosine => (-1.25, 1.25),
            Self::Triangle => (-1.25, 1.25),
            Self::PhasedDual => (-1.0, 1.0),
        }
    }

    /// Evaluate the forcing at (step, node). Returns `None` once the active
    /// window `step < 2 * wave_half_period` has passed, letting the forced
    /// nodes evolve freely from then on. Pure function of its arguments.
    pub fn evaluate(self, step: u64, node: usize, wave_half_period: u64) -> Option<f64> {
        if step >= 2 * wave_half_period {
            return None;
        }
        let s = step as f64;
        let whp = wave_half_period as f64;
        let value = match self {
            Self::Square => 1.0,
            Self::Cosine => 0.5 * (1.0 + (TAU * s / whp + PI).cos()),
            Self::Triangle => {
                // Ramp 0 -> 1 -> 0 with the peak at whp/2, flat zero after.
                let mid = whp / 2.0;
                (1.0 - (s - mid).abs() / mid).max(0.0)
            }
            Self::PhasedDual => {
                if node == 0 {
                    0.75 * 0.5 * (1.0 + (TAU * s / whp + PI).cos())
                } else {
                    // Double frequency, smaller amplitude at the far node.
                    0.5 * 0.5 * (1.0 + (2.0 * TAU * s / whp + PI).cos())
                }
            }
        };
        Some(value)
    }
}
