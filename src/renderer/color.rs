use crate::solver::ForcingMode;

/// Selects which color palette to use for elevation rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorMap {
    /// Moonlit Channel: midnight blue -> steel -> foam white (Square).
    Moonlit,
    /// Lagoon: deep teal -> turquoise -> sunlit sand (Cosine).
    Lagoon,
    /// Ember Tide: charcoal -> rust -> amber glow (Triangle).
    EmberTide,
    /// Aurora: indigo -> sea green -> pale rose (PhasedDual).
    Aurora,
}

impl ColorMap {
    /// Palette associated with each forcing mode.
    pub fn for_mode(mode: ForcingMode) -> Self {
        match mode {
            ForcingMode::Square => ColorMap::Moonlit,
            ForcingMode::Cosine => ColorMap::Lagoon,
            ForcingMode::Triangle => ColorMap::EmberTide,
            ForcingMode::PhasedDual => ColorMap::Aurora,
        }
    }
}

/// Moonlit Channel stops: low water sinks into midnight blue, crests foam white.
pub(crate) const MOONLIT_STOPS: [(f64, f64, f64); 5] = [
    (12.0, 16.0, 44.0),    // midnight           (0.00)
    (32.0, 58.0, 110.0),   // deep water         (0.25)
    (70.0, 120.0, 180.0),  // steel blue         (0.50)
    (150.0, 200.0, 230.0), // shallow chop       (0.75)
    (240.0, 250.0, 255.0), // foam white         (1.00)
];

/// Lagoon stops: teal depths rising to a sunlit sandbar.
pub(crate) const LAGOON_STOPS: [(f64, f64, f64); 5] = [
    (6.0, 40.0, 48.0),     // deep teal          (0.00)
    (14.0, 90.0, 100.0),   // lagoon floor       (0.25)
    (30.0, 160.0, 160.0),  // turquoise          (0.50)
    (120.0, 210.0, 190.0), // shoal              (0.75)
    (245.0, 235.0, 190.0), // sunlit sand        (1.00)
];

/// Ember Tide stops: dark trough to amber crest.
pub(crate) const EMBER_STOPS: [(f64, f64, f64); 5] = [
    (24.0, 18.0, 16.0),    // charcoal           (0.00)
    (90.0, 40.0, 24.0),    // deep rust          (0.25)
    (170.0, 80.0, 30.0),   // rust               (0.50)
    (230.0, 140.0, 50.0),  // amber              (0.75)
    (255.0, 215.0, 130.0), // glow               (1.00)
];

/// Aurora stops: indigo trough through sea green to a pale rose crest.
pub(crate) const AURORA_STOPS: [(f64, f64, f64); 5] = [
    (20.0, 12.0, 52.0),    // indigo             (0.00)
    (30.0, 70.0, 120.0),   // night sea          (0.25)
    (40.0, 160.0, 130.0),  // sea green          (0.50)
    (150.0, 210.0, 160.0), // pale green         (0.75)
    (245.0, 200.0, 215.0), // pale rose          (1.00)
];

/// Convert a normalized [0.0, 1.0] elevation to RGBA via the palette.
pub fn map_to_rgba(t: f64, colormap: ColorMap) -> [u8; 4] {
    let stops = match colormap {
        ColorMap::Moonlit => &MOONLIT_STOPS,
        ColorMap::Lagoon => &LAGOON_STOPS,
        ColorMap::EmberTide => &EMBER_STOPS,
        ColorMap::Aurora => &AURORA_STOPS,
    };

    let t = t.clamp(0.0, 1.0);
    let seg = t * 4.0;
    let i = (seg as usize).min(3);
    let s = seg - i as f64;

    let (r0, g0, b0) = stops[i];
    let (r1, g1, b1) = stops[i + 1];

    [
        (r0 + s * (r1 - r0)) as u8,
        (g0 + s * (g1 - g0)) as u8,
        (b0 + s * (b1 - b0)) as u8,
        255,
    ]
}

/// Scale an RGBA color by the brightness preset factor. Alpha is untouched.
pub fn apply_brightness(rgba: [u8; 4], brightness: f64) -> [u8; 4] {
    let b = brightness.clamp(0.0, 1.0);
    [
        (rgba[0] as f64 * b) as u8,
        (rgba[1] as f64 * b) as u8,
        (rgba[2] as f64 * b) as u8,
        rgba[3],
    ]
}
