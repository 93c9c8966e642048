mod core;
mod forcing;
mod params;

// Re-export public API
pub use forcing::{ForcingMode, MODES};
pub use params::{ChannelParams, ParamError};

use crate::state::ChannelState;
use self::core::{apply_velocity_boundary, continuity_update, momentum_update};

/// One full integrator step: momentum, velocity boundaries, continuity,
/// forcing overrides at flagged nodes, counter advance. Physics runs first,
/// so a forced node is driven entirely by the forcing function while its
/// window is active and by free physics afterward.
pub fn channel_step(state: &mut ChannelState, params: &ChannelParams, mode: ForcingMode) {
    // 1. Momentum update on interior nodes
    momentum_update(&mut state.velocity, &state.elevation, params);

    // 2. Velocity boundary conditions (open left end, wall right end)
    apply_velocity_boundary(&mut state.velocity);

    // 3. Continuity update on cells
    continuity_update(&mut state.elevation, &state.velocity, params);

    // 4. Forcing overrides at flagged nodes
    for i in 0..state.nodes {
        if state.forced[i] {
            if let Some(eta) = mode.evaluate(state.step_count, i, params.wave_half_period) {
                state.elevation[i] = eta;
            }
        }
    }

    // 5. Advance the clock
    state.step_count += 1;
    state.sim_time += params.dt;
}
