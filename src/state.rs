use crate::solver::ChannelParams;

/// Mutable simulation state for one channel run. Allocated once at startup;
/// mode changes reset it in place.
pub struct ChannelState {
    pub nodes: usize,
    /// Node velocity, staggered logically between elevation cells but stored
    /// on the same index range for boundary convenience.
    pub velocity: Vec<f64>,
    /// Surface elevation per node.
    pub elevation: Vec<f64>,
    /// Nodes driven by the active forcing function.
    pub forced: Vec<bool>,
    /// Completed integrator steps since the last reset.
    pub step_count: u64,
    /// step_count * dt, informational.
    pub sim_time: f64,
}

impl ChannelState {
    pub fn new(params: &ChannelParams) -> Self {
        let mut state = Self {
            nodes: params.nodes,
            velocity: vec![0.0; params.nodes],
            elevation: vec![0.0; params.nodes],
            forced: vec![false; params.nodes],
            step_count: 0,
            sim_time: 0.0,
        };
        state.apply_forced_set(params);
        state
    }

    /// Full re-initialization: zero both fields, restore the forced set,
    /// restart the clock. A mode switch goes through here; it is a cold
    /// start, not a smooth transition.
    pub fn reset(&mut self, params: &ChannelParams) {
        self.velocity.fill(0.0);
        self.elevation.fill(0.0);
        self.apply_forced_set(params);
        self.step_count = 0;
        self.sim_time = 0.0;
    }

    fn apply_forced_set(&mut self, params: &ChannelParams) {
        self.forced.fill(false);
        for index in params.forced_set() {
            self.forced[index] = true;
        }
    }

    /// Allocating snapshot convenience (used in tests).
    #[cfg(test)]
    pub fn snapshot(&self) -> ChannelSnapshot {
        ChannelSnapshot {
            nodes: self.nodes,
            elevation: self.elevation.clone(),
            step_count: self.step_count,
            sim_time: self.sim_time,
        }
    }

    /// Copy the render-visible state into a pre-allocated snapshot,
    /// avoiding allocation on the hot path.
    pub fn snapshot_into(&self, dst: &mut ChannelSnapshot) {
        dst.elevation.copy_from_slice(&self.elevation);
        dst.nodes = self.nodes;
        dst.step_count = self.step_count;
        dst.sim_time = self.sim_time;
    }
}

/// Read-only view handed to the render thread: the elevation field plus
/// step diagnostics. Velocity stays private to the physics side.
pub struct ChannelSnapshot {
    pub nodes: usize,
    pub elevation: Vec<f64>,
    pub step_count: u64,
    pub sim_time: f64,
}

impl ChannelSnapshot {
    /// Pre-allocate a snapshot buffer matching the grid size.
    pub fn new_empty(nodes: usize) -> Self {
        Self {
            nodes,
            elevation: vec![0.0; nodes],
            step_count: 0,
            sim_time: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_quiescent() {
        let params = ChannelParams::default();
        let state = ChannelState::new(&params);
        assert_eq!(state.nodes, 75);
        assert!(state.velocity.iter().all(|&v| v == 0.0));
        assert!(state.elevation.iter().all(|&v| v == 0.0));
        assert_eq!(state.step_count, 0);
        assert_eq!(state.sim_time, 0.0);
    }

    #[test]
    fn test_default_forced_flags_are_channel_ends() {
        let params = ChannelParams::default();
        let state = ChannelState::new(&params);
        for (i, &flag) in state.forced.iter().enumerate() {
            let expected = i == 0 || i == 73;
            assert_eq!(flag, expected, "forced[{}]", i);
        }
    }

    #[test]
    fn test_forced_override_respected() {
        let params = ChannelParams { forced_nodes: vec![5, 6], ..Default::default() };
        let state = ChannelState::new(&params);
        assert!(state.forced[5] && state.forced[6]);
        assert!(!state.forced[0] && !state.forced[73]);
    }

    #[test]
    fn test_all_fields_correct_size() {
        let params = ChannelParams { nodes: 33, ..Default::default() };
        let state = ChannelState::new(&params);
        assert_eq!(state.velocity.len(), 33);
        assert_eq!(state.elevation.len(), 33);
        assert_eq!(state.forced.len(), 33);
    }

    #[test]
    fn test_reset_clears_everything() {
        let params = ChannelParams::default();
        let mut state = ChannelState::new(&params);
        state.velocity[10] = 1.5;
        state.elevation[20] = -0.5;
        state.forced[40] = true;
        state.step_count = 99;
        state.sim_time = 99.0;

        state.reset(&params);

        assert!(state.velocity.iter().all(|&v| v == 0.0));
        assert!(state.elevation.iter().all(|&v| v == 0.0));
        assert!(!state.forced[40]);
        assert!(state.forced[0] && state.forced[73]);
        assert_eq!(state.step_count, 0);
        assert_eq!(state.sim_time, 0.0);
    }

    #[test]
    fn test_snapshot_into_copies_fields() {
        let params = ChannelParams::default();
        let mut state = ChannelState::new(&params);
        state.elevation[3] = 0.7;
        state.step_count = 12;
        state.sim_time = 12.0;

        let mut snap = ChannelSnapshot::new_empty(params.nodes);
        state.snapshot_into(&mut snap);

        assert_eq!(snap.nodes, 75);
        assert_eq!(snap.elevation[3], 0.7);
        assert_eq!(snap.step_count, 12);
        assert_eq!(snap.sim_time, 12.0);
    }

    #[test]
    fn test_snapshot_into_matches_snapshot() {
        let params = ChannelParams::default();
        let mut state = ChannelState::new(&params);
        state.elevation[1] = 0.25;
        state.elevation[73] = -0.5;

        let by_clone = state.snapshot();
        let mut by_copy = ChannelSnapshot::new_empty(params.nodes);
        state.snapshot_into(&mut by_copy);

        assert_eq!(by_clone.elevation, by_copy.elevation);
        assert_eq!(by_clone.step_count, by_copy.step_count);
    }

    #[test]
    fn test_new_empty_dimensions() {
        let snap = ChannelSnapshot::new_empty(75);
        assert_eq!(snap.nodes, 75);
        assert_eq!(snap.elevation.len(), 75);
        assert_eq!(snap.step_count, 0);
    }
}
