use thiserror::Error;

/// Physical and numerical parameters for the channel simulation.
#[derive(Clone, Debug)]
pub struct ChannelParams {
    /// Number of grid nodes (array length; the last node is the wall).
    pub nodes: usize,
    /// Grid spacing in meters.
    pub dx: f64,
    /// Time step in seconds.
    pub dt: f64,
    /// Still-water depth in meters (constant, depth-averaged).
    pub depth: f64,
    /// Gravitational acceleration.
    pub gravity: f64,
    /// Linear bottom-drag coefficient.
    pub friction: f64,
    /// Half-length of the forcing window in steps; forcing is active
    /// while step < 2 * wave_half_period.
    pub wave_half_period: u64,
    /// Explicit forced-node indices. Empty means the channel-end default
    /// {0, nodes - 2}.
    pub forced_nodes: Vec<usize>,
}

impl Default for ChannelParams {
    fn default() -> Self {
        Self {
            nodes: 75,
            dx: 125.0,
            dt: 1.0,
            depth: 150.0,
            gravity: 9.8,
            friction: 0.0,
            wave_half_period: 32,
            forced_nodes: Vec::new(),
        }
    }
}

/// Parameter validation failure, reported at configuration time.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("grid needs at least 3 nodes, got {0}")]
    TooFewNodes(usize),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("friction must be non-negative, got {0}")]
    NegativeFriction(f64),
    #[error("wave_half_period must be at least 1")]
    ZeroWaveHalfPeriod,
    #[error("forced node index {index} out of range for {nodes} nodes")]
    ForcedNodeOutOfRange { index: usize, nodes: usize },
    #[error("time step {dt} exceeds stability bound {bound:.4} (dx / sqrt(g*h))")]
    UnstableTimeStep { dt: f64, bound: f64 },
}

impl ChannelParams {
    /// Index of the no-flow wall at the right end of the channel.
    pub fn wall(&self) -> usize {
        self.nodes - 1
    }

    /// The forced-node index set: the explicit override when given,
    /// otherwise the channel ends {0, nodes - 2}.
    pub fn forced_set(&self) -> Vec<usize> {
        if self.forced_nodes.is_empty() {
            vec![0, self.nodes - 2]
        } else {
            self.forced_nodes.clone()
        }
    }

    /// Maximum stable time step: dx / sqrt(g * h) (shallow-water celerity).
    pub fn cfl_bound(&self) -> f64 {
        self.dx / (self.gravity * self.depth).sqrt()
    }

    /// Check parameter sanity and the CFL stability bound. The integrator
    /// itself never checks; an unstable dt slips through as diverging
    /// output, so reject it here.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.nodes < 3 {
            return Err(ParamError::TooFewNodes(self.nodes));
        }
        for (name, value) in [
            ("dx", self.dx),
            ("dt", self.dt),
            ("depth", self.depth),
            ("gravity", self.gravity),
        ] {
            if !(value > 0.0) {
                return Err(ParamError::NonPositive { name, value });
            }
        }
        if self.friction < 0.0 {
            return Err(ParamError::NegativeFriction(self.friction));
        }
        if self.wave_half_period == 0 {
            return Err(ParamError::ZeroWaveHalfPeriod);
        }
        for &index in &self.forced_nodes {
            if index >= self.nodes {
                return Err(ParamError::ForcedNodeOutOfRange { index, nodes: self.nodes });
            }
        }
        let bound = self.cfl_bound();
        if self.dt > bound {
            return Err(ParamError::UnstableTimeStep { dt: self.dt, bound });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = ChannelParams::default();
        assert_eq!(params.nodes, 75);
        assert_eq!(params.dx, 125.0);
        assert_eq!(params.dt, 1.0);
        assert_eq!(params.depth, 150.0);
        assert_eq!(params.gravity, 9.8);
        assert_eq!(params.friction, 0.0);
        assert_eq!(params.wave_half_period, 32);
        assert!(params.forced_nodes.is_empty());
    }

    #[test]
    fn test_default_params_are_valid() {
        assert!(ChannelParams::default().validate().is_ok());
    }

    #[test]
    fn test_forced_set_default_is_channel_ends() {
        let params = ChannelParams::default();
        assert_eq!(params.forced_set(), vec![0, 73]);
    }

    #[test]
    fn test_forced_set_override() {
        let params = ChannelParams { forced_nodes: vec![0, 10, 20], ..Default::default() };
        assert_eq!(params.forced_set(), vec![0, 10, 20]);
    }

    #[test]
    fn test_wall_is_last_node() {
        let params = ChannelParams::default();
        assert_eq!(params.wall(), 74);
    }

    #[test]
    fn test_cfl_bound_value() {
        let params = ChannelParams::default();
        // dx / sqrt(g*h) = 125 / sqrt(9.8 * 150) ~= 3.26
        let expected = 125.0 / (9.8_f64 * 150.0).sqrt();
        assert!((params.cfl_bound() - expected).abs() < 1e-12);
        assert!(params.cfl_bound() > params.dt);
    }

    #[test]
    fn test_validate_rejects_unstable_dt() {
        let params = ChannelParams { dt: 5.0, ..Default::default() };
        match params.validate() {
            Err(ParamError::UnstableTimeStep { dt, bound }) => {
                assert_eq!(dt, 5.0);
                assert!(bound < 5.0);
            }
            other => panic!("expected UnstableTimeStep, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_tiny_grid() {
        let params = ChannelParams { nodes: 2, ..Default::default() };
        assert!(matches!(params.validate(), Err(ParamError::TooFewNodes(2))));
    }

    #[test]
    fn test_validate_rejects_nonpositive_values() {
        let cases = [
            ("dx", ChannelParams { dx: 0.0, ..Default::default() }),
            ("dt", ChannelParams { dt: -1.0, ..Default::default() }),
            ("depth", ChannelParams { depth: 0.0, ..Default::default() }),
            ("gravity", ChannelParams { gravity: -9.8, ..Default::default() }),
        ];
        for (field, params) in cases {
            match params.validate() {
                Err(ParamError::NonPositive { name, .. }) => assert_eq!(name, field),
                other => panic!("{} should be rejected, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_negative_friction() {
        let params = ChannelParams { friction: -0.1, ..Default::default() };
        assert!(matches!(params.validate(), Err(ParamError::NegativeFriction(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range_forced_node() {
        let params = ChannelParams { forced_nodes: vec![0, 75], ..Default::default() };
        assert!(matches!(
            params.validate(),
            Err(ParamError::ForcedNodeOutOfRange { index: 75, nodes: 75 })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_wave_half_period() {
        let params = ChannelParams { wave_half_period: 0, ..Default::default() };
        assert!(matches!(params.validate(), Err(ParamError::ZeroWaveHalfPeriod)));
    }

    #[test]
    fn test_error_display_mentions_bound() {
        let params = ChannelParams { dt: 5.0, ..Default::default() };
        let msg = params.validate().unwrap_err().to_string();
        assert!(msg.contains("stability bound"), "message was: {msg}");
    }
}
