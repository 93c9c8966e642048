use super::params::ChannelParams;

/// Momentum step: forward-Euler update of the linearized momentum equation
/// with linear bottom friction, interior nodes only.
/// du/dt = -g * (eta[i] - eta[i-1]) / dx - u[i] * friction
pub fn momentum_update(velocity: &mut [f64], elevation: &[f64], params: &ChannelParams) {
    let g = params.gravity;
    let dx = params.dx;
    let dt = params.dt;
    let friction = params.friction;
    for i in 1..params.wall() {
        let dudt = -g * (elevation[i] - elevation[i - 1]) / dx - velocity[i] * friction;
        velocity[i] += dt * dudt;
    }
}

/// Velocity boundary conditions: zero-gradient at the open left end
/// (copy the adjacent interior value), no-flow wall at the right end.
pub fn apply_velocity_boundary(velocity: &mut [f64]) {
    velocity[0] = velocity[1];
    let last = velocity.len() - 1;
    velocity[last] = 0.0;
}

/// Continuity step: linearized free-surface update under constant depth,
/// cells 0..last. The wall node's elevation is never touched.
/// d(eta)/dt = -h * (u[i+1] - u[i]) / dx
pub fn continuity_update(elevation: &mut [f64], velocity: &[f64], params: &ChannelParams) {
    let h = params.depth;
    let dx = params.dx;
    let dt = params.dt;
    for i in 0..params.wall() {
        let detadt = -h * (velocity[i + 1] - velocity[i]) / dx;
        elevation[i] += dt * detadt;
    }
}
