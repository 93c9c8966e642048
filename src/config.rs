use serde::Deserialize;

use crate::solver::ChannelParams;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub channel: ChannelConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    pub nodes: usize,
    pub dx: f64,
    pub dt: f64,
    pub depth: f64,
    pub gravity: f64,
    pub friction: f64,
    pub wave_half_period: u64,
    /// Empty list means the channel-end default set.
    pub forced_nodes: Vec<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: usize,
    pub height: usize,
    pub target_fps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: ChannelConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        let p = ChannelParams::default();
        Self {
            nodes: p.nodes,
            dx: p.dx,
            dt: p.dt,
            depth: p.depth,
            gravity: p.gravity,
            friction: p.friction,
            wave_half_period: p.wave_half_period,
            forced_nodes: p.forced_nodes,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 480,
            target_fps: 60,
        }
    }
}

impl ChannelConfig {
    /// Bridge into solver parameters. Validation happens on the params side.
    pub fn to_params(&self) -> ChannelParams {
        ChannelParams {
            nodes: self.nodes,
            dx: self.dx,
            dt: self.dt,
            depth: self.depth,
            gravity: self.gravity,
            friction: self.friction,
            wave_half_period: self.wave_half_period,
            forced_nodes: self.forced_nodes.clone(),
        }
    }
}

pub fn load() -> Config {
    let path = std::path::Path::new("undarium.yaml");
    if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("failed to parse undarium.yaml: {e}; using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read undarium.yaml: {e}; using defaults");
                Config::default()
            }
        }
    } else {
        Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let cfg = Config::default();
        assert_eq!(cfg.channel.nodes, 75);
        assert_eq!(cfg.channel.dx, 125.0);
        assert_eq!(cfg.channel.dt, 1.0);
        assert_eq!(cfg.channel.depth, 150.0);
        assert_eq!(cfg.channel.gravity, 9.8);
        assert_eq!(cfg.channel.friction, 0.0);
        assert_eq!(cfg.channel.wave_half_period, 32);
        assert!(cfg.channel.forced_nodes.is_empty());
        assert_eq!(cfg.display.width, 960);
        assert_eq!(cfg.display.height, 480);
        assert_eq!(cfg.display.target_fps, 60);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "channel:\n  depth: 40.0\ndisplay:\n  width: 640\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.channel.depth, 40.0);
        assert_eq!(cfg.channel.dx, 125.0); // default
        assert_eq!(cfg.display.width, 640);
        assert_eq!(cfg.display.height, 480); // default
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
channel:
  nodes: 101
  dx: 50.0
  dt: 0.5
  depth: 80.0
  gravity: 9.81
  friction: 0.002
  wave_half_period: 64
  forced_nodes: [0, 99]
display:
  width: 1280
  height: 640
  target_fps: 30
"#;
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.channel.nodes, 101);
        assert_eq!(cfg.channel.dx, 50.0);
        assert_eq!(cfg.channel.dt, 0.5);
        assert_eq!(cfg.channel.depth, 80.0);
        assert_eq!(cfg.channel.gravity, 9.81);
        assert_eq!(cfg.channel.friction, 0.002);
        assert_eq!(cfg.channel.wave_half_period, 64);
        assert_eq!(cfg.channel.forced_nodes, vec![0, 99]);
        assert_eq!(cfg.display.width, 1280);
        assert_eq!(cfg.display.height, 640);
        assert_eq!(cfg.display.target_fps, 30);
    }

    #[test]
    fn test_to_params_round_trip() {
        let cfg = ChannelConfig { nodes: 51, friction: 0.01, ..Default::default() };
        let params = cfg.to_params();
        assert_eq!(params.nodes, 51);
        assert_eq!(params.friction, 0.01);
        assert_eq!(params.dx, 125.0);
    }

    #[test]
    fn test_default_config_params_validate() {
        let cfg = Config::default();
        assert!(cfg.channel.to_params().validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        // When no undarium.yaml exists, load() returns defaults.
        let cfg = load();
        assert_eq!(cfg.channel.nodes, 75);
        assert_eq!(cfg.display.target_fps, 60);
    }
}
