// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Simulation parameters and their accepted ranges
//!
//! # Environment Configuration
//!
//! [`SimulationConfig::from_env`] starts from the defaults and applies any of
//! these overrides:
//!
//! ```bash
//! export GRAVITY_SIM_G=8000          # gravitational constant, 0..=20000
//! export GRAVITY_SIM_TIME_SCALE=2.5  # time scale, 0.1..=10.0
//! export GRAVITY_SIM_TIMESTEP=0.01   # seconds per tick at time scale 1.0
//! export GRAVITY_SIM_PAUSED=true     # start paused
//! ```

use crate::error::{ConfigError, Result};
use crate::integration::{Integrator, SemiImplicitEuler, DEFAULT_TIMESTEP};
use log::warn;

/// Default gravitational constant (sandbox units, chosen for visual effect)
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 6000.0;

/// Default time scale (simulated seconds per real second)
pub const DEFAULT_TIME_SCALE: f64 = 1.0;

/// Environment variable overriding the gravitational constant
pub const ENV_GRAVITY: &str = "GRAVITY_SIM_G";
/// Environment variable overriding the time scale
pub const ENV_TIME_SCALE: &str = "GRAVITY_SIM_TIME_SCALE";
/// Environment variable overriding the base timestep
pub const ENV_TIMESTEP: &str = "GRAVITY_SIM_TIMESTEP";
/// Environment variable selecting a paused start
pub const ENV_PAUSED: &str = "GRAVITY_SIM_PAUSED";

/// Closed interval a tunable parameter is allowed to take
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
}

impl ParameterRange {
    /// Check whether `value` lies inside the range
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into the range; NaN maps to `min`
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

/// Range offered by the gravity slider
pub const GRAVITY_RANGE: ParameterRange = ParameterRange { min: 0.0, max: 20000.0 };

/// Range offered by the time-scale slider
pub const TIME_SCALE_RANGE: ParameterRange = ParameterRange { min: 0.1, max: 10.0 };

/// Clamp a requested gravitational constant into [`GRAVITY_RANGE`]
pub fn clamp_gravity(value: f64) -> f64 {
    GRAVITY_RANGE.clamp(value)
}

/// Clamp a requested time scale into [`TIME_SCALE_RANGE`]
pub fn clamp_time_scale(value: f64) -> f64 {
    TIME_SCALE_RANGE.clamp(value)
}

/// Starting parameters for a [`SimulationWorld`](crate::SimulationWorld)
///
/// # Example
///
/// ```
/// use gravity_sim::config::SimulationConfig;
///
/// let config = SimulationConfig::new(8000.0, 2.0).start_paused();
/// assert!(config.validate().is_ok());
/// assert!(config.paused);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Gravitational constant G
    pub gravitational_constant: f64,
    /// Multiplier applied to `timestep` by `tick`
    pub time_scale: f64,
    /// Simulated seconds per tick at time scale 1.0
    pub timestep: f64,
    /// Whether the world starts paused
    pub paused: bool,
    /// Whether to log warnings about non-finite forces and states
    pub warn_on_invalid: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            time_scale: DEFAULT_TIME_SCALE,
            timestep: DEFAULT_TIMESTEP,
            paused: false,
            warn_on_invalid: true,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with custom G and time scale
    pub fn new(gravitational_constant: f64, time_scale: f64) -> Self {
        SimulationConfig {
            gravitational_constant,
            time_scale,
            ..Self::default()
        }
    }

    /// Set the base timestep
    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    /// Start the world paused
    pub fn start_paused(mut self) -> Self {
        self.paused = true;
        self
    }

    /// Enable or disable warnings about invalid numeric state
    pub fn with_warnings(mut self, warn_on_invalid: bool) -> Self {
        self.warn_on_invalid = warn_on_invalid;
        self
    }

    /// Check every parameter against its accepted range
    ///
    /// An effective step (`timestep * time_scale`) that is valid but likely
    /// to be unstable is accepted with a logged warning.
    pub fn validate(&self) -> Result<()> {
        if !GRAVITY_RANGE.contains(self.gravitational_constant) {
            return Err(ConfigError::GravityOutOfRange {
                value: self.gravitational_constant,
                min: GRAVITY_RANGE.min,
                max: GRAVITY_RANGE.max,
            });
        }

        if !TIME_SCALE_RANGE.contains(self.time_scale) {
            return Err(ConfigError::TimeScaleOutOfRange {
                value: self.time_scale,
                min: TIME_SCALE_RANGE.min,
                max: TIME_SCALE_RANGE.max,
            });
        }

        if self.timestep <= 0.0 || !self.timestep.is_finite() {
            return Err(ConfigError::InvalidTimestep(format!(
                "{} must be positive and finite",
                self.timestep
            )));
        }

        if let Err(message) = SemiImplicitEuler::new().validate_timestep(self.timestep * self.time_scale) {
            warn!("{}", message);
        }

        Ok(())
    }

    /// Defaults overridden by the `GRAVITY_SIM_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by values from an arbitrary key lookup
    ///
    /// Used by [`from_env`](Self::from_env); takes a closure so callers can
    /// feed overrides from any key-value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = parse_number(&lookup, ENV_GRAVITY)? {
            config.gravitational_constant = value;
        }
        if let Some(value) = parse_number(&lookup, ENV_TIME_SCALE)? {
            config.time_scale = value;
        }
        if let Some(value) = parse_number(&lookup, ENV_TIMESTEP)? {
            config.timestep = value;
        }
        if let Some(raw) = lookup(ENV_PAUSED) {
            config.paused = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        name: ENV_PAUSED.to_string(),
                        value: raw,
                    })
                }
            };
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_number<F>(lookup: &F, name: &str) -> Result<Option<f64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvValue {
                name: name.to_string(),
                value: raw,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.gravitational_constant, 6000.0);
        assert_eq!(config.time_scale, 1.0);
        assert_eq!(config.timestep, 1.0 / 60.0);
        assert!(!config.paused);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_range_clamp() {
        assert_eq!(clamp_gravity(-5.0), 0.0);
        assert_eq!(clamp_gravity(25000.0), 20000.0);
        assert_eq!(clamp_time_scale(0.0), 0.1);
        assert_eq!(clamp_time_scale(f64::NAN), 0.1);
        assert_eq!(clamp_time_scale(3.5), 3.5);
        assert!(GRAVITY_RANGE.contains(0.0));
        assert!(!TIME_SCALE_RANGE.contains(10.5));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let err = SimulationConfig::new(30000.0, 1.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::GravityOutOfRange { value, .. } if value == 30000.0));

        let err = SimulationConfig::new(6000.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::TimeScaleOutOfRange { .. }));

        let err = SimulationConfig::default().with_timestep(0.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimestep(_)));

        assert!(SimulationConfig::new(f64::NAN, 1.0).validate().is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = SimulationConfig::new(6000.0, 20.0).validate().unwrap_err();
        assert_eq!(err.to_string(), "time scale 20 is outside 0.1..=10");
    }

    #[test]
    fn test_from_lookup_applies_overrides() {
        let config = SimulationConfig::from_lookup(lookup_from(&[
            (ENV_GRAVITY, "8000"),
            (ENV_TIME_SCALE, " 2.5 "),
            (ENV_PAUSED, "true"),
        ]))
        .unwrap();

        assert_eq!(config.gravitational_constant, 8000.0);
        assert_eq!(config.time_scale, 2.5);
        assert_eq!(config.timestep, DEFAULT_TIMESTEP);
        assert!(config.paused);
    }

    #[test]
    fn test_from_lookup_without_overrides_is_default() {
        let config = SimulationConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = SimulationConfig::from_lookup(lookup_from(&[(ENV_GRAVITY, "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvValue {
                name: ENV_GRAVITY.to_string(),
                value: "lots".to_string(),
            }
        );

        let err = SimulationConfig::from_lookup(lookup_from(&[(ENV_PAUSED, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvValue { .. }));
    }

    #[test]
    fn test_from_lookup_validates_result() {
        let err = SimulationConfig::from_lookup(lookup_from(&[(ENV_TIME_SCALE, "50")])).unwrap_err();
        assert!(matches!(err, ConfigError::TimeScaleOutOfRange { .. }));
    }
}
