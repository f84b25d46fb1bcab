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
//! Error types for simulation configuration.

use thiserror::Error;

/// Rejected configuration value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// G outside the accepted range
    #[error("gravitational constant {value} is outside {min}..={max}")]
    GravityOutOfRange {
        /// Rejected value
        value: f64,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Time scale outside the accepted range
    #[error("time scale {value} is outside {min}..={max}")]
    TimeScaleOutOfRange {
        /// Rejected value
        value: f64,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Timestep that cannot drive a simulation
    #[error("invalid timestep: {0}")]
    InvalidTimestep(String),

    /// Environment override that does not parse as a number
    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidEnvValue {
        /// Variable name
        name: String,
        /// Raw value
        value: String,
    },
}

/// Result alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
