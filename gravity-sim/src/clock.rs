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
//! Wall-clock to fixed-tick conversion for frame loops

use log::debug;
use std::time::Duration;

/// Turns irregular frame times into a whole number of fixed ticks
///
/// Leftover time carries into the next frame. When a frame would need more
/// than `max_ticks` ticks (a stall, a debugger break), the backlog beyond
/// the cap is dropped instead of being replayed later.
///
/// # Example
///
/// ```
/// use gravity_sim::clock::FixedStepClock;
/// use std::time::Duration;
///
/// let mut clock = FixedStepClock::new(Duration::from_millis(10), 5);
/// assert_eq!(clock.advance(Duration::from_millis(25)), 2);
/// assert_eq!(clock.advance(Duration::from_millis(5)), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: Duration,
    max_ticks: u32,
    accumulated: Duration,
}

impl FixedStepClock {
    /// Create a clock emitting one tick per `step`
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn new(step: Duration, max_ticks: u32) -> Self {
        assert!(!step.is_zero(), "Clock step must be non-zero");
        FixedStepClock {
            step,
            max_ticks,
            accumulated: Duration::ZERO,
        }
    }

    /// Clock ticking at `rate` Hz
    pub fn from_rate(rate: u32, max_ticks: u32) -> Self {
        assert!(rate > 0, "Clock rate must be positive");
        Self::new(Duration::from_secs(1) / rate, max_ticks)
    }

    /// Length of one tick
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Time carried over that has not yet made a full tick
    pub fn pending(&self) -> Duration {
        self.accumulated
    }

    /// Add `elapsed` wall time and return how many ticks are due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;

        let due = self.accumulated.as_nanos() / self.step.as_nanos();
        let ticks = due.min(u128::from(self.max_ticks)) as u32;

        if due > u128::from(ticks) {
            debug!("Dropping {} ticks of backlog", due - u128::from(ticks));
            self.accumulated = Duration::from_nanos((self.accumulated.as_nanos() % self.step.as_nanos()) as u64);
        } else {
            self.accumulated -= self.step * ticks;
        }

        ticks
    }

    /// Forget any carried-over time
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

impl Default for FixedStepClock {
    /// 60 Hz, at most 10 ticks per frame
    fn default() -> Self {
        Self::from_rate(60, 10)
    }
}
