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
//! Body handles
//!
//! Bodies are identified by lightweight handles so the UI layer can follow a
//! planet across ticks, and so collision reports can name what merged.

use std::fmt;

/// Unique identifier for a body within one world
///
/// Ids are handed out in increasing order and never reused, even across
/// [`SimulationWorld::clear`](crate::SimulationWorld::clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(u64);

impl BodyId {
    /// Create a new id from a raw u64 value
    pub fn new(id: u64) -> Self {
        BodyId(id)
    }

    /// Get the raw u64 value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body({})", self.0)
    }
}

/// Monotonic id source owned by a world
#[derive(Debug, Default)]
pub(crate) struct BodyIdAllocator {
    next: u64,
}

impl BodyIdAllocator {
    pub(crate) fn allocate(&mut self) -> BodyId {
        let id = BodyId(self.next);
        self.next += 1;
        id
    }
}
