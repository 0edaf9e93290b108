// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use uuid::Uuid;

/// Source of fresh identifiers for findings and measurements.
///
/// Finalization assigns ids through this seam so callers control where
/// identifiers come from; production uses random UUIDs, tests a counter.
pub trait IdGenerator {
    /// Produces the next identifier. Every call must return a value never
    /// returned before by this generator.
    fn next_id(&mut self) -> String;
}

/// Generates random version 4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Generates `prefix-1`, `prefix-2`, ... deterministically.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: u64,
}

impl SequentialIdGenerator {
    /// Creates a generator that counts up from one under the given prefix.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prepended to every generated id
    #[must_use]
    pub const fn new(prefix: String) -> Self {
        Self { prefix, counter: 0 }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}
