//! Reusable array test fixtures.
//!
//! - [`FlakyDefault`]: an element whose `Default` panics once an armed
//!   budget runs out, for exercising failed growth steps.
//! - [`op_sequence`]: deterministic random operation sequences.
//! - [`ModelChecker`]: replays operations against a `DynamicArray` and a
//!   `Vec` reference model and reports the first divergence.

use std::cell::Cell;

use dynarr_array::DynamicArray;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

thread_local! {
    static DEFAULT_BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Element whose `Default` panics after an armed number of successes.
///
/// Unarmed (the initial state on every thread), it behaves like `u32`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FlakyDefault(pub u32);

impl FlakyDefault {
    /// Allow `budget` more default constructions on this thread; the next
    /// one panics.
    pub fn arm(budget: usize) {
        DEFAULT_BUDGET.with(|b| b.set(Some(budget)));
    }

    /// Make `Default` infallible again.
    pub fn disarm() {
        DEFAULT_BUDGET.with(|b| b.set(None));
    }
}

impl Default for FlakyDefault {
    fn default() -> Self {
        DEFAULT_BUDGET.with(|b| match b.get() {
            Some(0) => panic!("FlakyDefault: default construction budget exhausted"),
            Some(n) => b.set(Some(n - 1)),
            None => {}
        });
        Self(0)
    }
}

/// One mutation applied by the [`ModelChecker`].
///
/// Positions are stored as raw seeds and reduced modulo the current
/// length when applied, so any sequence is valid for any starting state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    PushBack(i32),
    PopBack,
    Insert { seed: usize, value: i32 },
    Erase { seed: usize },
    Set { seed: usize, value: i32 },
    Resize(usize),
    Reserve(usize),
    Clear,
}

/// Generate `len` operations from `seed`.
///
/// The mix favours appends and insertions so arrays grow through several
/// doubling steps. Resize and reserve targets stay below 64.
pub fn op_sequence(seed: u64, len: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let pick = rng.next_u32() % 20;
            let value = rng.next_u32() as i32;
            let seed = rng.next_u64() as usize;
            match pick {
                0..=6 => Op::PushBack(value),
                7..=9 => Op::Insert { seed, value },
                10..=11 => Op::Erase { seed },
                12..=13 => Op::PopBack,
                14..=15 => Op::Set { seed, value },
                16 => Op::Resize(seed % 64),
                17..=18 => Op::Reserve(seed % 64),
                _ => Op::Clear,
            }
        })
        .collect()
}

/// Runs a `DynamicArray<i32>` in lockstep with a `Vec<i32>`.
pub struct ModelChecker {
    array: DynamicArray<i32>,
    model: Vec<i32>,
    steps: usize,
}

impl ModelChecker {
    pub fn new() -> Self {
        Self {
            array: DynamicArray::new(),
            model: Vec::new(),
            steps: 0,
        }
    }

    /// Start from an existing sequence.
    pub fn from_slice(start: &[i32]) -> Self {
        Self {
            array: DynamicArray::from(start),
            model: start.to_vec(),
            steps: 0,
        }
    }

    pub fn array(&self) -> &DynamicArray<i32> {
        &self.array
    }

    pub fn model(&self) -> &[i32] {
        &self.model
    }

    /// Apply one operation to both sides, then compare them.
    pub fn apply(&mut self, op: &Op) -> Result<(), String> {
        let old_capacity = self.array.capacity();
        let len = self.model.len();
        match *op {
            Op::PushBack(value) => {
                self.array.push_back(value);
                self.model.push(value);
            }
            Op::PopBack => {
                let got = self.array.pop_back();
                let want = self.model.pop();
                if got != want {
                    return Err(self.mismatch(op, format!("pop_back returned {got:?}, want {want:?}")));
                }
            }
            Op::Insert { seed, value } => {
                let at = seed % (len + 1);
                let got = self.array.insert(at, value);
                self.model.insert(at, value);
                if got != at {
                    return Err(self.mismatch(op, format!("insert returned {got}, want {at}")));
                }
            }
            Op::Erase { seed } => {
                if len > 0 {
                    let at = seed % len;
                    let got = self.array.erase(at);
                    self.model.remove(at);
                    if got != at {
                        return Err(self.mismatch(op, format!("erase returned {got}, want {at}")));
                    }
                }
            }
            Op::Set { seed, value } => {
                if len > 0 {
                    let at = seed % len;
                    self.array[at] = value;
                    self.model[at] = value;
                }
            }
            Op::Resize(new_len) => {
                self.array.resize(new_len);
                self.model.resize(new_len, 0);
            }
            Op::Reserve(new_capacity) => {
                self.array.reserve(new_capacity);
                if self.array.capacity() < new_capacity {
                    return Err(self.mismatch(
                        op,
                        format!("capacity {} after reserve", self.array.capacity()),
                    ));
                }
            }
            Op::Clear => {
                self.array.clear();
                self.model.clear();
            }
        }
        self.steps += 1;
        if self.array.capacity() < old_capacity {
            return Err(self.mismatch(
                op,
                format!(
                    "capacity shrank from {old_capacity} to {}",
                    self.array.capacity()
                ),
            ));
        }
        self.check().map_err(|reason| self.mismatch(op, reason))
    }

    /// Apply every operation, stopping at the first divergence.
    pub fn run(&mut self, ops: &[Op]) -> Result<(), String> {
        ops.iter().try_for_each(|op| self.apply(op))
    }

    /// Compare the array against the model.
    pub fn check(&self) -> Result<(), String> {
        if self.array.len() != self.model.len() {
            return Err(format!(
                "len {} != model len {}",
                self.array.len(),
                self.model.len()
            ));
        }
        if self.array.capacity() < self.array.len() {
            return Err(format!(
                "capacity {} below len {}",
                self.array.capacity(),
                self.array.len()
            ));
        }
        if self.array.as_slice() != self.model.as_slice() {
            return Err(format!(
                "contents {:?} != model {:?}",
                self.array.as_slice(),
                self.model
            ));
        }
        Ok(())
    }

    fn mismatch(&self, op: &Op, reason: String) -> String {
        format!("step {} ({op:?}): {reason}", self.steps)
    }
}

impl Default for ModelChecker {
    fn default() -> Self {
        Self::new()
    }
}
