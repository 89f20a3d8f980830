//! Skid-Buffer Pipeline Stage.
//!
//! A stage wraps one pipeline register between an upstream producer and a
//! downstream consumer using a valid/ready handshake:
//! - A transfer happens on an interface exactly when `valid && ready` hold there.
//! - `ready` toward upstream is registered, so when the consumer stalls while an
//!   item is already in flight, the item lands in a one-deep overflow buffer and
//!   readiness is withdrawn for the following cycles until the buffer drains.
//!
//! Two storage slots are enough to be lossless under any stall pattern: the
//! output register plus the buffer absorb the one item that was already accepted
//! when the stall became visible.

use tracing::trace;

use super::traits::Clocked;

/// Registered state of one stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageState<T> {
    /// Output register.
    pub data: T,
    /// `o_valid`: the output register holds an item not yet taken downstream.
    pub valid: bool,
    /// `i_ready`: the stage accepts an upstream item this cycle.
    pub ready: bool,
    /// Overflow buffer.
    pub buffer_data: T,
    /// The overflow buffer holds an item.
    pub buffer_valid: bool,
}

impl<T: Default> Default for StageState<T> {
    /// Reset state: empty and ready.
    fn default() -> Self {
        Self {
            data: T::default(),
            valid: false,
            ready: true,
            buffer_data: T::default(),
            buffer_valid: false,
        }
    }
}

impl<T> StageState<T> {
    /// Number of items held (0, 1 or 2).
    pub fn occupancy(&self) -> usize {
        usize::from(self.valid) + usize::from(self.buffer_valid)
    }
}

/// Boundary signals sampled by a stage during evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageInputs<T> {
    /// Upstream offers `i_data`.
    pub i_valid: bool,
    /// Upstream item.
    pub i_data: T,
    /// Downstream accepts the output register this cycle.
    pub o_ready: bool,
}

/// Which state-transition rule fired on a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The output register was free (empty or consumed) and took the upstream item.
    Load,
    /// The consumer stalled on a full output register; the upstream item went to
    /// the buffer and readiness was withdrawn.
    Overflow,
    /// The consumer became ready while the buffer was full; the buffered item
    /// moved to the output register and readiness returned.
    Drain,
    /// The output register was consumed and nothing replaced it.
    Consume,
    /// Nothing moved.
    Hold,
}

/// Observable result of one stage tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageStep<T> {
    /// An upstream item was taken (`i_valid && i_ready`).
    pub accepted: bool,
    /// The item handed downstream (`o_valid && o_ready`), if any.
    pub emitted: Option<T>,
    /// The rule that produced the next state.
    pub transition: Transition,
}

/// One skid-buffered pipeline stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkidStage<T> {
    state: StageState<T>,
}

impl<T: Clone + Default> SkidStage<T> {
    /// Creates a stage in its reset state.
    pub fn new() -> Self {
        Self {
            state: StageState::default(),
        }
    }

    /// Current registered state.
    pub const fn state(&self) -> &StageState<T> {
        &self.state
    }

    /// `i_ready` seen by the upstream producer.
    pub const fn i_ready(&self) -> bool {
        self.state.ready
    }

    /// `o_valid` seen by the downstream consumer.
    pub const fn o_valid(&self) -> bool {
        self.state.valid
    }

    /// `o_data` seen by the downstream consumer.
    pub const fn o_data(&self) -> &T {
        &self.state.data
    }

    /// Returns the stage to its reset state, discarding held items.
    pub fn reset(&mut self) {
        self.state = StageState::default();
    }

    /// Computes the next state from the current one. The rules are tried in
    /// priority order and the first match wins.
    fn next_state(&self, inputs: &StageInputs<T>) -> (StageStep<T>, StageState<T>) {
        let s = &self.state;
        let accepted = inputs.i_valid && s.ready;
        let consumed = s.valid && inputs.o_ready;
        let out_free = !s.valid || inputs.o_ready;
        let emitted = consumed.then(|| s.data.clone());

        let (transition, next) = if accepted && out_free {
            (
                Transition::Load,
                StageState {
                    data: inputs.i_data.clone(),
                    valid: true,
                    ..s.clone()
                },
            )
        } else if accepted {
            (
                Transition::Overflow,
                StageState {
                    buffer_data: inputs.i_data.clone(),
                    buffer_valid: true,
                    ready: false,
                    ..s.clone()
                },
            )
        } else if !s.ready && inputs.o_ready {
            (
                Transition::Drain,
                StageState {
                    data: s.buffer_data.clone(),
                    valid: s.buffer_valid,
                    ready: true,
                    buffer_data: T::default(),
                    buffer_valid: false,
                },
            )
        } else if consumed {
            (
                Transition::Consume,
                StageState {
                    valid: false,
                    ..s.clone()
                },
            )
        } else {
            (Transition::Hold, s.clone())
        };

        let step = StageStep {
            accepted,
            emitted,
            transition,
        };
        (step, next)
    }
}

impl<T: Clone + Default> Clocked for SkidStage<T> {
    type Input = StageInputs<T>;
    type Output = StageStep<T>;
    type Next = StageState<T>;

    fn evaluate(&self, input: &Self::Input) -> (Self::Output, Self::Next) {
        let (step, next) = self.next_state(input);
        match step.transition {
            Transition::Overflow => trace!("skid stage overflow: buffering upstream item"),
            Transition::Drain => trace!("skid stage drain: releasing buffered item"),
            _ => {}
        }
        (step, next)
    }

    fn commit(&mut self, next: Self::Next) {
        self.state = next;
    }
}
