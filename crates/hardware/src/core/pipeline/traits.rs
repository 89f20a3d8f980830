//! Clocked Unit Interface.
//!
//! Every stateful unit advances in two phases per clock tick:
//! 1. **Evaluate:** compute outputs and next state from a read-only view of the
//!    state committed on the previous tick.
//! 2. **Commit:** replace the state with the computed next state.
//!
//! A composition evaluates all of its units before committing any of them, so no
//! unit observes another unit's post-tick value within the same tick and the
//! evaluation order never matters.

/// A synchronous unit with snapshot-then-commit state updates.
pub trait Clocked {
    /// Combinational inputs sampled during evaluation.
    type Input;

    /// Combinational outputs for the current tick.
    type Output;

    /// State to install at the clock edge.
    type Next;

    /// Computes this tick's outputs and next state without mutating `self`.
    fn evaluate(&self, input: &Self::Input) -> (Self::Output, Self::Next);

    /// Installs the next state computed by [`Clocked::evaluate`].
    fn commit(&mut self, next: Self::Next);

    /// Evaluates and commits in one step, for a unit clocked on its own.
    fn tick(&mut self, input: &Self::Input) -> Self::Output {
        let (output, next) = self.evaluate(input);
        self.commit(next);
        output
    }
}
