//! Chain of Skid-Buffer Stages.
//!
//! Links `depth` stages producer-to-consumer. Each stage's upstream interface is
//! driven by the previous stage's registered `o_valid`/`o_data`, and its
//! downstream `o_ready` by the next stage's registered `i_ready`. The first stage
//! faces the external source and the last stage faces the sink.
//!
//! All stages evaluate against the same pre-tick snapshot and commit together.

use super::skid::{SkidStage, StageInputs, StageState, Transition};
use super::traits::Clocked;
use crate::common::error::ConfigError;

/// External signals driving a chain for one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainInputs<T> {
    /// The source offers `i_data`.
    pub i_valid: bool,
    /// Source item.
    pub i_data: T,
    /// The sink accepts the last stage's output this cycle.
    pub sink_ready: bool,
}

/// Observable result of one chain tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainStep<T> {
    /// The source item was taken by the first stage.
    pub accepted: bool,
    /// The item handed to the sink, if any.
    pub delivered: Option<T>,
    /// The rule each stage applied, first stage first.
    pub transitions: Vec<Transition>,
}

/// Next state of a chain: one state per stage plus the sink register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainNext<T> {
    stages: Vec<StageState<T>>,
    sink: Option<T>,
}

/// A linear pipeline of skid-buffer stages.
#[derive(Clone, Debug)]
pub struct PipelineChain<T> {
    stages: Vec<SkidStage<T>>,
    sink: T,
}

impl<T: Clone + Default> PipelineChain<T> {
    /// Creates a chain of `depth` stages in reset state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoStages`] when `depth` is zero.
    pub fn new(depth: usize) -> Result<Self, ConfigError> {
        if depth == 0 {
            return Err(ConfigError::NoStages);
        }
        Ok(Self {
            stages: vec![SkidStage::new(); depth],
            sink: T::default(),
        })
    }

    /// Number of stages.
    pub fn depth(&self) -> usize {
        self.stages.len()
    }

    /// The stages, first stage first.
    pub fn stages(&self) -> &[SkidStage<T>] {
        &self.stages
    }

    /// `i_ready` of the first stage, seen by the source.
    pub fn i_ready(&self) -> bool {
        self.stages.first().is_some_and(SkidStage::i_ready)
    }

    /// The last stage's output, when valid.
    pub fn head(&self) -> Option<&T> {
        self.stages
            .last()
            .filter(|stage| stage.o_valid())
            .map(SkidStage::o_data)
    }

    /// Total items held across all stages.
    pub fn occupancy(&self) -> usize {
        self.stages.iter().map(|s| s.state().occupancy()).sum()
    }

    /// The sink register: the most recently delivered item, or `T::default()`
    /// while `stall` is asserted. Gating never touches handshake state.
    pub fn output(&self, stall: bool) -> T {
        if stall {
            T::default()
        } else {
            self.sink.clone()
        }
    }

    /// Returns every stage and the sink register to reset.
    pub fn flush(&mut self) {
        for stage in &mut self.stages {
            stage.reset();
        }
        self.sink = T::default();
    }
}

impl<T: Clone + Default> Clocked for PipelineChain<T> {
    type Input = ChainInputs<T>;
    type Output = ChainStep<T>;
    type Next = ChainNext<T>;

    fn evaluate(&self, input: &Self::Input) -> (Self::Output, Self::Next) {
        let last = self.stages.len() - 1;
        let mut states = Vec::with_capacity(self.stages.len());
        let mut transitions = Vec::with_capacity(self.stages.len());
        let mut accepted = false;
        let mut delivered = None;

        for (i, stage) in self.stages.iter().enumerate() {
            let (i_valid, i_data) = if i == 0 {
                (input.i_valid, input.i_data.clone())
            } else {
                let prev = &self.stages[i - 1];
                (prev.o_valid(), prev.o_data().clone())
            };
            let o_ready = if i == last {
                input.sink_ready
            } else {
                self.stages[i + 1].i_ready()
            };

            let (step, next) = stage.evaluate(&StageInputs {
                i_valid,
                i_data,
                o_ready,
            });
            if i == 0 {
                accepted = step.accepted;
            }
            if i == last {
                delivered = step.emitted;
            }
            transitions.push(step.transition);
            states.push(next);
        }

        let next = ChainNext {
            stages: states,
            sink: delivered.clone(),
        };
        let step = ChainStep {
            accepted,
            delivered,
            transitions,
        };
        (step, next)
    }

    fn commit(&mut self, next: Self::Next) {
        for (stage, state) in self.stages.iter_mut().zip(next.stages) {
            stage.commit(state);
        }
        if let Some(item) = next.sink {
            self.sink = item;
        }
    }
}
