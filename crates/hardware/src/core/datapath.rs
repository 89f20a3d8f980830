//! Pipelined Datapath.
//!
//! Composes the units into one clocked pipeline:
//! 1. **Decode:** A fetched word is decoded by the [`ControlUnit`] in the cycle it
//!    is offered, producing a [`DecodedEntry`].
//! 2. **Stages:** Entries travel through a [`PipelineChain`] of skid-buffer stages.
//! 3. **Retire:** When the head entry is a load, the data cache is probed at its
//!    effective address. A miss withholds readiness at the sink for that cycle, so
//!    the load stays at the head and retires on the retry, carrying the cached word.
//!
//! Every unit evaluates against the state committed on the previous tick before
//! any unit commits, so a cache fill and a stage move never observe each other
//! within one tick.

use tracing::debug;

use crate::common::bits::sign_extend;
use crate::common::error::ConfigError;
use crate::config::Config;
use crate::core::pipeline::chain::{ChainInputs, PipelineChain};
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::Clocked;
use crate::core::units::cache::{BackingStore, CacheLookup, DirectMappedCache};
use crate::core::units::control::ControlUnit;
use crate::isa::instruction::InstructionBits;
use crate::stats::SimStats;

/// An instruction offered by the fetch side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchedInstruction {
    /// Address of the instruction.
    pub pc: u64,
    /// Raw instruction word.
    pub inst: u32,
}

/// A decoded instruction in flight between stages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodedEntry {
    /// Address of the instruction.
    pub pc: u64,
    /// Raw instruction word.
    pub inst: u32,
    /// Sign-extended I-type immediate.
    pub imm: u64,
    /// Control signals for the instruction.
    pub ctrl: ControlSignals,
}

/// Signals driving the datapath for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DatapathInputs {
    /// Instruction offered this cycle, if any.
    pub fetch: Option<FetchedInstruction>,
    /// The consumer downstream of the last stage accepts this cycle.
    pub sink_ready: bool,
}

/// An instruction leaving the last stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// The decoded instruction.
    pub entry: DecodedEntry,
    /// Word read through the data cache, for loads.
    pub load_data: Option<u64>,
}

/// Observable result of one datapath tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatapathStep {
    /// The offered instruction was taken by the first stage.
    pub accepted: bool,
    /// The instruction retired this cycle, if any.
    pub retired: Option<Retired>,
    /// Data cache result for a load at the head, if one was probed.
    pub dcache: Option<CacheLookup>,
}

/// Decode, stage chain and data cache clocked together.
#[derive(Debug)]
pub struct Datapath<M> {
    control: ControlUnit,
    pipeline: PipelineChain<DecodedEntry>,
    dcache: DirectMappedCache<M>,
    stats: SimStats,
    trace: bool,
}

impl<M: BackingStore> Datapath<M> {
    /// Builds a datapath from `config`, backing its data cache with `store`.
    ///
    /// # Arguments
    ///
    /// * `config` - ISA variant, stage count and cache geometry.
    /// * `store` - Memory read on data cache misses.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `config` fails validation.
    pub fn new(config: &Config, store: M) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            control: ControlUnit::new(config.pipeline.isa),
            pipeline: PipelineChain::new(config.pipeline.stages)?,
            dcache: DirectMappedCache::new(&config.cache, store)?,
            stats: SimStats::default(),
            trace: config.general.trace,
        })
    }

    /// The control unit.
    pub const fn control(&self) -> &ControlUnit {
        &self.control
    }

    /// The stage chain.
    pub const fn pipeline(&self) -> &PipelineChain<DecodedEntry> {
        &self.pipeline
    }

    /// The data cache.
    pub const fn dcache(&self) -> &DirectMappedCache<M> {
        &self.dcache
    }

    /// Counters accumulated since construction or the last [`Datapath::reset`].
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// `i_ready` seen by the fetch side.
    pub fn ready(&self) -> bool {
        self.pipeline.i_ready()
    }

    /// The most recently retired entry, or the default entry while `stall` is asserted.
    pub fn output(&self, stall: bool) -> DecodedEntry {
        self.pipeline.output(stall)
    }

    /// Decodes a fetched instruction into a pipeline entry.
    pub fn decode(&self, fetched: FetchedInstruction) -> DecodedEntry {
        DecodedEntry {
            pc: fetched.pc,
            inst: fetched.inst,
            imm: sign_extend(u64::from(fetched.inst.imm_i()), 12),
            ctrl: self.control.decode_word(fetched.inst),
        }
    }

    /// Empties every stage, invalidates the data cache and clears statistics.
    pub fn reset(&mut self) {
        self.pipeline.flush();
        self.dcache.invalidate_all();
        self.stats = SimStats::default();
    }

    /// Advances the datapath by one clock cycle.
    ///
    /// # Arguments
    ///
    /// * `inputs` - The fetched instruction (if any) and the sink's readiness.
    ///
    /// # Returns
    ///
    /// What was accepted, what retired, and the data cache result for a head load.
    pub fn tick(&mut self, inputs: &DatapathInputs) -> DatapathStep {
        let (i_valid, i_data) = inputs
            .fetch
            .map_or((false, DecodedEntry::default()), |f| (true, self.decode(f)));

        // The effective address is `x0 + imm`; register contents live outside.
        let head = self.pipeline.head().copied();
        let probe = head
            .filter(|entry| entry.ctrl.mem_read)
            .map(|entry| self.dcache.evaluate(&entry.imm));
        let dcache = probe.map(|(lookup, _)| lookup);
        let hit = dcache.is_none_or(|lookup| lookup.hit);
        let sink_ready = inputs.sink_ready && hit;

        let (step, next) = self.pipeline.evaluate(&ChainInputs {
            i_valid,
            i_data,
            sink_ready,
        });

        self.pipeline.commit(next);
        if let Some((_, fill)) = probe {
            self.dcache.commit(fill);
        }

        let retired = step.delivered.map(|entry| Retired {
            entry,
            load_data: entry
                .ctrl
                .mem_read
                .then(|| dcache.map_or(0, |lookup| lookup.data)),
        });

        self.stats.cycles += 1;
        self.stats.accepted += u64::from(step.accepted);
        self.stats.record_transitions(&step.transitions);
        if let Some(lookup) = dcache {
            if lookup.hit {
                self.stats.dcache_hits += 1;
            } else {
                self.stats.dcache_misses += 1;
            }
        }
        if head.is_some() && !sink_ready {
            self.stats.sink_stall_cycles += 1;
        }
        if let Some(r) = &retired {
            self.stats.retired += 1;
            self.stats.loads += u64::from(r.load_data.is_some());
            if self.trace {
                debug!(
                    cycle = self.stats.cycles,
                    pc = r.entry.pc,
                    inst = r.entry.inst,
                    alu_op = r.entry.ctrl.alu_op.bits(),
                    load_data = r.load_data,
                    "retire"
                );
            }
        }

        DatapathStep {
            accepted: step.accepted,
            retired,
            dcache,
        }
    }
}
