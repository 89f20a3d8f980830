//! Run statistics collection and reporting.
//!
//! Counters maintained by the datapath while it runs. They cover:
//! 1. **Throughput:** Cycles, instructions accepted from fetch, and instructions retired.
//! 2. **Data cache:** Loads retired plus hit and miss counts at the chain head.
//! 3. **Handshake:** Cycles the sink held back the chain, and skid-buffer overflow/drain events.

use std::fmt;

use crate::core::pipeline::skid::Transition;

/// Statistics for one datapath run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Clock ticks elapsed.
    pub cycles: u64,
    /// Instructions taken by the first stage.
    pub accepted: u64,
    /// Instructions handed to the sink.
    pub retired: u64,
    /// Loads handed to the sink.
    pub loads: u64,
    /// Head-of-chain loads that hit in the data cache.
    pub dcache_hits: u64,
    /// Head-of-chain loads that missed in the data cache.
    pub dcache_misses: u64,
    /// Cycles where a valid head item was held back at the sink, whether by the
    /// consumer or by a cache miss.
    pub sink_stall_cycles: u64,
    /// Items parked in a stage's overflow buffer.
    pub overflows: u64,
    /// Items released from a stage's overflow buffer.
    pub drains: u64,
}

impl SimStats {
    /// Fraction of data cache probes that hit, or `0.0` before the first probe.
    pub fn dcache_hit_rate(&self) -> f64 {
        let total = self.dcache_hits + self.dcache_misses;
        if total == 0 {
            0.0
        } else {
            self.dcache_hits as f64 / total as f64
        }
    }

    /// Retired instructions per cycle, or `0.0` before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.retired as f64 / self.cycles as f64
        }
    }

    /// Counts the skid events in one tick's per-stage transitions.
    pub fn record_transitions(&mut self, transitions: &[Transition]) {
        for transition in transitions {
            match transition {
                Transition::Overflow => self.overflows += 1,
                Transition::Drain => self.drains += 1,
                _ => {}
            }
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "PIPELINE STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_accepted             {}", self.accepted)?;
        writeln!(f, "sim_retired              {}", self.retired)?;
        writeln!(f, "sim_ipc                  {:.4}", self.ipc())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "DATA CACHE")?;
        writeln!(f, "  loads                  {}", self.loads)?;
        writeln!(f, "  dcache.hits            {}", self.dcache_hits)?;
        writeln!(f, "  dcache.misses          {}", self.dcache_misses)?;
        writeln!(
            f,
            "  dcache.hit_rate        {:.2}%",
            self.dcache_hit_rate() * 100.0
        )?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "HANDSHAKE")?;
        writeln!(f, "  sink_stall_cycles      {}", self.sink_stall_cycles)?;
        writeln!(f, "  skid.overflows         {}", self.overflows)?;
        write!(f, "  skid.drains            {}", self.drains)
    }
}
