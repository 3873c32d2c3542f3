//! Plain-text rendering of simulation results.
//!
//! Formats results the way they would be written up by hand. It provides:
//! 1. **Schedule report:** Process table, Gantt strip with time markers, and averages.
//! 2. **Cache report:** Hit/fault summary and the step-by-step resident-set table.
//!
//! Reports are [`fmt::Display`] adapters and do no computation beyond formatting and the
//! figures from [`crate::stats`].

use std::fmt::{self, Display};

use crate::cache::CacheResult;
use crate::common::Ticks;
use crate::sched::ScheduleResult;
use crate::stats::{CacheStats, ScheduleStats};

/// Section names accepted by [`ScheduleReport::sections`].
pub const SCHEDULE_SECTIONS: &[&str] = &["processes", "gantt", "summary"];

/// Section names accepted by [`CacheReport::sections`].
pub const CACHE_SECTIONS: &[&str] = &["summary", "steps"];

const RULE_HEAVY: &str = "==========================================================";
const RULE_LIGHT: &str = "----------------------------------------------------------";

/// Minimum inner width of a Gantt block.
const GANTT_CELL: usize = 4;

fn wanted(sections: &[String], name: &str) -> bool {
    sections.is_empty() || sections.iter().any(|s| s == name)
}

fn metric(value: Option<Ticks>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

/// Text report for a Round-Robin run.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleReport<'a> {
    result: &'a ScheduleResult,
    sections: &'a [String],
}

impl<'a> ScheduleReport<'a> {
    /// Creates a report showing every section.
    pub const fn new(result: &'a ScheduleResult) -> Self {
        Self {
            result,
            sections: &[],
        }
    }

    /// Restricts output to the named sections; an empty slice shows all of them.
    #[must_use]
    pub fn sections(mut self, sections: &'a [String]) -> Self {
        self.sections = sections;
        self
    }

    fn write_processes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<6} {:>8} {:>6} {:>11} {:>8} {:>11}",
            "PID", "Arrival", "Burst", "Completion", "Waiting", "Turnaround"
        )?;
        for p in &self.result.processes {
            writeln!(
                f,
                "{:<6} {:>8} {:>6} {:>11} {:>8} {:>11}",
                format!("P{}", p.id),
                p.arrival_time,
                p.burst_time,
                metric(p.completion_time),
                metric(p.waiting_time),
                metric(p.turnaround_time),
            )?;
        }
        Ok(())
    }

    fn write_gantt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut blocks: Vec<(String, Ticks, Ticks)> = Vec::new();
        let mut clock = 0;
        for e in &self.result.timeline {
            if e.start_time > clock {
                blocks.push(("idle".to_owned(), clock, e.start_time));
            }
            blocks.push((format!("P{}", e.process_id), e.start_time, e.end_time));
            clock = e.end_time;
        }
        let Some(&(_, first_start, _)) = blocks.first() else {
            return writeln!(f, "(nothing ran)");
        };

        let width = blocks
            .iter()
            .map(|(label, _, _)| label.len())
            .max()
            .unwrap_or(0)
            .max(GANTT_CELL);

        let mut bar = String::from("|");
        let mut marks = first_start.to_string();
        for (k, (label, _, end)) in blocks.iter().enumerate() {
            bar.push_str(&format!(" {label:^width$} |"));
            let col = (k + 1) * (width + 3);
            marks = format!("{marks:<col$}{end}");
        }
        writeln!(f, "{bar}")?;
        writeln!(f, "{marks}")
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = ScheduleStats::from_result(self.result);
        writeln!(f, "SUMMARY")?;
        writeln!(f, "  avg.waiting            {:.2}", stats.avg_waiting_time)?;
        writeln!(f, "  avg.turnaround         {:.2}", stats.avg_turnaround_time)?;
        writeln!(f, "  makespan               {}", stats.makespan)?;
        writeln!(f, "  cpu.busy               {}", stats.busy_time)?;
        writeln!(f, "  cpu.idle               {}", stats.idle_time)?;
        writeln!(f, "  cpu.utilization        {:.2}%", stats.cpu_utilization)
    }
}

impl Display for ScheduleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE_HEAVY}")?;
        writeln!(f, "ROUND ROBIN SCHEDULE")?;
        writeln!(f, "{RULE_HEAVY}")?;
        if wanted(self.sections, "processes") {
            self.write_processes(f)?;
            writeln!(f, "{RULE_LIGHT}")?;
        }
        if wanted(self.sections, "gantt") {
            writeln!(f, "GANTT CHART")?;
            self.write_gantt(f)?;
            writeln!(f, "{RULE_LIGHT}")?;
        }
        if wanted(self.sections, "summary") {
            self.write_summary(f)?;
        }
        writeln!(f, "{RULE_HEAVY}")
    }
}

/// Text report for an LRU run.
#[derive(Debug, Clone, Copy)]
pub struct CacheReport<'a, P> {
    result: &'a CacheResult<P>,
    sections: &'a [String],
}

impl<'a, P: Display> CacheReport<'a, P> {
    /// Creates a report showing every section.
    pub const fn new(result: &'a CacheResult<P>) -> Self {
        Self {
            result,
            sections: &[],
        }
    }

    /// Restricts output to the named sections; an empty slice shows all of them.
    #[must_use]
    pub fn sections(mut self, sections: &'a [String]) -> Self {
        self.sections = sections;
        self
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = CacheStats::from_result(self.result);
        writeln!(f, "{:<8} {:<8} {:<9}", "Hits", "Faults", "Hit Ratio")?;
        writeln!(
            f,
            "{:<8} {:<8} {:<9.2}",
            self.result.hits, self.result.faults, self.result.hit_ratio
        )?;
        writeln!(f, "  evictions              {}", stats.evictions)?;
        writeln!(f, "  miss_rate              {:.2}%", stats.miss_rate)
    }

    fn write_steps(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>4}  {:>6}  {:<6}  {:<24}  {}",
            "Step", "Page", "Status", "Cache (LRU -> MRU)", "Evicted"
        )?;
        for step in &self.result.history {
            let state = step
                .cache_state
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let evicted = step
                .evicted
                .as_ref()
                .map_or_else(|| "-".to_owned(), ToString::to_string);
            writeln!(
                f,
                "{:>4}  {:>6}  {:<6}  {:<24}  {}",
                step.step,
                step.page.to_string(),
                step.status.to_string(),
                format!("[{state}]"),
                evicted
            )?;
        }
        Ok(())
    }
}

impl<P: Display> Display for CacheReport<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE_HEAVY}")?;
        writeln!(f, "LRU CACHE SIMULATION")?;
        writeln!(f, "{RULE_HEAVY}")?;
        if wanted(self.sections, "summary") {
            self.write_summary(f)?;
            writeln!(f, "{RULE_LIGHT}")?;
        }
        if wanted(self.sections, "steps") {
            self.write_steps(f)?;
        }
        writeln!(f, "{RULE_HEAVY}")
    }
}

/// Renders every section of a schedule report.
pub fn render_schedule(result: &ScheduleResult) -> String {
    ScheduleReport::new(result).to_string()
}

/// Renders every section of a cache report.
pub fn render_cache<P: Display>(result: &CacheResult<P>) -> String {
    CacheReport::new(result).to_string()
}
