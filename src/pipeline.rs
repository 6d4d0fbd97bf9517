//! Simulated data-pipeline progression for the dashboard demo tab.
//!
//! Nothing here reflects real processing. The stages advance on fixed
//! timers purely for illustration and the UI labels it as a simulation.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStage {
    pub label: &'static str,
    pub description: &'static str,
    pub duration: Duration,
}

pub const STAGES: [PipelineStage; 5] = [
    PipelineStage {
        label: "Salesforce Data Fetch",
        description: "Retrieving customer interaction data from Salesforce CRM",
        duration: Duration::from_millis(2000),
    },
    PipelineStage {
        label: "Data Processing",
        description: "Cleaning, transforming, and preparing data for analysis",
        duration: Duration::from_millis(3000),
    },
    PipelineStage {
        label: "AI Analysis",
        description: "Analyzing transcripts using GPT models for quality assessment",
        duration: Duration::from_millis(4000),
    },
    PipelineStage {
        label: "KPI Calculation",
        description: "Computing performance metrics and generating insights",
        duration: Duration::from_millis(2000),
    },
    PipelineStage {
        label: "Report Generation",
        description: "Creating comprehensive quality reports and dashboards",
        duration: Duration::from_millis(3000),
    },
];

/// Pause after the last stage before starting over.
pub const COMPLETE_HOLD: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Processing,
    Pending,
}

impl StageStatus {
    pub fn label(self) -> &'static str {
        match self {
            StageStatus::Completed => "Completed",
            StageStatus::Processing => "Processing",
            StageStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSimulation {
    /// Index of the stage in progress; `STAGES.len()` once all are done.
    active: usize,
    running: bool,
}

impl Default for PipelineSimulation {
    fn default() -> Self {
        Self {
            active: 0,
            running: true,
        }
    }
}

impl PipelineSimulation {
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.active >= STAGES.len()
    }

    pub fn current_stage(&self) -> Option<&'static PipelineStage> {
        STAGES.get(self.active)
    }

    /// How long the current step lasts before the next `tick`.
    pub fn next_delay(&self) -> Duration {
        self.current_stage()
            .map(|s| s.duration)
            .unwrap_or(COMPLETE_HOLD)
    }

    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        if self.is_complete() {
            self.active = 0;
        } else {
            self.active += 1;
        }
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    pub fn reset(&mut self) {
        self.active = 0;
        self.running = true;
    }

    pub fn status(&self, index: usize) -> StageStatus {
        if index < self.active {
            StageStatus::Completed
        } else if index == self.active {
            StageStatus::Processing
        } else {
            StageStatus::Pending
        }
    }

    /// Width of the progress line, 0..=100.
    pub fn progress_percent(&self) -> f64 {
        self.active.min(STAGES.len()) as f64 / STAGES.len() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_through_all_stages_then_restarts() {
        let mut sim = PipelineSimulation::default();
        let mut delays = Vec::new();
        for _ in 0..STAGES.len() {
            delays.push(sim.next_delay().as_millis());
            sim.tick();
        }
        assert_eq!(delays, vec![2000, 3000, 4000, 2000, 3000]);
        assert!(sim.is_complete());
        assert_eq!(sim.progress_percent(), 100.0);
        assert_eq!(sim.next_delay(), COMPLETE_HOLD);

        sim.tick();
        assert_eq!(sim.active(), 0);
        assert!(!sim.is_complete());
    }

    #[test]
    fn test_paused_simulation_does_not_advance() {
        let mut sim = PipelineSimulation::default();
        sim.toggle();
        sim.tick();
        assert_eq!(sim.active(), 0);
        assert!(!sim.is_running());
    }

    #[test]
    fn test_reset_resumes() {
        let mut sim = PipelineSimulation::default();
        sim.tick();
        sim.tick();
        sim.toggle();
        sim.reset();
        assert_eq!(sim.active(), 0);
        assert!(sim.is_running());
    }

    #[test]
    fn test_stage_statuses() {
        let mut sim = PipelineSimulation::default();
        sim.tick();
        sim.tick();
        assert_eq!(sim.status(0), StageStatus::Completed);
        assert_eq!(sim.status(1), StageStatus::Completed);
        assert_eq!(sim.status(2), StageStatus::Processing);
        assert_eq!(sim.status(4), StageStatus::Pending);
        assert_eq!(sim.current_stage().map(|s| s.label), Some("AI Analysis"));
        assert_eq!(sim.progress_percent(), 40.0);
    }
}
