//! Stage stepper driven by the sim's Start/Next Step and Reset buttons.

use log::debug;
use serde::Serialize;

use super::size::FftSize;
use super::stages::StageTable;

/// Where the stepper is in its walk through the trimmed stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Built or reset, not advanced yet.
    Initial,
    Stepping,
    /// Sitting on the last trimmed stage.
    Done,
}

/// The only mutable state of a butterfly session: which trimmed stage is
/// currently revealed, together with the stage table it indexes into.
#[derive(Debug, Clone)]
pub struct StepperState {
    table: StageTable,
    stage: usize,
    phase: Phase,
}

impl StepperState {
    pub fn new(size: FftSize) -> Self {
        StepperState {
            table: StageTable::new(size),
            stage: 0,
            phase: Phase::Initial,
        }
    }

    /// Rebuild the stage table for `size` and rewind to stage 0.
    pub fn reset(&mut self, size: FftSize) {
        self.table = StageTable::new(size);
        self.stage = 0;
        self.phase = Phase::Initial;
        debug!(
            "butterfly stepper reset: size {size}, {} stages to walk",
            self.table.trimmed_count()
        );
    }

    /// Rewind to stage 0 keeping the current size.
    pub fn restart(&mut self) {
        self.reset(self.table.size());
    }

    /// Reveal the next stage. Returns `false`, changing nothing, once the
    /// last stage is already showing.
    pub fn advance(&mut self) -> bool {
        if self.stage >= self.max_stage() {
            return false;
        }
        self.stage += 1;
        self.phase = if self.stage == self.max_stage() {
            Phase::Done
        } else {
            Phase::Stepping
        };
        debug!("butterfly stepper advanced to stage {} of {}", self.stage, self.max_stage());
        true
    }

    pub fn current_stage(&self) -> usize {
        self.stage
    }

    /// Index of the last trimmed stage.
    pub fn max_stage(&self) -> usize {
        self.table.trimmed_count().saturating_sub(1)
    }

    pub fn is_done(&self) -> bool {
        self.stage == self.max_stage()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_started(&self) -> bool {
        self.phase != Phase::Initial
    }

    pub fn fft_size(&self) -> FftSize {
        self.table.size()
    }

    pub fn table(&self) -> &StageTable {
        &self.table
    }

    /// The trimmed orderings the stepper indexes into.
    pub fn stages(&self) -> &[Vec<usize>] {
        self.table.trimmed()
    }

    pub fn button_label(&self) -> &'static str {
        if self.has_started() { "Next Step" } else { "Start" }
    }

    pub fn title(&self) -> String {
        format!(
            "FFT Butterfly: Stage {} of {}",
            self.stage + 1,
            self.max_stage() + 1
        )
    }
}

impl Default for StepperState {
    fn default() -> Self {
        StepperState::new(FftSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_stage_per_size() {
        let maxes: Vec<usize> = FftSize::ALL
            .iter()
            .map(|&s| StepperState::new(s).max_stage())
            .collect();
        assert_eq!(maxes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn advancing_to_done_then_holding() {
        for size in FftSize::ALL {
            let mut state = StepperState::new(size);
            assert_eq!(state.phase(), Phase::Initial);

            for _ in 0..state.max_stage() {
                assert!(state.advance());
            }
            assert!(state.is_done(), "size {size} should be done");
            assert_eq!(state.current_stage(), state.max_stage());

            assert!(!state.advance(), "advancing past the end must be a no-op");
            assert_eq!(state.current_stage(), state.max_stage());
        }
    }

    #[test]
    fn phases_through_a_walk() {
        let mut state = StepperState::new(FftSize::N16);
        assert!(!state.has_started());
        state.advance();
        assert_eq!(state.phase(), Phase::Stepping);
        assert!(!state.is_done());
        state.advance();
        assert_eq!(state.phase(), Phase::Done);
        state.advance();
        assert_eq!(state.phase(), Phase::Done);
    }

    #[test]
    fn reset_rewinds_and_rebuilds() {
        let mut state = StepperState::new(FftSize::N32);
        state.advance();
        state.advance();

        state.reset(FftSize::N16);
        assert_eq!(state.current_stage(), 0);
        assert_eq!(state.phase(), Phase::Initial);
        assert!(!state.is_done());
        assert_eq!(state.fft_size(), FftSize::N16);
        assert_eq!(state.stages().len(), 3);
        assert!(state.stages().iter().all(|order| order.len() == 16));
    }

    #[test]
    fn restart_keeps_size() {
        let mut state = StepperState::new(FftSize::N8);
        state.advance();
        assert!(state.is_done());
        state.restart();
        assert_eq!(state.fft_size(), FftSize::N8);
        assert_eq!(state.current_stage(), 0);
        assert!(!state.is_done());
    }

    #[test]
    fn four_points_starts_on_its_only_stage() {
        let mut state = StepperState::new(FftSize::N4);
        assert_eq!(state.max_stage(), 0);
        assert!(state.is_done());
        assert!(!state.advance());
        assert_eq!(state.phase(), Phase::Initial);
    }

    #[test]
    fn button_label_and_title() {
        let mut state = StepperState::default();
        assert_eq!(state.button_label(), "Start");
        assert_eq!(state.title(), "FFT Butterfly: Stage 1 of 2");

        state.advance();
        assert_eq!(state.button_label(), "Next Step");
        assert_eq!(state.title(), "FFT Butterfly: Stage 2 of 2");

        state.restart();
        assert_eq!(state.button_label(), "Start");
    }
}
