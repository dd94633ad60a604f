use super::error::{StateError, StateResult};
use super::{SceneStage, StageEvent, StageTransition};

#[derive(Debug, Default)]
pub struct StageMachine {
    stage: SceneStage,
    transition_history: Vec<StageTransition>,
}

impl StageMachine {
    pub fn new() -> Self {
        Self {
            stage: SceneStage::default(),
            transition_history: Vec::new(),
        }
    }

    pub fn stage(&self) -> SceneStage {
        self.stage
    }

    pub fn can_transition(&self, event: StageEvent) -> bool {
        self.next_stage(event).is_some()
    }

    pub fn next_stage(&self, event: StageEvent) -> Option<SceneStage> {
        use StageEvent::*;
        match (self.stage, event) {
            (SceneStage::Idle, HoldCompleted) => Some(SceneStage::Expanding),
            (SceneStage::Expanding, ExpandFinished) => Some(SceneStage::Entered),
            _ => None,
        }
    }

    pub fn transition(&mut self, event: StageEvent) -> StateResult<SceneStage> {
        tracing::debug!(from = ?self.stage, event = ?event, "request stage transition");
        let next = self.next_stage(event).ok_or_else(|| {
            let from = self.stage;
            tracing::warn!(from = ?from, event = ?event, "invalid stage transition requested");
            StateError::InvalidStageTransition { from, event }
        })?;

        let record = StageTransition::new(Some(self.stage), event, next);
        self.stage = next;
        self.transition_history.push(record);

        Ok(self.stage)
    }
}

#[cfg(test)]
impl StageMachine {
    fn history(&self) -> &[StageTransition] {
        &self.transition_history
    }
}

impl std::fmt::Display for StageMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SceneStage::{:?}", self.stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_transition_tracks_valid_and_invalid_events() {
        let mut machine = StageMachine::new();
        assert!(machine.can_transition(StageEvent::HoldCompleted));
        assert!(!machine.can_transition(StageEvent::ExpandFinished));

        let _ = machine
            .transition(StageEvent::HoldCompleted)
            .expect("idle -> expanding should transition");

        assert!(!machine.can_transition(StageEvent::HoldCompleted));
        assert!(machine.can_transition(StageEvent::ExpandFinished));
    }

    #[test]
    fn stage_advances_forward_and_records_history() {
        let mut machine = StageMachine::new();
        let _ = machine
            .transition(StageEvent::HoldCompleted)
            .expect("hold completion should work");
        let _ = machine
            .transition(StageEvent::ExpandFinished)
            .expect("expand finish should work");

        assert_eq!(machine.stage(), SceneStage::Entered);
        assert_eq!(machine.history().len(), 2);
        assert_eq!(
            machine.history()[0],
            StageTransition::new(
                Some(SceneStage::Idle),
                StageEvent::HoldCompleted,
                SceneStage::Expanding
            )
        );
        assert_eq!(
            machine.history()[1],
            StageTransition::new(
                Some(SceneStage::Expanding),
                StageEvent::ExpandFinished,
                SceneStage::Entered
            )
        );
    }

    #[test]
    fn entered_is_terminal_for_every_event() {
        let mut machine = StageMachine::new();
        let _ = machine
            .transition(StageEvent::HoldCompleted)
            .expect("hold completion should work");
        let _ = machine
            .transition(StageEvent::ExpandFinished)
            .expect("expand finish should work");

        assert!(!machine.can_transition(StageEvent::HoldCompleted));
        assert!(!machine.can_transition(StageEvent::ExpandFinished));
    }

    #[test]
    fn duplicate_hold_completion_is_rejected_without_mutating_history() {
        let mut machine = StageMachine::new();
        let _ = machine
            .transition(StageEvent::HoldCompleted)
            .expect("first completion should transition");

        let err = machine
            .transition(StageEvent::HoldCompleted)
            .expect_err("second completion should fail");
        assert!(matches!(
            err,
            StateError::InvalidStageTransition {
                from: SceneStage::Expanding,
                event: StageEvent::HoldCompleted
            }
        ));
        assert_eq!(machine.stage(), SceneStage::Expanding);
        assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn expand_finish_from_idle_is_rejected() {
        let mut machine = StageMachine::new();

        let err = machine
            .transition(StageEvent::ExpandFinished)
            .expect_err("idle -> entered should fail");
        assert!(matches!(
            err,
            StateError::InvalidStageTransition {
                from: SceneStage::Idle,
                event: StageEvent::ExpandFinished
            }
        ));
        assert_eq!(machine.stage(), SceneStage::Idle);
        assert!(machine.history().is_empty());
    }
}
