use super::model::SceneStage;

/// Triggers that may advance the scene stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageEvent {
    /// The hold gesture reached full progress.
    HoldCompleted,
    /// The portal expansion delay elapsed.
    ExpandFinished,
}

/// Record of one accepted stage transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTransition {
    pub from: Option<SceneStage>,
    pub event: StageEvent,
    pub to: SceneStage,
}

impl StageTransition {
    pub fn new(from: Option<SceneStage>, event: StageEvent, to: SceneStage) -> Self {
        Self { from, event, to }
    }
}
