use super::event::StageEvent;
use super::model::SceneStage;
use thiserror::Error;

pub type StateResult<T> = std::result::Result<T, StateError>;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("invalid stage transition: from {from:?} using event {event:?}")]
    InvalidStageTransition { from: SceneStage, event: StageEvent },
}
