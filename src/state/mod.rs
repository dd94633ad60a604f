pub mod error;
pub mod event;
pub mod machine;
pub mod model;

pub use error::{StateError, StateResult};
pub use event::{StageEvent, StageTransition};
pub use machine::StageMachine;
pub use model::SceneStage;
