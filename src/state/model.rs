/// Coarse-grained scene phase of the page.
///
/// The stage only ever moves forward: the gesture completing lifts the scene
/// out of `Idle`, and the expansion settling lands it in `Entered`, where it
/// stays for the rest of the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneStage {
    #[default]
    Idle,
    Expanding,
    Entered,
}

impl SceneStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, SceneStage::Entered)
    }
}
