use crate::{
    clock::frame_clock::FrameClock,
    foundation::error::{StageError, StageResult},
    scene::capability::RenderCapabilities,
    scene::composer::SceneComposition,
};

type BuildFn = Box<dyn FnOnce(FrameClock, &RenderCapabilities) -> StageResult<SceneComposition>>;

/// A section waiting to be mounted: where it goes and how to build it.
pub struct SectionPlan {
    pub anchor: String,
    pub label: String,
    build: BuildFn,
}

impl SectionPlan {
    pub fn new<F>(anchor: impl Into<String>, label: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(FrameClock, &RenderCapabilities) -> StageResult<SceneComposition> + 'static,
    {
        Self {
            anchor: anchor.into(),
            label: label.into(),
            build: Box::new(build),
        }
    }

    pub(crate) fn build(
        self,
        clock: FrameClock,
        caps: &RenderCapabilities,
    ) -> (String, String, StageResult<SceneComposition>) {
        let scene = (self.build)(clock, caps);
        (self.anchor, self.label, scene)
    }
}

impl std::fmt::Debug for SectionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionPlan")
            .field("anchor", &self.anchor)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub enum SectionState {
    Mounted(SceneComposition),
    /// Construction failed; the section keeps its anchor but draws nothing.
    Failed(StageError),
}

/// One named slot of a presentation.
#[derive(Debug)]
pub struct Section {
    pub anchor: String,
    pub label: String,
    pub state: SectionState,
}

impl Section {
    pub fn is_mounted(&self) -> bool {
        matches!(self.state, SectionState::Mounted(_))
    }

    pub fn scene(&self) -> Option<&SceneComposition> {
        match &self.state {
            SectionState::Mounted(s) => Some(s),
            SectionState::Failed(_) => None,
        }
    }

    pub fn scene_mut(&mut self) -> Option<&mut SceneComposition> {
        match &mut self.state {
            SectionState::Mounted(s) => Some(s),
            SectionState::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&StageError> {
        match &self.state {
            SectionState::Mounted(_) => None,
            SectionState::Failed(e) => Some(e),
        }
    }
}
