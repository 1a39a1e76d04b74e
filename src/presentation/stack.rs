use std::rc::Rc;

use crate::{
    clock::frame_clock::{ClockSource, FrameClock},
    foundation::error::{StageError, StageResult},
    presentation::overlay::{NavLink, Overlay},
    presentation::section::{Section, SectionPlan, SectionState},
    scene::capability::{RenderCapabilities, RenderEngine},
    scene::frame::SceneFrame,
};

/// Ordered stack of independently clocked scenes plus a static overlay.
///
/// Every section mounts its own [`FrameClock`] from the shared source at the
/// moment it is mounted. Scenes share nothing else.
pub struct Presentation {
    brand: String,
    source: Rc<dyn ClockSource>,
    caps: RenderCapabilities,
    sections: Vec<Section>,
}

impl Presentation {
    pub fn new(
        brand: impl Into<String>,
        source: Rc<dyn ClockSource>,
        caps: RenderCapabilities,
    ) -> Self {
        Self {
            brand: brand.into(),
            source,
            caps,
            sections: Vec::new(),
        }
    }

    /// Mount one section at the end of the stack.
    ///
    /// Only a bad anchor is an error here. A scene that fails to build is
    /// recorded as [`SectionState::Failed`] so the rest of the page still mounts.
    #[tracing::instrument(skip_all, fields(anchor = %plan.anchor))]
    pub fn mount(&mut self, plan: SectionPlan) -> StageResult<&Section> {
        let anchor = plan.anchor.trim();
        if anchor.is_empty() {
            return Err(StageError::validation("section anchor must be non-empty"));
        }
        if self.section(anchor).is_some() {
            return Err(StageError::validation(format!(
                "duplicate section anchor '{anchor}'"
            )));
        }

        let (anchor, label, built) = match FrameClock::mount(Rc::clone(&self.source)) {
            Ok(clock) => plan.build(clock, &self.caps),
            Err(err) => (plan.anchor, plan.label, Err(err)),
        };
        let anchor = anchor.trim().to_owned();
        let state = match built {
            Ok(scene) => {
                tracing::debug!(nodes = scene.graph().len(), "section mounted");
                SectionState::Mounted(scene)
            }
            Err(err) => {
                tracing::warn!(error = %err, "section failed to mount");
                SectionState::Failed(err)
            }
        };
        self.sections.push(Section {
            anchor,
            label,
            state,
        });
        let last = self.sections.len() - 1;
        Ok(&self.sections[last])
    }

    /// Mount every plan in order.
    pub fn mount_all(mut self, plans: impl IntoIterator<Item = SectionPlan>) -> StageResult<Self> {
        for plan in plans {
            self.mount(plan)?;
        }
        Ok(self)
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn capabilities(&self) -> RenderCapabilities {
        self.caps
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, anchor: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.anchor == anchor)
    }

    pub fn section_mut(&mut self, anchor: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.anchor == anchor)
    }

    /// `(anchor, label)` pairs in section order, failed sections included.
    pub fn nav_anchors(&self) -> Vec<(&str, &str)> {
        self.sections
            .iter()
            .map(|s| (s.anchor.as_str(), s.label.as_str()))
            .collect()
    }

    pub fn overlay(&self) -> Overlay {
        Overlay {
            brand: self.brand.clone(),
            links: self
                .sections
                .iter()
                .map(|s| NavLink {
                    anchor: s.anchor.clone(),
                    label: s.label.clone(),
                })
                .collect(),
        }
    }

    pub fn mounted_count(&self) -> usize {
        self.sections.iter().filter(|s| s.is_mounted()).count()
    }

    /// Advance every mounted scene on its own clock.
    pub fn tick_all(&mut self) -> Vec<SceneFrame<'_>> {
        self.sections
            .iter_mut()
            .filter_map(Section::scene_mut)
            .map(|scene| scene.advance())
            .collect()
    }

    /// Advance and present every mounted scene, stopping at the first engine error.
    pub fn present_all(&mut self, engine: &mut dyn RenderEngine) -> StageResult<()> {
        for scene in self.sections.iter_mut().filter_map(Section::scene_mut) {
            scene.present(engine)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Presentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presentation")
            .field("brand", &self.brand)
            .field("caps", &self.caps)
            .field("sections", &self.sections)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/presentation/stack.rs"]
mod tests;
