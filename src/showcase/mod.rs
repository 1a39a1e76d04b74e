//! The four-section legacy page: hero, gallery, timeline and core.

pub mod gallery;
pub mod hero;
pub mod performance;
pub mod timeline;

use std::rc::Rc;

use crate::{
    clock::frame_clock::ClockSource,
    foundation::error::StageResult,
    presentation::section::SectionPlan,
    presentation::stack::Presentation,
    scene::capability::RenderCapabilities,
};

pub use gallery::{gallery_panels, gallery_scene};
pub use hero::{hero_scene, hero_stats};
pub use performance::{card_ring, performance_scene};
pub use timeline::{timeline_eras, timeline_scene};

pub const BRAND: &str = "CR7 LEGACY";

/// Section plans in page order.
pub fn section_plans() -> Vec<SectionPlan> {
    vec![
        SectionPlan::new("hero", "Hero", hero_scene),
        SectionPlan::new("gallery", "Gallery", gallery_scene),
        SectionPlan::new("timeline", "Timeline", timeline_scene),
        SectionPlan::new("core", "Core", performance_scene),
    ]
}

/// Mount the whole page; sections the engine cannot draw are recorded as failed.
#[tracing::instrument(skip_all)]
pub fn presentation(
    source: Rc<dyn ClockSource>,
    caps: RenderCapabilities,
) -> StageResult<Presentation> {
    Presentation::new(BRAND, source, caps).mount_all(section_plans())
}

#[cfg(test)]
#[path = "../../tests/unit/showcase/scenes.rs"]
mod tests;
