pub mod panel;
pub mod style;

pub use panel::{PanelExpansion, ScenePanelContent, panels_from_json};
pub use style::{MotionTemplate, PanelStyle, Stagger};
