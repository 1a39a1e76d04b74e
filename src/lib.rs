//! Stagecraft is a deterministic procedural-animation and scene-composition core.
//!
//! Scenes are described once, from static content tables, and then sampled as pure
//! functions of elapsed time. Rasterization, text shaping and page chrome belong to an
//! external render engine; this crate hands it a finished [`SceneFrame`] each tick.
//!
//! - Describe motion with [`Oscillator`]s bound to node or camera channels
//! - Expand [`ScenePanelContent`] records through a [`PanelStyle`]
//! - Build a [`SceneComposition`] with [`SceneComposer`] against [`RenderCapabilities`]
//! - Stack independently clocked scenes in a [`Presentation`]
#![forbid(unsafe_code)]

/// Per-frame motion primitives.
pub mod animation;
/// Camera rigs.
pub mod camera;
/// Frame clocks and time sources.
pub mod clock;
/// Data-driven panel records and their expansion.
pub mod content;
mod foundation;
/// Arena scene graph.
pub mod graph;
/// Multi-section page assembly.
pub mod presentation;
/// Scene composition and the render-engine boundary.
pub mod scene;
/// The bundled four-section showcase page.
pub mod showcase;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{EulerRot, Mat4, Quat, Size3, Transform3D, Vec3};
pub use crate::foundation::error::{StageError, StageResult};
pub use crate::foundation::math::{phase_from_id, wrap_unit};

pub use crate::animation::channel::{Channel, NodeChannel, RigChannel};
pub use crate::animation::generator::{PhaseFn, RingGenerator, linear_phase};
pub use crate::animation::motion::{Motion, MotionBinding};
pub use crate::animation::oscillator::{OscKind, Oscillator, Timing, evaluate};
pub use crate::camera::rig::{CameraPose, CameraRig, CameraView, RigStrategy};
pub use crate::clock::frame_clock::{ClockSource, FrameClock, ManualClock, SystemClock};
pub use crate::content::panel::{PanelExpansion, ScenePanelContent, panels_from_json};
pub use crate::content::style::{MotionTemplate, PanelStyle, Stagger};
pub use crate::graph::node::{AnimatedNode, NodeSpec, NodeState};
pub use crate::graph::primitive::{AnchorX, AnchorY, BlendMode, LabelSpec, Material, Primitive};
pub use crate::graph::scene_graph::{NodeId, SceneGraph};
pub use crate::presentation::overlay::{NavLink, Overlay};
pub use crate::presentation::section::{Section, SectionPlan, SectionState};
pub use crate::presentation::stack::Presentation;
pub use crate::scene::atmosphere::{AtmosphericConfig, Background, DepthFog, ParticleField};
pub use crate::scene::capability::{FeatureRequest, RenderCapabilities, RenderEngine};
pub use crate::scene::composer::{SceneComposer, SceneComposition};
pub use crate::scene::frame::{EvaluatedNode, LabelInstance, SceneFrame};
pub use crate::scene::lighting::{LightDesc, LightKind};
