use crate::{
    foundation::error::{StageError, StageResult},
    scene::frame::SceneFrame,
};

/// Features an external render engine claims to support.
///
/// Scenes are checked against this once, at construction; nothing is
/// negotiated per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderCapabilities {
    pub additive_blending: bool,
    pub wireframe: bool,
    pub fog: bool,
    pub particles: bool,
    /// Point and spot lights, counting node-attached accent lights.
    pub max_point_lights: u32,
}

impl RenderCapabilities {
    /// Everything a desktop WebGL2-class engine typically offers.
    pub fn full() -> Self {
        Self {
            additive_blending: true,
            wireframe: true,
            fog: true,
            particles: true,
            max_point_lights: 16,
        }
    }

    /// Flat-shaded fallback: no blending tricks, no atmosphere.
    pub fn minimal() -> Self {
        Self {
            additive_blending: false,
            wireframe: false,
            fog: false,
            particles: false,
            max_point_lights: 2,
        }
    }
}

impl Default for RenderCapabilities {
    fn default() -> Self {
        Self::full()
    }
}

/// What a scene asks of the engine; collected while composing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeatureRequest {
    pub additive_blending: bool,
    pub wireframe: bool,
    pub fog: bool,
    pub particles: bool,
    pub point_lights: u32,
}

impl FeatureRequest {
    /// Fail with the first feature the engine cannot honor.
    pub fn check(&self, scene: &str, caps: &RenderCapabilities) -> StageResult<()> {
        let missing = [
            ("additive blending", self.additive_blending, caps.additive_blending),
            ("wireframe materials", self.wireframe, caps.wireframe),
            ("depth fog", self.fog, caps.fog),
            ("particle fields", self.particles, caps.particles),
        ]
        .into_iter()
        .find(|&(_, wanted, have)| wanted && !have);
        if let Some((feature, _, _)) = missing {
            return Err(StageError::capability(format!(
                "scene '{scene}' requires {feature}, which the render engine does not support"
            )));
        }
        if self.point_lights > caps.max_point_lights {
            return Err(StageError::capability(format!(
                "scene '{scene}' uses {} point/spot lights, engine supports at most {}",
                self.point_lights, caps.max_point_lights
            )));
        }
        Ok(())
    }
}

/// External rasterizer boundary.
///
/// The engine receives a finished snapshot each frame and never hands data
/// back to the animation core.
pub trait RenderEngine {
    fn capabilities(&self) -> RenderCapabilities;

    fn present(&mut self, frame: &SceneFrame<'_>) -> StageResult<()>;
}

#[cfg(test)]
#[path = "../../tests/unit/scene/capability.rs"]
mod tests;
