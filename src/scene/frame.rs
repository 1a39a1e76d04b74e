use crate::{
    camera::rig::CameraView,
    foundation::color::Color,
    foundation::core::{Mat4, Vec3},
    graph::primitive::{AnchorX, AnchorY, Material, Primitive},
    graph::scene_graph::SceneGraph,
    scene::atmosphere::AtmosphericConfig,
    scene::lighting::LightDesc,
};

/// One scene-graph node with its resolved world state.
#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedNode<'a> {
    pub id: &'a str,
    /// Index into [`SceneFrame::nodes`]; parents always come first.
    pub parent: Option<usize>,
    pub world: Mat4,
    pub opacity: f64,
    pub primitive: &'a Primitive,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<&'a Material>,
}

/// Text the external label renderer should shape and draw.
#[derive(Clone, Debug, serde::Serialize)]
pub struct LabelInstance<'a> {
    pub node: &'a str,
    pub text: &'a str,
    /// World-space anchor point.
    pub anchor: Vec3,
    /// Orientation of the text plane.
    pub world: Mat4,
    /// Font size after the node's world scale.
    pub font_size: f64,
    pub color: Color,
    pub opacity: f64,
    pub anchor_x: AnchorX,
    pub anchor_y: AnchorY,
    pub letter_spacing: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
}

/// Everything the render engine needs for one frame of one scene.
///
/// Borrowed from the composition; build, present, drop.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneFrame<'a> {
    pub scene: &'a str,
    pub elapsed: f64,
    pub camera: CameraView,
    /// Insertion (parent-before-child) order.
    pub nodes: Vec<EvaluatedNode<'a>>,
    /// Scene lights followed by node-attached lights at their world positions.
    pub lights: Vec<LightDesc>,
    pub labels: Vec<LabelInstance<'a>>,
    pub atmosphere: &'a AtmosphericConfig,
}

impl<'a> SceneFrame<'a> {
    pub(crate) fn capture(
        scene: &'a str,
        elapsed: f64,
        camera: CameraView,
        graph: &'a SceneGraph,
        scene_lights: &[LightDesc],
        atmosphere: &'a AtmosphericConfig,
    ) -> Self {
        let mut nodes = Vec::with_capacity(graph.len());
        let mut lights = scene_lights.to_vec();
        let mut labels = Vec::new();

        for v in graph.iter() {
            let id = v.node.id();
            match v.primitive {
                Primitive::Light(light) => {
                    let local = light.position.unwrap_or(Vec3::ZERO);
                    lights.push(LightDesc {
                        position: Some(v.world.transform_point3(local)),
                        ..*light
                    });
                }
                Primitive::Label(label) => {
                    let scale = v.world.y_axis.truncate().length();
                    labels.push(LabelInstance {
                        node: id,
                        text: &label.text,
                        anchor: v.world.transform_point3(Vec3::ZERO),
                        world: v.world,
                        font_size: label.font_size * scale,
                        color: label.color,
                        opacity: (label.opacity * v.world_opacity).clamp(0.0, 1.0),
                        anchor_x: label.anchor_x,
                        anchor_y: label.anchor_y,
                        letter_spacing: label.letter_spacing,
                        max_width: label.max_width.map(|w| w * scale),
                    });
                }
                _ => {}
            }
            nodes.push(EvaluatedNode {
                id,
                parent: v.parent.map(|p| p.0),
                world: v.world,
                opacity: v.world_opacity,
                primitive: v.primitive,
                material: v.material,
            });
        }

        Self {
            scene,
            elapsed,
            camera,
            nodes,
            lights,
            labels,
            atmosphere,
        }
    }

    pub fn node(&self, id: &str) -> Option<&EvaluatedNode<'a>> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn world_position(&self, id: &str) -> Option<Vec3> {
        self.node(id).map(|n| n.world.transform_point3(Vec3::ZERO))
    }

    pub fn label(&self, node: &str) -> Option<&LabelInstance<'a>> {
        self.labels.iter().find(|l| l.node == node)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/frame.rs"]
mod tests;
