use crate::{
    animation::generator::RingGenerator,
    camera::rig::{CameraRig, CameraView},
    clock::frame_clock::FrameClock,
    content::panel::ScenePanelContent,
    content::style::PanelStyle,
    foundation::error::{StageError, StageResult},
    graph::node::NodeSpec,
    graph::primitive::{BlendMode, Primitive},
    graph::scene_graph::{NodeId, SceneGraph},
    scene::atmosphere::AtmosphericConfig,
    scene::capability::{FeatureRequest, RenderCapabilities, RenderEngine},
    scene::frame::SceneFrame,
    scene::lighting::{LightDesc, LightKind},
};

#[derive(Clone, Debug)]
enum Pending {
    Node {
        spec: NodeSpec,
        parent: Option<String>,
    },
    Panels {
        records: Vec<ScenePanelContent>,
        style: PanelStyle,
        parent: Option<String>,
    },
}

/// Collects nodes, lights, atmosphere and a camera rig, then validates them
/// all at once in [`SceneComposer::build`].
///
/// Parents are referenced by id and must be added before their children.
#[derive(Clone, Debug)]
pub struct SceneComposer {
    name: String,
    rig: Option<CameraRig>,
    atmosphere: AtmosphericConfig,
    lights: Vec<LightDesc>,
    pending: Vec<Pending>,
}

impl SceneComposer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rig: None,
            atmosphere: AtmosphericConfig::default(),
            lights: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn camera(mut self, rig: CameraRig) -> Self {
        self.rig = Some(rig);
        self
    }

    pub fn atmosphere(mut self, atmosphere: AtmosphericConfig) -> Self {
        self.atmosphere = atmosphere;
        self
    }

    pub fn light(mut self, light: LightDesc) -> Self {
        self.lights.push(light);
        self
    }

    /// Add a top-level node.
    pub fn node(mut self, spec: NodeSpec) -> Self {
        self.pending.push(Pending::Node { spec, parent: None });
        self
    }

    pub fn child(mut self, parent: impl Into<String>, spec: NodeSpec) -> Self {
        self.pending.push(Pending::Node {
            spec,
            parent: Some(parent.into()),
        });
        self
    }

    /// One top-level container per record, in table order.
    pub fn panels(mut self, records: &[ScenePanelContent], style: &PanelStyle) -> Self {
        self.pending.push(Pending::Panels {
            records: records.to_vec(),
            style: style.clone(),
            parent: None,
        });
        self
    }

    pub fn panels_under(
        mut self,
        parent: impl Into<String>,
        records: &[ScenePanelContent],
        style: &PanelStyle,
    ) -> Self {
        self.pending.push(Pending::Panels {
            records: records.to_vec(),
            style: style.clone(),
            parent: Some(parent.into()),
        });
        self
    }

    pub fn generator(mut self, generator: &RingGenerator, parent: Option<&str>) -> Self {
        for spec in generator {
            self.pending.push(Pending::Node {
                spec,
                parent: parent.map(str::to_owned),
            });
        }
        self
    }

    /// Validate everything and produce a composition; no partial result on error.
    #[tracing::instrument(skip_all, fields(scene = %self.name))]
    pub fn build(
        self,
        clock: FrameClock,
        caps: &RenderCapabilities,
    ) -> StageResult<SceneComposition> {
        let Self {
            name,
            rig,
            atmosphere,
            lights,
            pending,
        } = self;
        let rig = rig.ok_or_else(|| {
            StageError::validation(format!("scene '{name}' has no camera rig"))
        })?;
        atmosphere.validate()?;
        for (i, light) in lights.iter().enumerate() {
            light.validate(&format!("{name}#{i}"))?;
        }

        let mut graph = SceneGraph::new();
        for entry in pending {
            match entry {
                Pending::Node { spec, parent } => {
                    let parent = resolve_parent(&graph, &name, parent.as_deref())?;
                    graph.insert(spec, parent)?;
                }
                Pending::Panels {
                    records,
                    style,
                    parent,
                } => {
                    let parent = resolve_parent(&graph, &name, parent.as_deref())?;
                    for (index, record) in records.iter().enumerate() {
                        let expansion = style.expand(record, index)?;
                        let container = graph.insert(expansion.container, parent)?;
                        for child in expansion.children {
                            graph.insert(child, Some(container))?;
                        }
                    }
                }
            }
        }

        let request = feature_request(&graph, &lights, &atmosphere);
        request.check(&name, caps)?;

        tracing::debug!(
            nodes = graph.len(),
            lights = lights.len(),
            point_lights = request.point_lights,
            particles = atmosphere.particles.map_or(0, |p| p.count),
            "scene composed"
        );

        let camera = rig.view();
        Ok(SceneComposition {
            name,
            graph,
            rig,
            camera,
            lights,
            atmosphere,
            clock,
        })
    }
}

fn resolve_parent(
    graph: &SceneGraph,
    scene: &str,
    parent: Option<&str>,
) -> StageResult<Option<NodeId>> {
    match parent {
        None => Ok(None),
        Some(id) => graph.find(id).map(Some).ok_or_else(|| {
            StageError::validation(format!(
                "scene '{scene}' references parent '{id}' before it was added"
            ))
        }),
    }
}

fn feature_request(
    graph: &SceneGraph,
    lights: &[LightDesc],
    atmosphere: &AtmosphericConfig,
) -> FeatureRequest {
    let is_point = |l: &LightDesc| matches!(l.kind, LightKind::Point | LightKind::Spot);
    let mut req = FeatureRequest {
        fog: atmosphere.fog.is_some(),
        particles: atmosphere.particles.is_some_and(|p| p.count > 0),
        point_lights: lights.iter().filter(|l| is_point(l)).count() as u32,
        ..FeatureRequest::default()
    };
    for v in graph.iter() {
        if let Some(m) = v.material {
            req.additive_blending |= m.blend == BlendMode::Additive;
            req.wireframe |= m.wireframe;
        }
        if let Primitive::Light(l) = v.primitive {
            if is_point(l) {
                req.point_lights += 1;
            }
        }
    }
    req
}

/// A built scene: owns its graph, rig, lights and clock.
///
/// The structure is fixed after [`SceneComposer::build`]; only
/// [`SceneComposition::tick`] mutates it, and only the cached transforms.
#[derive(Debug)]
pub struct SceneComposition {
    name: String,
    graph: SceneGraph,
    rig: CameraRig,
    camera: CameraView,
    lights: Vec<LightDesc>,
    atmosphere: AtmosphericConfig,
    clock: FrameClock,
}

impl SceneComposition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn camera(&self) -> CameraView {
        self.camera
    }

    pub fn lights(&self) -> &[LightDesc] {
        &self.lights
    }

    pub fn atmosphere(&self) -> &AtmosphericConfig {
        &self.atmosphere
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Elapsed seconds as of the last [`SceneComposition::advance`].
    pub fn elapsed(&self) -> f64 {
        self.clock.last_elapsed()
    }

    /// Ids of top-level nodes in insertion order.
    pub fn top_level_ids(&self) -> Vec<&str> {
        self.graph
            .roots()
            .iter()
            .filter_map(|&id| self.graph.view(id))
            .map(|v| v.node.id())
            .collect()
    }

    /// Update every node, then the rig, at an explicit time.
    pub fn tick(&mut self, elapsed: f64) -> SceneFrame<'_> {
        self.graph.update(elapsed);
        self.camera = self.rig.update(elapsed);
        SceneFrame::capture(
            &self.name,
            elapsed,
            self.camera,
            &self.graph,
            &self.lights,
            &self.atmosphere,
        )
    }

    /// Read this scene's own clock and tick to it.
    pub fn advance(&mut self) -> SceneFrame<'_> {
        let elapsed = self.clock.elapsed();
        self.tick(elapsed)
    }

    /// Advance and hand the frame to `engine`.
    pub fn present(&mut self, engine: &mut dyn RenderEngine) -> StageResult<()> {
        let frame = self.advance();
        engine.present(&frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composer.rs"]
mod tests;
