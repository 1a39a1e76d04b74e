use crate::{
    animation::motion::Motion,
    content::style::{BodyShape, LabelSource, PanelStyle},
    foundation::color::Color,
    foundation::core::{Size3, Vec3, validate_finite_vec3},
    foundation::error::{StageError, StageResult},
    graph::node::NodeSpec,
    graph::primitive::{LabelSpec, Material, Primitive},
    scene::lighting::LightDesc,
};

/// One hand-authored card, stat or era record.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScenePanelContent {
    pub id: String,
    pub title: String,
    /// Year, value label or other secondary line.
    #[serde(default)]
    pub subtitle: String,
    /// Optional third line (e.g. the city of an era).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    pub size: Size3,
    pub accent_color: Color,
    /// Headline record of its table. Carried as data; expansion ignores it.
    #[serde(default)]
    pub featured: bool,
}

impl ScenePanelContent {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        position: Vec3,
        size: Size3,
        accent_color: Color,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: String::new(),
            caption: None,
            position,
            rotation: Vec3::ZERO,
            size,
            accent_color,
            featured: false,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn validate(&self) -> StageResult<()> {
        if self.id.trim().is_empty() {
            return Err(StageError::validation("panel id must be non-empty"));
        }
        if self.id.contains('/') {
            return Err(StageError::validation(format!(
                "panel id '{}' must not contain '/'",
                self.id
            )));
        }
        if self.title.trim().is_empty() {
            return Err(StageError::validation(format!(
                "panel '{}' title must be non-empty",
                self.id
            )));
        }
        self.size.validate(&format!("panel '{}' size", self.id))?;
        validate_finite_vec3(self.position, &format!("panel '{}' position", self.id))?;
        validate_finite_vec3(self.rotation, &format!("panel '{}' rotation", self.id))?;
        Ok(())
    }

    fn text(&self, source: LabelSource) -> Option<&str> {
        let s = match source {
            LabelSource::Title => self.title.as_str(),
            LabelSource::Subtitle => self.subtitle.as_str(),
            LabelSource::Caption => self.caption.as_deref()?,
        };
        if s.trim().is_empty() { None } else { Some(s) }
    }
}

/// A record expanded into a container node and its decorations.
///
/// Every child is parented to `container` and positioned in its local frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelExpansion {
    pub container: NodeSpec,
    pub children: Vec<NodeSpec>,
}

impl PanelExpansion {
    pub fn child(&self, suffix: &str) -> Option<&NodeSpec> {
        let id = format!("{}/{suffix}", self.container.id);
        self.children.iter().find(|c| c.id == id)
    }
}

impl PanelStyle {
    /// Expand `record` (the `index`-th row of its table) into render nodes.
    pub fn expand(&self, record: &ScenePanelContent, index: usize) -> StageResult<PanelExpansion> {
        record.validate()?;
        let id = record.id.as_str();
        let Size3 {
            width: w,
            height: h,
            depth: d,
        } = record.size;
        let accent = record.accent_color;

        let motion: Motion<_> = self
            .motion
            .iter()
            .map(|t| t.instantiate(index, id))
            .collect();
        let float: Motion<_> = self
            .float
            .iter()
            .map(|t| t.instantiate(index, id))
            .collect();
        let container = NodeSpec::group(id)
            .at(record.position)
            .rotated(record.rotation)
            .with_motion(motion)
            .with_pivot(float);

        let mut children = Vec::new();
        let body = match self.body {
            BodyShape::Box => Primitive::cuboid(w, h, d),
            BodyShape::RoundedBox { radius } => Primitive::RoundedBox {
                size: record.size,
                radius,
            },
            BodyShape::Plane => Primitive::plane(w, h),
        };
        children.push(NodeSpec::new(format!("{id}/body"), body).material(self.body_material));

        if let Some(b) = &self.backing {
            children.push(
                NodeSpec::new(format!("{id}/backing"), Primitive::plane(w, h))
                    .at(Vec3::new(0.0, 0.0, b.offset_z))
                    .material(b.material),
            );
        }

        if let Some(b) = &self.border {
            let size = Size3::new(
                w * b.scale + b.margin,
                h * b.scale + b.margin,
                d * b.depth_ratio,
            );
            let primitive = match b.corner_radius {
                Some(radius) => Primitive::RoundedBox { size, radius },
                None => Primitive::Box { size },
            };
            children.push(
                NodeSpec::new(format!("{id}/border"), primitive)
                    .at(Vec3::new(0.0, 0.0, b.offset_z))
                    .material(
                        Material::basic(b.tint.resolve(accent))
                            .opacity(b.opacity)
                            .wireframe(),
                    ),
            );
        }

        if let Some(g) = &self.glow {
            children.push(
                NodeSpec::new(
                    format!("{id}/glow"),
                    Primitive::plane((w - g.inset).max(0.0), (h - g.inset).max(0.0)),
                )
                .at(Vec3::new(0.0, 0.0, g.offset_z))
                .material(Material::basic(accent).opacity(g.opacity).additive()),
            );
        }

        if let Some(s) = &self.stripe {
            let motion: Motion<_> = s.motion.iter().map(|t| t.instantiate(index, id)).collect();
            children.push(
                NodeSpec::new(
                    format!("{id}/stripe"),
                    Primitive::plane(s.width, w * s.length_ratio),
                )
                .at(Vec3::new(-w / 2.0 + s.inset.0, -h / 2.0 + s.inset.1, s.offset_z))
                .rotated(Vec3::new(0.0, 0.0, s.angle))
                .material(Material::basic(accent).opacity(s.opacity))
                .with_motion(motion),
            );
        }

        let layout = &self.labels;
        let origin = Vec3::new(
            layout.fx * w / 2.0 + layout.dx,
            layout.fy * h / 2.0 + layout.dy,
            layout.z,
        );
        for (n, line) in layout.lines.iter().enumerate() {
            let Some(text) = record.text(line.source) else {
                continue;
            };
            let text = if line.uppercase {
                text.to_uppercase()
            } else {
                text.to_owned()
            };
            let mut label = LabelSpec::new(text, line.font_size, line.tint.resolve(accent))
                .anchored(layout.anchor_x, layout.anchor_y)
                .spacing(line.letter_spacing);
            if let Some(inset) = line.max_width_inset {
                label = label.max_width((w - inset).max(0.0));
            }
            children.push(
                NodeSpec::new(format!("{id}/label/{n}"), Primitive::Label(label))
                    .at(origin + Vec3::new(0.0, line.dy, 0.0)),
            );
        }

        if let Some(l) = &self.accent_light {
            let light = LightDesc::point(Vec3::ZERO, l.intensity, accent).distance(l.distance);
            children.push(
                NodeSpec::new(format!("{id}/light"), Primitive::Light(light))
                    .at(Vec3::new(0.0, h / 2.0, l.offset_z)),
            );
        }

        Ok(PanelExpansion {
            container,
            children,
        })
    }
}

/// Parse a JSON array of panel records and validate each one.
pub fn panels_from_json(json: &str) -> StageResult<Vec<ScenePanelContent>> {
    let panels: Vec<ScenePanelContent> = serde_json::from_str(json)?;
    for p in &panels {
        p.validate()?;
    }
    Ok(panels)
}

#[cfg(test)]
#[path = "../../tests/unit/content/panel.rs"]
mod tests;
