use crate::{
    camera::rig::{CameraPose, CameraRig},
    clock::frame_clock::FrameClock,
    content::panel::ScenePanelContent,
    content::style::PanelStyle,
    foundation::color::{Color, hex},
    foundation::core::{Size3, Vec3},
    foundation::error::StageResult,
    scene::atmosphere::{AtmosphericConfig, Background, ParticleField},
    scene::capability::RenderCapabilities,
    scene::composer::{SceneComposer, SceneComposition},
    scene::lighting::LightDesc,
};

/// Five career eras, left to right; the middle one is the headline.
pub fn gallery_panels() -> Vec<ScenePanelContent> {
    let thin = |w: f64, h: f64| Size3::new(w, h, 0.05);
    [
        ("1", "THE BEGINNING", "2002", [-5.0, 1.0, -5.0], 0.4, thin(3.0, 4.0), "#ef4444"),
        ("2", "ASCENSION", "2008", [-2.5, -0.8, -2.0], 0.2, thin(4.0, 5.5), "#ffffff"),
        ("3", "DOMINANCE", "2014", [0.0, 0.0, 1.0], 0.0, thin(5.0, 7.0), "#fbbf24"),
        ("4", "IMMORTALITY", "2018", [2.8, 0.6, -2.0], -0.2, thin(4.0, 5.5), "#3b82f6"),
        ("5", "THE LEGACY", "2022", [5.5, -1.2, -5.0], -0.4, thin(3.0, 4.0), "#f97316"),
    ]
    .into_iter()
    .map(|(id, title, year, pos, rot_y, size, color)| {
        let mut panel = ScenePanelContent::new(id, title, Vec3::from_array(pos), size, hex(color))
            .subtitle(year)
            .rotated(Vec3::new(0.0, rot_y, 0.0));
        panel.featured = id == "3";
        panel
    })
    .collect()
}

/// Glass panels under a single spot light, watched by a slow documentary dolly.
#[tracing::instrument(skip_all)]
pub fn gallery_scene(
    clock: FrameClock,
    caps: &RenderCapabilities,
) -> StageResult<SceneComposition> {
    let rig = CameraRig::orbit(
        CameraPose::new(Vec3::new(0.0, 0.0, 15.0), 40.0),
        Vec3::ZERO,
        (3.0, 0.1),
        (1.0, 0.05),
    )?;

    let atmosphere = AtmosphericConfig::default()
        .with_particles(ParticleField {
            count: 150,
            spatial_scale: 40.0,
            point_size: 0.8,
            drift_speed: 0.2,
            opacity: 0.2,
            color: Color::WHITE,
        })
        .with_fog(8.0, 30.0, Color::BLACK)
        .with_background(Background::Plane {
            color: hex("#050505"),
            position: Vec3::new(0.0, 0.0, -20.0),
            scale: 50.0,
        });

    SceneComposer::new("gallery")
        .camera(rig)
        .atmosphere(atmosphere)
        .light(LightDesc::ambient(0.2))
        .light(LightDesc::spot(Vec3::new(0.0, 15.0, 10.0), 20.0, 0.5, 1.0))
        .panels(&gallery_panels(), &PanelStyle::gallery())
        .build(clock, caps)
}
