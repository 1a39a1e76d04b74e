use super::*;
use crate::clock::frame_clock::{FrameClock, ManualClock};
use crate::foundation::error::StageError;

fn mount(source: &ManualClock) -> FrameClock {
    FrameClock::mount(Rc::new(source.clone())).unwrap()
}

fn full() -> RenderCapabilities {
    RenderCapabilities::full()
}

#[test]
fn full_engine_mounts_every_section_in_nav_order() {
    let p = presentation(Rc::new(ManualClock::new(0.0)), full()).unwrap();
    assert_eq!(p.brand(), "CR7 LEGACY");
    assert_eq!(p.mounted_count(), 4);
    let anchors: Vec<&str> = p.nav_anchors().into_iter().map(|(a, _)| a).collect();
    assert_eq!(anchors, ["hero", "gallery", "timeline", "core"]);
}

#[test]
fn minimal_engine_keeps_only_the_cheap_section() {
    let p = presentation(Rc::new(ManualClock::new(0.0)), RenderCapabilities::minimal()).unwrap();
    assert_eq!(p.sections().len(), 4);
    assert_eq!(p.mounted_count(), 1);
    assert!(p.section("core").unwrap().is_mounted());
    for anchor in ["hero", "gallery", "timeline"] {
        let err = p.section(anchor).unwrap().error().unwrap();
        assert!(matches!(err, StageError::Capability(_)), "{anchor}: {err}");
    }
}

#[test]
fn hero_stats_loop_every_eight_seconds() {
    let mut hero = hero_scene(mount(&ManualClock::new(0.0)), &full()).unwrap();
    let stats = hero.graph().find("stats").unwrap();
    let ids: Vec<&str> = hero
        .graph()
        .children(stats)
        .map(|v| v.node.id())
        .collect();
    assert_eq!(ids, ["goals", "matches", "trophies", "records"]);

    let a = hero.tick(1.7).world_position("goals").unwrap();
    let b = hero.tick(1.7 + hero::LOOP_SECS).world_position("goals").unwrap();
    assert!((a - b).length() < 1e-9);

    for t in [0.0, 1.0, 2.5, 7.0] {
        let frame = hero.tick(t);
        let glow = frame.node("glow/plane").unwrap();
        assert!(glow.opacity >= 0.03 - 1e-12 && glow.opacity <= 0.05 + 1e-12);
    }
}

#[test]
fn stat_cards_are_staggered() {
    let mut hero = hero_scene(mount(&ManualClock::new(0.0)), &full()).unwrap();
    let frame = hero.tick(0.0);
    // Group at y 0.2; goals starts its cycle, matches is a quarter cycle in.
    let goals = frame.world_position("goals").unwrap();
    let matches = frame.world_position("matches").unwrap();
    assert!((goals.y - 1.0).abs() < 1e-9);
    assert!((matches.y - (0.2 - 0.4 + 0.12)).abs() < 1e-9);
}

#[test]
fn gallery_panels_mount_in_table_order() {
    let gallery = gallery_scene(mount(&ManualClock::new(0.0)), &full()).unwrap();
    assert_eq!(gallery.top_level_ids(), ["1", "2", "3", "4", "5"]);
    assert!(gallery_panels()[2].featured);
}

#[test]
fn gallery_rims_match_and_cards_start_in_place() {
    let gallery = gallery_scene(mount(&ManualClock::new(0.0)), &full()).unwrap();
    let rim = |id: &str| gallery.graph().get(id).unwrap().material.unwrap().opacity;
    for id in ["1/border", "2/border", "3/border", "4/border", "5/border"] {
        assert_eq!(rim(id), 0.2, "{id}");
    }
    for panel in gallery_panels() {
        let node = gallery.graph().get(&panel.id).unwrap().node;
        let local = node.sample(0.0).transform.translate;
        assert!((local - panel.position).length() < 1e-12, "{}", panel.id);
        assert!(!node.pivot().is_empty());
    }
}

#[test]
fn gallery_dolly_stays_within_bounds() {
    let mut gallery = gallery_scene(mount(&ManualClock::new(0.0)), &full()).unwrap();
    let (near, far) = gallery.rig().distance_bounds();
    let mut t = 0.0;
    while t < 400.0 {
        let cam = gallery.tick(t).camera;
        let d = cam.position.length();
        assert!(d >= near - 1e-9 && d <= far + 1e-9, "t={t} d={d}");
        assert_eq!(cam.target, crate::foundation::core::Vec3::ZERO);
        t += 3.7;
    }
}

#[test]
fn timeline_track_wraps_after_the_last_era() {
    let mut timeline = timeline_scene(mount(&ManualClock::new(0.0)), &full()).unwrap();
    let period = 4.0 / timeline::SCROLL_RATE;
    let z = |s: &mut crate::scene::composer::SceneComposition, t: f64| {
        s.tick(t).world_position("track").unwrap()
    };
    let start = z(&mut timeline, 0.0);
    assert!(start.length() < 1e-12);
    let mid = z(&mut timeline, period / 2.0);
    assert!((mid.z - 12.0).abs() < 1e-9);
    assert!((mid.y + 1.0).abs() < 1e-9);
    let later = z(&mut timeline, 3.0 * period + 5.0);
    let early = z(&mut timeline, 5.0);
    assert!((later - early).length() < 1e-6);
    for t in [1.0, 9.0, 26.0, 1000.0] {
        let p = z(&mut timeline, t);
        assert!((0.0..24.0).contains(&p.z));
    }
}

#[test]
fn timeline_eras_carry_their_city() {
    let eras = timeline_eras();
    assert_eq!(eras.len(), 4);
    assert_eq!(eras[0].caption.as_deref(), Some("Manchester"));
    assert_eq!(eras[3].position, timeline::ERA_SPACING * 3.0);
}

#[test]
fn performance_cards_are_phase_shifted_copies() {
    let mut core = performance_scene(mount(&ManualClock::new(0.0)), &full()).unwrap();
    let ui = core.graph().find("ui").unwrap();
    assert_eq!(core.graph().children(ui).count(), 6);
    let y2 = core.tick(1.0).world_position("card/2").unwrap().y;
    let y0 = core.tick(3.0).world_position("card/0").unwrap().y;
    assert!((y2 - y0).abs() < 1e-12);
}

#[test]
fn performance_scene_runs_on_minimal_engines() {
    let caps = RenderCapabilities::minimal();
    assert!(performance_scene(mount(&ManualClock::new(0.0)), &caps).is_ok());
}
