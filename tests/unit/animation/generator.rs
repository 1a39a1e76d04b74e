use super::*;

fn cards() -> RingGenerator {
    RingGenerator::new("card", 6, 4.0, Primitive::cuboid(1.0, 0.6, 0.05))
        .angle_step(1.0)
        .bind(NodeChannel::PositionY, Oscillator::sine(0.5, 1.0))
        .bind(NodeChannel::RotationX, Oscillator::cosine(0.2, 0.5))
        .phase(linear_phase(1.0))
}

#[test]
fn yields_exactly_count_items() {
    let g = cards();
    assert_eq!(g.iter().len(), 6);
    assert_eq!(g.iter().count(), 6);
    assert!(g.spec_at(6).is_none());
    assert!(RingGenerator::new("x", 0, 1.0, Primitive::Group).iter().next().is_none());
}

#[test]
fn iteration_is_restartable() {
    let g = cards();
    let a: Vec<_> = g.iter().collect();
    let b: Vec<_> = (&g).into_iter().collect();
    assert_eq!(a, b);
}

#[test]
fn items_sit_on_the_ring_with_index_ids() {
    let g = cards();
    for (i, spec) in g.iter().enumerate() {
        assert_eq!(spec.id, format!("card/{i}"));
        let p = spec.base.translate;
        assert!((p.x - (i as f64).cos() * 4.0).abs() < 1e-12);
        assert!((p.z - (i as f64).sin() * 4.0).abs() < 1e-12);
        assert!((Vec3::new(p.x, 0.0, p.z).length() - 4.0).abs() < 1e-12);
    }
}

#[test]
fn phase_function_desynchronizes_copies() {
    let g = cards();
    let specs: Vec<_> = g.iter().collect();
    let y = |s: &NodeSpec, t: f64| s.motion.offset(NodeChannel::PositionY, t);
    // Item i at time t matches item 0 at time t + i.
    assert!((y(&specs[3], 2.0) - y(&specs[0], 5.0)).abs() < 1e-12);
    assert!((y(&specs[1], 0.0) - y(&specs[0], 0.0)).abs() > 1e-3);
}

#[test]
fn default_spacing_is_even() {
    let g = RingGenerator::new("r", 4, 1.0, Primitive::Group);
    let p = g.spec_at(1).unwrap().base.translate;
    assert!(p.x.abs() < 1e-12 && (p.z - 1.0).abs() < 1e-12);
}
