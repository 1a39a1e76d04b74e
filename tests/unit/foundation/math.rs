use super::*;

#[test]
fn fnv_hash_is_stable_across_split_writes() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"stagecraft");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"stage");
    b.write_bytes(b"craft");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn phase_from_id_is_bounded_and_distinct() {
    let a = phase_from_id("panel-1");
    let b = phase_from_id("panel-2");
    assert!((0.0..TAU).contains(&a));
    assert!((0.0..TAU).contains(&b));
    assert_ne!(a, b);
    assert_eq!(a, phase_from_id("panel-1"));
}

#[test]
fn wrap_unit_repeats_every_period() {
    assert_eq!(wrap_unit(0.0, 8.0), 0.0);
    assert!((wrap_unit(2.0, 8.0) - 0.25).abs() < 1e-12);
    assert!((wrap_unit(10.0, 8.0) - 0.25).abs() < 1e-12);
    assert!((wrap_unit(-2.0, 8.0) - 0.75).abs() < 1e-12);
    let u = wrap_unit(-1e-18, 8.0);
    assert!((0.0..1.0).contains(&u));
}
