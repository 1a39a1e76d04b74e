use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Stable phase in `[0, TAU)` derived from an entity identifier.
///
/// Clones built from the same template but with different ids drift out of
/// sync without any per-entity tuning.
pub fn phase_from_id(id: &str) -> f64 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(id.as_bytes());
    // 53 bits of precision.
    let unit = ((h.finish() >> 11) as f64) * (1.0 / ((1u64 << 53) as f64));
    unit * TAU
}

/// Position of `t` inside a cycle of length `period`, in `[0, 1)`.
///
/// `period` must be finite and positive; callers sanitize first.
pub fn wrap_unit(t: f64, period: f64) -> f64 {
    let u = t.rem_euclid(period) / period;
    // rem_euclid can round up to exactly `period` for tiny negative inputs.
    if u >= 1.0 { 0.0 } else { u }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
