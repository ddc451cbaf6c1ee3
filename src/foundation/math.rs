/// 64-bit FNV-1a hasher used for stable graph fingerprints.
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

/// Largest even integer `<= v`.
pub(crate) fn even_floor(v: u32) -> u32 {
    v / 2 * 2
}

/// Round a positive pixel size to the nearest even integer, never below 2.
pub(crate) fn even_round(v: f64) -> u32 {
    if !v.is_finite() || v <= 2.0 {
        return 2;
    }
    let half = (v / 2.0).round();
    (half as u32).saturating_mul(2).max(2)
}

/// Format a number for an ffmpeg expression.
///
/// Six fractional digits at most, trailing zeros trimmed, no exponent, no negative zero.
/// Non-finite input formats as `0`.
pub(crate) fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut s = format!("{v:.6}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Treat non-finite values as unset.
pub(crate) fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
