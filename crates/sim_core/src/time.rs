/// Q32.32 fixed-point duration in microseconds.
///
/// Storage: `u64` with 32 integer bits + 32 fractional bits, base unit
/// microseconds. Durations in config stay exact across tick-rate changes;
/// conversion to ticks happens once, at the use site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Micros(u64);

impl Micros {
    const FRAC_BITS: u32 = 32;
    const MICROS_PER_SEC: u64 = 1_000_000;

    pub const fn from_secs(secs: u32) -> Self {
        Self((secs as u64 * Self::MICROS_PER_SEC) << Self::FRAC_BITS)
    }

    pub const fn from_millis(millis: u32) -> Self {
        Self((millis as u64 * 1_000) << Self::FRAC_BITS)
    }

    pub const fn from_micros(micros: u32) -> Self {
        Self((micros as u64) << Self::FRAC_BITS)
    }

    /// Number of whole ticks this duration spans at `tick_hz`.
    ///
    /// ticks = micros * tick_hz / MICROS_PER_SEC, computed in 128 bits so
    /// the Q32.32 intermediate cannot overflow. Sub-tick durations yield 0.
    pub const fn to_ticks(self, tick_hz: u32) -> u64 {
        let numer = self.0 as u128 * tick_hz as u128;
        let denom = Self::MICROS_PER_SEC << Self::FRAC_BITS;
        (numer / denom as u128) as u64
    }
}

impl core::ops::Add for Micros {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl core::ops::Sub for Micros {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl core::ops::Mul<u32> for Micros {
    type Output = Self;
    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * rhs as u64)
    }
}

impl core::ops::Div<u32> for Micros {
    type Output = Self;
    fn div(self, rhs: u32) -> Self {
        Self(self.0 / rhs as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_secs_is_exact() {
        let m = Micros::from_secs(1);
        assert_eq!(m.0, 1_000_000 << 32);
    }

    #[test]
    fn from_millis_is_exact() {
        let m = Micros::from_millis(500);
        assert_eq!(m.0, 500_000 << 32);
    }

    #[test]
    fn to_ticks_at_ten_hz() {
        // 10 Hz is the default sim cadence: 100ms per tick
        assert_eq!(Micros::from_secs(1).to_ticks(10), 10);
        assert_eq!(Micros::from_millis(500).to_ticks(10), 5);
        assert_eq!(Micros::from_millis(100).to_ticks(10), 1);
        // sub-tick durations round down to zero ticks
        assert_eq!(Micros::from_millis(50).to_ticks(10), 0);
    }

    #[test]
    fn to_ticks_at_sixty_hz() {
        assert_eq!(Micros::from_secs(1).to_ticks(60), 60);
        assert_eq!(Micros::from_secs(30).to_ticks(60), 1800);
    }

    #[test]
    fn arithmetic() {
        let a = Micros::from_secs(5);
        let b = Micros::from_secs(3);
        assert_eq!((a + b).to_ticks(10), 80);
        assert_eq!((a - b).to_ticks(10), 20);
        assert_eq!((a * 2).to_ticks(10), 100);
        assert_eq!((a / 5).to_ticks(10), 10);
    }

    #[test]
    fn division_yields_tick_duration() {
        // one tick at 10 Hz is 100ms
        let tick = Micros::from_secs(1) / 10;
        assert_eq!(tick, Micros::from_millis(100));
    }
}
