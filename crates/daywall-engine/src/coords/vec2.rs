use core::ops::{Add, Mul, Sub};

/// 2D point or vector in raster pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing at `radians` (0 = +X, clockwise on screen since +Y is down).
    ///
    /// Uses the portable `libm` routines so results are bit-identical on
    /// every target; gradient axes, and therefore output bytes, depend on them.
    #[inline]
    pub fn from_angle(radians: f32) -> Self {
        Self::new(libm::cosf(radians), libm::sinf(radians))
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_length() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.dot(Vec2::new(1.0, 0.0)), 3.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn from_angle_is_unit_length() {
        for i in 0..16 {
            let v = Vec2::from_angle(i as f32 * 0.4);
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn from_angle_bits_are_pinned() {
        // (angle, cos, sin) as raw f32 bits; these feed gradient axes directly.
        let cases: [(u32, u32, u32); 5] = [
            (0x3fc9_0fdb, 0xb33b_bd2e, 0x3f80_0000), // pi/2
            (0x3f80_0000, 0x3f0a_5140, 0x3f57_6aa4), // 1.0
            (0x4020_0000, 0xbf4d_17bf, 0x3f19_3578), // 2.5
            (0x4080_0000, 0xbf27_5530, 0xbf41_bdcf), // 4.0
            (0x40b7_4882, 0x3f59_7ee4, 0xbf07_064b), // 5.7276
        ];
        for (angle, cos, sin) in cases {
            let v = Vec2::from_angle(f32::from_bits(angle));
            assert_eq!((v.x.to_bits(), v.y.to_bits()), (cos, sin), "angle {:#x}", angle);
        }
    }

    #[test]
    fn from_angle_zero_is_exact() {
        assert_eq!(Vec2::from_angle(0.0), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn arithmetic_ops() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(0.5, -1.0);
        assert_eq!(a + b, Vec2::new(1.5, 1.0));
        assert_eq!(a - b, Vec2::new(0.5, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }
}
