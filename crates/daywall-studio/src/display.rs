/// Source of the target wallpaper size in pixels.
///
/// Sizes are signed so that a misreported display reaches the generator and
/// is rejected there instead of wrapping.
pub trait DisplaySize {
    fn size(&self) -> (i64, i64);
}

/// A display whose size is known up front (config or command line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDisplay {
    pub width: i64,
    pub height: i64,
}

impl FixedDisplay {
    #[inline]
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

impl Default for FixedDisplay {
    /// A common portrait phone panel.
    fn default() -> Self {
        Self::new(1080, 2400)
    }
}

impl DisplaySize for FixedDisplay {
    fn size(&self) -> (i64, i64) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_portrait_phone() {
        assert_eq!(FixedDisplay::default().size(), (1080, 2400));
    }
}
