use rand::Rng;

/// One dot in the unit square `[0, 1) x [0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x: f64 = rng.random();
        let y: f64 = rng.random();
        Self { x, y }
    }

    /// `true` when the dot lies within distance 1 of the origin.
    ///
    /// Compares the squared distance so no square root is taken.
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.x * self.x + self.y * self.y <= 1.0
    }
}
