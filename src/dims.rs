use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Grid coordinate or size pair, `x` first (column), `y` second (row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    /// Row-major iteration over the half-open rectangle `from..to`.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    pub fn product(self) -> i32 {
        self.0 * self.1
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl AddAssign for Dims {
    fn add_assign(&mut self, other: Dims) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl SubAssign for Dims {
    fn sub_assign(&mut self, other: Dims) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl From<(i32, i32)> for Dims {
    fn from(tuple: (i32, i32)) -> Self {
        Dims(tuple.0, tuple.1)
    }
}

impl From<Dims> for (i32, i32) {
    fn from(val: Dims) -> Self {
        (val.0, val.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Dims;

    #[test]
    fn arithmetic() {
        assert_eq!(Dims(2, 3) + Dims(-1, 1), Dims(1, 4));
        assert_eq!(Dims(2, 3) - Dims(2, 3), Dims::ZERO);

        let mut d = Dims::ONE;
        d += Dims(1, 2);
        assert_eq!(d, Dims(2, 3));
    }

    #[test]
    fn iter_fill_is_row_major() {
        let cells: Vec<_> = Dims::iter_fill(Dims::ZERO, Dims(2, 2)).collect();
        assert_eq!(cells, vec![Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)]);
    }

    #[test]
    fn positivity() {
        assert!(Dims(1, 1).all_positive());
        assert!(!Dims(0, 1).all_positive());
        assert!(!Dims(3, -2).all_positive());
    }
}
