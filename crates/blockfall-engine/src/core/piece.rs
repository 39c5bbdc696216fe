use rand::{Rng, distr::StandardUniform, prelude::Distribution};

/// Enum representing the shape of a piece.
///
/// `Empty` doubles as the "no piece" sentinel: it marks vacant board cells
/// and a game with no falling piece in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ShapeKind {
    /// No shape (vacant cell, no falling piece).
    #[default]
    Empty,
    /// I-piece (straight).
    I,
    /// J-piece (inverted L).
    J,
    /// L-piece.
    L,
    /// O-piece (square).
    O,
    /// S-piece.
    S,
    /// Z-piece.
    Z,
    /// T-piece.
    T,
}

impl Distribution<ShapeKind> for StandardUniform {
    /// Samples one of the seven real shapes with equal probability.
    /// `Empty` is never produced.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        match rng.random_range(0..=6) {
            0 => ShapeKind::I,
            1 => ShapeKind::J,
            2 => ShapeKind::L,
            3 => ShapeKind::O,
            4 => ShapeKind::S,
            5 => ShapeKind::Z,
            _ => ShapeKind::T,
        }
    }
}

impl ShapeKind {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == ShapeKind::Empty
    }
}

/// Cell offsets relative to the pivot, `(dx, dy)` with x growing rightward
/// and y growing upward.
const fn shape_cells(kind: ShapeKind) -> [(i32, i32); 4] {
    match kind {
        ShapeKind::Empty => [(0, 0); 4],
        ShapeKind::I => [(0, -1), (0, 0), (0, 1), (0, 2)],
        ShapeKind::J => [(-1, -1), (0, -1), (0, 0), (0, 1)],
        ShapeKind::L => [(1, -1), (0, -1), (0, 0), (0, 1)],
        ShapeKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        ShapeKind::S => [(0, -1), (0, 0), (-1, 0), (-1, 1)],
        ShapeKind::Z => [(0, -1), (0, 0), (1, 0), (1, 1)],
        ShapeKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
    }
}

/// A piece as four cells around a pivot.
///
/// Pieces are immutable values; rotation returns a new `Piece` and carries
/// no position. Where a piece sits on the board is the game's business, a
/// `Piece` only knows its shape.
///
/// # Coordinate System
///
/// - Offsets are relative to the pivot cell
/// - X increases rightward (columns)
/// - Y increases upward (rows, matching the board's bottom-up rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    cells: [(i32, i32); 4],
}

impl Piece {
    #[must_use]
    pub const fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            cells: shape_cells(kind),
        }
    }

    /// The no-piece value.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(ShapeKind::Empty)
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.cells
    }

    #[must_use]
    pub fn min_x(&self) -> i32 {
        self.cells.into_iter().map(|(dx, _)| dx).min().unwrap()
    }

    #[must_use]
    pub fn max_x(&self) -> i32 {
        self.cells.into_iter().map(|(dx, _)| dx).max().unwrap()
    }

    #[must_use]
    pub fn min_y(&self) -> i32 {
        self.cells.into_iter().map(|(_, dy)| dy).min().unwrap()
    }

    #[must_use]
    pub fn max_y(&self) -> i32 {
        self.cells.into_iter().map(|(_, dy)| dy).max().unwrap()
    }

    /// Returns the piece rotated 90° counterclockwise.
    ///
    /// The O-piece is its own rotation.
    #[must_use]
    pub fn rotated_left(&self) -> Self {
        if self.kind == ShapeKind::O {
            return *self;
        }
        Self {
            kind: self.kind,
            cells: self.cells.map(|(dx, dy)| (dy, -dx)),
        }
    }

    /// Returns the piece rotated 90° clockwise.
    ///
    /// The O-piece is its own rotation.
    #[must_use]
    pub fn rotated_right(&self) -> Self {
        if self.kind == ShapeKind::O {
            return *self;
        }
        Self {
            kind: self.kind,
            cells: self.cells.map(|(dx, dy)| (-dy, dx)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    const ALL_KINDS: [ShapeKind; 8] = [
        ShapeKind::Empty,
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
    ];

    #[test]
    fn test_canonical_layouts() {
        assert_eq!(
            Piece::new(ShapeKind::I).cells(),
            [(0, -1), (0, 0), (0, 1), (0, 2)]
        );
        assert_eq!(
            Piece::new(ShapeKind::J).cells(),
            [(-1, -1), (0, -1), (0, 0), (0, 1)]
        );
        assert_eq!(
            Piece::new(ShapeKind::L).cells(),
            [(1, -1), (0, -1), (0, 0), (0, 1)]
        );
        assert_eq!(
            Piece::new(ShapeKind::O).cells(),
            [(0, 0), (1, 0), (0, 1), (1, 1)]
        );
        // S and Z mirror each other; pin both so a swap cannot slip through
        assert_eq!(
            Piece::new(ShapeKind::S).cells(),
            [(0, -1), (0, 0), (-1, 0), (-1, 1)]
        );
        assert_eq!(
            Piece::new(ShapeKind::Z).cells(),
            [(0, -1), (0, 0), (1, 0), (1, 1)]
        );
        assert_eq!(
            Piece::new(ShapeKind::T).cells(),
            [(-1, 0), (0, 0), (1, 0), (0, 1)]
        );
        assert_eq!(Piece::empty().cells(), [(0, 0); 4]);
    }

    #[test]
    fn test_every_shape_straddles_its_pivot() {
        for kind in ALL_KINDS {
            let piece = Piece::new(kind);
            assert_eq!(piece.kind(), kind);
            assert_eq!(piece.cells().len(), 4);
            // Every shape straddles its pivot
            assert!(piece.min_x() <= 0 && piece.max_x() >= 0);
            assert!(piece.min_y() <= 0 && piece.max_y() >= 0);
        }
    }

    #[test]
    fn test_bounding_extents() {
        let i = Piece::new(ShapeKind::I);
        assert_eq!((i.min_x(), i.max_x()), (0, 0));
        assert_eq!((i.min_y(), i.max_y()), (-1, 2));

        let t = Piece::new(ShapeKind::T);
        assert_eq!((t.min_x(), t.max_x()), (-1, 1));
        assert_eq!((t.min_y(), t.max_y()), (0, 1));

        let o = Piece::new(ShapeKind::O);
        assert_eq!((o.min_x(), o.max_x()), (0, 1));
        assert_eq!((o.min_y(), o.max_y()), (0, 1));
    }

    #[test]
    fn test_rotation_round_trips() {
        for kind in ALL_KINDS {
            let piece = Piece::new(kind);
            assert_eq!(piece.rotated_left().rotated_right(), piece, "{kind:?}");
            assert_eq!(piece.rotated_right().rotated_left(), piece, "{kind:?}");
        }
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for kind in ALL_KINDS {
            let piece = Piece::new(kind);
            let mut rotated = piece;
            for _ in 0..4 {
                rotated = rotated.rotated_left();
            }
            assert_eq!(rotated, piece, "{kind:?}");
        }
    }

    #[test]
    fn test_o_and_empty_are_rotation_fixed_points() {
        for kind in [ShapeKind::O, ShapeKind::Empty] {
            let piece = Piece::new(kind);
            assert_eq!(piece.rotated_left(), piece);
            assert_eq!(piece.rotated_right(), piece);
        }
    }

    #[test]
    fn test_rotate_left_maps_coordinates() {
        // (dx, dy) -> (dy, -dx)
        let t = Piece::new(ShapeKind::T).rotated_left();
        assert_eq!(t.cells(), [(0, 1), (0, 0), (0, -1), (1, 0)]);
    }

    #[test]
    fn test_random_shapes_are_never_empty() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut seen = Vec::new();
        for _ in 0..256 {
            let kind: ShapeKind = rng.random();
            assert!(!kind.is_empty());
            if !seen.contains(&kind) {
                seen.push(kind);
            }
        }
        assert_eq!(seen.len(), 7, "all seven shapes should come up: {seen:?}");
    }
}
