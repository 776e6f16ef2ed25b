use crate::{Coordinate, WallOrientation};

impl quickcheck::Arbitrary for Coordinate {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Slightly wider than a 9 x 9 board, so out-of-bounds
        // coordinates show up too.
        Coordinate {
            x: (u8::arbitrary(g) % 13) as i8 - 2,
            y: (u8::arbitrary(g) % 13) as i8 - 2,
        }
    }
}

impl quickcheck::Arbitrary for WallOrientation {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[WallOrientation::Horizontal, WallOrientation::Vertical])
            .unwrap()
    }
}

/// A batch of candidate wall placements, mostly inside the 9 x 9
/// board's wall grid. Placements may conflict; tests feed them through
/// `place_wall` and keep whatever sticks.
#[derive(Clone, Debug)]
pub struct WallPlacementInput {
    pub placements: Vec<(Coordinate, WallOrientation)>,
}

impl quickcheck::Arbitrary for WallPlacementInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let count = usize::arbitrary(g) % 20;
        let placements = (0..count)
            .map(|_| {
                let cell = Coordinate {
                    x: (u8::arbitrary(g) % 9) as i8 - 1,
                    y: (u8::arbitrary(g) % 9) as i8 - 1,
                };
                (cell, WallOrientation::arbitrary(g))
            })
            .collect();
        WallPlacementInput { placements }
    }
}
