use proptest::prelude::*;
use trackpaint_geom::{
    BoundBoxXYZ, CoordsXY, CoordsXYZ, TileCoordsXY, direction_next, direction_reverse, floor2,
};

fn arb_direction() -> impl Strategy<Value = u8> {
    0u8..4
}

fn arb_coords() -> impl Strategy<Value = CoordsXYZ> {
    (-4096i32..4096, -4096i32..4096, -512i32..2048).prop_map(|(x, y, z)| CoordsXYZ::new(x, y, z))
}

proptest! {
    // Reversing twice returns the original facing
    #[test]
    fn reverse_is_involution(d in arb_direction()) {
        prop_assert_eq!(direction_reverse(direction_reverse(d)), d);
    }

    // Four quarter turns are a full revolution
    #[test]
    fn next_cycles_in_four(d in arb_direction()) {
        let mut r = d;
        for _ in 0..4 {
            r = direction_next(r);
        }
        prop_assert_eq!(r, d);
        prop_assert_eq!(direction_next(direction_next(d)), direction_reverse(d));
    }

    // Swapping only touches odd facings and keeps z
    #[test]
    fn swap_for_even_is_identity(c in arb_coords(), d in arb_direction()) {
        let s = c.swapped_for(d);
        prop_assert_eq!(s.z, c.z);
        if d & 1 == 0 {
            prop_assert_eq!(s, c);
        } else {
            prop_assert_eq!((s.x, s.y), (c.y, c.x));
        }
    }

    #[test]
    fn floor2_is_multiple_and_not_above(v in -100_000i32..100_000) {
        let f = floor2(v, 16);
        prop_assert_eq!(f % 16, 0);
        prop_assert!(f <= v && v - f < 16);
    }

    #[test]
    fn raised_box_keeps_extent(o in arb_coords(), l in arb_coords(), dz in -64i32..64) {
        let b = BoundBoxXYZ::new(o, l).raised(dz);
        prop_assert_eq!(b.length, l);
        prop_assert_eq!(b.offset.z, o.z + dz);
    }
}

#[test]
fn negative_coords_map_to_negative_tiles() {
    // Tiles floor toward negative infinity
    assert_eq!(CoordsXY::new(-1, 31).to_tile(), TileCoordsXY::new(-1, 0));
    assert_eq!(CoordsXY::new(64, 95).to_tile(), TileCoordsXY::new(2, 2));
}
