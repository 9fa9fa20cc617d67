use trackpaint_geom::{BoundBoxXYZ, CoordsXYZ, floor2, xyz};
use trackpaint_session::segment::SUPPORTS_SLOPE_ABOVE_SCENERY;
use trackpaint_session::{ImageId, PaintSession};

use crate::kind::SupportType;
use crate::visible_support_template;

/// First curved-support sprite of the extended graphics set.
pub const SPR_G2_SUPPORT_BEGIN: u32 = 29357 + 4600;

const WATER_HEIGHT_STEP: i32 = 16;
const SLOPE_DOUBLE_HEIGHT: u8 = 0x10;
const SLOPE_ALL_CORNERS_UP: u8 = 0x0F;
const TILE_SLOPE_MASK: u8 = 0x1F;

/// Number of wooden sub-types per family: two straight runs and four corners.
pub const WOODEN_SUB_TYPE_COUNT: usize = 6;

#[derive(Clone, Copy)]
struct WoodenSupportImages {
    full: u32,
    half: u32,
    flat: u32,
    slope: u32,
}

const fn ids(full: u32, half: u32, flat: u32, slope: u32) -> WoodenSupportImages {
    WoodenSupportImages { full, half, flat, slope }
}

const SUPPORT_IMAGES: [WoodenSupportImages; 12] = [
    ids(3392, 3393, 3394, 3536),
    ids(3390, 3391, 3394, 3514),
    ids(3558, 3559, 3560, 3570),
    ids(3561, 3562, 3563, 3592),
    ids(3564, 3565, 3566, 3614),
    ids(3567, 3568, 3569, 3636),
    ids(3677, 3678, 3680, 3739),
    ids(3675, 3676, 3679, 3717),
    ids(3761, 3762, 3763, 3773),
    ids(3764, 3765, 3766, 3795),
    ids(3767, 3768, 3769, 3817),
    ids(3770, 3771, 3772, 3839),
];

const CURVE_COUNT: usize = 81;

const fn truss_curves() -> [u32; CURVE_COUNT] {
    let mut out = [0u32; CURVE_COUNT];
    let mut i = 0;
    while i < CURVE_COUNT {
        out[i] = if i < 49 { 3465 + i as u32 } else { SPR_G2_SUPPORT_BEGIN + (i as u32 - 49) };
        i += 1;
    }
    out
}

const fn mine_curves() -> [u32; CURVE_COUNT] {
    let mut out = [0u32; CURVE_COUNT];
    let mut i = 0;
    while i < 49 {
        out[i] = 3681 + i as u32;
        i += 1;
    }
    out
}

const TRUSS_CURVES: [u32; CURVE_COUNT] = truss_curves();
const MINE_CURVES: [u32; CURVE_COUNT] = mine_curves();

/// Curved pieces are only drawn for the two straight runs of each family.
fn curve_images(index: usize) -> Option<&'static [u32; CURVE_COUNT]> {
    match index {
        0 | 1 => Some(&TRUSS_CURVES),
        6 | 7 => Some(&MINE_CURVES),
        _ => None,
    }
}

#[derive(Clone, Copy)]
struct CurveSupportDesc {
    bound_box: BoundBoxXYZ,
    /// Hangs under the track's prepend target instead of sorting on its own.
    prepend: bool,
    drawn: bool,
}

const fn curve(offset: CoordsXYZ, length: CoordsXYZ, prepend: bool) -> CurveSupportDesc {
    CurveSupportDesc { bound_box: BoundBoxXYZ::new(offset, length), prepend, drawn: true }
}

const fn curve_descs() -> [CurveSupportDesc; CURVE_COUNT] {
    let mut out = [curve(xyz(0, 0, 0), xyz(1, 1, 8), false); CURVE_COUNT];
    out[13] = curve(xyz(10, 0, 0), xyz(10, 32, 44), true);
    out[14] = curve(xyz(0, 10, 0), xyz(32, 10, 44), true);
    out[17] = curve(xyz(10, 0, 0), xyz(10, 32, 44), true);
    out[18] = curve(xyz(0, 10, 0), xyz(32, 10, 44), true);
    out[21] = curve(xyz(10, 0, 2), xyz(10, 32, 76), true);
    out[22] = curve(xyz(0, 10, 2), xyz(32, 10, 76), true);
    let mut i = 24;
    while i < 28 {
        out[i] = curve(xyz(0, 0, 0), xyz(1, 1, 4), false);
        i += 1;
    }
    out[48] = curve(xyz(2, 2, 1), xyz(28, 28, 2), false);
    out[62] = curve(xyz(10, 0, 2), xyz(10, 32, 52), true);
    out[63] = curve(xyz(0, 10, 2), xyz(32, 10, 52), true);
    out[66] = curve(xyz(10, 0, 2), xyz(10, 32, 76), true);
    out[67] = curve(xyz(0, 10, 2), xyz(32, 10, 76), true);
    out
}

const CURVE_DESCS: [CurveSupportDesc; CURVE_COUNT] = curve_descs();

#[rustfmt::skip]
const SLOPE_IMAGE_OFFSETS: [u32; 32] = [
    0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 0, 0, 0, 0, 0, 0, 0, 0, 14, 0, 0, 0, 17, 0, 16, 15, 0,
];

fn add_at(session: &mut PaintSession, image: ImageId, offset: CoordsXYZ, length: CoordsXYZ) {
    session.add_image_as_parent(image, offset, BoundBoxXYZ::new(offset, length));
}

/// Curved piece `special - 1` on top of a support stack ending at `z`. Returns whether it was drawn.
fn paint_curve(session: &mut PaintSession, index: usize, special: i32, z: i32, template: ImageId) -> bool {
    if special == 0 {
        return false;
    }
    let special = ((special - 1) & 0xFFFF) as usize;
    let curve_image = curve_images(index)
        .and_then(|table| table.get(special).copied())
        .filter(|&image| image != 0);
    let (Some(image), Some(desc)) = (curve_image, CURVE_DESCS.get(special)) else {
        return false;
    };
    if !desc.drawn {
        return false;
    }
    let image = template.with_index(image);
    let bound_box = desc.bound_box.raised(z);
    match session.wooden_supports_prepend_to {
        Some(target) if desc.prepend => {
            session.add_image_attached(target, image, xyz(0, 0, z), bound_box);
        }
        _ => {
            session.add_image_as_parent(image, xyz(0, 0, z), bound_box);
        }
    }
    true
}

/// Stacks wooden trestles from the ground up to `height`.
///
/// `sub_type` selects the orientation within the ride's family: 0 and 1 run along the
/// two axes, 2 to 5 are the corner pieces. A non-zero `special` adds curved piece
/// `special - 1` on top. Returns whether anything was drawn.
pub fn wooden_a_supports_paint_setup(
    session: &mut PaintSession,
    support_type: SupportType,
    sub_type: u8,
    special: i32,
    height: i32,
    template: ImageId,
) -> bool {
    let Some(family) = support_type.wooden() else {
        log::trace!("wooden supports requested for {:?}", support_type);
        return false;
    };
    if sub_type as usize >= WOODEN_SUB_TYPE_COUNT || !session.passed_surface() {
        return false;
    }
    let Some(template) = visible_support_template(session, template) else {
        return false;
    };
    let index = family.base_index() + sub_type as usize;
    let images = SUPPORT_IMAGES[index];

    let mut z = floor2(session.support.height as i32 + 15, 16);
    let mut height = height - z;
    if height < 0 {
        return false;
    }
    height /= 16;

    let mut has_supports = false;
    let mut draw_flat_piece = false;

    let slope = session.support.slope;
    if slope & SUPPORTS_SLOPE_ABOVE_SCENERY != 0 {
        draw_flat_piece = true;
    } else if slope & SLOPE_DOUBLE_HEIGHT != 0 {
        // Steep diagonal slope takes two stacked slope pieces.
        height -= 2;
        if height < 0 {
            return false;
        }
        if images.slope == 0 {
            draw_flat_piece = true;
        } else {
            let image = template.with_index(images.slope + SLOPE_IMAGE_OFFSETS[(slope & TILE_SLOPE_MASK) as usize]);
            session.add_image_as_parent(image, xyz(0, 0, z), BoundBoxXYZ::new(xyz(0, 0, z + 2), xyz(32, 32, 11)));
            session.add_image_as_parent(
                image.with_index_offset(4),
                xyz(0, 0, z + 16),
                BoundBoxXYZ::new(xyz(0, 0, z + 18), xyz(32, 32, 11)),
            );
            has_supports = true;
        }
        z += 32;
    } else if slope & SLOPE_ALL_CORNERS_UP != 0 {
        height -= 1;
        if height < 0 {
            return false;
        }
        if images.slope == 0 {
            draw_flat_piece = true;
        } else {
            let image = template.with_index(images.slope + SLOPE_IMAGE_OFFSETS[(slope & TILE_SLOPE_MASK) as usize]);
            session.add_image_as_parent(image, xyz(0, 0, z), BoundBoxXYZ::new(xyz(0, 0, z + 2), xyz(32, 32, 11)));
            has_supports = true;
        }
        z += 16;
    }

    if draw_flat_piece {
        add_at(session, template.with_index(images.flat), xyz(0, 0, z - 2), xyz(32, 32, 0));
        has_supports = true;
    }

    while height != 0 {
        if z & 16 == 0 && height >= 2 && z + WATER_HEIGHT_STEP != session.water_height {
            let length = if height == 2 { 23 } else { 28 };
            add_at(session, template.with_index(images.full), xyz(0, 0, z), xyz(32, 32, length));
            z += 32;
            height -= 2;
        } else {
            let length = if height == 1 { 7 } else { 12 };
            add_at(session, template.with_index(images.half), xyz(0, 0, z), xyz(32, 32, length));
            z += 16;
            height -= 1;
        }
        has_supports = true;
    }

    if paint_curve(session, index, special, z, template) {
        has_supports = true;
    }

    has_supports
}

/// Wooden supports with shallow slope caps, used under sloped track.
///
/// Same arguments and return value as [`wooden_a_supports_paint_setup`]. The slope
/// pieces get 3-unit tall boxes instead of 11, and the flat base piece is skipped
/// when nothing would stand on it.
pub fn wooden_b_supports_paint_setup(
    session: &mut PaintSession,
    support_type: SupportType,
    sub_type: u8,
    special: i32,
    height: i32,
    template: ImageId,
) -> bool {
    let Some(family) = support_type.wooden() else {
        log::trace!("wooden supports requested for {:?}", support_type);
        return false;
    };
    if sub_type as usize >= WOODEN_SUB_TYPE_COUNT || !session.passed_surface() {
        return false;
    }
    let Some(template) = visible_support_template(session, template) else {
        return false;
    };
    let index = family.base_index() + sub_type as usize;
    let images = SUPPORT_IMAGES[index];

    let mut z = floor2(session.support.height as i32 + 15, 16);
    let length = height - z;
    if length < 0 {
        return false;
    }
    let mut steps = length / 16;

    let mut has_supports = false;
    let mut draw_flat_piece = false;

    let slope = session.support.slope;
    if slope & SUPPORTS_SLOPE_ABOVE_SCENERY != 0 {
        draw_flat_piece = true;
    } else if slope & SLOPE_DOUBLE_HEIGHT != 0 {
        steps -= 2;
        if steps < 0 {
            return false;
        }
        if images.slope == 0 {
            z += 32;
            draw_flat_piece = true;
        } else {
            let image = template.with_index(images.slope + SLOPE_IMAGE_OFFSETS[(slope & TILE_SLOPE_MASK) as usize]);
            session.add_image_as_parent(image, xyz(0, 0, z), BoundBoxXYZ::new(xyz(0, 0, z + 2), xyz(32, 32, 11)));
            z += 16;
            session.add_image_as_parent(
                image.with_index_offset(4),
                xyz(0, 0, z),
                BoundBoxXYZ::new(xyz(0, 0, z + 2), xyz(32, 32, 3)),
            );
            z += 16;
            has_supports = true;
        }
    } else if slope & SLOPE_ALL_CORNERS_UP != 0 {
        steps -= 1;
        if steps < 0 {
            return false;
        }
        if images.slope == 0 {
            z += 16;
            draw_flat_piece = true;
        } else {
            let image = template.with_index(images.slope + SLOPE_IMAGE_OFFSETS[(slope & TILE_SLOPE_MASK) as usize]);
            session.add_image_as_parent(image, xyz(0, 0, z), BoundBoxXYZ::new(xyz(0, 0, z + 2), xyz(32, 32, 3)));
            z += 16;
            has_supports = true;
        }
    }

    if draw_flat_piece && steps != 0 {
        add_at(session, template.with_index(images.flat), xyz(0, 0, z - 2), xyz(32, 32, 0));
        has_supports = true;
    }

    while steps > 0 {
        if z & 16 != 0 || steps == 1 || z + WATER_HEIGHT_STEP == session.water_height {
            let length = if steps == 1 { 7 } else { 12 };
            add_at(session, template.with_index(images.half), xyz(0, 0, z), xyz(32, 32, length));
            z += 16;
            steps -= 1;
        } else {
            let length = if steps == 2 { 23 } else { 28 };
            add_at(session, template.with_index(images.full), xyz(0, 0, z), xyz(32, 32, length));
            z += 32;
            steps -= 2;
        }
        has_supports = true;
    }

    if paint_curve(session, index, special, z, template) {
        has_supports = true;
    }

    has_supports
}
