use trackpaint_geom::{BoundBoxXYZ, CoordsXY, CoordsXYZ, floor2, xyz};
use trackpaint_session::segment::SUPPORTS_SLOPE_ABOVE_SCENERY;
use trackpaint_session::{ImageId, PaintSession, SUPPORT_SEGMENT_COUNT};

use crate::kind::SupportType;
use crate::visible_support_template;

const TILE_SLOPE_MASK: u8 = 0x1F;

/// Centre of each support segment within the tile, in array order.
const SUPPORT_BOUND_BOXES: [CoordsXY; SUPPORT_SEGMENT_COUNT] = [
    CoordsXY::new(4, 4),
    CoordsXY::new(28, 4),
    CoordsXY::new(4, 28),
    CoordsXY::new(28, 28),
    CoordsXY::new(16, 16),
    CoordsXY::new(16, 4),
    CoordsXY::new(4, 16),
    CoordsXY::new(28, 16),
    CoordsXY::new(16, 28),
];

/// Fallback segment and crossbeam kind for a blocked segment.
///
/// Four levels of 72 bytes; within a level `segment * 8 + rotation * 2` holds the
/// replacement segment and the next byte the crossbeam index.
#[rustfmt::skip]
const CROSSBEAM_FALLBACKS: [u8; 288] = [
    5, 2, 5, 2, 5, 2, 5, 2,
    7, 1, 7, 1, 7, 1, 7, 1,
    6, 3, 6, 3, 6, 3, 6, 3,
    8, 0, 8, 0, 8, 0, 8, 0,
    5, 3, 6, 0, 8, 1, 7, 2,
    1, 2, 1, 2, 1, 2, 1, 2,
    0, 3, 0, 3, 0, 3, 0, 3,
    3, 1, 3, 1, 3, 1, 3, 1,
    2, 0, 2, 0, 2, 0, 2, 0,

    6, 1, 6, 1, 6, 1, 6, 1,
    5, 0, 5, 0, 5, 0, 5, 0,
    8, 2, 8, 2, 8, 2, 8, 2,
    7, 3, 7, 3, 7, 3, 7, 3,
    6, 0, 8, 1, 7, 2, 5, 3,
    0, 0, 0, 0, 0, 0, 0, 0,
    2, 1, 2, 1, 2, 1, 2, 1,
    1, 3, 1, 3, 1, 3, 1, 3,
    3, 2, 3, 2, 3, 2, 3, 2,

    1, 6, 1, 6, 1, 6, 1, 6,
    3, 5, 3, 5, 3, 5, 3, 5,
    0, 7, 0, 7, 0, 7, 0, 7,
    2, 4, 2, 4, 2, 4, 2, 4,
    8, 1, 7, 2, 5, 3, 6, 0,
    4, 1, 4, 1, 4, 1, 4, 1,
    4, 2, 4, 2, 4, 2, 4, 2,
    4, 0, 4, 0, 4, 0, 4, 0,
    4, 3, 4, 3, 4, 3, 4, 3,

    2, 5, 2, 5, 2, 5, 2, 5,
    0, 4, 0, 4, 0, 4, 0, 4,
    3, 6, 3, 6, 3, 6, 3, 6,
    1, 7, 1, 7, 1, 7, 1, 7,
    7, 2, 5, 3, 6, 0, 8, 1,
    8, 5, 8, 5, 8, 5, 8, 5,
    7, 6, 7, 6, 7, 6, 7, 6,
    6, 4, 6, 4, 6, 4, 6, 4,
    5, 7, 5, 7, 5, 7, 5, 7,
];
const CROSSBEAM_LEVEL_STRIDE: usize = 72;
const CROSSBEAM_LEVELS: usize = 4;

const CROSSBEAM_OFFSETS: [CoordsXY; 8] = [
    CoordsXY::new(-15, -1),
    CoordsXY::new(0, -2),
    CoordsXY::new(-2, -1),
    CoordsXY::new(-1, -15),
    CoordsXY::new(-26, -1),
    CoordsXY::new(0, -2),
    CoordsXY::new(-2, -1),
    CoordsXY::new(-1, -26),
];

const CROSSBEAM_LENGTHS: [CoordsXY; 8] = [
    CoordsXY::new(18, 3),
    CoordsXY::new(3, 18),
    CoordsXY::new(18, 3),
    CoordsXY::new(3, 18),
    CoordsXY::new(32, 3),
    CoordsXY::new(3, 32),
    CoordsXY::new(32, 3),
    CoordsXY::new(3, 32),
];

const CROSSBEAM_IMAGES: [[u32; 8]; 13] = [
    [3370, 3371, 3370, 3371, 3372, 3373, 3372, 3373], // tubes
    [3374, 3375, 3374, 3375, 3376, 3377, 3376, 3377], // fork
    [3374, 3375, 3374, 3375, 3376, 3377, 3376, 3377], // fork alt
    [3370, 3371, 3370, 3371, 3372, 3373, 3372, 3373], // boxed
    [3374, 3375, 3374, 3375, 3376, 3377, 3376, 3377], // stick
    [3374, 3375, 3374, 3375, 3376, 3377, 3376, 3377], // stick alt
    [3378, 3383, 3378, 3383, 3380, 3385, 3380, 3385], // thick centred
    [3378, 3383, 3378, 3383, 3380, 3385, 3380, 3385], // thick
    [3382, 3379, 3382, 3379, 3384, 3381, 3384, 3381], // thick alt
    [3382, 3379, 3382, 3379, 3384, 3381, 3384, 3381], // thick alt centred
    [3378, 3379, 3378, 3379, 3380, 3381, 3380, 3381], // truss
    [3386, 3387, 3386, 3387, 3388, 3389, 3388, 3389], // tubes inverted
    [3370, 3371, 3370, 3371, 3372, 3373, 3372, 3373], // boxed coated
];

/// Height a crossbeam drops below the track before the pole starts.
const SUPPORT_TYPE_TO_HEIGHT: [i32; 13] = [6, 3, 3, 6, 3, 3, 6, 6, 6, 6, 4, 3, 6];

#[derive(Clone, Copy)]
struct MetalSupportImages {
    base_id: u32,
    beam_id: u32,
}

const fn images(base_id: u32, beam_id: u32) -> MetalSupportImages {
    MetalSupportImages { base_id, beam_id }
}

const POLE_IMAGES: [MetalSupportImages; 13] = [
    images(3243, 3209),
    images(3279, 3262),
    images(3298, 3262),
    images(3334, 3317),
    images(0, 3658),
    images(0, 3658),
    images(0, 3141),
    images(0, 3158),
    images(0, 3175),
    images(0, 3192),
    images(0, 3124),
    images(3243, 3209),
    images(3334, 3353),
];

/// Pole images for the extension drawn above the track; tubes use a different beam.
const SPECIAL_POLE_IMAGES: [MetalSupportImages; 13] = [
    images(3243, 3226),
    images(3279, 3262),
    images(3298, 3262),
    images(3334, 3317),
    images(0, 3658),
    images(0, 3658),
    images(0, 3141),
    images(0, 3158),
    images(0, 3175),
    images(0, 3192),
    images(0, 3124),
    images(3243, 3226),
    images(3334, 3353),
];

#[rustfmt::skip]
const SLOPE_IMAGE_MAP: [u32; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 0, 0, 0, 0, 0, 0, 0, 15, 0, 0, 0, 16, 0, 17, 18, 0,
];

fn add_at(session: &mut PaintSession, image: ImageId, offset: CoordsXYZ, length: CoordsXYZ) {
    session.add_image_as_parent(image, offset, BoundBoxXYZ::new(offset, length));
}

/// Draws a metal pole from the ground up to `height` under `segment`.
///
/// When the segment below is blocked the pole is moved to a neighbouring segment and
/// joined to the track with a crossbeam. A non-zero `special` extends the pole above
/// the track by that many units (a negative value starts one unit lower).
/// Returns whether anything was drawn.
pub fn metal_a_supports_paint_setup(
    session: &mut PaintSession,
    support_type: SupportType,
    segment: u8,
    special: i32,
    height: i32,
    template: ImageId,
) -> bool {
    let Some(kind) = support_type.metal() else {
        log::trace!("metal supports requested for {:?}", support_type);
        return false;
    };
    let segment = segment as usize;
    if segment >= SUPPORT_SEGMENT_COUNT || !session.passed_surface() {
        return false;
    }
    let Some(template) = visible_support_template(session, template) else {
        return false;
    };
    let t = kind.index();

    let original_height = height;
    let original_segment = segment;
    let mut height = height;
    let mut segment = segment;

    let rotation = (session.current_rotation & 3) as usize;
    let mut crossbeam_height: i32 = -1;
    if height < session.support_segments[segment].height as i32 {
        crossbeam_height = height;

        height -= SUPPORT_TYPE_TO_HEIGHT[t];
        if height < 0 {
            return false;
        }

        let mut level = 0;
        let (new_segment, entry) = loop {
            let entry = level * CROSSBEAM_LEVEL_STRIDE + rotation * 2 + segment * 8;
            let candidate = CROSSBEAM_FALLBACKS[entry] as usize;
            if height > session.support_segments[candidate].height as i32 {
                break (candidate, entry);
            }
            level += 1;
            if level == CROSSBEAM_LEVELS {
                return false;
            }
        };

        let beam = CROSSBEAM_FALLBACKS[entry + 1] as usize;
        let pos = SUPPORT_BOUND_BOXES[segment] + CROSSBEAM_OFFSETS[beam];
        let len = CROSSBEAM_LENGTHS[beam];
        add_at(
            session,
            template.with_index(CROSSBEAM_IMAGES[t][beam]),
            CoordsXYZ::from_xy(pos, height),
            xyz(len.x, len.y, 1),
        );

        segment = new_segment;
    }

    let top = height;
    let ground = session.support_segments[segment];
    let pos = SUPPORT_BOUND_BOXES[segment];
    if ground.slope & SUPPORTS_SLOPE_ABOVE_SCENERY != 0
        || height - (ground.height as i32) < 6
        || POLE_IMAGES[t].base_id == 0
    {
        height = ground.height as i32;
    } else {
        let image = POLE_IMAGES[t].base_id + SLOPE_IMAGE_MAP[(ground.slope & TILE_SLOPE_MASK) as usize];
        add_at(session, template.with_index(image), CoordsXYZ::from_xy(pos, ground.height as i32), xyz(0, 0, 5));
        height = ground.height as i32 + 6;
    }

    // Short piece to bring the pole onto a 16 unit boundary.
    let height_diff = floor2(height + 16, 16).min(top) - height;
    if height_diff > 0 {
        let image = POLE_IMAGES[t].beam_id + (height_diff - 1) as u32;
        add_at(session, template.with_index(image), CoordsXYZ::from_xy(pos, height), xyz(0, 0, height_diff - 1));
        height += height_diff;
    }

    let mut count = 0;
    loop {
        let z = (height + 16).min(top) - height;
        if z <= 0 {
            break;
        }
        let mut image = POLE_IMAGES[t].beam_id + (z - 1) as u32;
        if count == 3 && z == 16 {
            image += 1;
        }
        add_at(session, template.with_index(image), CoordsXYZ::from_xy(pos, height), xyz(0, 0, z - 1));
        height += z;
        count = (count + 1) % 4;
    }

    session.support_segments[segment].height = crossbeam_height as u16;
    session.support_segments[segment].slope = SUPPORTS_SLOPE_ABOVE_SCENERY;

    let mut height = original_height;
    let segment = original_segment;
    if special == 0 {
        return true;
    }
    let mut special = special;
    if special < 0 {
        special = -special;
        height -= 1;
    }

    let pos = SUPPORT_BOUND_BOXES[segment];
    let bound_box_offset = CoordsXYZ::from_xy(pos, height);
    let top = height + special;
    loop {
        let z = (height + 16).min(top) - height;
        if z <= 0 {
            break;
        }
        let image = SPECIAL_POLE_IMAGES[t].beam_id + (z - 1) as u32;
        session.add_image_as_parent(
            template.with_index(image),
            CoordsXYZ::from_xy(pos, height),
            BoundBoxXYZ::new(bound_box_offset, CoordsXYZ::ZERO),
        );
        height += z;
    }

    true
}
