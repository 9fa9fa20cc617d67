use trackpaint_geom::{Direction, xyz};
use trackpaint_session::{ColourScheme, ImageIndex, PaintSession};

use crate::element::TrackElement;
use crate::paint::add_image_at;
use crate::sprites::*;

struct PhotoRig {
    sign: ImageIndex,
    camera: ImageIndex,
    flash: ImageIndex,
    positions: [(i32, i32); 3],
}

#[rustfmt::skip]
const PHOTO_RIGS: [PhotoRig; 4] = [
    PhotoRig { sign: SPR_ON_RIDE_PHOTO_SIGN_SW_NE, camera: SPR_ON_RIDE_PHOTO_CAMERA_S, flash: SPR_ON_RIDE_PHOTO_CAMERA_FLASH_S, positions: [(26, 0), (26, 31), (6, 0)] },
    PhotoRig { sign: SPR_ON_RIDE_PHOTO_SIGN_NW_SE, camera: SPR_ON_RIDE_PHOTO_CAMERA_W, flash: SPR_ON_RIDE_PHOTO_CAMERA_FLASH_W, positions: [(0, 6), (31, 6), (0, 26)] },
    PhotoRig { sign: SPR_ON_RIDE_PHOTO_SIGN_NE_SW, camera: SPR_ON_RIDE_PHOTO_CAMERA_N, flash: SPR_ON_RIDE_PHOTO_CAMERA_FLASH_N, positions: [(6, 0), (6, 31), (26, 31)] },
    PhotoRig { sign: SPR_ON_RIDE_PHOTO_SIGN_SE_NW, camera: SPR_ON_RIDE_PHOTO_CAMERA_E, flash: SPR_ON_RIDE_PHOTO_CAMERA_FLASH_E, positions: [(0, 26), (31, 26), (31, 6)] },
];

/// Sign on both sides of the track plus the camera, which flashes while a photo is taken.
pub fn onride_photo_paint(session: &mut PaintSession, direction: Direction, height: i32, element: &TrackElement) {
    let rig = &PHOTO_RIGS[(direction & 3) as usize];
    let template = session.track_colour(ColourScheme::Misc);
    let third = if element.is_taking_photo() { rig.flash } else { rig.camera };
    let images = [rig.sign, rig.sign, third];
    for (image, (x, y)) in images.into_iter().zip(rig.positions) {
        add_image_at(session, template.with_index(image), xyz(x, y, height), xyz(1, 1, 19));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elem::TrackElemType;

    #[test]
    fn flash_replaces_camera() {
        let element = TrackElement::new(TrackElemType::OnRidePhoto, 0);
        let mut idle = PaintSession::new();
        onride_photo_paint(&mut idle, 2, 16, &element);
        let mut flashing = PaintSession::new();
        onride_photo_paint(&mut flashing, 2, 16, &element.with_taking_photo(true));

        assert_eq!(idle.draw_calls().len(), 3);
        assert_eq!(flashing.draw_calls().len(), 3);
        assert_eq!(idle.draw_calls()[2].image.index, SPR_ON_RIDE_PHOTO_CAMERA_N);
        assert_eq!(flashing.draw_calls()[2].image.index, SPR_ON_RIDE_PHOTO_CAMERA_FLASH_N);
    }
}
