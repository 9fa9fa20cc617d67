//! Support-structure placement beneath track pieces.
#![forbid(unsafe_code)]

pub mod kind;
pub mod metal;
pub mod wooden;

pub use kind::{MetalSupportType, SupportType, WoodenSupportType};
pub use metal::metal_a_supports_paint_setup;
pub use wooden::{SPR_G2_SUPPORT_BEGIN, wooden_a_supports_paint_setup, wooden_b_supports_paint_setup};

use trackpaint_session::{ColourTemplate, ImageId, PaintSession, ViewFlags};

/// Colour to draw supports with, or `None` when the view hides them entirely.
pub(crate) fn visible_support_template(session: &PaintSession, template: ImageId) -> Option<ImageId> {
    if !session.view_flags.contains(ViewFlags::HIDE_SUPPORTS) {
        return Some(template);
    }
    if session.view_flags.contains(ViewFlags::INVISIBLE_SUPPORTS) {
        return None;
    }
    Some(ImageId::template(ColourTemplate::Darken))
}
