use serde::Serialize;

/// Index into the sprite atlas.
pub type ImageIndex = u32;

/// Table entry for a shape that cannot occur in a given direction. Never drawn.
pub const IMAGE_INDEX_UNDEFINED: ImageIndex = u32::MAX;

/// Which of the ride's colour slots a sprite is remapped with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum ColourScheme {
    Track,
    Supports,
    Misc,
}

/// Colour handling the renderer applies to a sprite. Paint code only forwards it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColourTemplate {
    Scheme(ColourScheme),
    /// Translucent ghost of an element being placed.
    Ghost,
    /// Darkened supports when the view hides them.
    Darken,
    /// Track scheme with remap colour 2 overwritten by remap colour 1, for
    /// sprites drawn in two track colours on a ride that has only one.
    TrackSingleRemap,
    /// The sprite's own palette, no remap.
    Plain,
    /// Translucent darkening overlay.
    Shadow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ImageId {
    pub index: ImageIndex,
    pub template: ColourTemplate,
}

impl ImageId {
    #[inline]
    pub const fn new(index: ImageIndex, template: ColourTemplate) -> Self {
        Self { index, template }
    }

    /// Template without a sprite yet, filled in with `with_index`.
    #[inline]
    pub const fn template(template: ColourTemplate) -> Self {
        Self { index: IMAGE_INDEX_UNDEFINED, template }
    }

    #[inline]
    pub const fn with_index(self, index: ImageIndex) -> Self {
        Self { index, template: self.template }
    }

    #[inline]
    pub const fn with_index_offset(self, offset: u32) -> Self {
        Self { index: self.index.wrapping_add(offset), template: self.template }
    }

    #[inline]
    pub const fn is_undefined(self) -> bool {
        self.index == IMAGE_INDEX_UNDEFINED
    }
}
