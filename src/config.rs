use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use trackpaint_geom::CoordsXY;
use trackpaint_session::{PaintSession, SessionFlags, ViewFlags};
use trackpaint_supports::SupportType;
use trackpaint_track::{Ride, TrackElemType, TrackElement};

/// View and tile setup a paint run starts from.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Camera rotation, 0..4.
    pub rotation: u8,
    /// Track height in world units.
    pub height: i32,
    pub surface: SurfaceConfig,
    pub view: ViewConfig,
    pub water_height: i32,
    /// Tile position in world units.
    pub map_position: [i32; 2],
    pub ride: Ride,
    pub element: ElementFlags,
    /// Overrides the ride type's own supports.
    pub support_type: Option<SupportType>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub height: u16,
    pub slope: u8,
    /// Paint as though the surface has not been drawn yet.
    pub unpainted: bool,
    /// Edges of a footpath at track height, one bit per edge.
    pub path_edges: Option<u8>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub hide_supports: bool,
    pub invisible_supports: bool,
    pub track_piece_preview: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ElementFlags {
    pub chain: bool,
    pub ghost: bool,
    pub highlight: bool,
    pub station_index: u8,
    pub taking_photo: bool,
    pub green_light: bool,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            rotation: 0,
            height: 48,
            surface: SurfaceConfig::default(),
            view: ViewConfig::default(),
            water_height: 0,
            map_position: [0, 0],
            ride: Ride::default(),
            element: ElementFlags::default(),
            support_type: None,
        }
    }
}

impl PaintConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: PaintConfig = toml::from_str(toml_str)?;
        if cfg.rotation > 3 {
            return Err(format!("rotation {} out of range 0..4", cfg.rotation).into());
        }
        if cfg.surface.path_edges.is_some_and(|edges| edges > 0x0F) {
            return Err("path_edges only has four edge bits".into());
        }
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Fresh session laid out the way this config describes.
    pub fn session(&self) -> PaintSession {
        let mut session = PaintSession::new().with_surface(self.surface.height, self.surface.slope);
        session.current_rotation = self.rotation & 3;
        session.map_position = CoordsXY::new(self.map_position[0], self.map_position[1]);
        session.water_height = self.water_height;
        session.ghost = self.element.ghost;
        session.path_edges_on_same_height = self.surface.path_edges;
        if self.surface.unpainted {
            session.flags.remove(SessionFlags::PASSED_SURFACE);
        }
        session.flags.set(SessionFlags::TRACK_PIECE_PREVIEW, self.view.track_piece_preview);
        session.view_flags.set(ViewFlags::HIDE_SUPPORTS, self.view.hide_supports);
        session.view_flags.set(ViewFlags::INVISIBLE_SUPPORTS, self.view.invisible_supports);
        session
    }

    pub fn element(&self, elem_type: TrackElemType) -> TrackElement {
        let flags = self.element;
        TrackElement::new(elem_type, self.height)
            .with_chain(flags.chain)
            .with_ghost(flags.ghost)
            .with_highlight(flags.highlight)
            .with_station_index(flags.station_index)
            .with_taking_photo(flags.taking_photo)
            .with_green_light(flags.green_light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackpaint_supports::MetalSupportType;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = PaintConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.height, 48);
        assert!(cfg.support_type.is_none());
        assert!(cfg.session().passed_surface());
    }

    #[test]
    fn tables_fill_session_and_element() {
        let cfg = PaintConfig::from_toml_str(
            r#"
            rotation = 2
            height = 64
            map_position = [96, 32]
            support_type = { metal = "tubes" }

            [surface]
            height = 16
            unpainted = true

            [element]
            chain = true
            taking_photo = true

            [[ride.stations]]
            entrance = { x = 3, y = 1 }
            "#,
        )
        .unwrap();

        let session = cfg.session();
        assert_eq!(session.current_rotation, 2);
        assert_eq!(session.map_position, CoordsXY::new(96, 32));
        assert_eq!(session.surface.height, 16);
        assert!(!session.passed_surface());

        let element = cfg.element(TrackElemType::OnRidePhoto);
        assert!(element.has_chain() && element.is_taking_photo());
        assert_eq!(element.base_z(), 64);
        assert_eq!(cfg.support_type, Some(SupportType::Metal(MetalSupportType::Tubes)));
        assert_eq!(cfg.ride.stations.len(), 1);
    }

    #[test]
    fn rotation_is_checked() {
        assert!(PaintConfig::from_toml_str("rotation = 7").is_err());
    }

    #[test]
    fn path_edges_reach_the_session() {
        let cfg = PaintConfig::from_toml_str("[surface]\npath_edges = 5").unwrap();
        assert_eq!(cfg.session().path_edges_on_same_height, Some(5));
        assert_eq!(PaintConfig::default().session().path_edges_on_same_height, None);
        assert!(PaintConfig::from_toml_str("[surface]\npath_edges = 16").is_err());
    }
}
