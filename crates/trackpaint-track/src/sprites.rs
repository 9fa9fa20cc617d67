//! Sprite indices shared by several ride types.

use trackpaint_session::ImageIndex;

pub const SPR_FLOOR_PLANKS: ImageIndex = 3395;
pub const SPR_FLOOR_PLANKS_90_DEG: ImageIndex = 3396;
pub const SPR_FLOOR_PLANKS_N_SEGMENT: ImageIndex = 3401;
pub const SPR_FLOOR_PLANKS_E_SEGMENT: ImageIndex = 3402;
pub const SPR_FLOOR_PLANKS_S_SEGMENT: ImageIndex = 3403;
pub const SPR_FLOOR_PLANKS_W_SEGMENT: ImageIndex = 3404;

pub const SPR_STATION_PLATFORM_SW_NE: ImageIndex = 22362;
pub const SPR_STATION_PLATFORM_NW_SE: ImageIndex = 22363;
pub const SPR_STATION_PLATFORM_FENCED_SW_NE: ImageIndex = 22364;
pub const SPR_STATION_PLATFORM_FENCED_NW_SE: ImageIndex = 22365;
pub const SPR_STATION_PLATFORM_BEGIN_FENCED_SW_NE: ImageIndex = 22366;
pub const SPR_STATION_PLATFORM_BEGIN_FENCED_NW_SE: ImageIndex = 22367;
pub const SPR_STATION_PLATFORM_BEGIN_SW_NE: ImageIndex = 22368;
pub const SPR_STATION_PLATFORM_BEGIN_NW_SE: ImageIndex = 22369;
pub const SPR_STATION_FENCE_SW_NE: ImageIndex = 22370;
pub const SPR_STATION_FENCE_NW_SE: ImageIndex = 22371;
pub const SPR_STATION_BEGIN_ANGLE_FENCE_SW_NE: ImageIndex = 22372;
pub const SPR_STATION_BEGIN_ANGLE_FENCE_NW_SE: ImageIndex = 22373;
pub const SPR_STATION_FENCE_SMALL_NW_SE: ImageIndex = 22374;
pub const SPR_STATION_FENCE_SMALL_SW_NE: ImageIndex = 22375;
pub const SPR_STATION_PLATFORM_FENCED_END_RED_LIGHT_SW_NE: ImageIndex = 22380;
pub const SPR_STATION_PLATFORM_FENCED_END_RED_LIGHT_NW_SE: ImageIndex = 22381;
pub const SPR_STATION_PLATFORM_FENCED_END_GREEN_LIGHT_SW_NE: ImageIndex = 22382;
pub const SPR_STATION_PLATFORM_FENCED_END_GREEN_LIGHT_NW_SE: ImageIndex = 22383;
pub const SPR_STATION_LIGHT_BACK_NE_SW: ImageIndex = 22384;
pub const SPR_STATION_LIGHT_BACK_NW_SE: ImageIndex = 22385;
pub const SPR_STATION_LIGHT_BACK_ANGLE_FENCED_NE_SW: ImageIndex = 22386;
pub const SPR_STATION_LIGHT_BACK_ANGLE_FENCED_NW_SE: ImageIndex = 22387;
pub const SPR_STATION_PLATFORM_END_RED_LIGHT_SW_NE: ImageIndex = 22388;
pub const SPR_STATION_PLATFORM_END_RED_LIGHT_NW_SE: ImageIndex = 22389;
pub const SPR_STATION_PLATFORM_END_GREEN_LIGHT_SW_NE: ImageIndex = 22390;
pub const SPR_STATION_PLATFORM_END_GREEN_LIGHT_NW_SE: ImageIndex = 22391;

pub const SPR_STATION_NARROW_EDGE_SE: ImageIndex = 22412;
pub const SPR_STATION_NARROW_EDGE_SW: ImageIndex = 22413;
pub const SPR_STATION_NARROW_EDGE_FENCED_NW: ImageIndex = 22414;
pub const SPR_STATION_NARROW_EDGE_FENCED_NE: ImageIndex = 22415;
pub const SPR_STATION_NARROW_EDGE_NW: ImageIndex = 22416;
pub const SPR_STATION_NARROW_EDGE_NE: ImageIndex = 22417;

pub const SPR_STATION_BASE_A_SW_NE: ImageIndex = 22426;
pub const SPR_STATION_BASE_A_NW_SE: ImageIndex = 22427;
pub const SPR_STATION_BASE_B_SW_NE: ImageIndex = 22428;
pub const SPR_STATION_BASE_B_NW_SE: ImageIndex = 22429;
pub const SPR_STATION_BASE_D: ImageIndex = 22432;

pub const SPR_ON_RIDE_PHOTO_CAMERA_N: ImageIndex = 25615;
pub const SPR_ON_RIDE_PHOTO_CAMERA_E: ImageIndex = 25616;
pub const SPR_ON_RIDE_PHOTO_CAMERA_S: ImageIndex = 25617;
pub const SPR_ON_RIDE_PHOTO_CAMERA_W: ImageIndex = 25618;
pub const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_N: ImageIndex = 25619;
pub const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_E: ImageIndex = 25620;
pub const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_S: ImageIndex = 25621;
pub const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_W: ImageIndex = 25622;
pub const SPR_ON_RIDE_PHOTO_SIGN_SW_NE: ImageIndex = 25623;
pub const SPR_ON_RIDE_PHOTO_SIGN_NW_SE: ImageIndex = 25624;
pub const SPR_ON_RIDE_PHOTO_SIGN_NE_SW: ImageIndex = 25625;
pub const SPR_ON_RIDE_PHOTO_SIGN_SE_NW: ImageIndex = 25626;
