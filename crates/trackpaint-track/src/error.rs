use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown track element `{0}`")]
    UnknownTrackElement(String),
    #[error("unknown ride type `{0}`")]
    UnknownRideType(String),
}
