use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Could not recover mandatory field `{field}`")]
    InvalidState { field: &'static str },
    #[error("Payload does not belong to a game this build knows")]
    UnsupportedGame,
}
