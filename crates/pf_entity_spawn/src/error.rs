use pf_core::{Bounds, EntitySize};

/// Error type for placement requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The play area is smaller than the entity in at least one dimension.
    OutOfRange { bounds: Bounds, size: EntitySize },
    /// Every attempt in the retry budget landed on an occupied spot.
    Exhausted { attempts: u32 },
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { bounds, size } => write!(
                f,
                "play area {}x{} cannot hold an entity of size {}x{}",
                bounds.width, bounds.height, size.width, size.height
            ),
            Self::Exhausted { attempts } => {
                write!(f, "no free position found after {} attempts", attempts)
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Error type for spawn configuration I/O and validation.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Ron(ron::Error),
    RonSpanned(ron::error::SpannedError),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(err: ron::Error) -> Self {
        Self::Ron(err)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonSpanned(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Ron(e) => write!(f, "RON serialization error: {}", e),
            Self::RonSpanned(e) => write!(f, "RON parse error: {}", e),
            Self::Invalid(msg) => write!(f, "invalid spawn config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Ron(e) => Some(e),
            Self::RonSpanned(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}
