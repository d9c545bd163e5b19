use std::fmt;

/// Errors from the host-facing parts of the library.
///
/// Rendering never fails; these only come from parameter lookup by name and
/// from offline export.
#[derive(Debug)]
pub enum GendynError {
    UnknownParameter(String),
    Wav(String),
    Io(std::io::Error),
}

impl fmt::Display for GendynError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GendynError::UnknownParameter(name) => write!(f, "Unknown parameter: {}", name),
            GendynError::Wav(msg) => write!(f, "WAV Error: {}", msg),
            GendynError::Io(err) => write!(f, "I/O Error: {}", err),
        }
    }
}

impl std::error::Error for GendynError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GendynError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GendynError {
    fn from(err: std::io::Error) -> Self {
        GendynError::Io(err)
    }
}

#[cfg(feature = "wav-export")]
impl From<hound::Error> for GendynError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(io) => GendynError::Io(io),
            other => GendynError::Wav(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GendynError::UnknownParameter("volume".to_string());
        assert_eq!(err.to_string(), "Unknown parameter: volume");
    }

    #[test]
    fn test_io_source() {
        use std::error::Error;
        let err: GendynError = std::io::Error::other("disk full").into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("disk full"));
    }
}
