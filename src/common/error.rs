use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum QRError {
    // Encoder
    EmptyData,
    DataTooLong,

    // Configuration
    UnknownShape(String),
    InvalidPadding,
    InvalidSize,
    InvalidECLevel,

    // Grid
    InvalidGrid,
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match self {
            // Encoder
            Self::EmptyData => "Empty data",
            Self::DataTooLong => "Data too long",

            // Configuration
            Self::UnknownShape(name) => return write!(f, "Unknown shape: {name}"),
            Self::InvalidPadding => "Padding must lie in [0, 1)",
            Self::InvalidSize => "Invalid target size",
            Self::InvalidECLevel => "Invalid error correction level",

            // Grid
            Self::InvalidGrid => "Grid data length does not match size squared",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;
