use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use super::error::QRError;

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Default, Hash)]
pub enum ECLevel {
    L = 0,
    #[default]
    M = 1,
    Q = 2,
    H = 3,
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let s = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(s)
    }
}

// Accepts both the single letter and the long name, case insensitive
impl FromStr for ECLevel {
    type Err = QRError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(Self::L),
            "m" | "medium" => Ok(Self::M),
            "q" | "quartile" => Ok(Self::Q),
            "h" | "high" => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel),
        }
    }
}
