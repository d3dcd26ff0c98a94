use crate::common::{ECLevel, ModuleGrid, QRResult};

// Symbol encoder. Turns text into the module grid of a QR symbol.
//------------------------------------------------------------------------------

/// Any encoder honouring this contract can feed the shape compiler. Grids are expected in the
/// standard orientation with finder patterns in the corners at rows/cols `0..7` and `N-7..N`,
/// leaving the `(N-7.., N-7..)` corner free.
pub trait Encoder {
    fn encode(&self, text: &str, ec_level: ECLevel) -> QRResult<ModuleGrid>;
}

impl<F> Encoder for F
where
    F: Fn(&str, ECLevel) -> QRResult<ModuleGrid>,
{
    fn encode(&self, text: &str, ec_level: ECLevel) -> QRResult<ModuleGrid> {
        self(text, ec_level)
    }
}
