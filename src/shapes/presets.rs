use super::{ShapeRef, Target};
use crate::builder::{DecorationConfig, Intermediate};
use crate::common::{QRError, QRResult};

// Named dot styles
//------------------------------------------------------------------------------

pub const PRESET_NAMES: [&str; 24] = [
    "square",
    "squarePadding",
    "squareRounded",
    "squareRoundedPadding",
    "heart",
    "circle",
    "circlePadding",
    "star",
    "octagon",
    "plus",
    "lines",
    "linesFilled",
    "xShape",
    "xShapeInter",
    "dotsInterVert",
    "dotsInterHor",
    "dotsInterFill",
    "dotsInterThinHor",
    "dotsInterThinVert",
    "dotsInterThinHorVert",
    "dotsInterThinEnds",
    "diamond",
    "squareHollow",
    "squareHollow2",
];

#[derive(Clone, Copy)]
enum Connector {
    Line,
    Thin,
    Wide,
}

impl Connector {
    fn intermediate(self) -> Intermediate {
        match self {
            Self::Line => Intermediate::new(ShapeRef::named("line"), Target::new(3.0, 3.0, true)),
            Self::Thin => {
                Intermediate::new(ShapeRef::named("thinLine"), Target::new(3.0, 1.0, false))
            }
            Self::Wide => {
                Intermediate::new(ShapeRef::named("wideLine"), Target::new(2.0, 1.8, false))
            }
        }
    }
}

#[derive(Clone, Copy)]
struct Fill {
    horizontal: bool,
    vertical: bool,
    both: bool,
    ends: bool,
}

const NONE: Fill = Fill { horizontal: false, vertical: false, both: false, ends: false };
const HOR: Fill = Fill { horizontal: true, ..NONE };
const VERT: Fill = Fill { vertical: true, ..NONE };
const HOR_VERT: Fill = Fill { horizontal: true, vertical: true, ..NONE };
const BOTH: Fill = Fill { both: true, ..NONE };
const ENDS: Fill = Fill { ends: true, ..HOR_VERT };

impl DecorationConfig {
    /// Dot style by name: base shape, padding and connectors
    pub fn preset(name: &str) -> QRResult<Self> {
        use Connector::*;

        let (shape, padding, connector, fill) = match name {
            "square" | "squareRounded" | "heart" | "circle" | "octagon" | "plus" | "diamond"
            | "squareHollow" | "squareHollow2" | "xShape" => (name, 0.0, None, NONE),
            "squarePadding" => ("square", 0.1, None, NONE),
            "squareRoundedPadding" => ("squareRounded", 0.1, None, NONE),
            "circlePadding" => ("circle", 0.1, None, NONE),
            "star" => ("star", 0.1, None, NONE),
            "lines" => ("square", 0.33, Some(Line), HOR_VERT),
            "linesFilled" => ("square", 0.33, Some(Line), BOTH),
            "xShapeInter" => ("xShape", 0.0, Some(Thin), HOR_VERT),
            "dotsInterVert" => ("circle", 0.1, Some(Wide), VERT),
            "dotsInterHor" => ("circle", 0.1, Some(Wide), HOR),
            "dotsInterFill" => ("circle", 0.1, Some(Wide), BOTH),
            "dotsInterThinHor" => ("circle", 0.2, Some(Thin), HOR),
            "dotsInterThinVert" => ("circle", 0.2, Some(Thin), VERT),
            "dotsInterThinHorVert" => ("circle", 0.2, Some(Thin), HOR_VERT),
            "dotsInterThinEnds" => ("circle", 0.2, Some(Thin), ENDS),
            _ => return Err(QRError::UnknownShape(name.to_string())),
        };

        Ok(Self {
            dot_shape: ShapeRef::named(shape),
            intermediate: connector.map(Connector::intermediate),
            horizontal_fill: fill.horizontal,
            vertical_fill: fill.vertical,
            fill: fill.both,
            padding,
            only_dots_on_ends: fill.ends,
            ..Self::default()
        })
    }
}
