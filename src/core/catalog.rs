// Closed catalog of trailer and container presets.
//
// Dimensions are stored in centimetres exactly as they appear on the
// data sheets. The catalog order is the order shown in the sidebar.

use std::fmt;
use std::str::FromStr;

/// Interior dimensions of a cargo unit, in centimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TrailerKey {
    Bus8Ep,
    Bus10Ep,
    Bus12Ep,
    #[default]
    Standard,
    Mega,
    ShipContainer20,
    ShipContainer40,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailerSpec {
    pub key: TrailerKey,
    pub label: &'static str,
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

impl TrailerSpec {
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            length: self.length,
            height: self.height,
        }
    }
}

pub static TRAILERS: [TrailerSpec; 7] = [
    TrailerSpec {
        key: TrailerKey::Bus8Ep,
        label: "Bus 8EP",
        width: 220.0,
        length: 430.0,
        height: 220.0,
    },
    TrailerSpec {
        key: TrailerKey::Bus10Ep,
        label: "Bus 10EP",
        width: 220.0,
        length: 490.0,
        height: 220.0,
    },
    TrailerSpec {
        key: TrailerKey::Bus12Ep,
        label: "Bus 12EP",
        width: 245.0,
        length: 490.0,
        height: 230.0,
    },
    TrailerSpec {
        key: TrailerKey::Standard,
        label: "Naczepa Standard",
        width: 245.0,
        length: 1360.0,
        height: 280.0,
    },
    TrailerSpec {
        key: TrailerKey::Mega,
        label: "Naczepa Mega",
        width: 245.0,
        length: 1360.0,
        height: 300.0,
    },
    TrailerSpec {
        key: TrailerKey::ShipContainer20,
        label: "Kontener Morski 20",
        width: 244.0,
        length: 590.0,
        height: 239.0,
    },
    TrailerSpec {
        key: TrailerKey::ShipContainer40,
        label: "Kontener Morski 40",
        width: 235.0,
        length: 1203.0,
        height: 239.0,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown trailer key `{0}`")]
    UnknownTrailer(String),
}

impl TrailerKey {
    pub const ALL: [TrailerKey; 7] = [
        TrailerKey::Bus8Ep,
        TrailerKey::Bus10Ep,
        TrailerKey::Bus12Ep,
        TrailerKey::Standard,
        TrailerKey::Mega,
        TrailerKey::ShipContainer20,
        TrailerKey::ShipContainer40,
    ];

    /// Stable identifier used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            TrailerKey::Bus8Ep => "bus8ep",
            TrailerKey::Bus10Ep => "bus10ep",
            TrailerKey::Bus12Ep => "bus12ep",
            TrailerKey::Standard => "standard",
            TrailerKey::Mega => "mega",
            TrailerKey::ShipContainer20 => "shipContainer20",
            TrailerKey::ShipContainer40 => "shipContainer40",
        }
    }

    pub fn spec(self) -> &'static TrailerSpec {
        // TRAILERS is laid out in the same order as ALL
        &TRAILERS[self as usize]
    }

    #[inline]
    pub fn dimensions(self) -> Dimensions {
        self.spec().dimensions()
    }
}

impl fmt::Display for TrailerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrailerKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrailerKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownTrailer(s.to_string()))
    }
}

/// Look up the dimensions for a catalog key coming from the DOM.
pub fn resolve_dimensions(key: &str) -> Result<Dimensions, CatalogError> {
    key.parse::<TrailerKey>().map(TrailerKey::dimensions)
}
