//! Eruption-era palette
//!
//! Fixed, ordered set of "last known eruption" codes with their
//! legend label and marker color.

use serde::Serialize;

/// Last known eruption era, in legend order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Era {
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    #[serde(rename = "U")]
    Undated,
    #[serde(rename = "Q")]
    Quaternary,
    #[serde(rename = "?")]
    Uncertain,
    Unknown,
}

impl Era {
    /// All eras in legend order
    pub const ALL: [Era; 11] = [
        Era::D1,
        Era::D2,
        Era::D3,
        Era::D4,
        Era::D5,
        Era::D6,
        Era::D7,
        Era::Undated,
        Era::Quaternary,
        Era::Uncertain,
        Era::Unknown,
    ];

    /// Look up a raw dataset code, falling back to `Unknown`
    pub fn from_code(code: &str) -> Era {
        Era::ALL
            .iter()
            .copied()
            .find(|era| era.code() == code)
            .unwrap_or(Era::Unknown)
    }

    pub fn code(self) -> &'static str {
        match self {
            Era::D1 => "D1",
            Era::D2 => "D2",
            Era::D3 => "D3",
            Era::D4 => "D4",
            Era::D5 => "D5",
            Era::D6 => "D6",
            Era::D7 => "D7",
            Era::Undated => "U",
            Era::Quaternary => "Q",
            Era::Uncertain => "?",
            Era::Unknown => "Unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Era::D1 => "1964 or later",
            Era::D2 => "1900–1963",
            Era::D3 => "1800–1899",
            Era::D4 => "1700–1799",
            Era::D5 => "1500–1699",
            Era::D6 => "A.D. 1–1499",
            Era::D7 => "B.C. (Holocene)",
            Era::Undated => "Undated, probable Holocene",
            Era::Quaternary => "Quaternary hydrothermal",
            Era::Uncertain => "Uncertain Holocene",
            Era::Unknown => "Unknown",
        }
    }

    /// Marker color as RGB
    pub fn color(self) -> [u8; 3] {
        match self {
            Era::D1 => [0xff, 0x00, 0x08],
            Era::D2 => [0xff, 0x66, 0x00],
            Era::D3 => [0xff, 0x99, 0x00],
            Era::D4 => [0xff, 0xcc, 0x00],
            Era::D5 => [0xff, 0xff, 0x00],
            Era::D6 => [0xaa, 0xff, 0x00],
            Era::D7 => [0x55, 0xff, 0x55],
            Era::Undated => [0x55, 0xaa, 0xff],
            Era::Quaternary => [0x99, 0x99, 0xff],
            Era::Uncertain => [0xcc, 0xcc, 0xcc],
            Era::Unknown => [0x88, 0x88, 0x88],
        }
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        for era in Era::ALL {
            assert_eq!(Era::from_code(era.code()), era);
        }
    }

    #[test]
    fn test_unrecognized_code_is_unknown() {
        assert_eq!(Era::from_code("D8"), Era::Unknown);
        assert_eq!(Era::from_code(""), Era::Unknown);
        // Lookup is exact, like the dataset's keys
        assert_eq!(Era::from_code("d1"), Era::Unknown);
        assert_eq!(Era::from_code(" D1"), Era::Unknown);
    }

    #[test]
    fn test_palette_order() {
        let codes: Vec<&str> = Era::ALL.iter().map(|e| e.code()).collect();
        assert_eq!(
            codes,
            ["D1", "D2", "D3", "D4", "D5", "D6", "D7", "U", "Q", "?", "Unknown"]
        );
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Era::Uncertain).unwrap(), "\"?\"");
        assert_eq!(serde_json::to_string(&Era::D3).unwrap(), "\"D3\"");
    }
}
