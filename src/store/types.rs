use super::states::STATES;
use crate::error::PlannerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Handle to one entry of the static state table.
///
/// A `StateCode` can only be produced by resolving a code or name against the
/// table, so `code()` and `name()` never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateCode(u8);

impl StateCode {
    #[inline(always)]
    pub(crate) fn from_index(idx: usize) -> Self { Self(idx as u8) }

    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }

    pub fn code(&self) -> &'static str { STATES[self.index()].code }
    pub fn name(&self) -> &'static str { STATES[self.index()].name }

    /// Resolves a short code such as `"or"` or `"OR"`.
    pub fn parse(code: &str) -> Result<Self, PlannerError> {
        let wanted = code.trim().to_ascii_uppercase();
        STATES
            .iter()
            .position(|r| r.code == wanted)
            .map(Self::from_index)
            .ok_or(PlannerError::UnknownState { code: wanted })
    }

    /// Resolves a full name such as `"New Mexico"`. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        STATES
            .iter()
            .position(|r| r.name.eq_ignore_ascii_case(wanted))
            .map(Self::from_index)
    }

    pub fn all() -> impl Iterator<Item = StateCode> {
        (0..STATES.len()).map(Self::from_index)
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StateCode {
    type Err = PlannerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl Serialize for StateCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for StateCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Census top-level region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Northeast,
    Midwest,
    South,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Northeast, Region::Midwest, Region::South, Region::West];

    pub fn code(&self) -> &'static str {
        match self {
            Region::Northeast => "NE",
            Region::Midwest => "MW",
            Region::South => "S",
            Region::West => "W",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::Northeast => "Northeast",
            Region::Midwest => "Midwest",
            Region::South => "South",
            Region::West => "West",
        }
    }

    pub fn sub_regions(&self) -> &'static [SubRegion] {
        use SubRegion::*;
        match self {
            Region::Northeast => &[NewEngland, MiddleAtlantic],
            Region::Midwest => &[EastNorthCentral, WestNorthCentral],
            Region::South => &[SouthAtlantic, EastSouthCentral, WestSouthCentral],
            Region::West => &[Mountain, Pacific],
        }
    }
}

impl FromStr for Region {
    type Err = PlannerError;

    /// Accepts either the short code (`"W"`) or the full name (`"west"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(s) || r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlannerError::UnknownRegion(s.to_string()))
    }
}

/// Census division. Note that `"NE"` means New England here, not Northeast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubRegion {
    NewEngland,
    MiddleAtlantic,
    EastNorthCentral,
    WestNorthCentral,
    SouthAtlantic,
    EastSouthCentral,
    WestSouthCentral,
    Mountain,
    Pacific,
}

impl SubRegion {
    pub const ALL: [SubRegion; 9] = [
        SubRegion::NewEngland,
        SubRegion::MiddleAtlantic,
        SubRegion::EastNorthCentral,
        SubRegion::WestNorthCentral,
        SubRegion::SouthAtlantic,
        SubRegion::EastSouthCentral,
        SubRegion::WestSouthCentral,
        SubRegion::Mountain,
        SubRegion::Pacific,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SubRegion::NewEngland => "NE",
            SubRegion::MiddleAtlantic => "MA",
            SubRegion::EastNorthCentral => "ENC",
            SubRegion::WestNorthCentral => "WNC",
            SubRegion::SouthAtlantic => "SA",
            SubRegion::EastSouthCentral => "ESC",
            SubRegion::WestSouthCentral => "WSC",
            SubRegion::Mountain => "M",
            SubRegion::Pacific => "P",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SubRegion::NewEngland => "New England",
            SubRegion::MiddleAtlantic => "Middle Atlantic",
            SubRegion::EastNorthCentral => "East North Central",
            SubRegion::WestNorthCentral => "West North Central",
            SubRegion::SouthAtlantic => "South Atlantic",
            SubRegion::EastSouthCentral => "East South Central",
            SubRegion::WestSouthCentral => "West South Central",
            SubRegion::Mountain => "Mountain",
            SubRegion::Pacific => "Pacific",
        }
    }
}

impl FromStr for SubRegion {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SubRegion::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(s) || r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlannerError::UnknownRegion(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Classification {
    pub top: Region,
    pub sub: SubRegion,
}

/// One row of the static table.
#[derive(Debug, Clone, Copy)]
pub struct StateRecord {
    pub code: &'static str,
    pub name: &'static str,
    /// `None` for territories.
    pub class: Option<Classification>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        let or = StateCode::parse(" or ").unwrap();
        assert_eq!(or.code(), "OR");
        assert_eq!(or.name(), "Oregon");
        assert_eq!("wa".parse::<StateCode>().unwrap().code(), "WA");
    }

    #[test]
    fn test_unknown_code() {
        let err = StateCode::parse("zz").unwrap_err();
        assert_eq!(err, PlannerError::UnknownState { code: "ZZ".into() });
    }

    #[test]
    fn test_from_name_handles_spaces() {
        assert_eq!(StateCode::from_name("new mexico").map(|s| s.code()), Some("NM"));
        assert!(StateCode::from_name("Atlantis").is_none());
    }

    #[test]
    fn test_region_codes_are_contextual() {
        // "NE" is Northeast as a region and New England as a sub-region.
        assert_eq!("NE".parse::<Region>().unwrap(), Region::Northeast);
        assert_eq!("NE".parse::<SubRegion>().unwrap(), SubRegion::NewEngland);
        assert_eq!("mountain".parse::<SubRegion>().unwrap(), SubRegion::Mountain);
        assert!("X".parse::<Region>().is_err());
    }

    #[test]
    fn test_serde_round_trip_through_code() {
        let ca = StateCode::parse("CA").unwrap();
        let json = serde_json::to_string(&ca).unwrap();
        assert_eq!(json, "\"CA\"");
        let back: StateCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ca);
        assert!(serde_json::from_str::<StateCode>("\"QQ\"").is_err());
    }
}
