//! Static reference data: every known state code, its full name, census
//! classification and land borders.

use super::types::{Classification, Region, StateRecord, SubRegion};

const fn rec(code: &'static str, name: &'static str, top: Region, sub: SubRegion) -> StateRecord {
    StateRecord { code, name, class: Some(Classification { top, sub }) }
}

const fn territory(code: &'static str, name: &'static str) -> StateRecord {
    StateRecord { code, name, class: None }
}

use super::types::Region::{Midwest as MW, Northeast as NE, South as S, West as W};
use super::types::SubRegion::*;

pub(crate) const STATES: [StateRecord; 59] = [
    rec("AL", "Alabama", S, EastSouthCentral),
    rec("AK", "Alaska", W, Pacific),
    territory("AS", "American Samoa"),
    rec("AZ", "Arizona", W, Mountain),
    rec("AR", "Arkansas", S, WestSouthCentral),
    rec("CA", "California", W, Pacific),
    rec("CO", "Colorado", W, Mountain),
    rec("CT", "Connecticut", NE, NewEngland),
    rec("DE", "Delaware", S, SouthAtlantic),
    rec("DC", "District of Columbia", S, SouthAtlantic),
    rec("FL", "Florida", S, SouthAtlantic),
    rec("GA", "Georgia", S, SouthAtlantic),
    rec("HI", "Hawaii", W, Pacific),
    rec("ID", "Idaho", W, Mountain),
    rec("IL", "Illinois", MW, EastNorthCentral),
    rec("IN", "Indiana", MW, EastNorthCentral),
    rec("IA", "Iowa", MW, WestNorthCentral),
    rec("KS", "Kansas", MW, WestNorthCentral),
    rec("KY", "Kentucky", S, EastSouthCentral),
    rec("LA", "Louisiana", S, WestSouthCentral),
    rec("ME", "Maine", NE, NewEngland),
    rec("MD", "Maryland", S, SouthAtlantic),
    rec("MA", "Massachusetts", NE, NewEngland),
    rec("MI", "Michigan", MW, EastNorthCentral),
    rec("MN", "Minnesota", MW, WestNorthCentral),
    rec("MS", "Mississippi", S, EastSouthCentral),
    rec("MO", "Missouri", MW, WestNorthCentral),
    rec("MT", "Montana", W, Mountain),
    rec("NE", "Nebraska", MW, WestNorthCentral),
    rec("NV", "Nevada", W, Mountain),
    rec("NH", "New Hampshire", NE, NewEngland),
    rec("NJ", "New Jersey", NE, MiddleAtlantic),
    rec("NM", "New Mexico", W, Mountain),
    rec("NY", "New York", NE, MiddleAtlantic),
    rec("NC", "North Carolina", S, SouthAtlantic),
    rec("ND", "North Dakota", MW, WestNorthCentral),
    rec("OH", "Ohio", MW, EastNorthCentral),
    rec("OK", "Oklahoma", S, WestSouthCentral),
    rec("OR", "Oregon", W, Pacific),
    rec("PA", "Pennsylvania", NE, MiddleAtlantic),
    rec("RI", "Rhode Island", NE, NewEngland),
    rec("SC", "South Carolina", S, SouthAtlantic),
    rec("SD", "South Dakota", MW, WestNorthCentral),
    rec("TN", "Tennessee", S, EastSouthCentral),
    rec("TX", "Texas", S, WestSouthCentral),
    rec("UT", "Utah", W, Mountain),
    rec("VT", "Vermont", NE, NewEngland),
    rec("VA", "Virginia", S, SouthAtlantic),
    rec("WA", "Washington", W, Pacific),
    rec("WI", "Wisconsin", MW, EastNorthCentral),
    rec("WV", "West Virginia", S, SouthAtlantic),
    rec("WY", "Wyoming", W, Mountain),
    territory("FM", "Federated States of Micronesia"),
    territory("GU", "Guam"),
    territory("MH", "Marshall Islands"),
    territory("MP", "Northern Mariana Is."),
    territory("PW", "Palau Island"),
    territory("PR", "Puerto Rico"),
    territory("VI", "Virgin Islands"),
];

/// Land borders of the contiguous states. States absent here (AK, HI, DC and the
/// territories) have no entry at all, which is distinct from an empty list.
pub(crate) const BORDERS: &[(&str, &[&str])] = &[
    ("AL", &["MS", "FL", "GA", "TN"]),
    ("AZ", &["CA", "NV", "UT", "NM"]),
    ("AR", &["MS", "OK", "TX", "LA", "TN", "MO"]),
    ("CA", &["AZ", "NV", "OR"]),
    ("CO", &["UT", "NM", "WY", "OK", "KS", "NE"]),
    ("CT", &["NY", "RI", "MA"]),
    ("DE", &["PA", "MD"]),
    ("FL", &["AL", "GA"]),
    ("GA", &["FL", "AL", "SC", "NC", "TN"]),
    ("ID", &["WA", "OR", "MT", "WY", "NV", "UT"]),
    ("IL", &["WI", "IA", "IN", "KY", "MO"]),
    ("IN", &["IL", "MI", "OH", "KY"]),
    ("IA", &["MN", "WI", "IL", "MO", "NE", "SD"]),
    ("KS", &["NE", "MO", "CO", "OK"]),
    ("KY", &["MO", "TN", "IL", "IN", "OH", "WV", "VA"]),
    ("LA", &["TX", "AR", "MS"]),
    ("ME", &["NH"]),
    ("MD", &["PA", "DE", "VA", "WV"]),
    ("MA", &["RI", "CT", "NH", "VT", "NY"]),
    ("MI", &["IN", "OH"]),
    ("MN", &["ND", "SD", "IA", "WI"]),
    ("MS", &["LA", "AR", "TN", "AL"]),
    ("MO", &["IA", "NE", "KS", "OK", "AR", "TN", "KY", "IL"]),
    ("MT", &["ID", "WY", "SD", "ND"]),
    ("NE", &["WY", "SD", "IA", "MO", "KS", "CO"]),
    ("NV", &["CA", "OR", "ID", "UT", "AZ"]),
    ("NH", &["ME", "VT", "MA"]),
    ("NJ", &["PA", "NY"]),
    ("NM", &["AZ", "TX", "OK", "CO"]),
    ("NY", &["VT", "MA", "CT", "NJ", "PA"]),
    ("NC", &["SC", "GA", "TN", "VA"]),
    ("ND", &["MT", "SD", "MN"]),
    ("OH", &["MI", "IN", "KY", "WV", "PA"]),
    ("OK", &["CO", "KS", "MO", "AR", "TX", "NM"]),
    ("OR", &["WA", "CA", "ID", "NV"]),
    ("PA", &["OH", "WV", "MD", "NY", "NJ", "DE"]),
    ("RI", &["MA", "CT"]),
    ("SC", &["GA", "NC"]),
    ("SD", &["ND", "NE", "MT", "WY", "IA", "MN"]),
    ("TN", &["AR", "MO", "KY", "VA", "NC", "GA", "AL", "MS"]),
    ("TX", &["NM", "OK", "AR", "LA"]),
    ("UT", &["ID", "NV", "AZ", "CO", "WY"]),
    ("VT", &["NH", "NY", "MA"]),
    ("VA", &["KY", "WV", "TN", "NC", "MD"]),
    ("WA", &["OR", "ID"]),
    ("WV", &["PA", "OH", "KY", "VA", "MD"]),
    ("WI", &["MN", "IA", "IL"]),
    ("WY", &["MT", "ID", "UT", "CO", "NE", "SD"]),
];
