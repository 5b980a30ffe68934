use crate::analysis::Path;
use crate::compute::Itinerary;
use crate::store::StateCode;
use std::fmt::Write;

const SEPARATOR: &str = " => ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStyle {
    /// Suffix each stop with the temperature recorded there, e.g. `NM(51.9)`.
    pub with_temperatures: bool,
    /// Print `New Mexico` instead of `NM`.
    pub full_names: bool,
}

/// One line per itinerary.
pub fn format_itineraries(itineraries: &[Itinerary], style: ReportStyle) -> Vec<String> {
    itineraries
        .iter()
        .map(|itin| {
            let mut line = String::new();
            for (i, stop) in itin.stops.iter().enumerate() {
                if i > 0 {
                    line.push_str(SEPARATOR);
                }
                line.push_str(label(stop.state, style.full_names));
                if style.with_temperatures {
                    let _ = write!(line, "({:.1})", stop.temperature);
                }
            }
            line
        })
        .collect()
}

/// One line per unfiltered path. There are no temperatures to show here.
pub fn format_paths(paths: &[Path], full_names: bool) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.iter().map(|&s| label(s, full_names)).collect::<Vec<_>>().join(SEPARATOR))
        .collect()
}

fn label(state: StateCode, full_names: bool) -> &'static str {
    if full_names { state.name() } else { state.code() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::Stop;

    fn s(code: &str) -> StateCode { StateCode::parse(code).unwrap() }

    fn itinerary() -> Itinerary {
        Itinerary {
            stops: vec![
                Stop { state: s("NM"), month: 4, temperature: 51.9 },
                Stop { state: s("AZ"), month: 5, temperature: 68.0 },
            ],
        }
    }

    #[test]
    fn test_all_four_styles() {
        let itins = [itinerary()];
        let cases = [
            (false, false, "NM => AZ"),
            (true, false, "NM(51.9) => AZ(68.0)"),
            (false, true, "New Mexico => Arizona"),
            (true, true, "New Mexico(51.9) => Arizona(68.0)"),
        ];
        for (with_temperatures, full_names, expected) in cases {
            let style = ReportStyle { with_temperatures, full_names };
            assert_eq!(format_itineraries(&itins, style), vec![expected.to_string()]);
        }
    }

    #[test]
    fn test_plain_paths() {
        let paths = vec![vec![s("WA"), s("OR"), s("CA")]];
        assert_eq!(format_paths(&paths, false), vec!["WA => OR => CA"]);
        assert_eq!(format_paths(&paths, true), vec!["Washington => Oregon => California"]);
        assert!(format_paths(&[], false).is_empty());
    }
}
