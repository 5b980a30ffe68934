use rstest::rstest;
use state_paths::{
    enumerate, BoundedBorders, ClimateTable, ComfortFilter, ComfortPolicy, ComfortRange, FilterSettings, Interval,
    Path, PathQuery, PlannerError, Registry, StateCode, WorkingSubset,
};

fn s(code: &str) -> StateCode {
    StateCode::parse(code).unwrap()
}

fn setup(codes: &[&str]) -> (WorkingSubset, BoundedBorders) {
    let subset = WorkingSubset::new(codes.iter().map(|c| s(c)));
    let borders = BoundedBorders::build(&subset, Registry::global()).unwrap();
    (subset, borders)
}

fn render(path: &[StateCode]) -> String {
    path.iter().map(|s| s.code()).collect::<Vec<_>>().join("-")
}

/// Synthetic mountain-west table; the values only need to be distinct enough to
/// make the filter decisions below deterministic.
fn mountain_climate() -> ClimateTable {
    ClimateTable::parse(
        "\
Arizona      45 49 53 60 69 78 83 81 74 63 51 44
Colorado     25 28 34 42 51 61 67 65 56 45 33 26
Idaho        22 27 35 43 51 59 68 67 57 45 32 24
Montana      17 22 30 41 51 59 67 65 54 43 29 19
Nevada       30 35 41 48 57 67 75 73 63 51 38 30
New Mexico   33 38 44 52 61 70 74 71 65 54 42 34
Utah         26 31 39 47 56 66 73 71 61 49 36 26
Wyoming      19 22 28 38 48 57 65 63 53 42 28 20
Oregon       40 43 46 50 56 62 68 68 62 53 45 40
Washington   36 40 44 49 56 61 67 67 61 51 42 37
California   45 48 51 55 61 67 73 73 70 62 52 45
",
    )
    .unwrap()
}

fn settings(min: f64, max: f64, month: u32, interval: Interval) -> FilterSettings {
    FilterSettings {
        start_year: 2024,
        start_month: month,
        interval,
        comfort: ComfortPolicy::new(ComfortRange { min, max }),
    }
}

// --- Enumeration properties -------------------------------------------------

#[rstest]
#[case(&["OR", "WA", "CA"])]
#[case(&["AZ", "NM", "UT", "CO"])]
#[case(&["AZ", "CO", "ID", "MT", "NV", "NM", "UT", "WY"])]
#[case(&["NY", "PA", "NJ", "CT", "MA", "VT"])]
fn test_paths_cover_subset_with_adjacent_steps(#[case] codes: &[&str]) {
    let (subset, borders) = setup(codes);
    let res = enumerate(&subset, &borders, &PathQuery::default()).unwrap();
    assert!(!res.paths.is_empty());

    for path in &res.paths {
        assert_eq!(path.len(), subset.len());
        let mut sorted = path.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), path.len(), "repeated state in {}", render(path));
        for pair in path.windows(2) {
            assert!(borders.borders(pair[0], pair[1]), "{} steps across a non-border", render(path));
        }
    }

    let mut unique: Vec<&Path> = res.paths.iter().collect();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), res.paths.len(), "duplicate paths produced");
}

#[test]
fn test_scenario_a_pacific_triangle() {
    let (subset, borders) = setup(&["OR", "WA", "CA"]);
    let res = enumerate(&subset, &borders, &PathQuery::default()).unwrap();
    let rendered: Vec<String> = res.paths.iter().map(|p| render(p)).collect();
    assert_eq!(rendered, vec!["WA-OR-CA", "CA-OR-WA"]);
}

#[test]
fn test_scenario_b_fixed_start() {
    let (subset, borders) = setup(&["AZ", "NM", "UT", "CO"]);
    assert!(!borders.borders(s("AZ"), s("CO")));
    assert!(!borders.borders(s("NM"), s("UT")));

    let query = PathQuery { start: Some(s("NM")), ..Default::default() };
    let res = enumerate(&subset, &borders, &query).unwrap();
    assert_eq!(res.paths.len(), 2);
    assert!(res.paths.iter().all(|p| p[0] == s("NM")));
}

#[rstest]
#[case(Some("NM"), None)]
#[case(None, Some("AZ"))]
#[case(Some("NM"), Some("AZ"))]
#[case(Some("WY"), Some("AZ"))]
fn test_start_and_end_compose(#[case] start: Option<&str>, #[case] end: Option<&str>) {
    let (subset, borders) = setup(&["AZ", "CO", "ID", "MT", "NV", "NM", "UT", "WY"]);
    let all = enumerate(&subset, &borders, &PathQuery::default()).unwrap();

    let query = PathQuery { start: start.map(s), end: end.map(s), max_paths: None };
    let res = enumerate(&subset, &borders, &query).unwrap();

    let expected: Vec<Path> = all
        .paths
        .into_iter()
        .filter(|p| start.map_or(true, |c| p[0] == s(c)))
        .filter(|p| end.map_or(true, |c| *p.last().unwrap() == s(c)))
        .collect();
    assert_eq!(res.paths, expected);
}

#[test]
fn test_restriction_is_idempotent() {
    let (subset, borders) = setup(&["AZ", "CO", "ID", "MT", "NV", "NM", "UT", "WY"]);
    let again = BoundedBorders::build(&subset, &borders).unwrap();
    assert_eq!(again, borders);
}

#[test]
fn test_isolated_member_blocks_all_paths() {
    // ME has no neighbour among the others, so nothing can cover the subset.
    let (subset, borders) = setup(&["OR", "WA", "CA", "ME"]);
    let res = enumerate(&subset, &borders, &PathQuery::default()).unwrap();
    assert!(res.paths.is_empty());
}

// --- Filter properties ------------------------------------------------------

#[test]
fn test_scenario_c_one_hot_stop_rejects_the_path() {
    let mut table = ClimateTable::new();
    table.insert(s("OR"), [55.0; 12]);
    table.insert(s("WA"), [55.0; 12]);
    table.insert(s("CA"), [70.0; 12]);

    let cfg = settings(40.0, 68.0, 4, Interval::Months(1));
    let out = ComfortFilter::new(&table, &cfg)
        .run(&[vec![s("WA"), s("OR"), s("CA")]])
        .unwrap();
    assert!(out.itineraries.is_empty());
    assert_eq!(out.rejected, 1);
}

#[test]
fn test_scenario_d_override_takes_precedence() {
    let mut table = ClimateTable::new();
    table.insert(s("NM"), [30.0; 12]);
    table.insert(s("AZ"), [60.0; 12]);

    let mut cfg = settings(40.0, 68.0, 4, Interval::Months(1));
    cfg.comfort = cfg.comfort.clone().with_override(s("NM"), ComfortRange { min: 20.0, max: 50.0 });
    let out = ComfortFilter::new(&table, &cfg).run(&[vec![s("NM"), s("AZ")]]).unwrap();
    assert_eq!(out.itineraries.len(), 1);
    assert_eq!(out.itineraries[0].temperatures(), vec![30.0, 60.0]);
}

#[test]
fn test_scenario_e_monthly_interval_from_april() {
    let table = mountain_climate();
    let cfg = settings(0.0, 105.0, 4, "1 month".parse().unwrap());
    let out = ComfortFilter::new(&table, &cfg).run(&[vec![s("NM"), s("AZ"), s("UT")]]).unwrap();
    assert_eq!(out.itineraries[0].months(), vec![4, 5, 6]);
    assert_eq!(out.itineraries[0].temperatures(), vec![52.0, 69.0, 66.0]);
}

#[rstest]
#[case(Interval::Weeks(1), 2)]
#[case(Interval::Months(1), 4)]
#[case(Interval::Months(2), 1)]
fn test_filter_is_idempotent(#[case] interval: Interval, #[case] month: u32) {
    let (subset, borders) = setup(&["AZ", "CO", "NM", "UT", "NV"]);
    let paths = enumerate(&subset, &borders, &PathQuery::default()).unwrap().paths;
    let table = mountain_climate();
    let cfg = settings(30.0, 70.0, month, interval);
    let filter = ComfortFilter::new(&table, &cfg);

    let first = filter.run(&paths).unwrap();
    let survivors: Vec<Path> = first.itineraries.iter().map(|i| i.path()).collect();
    let second = filter.run(&survivors).unwrap();
    assert_eq!(second.itineraries, first.itineraries);
    assert_eq!(second.rejected, 0);
}

#[test]
fn test_narrowing_range_never_adds_survivors() {
    let (subset, borders) = setup(&["AZ", "CO", "ID", "MT", "NV", "NM", "UT", "WY"]);
    let paths = enumerate(&subset, &borders, &PathQuery { start: Some(s("NM")), ..Default::default() })
        .unwrap()
        .paths;
    let table = mountain_climate();

    let ranges = [(0.0, 105.0), (20.0, 80.0), (30.0, 75.0), (40.0, 68.0), (45.0, 60.0)];
    let mut previous = usize::MAX;
    for (min, max) in ranges {
        let cfg = settings(min, max, 4, Interval::Weeks(2));
        let count = ComfortFilter::new(&table, &cfg).run(&paths).unwrap().itineraries.len();
        assert!(count <= previous, "[{}, {}] kept {} > {}", min, max, count, previous);
        previous = count;
    }
}

#[test]
fn test_survivors_keep_input_order() {
    let (subset, borders) = setup(&["AZ", "CO", "NM", "UT", "NV"]);
    let paths = enumerate(&subset, &borders, &PathQuery::default()).unwrap().paths;
    let table = mountain_climate();
    let cfg = settings(25.0, 70.0, 3, Interval::Weeks(1));
    let out = ComfortFilter::new(&table, &cfg).run(&paths).unwrap();

    let positions: Vec<usize> = out
        .itineraries
        .iter()
        .map(|i| paths.iter().position(|p| *p == i.path()).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_gap_in_climate_table_is_loud() {
    let (subset, borders) = setup(&["ND", "SD"]);
    let paths = enumerate(&subset, &borders, &PathQuery::default()).unwrap().paths;
    let table = mountain_climate();
    let cfg = settings(0.0, 105.0, 1, Interval::Weeks(1));
    let err = ComfortFilter::new(&table, &cfg).run(&paths).unwrap_err();
    assert!(matches!(err, PlannerError::ClimateGap { .. }));
}
