use super::*;
use advent_solver::{AocParser, ParseError, SolveError, Solver as _};
use proptest::prelude::*;

const SAMPLE: &str = "seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4";

fn rule(dest: u64, source: u64, length: u64) -> Rule {
    Rule::try_new(dest, source, length).unwrap()
}

fn span(start: u64, end: u64) -> Interval {
    Interval::new(start, end)
}

fn sorted(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort();
    intervals
}

fn total_len(intervals: &[Interval]) -> u128 {
    intervals.iter().map(|i| i.len() as u128).sum()
}

#[test]
fn test_parse_sample() {
    let almanac = Almanac::parse(SAMPLE).unwrap();
    assert_eq!(almanac.seeds, vec![79, 14, 55, 13]);
    assert_eq!(almanac.table.stages().len(), 7);
    assert_eq!(almanac.table.rule_count(), 18);

    let names: Vec<_> = almanac.table.stages().iter().map(|s| s.name).collect();
    assert_eq!(names, PIPELINE);

    let soil = almanac.table.stage("seed-to-soil").unwrap();
    assert_eq!(soil.rules, vec![rule(50, 98, 2), rule(52, 50, 48)]);

    let location = almanac.table.stage("humidity-to-location").unwrap();
    assert_eq!(location.rules.last(), Some(&rule(56, 93, 4)));
}

#[test]
fn test_parse_ignores_unrecognised_lines() {
    let input = "seeds: 1 2\n\na-to-b map:\n5 6 7\n1 2\n1 2 3 4\nnot a rule\n\nb-to-c map:\n";
    let almanac = Almanac::parse(input).unwrap();
    assert_eq!(almanac.table.stage("a-to-b").unwrap().rules, vec![rule(5, 6, 7)]);
    assert!(almanac.table.stage("b-to-c").unwrap().rules.is_empty());
}

#[test]
fn test_parse_repeated_header_appends() {
    let input = "seeds: 1\na-to-b map:\n5 6 7\nb-to-c map:\n1 1 1\na-to-b map:\n9 9 9";
    let almanac = Almanac::parse(input).unwrap();
    assert_eq!(
        almanac.table.stage("a-to-b").unwrap().rules,
        vec![rule(5, 6, 7), rule(9, 9, 9)]
    );
}

#[test]
fn test_parse_missing_seeds() {
    assert_eq!(Almanac::parse(""), Err(AlmanacError::MissingSeedData));
    assert_eq!(
        Almanac::parse("seeds:\n\nseed-to-soil map:\n1 2 3"),
        Err(AlmanacError::MissingSeedData)
    );
    assert!(matches!(
        <Solver as AocParser>::parse("seeds: none here"),
        Err(ParseError::MissingData(_))
    ));
}

#[test]
fn test_parse_overflowing_rule_is_malformed() {
    let input = "seeds: 1\na-to-b map:\n99999999999999999999 1 2";
    assert_eq!(
        Almanac::parse(input),
        Err(AlmanacError::MalformedRuleLine {
            line: 3,
            text: "99999999999999999999 1 2".to_string()
        })
    );

    let input = format!("seeds: 1\na-to-b map:\n0 {} 2", u64::MAX);
    assert!(matches!(
        Almanac::parse(&input),
        Err(AlmanacError::MalformedRuleLine { line: 3, .. })
    ));
    assert!(matches!(
        <Solver as AocParser>::parse(&input),
        Err(ParseError::InvalidFormat(_))
    ));
}

#[test]
fn test_parse_rule_before_header() {
    assert_eq!(
        Almanac::parse("seeds: 1\n\n1 2 3"),
        Err(AlmanacError::RuleWithoutStage { line: 3 })
    );
}

#[test]
fn test_seed_ranges() {
    let almanac = Almanac::parse("seeds: 48 53 200 2 10 2 7 0").unwrap();
    assert_eq!(
        almanac.seed_ranges().unwrap(),
        vec![span(48, 100), span(200, 201), span(10, 11)]
    );

    let odd = Almanac::parse("seeds: 1 2 3").unwrap();
    assert_eq!(odd.seed_ranges(), Err(AlmanacError::OddSeedRangeCount(3)));

    let text = format!("seeds: {} 2", u64::MAX);
    let overflow = Almanac::parse(&text).unwrap();
    assert_eq!(
        overflow.seed_ranges(),
        Err(AlmanacError::SeedRangeOverflow {
            start: u64::MAX,
            length: 2
        })
    );
}

#[test]
fn test_rule_point_coverage_is_inclusive() {
    let soil = Stage::new("seed-to-soil", vec![rule(50, 98, 2), rule(52, 50, 48)]);
    for (source, expected) in [(79, 81), (14, 14), (55, 57), (13, 13), (99, 51), (100, 100)] {
        assert_eq!(soil.map_point(source), expected, "source {source}");
    }
    assert_eq!(rule(52, 50, 48).map_point(97), Some(99));
    assert_eq!(rule(52, 50, 48).map_point(98), None);
    assert_eq!(rule(52, 50, 0).map_point(50), None);
}

#[test]
fn test_empty_stage_is_identity() {
    let stage = Stage::new("noop", Vec::new());
    let input = vec![span(3, 9), span(0, 0), span(100, 200)];
    assert_eq!(stage.apply(input.clone()), input);
}

#[test]
fn test_single_rule_exact_cover() {
    let stage = Stage::new("seed-to-soil", vec![rule(50, 98, 2)]);
    assert_eq!(stage.apply([span(98, 99)]), vec![span(50, 51)]);
}

#[test]
fn test_partial_overlap_split() {
    let stage = Stage::new("seed-to-soil", vec![rule(52, 50, 48)]);
    assert_eq!(
        sorted(stage.apply([span(48, 100)])),
        vec![span(48, 49), span(52, 99), span(98, 100)]
    );
}

#[test]
fn test_split_boundaries() {
    let stage = Stage::new("seed-to-soil", vec![rule(50, 110, 2), rule(52, 50, 48)]);
    let input = vec![
        span(48, 100),
        span(200, 201),
        span(10, 11),
        span(45, 54),
        span(95, 104),
        span(49, 49),
        span(50, 50),
        span(51, 51),
        span(96, 96),
        span(97, 97),
        span(98, 98),
    ];
    let expected = vec![
        span(48, 49),
        span(98, 100),
        span(200, 201),
        span(10, 11),
        span(45, 49),
        span(98, 104),
        span(49, 49),
        span(98, 98),
        span(52, 99),
        span(52, 56),
        span(97, 99),
        span(52, 52),
        span(53, 53),
        span(98, 98),
        span(99, 99),
    ];
    assert_eq!(sorted(stage.apply(input)), sorted(expected));
}

#[test]
fn test_mapped_piece_not_remapped_by_later_rule() {
    // First rule moves 10..=19 onto 30..=39, which the second rule also covers.
    let stage = Stage::new("a-to-b", vec![rule(30, 10, 10), rule(0, 30, 10)]);
    assert_eq!(stage.apply([span(10, 19)]), vec![span(30, 39)]);
    assert_eq!(stage.map_point(15), 35);
}

#[test]
fn test_sample_locations() {
    let almanac = Almanac::parse(SAMPLE).unwrap();
    let locations: Vec<_> = almanac
        .seeds
        .iter()
        .map(|&seed| locate(seed, &PIPELINE, &almanac.table))
        .collect();
    assert_eq!(locations, vec![82, 43, 86, 35]);

    let by_range = run(almanac.seed_points(), &PIPELINE, &almanac.table).unwrap();
    assert_eq!(lowest_start(&by_range), Some(35));
}

#[test]
fn test_run_requires_seeds() {
    let almanac = Almanac::parse(SAMPLE).unwrap();
    assert_eq!(
        run(Vec::new(), &PIPELINE, &almanac.table),
        Err(AlmanacError::MissingSeedData)
    );
}

#[test]
fn test_missing_stage_passes_through() {
    let almanac = Almanac::parse("seeds: 5 1\nseed-to-soil map:\n100 5 1").unwrap();
    assert_eq!(locate(5, &PIPELINE, &almanac.table), 100);
    assert_eq!(
        run(almanac.seed_points(), &PIPELINE, &almanac.table).unwrap(),
        vec![span(1, 1), span(100, 100)]
    );
}

#[test]
fn test_solver_sample() {
    let mut shared = <Solver as AocParser>::parse(SAMPLE).unwrap();
    assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "35");
    assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "46");
}

#[test]
fn test_solver_odd_ranges_fail() {
    let mut shared = <Solver as AocParser>::parse("seeds: 1 2 3\na-to-b map:\n1 1 1").unwrap();
    assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");
    assert!(matches!(
        Solver::solve_part(&mut shared, 2),
        Err(SolveError::SolveFailed(_))
    ));
}

fn arb_rules() -> impl Strategy<Value = Vec<Rule>> {
    prop::collection::vec((0u64..200, 0u64..200, 0u64..50), 0..6)
        .prop_map(|raw| raw.into_iter().map(|(d, s, l)| rule(d, s, l)).collect())
}

fn arb_intervals() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec((0u64..300, 0u64..40), 0..6)
        .prop_map(|raw| raw.into_iter().map(|(s, l)| span(s, s + l)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_apply_conserves_coverage(rules in arb_rules(), intervals in arb_intervals()) {
        let stage = Stage::new("prop", rules);
        let mapped = stage.apply(intervals.clone());
        prop_assert_eq!(total_len(&mapped), total_len(&intervals));
    }

    #[test]
    fn prop_apply_agrees_with_point_mapping(rules in arb_rules(), intervals in arb_intervals()) {
        let stage = Stage::new("prop", rules);

        let mut by_point: Vec<u64> = intervals
            .iter()
            .flat_map(|i| i.start..=i.end)
            .map(|v| stage.map_point(v))
            .collect();
        let mut by_range: Vec<u64> = stage
            .apply(intervals)
            .iter()
            .flat_map(|i| i.start..=i.end)
            .collect();

        by_point.sort_unstable();
        by_range.sort_unstable();
        prop_assert_eq!(by_point, by_range);
    }
}
