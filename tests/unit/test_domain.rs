use countryinfo::domain::{
    city::value_objects::CityLimit,
    country::value_objects::IsoCode,
    population::{
        entity::{PopulationCount, PopulationSeries},
        value_objects::YearRange,
    },
};

#[test]
fn iso_code_normalizes_to_upper_case() {
    let code = IsoCode::parse("no").expect("expected 'no' to be valid");
    assert_eq!(code.as_str(), "NO");
    assert_eq!(code.to_string(), "NO");
}

#[test]
fn iso_code_is_idempotent_over_all_letter_pairs() {
    for a in ('a'..='z').chain('A'..='Z') {
        for b in ['a', 'Q', 'z'] {
            let raw = format!("{a}{b}");
            let once = IsoCode::parse(&raw).expect("letter pairs are valid");
            assert_eq!(once.as_str(), raw.to_uppercase());
            assert_eq!(IsoCode::parse(once.as_str()).unwrap(), once);
        }
    }
}

#[test]
fn iso_code_rejects_other_lengths_and_symbols() {
    for raw in ["", "N", "NOR", "N0", "0N", "_a", "a b", " no", "no "] {
        assert!(IsoCode::parse(raw).is_err(), "expected {raw:?} to be rejected");
    }
}

#[test]
fn city_limit_only_accepts_non_negative_integers() {
    assert_eq!(CityLimit::parse(Some("3")).unwrap(), Some(CityLimit(3)));
    assert!(CityLimit::parse(Some("-1")).is_err());
    assert!(CityLimit::parse(Some("abc")).is_err());
}

#[test]
fn year_range_filter_and_mean() {
    let series = PopulationSeries {
        counts: vec![
            PopulationCount { year: 2000, value: 10 },
            PopulationCount { year: 2010, value: 20 },
            PopulationCount { year: 2020, value: 30 },
        ],
    };
    let summary = series.summarize(Some(YearRange::parse("2005-2015").unwrap()));

    assert_eq!(summary.mean, 20);
    assert_eq!(summary.values, vec![PopulationCount { year: 2010, value: 20 }]);
}
