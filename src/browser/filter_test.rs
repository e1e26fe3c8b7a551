use super::*;

fn make_country(name: &str, region: &str, area: Option<f64>) -> Country {
    Country {
        name: Some(name.to_string()),
        region: Some(region.to_string()),
        area,
        independent: Some(true),
    }
}

fn names<'a>(items: &[&'a Country]) -> Vec<&'a str> {
    items.iter().map(|c| c.name_str()).collect()
}

fn smaller_than_lithuania() -> Filter {
    FilterKind::SmallerThanLithuania.to_filter()
}

fn in_oceania() -> Filter {
    FilterKind::InOceania.to_filter()
}

// ============================================================================
// Filter::None
// ============================================================================

#[test]
fn none_filter_returns_slice_unchanged() {
    let dataset = vec![
        make_country("Fiji", "Oceania", Some(18272.0)),
        make_country("France", "Europe", Some(551695.0)),
    ];
    let result = apply_filter(&dataset, &Filter::None, &dataset);
    assert_eq!(names(&result), vec!["Fiji", "France"]);
}

// ============================================================================
// SmallerThan
// ============================================================================

#[test]
fn smaller_than_keeps_strictly_smaller_items_of_slice() {
    let dataset = vec![
        make_country("Andorra", "Europe", Some(100.0)),
        make_country("Jamaica", "Americas", Some(5000.0)),
        make_country("Lithuania", "Europe", Some(65300.0)),
    ];
    let result = apply_filter(&dataset, &smaller_than_lithuania(), &dataset);
    assert_eq!(names(&result), vec!["Andorra", "Jamaica"]);
}

#[test]
fn smaller_than_looks_up_reference_in_full_dataset() {
    let dataset = vec![
        make_country("Andorra", "Europe", Some(100.0)),
        make_country("Brazil", "Americas", Some(8515767.0)),
        make_country("Lithuania", "Europe", Some(65300.0)),
    ];
    // 基準国を含まないスライス
    let slice = &dataset[..2];
    let result = apply_filter(slice, &smaller_than_lithuania(), &dataset);
    assert_eq!(names(&result), vec!["Andorra"]);
}

#[test]
fn smaller_than_without_reference_matches_nothing() {
    let dataset = vec![
        make_country("Andorra", "Europe", Some(100.0)),
        make_country("Malta", "Europe", Some(316.0)),
    ];
    let result = apply_filter(&dataset, &smaller_than_lithuania(), &dataset);
    assert!(result.is_empty());
}

#[test]
fn smaller_than_with_reference_missing_area_matches_nothing() {
    let dataset = vec![
        make_country("Andorra", "Europe", Some(100.0)),
        make_country("Lithuania", "Europe", None),
    ];
    let result = apply_filter(&dataset, &smaller_than_lithuania(), &dataset);
    assert!(result.is_empty());
}

#[test]
fn smaller_than_skips_items_without_area() {
    let dataset = vec![
        make_country("Nowhere", "Europe", None),
        make_country("Lithuania", "Europe", Some(65300.0)),
        make_country("Malta", "Europe", Some(316.0)),
    ];
    let result = apply_filter(&dataset, &smaller_than_lithuania(), &dataset);
    assert_eq!(names(&result), vec!["Malta"]);
}

// ============================================================================
// InRegion
// ============================================================================

#[test]
fn in_region_is_exact_match() {
    let dataset = vec![
        make_country("Fiji", "Oceania", Some(18272.0)),
        make_country("Tonga", "oceania", Some(747.0)),
        make_country("Samoa", "Oceania ", Some(2842.0)),
        make_country("Chile", "Americas", Some(756102.0)),
    ];
    let result = apply_filter(&dataset, &in_oceania(), &dataset);
    assert_eq!(names(&result), vec!["Fiji"]);
}

#[test]
fn in_region_skips_items_without_region() {
    let dataset = vec![Country {
        name: Some("Unknown".to_string()),
        ..Default::default()
    }];
    let result = apply_filter(&dataset, &in_oceania(), &dataset);
    assert!(result.is_empty());
}

// ============================================================================
// FilterKind
// ============================================================================

#[test]
fn filter_kind_round_trips_through_filter() {
    for kind in FilterKind::all() {
        assert_eq!(kind.to_filter().kind(), Some(*kind));
    }
    assert_eq!(Filter::None.kind(), None);
}

#[test]
fn custom_filter_has_no_button() {
    assert_eq!(Filter::InRegion("Europe".to_string()).kind(), None);
}

#[test]
fn filter_kind_labels() {
    assert_eq!(
        FilterKind::SmallerThanLithuania.label(),
        "Smaller Than Lithuania"
    );
    assert_eq!(FilterKind::InOceania.label(), "In Oceania");
}
