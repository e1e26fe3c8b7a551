use super::*;
use std::cmp::Ordering;

fn named(name: &str) -> Country {
    Country {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

fn names(countries: &[Country]) -> Vec<&str> {
    countries.iter().map(|c| c.name_str()).collect()
}

// ============================================================================
// デシリアライズ
// ============================================================================

#[test]
fn deserialize_full_record() {
    let json = r#"{"name":"Lithuania","region":"Europe","area":65300.0,"independent":true}"#;
    let country: Country = serde_json::from_str(json).unwrap();
    assert_eq!(country.name_str(), "Lithuania");
    assert_eq!(country.region_str(), "Europe");
    assert_eq!(country.area, Some(65300.0));
    assert_eq!(country.independent, Some(true));
}

#[test]
fn deserialize_tolerates_missing_and_null_fields() {
    let json = r#"{"name":"Antarctica","area":null}"#;
    let country: Country = serde_json::from_str(json).unwrap();
    assert_eq!(country.region, None);
    assert_eq!(country.area, None);
    assert_eq!(country.independent, None);
}

// ============================================================================
// 表示ラベル
// ============================================================================

#[test]
fn missing_fields_render_blank() {
    let country = Country::default();
    assert_eq!(country.name_str(), "");
    assert_eq!(country.region_str(), "");
    assert_eq!(country.area_label(), "");
}

#[test]
fn area_label_drops_trailing_zero_fraction() {
    let mut country = named("Lithuania");
    country.area = Some(65300.0);
    assert_eq!(country.area_label(), "65300");

    country.area = Some(0.44);
    assert_eq!(country.area_label(), "0.44");
}

#[test]
fn independent_label_yes_only_when_true() {
    let mut country = named("Tokelau");
    assert_eq!(country.independent_label(), "NO");
    country.independent = Some(false);
    assert_eq!(country.independent_label(), "NO");
    country.independent = Some(true);
    assert_eq!(country.independent_label(), "Yes");
}

// ============================================================================
// 照合順序
// ============================================================================

#[test]
fn compare_ignores_case_on_primary_level() {
    assert_eq!(compare_names("bahamas", "Bahrain"), Ordering::Less);
}

#[test]
fn compare_puts_lowercase_first_on_tie() {
    assert_eq!(compare_names("chad", "Chad"), Ordering::Less);
    assert_eq!(compare_names("Chad", "chad"), Ordering::Greater);
    assert_eq!(compare_names("Chad", "Chad"), Ordering::Equal);
}

#[test]
fn compare_puts_unaccented_before_accented_on_tie() {
    assert_eq!(compare_names("Cote", "Côte"), Ordering::Less);
    // アクセントの差は大文字小文字の差より優先
    assert_eq!(compare_names("cote", "Côte"), Ordering::Less);
    assert_eq!(compare_names("Cote", "côte"), Ordering::Less);
}

#[test]
fn sort_orders_case_variants_lowercase_first() {
    let mut countries = vec![named("Niger"), named("niger"), named("Nigeria")];
    sort_by_name(&mut countries);
    assert_eq!(names(&countries), vec!["niger", "Niger", "Nigeria"]);
}

#[test]
fn sort_places_accented_names_with_their_base_letter() {
    let mut countries = vec![
        named("Czech Republic"),
        named("Côte d'Ivoire"),
        named("Albania"),
        named("Åland Islands"),
        named("Croatia"),
        named("Afghanistan"),
        named("Costa Rica"),
    ];
    sort_by_name(&mut countries);
    assert_eq!(
        names(&countries),
        vec![
            "Afghanistan",
            "Åland Islands",
            "Albania",
            "Costa Rica",
            "Côte d'Ivoire",
            "Croatia",
            "Czech Republic",
        ]
    );
}

#[test]
fn sort_puts_nameless_records_first() {
    let mut countries = vec![named("Benin"), Country::default(), named("Angola")];
    sort_by_name(&mut countries);
    assert_eq!(names(&countries), vec!["", "Angola", "Benin"]);
}
