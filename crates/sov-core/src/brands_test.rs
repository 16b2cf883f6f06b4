use super::*;

fn entry(name: &str, relationship: Relationship) -> BrandEntry {
    BrandEntry {
        name: name.to_string(),
        relationship,
    }
}

/// Writes `content` to a uniquely named file under the system temp dir.
fn write_temp_yaml(label: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "sov-core-{label}-{}.yaml",
        std::process::id()
    ));
    std::fs::write(&path, content).expect("temp file should be writable");
    path
}

#[test]
fn new_lowercases_and_trims_names() {
    let set = BrandSet::new("  Atomberg ", ["Crompton", " HAVELLS"]).unwrap();
    assert_eq!(set.target(), "atomberg");
    assert_eq!(set.competitors(), ["crompton", "havells"]);
}

#[test]
fn new_rejects_blank_target() {
    let err = BrandSet::new("   ", ["crompton"]).unwrap_err();
    assert!(err.to_string().contains("target brand must be non-empty"));
}

#[test]
fn from_csv_drops_blank_items() {
    let set = BrandSet::from_csv("atomberg", "crompton,, havells ,").unwrap();
    assert_eq!(set.competitors(), ["crompton", "havells"]);
}

#[test]
fn from_csv_with_empty_list_has_no_competitors() {
    let set = BrandSet::from_csv("atomberg", "").unwrap();
    assert!(set.competitors().is_empty());
    assert_eq!(set.roster(), ["atomberg"]);
}

#[test]
fn roster_puts_target_first() {
    let set = BrandSet::from_csv("atomberg", "crompton,havells,orient,usha,bajaj").unwrap();
    assert_eq!(
        set.roster(),
        ["atomberg", "crompton", "havells", "orient", "usha", "bajaj"]
    );
}

#[test]
fn duplicates_are_preserved() {
    let set = BrandSet::from_csv("atomberg", "crompton,Crompton").unwrap();
    assert_eq!(set.roster(), ["atomberg", "crompton", "crompton"]);
}

#[test]
fn validate_requires_a_target() {
    let brands_file = BrandsFile {
        brands: vec![entry("Crompton", Relationship::Competitor)],
    };
    let err = validate_brands(&brands_file).unwrap_err();
    assert!(err.to_string().contains("exactly one target"));
}

#[test]
fn validate_rejects_two_targets() {
    let brands_file = BrandsFile {
        brands: vec![
            entry("Atomberg", Relationship::Target),
            entry("Crompton", Relationship::Target),
        ],
    };
    let err = validate_brands(&brands_file).unwrap_err();
    assert!(err.to_string().contains("more than one target"));
}

#[test]
fn validate_rejects_empty_name() {
    let brands_file = BrandsFile {
        brands: vec![
            entry("Atomberg", Relationship::Target),
            entry("  ", Relationship::Competitor),
        ],
    };
    let err = validate_brands(&brands_file).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn validate_keeps_order_with_target_anywhere() {
    let brands_file = BrandsFile {
        brands: vec![
            entry("Crompton", Relationship::Competitor),
            entry("Atomberg", Relationship::Target),
            entry("Usha", Relationship::Competitor),
        ],
    };
    let set = validate_brands(&brands_file).unwrap();
    assert_eq!(set.roster(), ["atomberg", "crompton", "usha"]);
}

#[test]
fn load_brand_set_reads_yaml_file() {
    let path = write_temp_yaml(
        "valid",
        "brands:\n  - name: Atomberg\n    relationship: target\n  - name: Havells\n    relationship: competitor\n",
    );
    let result = load_brand_set(&path);
    std::fs::remove_file(&path).ok();

    let set = result.expect("valid YAML should load");
    assert_eq!(set.roster(), ["atomberg", "havells"]);
}

#[test]
fn load_brand_set_reports_parse_errors() {
    let path = write_temp_yaml("invalid", "brands:\n  - name: Atomberg\n    relationship: owner\n");
    let result = load_brand_set(&path);
    std::fs::remove_file(&path).ok();

    assert!(
        matches!(result, Err(ConfigError::BrandsFileParse(_))),
        "expected BrandsFileParse, got: {result:?}"
    );
}

#[test]
fn load_brand_set_reports_missing_file() {
    let path = Path::new("/nonexistent/sov/brands.yaml");
    let result = load_brand_set(path);
    assert!(
        matches!(result, Err(ConfigError::BrandsFileIo { .. })),
        "expected BrandsFileIo, got: {result:?}"
    );
}
