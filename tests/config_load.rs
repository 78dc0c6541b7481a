use listcache::config::{Config, MatchMode};
use listcache::init::build_cache;
use listcache::loader::populate;
use std::io::Write;

#[tokio::test]
async fn test_load_config_and_build_cache() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[cache]
mode = "chained"
lowercase = true
"#
    )
    .unwrap();

    let config = Config::load(file.path()).await.unwrap();
    assert_eq!(config.cache.mode, MatchMode::Chained);

    let cache = build_cache(&config.cache);
    let report = populate(
        &*cache,
        "ads",
        ["Ads.Example.com", "/^track/", "*.metrics.NET", "/(/"],
    );
    assert_eq!(report.accepted, 3);
    assert_eq!(report.invalid, 1);

    assert_eq!(cache.element_count("ads"), 3);
    assert!(!cache.contains("ads.example.com", &["ads"]).is_empty());
    assert!(!cache.contains("tracker.io", &["ads"]).is_empty());
    assert!(!cache.contains("eu.metrics.net", &["ads"]).is_empty());
    assert!(cache.contains("example.com", &["ads"]).is_empty());
}

#[tokio::test]
async fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(dir.path().join("absent.toml")).await;
    assert!(result.is_err());
}
