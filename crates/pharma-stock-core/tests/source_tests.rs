//! Data source integration tests.

use chrono::NaiveDate;
use pharma_stock_core::config::ConfigError;
use pharma_stock_core::models::{DemandBasis, RecommendationCode};
use pharma_stock_core::{
    CriticalThresholdConfig, Database, DemandObservation, InMemorySource, InventoryEngine,
    LeadTimeConfig, MedicineRecord, MedicineSource, PolicyConfig, PolicyOutcome, StockLevel,
};

fn seed(db: &Database) {
    for record in InMemorySource::sample().medicines().unwrap() {
        db.upsert_medicine(&record).unwrap();
    }
}

fn sale(units: f64, y: i32, m: u32, d: u32) -> DemandObservation {
    DemandObservation::new(units).with_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[test]
fn test_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stock.db");

    {
        let db = Database::open(&path).unwrap();
        seed(&db);
        db.record_sale("Aspirin", &sale(22.0, 2024, 1, 3)).unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(db.list_medicines().unwrap().len(), 3);
    assert_eq!(db.list_sales("Aspirin").unwrap().len(), 1);
}

#[test]
fn test_database_and_memory_sources_agree() {
    let db = Database::open_in_memory().unwrap();
    seed(&db);
    let memory = InMemorySource::sample();
    let config = LeadTimeConfig::default();

    assert_eq!(
        InventoryEngine::new(&db).recommendations(&config).unwrap(),
        InventoryEngine::new(&memory).recommendations(&config).unwrap()
    );
    assert_eq!(
        InventoryEngine::new(&db).priorities().unwrap(),
        InventoryEngine::new(&memory).priorities().unwrap()
    );
}

#[test]
fn test_seasonal_alerts_from_database() {
    let db = Database::open_in_memory().unwrap();
    seed(&db);
    db.record_sale("Antibiotics", &sale(30.0, 2024, 1, 10)).unwrap();
    db.record_sale("Antibiotics", &sale(20.0, 2024, 2, 10)).unwrap();
    db.record_sale("Antibiotics", &sale(5.0, 2024, 7, 10)).unwrap();

    let engine = InventoryEngine::new(&db);
    let levels = vec![StockLevel::new("Antibiotics", 50.0)];

    let winter = engine
        .stock_alerts(&CriticalThresholdConfig::new(60.0).with_season("winter"), &levels)
        .unwrap();
    assert_eq!(winter[0].estimated_demand, 25.0);
    assert_eq!(winter[0].demand_basis, DemandBasis::Seasonal);

    let spring = engine
        .stock_alerts(&CriticalThresholdConfig::new(60.0).with_season("spring"), &levels)
        .unwrap();
    assert_eq!(spring[0].estimated_demand, 55.0 / 3.0);
    assert_eq!(spring[0].demand_basis, DemandBasis::Overall);
}

#[test]
fn test_policy_document_over_database() {
    let db = Database::open_in_memory().unwrap();
    seed(&db);
    db.update_stock("Aspirin", 30.0).unwrap();

    let engine = InventoryEngine::new(&db);

    let outcome = engine
        .apply(&PolicyConfig::from_json(r#"{"delivery_days": 3, "storage_limit": 200}"#).unwrap())
        .unwrap();
    let PolicyOutcome::Recommendations(recs) = outcome else {
        panic!("expected recommendations");
    };
    let aspirin = recs.iter().find(|r| r.name == "Aspirin").unwrap();
    // 30 / 20 = 1.5 days
    assert_eq!(aspirin.code, RecommendationCode::UrgentReorder);
    assert_eq!(
        aspirin.recommendation,
        "Order immediately, stock will run out in 1.5 days."
    );

    let outcome = engine
        .apply(&PolicyConfig::from_json(r#"{"critical_threshold": 40}"#).unwrap())
        .unwrap();
    let PolicyOutcome::Alerts(alerts) = outcome else {
        panic!("expected alerts");
    };
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].drug, "Aspirin");
    assert_eq!(alerts[0].demand_basis, DemandBasis::NoHistory);
}

#[test]
fn test_report_from_database() {
    let db = Database::open_in_memory().unwrap();
    db.upsert_medicine(&MedicineRecord::new("Aspirin", 50.0, 20.0, "flu season"))
        .unwrap();

    let report = InventoryEngine::new(&db)
        .report(&LeadTimeConfig::default())
        .unwrap();
    assert_eq!(report.items.len(), 1);
    assert!(report.to_csv().contains("Aspirin,high,2.5,urgent_reorder"));
}

#[test]
fn test_config_files() {
    let dir = tempfile::tempdir().unwrap();
    let lead_time = dir.path().join("lead-time.json");
    let threshold = dir.path().join("threshold.json");
    let invalid = dir.path().join("invalid.json");
    std::fs::write(&lead_time, r#"{"delivery_days": 5, "storage_limit": 300}"#).unwrap();
    std::fs::write(&threshold, r#"{"critical_threshold": 40, "season": "winter"}"#).unwrap();
    std::fs::write(&invalid, r#"{"delivery_days": 5, "storage_limit": -1}"#).unwrap();

    assert_eq!(
        LeadTimeConfig::from_file(&lead_time).unwrap(),
        LeadTimeConfig::new(5.0, 300.0)
    );
    assert_eq!(
        PolicyConfig::from_file(&lead_time).unwrap(),
        PolicyConfig::LeadTime(LeadTimeConfig::new(5.0, 300.0))
    );
    assert_eq!(
        PolicyConfig::from_file(&threshold).unwrap(),
        PolicyConfig::CriticalThreshold(CriticalThresholdConfig::new(40.0).with_season("winter"))
    );

    let missing = dir.path().join("absent.json");
    assert!(matches!(
        LeadTimeConfig::from_file(&missing),
        Err(ConfigError::Io(_))
    ));
    assert!(matches!(
        PolicyConfig::from_file(&missing),
        Err(ConfigError::Io(_))
    ));

    assert!(matches!(
        LeadTimeConfig::from_file(&invalid),
        Err(ConfigError::InvalidValue { field: "storage_limit", .. })
    ));
    assert!(matches!(
        PolicyConfig::from_file(&invalid),
        Err(ConfigError::InvalidValue { field: "storage_limit", .. })
    ));
    // A threshold document is not a lead-time document
    assert!(matches!(
        LeadTimeConfig::from_file(&threshold),
        Err(ConfigError::Json(_))
    ));
}
