//! Golden tests for the decision engine.
//!
//! Each case pins the priority, days-left and lead-time recommendation for one
//! medicine under the default policy (3 delivery days, storage limit 200).

use pharma_stock_core::engine::{classify_priority, estimate_days_until_stockout, LeadTimePolicy};
use pharma_stock_core::models::{DaysLeft, MedicineRecord, Priority, RecommendationCode};
use pharma_stock_core::LeadTimeConfig;

/// Test case from golden file.
struct GoldenCase {
    id: &'static str,
    stock: f64,
    demand: f64,
    scenario: &'static str,
    expected_priority: Priority,
    expected_days: DaysLeft,
    expected_code: RecommendationCode,
    expected_message: &'static str,
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "runs-out-before-delivery",
            stock: 50.0,
            demand: 20.0,
            scenario: "flu season",
            expected_priority: Priority::High,
            expected_days: DaysLeft::Finite(2.5),
            expected_code: RecommendationCode::UrgentReorder,
            expected_message: "Order immediately, stock will run out in 2.5 days.",
        },
        GoldenCase {
            id: "over-storage-limit",
            stock: 300.0,
            demand: 5.0,
            scenario: "regular",
            expected_priority: Priority::Low,
            expected_days: DaysLeft::Finite(60.0),
            expected_code: RecommendationCode::DeferForStorage,
            expected_message: "Order less frequently due to storage constraints.",
        },
        GoldenCase {
            id: "at-storage-limit",
            stock: 200.0,
            demand: 10.0,
            scenario: "regular",
            expected_priority: Priority::Low,
            expected_days: DaysLeft::Finite(20.0),
            expected_code: RecommendationCode::Sufficient,
            expected_message: "Stock level is sufficient for now.",
        },
        GoldenCase {
            id: "within-two-deliveries",
            stock: 50.0,
            demand: 12.0,
            scenario: "regular",
            expected_priority: Priority::Medium,
            expected_days: DaysLeft::Finite(50.0 / 12.0),
            expected_code: RecommendationCode::ReorderSoon,
            expected_message: "Consider ordering soon to avoid stockouts.",
        },
        GoldenCase {
            id: "no-demand-over-limit",
            stock: 250.0,
            demand: 0.0,
            scenario: "flu season",
            expected_priority: Priority::Low,
            expected_days: DaysLeft::Infinite,
            expected_code: RecommendationCode::DeferForStorage,
            expected_message: "Order less frequently due to storage constraints.",
        },
        GoldenCase {
            id: "no-demand-no-stock",
            stock: 0.0,
            demand: 0.0,
            scenario: "regular",
            expected_priority: Priority::Low,
            expected_days: DaysLeft::Infinite,
            expected_code: RecommendationCode::Sufficient,
            expected_message: "Stock level is sufficient for now.",
        },
        GoldenCase {
            id: "empty-shelf",
            stock: 0.0,
            demand: 4.0,
            scenario: "regular",
            expected_priority: Priority::Low,
            expected_days: DaysLeft::Finite(0.0),
            expected_code: RecommendationCode::UrgentReorder,
            expected_message: "Order immediately, stock will run out in 0.0 days.",
        },
        GoldenCase {
            id: "flu-but-moderate-demand",
            stock: 150.0,
            demand: 15.0,
            scenario: "flu season",
            expected_priority: Priority::Medium,
            expected_days: DaysLeft::Finite(10.0),
            expected_code: RecommendationCode::Sufficient,
            expected_message: "Stock level is sufficient for now.",
        },
        GoldenCase {
            id: "ratio-too-large",
            stock: 1e308,
            demand: 1e-10,
            scenario: "regular",
            expected_priority: Priority::Low,
            expected_days: DaysLeft::Infinite,
            expected_code: RecommendationCode::DeferForStorage,
            expected_message: "Order less frequently due to storage constraints.",
        },
        GoldenCase {
            id: "capitalised-flu",
            stock: 100.0,
            demand: 25.0,
            scenario: "Flu Season",
            expected_priority: Priority::Medium,
            expected_days: DaysLeft::Finite(4.0),
            expected_code: RecommendationCode::ReorderSoon,
            expected_message: "Consider ordering soon to avoid stockouts.",
        },
    ]
}

#[test]
fn test_golden_cases() {
    let policy = LeadTimePolicy::new(LeadTimeConfig::default());
    let cases = get_golden_cases();
    let mut failures = Vec::new();

    for case in &cases {
        let record = MedicineRecord::new(case.id, case.stock, case.demand, case.scenario);

        let priority = classify_priority(&record);
        if priority != case.expected_priority {
            failures.push(format!(
                "{}: priority expected {:?}, got {:?}",
                case.id, case.expected_priority, priority
            ));
        }

        let days = estimate_days_until_stockout(&record);
        if days != case.expected_days {
            failures.push(format!(
                "{}: days expected {:?}, got {:?}",
                case.id, case.expected_days, days
            ));
        }

        let rec = policy.recommend(&record);
        if rec.code != case.expected_code {
            failures.push(format!(
                "{}: code expected {:?}, got {:?}",
                case.id, case.expected_code, rec.code
            ));
        }
        if rec.recommendation != case.expected_message {
            failures.push(format!(
                "{}: message expected {:?}, got {:?}",
                case.id, case.expected_message, rec.recommendation
            ));
        }
        if rec.days_left != days {
            failures.push(format!("{}: recommendation carries different days", case.id));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} golden cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn test_priority_examples() {
    let cases = [
        (20.0, "flu season", Priority::High),
        (10.0, "regular", Priority::Low),
        (12.0, "regular", Priority::Medium),
    ];

    for (demand, scenario, expected) in cases {
        let record = MedicineRecord::new("Case", 100.0, demand, scenario);
        assert_eq!(classify_priority(&record), expected, "{} / {}", demand, scenario);
    }
}

#[test]
fn test_custom_lead_time() {
    let policy = LeadTimePolicy::new(LeadTimeConfig::new(7.0, 1000.0));

    // 10 days left: not below 7, below 14
    let rec = policy.recommend(&MedicineRecord::new("Insulin", 100.0, 10.0, "regular"));
    assert_eq!(rec.code, RecommendationCode::ReorderSoon);

    // 5 days left: below 7
    let rec = policy.recommend(&MedicineRecord::new("Insulin", 50.0, 10.0, "regular"));
    assert_eq!(
        rec.recommendation,
        "Order immediately, stock will run out in 5.0 days."
    );
}
