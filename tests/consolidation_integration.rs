//! End-to-end consolidation tests over the public facade.
//!
//! These exercise the whole pipeline (payload parsing, validation, the two
//! aggregation roles, the global reduction and the rendered statements) the
//! way a report-generation caller would drive it.

use async_trait::async_trait;
use custeio_engine::{
    entities::{
        org, ConsolidatedBudget, ConsumablesRecord, ExpenseCategory, FlightHoursRecord,
        FoodSupplementRecord, FuelItem, FuelRecord, FuelType, FundAdvanceRecord, LubricantRecord,
        MaterielRecord, NatureCode, OperationProfile, OperationalFundsRecord, PerDiemRecord,
        RationsRecord, ThirdPartyServicesRecord, TicketsRecord, UtilitiesRecord,
    },
    errors::ConsolidationError,
    ext::statements::{ConsolidatedSummaryGenerator, OrganizationDemandGenerator},
    logic::{normalize_org_name, Role},
    repositories::RecordsRepository,
    util::CusteioEngine,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const ND_CODES: [NatureCode; 5] = [
    NatureCode::Nd15,
    NatureCode::Nd30,
    NatureCode::Nd33,
    NatureCode::Nd39,
    NatureCode::Nd00,
];

/// One operation's worth of records across eight categories and six
/// organizations, including a rations record whose QR target falls back to
/// the requester and a flight-hours record absorbed by the higher command.
const BUDGET_JSON: &str = r#"{
    "operation": {"name": "Operação Curare X", "start": "2026-05-05", "end": "2026-06-10"},
    "rations": [{
        "requesting": {"name": "1ª Cia", "ug": "160222"},
        "qs_org": {"name": "23ª Base Log", "ug": "160780"},
        "operation_days": 37,
        "qs_effective": 100,
        "qs_unit_rate": 11.50,
        "qr_effective": 50,
        "qr_unit_rate": 9.00,
        "allowance_rate": 9.00
    }],
    "fuel": [{
        "requesting": {"name": "20º RCB", "ug": "160345"},
        "operation_days": 10,
        "diesel_price": 6.00,
        "gasoline_price": 6.80,
        "items": [{
            "equipment": "M113",
            "fuel_type": "diesel",
            "quantity": 2,
            "hours_per_day": 8,
            "consumption_rate": 3.0
        }]
    }],
    "lubricant": [{
        "requesting": {"name": "20º RCB", "ug": "160345"},
        "operation_days": 10,
        "items": [{
            "equipment": "Grupo Gerador",
            "quantity": 1,
            "hours_per_day": 8,
            "consumption_per_100h": 0.5,
            "unit_price": 35.00
        }]
    }],
    "per_diems": [{
        "requesting": {"name": "7º BIB", "ug": "160298"},
        "operation_days": 10,
        "trips": 1,
        "air_travel": true,
        "embarkation_tax": 95.00,
        "ranks": [
            {"rank": "Oficial superior", "headcount": 2, "daily_rate": 320.00},
            {"rank": "Praça", "headcount": 10, "daily_rate": 180.00}
        ]
    }],
    "operational_funds": [{
        "requesting": {"name": "3º BPE", "ug": "160519"},
        "operation_days": 37,
        "purpose": "checkpoint sustainment",
        "amount": 1500.00
    }],
    "tickets": [{
        "requesting": {"name": "CIGS", "ug": "160175"},
        "holding": {"name": "CMDO LOG", "ug": "160068"},
        "operation_days": 12,
        "legs": [{"route": "MAO-BSB", "travelers": 4, "unit_fare": 850.00}]
    }],
    "utilities": [{
        "requesting": {"name": "B Adm Ap/3", "ug": "160082"},
        "operation_days": 20,
        "services": [{"service": "Energia elétrica", "monthly_cost": 4500.00}]
    }],
    "flight_hours": [{
        "requesting": {"name": "1ª Cia", "ug": "160222"},
        "holding": {"name": "Cmdo Av Ex", "ug": "160532"},
        "operation_days": 15,
        "aircraft": "HM-1 Pantera",
        "hours_flown": 5,
        "nd30": 0,
        "nd39": 0
    }]
}"#;

async fn consolidated() -> ConsolidatedBudget {
    CusteioEngine::new()
        .from_string(BUDGET_JSON)
        .await
        .expect("the fixture payload must consolidate")
}

#[tokio::test]
async fn grand_totals_reconcile_with_the_requesting_map() {
    let budget = consolidated().await;

    // 70000 rations + 3744 fuel + 14 lubricant + 25540 per-diems
    // + 1500 funds + 3400 tickets + 3000 utilities + 0 flight hours.
    assert_eq!(budget.total, dec!(107198.00));
    assert_eq!(budget.split.nd15, dec!(24400.00));
    assert_eq!(budget.split.nd30, dec!(74898.00));
    assert_eq!(budget.split.nd33, dec!(3400.00));
    assert_eq!(budget.split.nd39, dec!(3000.00));
    assert_eq!(budget.split.nd00, dec!(1500.00));

    // Per category and per nature code, the grand figure is exactly the sum
    // over the requesting-role entries.
    for (category, bucket) in &budget.categories {
        let from_orgs: Decimal = budget
            .by_requesting
            .values()
            .filter_map(|entry| entry.categories.get(category))
            .map(|entry| entry.total)
            .sum();
        assert_eq!(bucket.total, from_orgs, "category {category} total");
        for code in ND_CODES {
            let from_orgs: Decimal = budget
                .by_requesting
                .values()
                .filter_map(|entry| entry.categories.get(category))
                .map(|entry| entry.split.get(code))
                .sum();
            assert_eq!(bucket.split.get(code), from_orgs, "{category} {code}");
        }
    }

    let requesting_sum: Decimal = budget.by_requesting.values().map(|entry| entry.total).sum();
    assert_eq!(budget.total, requesting_sum);
}

#[tokio::test]
async fn holding_map_reconciles_without_double_counting() {
    let budget = consolidated().await;

    let holding_sum: Decimal = budget.by_holding.values().map(|entry| entry.total).sum();
    assert_eq!(budget.total, holding_sum);

    // The rations record is split between its two delivery targets: the QS
    // portion sits with the base, the QR portion with the requester itself
    // (the absent qr_org fell back to the requesting pair).
    let base = &budget.by_holding[&normalize_org_name("23ª Base Log")];
    assert_eq!(base.total, dec!(49750.00));
    let company = &budget.by_holding[&normalize_org_name("1ª Cia")];
    assert_eq!(
        company.categories[&ExpenseCategory::Rations].total,
        dec!(20250.00)
    );

    // Requesting view still carries the whole record in one place.
    let requested = &budget.by_requesting[&normalize_org_name("1a CIA")];
    assert_eq!(
        requested.categories[&ExpenseCategory::Rations].total,
        dec!(70000.00)
    );
}

#[tokio::test]
async fn item_breakdowns_sum_to_their_bucket_totals() {
    let budget = consolidated().await;

    for (category, bucket) in &budget.categories {
        let item_sum: Decimal = bucket.items.values().sum();
        assert_eq!(bucket.total, item_sum, "grand {category} breakdown");
    }
    for entry in budget.by_requesting.values().chain(budget.by_holding.values()) {
        for (category, bucket) in &entry.categories {
            let item_sum: Decimal = bucket.items.values().sum();
            assert_eq!(bucket.total, item_sum, "per-organization {category} breakdown");
        }
    }

    // Single-amount categories report one labeled row rather than an empty
    // breakdown, so a demand statement never shows a total without items.
    let budget = CusteioEngine::new()
        .from_string(
            r#"{
                "food_supplements": [{
                    "requesting": {"name": "6ª Cia E Cmb", "ug": "160271"},
                    "operation_days": 18,
                    "headcount": 120,
                    "daily_rate": 3.50
                }],
                "operational_funds": [{
                    "requesting": {"name": "3º BPE", "ug": "160519"},
                    "operation_days": 45,
                    "purpose": "checkpoint sustainment",
                    "amount": 1500.00
                }]
            }"#,
        )
        .await
        .expect("the two-record payload must consolidate");
    for (category, bucket) in &budget.categories {
        let item_sum: Decimal = bucket.items.values().sum();
        assert_eq!(bucket.total, item_sum, "{category} breakdown");
        assert!(!bucket.items.is_empty(), "{category} breakdown is empty");
    }
    let supplement = &budget.categories[&ExpenseCategory::FoodSupplement];
    assert_eq!(supplement.total, dec!(7560.00));
    assert_eq!(
        supplement.items["Feeding complement (120 troops)"],
        dec!(7560.00)
    );
}

#[tokio::test]
async fn absorbed_flight_hours_keep_their_hours_and_lose_their_money() {
    let budget = consolidated().await;

    let flight = &budget.categories[&ExpenseCategory::FlightHours];
    assert_eq!(flight.total, Decimal::ZERO);
    assert_eq!(flight.quantity, dec!(5));
    assert_eq!(flight.memoranda.len(), 1);
    assert!(flight.memoranda[0].ends_with("Total: cost absorbed by higher command"));

    // The squadron's holder entry exists with hours but no money.
    let aviation = &budget.by_holding[&normalize_org_name("Cmdo Av Ex")];
    assert_eq!(aviation.total, Decimal::ZERO);
    assert_eq!(
        aviation.categories[&ExpenseCategory::FlightHours].quantity,
        dec!(5)
    );
}

#[tokio::test]
async fn consolidation_is_deterministic() {
    let engine = CusteioEngine::new();
    let first = engine
        .from_string(BUDGET_JSON)
        .await
        .expect("the fixture payload must consolidate");
    let second = engine
        .from_string(BUDGET_JSON)
        .await
        .expect("the fixture payload must consolidate");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("the budget must serialize"),
        serde_json::to_string(&second).expect("the budget must serialize"),
    );

    let statement = ConsolidatedSummaryGenerator::new(&first).generate();
    assert_eq!(statement, ConsolidatedSummaryGenerator::new(&second).generate());
    assert!(statement.starts_with("CONSOLIDATED OPERATIONAL BUDGET\nOperation: Operação Curare X\n"));
    assert!(statement.contains("Grand total: R$ 107.198,00\n"));
}

#[tokio::test]
async fn demand_statement_renders_for_a_holding_entry() {
    let budget = consolidated().await;
    let base = &budget.by_holding[&normalize_org_name("23ª Base Log")];

    let statement = OrganizationDemandGenerator::new(base, Role::ResourceHolding).generate();
    assert!(statement.starts_with("DEMAND STATEMENT: 23A BASE LOG\n"));
    assert!(statement.contains("UG codes: 160780\n"));
    assert!(statement.contains("Total: R$ 49.750,00\n"));
}

#[tokio::test]
async fn file_payloads_consolidate_like_string_payloads() {
    let dir = tempfile::tempdir().expect("temp dir must be creatable");
    let path = dir.path().join("budget.json");
    tokio::fs::write(&path, BUDGET_JSON)
        .await
        .expect("fixture must be writable");

    let budget = CusteioEngine::new()
        .from_file(&path)
        .await
        .expect("the file payload must consolidate");
    assert_eq!(budget.total, dec!(107198.00));

    let error = CusteioEngine::new()
        .from_file(dir.path().join("missing.json"))
        .await
        .expect_err("a missing file must fail the run");
    assert!(matches!(error, ConsolidationError::ReadError { .. }));
}

#[tokio::test]
async fn half_specified_lubricant_item_fails_the_whole_run() {
    let payload = r#"{
        "tickets": [{
            "requesting": {"name": "CIGS", "ug": "160175"},
            "operation_days": 5,
            "legs": [{"route": "MAO-BSB", "travelers": 2, "unit_fare": 850.00}]
        }],
        "lubricant": [{
            "requesting": {"name": "20º RCB", "ug": "160345"},
            "operation_days": 10,
            "items": [{
                "equipment": "Grupo Gerador",
                "quantity": 1,
                "hours_per_day": 8,
                "consumption_per_100h": 0.5
            }]
        }]
    }"#;

    let error = CusteioEngine::new()
        .from_string(payload)
        .await
        .expect_err("a half-specified lubricant item must reject the run");
    assert!(matches!(
        error,
        ConsolidationError::PartialLubricantItem {
            missing: "unit price",
            ..
        }
    ));
}

/// Caller-side record source: a fixed snapshot plus one fetch that can be
/// made to fail, standing in for a store whose collections resolve
/// independently.
struct StubRepository {
    rations: Vec<RationsRecord>,
    fuel: Vec<FuelRecord>,
    fail_fuel: bool,
}

#[async_trait]
impl RecordsRepository for StubRepository {
    async fn operation(&self) -> Result<Option<OperationProfile>, ConsolidationError> {
        Ok(None)
    }

    async fn rations(&self) -> Result<Vec<RationsRecord>, ConsolidationError> {
        Ok(self.rations.clone())
    }

    async fn materiel(&self) -> Result<Vec<MaterielRecord>, ConsolidationError> {
        Ok(Vec::new())
    }

    async fn fuel(&self) -> Result<Vec<FuelRecord>, ConsolidationError> {
        if self.fail_fuel {
            return Err(ConsolidationError::InvalidSection {
                section: "fuel",
                details: "upstream fetch failed".to_string(),
            });
        }
        Ok(self.fuel.clone())
    }

    async fn lubricant(&self) -> Result<Vec<LubricantRecord>, ConsolidationError> {
        Ok(Vec::new())
    }

    async fn per_diems(&self) -> Result<Vec<PerDiemRecord>, ConsolidationError> {
        Ok(Vec::new())
    }

    async fn operational_funds(&self) -> Result<Vec<OperationalFundsRecord>, ConsolidationError> {
        Ok(Vec::new())
    }

    async fn fund_advances(&self) -> Result<Vec<FundAdvanceRecord>, ConsolidationError> {
        Ok(Vec::new())
    }

    async fn tickets(&self) -> Result<Vec<TicketsRecord>, ConsolidationError> {
        Ok(Vec::new())
    }

    async fn utilities(&self) -> Result<Vec<UtilitiesRecord>, ConsolidationError> {
        Ok(Vec::new())
    }

    async fn flight_hours(&self) -> Result<Vec<FlightHoursRecord>, ConsolidationError> {
        Ok(Vec::new())
    }

    async fn consumables(&self) -> Result<Vec<ConsumablesRecord>, ConsolidationError> {
        Ok(Vec::new())
    }

    async fn food_supplements(&self) -> Result<Vec<FoodSupplementRecord>, ConsolidationError> {
        Ok(Vec::new())
    }

    async fn third_party_services(
        &self,
    ) -> Result<Vec<ThirdPartyServicesRecord>, ConsolidationError> {
        Ok(Vec::new())
    }
}

fn stub_records() -> StubRepository {
    StubRepository {
        rations: vec![RationsRecord {
            requesting: org("1ª Cia", "160222"),
            qs_org: org("23ª Base Log", "160780"),
            qr_org: org("1ª Cia", "160222"),
            operation_days: 10,
            qs_effective: 100,
            qs_unit_rate: dec!(11.50),
            qr_effective: 50,
            qr_unit_rate: dec!(9.00),
            allowance_rate: dec!(9.00),
        }],
        fuel: vec![FuelRecord {
            requesting: org("20º RCB", "160345"),
            holding: org("20º RCB", "160345"),
            operation_days: 10,
            diesel_price: dec!(6.00),
            gasoline_price: dec!(6.80),
            items: vec![FuelItem {
                equipment: "M113".into(),
                fuel_type: FuelType::Diesel,
                quantity: 2,
                hours_per_day: dec!(8),
                consumption_rate: dec!(3.0),
            }],
        }],
        fail_fuel: false,
    }
}

#[tokio::test]
async fn caller_provided_repositories_consolidate() {
    let budget = CusteioEngine::new()
        .from_repository(&stub_records())
        .await
        .expect("the stub snapshot must consolidate");

    // 100 x 11.50 x 10 + 50 x 9.00 x 10 rations, 3744 fuel.
    assert_eq!(budget.total, dec!(11500.00) + dec!(4500.00) + dec!(3744.00));
    assert!(budget.operation.is_none());
}

#[tokio::test]
async fn one_failed_fetch_fails_the_run_with_no_partial_aggregate() {
    let mut repository = stub_records();
    repository.fail_fuel = true;

    let error = CusteioEngine::new()
        .from_repository(&repository)
        .await
        .expect_err("a failed category fetch must fail the whole run");
    assert!(matches!(
        error,
        ConsolidationError::InvalidSection { section: "fuel", .. }
    ));
}
