use rust_decimal::Decimal;

use super::{category::ExpenseCategory, organization::OrgRef};

/// One expense record as entered for a single organization and category.
///
/// Closed sum type: every category the engine consolidates has a variant
/// here, and cost dispatch matches exhaustively, so adding a category will
/// not compile until its formula and narration exist.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseRecord {
    Rations(RationsRecord),
    Materiel(MaterielRecord),
    Fuel(FuelRecord),
    Lubricant(LubricantRecord),
    PerDiem(PerDiemRecord),
    OperationalFunds(OperationalFundsRecord),
    FundAdvance(FundAdvanceRecord),
    Tickets(TicketsRecord),
    Utilities(UtilitiesRecord),
    FlightHours(FlightHoursRecord),
    Consumables(ConsumablesRecord),
    FoodSupplement(FoodSupplementRecord),
    ThirdPartyServices(ThirdPartyServicesRecord),
}

/// Class I rations. Carries two delivery targets: quantities supplied at
/// source (QS) and at destination (QR), each with its own resource-holding
/// organization.
#[derive(Debug, Clone, PartialEq)]
pub struct RationsRecord {
    pub requesting: OrgRef,
    pub qs_org: OrgRef,
    pub qr_org: OrgRef,
    pub operation_days: u32,
    pub qs_effective: u32,
    pub qs_unit_rate: Decimal,
    pub qr_effective: u32,
    pub qr_unit_rate: Decimal,
    /// Unit rate for the cyclical monthly allowance (etapa) complement.
    pub allowance_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterielRecord {
    pub requesting: OrgRef,
    pub holding: OrgRef,
    pub operation_days: u32,
    pub items: Vec<MaterielItem>,
}

/// Pre-costed matériel line for one supply class (II through IX), already
/// split between its two legal nature codes.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterielItem {
    pub supply_class: String,
    pub nd30: Decimal,
    pub nd39: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelType {
    Diesel,
    Gasoline,
}

impl FuelType {
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::Gasoline => "Gasoline",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuelRecord {
    pub requesting: OrgRef,
    pub holding: OrgRef,
    pub operation_days: u32,
    pub diesel_price: Decimal,
    pub gasoline_price: Decimal,
    pub items: Vec<FuelItem>,
}

/// One equipment line: consumption is liters per operating hour.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelItem {
    pub equipment: String,
    pub fuel_type: FuelType,
    pub quantity: u32,
    pub hours_per_day: Decimal,
    pub consumption_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LubricantRecord {
    pub requesting: OrgRef,
    pub holding: OrgRef,
    pub operation_days: u32,
    pub items: Vec<LubricantItem>,
}

/// One equipment line: consumption is liters per 100 operating hours. An
/// item with exactly one of `consumption_per_100h`/`unit_price` set is
/// rejected by validation before any aggregation starts.
#[derive(Debug, Clone, PartialEq)]
pub struct LubricantItem {
    pub equipment: String,
    pub quantity: u32,
    pub hours_per_day: Decimal,
    pub consumption_per_100h: Decimal,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerDiemRecord {
    pub requesting: OrgRef,
    pub holding: OrgRef,
    pub operation_days: u32,
    pub trips: u32,
    pub air_travel: bool,
    /// Embarkation tax per traveler per trip; only charged when `air_travel`.
    pub embarkation_tax: Decimal,
    pub ranks: Vec<RankBucket>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankBucket {
    pub rank: String,
    pub headcount: u32,
    pub daily_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperationalFundsRecord {
    pub requesting: OrgRef,
    pub holding: OrgRef,
    pub operation_days: u32,
    pub purpose: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FundAdvanceRecord {
    pub requesting: OrgRef,
    pub holding: OrgRef,
    pub operation_days: u32,
    pub purpose: String,
    pub nd30: Decimal,
    pub nd39: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketsRecord {
    pub requesting: OrgRef,
    pub holding: OrgRef,
    pub operation_days: u32,
    pub legs: Vec<TicketLeg>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketLeg {
    pub route: String,
    pub travelers: u32,
    pub unit_fare: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UtilitiesRecord {
    pub requesting: OrgRef,
    pub holding: OrgRef,
    pub operation_days: u32,
    pub services: Vec<UtilityService>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UtilityService {
    pub service: String,
    pub monthly_cost: Decimal,
}

/// Flight hours carry a record-provided ND split rather than a derived
/// formula. Both components zero with hours flown means the cost is absorbed
/// by the higher command: the hours still count, the money does not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightHoursRecord {
    pub requesting: OrgRef,
    pub holding: OrgRef,
    pub operation_days: u32,
    pub aircraft: String,
    pub hours_flown: Decimal,
    pub nd30: Decimal,
    pub nd39: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsumablesRecord {
    pub requesting: OrgRef,
    pub holding: OrgRef,
    pub operation_days: u32,
    pub items: Vec<ConsumableItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsumableItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoodSupplementRecord {
    pub requesting: OrgRef,
    pub holding: OrgRef,
    pub operation_days: u32,
    pub headcount: u32,
    pub daily_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThirdPartyServicesRecord {
    pub requesting: OrgRef,
    pub holding: OrgRef,
    pub operation_days: u32,
    pub services: Vec<ContractedService>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContractedService {
    pub description: String,
    pub amount: Decimal,
}

// --

impl ExpenseRecord {
    pub fn category(&self) -> ExpenseCategory {
        match self {
            ExpenseRecord::Rations(_) => ExpenseCategory::Rations,
            ExpenseRecord::Materiel(_) => ExpenseCategory::Materiel,
            ExpenseRecord::Fuel(_) => ExpenseCategory::Fuel,
            ExpenseRecord::Lubricant(_) => ExpenseCategory::Lubricant,
            ExpenseRecord::PerDiem(_) => ExpenseCategory::PerDiem,
            ExpenseRecord::OperationalFunds(_) => ExpenseCategory::OperationalFunds,
            ExpenseRecord::FundAdvance(_) => ExpenseCategory::FundAdvance,
            ExpenseRecord::Tickets(_) => ExpenseCategory::Tickets,
            ExpenseRecord::Utilities(_) => ExpenseCategory::Utilities,
            ExpenseRecord::FlightHours(_) => ExpenseCategory::FlightHours,
            ExpenseRecord::Consumables(_) => ExpenseCategory::Consumables,
            ExpenseRecord::FoodSupplement(_) => ExpenseCategory::FoodSupplement,
            ExpenseRecord::ThirdPartyServices(_) => ExpenseCategory::ThirdPartyServices,
        }
    }

    pub fn requesting(&self) -> &OrgRef {
        match self {
            ExpenseRecord::Rations(r) => &r.requesting,
            ExpenseRecord::Materiel(r) => &r.requesting,
            ExpenseRecord::Fuel(r) => &r.requesting,
            ExpenseRecord::Lubricant(r) => &r.requesting,
            ExpenseRecord::PerDiem(r) => &r.requesting,
            ExpenseRecord::OperationalFunds(r) => &r.requesting,
            ExpenseRecord::FundAdvance(r) => &r.requesting,
            ExpenseRecord::Tickets(r) => &r.requesting,
            ExpenseRecord::Utilities(r) => &r.requesting,
            ExpenseRecord::FlightHours(r) => &r.requesting,
            ExpenseRecord::Consumables(r) => &r.requesting,
            ExpenseRecord::FoodSupplement(r) => &r.requesting,
            ExpenseRecord::ThirdPartyServices(r) => &r.requesting,
        }
    }
}
