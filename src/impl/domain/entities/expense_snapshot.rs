use super::{
    expense_record::{
        ConsumablesRecord, ExpenseRecord, FlightHoursRecord, FoodSupplementRecord,
        FuelRecord, FundAdvanceRecord, LubricantRecord, MaterielRecord, OperationalFundsRecord,
        PerDiemRecord, RationsRecord, ThirdPartyServicesRecord, TicketsRecord, UtilitiesRecord,
    },
    operation::OperationProfile,
};

/// Complete snapshot of every category collection for one run. Aggregation
/// only ever starts from a fully resolved snapshot; there is no partial form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseSnapshot {
    pub operation: Option<OperationProfile>,
    pub rations: Vec<RationsRecord>,
    pub materiel: Vec<MaterielRecord>,
    pub fuel: Vec<FuelRecord>,
    pub lubricant: Vec<LubricantRecord>,
    pub per_diems: Vec<PerDiemRecord>,
    pub operational_funds: Vec<OperationalFundsRecord>,
    pub fund_advances: Vec<FundAdvanceRecord>,
    pub tickets: Vec<TicketsRecord>,
    pub utilities: Vec<UtilitiesRecord>,
    pub flight_hours: Vec<FlightHoursRecord>,
    pub consumables: Vec<ConsumablesRecord>,
    pub food_supplements: Vec<FoodSupplementRecord>,
    pub third_party_services: Vec<ThirdPartyServicesRecord>,
}

impl ExpenseSnapshot {
    /// Flattens the snapshot into the record stream consumed by aggregation.
    pub fn into_records(self) -> Vec<ExpenseRecord> {
        let mut records = Vec::new();
        records.extend(self.rations.into_iter().map(ExpenseRecord::Rations));
        records.extend(self.materiel.into_iter().map(ExpenseRecord::Materiel));
        records.extend(self.fuel.into_iter().map(ExpenseRecord::Fuel));
        records.extend(self.lubricant.into_iter().map(ExpenseRecord::Lubricant));
        records.extend(self.per_diems.into_iter().map(ExpenseRecord::PerDiem));
        records.extend(
            self.operational_funds
                .into_iter()
                .map(ExpenseRecord::OperationalFunds),
        );
        records.extend(self.fund_advances.into_iter().map(ExpenseRecord::FundAdvance));
        records.extend(self.tickets.into_iter().map(ExpenseRecord::Tickets));
        records.extend(self.utilities.into_iter().map(ExpenseRecord::Utilities));
        records.extend(self.flight_hours.into_iter().map(ExpenseRecord::FlightHours));
        records.extend(self.consumables.into_iter().map(ExpenseRecord::Consumables));
        records.extend(
            self.food_supplements
                .into_iter()
                .map(ExpenseRecord::FoodSupplement),
        );
        records.extend(
            self.third_party_services
                .into_iter()
                .map(ExpenseRecord::ThirdPartyServices),
        );
        records
    }
}
