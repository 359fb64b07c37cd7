use rust_decimal::Decimal;

use crate::entities::{
    ConsumableItem, ConsumablesRecord, ContractedService, ExpenseSnapshot, FlightHoursRecord,
    FoodSupplementRecord, FuelItem, FuelRecord, FuelType, FundAdvanceRecord, LubricantItem,
    LubricantRecord, MaterielItem, MaterielRecord, OperationProfile, OperationalFundsRecord,
    PerDiemRecord, RankBucket, RationsRecord, ThirdPartyServicesRecord, TicketLeg, TicketsRecord,
    UtilitiesRecord, UtilityService,
};

use super::{
    date_model::IsoDateModel,
    organization_model::{resolve_holding_org, OrganizationModel},
};

// Deserialization shapes for the budget payload, one per category key.
// Numeric fields default to zero and organization fields fall back to the
// requesting pair, so sparsely filled payloads parse; rejecting genuinely
// ambiguous rows is the validation pass's job, not the parser's.

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct OperationProfileModel {
    #[serde(default)]
    pub(crate) name: String,
    pub(crate) start: IsoDateModel,
    pub(crate) end: IsoDateModel,
}

impl From<OperationProfileModel> for OperationProfile {
    fn from(model: OperationProfileModel) -> Self {
        OperationProfile {
            name: model.name,
            start: model.start.into(),
            end: model.end.into(),
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct RationsModel {
    #[serde(default)]
    pub(crate) requesting: OrganizationModel,
    #[serde(default)]
    pub(crate) qs_org: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) qr_org: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) operation_days: u32,
    #[serde(default)]
    pub(crate) qs_effective: u32,
    #[serde(default)]
    pub(crate) qs_unit_rate: Decimal,
    #[serde(default)]
    pub(crate) qr_effective: u32,
    #[serde(default)]
    pub(crate) qr_unit_rate: Decimal,
    #[serde(default)]
    pub(crate) allowance_rate: Decimal,
}

impl From<RationsModel> for RationsRecord {
    fn from(model: RationsModel) -> Self {
        RationsRecord {
            qs_org: resolve_holding_org(&model.requesting, model.qs_org),
            qr_org: resolve_holding_org(&model.requesting, model.qr_org),
            requesting: model.requesting.into(),
            operation_days: model.operation_days,
            qs_effective: model.qs_effective,
            qs_unit_rate: model.qs_unit_rate,
            qr_effective: model.qr_effective,
            qr_unit_rate: model.qr_unit_rate,
            allowance_rate: model.allowance_rate,
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct MaterielModel {
    #[serde(default)]
    pub(crate) requesting: OrganizationModel,
    #[serde(default)]
    pub(crate) holding: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) operation_days: u32,
    #[serde(default)]
    pub(crate) items: Vec<MaterielItemModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct MaterielItemModel {
    #[serde(default)]
    pub(crate) supply_class: String,
    #[serde(default)]
    pub(crate) nd30: Decimal,
    #[serde(default)]
    pub(crate) nd39: Decimal,
}

impl From<MaterielModel> for MaterielRecord {
    fn from(model: MaterielModel) -> Self {
        MaterielRecord {
            holding: resolve_holding_org(&model.requesting, model.holding),
            requesting: model.requesting.into(),
            operation_days: model.operation_days,
            items: model
                .items
                .into_iter()
                .map(|item| MaterielItem {
                    supply_class: item.supply_class,
                    nd30: item.nd30,
                    nd39: item.nd39,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, serde_derive::Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum FuelTypeModel {
    #[default]
    Diesel,
    Gasoline,
}

impl From<FuelTypeModel> for FuelType {
    fn from(model: FuelTypeModel) -> Self {
        match model {
            FuelTypeModel::Diesel => FuelType::Diesel,
            FuelTypeModel::Gasoline => FuelType::Gasoline,
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct FuelModel {
    #[serde(default)]
    pub(crate) requesting: OrganizationModel,
    #[serde(default)]
    pub(crate) holding: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) operation_days: u32,
    #[serde(default)]
    pub(crate) diesel_price: Decimal,
    #[serde(default)]
    pub(crate) gasoline_price: Decimal,
    #[serde(default)]
    pub(crate) items: Vec<FuelItemModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct FuelItemModel {
    #[serde(default)]
    pub(crate) equipment: String,
    #[serde(default)]
    pub(crate) fuel_type: FuelTypeModel,
    #[serde(default)]
    pub(crate) quantity: u32,
    #[serde(default)]
    pub(crate) hours_per_day: Decimal,
    #[serde(default)]
    pub(crate) consumption_rate: Decimal,
}

impl From<FuelModel> for FuelRecord {
    fn from(model: FuelModel) -> Self {
        FuelRecord {
            holding: resolve_holding_org(&model.requesting, model.holding),
            requesting: model.requesting.into(),
            operation_days: model.operation_days,
            diesel_price: model.diesel_price,
            gasoline_price: model.gasoline_price,
            items: model
                .items
                .into_iter()
                .map(|item| FuelItem {
                    equipment: item.equipment,
                    fuel_type: item.fuel_type.into(),
                    quantity: item.quantity,
                    hours_per_day: item.hours_per_day,
                    consumption_rate: item.consumption_rate,
                })
                .collect(),
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct LubricantModel {
    #[serde(default)]
    pub(crate) requesting: OrganizationModel,
    #[serde(default)]
    pub(crate) holding: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) operation_days: u32,
    #[serde(default)]
    pub(crate) items: Vec<LubricantItemModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct LubricantItemModel {
    #[serde(default)]
    pub(crate) equipment: String,
    #[serde(default)]
    pub(crate) quantity: u32,
    #[serde(default)]
    pub(crate) hours_per_day: Decimal,
    #[serde(default)]
    pub(crate) consumption_per_100h: Decimal,
    #[serde(default)]
    pub(crate) unit_price: Decimal,
}

impl From<LubricantModel> for LubricantRecord {
    fn from(model: LubricantModel) -> Self {
        LubricantRecord {
            holding: resolve_holding_org(&model.requesting, model.holding),
            requesting: model.requesting.into(),
            operation_days: model.operation_days,
            items: model
                .items
                .into_iter()
                .map(|item| LubricantItem {
                    equipment: item.equipment,
                    quantity: item.quantity,
                    hours_per_day: item.hours_per_day,
                    consumption_per_100h: item.consumption_per_100h,
                    unit_price: item.unit_price,
                })
                .collect(),
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct PerDiemModel {
    #[serde(default)]
    pub(crate) requesting: OrganizationModel,
    #[serde(default)]
    pub(crate) holding: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) operation_days: u32,
    #[serde(default)]
    pub(crate) trips: u32,
    #[serde(default)]
    pub(crate) air_travel: bool,
    #[serde(default)]
    pub(crate) embarkation_tax: Decimal,
    #[serde(default)]
    pub(crate) ranks: Vec<RankBucketModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct RankBucketModel {
    #[serde(default)]
    pub(crate) rank: String,
    #[serde(default)]
    pub(crate) headcount: u32,
    #[serde(default)]
    pub(crate) daily_rate: Decimal,
}

impl From<PerDiemModel> for PerDiemRecord {
    fn from(model: PerDiemModel) -> Self {
        PerDiemRecord {
            holding: resolve_holding_org(&model.requesting, model.holding),
            requesting: model.requesting.into(),
            operation_days: model.operation_days,
            trips: model.trips,
            air_travel: model.air_travel,
            embarkation_tax: model.embarkation_tax,
            ranks: model
                .ranks
                .into_iter()
                .map(|bucket| RankBucket {
                    rank: bucket.rank,
                    headcount: bucket.headcount,
                    daily_rate: bucket.daily_rate,
                })
                .collect(),
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct OperationalFundsModel {
    #[serde(default)]
    pub(crate) requesting: OrganizationModel,
    #[serde(default)]
    pub(crate) holding: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) operation_days: u32,
    #[serde(default)]
    pub(crate) purpose: String,
    #[serde(default)]
    pub(crate) amount: Decimal,
}

impl From<OperationalFundsModel> for OperationalFundsRecord {
    fn from(model: OperationalFundsModel) -> Self {
        OperationalFundsRecord {
            holding: resolve_holding_org(&model.requesting, model.holding),
            requesting: model.requesting.into(),
            operation_days: model.operation_days,
            purpose: model.purpose,
            amount: model.amount,
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct FundAdvanceModel {
    #[serde(default)]
    pub(crate) requesting: OrganizationModel,
    #[serde(default)]
    pub(crate) holding: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) operation_days: u32,
    #[serde(default)]
    pub(crate) purpose: String,
    #[serde(default)]
    pub(crate) nd30: Decimal,
    #[serde(default)]
    pub(crate) nd39: Decimal,
}

impl From<FundAdvanceModel> for FundAdvanceRecord {
    fn from(model: FundAdvanceModel) -> Self {
        FundAdvanceRecord {
            holding: resolve_holding_org(&model.requesting, model.holding),
            requesting: model.requesting.into(),
            operation_days: model.operation_days,
            purpose: model.purpose,
            nd30: model.nd30,
            nd39: model.nd39,
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct TicketsModel {
    #[serde(default)]
    pub(crate) requesting: OrganizationModel,
    #[serde(default)]
    pub(crate) holding: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) operation_days: u32,
    #[serde(default)]
    pub(crate) legs: Vec<TicketLegModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct TicketLegModel {
    #[serde(default)]
    pub(crate) route: String,
    #[serde(default)]
    pub(crate) travelers: u32,
    #[serde(default)]
    pub(crate) unit_fare: Decimal,
}

impl From<TicketsModel> for TicketsRecord {
    fn from(model: TicketsModel) -> Self {
        TicketsRecord {
            holding: resolve_holding_org(&model.requesting, model.holding),
            requesting: model.requesting.into(),
            operation_days: model.operation_days,
            legs: model
                .legs
                .into_iter()
                .map(|leg| TicketLeg {
                    route: leg.route,
                    travelers: leg.travelers,
                    unit_fare: leg.unit_fare,
                })
                .collect(),
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct UtilitiesModel {
    #[serde(default)]
    pub(crate) requesting: OrganizationModel,
    #[serde(default)]
    pub(crate) holding: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) operation_days: u32,
    #[serde(default)]
    pub(crate) services: Vec<UtilityServiceModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct UtilityServiceModel {
    #[serde(default)]
    pub(crate) service: String,
    #[serde(default)]
    pub(crate) monthly_cost: Decimal,
}

impl From<UtilitiesModel> for UtilitiesRecord {
    fn from(model: UtilitiesModel) -> Self {
        UtilitiesRecord {
            holding: resolve_holding_org(&model.requesting, model.holding),
            requesting: model.requesting.into(),
            operation_days: model.operation_days,
            services: model
                .services
                .into_iter()
                .map(|service| UtilityService {
                    service: service.service,
                    monthly_cost: service.monthly_cost,
                })
                .collect(),
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct FlightHoursModel {
    #[serde(default)]
    pub(crate) requesting: OrganizationModel,
    #[serde(default)]
    pub(crate) holding: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) operation_days: u32,
    #[serde(default)]
    pub(crate) aircraft: String,
    #[serde(default)]
    pub(crate) hours_flown: Decimal,
    #[serde(default)]
    pub(crate) nd30: Decimal,
    #[serde(default)]
    pub(crate) nd39: Decimal,
}

impl From<FlightHoursModel> for FlightHoursRecord {
    fn from(model: FlightHoursModel) -> Self {
        FlightHoursRecord {
            holding: resolve_holding_org(&model.requesting, model.holding),
            requesting: model.requesting.into(),
            operation_days: model.operation_days,
            aircraft: model.aircraft,
            hours_flown: model.hours_flown,
            nd30: model.nd30,
            nd39: model.nd39,
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct ConsumablesModel {
    #[serde(default)]
    pub(crate) requesting: OrganizationModel,
    #[serde(default)]
    pub(crate) holding: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) operation_days: u32,
    #[serde(default)]
    pub(crate) items: Vec<ConsumableItemModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct ConsumableItemModel {
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) quantity: u32,
    #[serde(default)]
    pub(crate) unit_price: Decimal,
}

impl From<ConsumablesModel> for ConsumablesRecord {
    fn from(model: ConsumablesModel) -> Self {
        ConsumablesRecord {
            holding: resolve_holding_org(&model.requesting, model.holding),
            requesting: model.requesting.into(),
            operation_days: model.operation_days,
            items: model
                .items
                .into_iter()
                .map(|item| ConsumableItem {
                    description: item.description,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct FoodSupplementModel {
    #[serde(default)]
    pub(crate) requesting: OrganizationModel,
    #[serde(default)]
    pub(crate) holding: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) operation_days: u32,
    #[serde(default)]
    pub(crate) headcount: u32,
    #[serde(default)]
    pub(crate) daily_rate: Decimal,
}

impl From<FoodSupplementModel> for FoodSupplementRecord {
    fn from(model: FoodSupplementModel) -> Self {
        FoodSupplementRecord {
            holding: resolve_holding_org(&model.requesting, model.holding),
            requesting: model.requesting.into(),
            operation_days: model.operation_days,
            headcount: model.headcount,
            daily_rate: model.daily_rate,
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct ThirdPartyServicesModel {
    #[serde(default)]
    pub(crate) requesting: OrganizationModel,
    #[serde(default)]
    pub(crate) holding: Option<OrganizationModel>,
    #[serde(default)]
    pub(crate) operation_days: u32,
    #[serde(default)]
    pub(crate) services: Vec<ContractedServiceModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct ContractedServiceModel {
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) amount: Decimal,
}

impl From<ThirdPartyServicesModel> for ThirdPartyServicesRecord {
    fn from(model: ThirdPartyServicesModel) -> Self {
        ThirdPartyServicesRecord {
            holding: resolve_holding_org(&model.requesting, model.holding),
            requesting: model.requesting.into(),
            operation_days: model.operation_days,
            services: model
                .services
                .into_iter()
                .map(|service| ContractedService {
                    description: service.description,
                    amount: service.amount,
                })
                .collect(),
        }
    }
}

/// Everything one payload carries, decoded section by section. Assembled by
/// the datasource rather than derived, so a malformed section is reported
/// under its own key.
#[derive(Debug, Default)]
pub(crate) struct BudgetPayloadModel {
    pub(crate) operation: Option<OperationProfileModel>,
    pub(crate) rations: Vec<RationsModel>,
    pub(crate) materiel: Vec<MaterielModel>,
    pub(crate) fuel: Vec<FuelModel>,
    pub(crate) lubricant: Vec<LubricantModel>,
    pub(crate) per_diems: Vec<PerDiemModel>,
    pub(crate) operational_funds: Vec<OperationalFundsModel>,
    pub(crate) fund_advances: Vec<FundAdvanceModel>,
    pub(crate) tickets: Vec<TicketsModel>,
    pub(crate) utilities: Vec<UtilitiesModel>,
    pub(crate) flight_hours: Vec<FlightHoursModel>,
    pub(crate) consumables: Vec<ConsumablesModel>,
    pub(crate) food_supplements: Vec<FoodSupplementModel>,
    pub(crate) third_party_services: Vec<ThirdPartyServicesModel>,
}

fn convert<M, E: From<M>>(models: Vec<M>) -> Vec<E> {
    models.into_iter().map(E::from).collect()
}

impl From<BudgetPayloadModel> for ExpenseSnapshot {
    fn from(model: BudgetPayloadModel) -> Self {
        ExpenseSnapshot {
            operation: model.operation.map(OperationProfile::from),
            rations: convert(model.rations),
            materiel: convert(model.materiel),
            fuel: convert(model.fuel),
            lubricant: convert(model.lubricant),
            per_diems: convert(model.per_diems),
            operational_funds: convert(model.operational_funds),
            fund_advances: convert(model.fund_advances),
            tickets: convert(model.tickets),
            utilities: convert(model.utilities),
            flight_hours: convert(model.flight_hours),
            consumables: convert(model.consumables),
            food_supplements: convert(model.food_supplements),
            third_party_services: convert(model.third_party_services),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn absent_numerics_deserialize_to_zero() {
        let model: RationsModel = serde_json::from_str(
            r#"{"requesting": {"name": "1ª Cia", "ug": "160222"}, "operation_days": 37}"#,
        )
        .expect("sparse rations row must parse");
        let record = RationsRecord::from(model);
        assert_eq!(record.qs_effective, 0);
        assert_eq!(record.qs_unit_rate, Decimal::ZERO);
        assert_eq!(record.allowance_rate, Decimal::ZERO);
        // Absent delivery targets mean the requester supplies itself.
        assert_eq!(record.qs_org.name, "1ª Cia");
        assert_eq!(record.qr_org.ug, "160222");
    }

    #[test]
    fn fuel_items_default_to_diesel() {
        let model: FuelModel = serde_json::from_str(
            r#"{
                "requesting": {"name": "20º RCB", "ug": "160345"},
                "operation_days": 10,
                "diesel_price": 6.0,
                "items": [{"equipment": "M113", "quantity": 2, "hours_per_day": 8, "consumption_rate": 3.0}]
            }"#,
        )
        .expect("fuel row without fuel_type must parse");
        let record = FuelRecord::from(model);
        assert_eq!(record.items[0].fuel_type, FuelType::Diesel);
        assert_eq!(record.items[0].hours_per_day, dec!(8));
    }

    #[test]
    fn money_fields_keep_exact_decimal_values() {
        let model: TicketLegModel =
            serde_json::from_str(r#"{"route": "MAO-BSB", "travelers": 4, "unit_fare": 850.10}"#)
                .expect("leg must parse");
        assert_eq!(model.unit_fare, dec!(850.10));
    }
}
