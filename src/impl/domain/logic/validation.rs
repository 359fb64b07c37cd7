use rust_decimal::Decimal;

use crate::{
    entities::{ExpenseRecord, LubricantRecord},
    errors::ConsolidationError,
};

/// Checks every record before any aggregation starts. One bad record fails
/// the whole set: consolidating around it would silently understate the
/// operation's cost.
///
/// Absent numeric fields are zero by the payload contract and pass; the
/// formulas treat them as zero-cost. What cannot pass is a half-specified
/// input (a lubricant item with consumption but no price, or the reverse)
/// and negative money, both of which indicate data entry mistakes rather
/// than absent data.
pub fn validate_records(records: &[ExpenseRecord]) -> Result<(), ConsolidationError> {
    for record in records {
        let category = record.category().label();
        let organization = record.requesting().name.clone();
        let check = |value: Decimal, field: &'static str| {
            if value < Decimal::ZERO {
                Err(ConsolidationError::NegativeAmount {
                    category,
                    organization: organization.clone(),
                    field,
                })
            } else {
                Ok(())
            }
        };
        match record {
            ExpenseRecord::Rations(r) => {
                check(r.qs_unit_rate, "qs_unit_rate")?;
                check(r.qr_unit_rate, "qr_unit_rate")?;
                check(r.allowance_rate, "allowance_rate")?;
            }
            ExpenseRecord::Materiel(r) => {
                for item in &r.items {
                    check(item.nd30, "nd30")?;
                    check(item.nd39, "nd39")?;
                }
            }
            ExpenseRecord::Fuel(r) => {
                check(r.diesel_price, "diesel_price")?;
                check(r.gasoline_price, "gasoline_price")?;
                for item in &r.items {
                    check(item.hours_per_day, "hours_per_day")?;
                    check(item.consumption_rate, "consumption_rate")?;
                }
            }
            ExpenseRecord::Lubricant(r) => {
                for item in &r.items {
                    check(item.hours_per_day, "hours_per_day")?;
                    check(item.consumption_per_100h, "consumption_per_100h")?;
                    check(item.unit_price, "unit_price")?;
                }
                check_lubricant_pairing(r)?;
            }
            ExpenseRecord::PerDiem(r) => {
                check(r.embarkation_tax, "embarkation_tax")?;
                for bucket in &r.ranks {
                    check(bucket.daily_rate, "daily_rate")?;
                }
            }
            ExpenseRecord::OperationalFunds(r) => check(r.amount, "amount")?,
            ExpenseRecord::FundAdvance(r) => {
                check(r.nd30, "nd30")?;
                check(r.nd39, "nd39")?;
            }
            ExpenseRecord::Tickets(r) => {
                for leg in &r.legs {
                    check(leg.unit_fare, "unit_fare")?;
                }
            }
            ExpenseRecord::Utilities(r) => {
                for service in &r.services {
                    check(service.monthly_cost, "monthly_cost")?;
                }
            }
            ExpenseRecord::FlightHours(r) => {
                check(r.hours_flown, "hours_flown")?;
                check(r.nd30, "nd30")?;
                check(r.nd39, "nd39")?;
            }
            ExpenseRecord::Consumables(r) => {
                for item in &r.items {
                    check(item.unit_price, "unit_price")?;
                }
            }
            ExpenseRecord::FoodSupplement(r) => check(r.daily_rate, "daily_rate")?,
            ExpenseRecord::ThirdPartyServices(r) => {
                for service in &r.services {
                    check(service.amount, "amount")?;
                }
            }
        }
    }
    Ok(())
}

/// A lubricant item needs its consumption figure and its unit price together
/// or not at all. Neither means an inert equipment line; exactly one means
/// someone stopped halfway through filling in the form.
fn check_lubricant_pairing(record: &LubricantRecord) -> Result<(), ConsolidationError> {
    for item in &record.items {
        let has_consumption = item.consumption_per_100h > Decimal::ZERO;
        let has_price = item.unit_price > Decimal::ZERO;
        let missing = match (has_consumption, has_price) {
            (true, false) => "unit price",
            (false, true) => "consumption",
            _ => continue,
        };
        return Err(ConsolidationError::PartialLubricantItem {
            organization: record.requesting.name.clone(),
            equipment: item.equipment.clone(),
            missing,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::entities::{org, LubricantItem, TicketLeg, TicketsRecord};

    use super::*;

    fn lubricant_record(consumption: Decimal, price: Decimal) -> ExpenseRecord {
        ExpenseRecord::Lubricant(LubricantRecord {
            requesting: org("20º RCB", "160345"),
            holding: org("20º RCB", "160345"),
            operation_days: 10,
            items: vec![LubricantItem {
                equipment: "Grupo Gerador".into(),
                quantity: 1,
                hours_per_day: dec!(8),
                consumption_per_100h: consumption,
                unit_price: price,
            }],
        })
    }

    #[test]
    fn complete_and_inert_lubricant_items_pass() {
        assert!(validate_records(&[lubricant_record(dec!(0.5), dec!(35.00))]).is_ok());
        assert!(validate_records(&[lubricant_record(Decimal::ZERO, Decimal::ZERO)]).is_ok());
    }

    #[test]
    fn half_specified_lubricant_item_fails_the_set() {
        let error = validate_records(&[lubricant_record(dec!(0.5), Decimal::ZERO)])
            .expect_err("consumption without price must be rejected");
        match error {
            ConsolidationError::PartialLubricantItem {
                equipment, missing, ..
            } => {
                assert_eq!(equipment, "Grupo Gerador");
                assert_eq!(missing, "unit price");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let error = validate_records(&[lubricant_record(Decimal::ZERO, dec!(35.00))])
            .expect_err("price without consumption must be rejected");
        assert!(matches!(
            error,
            ConsolidationError::PartialLubricantItem {
                missing: "consumption",
                ..
            }
        ));
    }

    #[test]
    fn negative_money_is_rejected() {
        let record = ExpenseRecord::Tickets(TicketsRecord {
            requesting: org("CIGS", "160175"),
            holding: org("CIGS", "160175"),
            operation_days: 5,
            legs: vec![TicketLeg {
                route: "MAO-BSB".into(),
                travelers: 2,
                unit_fare: dec!(-850.00),
            }],
        });
        let error = validate_records(&[record]).expect_err("negative fare must be rejected");
        assert!(matches!(
            error,
            ConsolidationError::NegativeAmount {
                field: "unit_fare",
                ..
            }
        ));
    }

    #[test]
    fn one_bad_record_fails_even_when_others_are_fine() {
        let records = vec![
            lubricant_record(dec!(0.5), dec!(35.00)),
            lubricant_record(dec!(0.5), Decimal::ZERO),
        ];
        assert!(validate_records(&records).is_err());
    }
}
