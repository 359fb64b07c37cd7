use rust_decimal::Decimal;

use crate::{
    domain::logic::{costing::CostFormula, normalizer::normalize_org_name},
    entities::{
        ComputedCost, CostComponent, ExpenseCategory, NatureCode, NatureSplit, RationsRecord,
    },
    presentation::{memorandum::MemorandumBuilder, money_fmt::format_brl},
};

/// Allowance days for the cyclical monthly ration complement (etapa): each
/// full 30-day cycle grants 8 days, and a partial cycle longer than 22 days
/// grants its remainder beyond 22.
pub(crate) fn allowance_days(operation_days: u32) -> u32 {
    let cycles = operation_days / 30;
    let remainder = operation_days % 30;
    if operation_days >= 30 && remainder <= 22 {
        cycles * 8
    } else if remainder > 22 {
        (remainder - 22) + cycles * 8
    } else {
        0
    }
}

fn portion(
    label: &str,
    effective: u32,
    unit_rate: Decimal,
    record: &RationsRecord,
) -> ComputedCost {
    let base = (Decimal::from(effective)
        * unit_rate
        * Decimal::from(record.operation_days))
    .round_dp(2);
    let complement = (Decimal::from(effective)
        * Decimal::from(allowance_days(record.operation_days))
        * record.allowance_rate)
        .round_dp(2);
    let mut components = Vec::new();
    if base != Decimal::ZERO {
        components.push(CostComponent::new(format!("{} base", label), base));
    }
    if complement != Decimal::ZERO {
        components.push(CostComponent::new(
            format!("{} etapa complement", label),
            complement,
        ));
    }
    let amount = base + complement;
    ComputedCost {
        amount,
        split: NatureSplit::only(NatureCode::Nd30, amount),
        quantity: Decimal::ZERO,
        components,
    }
}

/// The two delivery-target portions of a rations record: quantities supplied
/// at source (QS) and at destination (QR). Each portion is its target
/// organization's share under the resource-holding role; their sum is the
/// record total.
pub(crate) fn target_portions(record: &RationsRecord) -> (ComputedCost, ComputedCost) {
    (
        portion("QS", record.qs_effective, record.qs_unit_rate, record),
        portion("QR", record.qr_effective, record.qr_unit_rate, record),
    )
}

impl CostFormula for RationsRecord {
    fn compute(&self) -> ComputedCost {
        let (qs, qr) = target_portions(self);
        let mut components = qs.components;
        components.extend(qr.components);
        ComputedCost {
            amount: qs.amount + qr.amount,
            split: qs.split.plus(qr.split),
            quantity: Decimal::ZERO,
            components,
        }
    }

    fn narrate(&self, cost: &ComputedCost) -> String {
        let days = self.operation_days;
        let granted = allowance_days(days);
        let purpose = format!("feeding for {} days", days);
        let mut memo = MemorandumBuilder::new(ExpenseCategory::Rations, &purpose);
        let requesting_key = normalize_org_name(&self.requesting.name);
        if normalize_org_name(&self.qs_org.name) != requesting_key
            || normalize_org_name(&self.qr_org.name) != requesting_key
        {
            memo = memo.supplied_by(&format!(
                "{} (QS), {} (QR)",
                self.qs_org.name, self.qr_org.name
            ));
        }
        memo = memo.formula("amount = effective x unit rate x days + etapa complement");
        memo = memo.line(format!(
            "Etapa rule: {} days grants {} allowance-days",
            days, granted
        ));
        for (label, effective, rate) in [
            ("QS", self.qs_effective, self.qs_unit_rate),
            ("QR", self.qr_effective, self.qr_unit_rate),
        ] {
            let base = (Decimal::from(effective) * rate * Decimal::from(days)).round_dp(2);
            memo = memo.line(format!(
                "{}: {} x {} x {} days = {}",
                label,
                effective,
                format_brl(rate),
                days,
                format_brl(base),
            ));
            if granted > 0 && effective > 0 {
                let complement = (Decimal::from(effective)
                    * Decimal::from(granted)
                    * self.allowance_rate)
                    .round_dp(2);
                memo = memo.line(format!(
                    "{} etapa complement: {} x {} allowance-days x {} = {}",
                    label,
                    effective,
                    granted,
                    format_brl(self.allowance_rate),
                    format_brl(complement),
                ));
            }
        }
        memo.total(cost.amount)
    }
}
