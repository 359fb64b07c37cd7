use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::ConsolidationError;

#[derive(Debug)]
pub(crate) struct IsoDateModel(NaiveDate);

impl FromStr for IsoDateModel {
    type Err = ConsolidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            ConsolidationError::InvalidIsoDate {
                date: s.to_string(),
            }
        })?;
        Ok(IsoDateModel(d))
    }
}

impl<'de> Deserialize<'de> for IsoDateModel {
    fn deserialize<D>(deserializer: D) -> Result<IsoDateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IsoDateModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<IsoDateModel> for NaiveDate {
    fn from(model: IsoDateModel) -> Self {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_and_rejects_everything_else() {
        let model = IsoDateModel::from_str("2024-08-05").expect("valid date must parse");
        let date: NaiveDate = model.into();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 8, 5).expect("valid ymd"));
        assert!(IsoDateModel::from_str("05/08/2024").is_err());
        assert!(IsoDateModel::from_str("2024-13-01").is_err());
    }
}
