pub const DATE_FMT: &str = "%Y-%m-%d";

pub mod serializer {
    use chrono::NaiveDate;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        date.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        let date = NaiveDate::parse_from_str(&str_date, DATE_FMT).map_err(D::Error::custom)?;
        Ok(date)
    }
}

// loan start dates are nullable in storage, so the optional variant is the
// one the book rows use
pub mod opt_serializer {
    use chrono::NaiveDate;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        date.map(|d| d.format(DATE_FMT).to_string()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let str_date: Option<String> = Deserialize::deserialize(deserializer)?;
        match str_date {
            Some(s) => {
                let date = NaiveDate::parse_from_str(&s, DATE_FMT).map_err(D::Error::custom)?;
                Ok(Some(date))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::utils::date::DATE_FMT;

    #[tokio::test]
    async fn test_should_format_storage_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).expect("should build date");
        assert_eq!("2024-01-31", date.format(DATE_FMT).to_string());
        let parsed = NaiveDate::parse_from_str("2024-01-31", DATE_FMT).expect("should parse date");
        assert_eq!(date, parsed);
    }
}
