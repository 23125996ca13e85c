use chrono::NaiveDate;
use crate::core::library::{CatalogError, CatalogResult};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// published dates travel as MM-dd-yyyy
pub const PUBLISHED_DATE_FMT: &str = "%m-%d-%Y";

pub fn parse_published_date(str_date: &str) -> CatalogResult<NaiveDate> {
    NaiveDate::parse_from_str(str_date, PUBLISHED_DATE_FMT).map_err(|err| {
        CatalogError::invalid_input(
            format!("Published date must be in format MM-dd-yyyy, got {:?}", str_date).as_str(),
            Some(err.to_string()))
    })
}

pub fn format_published_date(date: NaiveDate) -> String {
    format!("{}", date.format(PUBLISHED_DATE_FMT))
}

// Fails when date falls after today; the same day is accepted.
pub fn ensure_past_or_present(date: NaiveDate, today: NaiveDate) -> CatalogResult<()> {
    if date > today {
        return Err(CatalogError::invalid_date(
            format!("Published date must be in the past or present, got {}", format_published_date(date)).as_str()));
    }
    Ok(())
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        format!("{}", time.format(DATE_FMT)).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }
}

pub mod published_date_serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{format_published_date, PUBLISHED_DATE_FMT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        format_published_date(*date).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&str_date, PUBLISHED_DATE_FMT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::core::library::CatalogError;
    use crate::utils::date::{ensure_past_or_present, format_published_date, parse_published_date};

    #[tokio::test]
    async fn test_should_parse_published_date() {
        let date = parse_published_date("01-31-2020").expect("should parse date");
        assert_eq!(NaiveDate::from_ymd_opt(2020, 1, 31), Some(date));
        assert_eq!("01-31-2020", format_published_date(date).as_str());
    }

    #[tokio::test]
    async fn test_should_reject_unparseable_date() {
        for str_date in ["2020-01-31", "31-01-2020", "02-30-2020", "", "someday"] {
            let res = parse_published_date(str_date);
            assert!(matches!(res, Err(CatalogError::InvalidInput { .. })), "{}", str_date);
        }
    }

    #[tokio::test]
    async fn test_should_accept_past_and_same_day() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date");
        let yesterday = NaiveDate::from_ymd_opt(2024, 6, 14).expect("valid date");
        assert!(ensure_past_or_present(today, today).is_ok());
        assert!(ensure_past_or_present(yesterday, today).is_ok());
    }

    #[tokio::test]
    async fn test_should_reject_future_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date");
        let tomorrow = NaiveDate::from_ymd_opt(2024, 6, 16).expect("valid date");
        assert!(matches!(ensure_past_or_present(tomorrow, today), Err(CatalogError::InvalidDate { .. })));
    }
}
