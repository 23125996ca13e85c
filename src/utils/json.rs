// Adapters for request fields that may be absent, null or sent in more than one json form.
// Absence is kept visible so field validation can report which value is missing.

pub mod decimal_text {
    use std::str::FromStr;
    use bigdecimal::BigDecimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use serde_json::Value;

    pub fn serialize<S: Serializer>(value: &Option<BigDecimal>, serializer: S) -> Result<S::Ok, S::Error> {
        value.as_ref().map(|d| d.to_string()).serialize(serializer)
    }

    // numbers are read from their shortest text form so 39.99 stays 39.99 instead of its binary expansion
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<BigDecimal>, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => BigDecimal::from_str(n.to_string().as_str()).map(Some).map_err(D::Error::custom),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => BigDecimal::from_str(s.trim()).map(Some).map_err(D::Error::custom),
            Some(other) => Err(D::Error::custom(format!("invalid decimal {}", other))),
        }
    }
}

// null is read as empty text
pub mod nullable_text {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}
