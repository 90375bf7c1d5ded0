//! Serde adapters for decimal-safe JSON numbers.
//!
//! `serde_json` is compiled with `arbitrary_precision`, so JSON numbers keep
//! their literal digits instead of passing through `f64`. The adapter here
//! moves [`BigDecimal`] values across that exact path: a stored `30.5` is
//! written as the JSON number `30.5` and read back with no drift.

/// Encodes `Option<BigDecimal>` as a plain JSON number (or `null`).
///
/// For use with `#[serde(with = "...")]`; pair it with `#[serde(default)]`
/// so an absent field decodes as `None`.
pub mod option_as_number {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Number;

    pub fn serialize<S>(value: &Option<BigDecimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(decimal) => {
                let number = Number::from_str(&decimal.to_string()).map_err(S::Error::custom)?;
                serializer.serialize_some(&number)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BigDecimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = Option::<Number>::deserialize(deserializer)?;
        number
            .map(|n| BigDecimal::from_str(&n.to_string()).map_err(D::Error::custom))
            .transpose()
    }
}
