use crate::error::ComparisonError;
use crate::value::RuntimeValue;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value as Json};

/// Decode a runtime value from JSON text.
///
/// Numbers JSON cannot express are written as `{"number": "nan"}`,
/// `{"number": "inf"}`, `{"number": "-inf"}` or `{"number": "-0"}`.
pub fn from_json_str(text: &str) -> Result<RuntimeValue, ComparisonError> {
    let json: Json = serde_json::from_str(text)
        .map_err(|err| ComparisonError::Conversion(format!("'{text}' ({err})")))?;
    RuntimeValue::try_from(json)
}

impl TryFrom<Json> for RuntimeValue {
    type Error = ComparisonError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        match json {
            Json::Bool(b) => Ok(RuntimeValue::Boolean(b)),
            Json::Number(n) => n
                .as_f64()
                .map(RuntimeValue::Number)
                .ok_or_else(|| ComparisonError::Conversion(format!("number {n}"))),
            Json::String(s) => Ok(RuntimeValue::Text(s)),
            Json::Array(items) => items
                .into_iter()
                .map(RuntimeValue::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(RuntimeValue::List),
            Json::Object(map) => special_number(&map),
            Json::Null => Err(ComparisonError::Conversion("null".to_string())),
        }
    }
}

fn special_number(map: &Map<String, Json>) -> Result<RuntimeValue, ComparisonError> {
    let unsupported = || ComparisonError::Conversion(format!("object {}", Json::Object(map.clone())));
    if map.len() != 1 {
        return Err(unsupported());
    }
    let n = match map.get("number") {
        Some(Json::String(s)) => match s.as_str() {
            "nan" | "NaN" => f64::NAN,
            "inf" => f64::INFINITY,
            "-inf" => f64::NEG_INFINITY,
            "-0" => -0.0,
            _ => return Err(unsupported()),
        },
        Some(Json::Number(n)) => n.as_f64().ok_or_else(unsupported)?,
        _ => return Err(unsupported()),
    };
    Ok(RuntimeValue::Number(n))
}

impl<'de> Deserialize<'de> for RuntimeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = Json::deserialize(deserializer)?;
        RuntimeValue::try_from(json).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{order, Outcome};
    use serde_json::json;

    #[test]
    fn test_scalars() -> anyhow::Result<()> {
        assert!(matches!(from_json_str("3")?, RuntimeValue::Number(n) if n == 3.0));
        assert!(matches!(from_json_str("-2.5")?, RuntimeValue::Number(n) if n == -2.5));
        assert!(matches!(from_json_str("true")?, RuntimeValue::Boolean(true)));
        assert!(matches!(from_json_str(r#""aa""#)?, RuntimeValue::Text(s) if s == "aa"));
        Ok(())
    }

    #[test]
    fn test_nested_list() -> anyhow::Result<()> {
        let value = RuntimeValue::try_from(json!([1, [false, "x"], []]))?;
        assert_eq!(value.to_string(), r#"[1, [False, "x"], []]"#);
        Ok(())
    }

    #[test]
    fn test_special_numbers() -> anyhow::Result<()> {
        assert!(from_json_str(r#"{"number": "nan"}"#)?.is_nan());
        let neg_zero = from_json_str(r#"{"number": "-0"}"#)?;
        assert!(neg_zero.as_number().is_some_and(|n| n == 0.0 && n.is_sign_negative()));
        let inf = from_json_str(r#"{"number": "inf"}"#)?;
        assert_eq!(order(&inf, &RuntimeValue::from(1e308))?, Outcome::Greater);
        let ninf = from_json_str(r#"{"number": "-inf"}"#)?;
        assert_eq!(order(&ninf, &inf)?, Outcome::Less);
        assert!(matches!(from_json_str(r#"{"number": 4}"#)?, RuntimeValue::Number(n) if n == 4.0));
        Ok(())
    }

    #[test]
    fn test_rejects_null_and_objects() {
        assert!(matches!(from_json_str("null"), Err(ComparisonError::Conversion(_))));
        assert!(matches!(
            from_json_str(r#"{"number": "nan", "extra": 1}"#),
            Err(ComparisonError::Conversion(_))
        ));
        assert!(matches!(
            from_json_str(r#"{"text": "a"}"#),
            Err(ComparisonError::Conversion(_))
        ));
        assert!(matches!(
            from_json_str(r#"{"number": "zero"}"#),
            Err(ComparisonError::Conversion(_))
        ));
        assert!(matches!(from_json_str("[1,"), Err(ComparisonError::Conversion(_))));
    }

    #[test]
    fn test_deserialize_inside_struct() -> anyhow::Result<()> {
        #[derive(Deserialize)]
        struct Pair {
            left: RuntimeValue,
            right: RuntimeValue,
        }
        let pair: Pair = serde_json::from_str(r#"{"left": [1], "right": [1, 2]}"#)?;
        assert_eq!(order(&pair.left, &pair.right)?, Outcome::Less);

        let bad = serde_json::from_str::<Pair>(r#"{"left": null, "right": 1}"#);
        assert!(bad.is_err());
        Ok(())
    }
}
