//! Field deserializers for payloads whose column types drift between
//! numbers, numeric strings and nulls depending on the backing database.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::catalog::Mode;

pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(deserializer)?.unwrap_or_default())
}

pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Game mode label; null, blank or missing columns read as `Standard`.
pub fn mode<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(deserializer)?
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| Mode::Standard.label().to_string()))
}

pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_int(deserializer)?.unwrap_or(0))
}

pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_i64))
}

pub fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// JS-style truthiness: `true`, non-empty strings and non-zero numbers.
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        _ => false,
    })
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "super::string")]
        id: String,
        #[serde(default, deserialize_with = "super::int")]
        stamp: i64,
        #[serde(default, deserialize_with = "super::opt_int")]
        position: Option<i64>,
        #[serde(default, deserialize_with = "super::truthy")]
        replay: bool,
    }

    #[derive(Deserialize)]
    struct ModeRow {
        #[serde(default = "standard", deserialize_with = "super::mode")]
        mode: String,
    }

    fn standard() -> String {
        "Standard".to_string()
    }

    #[test]
    fn accepts_numbers_as_strings_and_strings_as_numbers() {
        let row: Row = serde_json::from_value(json!({
            "id": 76561198000000001u64,
            "stamp": "1700000000",
            "position": 3.0,
            "replay": "https://replays.example/1.rec"
        }))
        .unwrap();
        assert_eq!(row.id, "76561198000000001");
        assert_eq!(row.stamp, 1_700_000_000);
        assert_eq!(row.position, Some(3));
        assert!(row.replay);
    }

    #[test]
    fn nulls_and_missing_fields_fall_back_to_defaults() {
        let row: Row = serde_json::from_value(json!({ "id": null, "position": null })).unwrap();
        assert_eq!(row.id, "");
        assert_eq!(row.stamp, 0);
        assert_eq!(row.position, None);
        assert!(!row.replay);
    }

    #[test]
    fn unparseable_numeric_strings_become_zero() {
        let row: Row = serde_json::from_value(json!({ "stamp": "soon", "replay": 0 })).unwrap();
        assert_eq!(row.stamp, 0);
        assert!(!row.replay);
    }

    #[test]
    fn null_blank_and_missing_modes_read_as_standard() {
        for payload in [json!({ "mode": null }), json!({ "mode": "  " }), json!({})] {
            let row: ModeRow = serde_json::from_value(payload).unwrap();
            assert_eq!(row.mode, "Standard");
        }
        let row: ModeRow = serde_json::from_value(json!({ "mode": "Bhop" })).unwrap();
        assert_eq!(row.mode, "Bhop");
    }
}
