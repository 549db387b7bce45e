use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::dates::DayIndex;

/// One evaluation of a player's rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingPoint {
    pub date: DayIndex,
    pub rating: f64,
    pub error: f64,
}

/// A player's most recent rating joined with their identity.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingCandidate {
    pub id: i64,
    pub point: RatingPoint,
    pub name: Option<String>,
    pub name_zh: Option<String>,
    pub yob: Option<String>,
    pub association: Option<String>,
    pub association_zh: Option<String>,
}

/// Entry of `men_ranking.json` / `women_ranking.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: u32,
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub name_zh: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub yob: Option<String>,
    #[serde(default)]
    pub association: Option<String>,
    #[serde(default)]
    pub association_zh: Option<String>,
    pub rating: f64,
    pub error: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_rating: Option<f64>,
}

/// Contents of `LAST_INFO.JSON`. Keys this crate does not use are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Year of birth is written as either a string or a number.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 => Some(format!("{:.0}", f)),
            _ => Some(n.to_string()),
        },
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_entry_accepts_numeric_yob() {
        let json = r#"{"rank": 1, "id": 101, "name": "MA Long", "name_zh": "马龙",
            "yob": 1988, "association": "CHN", "association_zh": "中国",
            "rating": 2850.5, "error": 54.61, "adjusted_rating": 2795.89}"#;
        let entry: RankingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.yob.as_deref(), Some("1988"));
        assert_eq!(entry.adjusted_rating, Some(2795.89));
    }

    #[test]
    fn test_ranking_entry_accepts_float_yob() {
        let json = r#"{"rank": 1, "id": 101, "name": "MA Long", "yob": 1988.0,
            "rating": 2850.5, "error": 54.61}"#;
        let entry: RankingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.yob.as_deref(), Some("1988"));
    }

    #[test]
    fn test_last_info_keeps_unknown_keys() {
        let json = r#"{"data_time": "2025-03-01 20:15:00", "last_event": 3021}"#;
        let mut info: LastInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.ranking_time, None);

        info.ranking_time = Some("2025-03-02 01:00:00".to_string());
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["last_event"], 3021);
        assert_eq!(value["ranking_time"], "2025-03-02 01:00:00");
    }
}
