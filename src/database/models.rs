use rusqlite::types::ValueRef;

/// Player identity joined with its Chinese labels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRow {
    pub id: i64,
    pub name: String,
    pub name_zh: Option<String>,
    pub gender: String,
    pub yob: Option<String>,
    pub assoc: Option<String>,
    pub assoc_zh: Option<String>,
    pub ma: Option<String>,
}

/// One player cell of the ranking history table.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub eval_date: String,
    pub rank: i64,
    pub id: i64,
    pub rating: f64,
    pub name: String,
    pub name_zh: Option<String>,
}

/// Full ranking row for one evaluation date.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRow {
    pub rank: i64,
    pub id: i64,
    pub rating: f64,
    pub error: f64,
    pub name: String,
    pub name_zh: Option<String>,
    pub yob: Option<String>,
    pub assoc: Option<String>,
    pub assoc_zh: Option<String>,
    pub ma: Option<String>,
}

/// Reads a column that the rating job writes as either text or a number.
pub(crate) fn text_or_number(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) if f.fract() == 0.0 => Some(format!("{:.0}", f)),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    })
}
