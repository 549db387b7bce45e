use serde::{Deserialize, Serialize};

/// Men's and women's singles are rated and ranked as separate partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Men, Gender::Women];

    /// Absent or `men` selects men; any other value selects women.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("men") => Gender::Men,
            Some(_) => Gender::Women,
        }
    }

    pub fn from_player_code(code: &str) -> Self {
        if code.trim() == "M" {
            Gender::Men
        } else {
            Gender::Women
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "men",
            Gender::Women => "women",
        }
    }

    pub fn ratings_table(&self) -> &'static str {
        match self {
            Gender::Men => "men_ratings",
            Gender::Women => "women_ratings",
        }
    }

    pub fn history_table(&self) -> &'static str {
        match self {
            Gender::Men => "men_hist_rank",
            Gender::Women => "women_hist_rank",
        }
    }

    pub fn ranking_file(&self) -> &'static str {
        match self {
            Gender::Men => "men_ranking.json",
            Gender::Women => "women_ranking.json",
        }
    }

    /// Variance growth per day (w²) the ratings were computed with.
    pub fn w2(&self) -> f64 {
        match self {
            Gender::Men => 17.4,
            Gender::Women => 14.4,
        }
    }

    pub fn tab_label_key(&self) -> &'static str {
        match self {
            Gender::Men => "men-singles",
            Gender::Women => "women-singles",
        }
    }
}
