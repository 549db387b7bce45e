pub mod dates;
pub mod gender;
pub mod models;

pub use dates::DayIndex;
pub use gender::Gender;
pub use models::{LastInfo, RankingCandidate, RankingEntry, RatingPoint};
