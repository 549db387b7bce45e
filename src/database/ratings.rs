use anyhow::{Context, Result};
use rusqlite::params;

use crate::domain::{DayIndex, Gender, RankingCandidate, RatingPoint};
use crate::errors::query_context;

use super::connection::DbConn;
use super::models::text_or_number;

/// Rating history of one player, oldest evaluation first.
pub fn list_by_player(conn: &DbConn, gender: Gender, player_id: i64) -> Result<Vec<RatingPoint>> {
    let table = gender.ratings_table();
    let sql = format!("SELECT date, rating, error FROM {} WHERE name = ?1 ORDER BY date", table);

    let mut stmt = conn.prepare(&sql).with_context(|| query_context(table))?;
    let rows = stmt
        .query_map(params![player_id], |row| {
            Ok(RatingPoint {
                date: row.get(0)?,
                rating: row.get(1)?,
                error: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| query_context(table))?;

    Ok(rows)
}

/// Latest evaluation of every player rated after `cutoff`, with identity.
pub fn latest_since(conn: &DbConn, gender: Gender, cutoff: DayIndex) -> Result<Vec<RankingCandidate>> {
    let table = gender.ratings_table();
    let sql = format!(
        "SELECT CAST(r.name AS INTEGER), r.date, r.rating, r.error,
                p.name, pc.name_zh, p.yob, p.ma, ac.assoc_zh
         FROM {table} r
         JOIN (
             SELECT name, MAX(date) AS last_date
             FROM {table}
             WHERE date > ?1
             GROUP BY name
         ) latest ON r.name = latest.name AND r.date = latest.last_date
         LEFT JOIN players p ON p.id = r.name
         LEFT JOIN players_chinese pc ON pc.id = p.id
         LEFT JOIN associations_chinese ac ON ac.assoc = p.assoc"
    );

    let mut stmt = conn.prepare(&sql).with_context(|| query_context(table))?;
    let rows = stmt
        .query_map(params![cutoff], |row| {
            Ok(RankingCandidate {
                id: row.get(0)?,
                point: RatingPoint {
                    date: row.get(1)?,
                    rating: row.get(2)?,
                    error: row.get(3)?,
                },
                name: row.get(4)?,
                name_zh: row.get(5)?,
                yob: text_or_number(row, 6)?,
                association: row.get(7)?,
                association_zh: row.get(8)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| query_context(table))?;

    Ok(rows)
}
