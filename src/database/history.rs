use anyhow::{Context, Result};
use rusqlite::params;

use crate::domain::Gender;
use crate::errors::query_context;

use super::connection::DbConn;
use super::models::HistoryRow;

/// Top `max_rank` players of every evaluation date, newest date first.
pub fn list_top_ranks(conn: &DbConn, gender: Gender, max_rank: i64) -> Result<Vec<HistoryRow>> {
    let table = gender.history_table();
    // Filter by rank before joining: the history table holds every weekly top 100.
    let sql = format!(
        "SELECT hr.eval_date, hr.rank, hr.id, hr.rating, p.name, pc.name_zh
         FROM (
             SELECT eval_date, rank, id, rating
             FROM {table}
             WHERE rank <= ?1
         ) hr
         JOIN players p ON hr.id = p.id
         LEFT JOIN players_chinese pc ON hr.id = pc.id
         ORDER BY hr.eval_date DESC, hr.rank"
    );

    let mut stmt = conn.prepare(&sql).with_context(|| query_context(table))?;
    let rows = stmt
        .query_map(params![max_rank], |row| {
            Ok(HistoryRow {
                eval_date: row.get(0)?,
                rank: row.get(1)?,
                id: row.get(2)?,
                rating: row.get(3)?,
                name: row.get(4)?,
                name_zh: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| query_context(table))?;

    Ok(rows)
}
