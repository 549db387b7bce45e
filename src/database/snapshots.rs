use anyhow::{Context, Result};
use rusqlite::params;

use crate::domain::Gender;
use crate::errors::query_context;

use super::connection::DbConn;
use super::models::{text_or_number, SnapshotRow};

pub fn count_for_date(conn: &DbConn, gender: Gender, eval_date: &str) -> Result<i64> {
    let table = gender.history_table();
    let sql = format!("SELECT COUNT(*) FROM {} WHERE eval_date = ?1", table);
    conn.query_row(&sql, params![eval_date], |row| row.get(0))
        .with_context(|| query_context(table))
}

/// The full ranking table of one evaluation date, ordered by rank.
pub fn list_for_date(conn: &DbConn, gender: Gender, eval_date: &str) -> Result<Vec<SnapshotRow>> {
    let table = gender.history_table();
    let sql = format!(
        "SELECT hr.rank, hr.id, hr.rating, hr.error, p.name, pc.name_zh,
                p.yob, p.assoc, ac.assoc_zh, p.ma
         FROM (
             SELECT * FROM {table}
             WHERE eval_date = ?1
         ) hr
         JOIN players p ON hr.id = p.id
         LEFT JOIN players_chinese pc ON hr.id = pc.id
         LEFT JOIN associations_chinese ac ON p.assoc = ac.assoc
         ORDER BY hr.rank"
    );

    let mut stmt = conn.prepare(&sql).with_context(|| query_context(table))?;
    let rows = stmt
        .query_map(params![eval_date], |row| {
            Ok(SnapshotRow {
                rank: row.get(0)?,
                id: row.get(1)?,
                rating: row.get(2)?,
                error: row.get(3)?,
                name: row.get(4)?,
                name_zh: row.get(5)?,
                yob: text_or_number(row, 6)?,
                assoc: row.get(7)?,
                assoc_zh: row.get(8)?,
                ma: row.get(9)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| query_context(table))?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::fixtures;

    #[test]
    fn test_count_for_date() {
        let (_dir, pool) = fixtures::seeded_pool();
        let conn = pool.get().unwrap();

        assert_eq!(count_for_date(&conn, Gender::Men, "2020-01-12").unwrap(), 4);
        assert_eq!(count_for_date(&conn, Gender::Women, "2020-01-12").unwrap(), 0);
    }

    #[test]
    fn test_snapshot_rows_in_rank_order() {
        let (_dir, pool) = fixtures::seeded_pool();
        let conn = pool.get().unwrap();

        let rows = list_for_date(&conn, Gender::Men, "2020-01-05").unwrap();
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(rows[1].name_zh.as_deref(), Some("马龙"));
        assert_eq!(rows[2].assoc_zh.as_deref(), Some("日本"));
        assert_eq!(rows[2].name_zh, None);
    }
}
