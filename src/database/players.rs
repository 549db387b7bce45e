use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::{text_or_number, PlayerRow};

pub fn find_by_id(conn: &DbConn, id: i64) -> Result<Option<PlayerRow>> {
    let sql = "SELECT p.id, p.name, pc.name_zh, p.gender, p.yob, p.assoc, ac.assoc_zh, p.ma
               FROM players p
               LEFT JOIN players_chinese pc ON p.id = pc.id
               LEFT JOIN associations_chinese ac ON p.assoc = ac.assoc
               WHERE p.id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerRow> {
    Ok(PlayerRow {
        id: row.get(0)?,
        name: row.get(1)?,
        name_zh: row.get(2)?,
        gender: row.get(3)?,
        yob: text_or_number(row, 4)?,
        assoc: row.get(5)?,
        assoc_zh: row.get(6)?,
        ma: row.get(7)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::fixtures;

    #[test]
    fn test_find_with_chinese_labels() {
        let (_dir, pool) = fixtures::seeded_pool();
        let conn = pool.get().unwrap();

        let player = find_by_id(&conn, 1).unwrap().unwrap();
        assert_eq!(player.name, "MA Long");
        assert_eq!(player.name_zh.as_deref(), Some("马龙"));
        assert_eq!(player.assoc_zh.as_deref(), Some("中国"));
        assert_eq!(player.yob.as_deref(), Some("1988"));
        assert_eq!(player.gender, "M");
    }

    #[test]
    fn test_find_without_translations() {
        let (_dir, pool) = fixtures::seeded_pool();
        let conn = pool.get().unwrap();

        let player = find_by_id(&conn, 11).unwrap().unwrap();
        assert_eq!(player.name_zh, None);
        assert_eq!(player.yob.as_deref(), Some("2000"));
    }

    #[test]
    fn test_unknown_player() {
        let (_dir, pool) = fixtures::seeded_pool();
        let conn = pool.get().unwrap();
        assert!(find_by_id(&conn, 999).unwrap().is_none());
    }
}
