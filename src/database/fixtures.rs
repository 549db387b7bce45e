//! Scratch databases for tests.

use tempfile::TempDir;

use super::connection::{create_pool, AccessMode, DbPool};
use super::setup::ensure_schema;

const SEED_SQL: &str = "
INSERT INTO players (id, name, gender, yob, assoc, ma) VALUES
    (1, 'MA Long', 'M', '1988', 'CHN', 'CHN'),
    (2, 'FAN Zhendong', 'M', '1997', 'CHN', 'CHN'),
    (3, 'HARIMOTO Tomokazu', 'M', 2003, 'JPN', 'JPN'),
    (4, 'LIN Gaoyuan', 'M', '1995', 'CHN', 'CHN'),
    (10, 'SUN Yingsha', 'W', '2000', 'CHN', 'CHN'),
    (11, 'HAYATA Hina', 'W', 2000, 'JPN', 'JPN');

INSERT INTO players_chinese (id, name_zh) VALUES
    (1, '马龙'), (2, '樊振东'), (10, '孙颖莎');

INSERT INTO associations_chinese (assoc, assoc_zh) VALUES
    ('CHN', '中国'), ('JPN', '日本');

INSERT INTO men_ratings (name, date, rating, error) VALUES
    ('1', 11000, 2800.0, 40.0),
    ('1', 11500, 2850.5, 35.25),
    ('2', 11200, 2900.0, 30.0),
    ('3', 11400, 2700.0, 45.0);

INSERT INTO women_ratings (name, date, rating, error) VALUES
    ('10', 11400, 2950.0, 32.0),
    ('11', 11300, 2600.0, 50.0);

INSERT INTO men_hist_rank (eval_date, rank, id, rating, error) VALUES
    ('2020-01-05', 1, 2, 2901.234, 31.5),
    ('2020-01-05', 2, 1, 2845.0, 36.0),
    ('2020-01-05', 3, 3, 2698.7, 46.125),
    ('2020-01-12', 1, 1, 2905.5, 30.0),
    ('2020-01-12', 2, 2, 2899.994, 31.0),
    ('2020-01-12', 3, 3, 2701.0, 45.0),
    ('2020-01-12', 6, 4, 2600.0, 50.0);

INSERT INTO women_hist_rank (eval_date, rank, id, rating, error) VALUES
    ('2020-01-05', 1, 10, 2950.0, 32.0),
    ('2020-01-05', 2, 11, 2600.0, 50.0);
";

pub fn empty_pool() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("DATA.DB");
    let pool = create_pool(path.to_str().unwrap(), AccessMode::ReadWrite).unwrap();
    (dir, pool)
}

pub fn seeded_pool() -> (TempDir, DbPool) {
    let (dir, pool) = empty_pool();
    let conn = pool.get().unwrap();
    ensure_schema(&conn).unwrap();
    conn.execute_batch(SEED_SQL).unwrap();
    (dir, pool)
}
