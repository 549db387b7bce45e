use std::fmt::Write;

use super::{PageContext, TableData, cell, cell_html, escape, gender_tabs, message_row, or_dash, player_link, render_page, table};
use crate::database::SnapshotRow;
use crate::domain::Gender;
use crate::i18n::Language;
use crate::rating::format2;

const COLUMNS: [&str; 6] = ["rank", "player", "year-of-birth", "association", "rating", "error"];

/// Full ranking of one evaluation date. `date` is `None` when the request
/// named no date; every table then says so.
pub fn render_snapshot(
    ctx: &PageContext,
    date: Option<&str>,
    active: Gender,
    men: &TableData<SnapshotRow>,
    women: &TableData<SnapshotRow>,
) -> String {
    let lang = ctx.lang;
    let headers: Vec<&str> = COLUMNS.iter().map(|key| lang.t(key)).collect();

    let section = |gender: Gender, data: &TableData<SnapshotRow>| {
        let rows = match date {
            Some(_) => snapshot_rows(lang, data),
            None => message_row(COLUMNS.len(), lang.t("no-date-provided")),
        };
        table(&format!("{}-snapshot-table", gender.as_str()), &headers, &rows)
    };

    let mut body = String::new();
    let _ = writeln!(
        body,
        "<div class=\"snapshot-header\">\n<h2>{} <span id=\"selected-date\">{}</span></h2>\n\
         <a href=\"/history.html\" class=\"back-link\">{}</a>\n</div>",
        escape(lang.t("snapshot-for")),
        escape(date.unwrap_or(lang.t("no-date-provided"))),
        escape(lang.t("back-to-history")),
    );
    body.push_str(&gender_tabs(
        ctx,
        active,
        [
            (Gender::Men, section(Gender::Men, men)),
            (Gender::Women, section(Gender::Women, women)),
        ],
    ));

    let title = match date {
        Some(date) => format!("{} | {}", date, lang.t("snapshot-title")),
        None => lang.t("snapshot-title").to_string(),
    };
    render_page(ctx, &title, &body)
}

pub fn snapshot_rows(lang: Language, data: &TableData<SnapshotRow>) -> String {
    let rows = match data {
        TableData::Failed => return message_row(COLUMNS.len(), lang.t("error-loading-snapshot")),
        TableData::Rows(rows) if rows.is_empty() => {
            return message_row(COLUMNS.len(), lang.t("no-snapshot-data"));
        }
        TableData::Rows(rows) => rows,
    };

    let mut html = String::new();
    for row in rows {
        let name = lang.pick(&row.name, row.name_zh.as_deref());
        let association = lang.pick(
            or_dash(row.ma.as_deref().or(row.assoc.as_deref())),
            row.assoc_zh.as_deref(),
        );

        let _ = writeln!(
            html,
            "<tr>{}{}{}{}{}{}</tr>",
            cell(lang.t("rank"), &row.rank.to_string()),
            cell_html(lang.t("player"), &player_link(row.id, name)),
            cell(lang.t("year-of-birth"), or_dash(row.yob.as_deref())),
            cell(lang.t("association"), association),
            cell(lang.t("rating"), &format2(row.rating)),
            cell(lang.t("error"), &format2(row.error)),
        );
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::NavItem;

    fn row() -> SnapshotRow {
        SnapshotRow {
            rank: 1,
            id: 10,
            rating: 2950.0,
            error: 32.456,
            name: "SUN Yingsha".to_string(),
            name_zh: Some("孙颖莎".to_string()),
            yob: None,
            assoc: Some("CHN".to_string()),
            assoc_zh: Some("中国".to_string()),
            ma: Some("CHN".to_string()),
        }
    }

    #[test]
    fn test_language_changes_labels_not_numbers() {
        let data = TableData::Rows(vec![row()]);
        let en = snapshot_rows(Language::En, &data);
        let zh = snapshot_rows(Language::Zh, &data);

        for html in [&en, &zh] {
            assert!(html.contains(">2950.00</td>"));
            assert!(html.contains(">32.46</td>"));
            assert!(html.contains(">1</td>"));
        }
        assert!(en.contains(">SUN Yingsha</a>"));
        assert!(en.contains(">CHN</td>"));
        assert!(zh.contains(">孙颖莎</a>"));
        assert!(zh.contains(">中国</td>"));
    }

    #[test]
    fn test_association_shows_member_association() {
        let mut taipei = row();
        taipei.assoc = Some("TPE".to_string());
        taipei.assoc_zh = None;
        taipei.ma = Some("Chinese Taipei".to_string());
        let html = snapshot_rows(Language::En, &TableData::Rows(vec![taipei]));

        assert!(html.contains("<td data-label=\"Association\">Chinese Taipei</td>"));
    }

    #[test]
    fn test_missing_year_of_birth_shows_dash() {
        let html = snapshot_rows(Language::En, &TableData::Rows(vec![row()]));
        assert!(html.contains("<td data-label=\"Year of Birth\">-</td>"));
    }

    #[test]
    fn test_empty_snapshot_shows_message_without_rows() {
        let html = snapshot_rows(Language::En, &TableData::Rows(Vec::new()));

        assert!(html.contains("No ranking data available for this date."));
        assert!(!html.contains("player-link"));
    }

    #[test]
    fn test_page_without_date() {
        let ctx = PageContext::new(Language::En, NavItem::History, "/snapshot.html");
        let html = render_snapshot(&ctx, None, Gender::Men, &TableData::Failed, &TableData::Failed);

        assert!(html.contains("<span id=\"selected-date\">No date provided</span>"));
        assert_eq!(html.matches("class=\"loading\">No date provided</td>").count(), 2);
        assert!(!html.contains("Error loading ranking snapshot."));
    }
}
