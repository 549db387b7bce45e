use std::fmt::Write;

use super::{PageContext, TableData, cell, cell_html, escape, gender_tabs, message_row, or_dash, player_link, render_page, table};
use crate::domain::dates::to_beijing_time;
use crate::domain::{Gender, LastInfo, RankingEntry};
use crate::i18n::Language;
use crate::rating::format2;

const COLUMNS: [&str; 6] = ["rank", "player", "year-of-birth", "association", "rating", "error"];

/// Live rankings page: update times followed by one table per gender.
pub fn render_index(
    ctx: &PageContext,
    active: Gender,
    men: &TableData<RankingEntry>,
    women: &TableData<RankingEntry>,
    last_info: Option<&LastInfo>,
    limit: usize,
) -> String {
    let lang = ctx.lang;
    let headers: Vec<&str> = COLUMNS.iter().map(|key| lang.t(key)).collect();

    let section = |gender: Gender, data: &TableData<RankingEntry>| {
        table(
            &format!("{}-rankings-table", gender.as_str()),
            &headers,
            &ranking_rows(lang, data, limit),
        )
    };

    let mut body = update_info(lang, last_info);
    body.push_str(&gender_tabs(
        ctx,
        active,
        [
            (Gender::Men, section(Gender::Men, men)),
            (Gender::Women, section(Gender::Women, women)),
        ],
    ));

    render_page(ctx, lang.t("main-title"), &body)
}

/// Table body for the first `limit` entries.
pub fn ranking_rows(lang: Language, data: &TableData<RankingEntry>, limit: usize) -> String {
    let entries = match data {
        TableData::Failed => return message_row(COLUMNS.len(), lang.t("error-loading-rankings")),
        TableData::Rows(entries) if entries.is_empty() || limit == 0 => {
            return message_row(COLUMNS.len(), lang.t("no-ranking-data"));
        }
        TableData::Rows(entries) => entries,
    };

    let mut html = String::new();
    for entry in entries.iter().take(limit) {
        let name = lang.pick(&entry.name, entry.name_zh.as_deref());
        let association = lang.pick(or_dash(entry.association.as_deref()), entry.association_zh.as_deref());

        let _ = writeln!(
            html,
            "<tr>{}{}{}{}{}{}</tr>",
            cell(lang.t("rank"), &entry.rank.to_string()),
            cell_html(lang.t("player"), &player_link(entry.id, name)),
            cell(lang.t("year-of-birth"), or_dash(entry.yob.as_deref())),
            cell(lang.t("association"), association),
            cell(lang.t("rating"), &format2(entry.rating)),
            cell(lang.t("error"), &format2(entry.error)),
        );
    }
    html
}

fn update_info(lang: Language, last_info: Option<&LastInfo>) -> String {
    let data_time = last_info.and_then(|info| info.data_time.as_deref());
    let ranking_time = last_info.and_then(|info| info.ranking_time.as_deref());

    format!(
        "<div class=\"update-info\">\n\
         <p>{} <span id=\"data-update-time\">{}</span> {}</p>\n\
         <p>{} <span id=\"ranking-update-time\">{}</span> {}</p>\n\
         </div>\n",
        escape(lang.t("last-data")),
        escape(&display_time(lang, data_time)),
        escape(lang.t("beijing-time")),
        escape(lang.t("last-ranking")),
        escape(&display_time(lang, ranking_time)),
        escape(lang.t("beijing-time")),
    )
}

/// Beijing time for a stored timestamp; unparsable values are shown as-is.
fn display_time(lang: Language, value: Option<&str>) -> String {
    match value {
        None => lang.t("unknown").to_string(),
        Some(raw) => to_beijing_time(raw).unwrap_or_else(|| raw.to_string()),
    }
}
