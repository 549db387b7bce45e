use std::fmt::Write;

use super::{PageContext, TableData, cell_html, escape, gender_tabs, message_row, player_link, render_page, table};
use crate::domain::Gender;
use crate::i18n::Language;
use crate::services::dashboard::HistoryDate;

const RANK_KEYS: [&str; 5] = ["rank-1", "rank-2", "rank-3", "rank-4", "rank-5"];

pub fn render_history(
    ctx: &PageContext,
    active: Gender,
    men: &TableData<HistoryDate>,
    women: &TableData<HistoryDate>,
    top: usize,
) -> String {
    let lang = ctx.lang;
    let top = top.min(RANK_KEYS.len());
    let headers = headers(lang, top);

    let section = |gender: Gender, data: &TableData<HistoryDate>| {
        table(
            &format!("{}-history-table", gender.as_str()),
            &headers,
            &history_rows(lang, gender, data, top),
        )
    };

    let body = gender_tabs(
        ctx,
        active,
        [
            (Gender::Men, section(Gender::Men, men)),
            (Gender::Women, section(Gender::Women, women)),
        ],
    );
    render_page(ctx, lang.t("history-title"), &body)
}

fn headers(lang: Language, top: usize) -> Vec<&'static str> {
    std::iter::once(lang.t("eval-date"))
        .chain(RANK_KEYS.iter().take(top).map(|key| lang.t(key)))
        .collect()
}

/// One row per evaluation date, padded with `-` up to `top` cells.
pub fn history_rows(lang: Language, gender: Gender, data: &TableData<HistoryDate>, top: usize) -> String {
    let top = top.min(RANK_KEYS.len());
    let colspan = top + 1;
    let dates = match data {
        TableData::Failed => return message_row(colspan, lang.t("error-loading-history")),
        TableData::Rows(dates) if dates.is_empty() => {
            return message_row(colspan, lang.t("no-history-data"));
        }
        TableData::Rows(dates) => dates,
    };

    let headers = headers(lang, top);
    let mut html = String::new();
    for entry in dates {
        html.push_str("<tr>");
        let snapshot_href = format!(
            "/snapshot.html?date={}&gender={}",
            urlencoding::encode(&entry.date),
            gender.as_str()
        );
        html.push_str(&cell_html(
            headers[0],
            &format!(
                "<a href=\"{}\" class=\"date-link\">{}</a>",
                escape(&snapshot_href),
                escape(&entry.date)
            ),
        ));

        for (slot, label) in headers.iter().skip(1).enumerate() {
            match entry.players.get(slot) {
                Some(player) => {
                    let name = lang.pick(&player.name, player.name_zh.as_deref());
                    let content = format!(
                        "<div class=\"player-name\">{}</div><div class=\"player-rating\">({:.0})</div>",
                        player_link(player.id, name),
                        player.rating.round()
                    );
                    html.push_str(&cell_html(label, &content));
                }
                None => html.push_str(&cell_html(label, "-")),
            }
        }
        let _ = writeln!(html, "</tr>");
    }
    html
}
