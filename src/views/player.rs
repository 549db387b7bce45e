use std::fmt::Write;

use log::warn;

use super::chart::render_chart;
use super::{PageContext, cell, escape, message_row, or_dash, render_page, table};
use crate::domain::dates::format_index;
use crate::domain::{DayIndex, Gender, RatingPoint};
use crate::i18n::Language;
use crate::rating::{confidence_series, current_estimate, format2, round2};
use crate::services::dashboard::PlayerProfile;

const HISTORY_COLUMNS: [&str; 3] = ["date", "rating", "error"];

/// What the player page has to show.
#[derive(Debug)]
pub enum PlayerView<'a> {
    /// The request carried no `id`.
    NoId,
    /// Lookup failed; holds the already localized reason.
    Failed(String),
    Loaded(&'a PlayerProfile),
}

pub fn render_player(ctx: &PageContext, view: &PlayerView<'_>, today: DayIndex, z: f64) -> String {
    let lang = ctx.lang;
    let headers: Vec<&str> = HISTORY_COLUMNS.iter().map(|key| lang.t(key)).collect();

    let (title, body) = match view {
        PlayerView::NoId => (
            lang.t("player-title").to_string(),
            error_body(lang, &headers, lang.t("no-player-id")),
        ),
        PlayerView::Failed(message) => (
            lang.t("player-title").to_string(),
            error_body(lang, &headers, message),
        ),
        PlayerView::Loaded(profile) => {
            let player = &profile.player;
            let name = lang.pick(&player.name, player.name_zh.as_deref());
            (
                format!("{} | {}", name, lang.t("player-title")),
                profile_body(lang, &headers, profile, today, z),
            )
        }
    };

    render_page(ctx, &title, &body)
}

fn error_body(lang: Language, headers: &[&str], message: &str) -> String {
    format!(
        "<div id=\"player-data\"><p class=\"error\">{}</p></div>\n<h2>{}</h2>\n{}",
        escape(message),
        escape(lang.t("rating-history")),
        table("rating-history", headers, &message_row(headers.len(), lang.t("no-data")))
    )
}

fn profile_body(lang: Language, headers: &[&str], profile: &PlayerProfile, today: DayIndex, z: f64) -> String {
    let player = &profile.player;
    let name = lang.pick(&player.name, player.name_zh.as_deref());
    let association = lang.pick(
        or_dash(player.assoc.as_deref().or(player.ma.as_deref())),
        player.assoc_zh.as_deref(),
    );
    let gender = match profile.gender {
        Gender::Men => lang.t("male"),
        Gender::Women => lang.t("female"),
    };

    let mut body = String::new();
    let _ = writeln!(body, "<div id=\"player-data\">\n<h2 id=\"player-name\">{}</h2>", escape(name));
    let facts = [
        ("id", "player-id", player.id.to_string()),
        ("yob", "player-yob", or_dash(player.yob.as_deref()).to_string()),
        ("assoc", "player-assoc", association.to_string()),
        ("gender", "player-gender", gender.to_string()),
        ("current-rating", "player-rating", current_rating(lang, profile, today)),
    ];
    for (key, id, value) in facts {
        let _ = writeln!(
            body,
            "<p><strong>{}</strong> <span id=\"{}\">{}</span></p>",
            escape(lang.t(key)),
            id,
            escape(&value)
        );
    }
    body.push_str("</div>\n");

    let _ = writeln!(body, "<h2>{}</h2>", escape(lang.t("rating-history")));
    body.push_str(&render_chart(lang, &confidence_series(&profile.ratings, z)));
    body.push_str(&table("rating-history", headers, &history_rows(lang, &profile.ratings)));
    body
}

/// Latest rating with its error carried forward to `today`.
fn current_rating(lang: Language, profile: &PlayerProfile, today: DayIndex) -> String {
    let Some(latest) = profile.ratings.last() else {
        return lang.t("not-available").to_string();
    };
    // Extrapolate from the values as displayed, two decimals.
    let shown = RatingPoint {
        date: latest.date,
        rating: round2(latest.rating),
        error: round2(latest.error),
    };
    match current_estimate(&shown, profile.gender, today) {
        Ok(estimate) => estimate.to_string(),
        Err(e) => {
            warn!("Cannot estimate current rating of player {}: {}", profile.player.id, e);
            lang.t("not-available").to_string()
        }
    }
}

/// Newest evaluation first.
fn history_rows(lang: Language, ratings: &[RatingPoint]) -> String {
    if ratings.is_empty() {
        return message_row(HISTORY_COLUMNS.len(), lang.t("no-rating-history"));
    }

    let mut html = String::new();
    for point in ratings.iter().rev() {
        let _ = writeln!(
            html,
            "<tr>{}{}{}</tr>",
            cell(lang.t("date"), &format_index(point.date)),
            cell(lang.t("rating"), &format2(point.rating)),
            cell(lang.t("error"), &format2(point.error)),
        );
    }
    html
}
