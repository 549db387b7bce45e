//! Server-rendered dashboard pages.
//!
//! Every page shares one layout and localizes all text through [`Language`].
//! Table cells carry a `data-label` with their column header so narrow
//! screens can stack them.

pub mod chart;
pub mod history;
pub mod player;
pub mod rankings;
pub mod snapshot;

use std::fmt::Write;

use crate::domain::Gender;
use crate::i18n::Language;

/// Outcome of loading the rows of one table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableData<T> {
    Rows(Vec<T>),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Rankings,
    History,
    None,
}

/// Per-request rendering context.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub lang: Language,
    pub nav: NavItem,
    path: &'static str,
    params: Vec<(&'static str, String)>,
}

impl PageContext {
    pub fn new(lang: Language, nav: NavItem, path: &'static str) -> Self {
        Self {
            lang,
            nav,
            path,
            params: Vec::new(),
        }
    }

    /// Keeps a query parameter in links that re-render this page.
    pub fn with_param(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.params.push((key, value.to_string()));
        }
        self
    }

    pub fn switch_href(&self) -> String {
        self.href_with(&[("lang", self.lang.other().as_str())])
    }

    /// This page's URL with `overrides` replacing or adding parameters.
    pub fn href_with(&self, overrides: &[(&'static str, &str)]) -> String {
        let mut pairs: Vec<(&str, &str)> = self
            .params
            .iter()
            .filter(|(key, _)| overrides.iter().all(|(k, _)| k != key))
            .map(|(key, value)| (*key, value.as_str()))
            .collect();
        pairs.extend(overrides.iter().copied());

        let query = pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}

const STYLE: &str = "
body{font-family:system-ui,sans-serif;margin:0;color:#222}
header,main,footer{max-width:1100px;margin:0 auto;padding:12px 16px}
header{display:flex;flex-wrap:wrap;align-items:center;gap:16px}
header h1{font-size:1.4em;flex:1}
.main-nav a{margin-right:12px;text-decoration:none}
.main-nav a.active-nav{font-weight:bold;border-bottom:2px solid #007bff}
.language-button{padding:4px 10px;border:1px solid #007bff;border-radius:4px;text-decoration:none}
.tabs a{display:inline-block;padding:8px 16px;text-decoration:none;border-bottom:2px solid transparent}
.tabs a.active{border-bottom-color:#007bff;font-weight:bold}
.tab-content{display:none}
.tab-content.active{display:block}
table{width:100%;border-collapse:collapse}
th,td{padding:6px 8px;border-bottom:1px solid #eee;text-align:left}
td.loading{text-align:center;color:#777}
.player-rating{color:#777;font-size:.9em}
.error{color:#c00}
.chart svg{width:100%;height:auto}
footer{color:#777;font-size:.85em}
@media (max-width:767px){
table thead{display:none}
table td{display:block}
table td[data-label]::before{content:attr(data-label) ': ';font-weight:bold}
}
";

pub fn render_page(ctx: &PageContext, title: &str, body: &str) -> String {
    let lang = ctx.lang;
    let html_lang = match lang {
        Language::En => "en",
        Language::Zh => "zh-CN",
    };

    let mut html = String::with_capacity(body.len() + 4096);
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n",
        html_lang,
        escape(title),
        STYLE
    );
    let _ = write!(
        html,
        "<header>\n<h1>{}</h1>\n<nav class=\"main-nav\">{}{}</nav>\n\
         <a id=\"language-switcher\" class=\"language-button\" href=\"{}\">{}</a>\n</header>\n",
        escape(lang.t("main-title")),
        nav_link("/index.html", lang.t("nav-rankings"), ctx.nav == NavItem::Rankings),
        nav_link("/history.html", lang.t("nav-history"), ctx.nav == NavItem::History),
        escape(&ctx.switch_href()),
        escape(lang.t("switch-language")),
    );
    let _ = write!(html, "<main>\n{}\n</main>\n", body);
    let _ = write!(
        html,
        "<footer>\n<p>{}<a href=\"https://results.ittf.link\">{}</a></p>\n\
         <p>{} Rémi Coulom</p>\n<p>{}</p>\n</footer>\n</body>\n</html>\n",
        escape(lang.t("match-data")),
        escape(lang.t("match-ittf")),
        escape(lang.t("whr-algorithm")),
        escape(lang.t("copyright")),
    );
    html
}

fn nav_link(href: &str, label: &str, active: bool) -> String {
    let class = if active { " class=\"active-nav\"" } else { "" };
    format!("<a href=\"{}\"{}>{}</a>", href, class, escape(label))
}

/// Tab strip plus one section per gender; `active` is shown first.
pub(crate) fn gender_tabs(ctx: &PageContext, active: Gender, sections: [(Gender, String); 2]) -> String {
    let lang = ctx.lang;
    let mut html = String::from("<div class=\"tabs\">");
    for gender in Gender::ALL {
        let class = if gender == active { " class=\"active tab-button\"" } else { " class=\"tab-button\"" };
        let _ = write!(
            html,
            "<a href=\"{}\"{}>{}</a>",
            escape(&ctx.href_with(&[("gender", gender.as_str())])),
            class,
            escape(lang.t(gender.tab_label_key()))
        );
    }
    html.push_str("</div>\n");

    for (gender, content) in sections {
        let class = if gender == active { "tab-content active" } else { "tab-content" };
        let _ = write!(
            html,
            "<section id=\"{}\" class=\"{}\">\n{}\n</section>\n",
            gender.as_str(),
            class,
            content
        );
    }
    html
}

/// `<table>` with a localized header row.
pub(crate) fn table(id: &str, headers: &[&str], body: &str) -> String {
    let mut html = format!("<table id=\"{}\">\n<thead><tr>", id);
    for header in headers {
        let _ = write!(html, "<th>{}</th>", escape(header));
    }
    let _ = write!(html, "</tr></thead>\n<tbody>\n{}</tbody>\n</table>", body);
    html
}

/// A single row spanning the table, used for status messages.
pub(crate) fn message_row(colspan: usize, message: &str) -> String {
    format!(
        "<tr><td colspan=\"{}\" class=\"loading\">{}</td></tr>\n",
        colspan,
        escape(message)
    )
}

/// Cell with escaped text content.
pub(crate) fn cell(label: &str, text: &str) -> String {
    cell_html(label, &escape(text))
}

/// Cell whose content is already markup.
pub(crate) fn cell_html(label: &str, html: &str) -> String {
    format!("<td data-label=\"{}\">{}</td>", escape(label), html)
}

pub(crate) fn player_link(id: i64, name: &str) -> String {
    format!(
        "<a href=\"/player.html?id={}\" class=\"player-link\">{}</a>",
        id,
        escape(name)
    )
}

pub(crate) fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
