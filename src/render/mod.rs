//! Presentation layer — HTML page with the SVG chart, bilingual text and the error panel.
//!
//! The active locale is always an explicit argument. Both locales are
//! rendered into the page; the toggle button only flips which one is
//! visible, so switching language never triggers another fetch.

pub mod i18n;
pub mod svg;

use crate::domain::chart::ChartData;
use crate::error::RateError;
use crate::shared::Locale;
use i18n::Strings;

const STYLE: &str = r#"
body { font-family: system-ui, -apple-system, "PingFang SC", "Microsoft YaHei", sans-serif; margin: 0; padding: 24px; color: #111827; background: #f9fafb; }
main { max-width: 860px; margin: 0 auto; background: #fff; border-radius: 8px; padding: 24px; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
header { display: flex; justify-content: space-between; align-items: flex-start; gap: 16px; }
h1 { margin: 0 0 4px; font-size: 1.5rem; }
.subtitle, .current-language { color: #6b7280; margin: 0; }
button#lang-toggle { padding: 6px 14px; border: 1px solid #d1d5db; border-radius: 6px; background: #fff; cursor: pointer; }
.rate-chart text { font-size: 12px; fill: #374151; }
.footnotes { color: #6b7280; font-size: .875rem; padding-left: 1.2em; }
.error-panel { border: 1px solid #fecaca; background: #fef2f2; color: #991b1b; border-radius: 6px; padding: 16px; margin-top: 24px; }
html[data-lang="en"] .l-zh, html[data-lang="zh"] .l-en { display: none; }
"#;

const TOGGLE_SCRIPT: &str = r#"
document.getElementById("lang-toggle").addEventListener("click", function () {
  var root = document.documentElement;
  var next = this.dataset.next;
  this.dataset.next = root.dataset.lang;
  root.dataset.lang = next;
  root.lang = next === "en" ? "en" : "zh-CN";
  document.title = root.dataset["title" + next.charAt(0).toUpperCase() + next.slice(1)];
});
"#;

/// Escape text for HTML element content and quoted attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One `<span>` per locale; the stylesheet hides the inactive one.
fn bilingual(pick: impl Fn(&Strings) -> &'static str) -> String {
    Locale::ALL
        .iter()
        .map(|&locale| {
            format!(
                r#"<span class="l-{}" lang="{}">{}</span>"#,
                locale.as_str(),
                locale.html_lang(),
                escape(pick(Strings::for_locale(locale)))
            )
        })
        .collect()
}

/// Render the page for one pipeline outcome.
///
/// On error only the static panel is shown: no partial chart, no error details.
pub fn render_page(outcome: &Result<ChartData, RateError>, active: Locale) -> String {
    let body = match outcome {
        Ok(chart) => chart_section(chart),
        Err(_) => error_panel(),
    };
    document(active, &body)
}

fn chart_section(chart: &ChartData) -> String {
    let footnotes: String = (0..4)
        .map(|i| format!("<li>{}</li>", bilingual(|s| s.footnotes[i])))
        .collect();
    format!(
        r#"<section class="chart">{svg}</section><ol class="footnotes">{footnotes}</ol>"#,
        svg = svg::line_chart(chart)
    )
}

fn error_panel() -> String {
    let message: String = Locale::ALL
        .iter()
        .map(|&locale| {
            format!(
                r#"<span class="l-{}" lang="{}">{}</span>"#,
                locale.as_str(),
                locale.html_lang(),
                escape(i18n::error_message(locale))
            )
        })
        .collect();
    format!(r#"<div class="error-panel" role="alert">{message}</div>"#)
}

fn document(active: Locale, body: &str) -> String {
    let title = Strings::for_locale(active).title;
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" data-lang="{code}" data-title-en="{title_en}" data-title-zh="{title_zh}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<main>
<header>
<div>
<h1>{h1}</h1>
<p class="subtitle">{subtitle}</p>
<p class="current-language">{current}</p>
</div>
<button type="button" id="lang-toggle" data-next="{next}">{toggle}</button>
</header>
{body}
</main>
<script>{TOGGLE_SCRIPT}</script>
</body>
</html>
"#,
        lang = active.html_lang(),
        code = active.as_str(),
        next = active.toggle().as_str(),
        title_en = escape(Strings::for_locale(Locale::En).title),
        title_zh = escape(Strings::for_locale(Locale::Zh).title),
        title = escape(title),
        h1 = bilingual(|s| s.title),
        subtitle = bilingual(|s| s.subtitle),
        current = bilingual(|s| s.current_language),
        toggle = bilingual(|s| s.toggle_label),
    )
}
