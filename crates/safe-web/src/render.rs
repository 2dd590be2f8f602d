//! HTML rendering of the board page.
//!
//! Rendering is a pure function of [`PageView`]. Every user-supplied value,
//! including the echoed search string and admin token, goes through
//! [`escape_html`]. `id_number` and `ip_address` are never rendered.

use std::borrow::Cow;

use chrono::FixedOffset;
use safe_core::i18n::{Lang, Translations};
use safe_core::listing::Page;
use safe_core::status::{Status, StatusRecord};

const STYLE: &str = r":root{--bg:#f4f4f5;--card:#fff;--text:#18181b;--muted:#71717a;--primary:#2563eb;--safe:#16a34a;--danger:#dc2626;--border:#e4e4e7}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,Helvetica,Arial,sans-serif;background:var(--bg);color:var(--text);margin:0;padding:4vw;line-height:1.5}
.container{max-width:600px;margin:0 auto;padding-top:20px}
.lang-switch{text-align:right;font-size:.8rem}
.lang-switch a{color:var(--primary);margin-left:.5rem}
h1{margin:0 0 .3rem;font-size:1.4rem}
.subtitle{color:#52525b;margin-bottom:1.2rem;font-size:.85rem}
.card{background:var(--card);padding:1.2rem;border-radius:8px;border:1px solid var(--border);margin-bottom:1.5rem}
.card h2{margin-top:0}
label{display:block;font-weight:600;margin-bottom:.3rem;font-size:.9rem}
.label-hint{font-weight:400;color:var(--muted);font-size:.75rem}
input,select,textarea{width:100%;box-sizing:border-box;padding:10px;margin-bottom:.8rem;border:1px solid var(--border);border-radius:4px;font-size:16px}
button{background:var(--primary);color:#fff;border:none;padding:12px 20px;border-radius:4px;cursor:pointer;font-size:1rem;width:100%;font-weight:bold}
.search-form{display:flex;gap:10px;margin-bottom:1.5rem}
.search-form input{flex-grow:1;margin-bottom:0}
.search-form button{width:auto;flex-shrink:0}
.results{border:1px solid var(--border);border-radius:8px;overflow:hidden}
.result-item{background:var(--card);padding:1rem;border-bottom:1px solid var(--border)}
.result-item:last-child{border-bottom:none}
.result-header{display:flex;justify-content:space-between;align-items:flex-start;margin-bottom:.5rem}
.result-header strong{word-break:break-word;max-width:80%}
.badges{display:flex;align-items:center}
.status-badge{display:inline-block;padding:2px 8px;border-radius:12px;font-size:.75rem;font-weight:bold;color:#fff}
.status-Safe{background:var(--safe)}
.status-Help{background:var(--danger)}
.status-Other{background:var(--muted)}
.message{margin-bottom:.5rem;white-space:pre-wrap}
.meta{font-size:.75rem;color:var(--muted)}
.empty{text-align:center;color:var(--muted);padding:1.5rem}
.error{background:#fee2e2;color:#991b1b;padding:1rem;border-radius:4px;margin-bottom:1rem}
.pagination{display:flex;justify-content:space-between;align-items:center;padding:1rem 0;font-size:.9rem}
.pagination-btn{text-decoration:none;font-weight:bold;color:var(--primary);padding:8px 12px;border:1px solid var(--primary);border-radius:4px;min-width:80px;text-align:center}
.pagination-btn.disabled{color:#a1a1aa;border-color:var(--border);opacity:.6}
.page-number{color:var(--muted)}
.delete-form{display:inline;margin-left:10px}
.delete-btn{background:var(--danger);padding:4px 8px;font-size:.75rem;width:auto;font-weight:normal;line-height:1}";

/// Everything the page template needs.
pub struct PageView<'a> {
    pub lang: Lang,
    pub event: &'a str,
    pub page: &'a Page<StatusRecord>,
    /// Normalized search string; empty when unfiltered.
    pub search: &'a str,
    /// Localized banner, e.g. when the store is unavailable.
    pub error: Option<&'a str>,
    /// Set only when the request carried the valid admin token.
    pub admin_token: Option<&'a str>,
    pub utc_offset: FixedOffset,
}

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Link back to the listing with the given page, language, search, and admin token.
#[must_use]
pub fn listing_href(page: u32, lang: Lang, search: &str, admin_token: Option<&str>) -> String {
    let mut href = format!("/?p={page}&lang={}", lang.code());
    if !search.is_empty() {
        href.push_str(&format!("&q={}", urlencoding::encode(search)));
    }
    if let Some(token) = admin_token {
        href.push_str(&format!("&admin={}", urlencoding::encode(token)));
    }
    href
}

/// Render the full board page.
#[must_use]
pub fn render_page(view: &PageView<'_>) -> String {
    let t = view.lang.strings();
    let event = escape_html(view.event);
    let (title, subtitle) = if event.is_empty() {
        (t.title.to_string(), t.subtitle.to_string())
    } else {
        (
            format!("{} • {event}", t.title),
            format!("{} • {event}", t.subtitle),
        )
    };

    let mut html = String::with_capacity(16 * 1024);
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="{tag}">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<div class="container">
{switcher}
<header>
<h1>{heading}</h1>
<p class="subtitle">{subtitle}</p>
</header>
"#,
        tag = view.lang.html_tag(),
        switcher = language_switcher(view),
        heading = t.title,
    ));

    if let Some(error) = view.error {
        html.push_str(&format!(
            "<div class=\"error\">{}</div>\n",
            escape_html(error)
        ));
    }

    html.push_str(&submission_form(view.lang, t));
    html.push_str(&search_form(view, t));
    html.push_str(&results(view, t));
    html.push_str(&pagination(view, t));
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn language_switcher(view: &PageView<'_>) -> String {
    let links: Vec<String> = Lang::ALL
        .into_iter()
        .filter(|lang| *lang != view.lang)
        .map(|lang| {
            let href = listing_href(view.page.page, lang, view.search, view.admin_token);
            format!(
                r#"<a href="{}" hreflang="{}">{}</a>"#,
                escape_html(&href),
                lang.html_tag(),
                lang.strings().lang_name
            )
        })
        .collect();
    format!(r#"<nav class="lang-switch">{}</nav>"#, links.join(""))
}

fn submission_form(lang: Lang, t: &Translations) -> String {
    let options: String = Status::ALL
        .into_iter()
        .map(|status| {
            format!(
                r#"<option value="{}">{}</option>"#,
                status.as_str(),
                t.status_label(status)
            )
        })
        .collect();

    format!(
        r#"<div class="card">
<h2>{update_header}</h2>
<form action="/update" method="POST">
<input type="hidden" name="form_lang" value="{code}">
<label for="name">{lbl_name}</label>
<input type="text" id="name" name="name" required placeholder="{ph_name}">
<label for="id_number">{lbl_id} <span class="label-hint">{hint_id}</span></label>
<input type="text" id="id_number" name="id_number" placeholder="{ph_id}">
<label for="location">{lbl_loc}</label>
<input type="text" id="location" name="location" required placeholder="{ph_loc}">
<label for="status">{lbl_status}</label>
<select id="status" name="status" required>{options}</select>
<label for="message">{lbl_msg}</label>
<textarea id="message" name="message" rows="3" placeholder="{ph_msg}"></textarea>
<button type="submit">{btn_submit}</button>
</form>
</div>
"#,
        update_header = t.update_header,
        code = lang.code(),
        lbl_name = t.lbl_name,
        ph_name = t.ph_name,
        lbl_id = t.lbl_id,
        hint_id = t.hint_id,
        ph_id = t.ph_id,
        lbl_loc = t.lbl_loc,
        ph_loc = t.ph_loc,
        lbl_status = t.lbl_status,
        lbl_msg = t.lbl_msg,
        ph_msg = t.ph_msg,
        btn_submit = t.btn_submit,
    )
}

fn search_form(view: &PageView<'_>, t: &Translations) -> String {
    let admin_field = view.admin_token.map_or_else(String::new, |token| {
        format!(
            r#"<input type="hidden" name="admin" value="{}">"#,
            escape_html(token)
        )
    });
    format!(
        r#"<form action="/" method="GET" class="search-form">
<input type="hidden" name="lang" value="{code}">{admin_field}
<input type="text" name="q" value="{search}" placeholder="{placeholder}">
<button type="submit">{button}</button>
</form>
"#,
        code = view.lang.code(),
        search = escape_html(view.search),
        placeholder = t.search_ph,
        button = t.btn_search,
    )
}

fn results(view: &PageView<'_>, t: &Translations) -> String {
    let mut html = String::from("<div class=\"results\">\n");
    if view.page.items.is_empty() {
        html.push_str(&format!("<div class=\"empty\">{}</div>\n", t.empty_state));
    }
    for record in &view.page.items {
        html.push_str(&result_item(view, t, record));
    }
    html.push_str("</div>\n");
    html
}

fn result_item(view: &PageView<'_>, t: &Translations, record: &StatusRecord) -> String {
    let status = record.status_kind();
    let delete = view
        .admin_token
        .map_or_else(String::new, |token| delete_form(view.lang, t, record.id, token));
    let message = record.message.as_deref().map_or_else(String::new, |m| {
        format!("<div class=\"message\">{}</div>\n", escape_html(m))
    });
    let local = record.created_at.with_timezone(&view.utc_offset);

    format!(
        r#"<div class="result-item">
<div class="result-header">
<strong>{name}</strong>
<div class="badges"><span class="status-badge status-{status}">{label}</span>{delete}</div>
</div>
{message}<div class="meta">{meta_loc}: {location} &bull; {meta_time}: <time datetime="{iso}">{shown}</time></div>
</div>
"#,
        name = escape_html(&record.name),
        status = status.as_str(),
        label = t.status_label(status),
        meta_loc = t.meta_loc,
        location = escape_html(&record.location),
        meta_time = t.meta_time,
        iso = record.created_at.to_rfc3339(),
        shown = format_time(local, view.utc_offset),
    )
}

fn delete_form(lang: Lang, t: &Translations, id: i64, token: &str) -> String {
    format!(
        r#"<form action="/delete" method="POST" class="delete-form" onsubmit="return confirm('{confirm}');">
<input type="hidden" name="id" value="{id}">
<input type="hidden" name="admin_token" value="{token}">
<input type="hidden" name="form_lang" value="{code}">
<button type="submit" class="delete-btn" title="{title}">X</button>
</form>"#,
        confirm = escape_html(t.confirm_delete),
        token = escape_html(token),
        code = lang.code(),
        title = t.btn_delete,
    )
}

fn format_time(local: chrono::DateTime<FixedOffset>, offset: FixedOffset) -> String {
    if offset.local_minus_utc() == 0 {
        local.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    } else {
        local.format("%Y-%m-%d %H:%M:%S UTC%:z").to_string()
    }
}

fn pagination(view: &PageView<'_>, t: &Translations) -> String {
    let page = view.page;
    let link = |target: u32, text: &str, enabled: bool| {
        if enabled {
            let href = listing_href(target, view.lang, view.search, view.admin_token);
            format!(
                r#"<a href="{}" class="pagination-btn">{text}</a>"#,
                escape_html(&href)
            )
        } else {
            format!(r#"<span class="pagination-btn disabled">{text}</span>"#)
        }
    };

    format!(
        "<nav class=\"pagination\">{}<span class=\"page-number\">{}</span>{}</nav>\n",
        link(page.page.saturating_sub(1), t.prev_page, page.has_prev()),
        t.page_label(page.page),
        link(page.page.saturating_add(1), t.next_page, page.has_next),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn record(id: i64, name: &str, status: &str, message: Option<&str>) -> StatusRecord {
        StatusRecord {
            id,
            name: name.to_string(),
            id_number: Some("SECRET-ID-123".into()),
            location: "Shelter#3".into(),
            status: status.to_string(),
            message: message.map(String::from),
            ip_address: "203.0.113.50".into(),
            created_at: Utc.with_ymd_and_hms(2026, 11, 26, 14, 30, 0).unwrap(),
        }
    }

    fn view<'a>(page: &'a Page<StatusRecord>) -> PageView<'a> {
        PageView {
            lang: Lang::En,
            event: "Drill",
            page,
            search: "",
            error: None,
            admin_token: None,
            utc_offset: Utc.fix(),
        }
    }

    #[test]
    fn escape_html_handles_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#039;&amp;&#039;&lt;/a&gt;"
        );
        assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn listing_href_encodes_parameters() {
        assert_eq!(listing_href(2, Lang::Cht, "", None), "/?p=2&lang=cht");
        assert_eq!(
            listing_href(1, Lang::En, "Wan Chai&x", Some("a b")),
            "/?p=1&lang=en&q=Wan%20Chai%26x&admin=a%20b"
        );
    }

    #[test]
    fn empty_page_shows_empty_state_and_disabled_pagination() {
        let page = Page::empty(1);
        let html = render_page(&view(&page));
        assert!(html.contains("No updates found."));
        assert!(html.contains(r#"<span class="pagination-btn disabled">Previous</span>"#));
        assert!(html.contains(r#"<span class="pagination-btn disabled">Next</span>"#));
        assert!(html.contains("Page 1"));
    }

    #[test]
    fn record_renders_without_private_fields() {
        let page = Page::from_peeked(vec![record(1, "Chan Tai Man", "Safe", None)], 1, 20);
        let html = render_page(&view(&page));
        assert!(html.contains("<strong>Chan Tai Man</strong>"));
        assert!(html.contains(r#"<span class="status-badge status-Safe">I am safe</span>"#));
        assert!(html.contains("Shelter#3"));
        assert!(html.contains("2026-11-26 14:30:00 UTC"));
        assert!(!html.contains("SECRET-ID-123"));
        assert!(!html.contains("203.0.113.50"));
        assert!(!html.contains("class=\"message\""));
        assert!(!html.contains("No updates found."));
    }

    #[test]
    fn unknown_status_renders_as_other() {
        let page = Page::from_peeked(vec![record(1, "Lee", "moving", None)], 1, 20);
        let html = render_page(&view(&page));
        assert!(html.contains(r#"status-badge status-Other">Other / on the move"#));
    }

    #[test]
    fn user_text_is_escaped() {
        let page = Page::from_peeked(
            vec![record(1, "<script>alert(1)</script>", "Safe", Some("<b>hi</b>"))],
            1,
            20,
        );
        let mut v = view(&page);
        v.search = r#""><img src=x>"#;
        let html = render_page(&v);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(html.contains(r#"value="&quot;&gt;&lt;img src=x&gt;""#));
    }

    #[test]
    fn delete_controls_only_for_admin_view() {
        let page = Page::from_peeked(vec![record(42, "Chan", "Safe", None)], 1, 20);
        assert!(!render_page(&view(&page)).contains("action=\"/delete\""));

        let mut admin = view(&page);
        admin.admin_token = Some("tok\"en");
        let html = render_page(&admin);
        assert!(html.contains("action=\"/delete\""));
        assert!(html.contains(r#"<input type="hidden" name="id" value="42">"#));
        assert!(html.contains(r#"<input type="hidden" name="admin_token" value="tok&quot;en">"#));
        assert!(html.contains(r#"<input type="hidden" name="admin" value="tok&quot;en">"#));
    }

    #[test]
    fn pagination_links_carry_state() {
        let items = (0..21).map(|i| record(i, "x", "Safe", None)).collect();
        let page = Page::from_peeked(items, 2, 20);
        let mut v = view(&page);
        v.search = "Tai Po";
        v.admin_token = Some("tok");
        let html = render_page(&v);
        assert!(html.contains(r#"<a href="/?p=1&amp;lang=en&amp;q=Tai%20Po&amp;admin=tok" class="pagination-btn">Previous</a>"#));
        assert!(html.contains(r#"<a href="/?p=3&amp;lang=en&amp;q=Tai%20Po&amp;admin=tok" class="pagination-btn">Next</a>"#));
    }

    #[test]
    fn error_banner_and_localized_chrome() {
        let page = Page::empty(1);
        let mut v = view(&page);
        v.lang = Lang::Cht;
        v.error = Some(Lang::Cht.strings().err_db);
        let html = render_page(&v);
        assert!(html.contains(r#"<html lang="zh-Hant">"#));
        assert!(html.contains(r#"<div class="error">資料庫暫時無法使用。</div>"#));
        assert!(html.contains("平安通報程式 • Drill"));
        assert!(html.contains("第 1 頁"));
        assert!(html.contains(r#"hreflang="en">English</a>"#));
    }

    #[test]
    fn timestamps_use_configured_offset() {
        let page = Page::from_peeked(vec![record(1, "Chan", "Safe", None)], 1, 20);
        let mut v = view(&page);
        v.utc_offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let html = render_page(&v);
        assert!(html.contains("2026-11-26 22:30:00 UTC+08:00"));
    }
}
