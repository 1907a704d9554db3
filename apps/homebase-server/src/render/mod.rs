//! HTML rendering for pages and htmx fragments
//!
//! Markup is produced with `format!` over raw string templates. Every value
//! that comes from a record or a request goes through [`escape_html`] first.

pub mod fragments;
pub mod pages;

use property_store::AgentState;

use crate::locale::{LabelPack, Lang, NavLabels};

/// htmx build the pages load
const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Escape text for safe inclusion in HTML content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format an amount with comma thousands separators (87000 -> "87,000")
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Top-level navigation sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Dashboard,
    Maintenance,
    Renewals,
    Properties,
    Vendors,
    Analytics,
    Settings,
}

impl NavKey {
    pub const ALL: [NavKey; 7] = [
        NavKey::Dashboard,
        NavKey::Maintenance,
        NavKey::Renewals,
        NavKey::Properties,
        NavKey::Vendors,
        NavKey::Analytics,
        NavKey::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            NavKey::Dashboard => "/dashboard",
            NavKey::Maintenance => "/maintenance/vendors",
            NavKey::Renewals => "/renewals/pipeline",
            NavKey::Properties => "/properties/control-panel",
            NavKey::Vendors => "/vendors/compliance",
            NavKey::Analytics => "/analytics",
            NavKey::Settings => "/settings",
        }
    }

    pub fn label(&self, nav: &NavLabels) -> &'static str {
        match self {
            NavKey::Dashboard => nav.dashboard,
            NavKey::Maintenance => nav.maintenance,
            NavKey::Renewals => nav.renewals,
            NavKey::Properties => nav.properties,
            NavKey::Vendors => nav.vendors,
            NavKey::Analytics => nav.analytics,
            NavKey::Settings => nav.settings,
        }
    }
}

/// Everything the page chrome needs besides the body
pub struct Shell<'a> {
    pub pack: LabelPack,
    pub title: &'a str,
    pub nav_active: NavKey,
    pub agent: AgentState,
    pub today: String,
}

fn nav_bar(shell: &Shell<'_>) -> String {
    let lang = shell.pack.lang;
    NavKey::ALL
        .iter()
        .map(|key| {
            let class = if *key == shell.nav_active {
                "nav-link active"
            } else {
                "nav-link"
            };
            format!(
                r#"<a class="{class}" href="{path}?lang={lang}">{label}</a>"#,
                class = class,
                path = key.path(),
                lang = lang,
                label = escape_html(key.label(&shell.pack.labels.nav)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

/// Wrap a page body in the full document: head, navigation, status chip
pub fn page(shell: &Shell<'_>, body: &str) -> String {
    let labels = shell.pack.labels;
    let other_lang = match shell.pack.lang {
        Lang::En => Lang::Ar,
        Lang::Ar => Lang::En,
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} | {app_name}</title>
  <link rel="stylesheet" href="/static/app.css">
  <script src="{htmx}"></script>
</head>
<body>
  <header class="topbar">
    <div class="brand">
      <strong>{app_name}</strong>
      <span class="tagline">{tagline}</span>
    </div>
    <nav class="nav">
      {nav}
    </nav>
    <div class="topbar-tools">
      {chip}
      <form hx-post="/hx/lang/toggle" hx-swap="none">
        <input type="hidden" name="lang" value="{other_lang}">
        <button type="submit" class="lang-toggle">{lang_switch}</button>
      </form>
    </div>
  </header>
  <main class="content">
    <div class="page-head">
      <h1>{title}</h1>
      <span class="today">{today}</span>
      <span class="badge demo">{demo_mode}</span>
    </div>
{body}
  </main>
  <footer class="footer">{ai_assisted}</footer>
</body>
</html>"#,
        lang = shell.pack.lang,
        dir = shell.pack.direction,
        title = escape_html(shell.title),
        app_name = escape_html(labels.app_name),
        htmx = HTMX_SRC,
        tagline = escape_html(labels.tagline),
        nav = nav_bar(shell),
        chip = fragments::agent_status_chip(&shell.pack, &shell.agent),
        other_lang = other_lang,
        lang_switch = escape_html(labels.lang_switch),
        today = escape_html(&shell.today),
        demo_mode = escape_html(labels.demo_mode),
        body = body,
        ai_assisted = escape_html(labels.ai_assisted),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use property_store::AgentStatus;

    fn shell(lang: Lang) -> Shell<'static> {
        Shell {
            pack: lang.pack(),
            title: "Renewal <Pipeline>",
            nav_active: NavKey::Renewals,
            agent: AgentState {
                status: AgentStatus::Active,
                actions_today: 47,
                response_time_seconds: 8,
            },
            today: "07/02/2026".to_string(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("Unit 402"), "Unit 402");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(87000), "87,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-88570), "-88,570");
    }

    #[test]
    fn test_page_sets_lang_and_direction() {
        let html = page(&shell(Lang::Ar), "<p>body</p>");
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.contains("التجديدات"));
        assert!(html.contains(r#"value="en""#));

        let html = page(&shell(Lang::En), "<p>body</p>");
        assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_nav_marks_active_section_and_keeps_lang() {
        let html = page(&shell(Lang::En), "");
        assert!(html.contains(r#"<a class="nav-link active" href="/renewals/pipeline?lang=en">Renewals</a>"#));
        assert!(html.contains(r#"href="/settings?lang=en""#));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = page(&shell(Lang::En), "");
        assert!(html.contains("Renewal &lt;Pipeline&gt;"));
        assert!(!html.contains("Renewal <Pipeline>"));
    }
}
