//! English/Arabic label packs and request language resolution
//!
//! Language comes from the `lang` query parameter, then the `lang` cookie,
//! and defaults to English. Anything starting with "ar" is Arabic.

use std::convert::Infallible;
use std::fmt;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

/// Name of the cookie remembering the language choice
pub const LANG_COOKIE: &str = "lang";

/// Lifetime of the language cookie (30 days)
pub const LANG_COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    /// Map any language preference onto one of the two supported codes
    pub fn normalize(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.to_lowercase().starts_with("ar") => Lang::Ar,
            _ => Lang::En,
        }
    }

    /// Query parameter wins over the cookie; empty values count as missing
    pub fn choose(query: Option<&str>, cookie: Option<&str>) -> Self {
        let query = query.filter(|q| !q.is_empty());
        Self::normalize(query.or(cookie))
    }

    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Lang::En => Direction::Ltr,
            Lang::Ar => Direction::Rtl,
        }
    }

    pub fn pack(&self) -> LabelPack {
        let labels = match self {
            Lang::En => &EN_LABELS,
            Lang::Ar => &AR_LABELS,
        };
        LabelPack {
            lang: *self,
            direction: self.direction(),
            labels,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ltr => f.write_str("ltr"),
            Direction::Rtl => f.write_str("rtl"),
        }
    }
}

/// Navigation labels
#[derive(Debug)]
pub struct NavLabels {
    pub dashboard: &'static str,
    pub maintenance: &'static str,
    pub renewals: &'static str,
    pub properties: &'static str,
    pub vendors: &'static str,
    pub analytics: &'static str,
    pub settings: &'static str,
}

/// Headings and verdicts of the RERA calculator result
#[derive(Debug)]
pub struct ReraLabels {
    pub exceeds_cap: &'static str,
    pub current_rent: &'static str,
    pub market_average: &'static str,
    pub proposed_rent: &'static str,
    pub vs_market: &'static str,
    pub max_increase: &'static str,
    pub max_rent: &'static str,
    pub recommended_rent: &'static str,
}

/// One language's UI strings
#[derive(Debug)]
pub struct Labels {
    pub app_name: &'static str,
    pub tagline: &'static str,
    pub nav: NavLabels,
    pub lang_switch: &'static str,
    pub ai_assisted: &'static str,
    pub ai_status: &'static str,
    pub active: &'static str,
    pub processing: &'static str,
    pub idle: &'static str,
    pub freshness: &'static str,
    pub response: &'static str,
    pub rera_badge: &'static str,
    pub rera: ReraLabels,
    pub saved_time: &'static str,
    pub human_gate: &'static str,
    pub approve: &'static str,
    pub modify: &'static str,
    pub send: &'static str,
    pub process_all: &'static str,
    pub notices: &'static str,
    pub demo_mode: &'static str,
}

impl Labels {
    /// Look up a status label by its pack key ("active", "processing", "idle")
    pub fn status(&self, key: &str) -> &'static str {
        match key {
            "active" => self.active,
            "processing" => self.processing,
            _ => self.idle,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LabelPack {
    pub lang: Lang,
    pub direction: Direction,
    pub labels: &'static Labels,
}

pub static EN_LABELS: Labels = Labels {
    app_name: "Homebase",
    tagline: "AI-assisted property operations for Dubai/UAE",
    nav: NavLabels {
        dashboard: "Dashboard",
        maintenance: "Maintenance",
        renewals: "Renewals",
        properties: "Properties",
        vendors: "Vendors",
        analytics: "Analytics",
        settings: "Settings",
    },
    lang_switch: "EN / AR",
    ai_assisted: "AI-assisted, manager approved",
    ai_status: "AI Agent Status",
    active: "Active",
    processing: "Processing",
    idle: "Idle",
    freshness: "Updated 2 minutes ago",
    response: "Agent response: 8 seconds",
    rera_badge: "🇦🇪 RERA Compliant",
    rera: ReraLabels {
        exceeds_cap: "Exceeds RERA cap",
        current_rent: "Current rent",
        market_average: "Market average",
        proposed_rent: "Proposed rent",
        vs_market: "vs market",
        max_increase: "Max allowed increase",
        max_rent: "Max allowed rent",
        recommended_rent: "Recommended rent",
    },
    saved_time: "Saved 4 hours of manual work",
    human_gate: "Manager approval required",
    approve: "Approve",
    modify: "Modify Terms",
    send: "Send to Tenant",
    process_all: "Process all renewals",
    notices: "Send 90-day notices",
    demo_mode: "Hackathon demo data",
};

pub static AR_LABELS: Labels = Labels {
    app_name: "هومبيس",
    tagline: "عمليات عقارية مدعومة بالذكاء الاصطناعي في دبي والإمارات",
    nav: NavLabels {
        dashboard: "لوحة التحكم",
        maintenance: "الصيانة",
        renewals: "التجديدات",
        properties: "العقارات",
        vendors: "المورّدون",
        analytics: "التحليلات",
        settings: "الإعدادات",
    },
    lang_switch: "ع / EN",
    ai_assisted: "مساعد بالذكاء الاصطناعي مع اعتماد المدير",
    ai_status: "حالة وكيل الذكاء الاصطناعي",
    active: "نشط",
    processing: "قيد المعالجة",
    idle: "خامل",
    freshness: "تم التحديث قبل دقيقتين",
    response: "استجابة الوكيل: 8 ثوانٍ",
    rera_badge: "🇦🇪 متوافق مع ريرا",
    rera: ReraLabels {
        exceeds_cap: "يتجاوز حد ريرا",
        current_rent: "الإيجار الحالي",
        market_average: "متوسط السوق",
        proposed_rent: "الإيجار المقترح",
        vs_market: "مقارنة بالسوق",
        max_increase: "أقصى زيادة مسموحة",
        max_rent: "أقصى إيجار مسموح",
        recommended_rent: "الإيجار الموصى به",
    },
    saved_time: "تم توفير 4 ساعات من العمل اليدوي",
    human_gate: "مطلوب اعتماد المدير",
    approve: "اعتماد",
    modify: "تعديل الشروط",
    send: "إرسال إلى المستأجر",
    process_all: "معالجة جميع التجديدات",
    notices: "إرسال إشعارات 90 يوم",
    demo_mode: "بيانات عرض الهاكاثون",
};

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

/// Language of the current request (query parameter, then cookie)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLang(pub Lang);

#[async_trait]
impl<S> FromRequestParts<S> for RequestLang
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<LangQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.lang);
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar.get(LANG_COOKIE).map(|c| c.value().to_string());

        Ok(RequestLang(Lang::choose(query.as_deref(), cookie.as_deref())))
    }
}
