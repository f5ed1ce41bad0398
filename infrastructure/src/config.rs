use domain::access::PageKind;
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub session_cookie: Option<String>,
    pub page: PageKind,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("DOCCHAT_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let session_cookie = lookup("DOCCHAT_SESSION_COOKIE").filter(|v| !v.trim().is_empty());
        let page = match lookup("DOCCHAT_ADMIN").as_deref().map(str::trim) {
            Some("1") | Some("true") | Some("yes") => PageKind::Admin,
            _ => PageKind::Dashboard,
        };
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session_cookie,
            page,
        }
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn with_admin(mut self, admin: bool) -> Self {
        if admin {
            self.page = PageKind::Admin;
        }
        self
    }
}
