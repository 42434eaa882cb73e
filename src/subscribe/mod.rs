//! Newsletter signup endpoint (`POST /api/subscribe`).
//!
//! Serve-mode only. Accepted signups are appended as JSON lines to the
//! subscriber list configured under `[serve.subscribe]`; the card in
//! the rendered pages posts here. A honeypot field and a per-client
//! rate limit keep bots out without any user-visible friction.

mod limiter;

pub use limiter::RateLimiter;

use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tiny_http::{Header, Request, Response, StatusCode};

use crate::config::SiteConfig;
use crate::i18n::Lang;
use crate::log;
use crate::utils::date::DateTimeUtc;

/// Request bodies larger than this are rejected outright.
const MAX_BODY_BYTES: u64 = 8 * 1024;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Default, Deserialize)]
struct SubscribeRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    lang: Option<String>,
    /// Honeypot. Humans never see the field; a filled value means bot.
    #[serde(default)]
    website: Option<String>,
}

#[derive(Debug, Serialize)]
struct SubscriberRecord<'a> {
    email: &'a str,
    lang: Lang,
    subscribed_at: String,
}

/// Endpoint outcome, separated from HTTP so the decision logic is
/// directly testable.
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    pub status: u16,
    pub body: &'static str,
}

impl Outcome {
    const OK: Self = Self::new(200, r#"{"ok":true}"#);
    const BAD_JSON: Self = Self::new(400, r#"{"error":"Invalid JSON"}"#);
    const BAD_EMAIL: Self = Self::new(400, r#"{"error":"Invalid email"}"#);
    const BAD_LANG: Self = Self::new(400, r#"{"error":"Invalid language"}"#);
    const OVER_LIMIT: Self = Self::new(429, r#"{"error":"Too many requests"}"#);

    const fn new(status: u16, body: &'static str) -> Self {
        Self { status, body }
    }
}

/// Build the rate limiter the serve command injects into the handler.
pub fn make_limiter(config: &SiteConfig) -> RateLimiter {
    RateLimiter::new(
        config.serve.subscribe.hourly_limit,
        Duration::from_secs(3600),
    )
}

/// Handle one subscribe request end to end.
pub fn handle(mut request: Request, config: &SiteConfig, limiter: &RateLimiter) -> Result<()> {
    let client = request
        .remote_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_default();

    let mut raw = String::new();
    let read = request
        .as_reader()
        .take(MAX_BODY_BYTES)
        .read_to_string(&mut raw);

    let outcome = match read {
        Ok(_) => process(&raw, &client, config, limiter).unwrap_or_else(|e| {
            log!("subscribe"; "failed to record signup: {e:#}");
            Outcome::new(500, r#"{"error":"Failed to subscribe"}"#)
        }),
        Err(_) => Outcome::BAD_JSON,
    };

    let response = Response::from_string(outcome.body)
        .with_status_code(StatusCode(outcome.status))
        .with_header(header("Content-Type", crate::utils::mime::types::JSON));
    request.respond(response)?;
    Ok(())
}

/// Decide what a request gets. Errors here are I/O failures while
/// recording an accepted signup; validation failures are outcomes.
fn process(
    raw: &str,
    client: &str,
    config: &SiteConfig,
    limiter: &RateLimiter,
) -> Result<Outcome> {
    let Ok(body) = serde_json::from_str::<SubscribeRequest>(raw) else {
        return Ok(Outcome::BAD_JSON);
    };

    // Bots get a success response and no record
    if body.website.as_deref().is_some_and(|w| !w.is_empty()) {
        return Ok(Outcome::OK);
    }

    if !limiter.check(client) {
        return Ok(Outcome::OVER_LIMIT);
    }

    let email = body.email.as_deref().unwrap_or("");
    if !EMAIL_RE.is_match(email) {
        return Ok(Outcome::BAD_EMAIL);
    }

    let Some(lang) = body.lang.as_deref().and_then(Lang::parse) else {
        return Ok(Outcome::BAD_LANG);
    };

    record(config, email, lang)?;
    Ok(Outcome::OK)
}

/// Append the signup to the subscriber list. A repeat email is accepted
/// without a second line, so resubmitting the form stays idempotent.
fn record(config: &SiteConfig, email: &str, lang: Lang) -> Result<()> {
    let path = &config.serve.subscribe.file;

    if path.is_file() {
        let existing = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let known = existing
            .lines()
            .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
            .any(|v| v["email"] == email);
        if known {
            return Ok(());
        }
    } else if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }

    let line = serde_json::to_string(&SubscriberRecord {
        email,
        lang,
        subscribed_at: DateTimeUtc::now().to_rfc3339(),
    })?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    writeln!(file, "{line}")?;
    Ok(())
}

fn header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
