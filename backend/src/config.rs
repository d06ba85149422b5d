use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use std::{env, net::SocketAddr, time::Duration};
use url::Url;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One URL per spreadsheet script contract.
#[derive(Debug, Clone)]
pub struct ScriptEndpoints {
    pub employees: Url,
    pub employee_update: Url,
    pub recruitments: Url,
    pub recruitment_action: Url,
    pub leave_requests: Url,
    pub leave_action: Url,
    pub login: Url,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
    pub skip_send: bool,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 587,
            username: String::new(),
            password: String::new(),
            from_address: "noreply@hrdesk.local".to_string(),
            skip_send: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub scripts: ScriptEndpoints,
    pub upstream_timeout: Duration,
    pub time_zone: Tz,
    pub allowed_email_domain: String,
    pub page_size: usize,
    pub smtp: SmtpConfig,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; `load` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse::<SocketAddr>()
            .context("Invalid BIND_ADDR value")?;

        let script = |key: &str| -> anyhow::Result<Url> {
            let raw = lookup(key).ok_or_else(|| anyhow!("{} must be set", key))?;
            Url::parse(raw.trim()).with_context(|| format!("Invalid {} value: {}", key, raw))
        };
        let scripts = ScriptEndpoints {
            employees: script("EMPLOYEES_SCRIPT_URL")?,
            employee_update: script("EMPLOYEE_UPDATE_SCRIPT_URL")?,
            recruitments: script("RECRUITMENTS_SCRIPT_URL")?,
            recruitment_action: script("RECRUITMENT_ACTION_SCRIPT_URL")?,
            leave_requests: script("LEAVE_REQUESTS_SCRIPT_URL")?,
            leave_action: script("LEAVE_ACTION_SCRIPT_URL")?,
            login: script("LOGIN_SCRIPT_URL")?,
        };

        let upstream_timeout_secs = lookup("UPSTREAM_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(15);

        let time_zone_name = lookup("APP_TIMEZONE").unwrap_or_else(|| "UTC".to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        let allowed_email_domain = lookup("ALLOWED_EMAIL_DOMAIN")
            .map(|d| d.trim().trim_start_matches('@').to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "gmail.com".to_string());

        let page_size = lookup("PAGE_SIZE")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let defaults = SmtpConfig::default();
        let smtp = SmtpConfig {
            host: lookup("SMTP_HOST").unwrap_or(defaults.host),
            port: lookup("SMTP_PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            username: lookup("SMTP_USERNAME").unwrap_or_default(),
            password: lookup("SMTP_PASSWORD").unwrap_or_default(),
            from_address: lookup("SMTP_FROM_ADDRESS").unwrap_or(defaults.from_address),
            skip_send: lookup("SMTP_SKIP_SEND").is_some_and(|v| v == "true"),
        };

        Ok(Config {
            bind_addr,
            scripts,
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
            time_zone,
            allowed_email_domain,
            page_size,
            smtp,
        })
    }
}
