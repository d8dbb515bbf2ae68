use std::env;

const DEFAULT_SESSION_TTL_MINUTES: i64 = 30;
// one year
const MAX_SESSION_TTL_MINUTES: i64 = 525_600;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub hospitals_csv: String,
    pub session_store: String,
    pub database_url: String,
    pub session_ttl_minutes: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            hospitals_csv: env::var("HOSPITALS_CSV").unwrap_or_else(|_| "hospitals.csv".to_string()),
            session_store: env::var("SESSION_STORE").unwrap_or_else(|_| "sqlite".to_string()),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "carefinder.db".to_string()),
            session_ttl_minutes: parse_session_ttl(env::var("SESSION_TTL_MINUTES").ok().as_deref()),
        }
    }
}

/// Non-positive or unparseable values use the default; large values are
/// capped at one year.
fn parse_session_ttl(raw: Option<&str>) -> i64 {
    match raw.and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(minutes) if minutes > MAX_SESSION_TTL_MINUTES => {
            tracing::warn!(minutes, max = MAX_SESSION_TTL_MINUTES, "SESSION_TTL_MINUTES too large, capping");
            MAX_SESSION_TTL_MINUTES
        }
        Some(minutes) if minutes > 0 => minutes,
        Some(minutes) => {
            tracing::warn!(minutes, "SESSION_TTL_MINUTES must be positive, using default");
            DEFAULT_SESSION_TTL_MINUTES
        }
        None => DEFAULT_SESSION_TTL_MINUTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ttl_defaults() {
        assert_eq!(parse_session_ttl(None), 30);
        assert_eq!(parse_session_ttl(Some("soon")), 30);
        assert_eq!(parse_session_ttl(Some(" 45 ")), 45);
    }

    #[test]
    fn test_session_ttl_rejects_non_positive() {
        assert_eq!(parse_session_ttl(Some("0")), 30);
        assert_eq!(parse_session_ttl(Some("-10")), 30);
    }

    #[test]
    fn test_session_ttl_caps_large_values() {
        assert_eq!(parse_session_ttl(Some("200000000000")), MAX_SESSION_TTL_MINUTES);
        assert_eq!(
            parse_session_ttl(Some("9223372036854775807")),
            MAX_SESSION_TTL_MINUTES
        );
    }
}
