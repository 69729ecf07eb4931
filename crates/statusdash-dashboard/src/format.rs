//! Display formatting for snapshot values

use chrono::{DateTime, Datelike, Duration, FixedOffset, Utc};
use ratatui::style::Color;

/// Placeholder for values that are missing or cannot be shown
pub const PLACEHOLDER: &str = "-";

/// Color class of a table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Affirmative,
    Alert,
    Warning,
    Neutral,
}

impl Tone {
    /// Classify a health/status token, ignoring case
    pub fn from_state(state: &str) -> Self {
        match state.to_lowercase().as_str() {
            "running" | "healthy" => Self::Affirmative,
            "restarting" | "unhealthy" => Self::Alert,
            "exited" => Self::Warning,
            _ => Self::Neutral,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Affirmative => Color::Green,
            Self::Alert => Color::Red,
            Self::Warning => Color::Yellow,
            Self::Neutral => Color::White,
        }
    }
}

/// Format time since `started_at` as a short uptime ("3h 12m").
///
/// Accepts RFC 3339 (with or without fractional seconds) and the Docker CLI
/// form `2006-01-02 15:04:05.999 -0700 MST`. Empty, unparseable and
/// zero-valued timestamps yield [`PLACEHOLDER`].
pub fn format_uptime(started_at: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(started_at) {
        Some(started) if started.year() > 1 => {
            let elapsed = now.signed_duration_since(started.with_timezone(&Utc));
            human_duration(elapsed.max(Duration::zero()))
        }
        _ => PLACEHOLDER.to_string(),
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed);
    }

    // Docker CLI style; drop a trailing zone abbreviation such as "UTC"
    let mut parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() == 4 {
        parts.pop();
    }
    DateTime::parse_from_str(&parts.join(" "), "%Y-%m-%d %H:%M:%S%.f %z").ok()
}

/// Coarse human duration: "<1m", "42m", "3h 12m", "2d 5h"
pub fn human_duration(d: Duration) -> String {
    let total_secs = d.num_seconds();
    if total_secs < 60 {
        return "<1m".to_string();
    }

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let mins = (total_secs % 3_600) / 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

const SCHEME_PREFIXES: [&str; 3] = ["https://", "http://", "git@"];
const HOST_PREFIXES: [&str; 4] = ["github.com:", "gitlab.com:", "github.com/", "gitlab.com/"];

/// Shorten a repository URL to "owner/name"
pub fn normalize_repo(repo: &str) -> String {
    let mut repo = repo.trim();
    for prefix in SCHEME_PREFIXES {
        repo = repo.strip_prefix(prefix).unwrap_or(repo);
    }
    for prefix in HOST_PREFIXES {
        repo = repo.strip_prefix(prefix).unwrap_or(repo);
    }
    repo.strip_suffix(".git").unwrap_or(repo).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ago(now: DateTime<Utc>, secs: i64) -> String {
        (now - Duration::seconds(secs)).to_rfc3339()
    }

    #[test]
    fn test_uptime_buckets() {
        let now = Utc::now();
        assert_eq!(format_uptime(&ago(now, 30), now), "<1m");
        assert_eq!(format_uptime(&ago(now, 90), now), "1m");
        assert_eq!(format_uptime(&ago(now, 3661), now), "1h 1m");
        assert_eq!(format_uptime(&ago(now, 90_000), now), "1d 1h");
    }

    #[test]
    fn test_uptime_unusable_timestamps() {
        let now = Utc::now();
        assert_eq!(format_uptime("", now), "-");
        assert_eq!(format_uptime("   ", now), "-");
        assert_eq!(format_uptime("yesterday", now), "-");
        assert_eq!(format_uptime("0001-01-01T00:00:00Z", now), "-");
    }

    #[test]
    fn test_uptime_accepts_fractional_and_docker_forms() {
        let now = DateTime::parse_from_rfc3339("2025-01-25T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            format_uptime("2025-01-25T10:30:00.123456789Z", now),
            "1h 29m"
        );
        assert_eq!(
            format_uptime("2025-01-25 11:00:00.5 +0000 UTC", now),
            "59m"
        );
        assert_eq!(format_uptime("2025-01-24 12:00:00 +0000", now), "1d 0h");
    }

    #[test]
    fn test_uptime_future_start_clamps() {
        let now = Utc::now();
        assert_eq!(format_uptime(&ago(now, -600), now), "<1m");
    }

    #[test]
    fn test_tone_classification() {
        assert_eq!(Tone::from_state("running"), Tone::Affirmative);
        assert_eq!(Tone::from_state("Healthy"), Tone::Affirmative);
        assert_eq!(Tone::from_state("RESTARTING"), Tone::Alert);
        assert_eq!(Tone::from_state("unhealthy"), Tone::Alert);
        assert_eq!(Tone::from_state("Exited"), Tone::Warning);
        assert_eq!(Tone::from_state(""), Tone::Neutral);
        assert_eq!(Tone::from_state("starting"), Tone::Neutral);
        assert_eq!(Tone::Alert.color(), Color::Red);
    }

    #[test]
    fn test_normalize_repo() {
        assert_eq!(normalize_repo("https://github.com/org/repo.git"), "org/repo");
        assert_eq!(normalize_repo("git@github.com:org/repo.git"), "org/repo");
        assert_eq!(normalize_repo("http://gitlab.com/group/proj"), "group/proj");
        assert_eq!(normalize_repo("  https://example.org/x/y.git \n"), "example.org/x/y");
        assert_eq!(normalize_repo(""), "");
    }

    #[test]
    fn test_human_duration_exact_day() {
        assert_eq!(human_duration(Duration::seconds(86_400)), "1d 0h");
        assert_eq!(human_duration(Duration::seconds(3_600)), "1h 0m");
        assert_eq!(human_duration(Duration::seconds(59)), "<1m");
    }
}
