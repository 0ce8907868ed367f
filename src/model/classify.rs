/// Threat score at or above which an entry is flagged critical.
pub const HIGH_THREAT: f64 = 40.0;
/// Threat score at or above which an entry is flagged as a warning.
pub const LOW_THREAT: f64 = 15.0;

/// Discrete display category for a raw log field. Every classification
/// function below is total: unknown or missing input maps to `Neutral`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Neutral,
    Info,
    Ok,
    Warning,
    Critical,
}

/// Classify an entry from its threat score, falling back to known substrings
/// of the action. A present score is authoritative: the substring rules are
/// only consulted when the backend sent no score.
pub fn classify_threat(score: Option<f64>, action: Option<&str>) -> Badge {
    if let Some(score) = score {
        return if score >= HIGH_THREAT {
            Badge::Critical
        } else if score >= LOW_THREAT {
            Badge::Warning
        } else {
            Badge::Info
        };
    }

    let Some(action) = action else {
        return Badge::Neutral;
    };
    let action = action.to_ascii_lowercase();
    if ["malicious", "attack", "injection"]
        .iter()
        .any(|k| action.contains(k))
    {
        Badge::Critical
    } else if ["suspicious", "failed"].iter().any(|k| action.contains(k)) {
        Badge::Warning
    } else {
        Badge::Info
    }
}

/// Classify a textual severity or priority field.
pub fn classify_severity(severity: Option<&str>) -> Badge {
    let Some(severity) = severity else {
        return Badge::Neutral;
    };
    match severity.to_ascii_lowercase().as_str() {
        "critical" | "high" => Badge::Critical,
        "medium" => Badge::Warning,
        "low" => Badge::Info,
        _ => Badge::Neutral,
    }
}

/// Classify an HTTP status field. The backend sends either a numeric status
/// code or the words "success"/"failed".
pub fn classify_status(status: Option<&str>) -> Badge {
    let Some(status) = status else {
        return Badge::Neutral;
    };
    if let Ok(code) = status.trim().parse::<u16>() {
        return match code {
            200..=299 => Badge::Ok,
            400..=499 => Badge::Warning,
            code if code >= 500 => Badge::Critical,
            _ => Badge::Neutral,
        };
    }
    match status.to_ascii_lowercase().as_str() {
        "success" => Badge::Ok,
        "failed" => Badge::Critical,
        _ => Badge::Neutral,
    }
}

/// Turn a raw action path like "/failed_login" into "Failed login".
pub fn format_action(action: &str) -> String {
    let formatted = action.trim_start_matches('/').replace('_', " ");
    let mut chars = formatted.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_thresholds() {
        assert_eq!(classify_threat(Some(45.0), None), Badge::Critical);
        assert_eq!(classify_threat(Some(20.0), None), Badge::Warning);
        assert_eq!(classify_threat(Some(5.0), None), Badge::Info);
    }

    #[test]
    fn score_boundaries() {
        assert_eq!(classify_threat(Some(HIGH_THREAT), None), Badge::Critical);
        assert_eq!(classify_threat(Some(LOW_THREAT), None), Badge::Warning);
        assert_eq!(classify_threat(Some(LOW_THREAT - 0.1), None), Badge::Info);
        assert_eq!(classify_threat(Some(0.0), None), Badge::Info);
    }

    #[test]
    fn score_overrides_action_substrings() {
        // A present score is authoritative even when the action looks hostile.
        assert_eq!(
            classify_threat(Some(5.0), Some("sql_injection_attempt")),
            Badge::Info
        );
    }

    #[test]
    fn action_substrings() {
        assert_eq!(classify_threat(None, Some("sql_injection")), Badge::Critical);
        assert_eq!(classify_threat(None, Some("BRUTE_ATTACK")), Badge::Critical);
        assert_eq!(classify_threat(None, Some("malicious_upload")), Badge::Critical);
        assert_eq!(classify_threat(None, Some("failed_login")), Badge::Warning);
        assert_eq!(classify_threat(None, Some("suspicious_ua")), Badge::Warning);
        assert_eq!(classify_threat(None, Some("page_view")), Badge::Info);
    }

    #[test]
    fn missing_input_is_neutral() {
        assert_eq!(classify_threat(None, None), Badge::Neutral);
        assert_eq!(classify_severity(None), Badge::Neutral);
        assert_eq!(classify_status(None), Badge::Neutral);
    }

    #[test]
    fn severity_words() {
        assert_eq!(classify_severity(Some("Critical")), Badge::Critical);
        assert_eq!(classify_severity(Some("high")), Badge::Critical);
        assert_eq!(classify_severity(Some("medium")), Badge::Warning);
        assert_eq!(classify_severity(Some("low")), Badge::Info);
        assert_eq!(classify_severity(Some("whatever")), Badge::Neutral);
    }

    #[test]
    fn status_codes_and_words() {
        assert_eq!(classify_status(Some("200")), Badge::Ok);
        assert_eq!(classify_status(Some("204")), Badge::Ok);
        assert_eq!(classify_status(Some("301")), Badge::Neutral);
        assert_eq!(classify_status(Some("404")), Badge::Warning);
        assert_eq!(classify_status(Some("503")), Badge::Critical);
        assert_eq!(classify_status(Some("success")), Badge::Ok);
        assert_eq!(classify_status(Some("FAILED")), Badge::Critical);
        assert_eq!(classify_status(Some("pending")), Badge::Neutral);
    }

    #[test]
    fn action_formatting() {
        assert_eq!(format_action("/failed_login"), "Failed login");
        assert_eq!(format_action("page_view"), "Page view");
        assert_eq!(format_action(""), "");
    }
}
