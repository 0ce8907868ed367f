use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct LogId(pub u64);

impl std::fmt::Display for LogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One row of the listing. The backend's wire names are absorbed here so the
/// rest of the app only ever sees this normalized shape.
#[derive(Clone, Debug, Deserialize)]
pub struct LogSummary {
    pub id: LogId,
    /// RFC 3339 timestamp as sent by the backend.
    pub timestamp: String,
    pub action: String,
    pub status: String,
    pub email: String,
    pub ip: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub threat_score: Option<f64>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
}

/// `GET /logs` response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct LogsPage {
    pub logs: Vec<LogSummary>,
    pub total: u64,
    pub page: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// `GET /logs/:id` response. Superset of [`LogSummary`] with lazily-fetched
/// enrichment fields, including the backend-produced analysis record.
#[derive(Clone, Debug, Deserialize)]
pub struct LogDetail {
    #[serde(flatten)]
    pub summary: LogSummary,
    #[serde(default)]
    pub headers: Option<serde_json::Value>,
    #[serde(default)]
    pub request_body: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub response_time: Option<f64>,
    #[serde(default)]
    pub request_size: Option<u64>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub analysis: Option<LogAnalysis>,
}

/// Backend-produced analysis. Rendered verbatim; nothing here is computed
/// client-side.
#[derive(Clone, Debug, Deserialize)]
pub struct LogAnalysis {
    pub threat_score: f64,
    pub confidence: String,
    pub detection_rule: String,
    pub priority: String,
    #[serde(default)]
    pub mitre_matches: Vec<MitreMatch>,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MitreMatch {
    pub tactic: String,
    pub technique_id: String,
    pub technique_name: String,
    #[serde(default)]
    pub rationale: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_listing_envelope() {
        let body = r#"{
            "logs": [{
                "id": 7,
                "timestamp": "2024-05-01T12:30:00Z",
                "action": "/login_attempt",
                "status": "401",
                "email": "alice@example.com",
                "ip": "10.0.0.7",
                "user_agent": "curl/8.0",
                "threat_score": 22.5
            }],
            "total": 1,
            "page": 1,
            "totalPages": 1
        }"#;
        let page: LogsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.logs[0].id, LogId(7));
        assert_eq!(page.logs[0].threat_score, Some(22.5));
    }

    #[test]
    fn decodes_empty_listing_envelope() {
        let body = r#"{"logs": [], "total": 0, "page": 1, "totalPages": 1}"#;
        let page: LogsPage = serde_json::from_str(body).unwrap();
        assert!(page.logs.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn decodes_summary_without_optional_fields() {
        let body = r#"{
            "id": 1,
            "timestamp": "2024-05-01T12:30:00Z",
            "action": "page_view",
            "status": "200",
            "email": "bob@example.com",
            "ip": "10.0.0.8"
        }"#;
        let log: LogSummary = serde_json::from_str(body).unwrap();
        assert!(log.threat_score.is_none());
        assert!(log.user_agent.is_none());
    }

    #[test]
    fn decodes_detail_with_nested_analysis() {
        let body = r#"{
            "id": 42,
            "timestamp": "2024-05-01T12:30:00Z",
            "action": "sql_injection_attempt",
            "status": "403",
            "email": "mallory@example.com",
            "ip": "203.0.113.9",
            "request_body": "' OR 1=1 --",
            "analysis": {
                "threat_score": 87.0,
                "confidence": "high",
                "detection_rule": "sqli-union-select",
                "priority": "critical",
                "mitre_matches": [{
                    "tactic": "Initial Access",
                    "technique_id": "T1190",
                    "technique_name": "Exploit Public-Facing Application",
                    "rationale": "payload targets the login form"
                }],
                "recommended_actions": ["block source IP"]
            }
        }"#;
        let detail: LogDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.summary.id, LogId(42));
        let analysis = detail.analysis.unwrap();
        assert_eq!(analysis.mitre_matches[0].technique_id, "T1190");
        assert_eq!(analysis.recommended_actions.len(), 1);
        assert!(analysis.notes.is_none());
    }
}
