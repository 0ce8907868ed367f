use serde::Deserialize;

/// `GET /dashboard/stats` response. The deployed backend reports the
/// suspicious/malicious counters under Portuguese names; normalize them here.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct DashboardStats {
    pub total_logs: u64,
    #[serde(rename = "logs_suspeitos")]
    pub suspicious: u64,
    #[serde(rename = "logs_maliciosos")]
    pub malicious: u64,
}
