mod classify;
mod log;
mod stats;

pub use classify::{
    Badge, HIGH_THREAT, LOW_THREAT, classify_severity, classify_status, classify_threat,
    format_action,
};
pub use self::log::{LogAnalysis, LogDetail, LogId, LogSummary, LogsPage, MitreMatch};
pub use stats::DashboardStats;
