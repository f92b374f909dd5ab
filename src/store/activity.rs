use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a logged activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Batch,
    Mortality,
    Shipment,
    Feed,
    Generic,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::Batch => write!(f, "batch"),
            ActivityKind::Mortality => write!(f, "mortality"),
            ActivityKind::Shipment => write!(f, "shipment"),
            ActivityKind::Feed => write!(f, "feed"),
            ActivityKind::Generic => write!(f, "generic"),
        }
    }
}

/// One recorded activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Utc>,
    pub kind: ActivityKind,
    pub description: String,
    /// Operator who performed the action, when known
    pub user: Option<String>,
}

/// Most entries the log retains; older entries fall off the end.
pub const MAX_LOG_ENTRIES: usize = 50;

/// A capped, newest-first activity log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an activity now, evicting the oldest entry past the cap.
    pub fn record(&mut self, kind: ActivityKind, description: impl Into<String>, user: Option<&str>) {
        self.record_at(Utc::now(), kind, description, user);
    }

    /// Record an activity with an explicit timestamp.
    pub fn record_at(
        &mut self,
        timestamp: DateTime<Utc>,
        kind: ActivityKind,
        description: impl Into<String>,
        user: Option<&str>,
    ) {
        self.entries.insert(
            0,
            ActivityEntry {
                timestamp,
                kind,
                description: description.into(),
                user: user.map(str::to_string),
            },
        );
        self.entries.truncate(MAX_LOG_ENTRIES);
    }

    /// Load a log from a JSON file; a missing file yields an empty log.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, crate::error::HerdError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist the log as JSON.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), crate::error::HerdError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Entries newest first.
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_newest_first() {
        let mut log = ActivityLog::new();
        log.record(ActivityKind::Batch, "created batch b1", Some("admin"));
        log.record(ActivityKind::Mortality, "logged 2 losses", Some("admin"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].description, "logged 2 losses");
        assert_eq!(log.entries()[1].description, "created batch b1");
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut log = ActivityLog::new();
        for i in 0..60 {
            log.record(ActivityKind::Generic, format!("event {i}"), None);
        }
        assert_eq!(log.len(), MAX_LOG_ENTRIES);
        // Newest survives, earliest entries are gone.
        assert_eq!(log.entries()[0].description, "event 59");
        assert!(log
            .entries()
            .iter()
            .all(|e| e.description != "event 0"));
    }

    #[test]
    fn test_user_attribution_optional() {
        let mut log = ActivityLog::new();
        log.record(ActivityKind::Feed, "distributed 900kg", None);
        assert!(log.entries()[0].user.is_none());
    }

    #[test]
    fn test_empty_log() {
        let log = ActivityLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_load_missing_file_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = ActivityLog::load(dir.path().join("absent.json")).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity.json");
        let mut log = ActivityLog::new();
        log.record(ActivityKind::Mortality, "logged 2 losses", Some("admin"));
        log.save(&path).unwrap();

        let back = ActivityLog::load(&path).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.entries()[0].description, "logged 2 losses");
        assert_eq!(back.entries()[0].user.as_deref(), Some("admin"));
    }

    #[test]
    fn test_log_json_roundtrip() {
        let mut log = ActivityLog::new();
        log.record(ActivityKind::Shipment, "shipped 80 head", Some("admin"));
        let json = serde_json::to_string(&log).unwrap();
        let back: ActivityLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.entries()[0].kind, ActivityKind::Shipment);
    }
}
