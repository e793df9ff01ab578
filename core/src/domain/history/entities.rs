use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryRecord {
    pub id: Uuid,
    /// Persona identifier the scan was analyzed for.
    pub profile: String,
    pub match_score: u8,
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn new(profile: String, match_score: u8) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            profile,
            match_score,
            timestamp: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistorySnapshot {
    /// Most recent scans, oldest first.
    pub recent_scans: Vec<HistoryRecord>,
    pub total_scans: usize,
}
