use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, warn};

use super::{HandlerConfig, NotificationRequest, NotificationService};

const SCHEDULE_FILE: &str = "schedule.json";

/// Record of the single outstanding schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledNotification {
    pub request: NotificationRequest,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub scheduled_at: DateTime<Utc>,
    pub handler: HandlerConfig,
}

/// [NotificationService] backend that records the outstanding schedule as a
/// json document in the application directory. Actual delivery is the
/// platform's business; this keeps exactly the state the platform scheduler
/// would: one repeating schedule, replaced on write, gone on cancel.
pub struct FileScheduler {
    path: PathBuf,
    handler: HandlerConfig,
}

impl FileScheduler {
    pub fn new(state_dir: &Path, handler: HandlerConfig) -> Self {
        Self {
            path: state_dir.join(SCHEDULE_FILE),
            handler,
        }
    }

    /// The currently outstanding schedule, if any.
    pub async fn current(&self) -> Result<Option<ScheduledNotification>> {
        match fs::read_to_string(&self.path).await {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(v) => Ok(Some(v)),
                Err(e) => {
                    warn!("Schedule file {:?} holds illegal json: {e}", self.path);
                    Ok(None)
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read schedule file {:?}", self.path))
            }
        }
    }
}

#[async_trait]
impl NotificationService for FileScheduler {
    async fn request_permission(&self) -> Result<bool> {
        // Nothing to ask the user for here, the prompt belongs to the
        // platform delivery layer.
        Ok(true)
    }

    async fn schedule_repeating(&self, request: NotificationRequest) -> Result<()> {
        let record = ScheduledNotification {
            request,
            scheduled_at: Utc::now(),
            handler: self.handler,
        };
        let data = serde_json::to_string(&record)?;
        fs::write(&self.path, data)
            .await
            .with_context(|| format!("Failed to write schedule file {:?}", self.path))?;
        debug!("Recorded schedule {:?}", record.request.body);
        Ok(())
    }

    async fn cancel_all(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!("Cancelled outstanding schedule");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove schedule file {:?}", self.path))
            }
        }
    }
}
