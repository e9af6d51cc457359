//! Scheduling of the repeating reminder notification.
//! [GenericNotifier] is the main artifact of this module; it fronts the
//! platform backend and turns every operation into a safe no-op on platforms
//! without notification support.

pub mod file_scheduler;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use self::file_scheduler::FileScheduler;

/// Interval of the repeating reminder.
pub const REMINDER_INTERVAL: Duration = Duration::from_secs(3600);

/// How a delivered notification should present itself. Handed over explicitly
/// at startup instead of being installed as ambient process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerConfig {
    pub show_alert: bool,
    pub play_sound: bool,
    pub set_badge: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            show_alert: true,
            play_sound: false,
            set_badge: false,
        }
    }
}

/// Startup configuration for [GenericNotifier].
#[derive(Debug, Clone, Copy)]
pub struct NotifierConfig {
    pub supports_notifications: bool,
    pub handler: HandlerConfig,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            supports_notifications: true,
            handler: HandlerConfig::default(),
        }
    }
}

/// A repeating notification to keep outstanding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub interval: Duration,
    pub repeats: bool,
}

impl NotificationRequest {
    /// The hourly word reminder.
    pub fn hourly_word(word: &str) -> Self {
        Self {
            title: "Word of the Day".to_owned(),
            body: format!("Today's word: {word}"),
            interval: REMINDER_INTERVAL,
            repeats: true,
        }
    }
}

/// Contract for the platform notification scheduler. At most one schedule is
/// ever outstanding: scheduling replaces whatever was there before.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Asks for permission to deliver notifications. False means denied.
    async fn request_permission(&self) -> Result<bool>;

    /// Replaces any previously scheduled notification with `request`.
    async fn schedule_repeating(&self, request: NotificationRequest) -> Result<()>;

    /// Removes every scheduled notification.
    async fn cancel_all(&self) -> Result<()>;
}

/// Serves as the cross-platform [NotificationService] implementation. When
/// notifications are unsupported, permission reads as denied and
/// schedule/cancel do nothing.
pub struct GenericNotifier {
    inner: Option<Box<dyn NotificationService>>,
}

impl GenericNotifier {
    pub fn new(state_dir: &Path, config: NotifierConfig) -> Self {
        let inner: Option<Box<dyn NotificationService>> = if config.supports_notifications {
            Some(Box::new(FileScheduler::new(state_dir, config.handler)))
        } else {
            None
        };
        Self { inner }
    }
}

#[async_trait]
impl NotificationService for GenericNotifier {
    async fn request_permission(&self) -> Result<bool> {
        match &self.inner {
            Some(inner) => inner.request_permission().await,
            None => Ok(false),
        }
    }

    async fn schedule_repeating(&self, request: NotificationRequest) -> Result<()> {
        match &self.inner {
            Some(inner) => inner.schedule_repeating(request).await,
            None => Ok(()),
        }
    }

    async fn cancel_all(&self) -> Result<()> {
        match &self.inner {
            Some(inner) => inner.cancel_all().await,
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::tempdir;

    use super::*;

    fn unsupported_config() -> NotifierConfig {
        NotifierConfig {
            supports_notifications: false,
            handler: HandlerConfig::default(),
        }
    }

    #[test]
    fn hourly_word_request_carries_the_word() {
        let request = NotificationRequest::hourly_word("ephemeral");
        assert_eq!(request.title, "Word of the Day");
        assert_eq!(request.body, "Today's word: ephemeral");
        assert_eq!(request.interval, REMINDER_INTERVAL);
        assert!(request.repeats);
    }

    #[tokio::test]
    async fn unsupported_notifier_denies_permission() -> Result<()> {
        let dir = tempdir()?;
        let notifier = GenericNotifier::new(dir.path(), unsupported_config());

        assert!(!notifier.request_permission().await?);
        Ok(())
    }

    #[tokio::test]
    async fn unsupported_notifier_noops_without_touching_state() -> Result<()> {
        let dir = tempdir()?;
        let notifier = GenericNotifier::new(dir.path(), unsupported_config());

        notifier
            .schedule_repeating(NotificationRequest::hourly_word("sonder"))
            .await?;
        notifier.cancel_all().await?;

        let scheduler = FileScheduler::new(dir.path(), HandlerConfig::default());
        assert_eq!(scheduler.current().await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn supported_notifier_grants_permission() -> Result<()> {
        let dir = tempdir()?;
        let notifier = GenericNotifier::new(dir.path(), NotifierConfig::default());

        assert!(notifier.request_permission().await?);
        Ok(())
    }
}
