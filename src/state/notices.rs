// User-facing notices shown in the status bar.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Bounded log of recent notices.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: VecDeque<Notice>,
    errors: usize,
}

impl NoticeLog {
    const CAPACITY: usize = 50;

    pub fn push(&mut self, notice: Notice) {
        if notice.level == NoticeLevel::Error {
            self.errors += 1;
        }
        if self.notices.len() == Self::CAPACITY {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }

    /// Errors recorded this session, including evicted ones.
    pub fn error_count(&self) -> usize {
        self.errors
    }
}

/// Format a timestamp as relative time (e.g., "2m ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(*dt);

    if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_and_error_count() {
        let mut log = NoticeLog::default();
        assert!(log.latest().is_none());

        log.push(Notice::info("Opened resume"));
        log.push(Notice::error("Could not open mail"));
        log.push(Notice::info("Opened GitHub"));

        assert_eq!(log.latest().unwrap().message, "Opened GitHub");
        assert_eq!(log.error_count(), 1);
    }

    #[test]
    fn test_capacity_is_bounded() {
        let mut log = NoticeLog::default();
        for i in 0..(NoticeLog::CAPACITY + 10) {
            log.push(Notice::error(format!("failure {}", i)));
        }
        assert_eq!(log.notices.len(), NoticeLog::CAPACITY);
        assert_eq!(log.error_count(), NoticeLog::CAPACITY + 10);
    }

    #[test]
    fn test_relative_time() {
        let now = Utc::now();
        assert_eq!(format_relative_time(&now), "just now");
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::minutes(5))),
            "5m ago"
        );
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::hours(3))),
            "3h ago"
        );
    }
}
