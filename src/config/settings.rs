use serde::Deserialize;

/// Top-level configuration settings.
///
/// The reducer itself reads none of this; it configures the session driver and logging.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub level: String,
}

/// Configuration for the single-writer session task.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Frames that may wait in the task's inbox before `submit` starts waiting.
    pub inbox_capacity: usize,
}

/// Partial configuration settings loaded from files or environment.
///
/// Missing values are filled from `Settings::default()`.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub logging: Option<PartialLoggingSettings>,
    pub session: Option<PartialSessionSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialLoggingSettings {
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PartialSessionSettings {
    pub inbox_capacity: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingSettings {
                level: "info".to_string(),
            },
            session: SessionSettings::default(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            inbox_capacity: 1024,
        }
    }
}

impl PartialSettings {
    /// Overlay whatever was provided onto `default`.
    pub fn merge(self, default: Settings) -> Settings {
        Settings {
            logging: LoggingSettings {
                level: self
                    .logging
                    .and_then(|l| l.level)
                    .unwrap_or(default.logging.level),
            },
            session: SessionSettings {
                inbox_capacity: self
                    .session
                    .and_then(|s| s.inbox_capacity)
                    .unwrap_or(default.session.inbox_capacity)
                    .max(1),
            },
        }
    }
}
