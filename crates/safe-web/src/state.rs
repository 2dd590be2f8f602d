//! Shared, immutable request-handling state.

use std::sync::Arc;

use anyhow::Context;
use chrono::{FixedOffset, Offset, Utc};
use safe_config::{BoardConfig, SafeConfig};
use safe_core::auth::AdminGuard;
use safe_core::i18n::{EVENT, Lang};
use safe_db::service::BoardService;

/// Presentation settings resolved once from configuration.
#[derive(Debug, Clone)]
pub struct BoardSettings {
    pub default_lang: Lang,
    pub event: String,
    pub utc_offset: FixedOffset,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            default_lang: Lang::Cht,
            event: EVENT.to_string(),
            utc_offset: utc(),
        }
    }
}

impl BoardSettings {
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self {
            default_lang: config.default_lang().unwrap_or(Lang::Cht),
            event: config.event.clone(),
            utc_offset: FixedOffset::east_opt(config.utc_offset_minutes.saturating_mul(60)).unwrap_or_else(utc),
        }
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}

/// Everything a handler needs, built once at startup and shared via `Arc`.
pub struct AppState {
    pub service: BoardService,
    pub guard: AdminGuard,
    pub board: BoardSettings,
}

impl AppState {
    #[must_use]
    pub fn new(service: BoardService, guard: AdminGuard, board: BoardSettings) -> Arc<Self> {
        Arc::new(Self {
            service,
            guard,
            board,
        })
    }

    /// Open the store and resolve the admin secret from configuration.
    ///
    /// # Errors
    ///
    /// Fails if the admin token file cannot be read or the database cannot be
    /// opened.
    pub async fn init(config: &SafeConfig) -> anyhow::Result<Arc<Self>> {
        let secret = config
            .admin
            .resolve_token()
            .context("failed to resolve admin token")?;
        let guard = AdminGuard::new(secret);
        if !guard.is_configured() {
            tracing::warn!("no admin token configured; deletion is disabled");
        }

        let service = BoardService::new_local(&config.database.path, config.board.page_size)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        Ok(Self::new(
            service,
            guard,
            BoardSettings::from_config(&config.board),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_follow_config() {
        let config = BoardConfig {
            default_lang: "en".into(),
            event: "Drill".into(),
            utc_offset_minutes: 480,
            ..BoardConfig::default()
        };
        let settings = BoardSettings::from_config(&config);
        assert_eq!(settings.default_lang, Lang::En);
        assert_eq!(settings.event, "Drill");
        assert_eq!(settings.utc_offset.local_minus_utc(), 8 * 3600);
    }
}
