//! Settings Repository (Singleton)

use super::{BaseRepository, RepoError, RepoResult};
use shared::models::RestaurantSettings;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Fixed record id for the single settings row
const SINGLETON: &str = "settings:main";

#[derive(Clone)]
pub struct SettingsRepository {
    base: BaseRepository,
}

impl SettingsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Read the settings row, seeding defaults on first access
    pub async fn get_or_create(&self) -> RepoResult<RestaurantSettings> {
        if let Some(settings) = self.get().await? {
            return Ok(settings.normalized());
        }

        let defaults = RestaurantSettings::default();
        self.update(defaults.clone()).await?;
        tracing::info!("Seeded default restaurant settings");
        Ok(defaults)
    }

    pub async fn get(&self) -> RepoResult<Option<RestaurantSettings>> {
        let rows: Vec<RestaurantSettings> = self
            .base
            .db()
            .query(format!("SELECT * FROM {SINGLETON}"))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next())
    }

    /// Overwrite the singleton, normalizing the day list first
    pub async fn update(&self, settings: RestaurantSettings) -> RepoResult<RestaurantSettings> {
        let normalized = settings.normalized();
        self.base
            .db()
            .query(format!("UPSERT {SINGLETON} CONTENT $data"))
            .bind(("data", normalized))
            .await?;

        self.get()
            .await?
            .map(|s| s.normalized())
            .ok_or_else(|| RepoError::Database("Failed to persist settings".to_string()))
    }
}
