#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use uuid::Uuid;

use shortlink::api::handlers::health_handler;
use shortlink::api::routes;
use shortlink::application::services::RegistryService;
use shortlink::domain::entities::{NewShortLink, ShortLink, ShortLinkPatch};
use shortlink::domain::hit_event::HitEvent;
use shortlink::domain::repositories::ShortLinkRepository;
use shortlink::error::AppError;
use shortlink::state::AppState;

/// In-memory `ShortLinkRepository` standing in for PostgreSQL, with the same
/// newest-live-record and equality-filtered-mutation semantics.
pub struct InMemoryRepository {
    records: Mutex<Vec<ShortLink>>,
    next_id: AtomicI64,
    failing: AtomicBool,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            failing: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent operation fail, simulating a store outage.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn get(&self, id: i64) -> Option<ShortLink> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|record| record.id == id)
            .cloned()
    }

    pub fn all_with_name(&self, name: &str) -> Vec<ShortLink> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.name == name)
            .cloned()
            .collect()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(AppError::Persistence)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ShortLinkRepository for InMemoryRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        self.check()?;

        let link = ShortLink {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new_link.name,
            url: new_link.url,
            key: new_link.key,
            expiration_date: new_link.expiration_date,
            hits: 0,
            last_used: Utc::now(),
            created_at: Utc::now(),
        };

        self.records.lock().unwrap().push(link.clone());
        Ok(link)
    }

    async fn find_active_by_name(&self, name: &str) -> Result<Option<ShortLink>, AppError> {
        self.check()?;

        let now = Utc::now();
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.name == name && record.expiration_date >= now)
            .max_by_key(|record| record.id)
            .cloned())
    }

    async fn update_by_name_and_key(
        &self,
        name: &str,
        key: Uuid,
        patch: ShortLinkPatch,
    ) -> Result<bool, AppError> {
        self.check()?;

        let mut records = self.records.lock().unwrap();
        let mut matched = false;

        for record in records
            .iter_mut()
            .filter(|record| record.name == name && record.key == key)
        {
            if let Some(url) = &patch.url {
                record.url = url.clone();
            }
            if let Some(expiry) = patch.expiration_date {
                record.expiration_date = expiry;
            }
            matched = true;
        }

        Ok(matched)
    }

    async fn delete_by_name_and_key(&self, name: &str, key: Uuid) -> Result<bool, AppError> {
        self.check()?;

        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|record| !(record.name == name && record.key == key));

        Ok(records.len() < before)
    }

    async fn record_hit(&self, id: i64) -> Result<(), AppError> {
        self.check()?;

        if let Some(record) = self
            .records
            .lock()
            .unwrap()
            .iter_mut()
            .find(|record| record.id == id)
        {
            record.hits += 1;
            record.last_used = Utc::now();
        }

        Ok(())
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryRepository>, mpsc::Receiver<HitEvent>) {
    let repository = Arc::new(InMemoryRepository::new());
    let (hit_tx, hit_rx) = mpsc::channel(100);

    let registry = Arc::new(RegistryService::new(
        repository.clone() as Arc<dyn ShortLinkRepository>
    ));

    let state = AppState { registry, hit_tx };

    (state, repository, hit_rx)
}

/// Full application router minus the normalize-path wrapper, which
/// `TestServer` does not need.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .nest("/api/v1", routes::routes())
        .with_state(state)
}

pub async fn seed_link(
    repository: &InMemoryRepository,
    name: &str,
    url: &str,
    expiration_date: DateTime<Utc>,
) -> ShortLink {
    repository
        .insert(NewShortLink {
            name: name.to_string(),
            url: url.to_string(),
            key: Uuid::new_v4(),
            expiration_date,
        })
        .await
        .unwrap()
}
