//! In-memory implementation of PromptRepository
//!
//! Backs the service and route tests without a Postgres instance.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use promptbase::{
    DomainError, NewPrompt, Prompt, PromptFilter, PromptRepository, PromptUpdate, SortOrder,
};

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: Vec<Prompt>,
}

/// Vec-backed repository with SERIAL-style id assignment
#[derive(Default)]
pub struct InMemoryPromptRepository {
    table: Mutex<Table>,
}

impl InMemoryPromptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_row<F>(&self, id: i32, mutate: F) -> Result<Option<Prompt>, DomainError>
    where
        F: FnOnce(&mut Prompt),
    {
        let mut table = self.lock()?;
        let Some(row) = table.rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        mutate(row);
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Table>, DomainError> {
        self.table
            .lock()
            .map_err(|e| DomainError::Repository(e.to_string()))
    }
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn initialize(&self) -> Result<(), DomainError> {
        Ok(())
    }

    async fn insert(&self, prompt: &NewPrompt) -> Result<Prompt, DomainError> {
        let mut table = self.lock()?;
        table.next_id += 1;
        let now = Utc::now();
        let row = Prompt {
            id: table.next_id,
            title: prompt.title.clone(),
            body: prompt.body.clone(),
            is_favorite: prompt.is_favorite,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Prompt>, DomainError> {
        let table = self.lock()?;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, filter: &PromptFilter) -> Result<Vec<Prompt>, DomainError> {
        let table = self.lock()?;
        let mut rows: Vec<Prompt> = table
            .rows
            .iter()
            .filter(|p| {
                filter
                    .search
                    .as_ref()
                    .map_or(true, |term| term.matches(&p.title, &p.body))
            })
            .cloned()
            .collect();

        match filter.sort {
            SortOrder::MostRecent => {
                rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)))
            }
            SortOrder::Oldest => rows.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id))),
            SortOrder::Favorites => rows.sort_by(|a, b| {
                (b.is_favorite, b.created_at, b.id).cmp(&(a.is_favorite, a.created_at, a.id))
            }),
        }

        Ok(rows)
    }

    async fn update(&self, id: i32, update: &PromptUpdate) -> Result<Option<Prompt>, DomainError> {
        self.with_row(id, |row| {
            row.title = update.title.clone();
            row.body = update.body.clone();
        })
    }

    async fn toggle_favorite(&self, id: i32) -> Result<Option<Prompt>, DomainError> {
        self.with_row(id, |row| row.is_favorite = !row.is_favorite)
    }

    async fn set_favorite(
        &self,
        id: i32,
        is_favorite: bool,
    ) -> Result<Option<Prompt>, DomainError> {
        self.with_row(id, |row| row.is_favorite = is_favorite)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let mut table = self.lock()?;
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);
        Ok(table.rows.len() < before)
    }
}
