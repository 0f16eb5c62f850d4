//! PostgreSQL implementation of PromptRepository

use async_trait::async_trait;
use sqlx::{migrate::MigrateError, postgres::PgPoolOptions, PgPool, Postgres, QueryBuilder};

use promptbase::{
    DomainError, NewPrompt, Prompt, PromptFilter, PromptRepository, PromptUpdate, SortOrder,
};

const PROMPT_COLUMNS: &str = "id, title, prompt, is_favorite, created_at, updated_at";

/// PostgreSQL implementation of PromptRepository
pub struct PgPromptRepository {
    pool: PgPool,
}

impl PgPromptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`
    pub async fn connect(database_url: &str) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| DomainError::Connection(e.to_string()))?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct PromptRow {
    id: i32,
    title: String,
    prompt: String,
    is_favorite: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<PromptRow> for Prompt {
    fn from(row: PromptRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            body: row.prompt,
            is_favorite: row.is_favorite,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn repository_error(e: sqlx::Error) -> DomainError {
    if is_connection_error(&e) {
        DomainError::Connection(e.to_string())
    } else {
        DomainError::Repository(e.to_string())
    }
}

fn is_connection_error(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed
    )
}

fn schema_error(e: sqlx::Error) -> DomainError {
    if is_connection_error(&e) {
        DomainError::Connection(e.to_string())
    } else {
        DomainError::Schema(e.to_string())
    }
}

/// Timestamps decode as `DateTime<Utc>`, so a pre-existing table with plain
/// `TIMESTAMP` columns is rejected up front rather than on every read.
fn check_column_types(columns: &[(String, String)]) -> Result<(), DomainError> {
    for name in ["created_at", "updated_at"] {
        match columns.iter().find(|(column, _)| column == name) {
            Some((_, data_type)) if data_type == "timestamp with time zone" => {}
            Some((_, data_type)) => {
                return Err(DomainError::Schema(format!(
                    "prompts.{} is `{}`, expected `timestamp with time zone`",
                    name, data_type
                )))
            }
            None => {
                return Err(DomainError::Schema(format!(
                    "prompts.{} column is missing",
                    name
                )))
            }
        }
    }
    Ok(())
}

fn order_by_clause(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::MostRecent => " ORDER BY created_at DESC, id DESC",
        SortOrder::Oldest => " ORDER BY created_at ASC, id ASC",
        SortOrder::Favorites => " ORDER BY is_favorite DESC, created_at DESC, id DESC",
    }
}

/// Build the listing query. The search term only ever reaches the
/// statement as a bound parameter.
fn list_query(filter: &PromptFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {} FROM prompts", PROMPT_COLUMNS));

    if let Some(term) = &filter.search {
        let pattern = term.like_pattern();
        query
            .push(" WHERE title LIKE ")
            .push_bind(pattern.clone())
            .push(" OR prompt LIKE ")
            .push_bind(pattern);
    }

    query.push(order_by_clause(filter.sort));
    query
}

#[async_trait]
impl PromptRepository for PgPromptRepository {
    async fn initialize(&self) -> Result<(), DomainError> {
        sqlx::migrate!()
            .run(&self.pool)
            .await
            .map_err(|e| match e {
                MigrateError::Execute(inner) if is_connection_error(&inner) => {
                    DomainError::Connection(inner.to_string())
                }
                other => DomainError::Schema(other.to_string()),
            })?;

        let columns: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT column_name::text, data_type::text
            FROM information_schema.columns
            WHERE table_schema = current_schema() AND table_name = 'prompts'
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(schema_error)?;

        check_column_types(&columns)
    }

    async fn insert(&self, prompt: &NewPrompt) -> Result<Prompt, DomainError> {
        let row = sqlx::query_as::<_, PromptRow>(&format!(
            r#"
            INSERT INTO prompts (title, prompt, is_favorite)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            PROMPT_COLUMNS
        ))
        .bind(&prompt.title)
        .bind(&prompt.body)
        .bind(prompt.is_favorite)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Prompt>, DomainError> {
        let row = sqlx::query_as::<_, PromptRow>(&format!(
            "SELECT {} FROM prompts WHERE id = $1",
            PROMPT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, filter: &PromptFilter) -> Result<Vec<Prompt>, DomainError> {
        let mut query = list_query(filter);
        let rows = query
            .build_query_as::<PromptRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, update: &PromptUpdate) -> Result<Option<Prompt>, DomainError> {
        let row = sqlx::query_as::<_, PromptRow>(&format!(
            r#"
            UPDATE prompts
            SET title = $2, prompt = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PROMPT_COLUMNS
        ))
        .bind(id)
        .bind(&update.title)
        .bind(&update.body)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn toggle_favorite(&self, id: i32) -> Result<Option<Prompt>, DomainError> {
        // Flip inside the statement so concurrent toggles never act on a stale value
        let row = sqlx::query_as::<_, PromptRow>(&format!(
            r#"
            UPDATE prompts
            SET is_favorite = NOT is_favorite, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PROMPT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn set_favorite(
        &self,
        id: i32,
        is_favorite: bool,
    ) -> Result<Option<Prompt>, DomainError> {
        let row = sqlx::query_as::<_, PromptRow>(&format!(
            r#"
            UPDATE prompts
            SET is_favorite = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PROMPT_COLUMNS
        ))
        .bind(id)
        .bind(is_favorite)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_without_search() {
        let query = list_query(&PromptFilter::new(None, SortOrder::MostRecent));
        assert_eq!(
            query.sql(),
            "SELECT id, title, prompt, is_favorite, created_at, updated_at FROM prompts \
             ORDER BY created_at DESC, id DESC"
        );
    }

    #[test]
    fn test_list_query_binds_search_term() {
        let query = list_query(&PromptFilter::new(
            Some("x' OR '1'='1"),
            SortOrder::Oldest,
        ));
        let sql = query.sql();

        assert!(sql.contains("WHERE title LIKE $1 OR prompt LIKE $2"));
        assert!(sql.ends_with("ORDER BY created_at ASC, id ASC"));
        assert!(!sql.contains("x'"));
    }

    #[test]
    fn test_empty_search_is_ignored() {
        let query = list_query(&PromptFilter::new(Some(""), SortOrder::Favorites));
        let sql = query.sql();

        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY is_favorite DESC, created_at DESC, id DESC"));
    }

    #[test]
    fn test_connection_errors_are_classified() {
        assert!(matches!(
            repository_error(sqlx::Error::PoolTimedOut),
            DomainError::Connection(_)
        ));
        assert!(matches!(
            repository_error(sqlx::Error::RowNotFound),
            DomainError::Repository(_)
        ));
    }

    fn columns(created: &str, updated: &str) -> Vec<(String, String)> {
        vec![
            ("id".to_string(), "integer".to_string()),
            ("created_at".to_string(), created.to_string()),
            ("updated_at".to_string(), updated.to_string()),
        ]
    }

    #[test]
    fn test_timestamptz_columns_accepted() {
        let tz = "timestamp with time zone";
        assert!(check_column_types(&columns(tz, tz)).is_ok());
    }

    #[test]
    fn test_plain_timestamp_columns_rejected() {
        let err = check_column_types(&columns(
            "timestamp without time zone",
            "timestamp with time zone",
        ))
        .unwrap_err();

        match err {
            DomainError::Schema(msg) => {
                assert!(msg.contains("prompts.created_at"));
                assert!(msg.contains("timestamp without time zone"));
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_timestamp_column_rejected() {
        let only_created = vec![(
            "created_at".to_string(),
            "timestamp with time zone".to_string(),
        )];
        assert!(matches!(
            check_column_types(&only_created),
            Err(DomainError::Schema(msg)) if msg.contains("updated_at")
        ));
    }
}
