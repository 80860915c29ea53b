//! PostgreSQL Student Repository Implementation
//!
//! This module implements `CrudRepository<StudentEntity, i64>` on top of a
//! sqlx connection pool. It owns the `students` table layout.

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{debug, error, info, instrument};

use super::{
    entity::StudentEntity,
    repository::{CrudRepository, RepositoryError},
};

/// Name of the table holding student rows
pub const STUDENTS_TABLE: &str = "students";

const SELECT_COLUMNS: &str = "id, firstname, lastname, age, address";

/// PostgreSQL-backed student repository
///
/// ## Upsert semantics
///
/// `save` inserts a new row when the record has no id and lets the database
/// assign one (`BIGSERIAL`). A record that carries an id is written with
/// `INSERT ... ON CONFLICT (id) DO UPDATE`, so it is updated in place when the
/// row exists and inserted otherwise.
///
/// ## Error Handling
///
/// All sqlx errors are returned as `RepositoryError::Database`; the caller
/// decides how to surface them.
#[derive(Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    /// Create a repository over an existing pool
    ///
    /// The `students` table must already exist; see [`Self::ensure_schema`].
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing PgStudentRepository");
        Self { pool }
    }

    /// Open a connection pool and make sure the `students` table exists
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use student_postgres::PgStudentRepository;
    ///
    /// # async fn example() -> Result<(), student_postgres::RepositoryError> {
    /// let repo = PgStudentRepository::connect("postgres://localhost/students", 5).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|err| {
                error!(error = ?err, "Failed to connect to PostgreSQL");
                RepositoryError::connection(err.to_string())
            })?;

        let repository = Self::new(pool);
        repository.ensure_schema().await?;
        Ok(repository)
    }

    /// Create the `students` table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {STUDENTS_TABLE} (
                id BIGSERIAL PRIMARY KEY,
                firstname TEXT NOT NULL,
                lastname TEXT NOT NULL,
                age INTEGER NOT NULL,
                address TEXT NOT NULL
            )
            "#
        );
        sqlx::query(&ddl).execute(&self.pool).await?;
        // Rows written with explicit ids must not collide with later inserts.
        let sync_sequence = format!(
            "SELECT setval(pg_get_serial_sequence('{STUDENTS_TABLE}', 'id'), \
             COALESCE((SELECT MAX(id) FROM {STUDENTS_TABLE}), 0) + 1, false)"
        );
        sqlx::query(&sync_sequence).execute(&self.pool).await?;
        debug!(table = STUDENTS_TABLE, "Ensured students table");
        Ok(())
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl CrudRepository<StudentEntity, i64> for PgStudentRepository {
    #[instrument(skip(self), fields(student_id = id))]
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<StudentEntity>, RepositoryError>> + Send
    {
        let pool = self.pool.clone();

        async move {
            debug!(student_id = id, "Loading student row");

            let query = format!("SELECT {SELECT_COLUMNS} FROM {STUDENTS_TABLE} WHERE id = $1");
            match sqlx::query_as::<_, StudentEntity>(&query)
                .bind(id)
                .fetch_optional(&pool)
                .await
            {
                Ok(row) => {
                    debug!(student_id = id, found = row.is_some(), "Loaded student row");
                    Ok(row)
                }
                Err(err) => {
                    error!(student_id = id, error = ?err, "Failed to load student row");
                    Err(RepositoryError::Database(err))
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn find_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<StudentEntity>, RepositoryError>> + Send {
        let pool = self.pool.clone();

        async move {
            let query = format!("SELECT {SELECT_COLUMNS} FROM {STUDENTS_TABLE} ORDER BY id");
            match sqlx::query_as::<_, StudentEntity>(&query)
                .fetch_all(&pool)
                .await
            {
                Ok(rows) => {
                    debug!(count = rows.len(), "Loaded student rows");
                    Ok(rows)
                }
                Err(err) => {
                    error!(error = ?err, "Failed to load student rows");
                    Err(RepositoryError::Database(err))
                }
            }
        }
    }

    #[instrument(skip(self, entity), fields(student_id = ?entity.id))]
    fn save(
        &self,
        entity: StudentEntity,
    ) -> impl std::future::Future<Output = Result<StudentEntity, RepositoryError>> + Send {
        let pool = self.pool.clone();

        async move {
            let result = match entity.id {
                None => {
                    let query = format!(
                        "INSERT INTO {STUDENTS_TABLE} (firstname, lastname, age, address) \
                         VALUES ($1, $2, $3, $4) RETURNING {SELECT_COLUMNS}"
                    );
                    sqlx::query_as::<_, StudentEntity>(&query)
                        .bind(&entity.firstname)
                        .bind(&entity.lastname)
                        .bind(entity.age)
                        .bind(&entity.address)
                        .fetch_one(&pool)
                        .await
                }
                Some(id) => {
                    let query = format!(
                        "INSERT INTO {STUDENTS_TABLE} (id, firstname, lastname, age, address) \
                         VALUES ($1, $2, $3, $4, $5) \
                         ON CONFLICT (id) DO UPDATE SET \
                         firstname = EXCLUDED.firstname, \
                         lastname = EXCLUDED.lastname, \
                         age = EXCLUDED.age, \
                         address = EXCLUDED.address \
                         RETURNING {SELECT_COLUMNS}"
                    );
                    sqlx::query_as::<_, StudentEntity>(&query)
                        .bind(id)
                        .bind(&entity.firstname)
                        .bind(&entity.lastname)
                        .bind(entity.age)
                        .bind(&entity.address)
                        .fetch_one(&pool)
                        .await
                }
            };

            match result {
                Ok(saved) => {
                    info!(student_id = ?saved.id, "Saved student row");
                    Ok(saved)
                }
                Err(err) => {
                    error!(error = ?err, "Failed to save student row");
                    Err(RepositoryError::Database(err))
                }
            }
        }
    }

    #[instrument(skip(self), fields(student_id = id))]
    fn delete_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send {
        let pool = self.pool.clone();

        async move {
            let query = format!("DELETE FROM {STUDENTS_TABLE} WHERE id = $1");
            match sqlx::query(&query).bind(id).execute(&pool).await {
                Ok(done) => {
                    info!(
                        student_id = id,
                        rows_affected = done.rows_affected(),
                        "Deleted student row"
                    );
                    Ok(())
                }
                Err(err) => {
                    error!(student_id = id, error = ?err, "Failed to delete student row");
                    Err(RepositoryError::Database(err))
                }
            }
        }
    }
}
