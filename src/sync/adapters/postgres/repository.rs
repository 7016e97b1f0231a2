//! `PostgreSQL` repository implementation for agent records.

use super::{
    models::{AgentRow, NewAgentRow},
    schema::agents,
};
use crate::agent::domain::{AgentName, ParameterSchema};
use crate::project::domain::ProjectId;
use crate::sync::{
    domain::{AgentRecord, AgentRecordId, Entrypoint, PersistedAgentData},
    ports::{AgentRecordRepository, AgentStoreError, AgentStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::upsert::excluded;
use std::collections::HashSet;

/// `PostgreSQL` connection pool type used by agent record adapters.
pub type AgentPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed agent record repository.
///
/// Expects an `agents` table with a unique index on `(project_id, name)`.
#[derive(Debug, Clone)]
pub struct PostgresAgentStore {
    pool: AgentPgPool,
}

impl PostgresAgentStore {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AgentPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AgentStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AgentStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AgentStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AgentStoreError::persistence)?
    }
}

impl From<diesel::result::Error> for AgentStoreError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl AgentRecordRepository for PostgresAgentStore {
    async fn upsert(&self, record: &AgentRecord) -> AgentStoreResult<AgentRecord> {
        let row = to_new_row(record)?;
        self.run_blocking(move |connection| {
            connection.transaction::<_, AgentStoreError, _>(|tx| {
                row_to_record(upsert_row(tx, &row)?)
            })
        })
        .await
    }

    async fn upsert_all(&self, records: &[AgentRecord]) -> AgentStoreResult<Vec<AgentRecord>> {
        let mut seen = HashSet::new();
        for record in records {
            if !seen.insert((record.project_id(), record.name())) {
                return Err(AgentStoreError::DuplicateInBatch {
                    project_id: record.project_id().clone(),
                    name: record.name().to_string(),
                });
            }
        }
        let rows = records
            .iter()
            .map(to_new_row)
            .collect::<AgentStoreResult<Vec<_>>>()?;

        self.run_blocking(move |connection| {
            connection.transaction::<_, AgentStoreError, _>(|tx| {
                store_rows(&rows, |row| upsert_row(tx, row))
            })
        })
        .await
    }

    async fn get_by_project(&self, project_id: &ProjectId) -> AgentStoreResult<Vec<AgentRecord>> {
        let project = project_id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = agents::table
                .filter(agents::project_id.eq(&project))
                .order(agents::name.asc())
                .select(AgentRow::as_select())
                .load::<AgentRow>(connection)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn get_by_name_and_project(
        &self,
        name: &str,
        project_id: &ProjectId,
    ) -> AgentStoreResult<Option<AgentRecord>> {
        let agent = name.trim().to_owned();
        let project = project_id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = agents::table
                .filter(agents::project_id.eq(&project))
                .filter(agents::name.eq(&agent))
                .select(AgentRow::as_select())
                .first::<AgentRow>(connection)
                .optional()?;
            row.map(row_to_record).transpose()
        })
        .await
    }

    async fn get_all(&self) -> AgentStoreResult<Vec<AgentRecord>> {
        self.run_blocking(move |connection| {
            let rows = agents::table
                .order((agents::project_id.asc(), agents::name.asc()))
                .select(AgentRow::as_select())
                .load::<AgentRow>(connection)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }
}

fn upsert_row(connection: &mut PgConnection, row: &NewAgentRow) -> QueryResult<AgentRow> {
    diesel::insert_into(agents::table)
        .values(row)
        .on_conflict((agents::project_id, agents::name))
        .do_update()
        .set((
            agents::description.eq(excluded(agents::description)),
            agents::entrypoint.eq(excluded(agents::entrypoint)),
            agents::tags.eq(excluded(agents::tags)),
            agents::parameters.eq(excluded(agents::parameters)),
            agents::updated_at.eq(excluded(agents::updated_at)),
        ))
        .returning(AgentRow::as_returning())
        .get_result(connection)
}

/// Writes each row and converts what the database returns.
///
/// Runs inside the batch transaction; any write or conversion error aborts
/// the remaining rows and rolls the batch back.
fn store_rows<F>(rows: &[NewAgentRow], mut write: F) -> AgentStoreResult<Vec<AgentRecord>>
where
    F: FnMut(&NewAgentRow) -> QueryResult<AgentRow>,
{
    rows.iter()
        .map(|row| row_to_record(write(row)?))
        .collect()
}

fn to_new_row(record: &AgentRecord) -> AgentStoreResult<NewAgentRow> {
    let tags = serde_json::to_value(record.tags()).map_err(AgentStoreError::persistence)?;
    let parameters =
        serde_json::to_value(record.parameters()).map_err(AgentStoreError::persistence)?;

    Ok(NewAgentRow {
        id: record.id().into_inner(),
        project_id: record.project_id().as_str().to_owned(),
        name: record.name().as_str().to_owned(),
        description: record.description().to_owned(),
        entrypoint: record.entrypoint().as_str().to_owned(),
        tags,
        parameters,
        created_at: record.created_at(),
        updated_at: record.updated_at(),
    })
}

fn row_to_record(row: AgentRow) -> AgentStoreResult<AgentRecord> {
    let AgentRow {
        id,
        project_id,
        name,
        description,
        entrypoint,
        tags,
        parameters,
        created_at,
        updated_at,
    } = row;

    let data = PersistedAgentData {
        id: AgentRecordId::from_uuid(id),
        project_id: ProjectId::parse(project_id)
            .map_err(AgentStoreError::invalid_persisted_data)?,
        name: AgentName::new(name).map_err(AgentStoreError::invalid_persisted_data)?,
        description,
        entrypoint: Entrypoint::parse(entrypoint)
            .map_err(AgentStoreError::invalid_persisted_data)?,
        tags: serde_json::from_value::<Vec<String>>(tags)
            .map_err(AgentStoreError::invalid_persisted_data)?,
        parameters: serde_json::from_value::<ParameterSchema>(parameters)
            .map_err(AgentStoreError::invalid_persisted_data)?,
        created_at,
        updated_at,
    };
    Ok(AgentRecord::from_persisted(data))
}
