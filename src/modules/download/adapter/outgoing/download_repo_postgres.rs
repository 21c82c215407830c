use crate::modules::download::application::ports::outgoing::{
    DownloadRepository, DownloadRepositoryError, NewDownloadRequest,
};
use crate::modules::download::domain::entities::DownloadRequest;
use crate::shared::db::{is_schema_violation, DatabaseManager};
use crate::shared::validation::FieldError;
use async_trait::async_trait;
use sea_orm::{DbErr, EntityTrait};
use std::sync::Arc;

use super::sea_orm_entity::{
    ActiveModel as DownloadActiveModel, Entity as DownloadEntity, Model as DownloadModel,
};

#[derive(Clone)]
pub struct DownloadRepoPostgres {
    db: Arc<DatabaseManager>,
}

impl DownloadRepoPostgres {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DownloadRepository for DownloadRepoPostgres {
    async fn insert(
        &self,
        data: NewDownloadRequest,
    ) -> Result<DownloadRequest, DownloadRepositoryError> {
        let conn = self.db.conn().await.ok_or_else(|| {
            DownloadRepositoryError::DatabaseError("database is not connected".to_string())
        })?;

        let model = DownloadModel::from_new_request(&data);
        let active_model: DownloadActiveModel = model.into();

        let inserted: DownloadModel = DownloadEntity::insert(active_model)
            .exec_with_returning(&*conn)
            .await
            .map_err(classify_insert_error)?;

        Ok(inserted.to_domain())
    }
}

fn classify_insert_error(err: DbErr) -> DownloadRepositoryError {
    let message = err.to_string();
    if is_schema_violation(&message) {
        // The only varchar that can overflow here is `purpose`; input
        // validation already keeps the email within bounds.
        DownloadRepositoryError::SchemaRejected(vec![FieldError::new("purpose", message)])
    } else {
        DownloadRepositoryError::DatabaseError(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn new_request() -> NewDownloadRequest {
        NewDownloadRequest {
            email: "recruiter@example.com".to_string(),
            purpose: "Hiring for a backend role".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_returns_the_persisted_record() {
        let model = DownloadModel {
            id: Uuid::new_v4(),
            email: "recruiter@example.com".to_string(),
            purpose: "Hiring for a backend role".to_string(),
            timestamp: Utc::now().fixed_offset(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let manager = DatabaseManager::with_connection("postgres://localhost/test", db);
        let repo = DownloadRepoPostgres::new(manager);

        let created = repo.insert(new_request()).await.unwrap();
        assert_eq!(created.id, model.id);
        assert_eq!(created.email, "recruiter@example.com");
    }

    #[tokio::test]
    async fn insert_without_a_connection_is_a_database_error() {
        let manager = DatabaseManager::new("postgres://localhost/test");
        let repo = DownloadRepoPostgres::new(manager);

        let result = repo.insert(new_request()).await;
        match result {
            Err(DownloadRepositoryError::DatabaseError(msg)) => {
                assert_eq!(msg, "database is not connected");
            }
            _ => panic!("Expected DatabaseError"),
        }
    }

    #[tokio::test]
    async fn an_overlong_purpose_is_a_schema_rejection() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "value too long for type character varying(500)".to_string(),
            )])
            .into_connection();

        let manager = DatabaseManager::with_connection("postgres://localhost/test", db);
        let repo = DownloadRepoPostgres::new(manager);

        let result = repo.insert(new_request()).await;
        match result {
            Err(DownloadRepositoryError::SchemaRejected(errors)) => {
                assert_eq!(errors[0].field, "purpose");
            }
            _ => panic!("Expected SchemaRejected"),
        }
    }
}
