use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, NewContactSubmission,
};
use crate::modules::contact::domain::entities::ContactSubmission;
use crate::shared::db::{is_schema_violation, DatabaseManager};
use crate::shared::validation::FieldError;
use async_trait::async_trait;
use sea_orm::{DbErr, EntityTrait};
use std::sync::Arc;

use super::sea_orm_entity::{
    ActiveModel as ContactActiveModel, Entity as ContactEntity, Model as ContactModel,
};

#[derive(Clone)]
pub struct ContactRepoPostgres {
    db: Arc<DatabaseManager>,
}

impl ContactRepoPostgres {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepoPostgres {
    async fn insert(
        &self,
        data: NewContactSubmission,
    ) -> Result<ContactSubmission, ContactRepositoryError> {
        // The handle is absent whenever the supervisor is between connections
        let conn = self.db.conn().await.ok_or_else(|| {
            ContactRepositoryError::DatabaseError("database is not connected".to_string())
        })?;

        let model = ContactModel::from_new_submission(&data);
        let active_model: ContactActiveModel = model.into();

        let inserted: ContactModel = ContactEntity::insert(active_model)
            .exec_with_returning(&*conn)
            .await
            .map_err(classify_insert_error)?;

        Ok(inserted.to_domain())
    }
}

fn classify_insert_error(err: DbErr) -> ContactRepositoryError {
    let message = err.to_string();
    if is_schema_violation(&message) {
        ContactRepositoryError::SchemaRejected(vec![FieldError::new("record", message)])
    } else {
        ContactRepositoryError::DatabaseError(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn new_submission() -> NewContactSubmission {
        NewContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Freelance inquiry".to_string(),
            message: "I would like to talk about a project.".to_string(),
        }
    }

    fn inserted_model() -> ContactModel {
        ContactModel {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Freelance inquiry".to_string(),
            message: "I would like to talk about a project.".to_string(),
            timestamp: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn insert_returns_the_persisted_record() {
        let model = inserted_model();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let manager = DatabaseManager::with_connection("postgres://localhost/test", db);
        let repo = ContactRepoPostgres::new(manager);

        let created = repo.insert(new_submission()).await.unwrap();
        assert_eq!(created.id, model.id);
        assert_eq!(created.name, "Jane Doe");
        assert_eq!(created.subject, "Freelance inquiry");
    }

    #[tokio::test]
    async fn insert_without_a_connection_is_a_database_error() {
        let manager = DatabaseManager::new("postgres://localhost/test");
        let repo = ContactRepoPostgres::new(manager);

        let result = repo.insert(new_submission()).await;
        match result {
            Err(ContactRepositoryError::DatabaseError(msg)) => {
                assert_eq!(msg, "database is not connected");
            }
            _ => panic!("Expected DatabaseError"),
        }
    }

    #[tokio::test]
    async fn length_violations_from_the_store_are_schema_rejections() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "value too long for type character varying(200)".to_string(),
            )])
            .into_connection();

        let manager = DatabaseManager::with_connection("postgres://localhost/test", db);
        let repo = ContactRepoPostgres::new(manager);

        let result = repo.insert(new_submission()).await;
        match result {
            Err(ContactRepositoryError::SchemaRejected(errors)) => {
                assert_eq!(errors[0].field, "record");
                assert!(errors[0].message.contains("value too long"));
            }
            _ => panic!("Expected SchemaRejected"),
        }
    }

    #[tokio::test]
    async fn other_store_failures_stay_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let manager = DatabaseManager::with_connection("postgres://localhost/test", db);
        let repo = ContactRepoPostgres::new(manager);

        let result = repo.insert(new_submission()).await;
        assert!(matches!(
            result,
            Err(ContactRepositoryError::DatabaseError(_))
        ));
    }
}
