use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::contact::application::ports::outgoing::NewContactSubmission;
use crate::modules::contact::domain::entities::ContactSubmission;

// SeaORM model for the "contacts" table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,

    pub timestamp: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Server assigns id and timestamp here; nothing from the request body
    /// can override them.
    pub fn from_new_submission(data: &NewContactSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            subject: data.subject.clone(),
            message: data.message.clone(),
            timestamp: chrono::Utc::now().into(),
        }
    }

    pub fn to_domain(&self) -> ContactSubmission {
        ContactSubmission {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            timestamp: self.timestamp.with_timezone(&chrono::Utc),
        }
    }
}
