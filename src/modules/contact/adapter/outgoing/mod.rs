pub(crate) mod contact_repo_postgres;
mod sea_orm_entity;

pub use contact_repo_postgres::ContactRepoPostgres;
