pub(crate) mod download_repo_postgres;
mod sea_orm_entity;

pub use download_repo_postgres::DownloadRepoPostgres;
