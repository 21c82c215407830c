use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Downloads::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Downloads::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Downloads::Email).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Downloads::Purpose)
                            .string_len(500) // Upper bound lives here, not in input validation
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Downloads::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_downloads_timestamp
                ON downloads (timestamp DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_downloads_timestamp")
            .await?;

        manager
            .drop_table(Table::drop().table(Downloads::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Downloads {
    Table,
    Id,
    Email,
    Purpose,
    Timestamp,
}
