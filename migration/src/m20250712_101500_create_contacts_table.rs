use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Contacts::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Contacts::Name)
                            .string_len(100) // Mirrors the input validation upper bound
                            .not_null(),
                    )
                    .col(ColumnDef::new(Contacts::Email).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Contacts::Subject)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contacts::Message)
                            .string_len(5000)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contacts::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for listing submissions newest-first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_contacts_timestamp
                ON contacts (timestamp DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_contacts_timestamp")
            .await?;

        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contacts {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    Timestamp,
}
