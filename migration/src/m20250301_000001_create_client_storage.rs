use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per storage key, value held as serialized JSON
        manager
            .create_table(
                Table::create()
                    .table(ClientStorage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClientStorage::Key)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClientStorage::Value)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClientStorage::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClientStorage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ClientStorage {
    Table,
    Key,
    Value,
    UpdatedAt,
}
