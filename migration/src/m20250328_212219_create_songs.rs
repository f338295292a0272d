use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Songs::Table)
                    .if_not_exists()
                    .col(pk_auto(Songs::Id))
                    .col(string_len(Songs::Group, 100))
                    .col(string_len(Songs::Song, 100))
                    .col(text(Songs::Text).default(""))
                    .col(timestamp_with_time_zone_null(Songs::ReleaseDate))
                    .col(string_len(Songs::Link, 255).default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Songs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Songs {
    Table,
    Id,
    Group,
    Song,
    Text,
    ReleaseDate,
    Link,
}
