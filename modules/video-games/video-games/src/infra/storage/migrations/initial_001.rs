use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VideoGames::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VideoGames::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VideoGames::Title).string_len(100).not_null())
                    .col(ColumnDef::new(VideoGames::Genre).string_len(100).not_null())
                    .col(
                        ColumnDef::new(VideoGames::Developer)
                            .string_len(250)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VideoGames::Price)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup index for the duplicate-title check; not a uniqueness constraint.
        manager
            .create_index(
                Index::create()
                    .name("idx_video_games_title")
                    .table(VideoGames::Table)
                    .col(VideoGames::Title)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VideoGames::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VideoGames {
    Table,
    Id,
    Title,
    Genre,
    Developer,
    Price,
}
