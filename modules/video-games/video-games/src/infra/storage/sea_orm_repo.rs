use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use video_games_sdk::{NewVideoGame, VideoGame};

use crate::domain::repo::VideoGamesRepository;

use super::entity::{self, Column, Entity as VideoGameEntity};

pub struct SeaOrmVideoGamesRepository {
    db: DatabaseConnection,
}

impl SeaOrmVideoGamesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(id: ActiveValue<i32>, game: NewVideoGame) -> entity::ActiveModel {
    entity::ActiveModel {
        id,
        title: ActiveValue::Set(game.title),
        genre: ActiveValue::Set(game.genre),
        developer: ActiveValue::Set(game.developer),
        price: ActiveValue::Set(game.price),
    }
}

#[async_trait]
impl VideoGamesRepository for SeaOrmVideoGamesRepository {
    async fn find_all(&self) -> anyhow::Result<Vec<VideoGame>> {
        let models = VideoGameEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<VideoGame>> {
        let found = VideoGameEntity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Into::into))
    }

    async fn exists_by_id(&self, id: i32) -> anyhow::Result<bool> {
        let count = VideoGameEntity::find()
            .filter(Column::Id.eq(id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn exists_by_title(&self, title: &str) -> anyhow::Result<bool> {
        let count = VideoGameEntity::find()
            .filter(Column::Title.eq(title))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn save(&self, id: Option<i32>, game: NewVideoGame) -> anyhow::Result<VideoGame> {
        let model = match id {
            Some(id) if self.exists_by_id(id).await? => {
                active_model(ActiveValue::Unchanged(id), game)
                    .update(&self.db)
                    .await?
            }
            Some(id) => active_model(ActiveValue::Set(id), game).insert(&self.db).await?,
            None => active_model(ActiveValue::NotSet, game).insert(&self.db).await?,
        };

        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<()> {
        let result = VideoGameEntity::delete_by_id(id).exec(&self.db).await?;
        tracing::debug!(id, rows_affected = result.rows_affected, "Deleted video game row");
        Ok(())
    }
}
