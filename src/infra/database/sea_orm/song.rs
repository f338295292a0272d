use entity::songs;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, Select,
};

use super::SeaOrmRepository;
use crate::domain::song::repo::Repo;
use crate::domain::song::{NewSong, Song, SongFilter};

/// Postgres binds OFFSET and LIMIT as signed bigints
const MAX_BIGINT: u64 = i64::MAX.unsigned_abs();

impl Repo for SeaOrmRepository {
    type Error = DbErr;

    async fn find_many(
        &self,
        filter: &SongFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Song>, Self::Error> {
        let models = find_many_query(filter, offset, limit)
            .all(&self.conn)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Song>, Self::Error> {
        songs::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map(|model| model.map(Into::into))
    }

    async fn create(&self, song: &NewSong) -> Result<Song, Self::Error> {
        songs::ActiveModel {
            id: NotSet,
            group: Set(song.group.clone()),
            song: Set(song.song.clone()),
            text: Set(String::new()),
            release_date: Set(None),
            link: Set(String::new()),
        }
        .insert(&self.conn)
        .await
        .map(Into::into)
    }

    async fn save(&self, song: &Song) -> Result<(), Self::Error> {
        songs::Entity::update_many()
            .set(songs::ActiveModel {
                id: NotSet,
                group: Set(song.group.clone()),
                song: Set(song.song.clone()),
                text: Set(song.text.clone()),
                release_date: Set(song.release_date),
                link: Set(song.link.clone()),
            })
            .filter(songs::Column::Id.eq(song.id))
            .exec(&self.conn)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), Self::Error> {
        songs::Entity::delete_by_id(id).exec(&self.conn).await?;

        Ok(())
    }
}

fn find_many_query(
    filter: &SongFilter,
    offset: u64,
    limit: u64,
) -> Select<songs::Entity> {
    songs::Entity::find()
        .apply_if(filter.group.clone(), |query, group| {
            query.filter(songs::Column::Group.eq(group))
        })
        .apply_if(filter.song.clone(), |query, song| {
            query.filter(songs::Column::Song.eq(song))
        })
        .order_by_asc(songs::Column::Id)
        .offset(offset.min(MAX_BIGINT))
        .limit(limit.min(MAX_BIGINT))
}

impl From<songs::Model> for Song {
    fn from(model: songs::Model) -> Self {
        Self {
            id: model.id,
            group: model.group,
            song: model.song,
            text: model.text,
            release_date: model.release_date,
            link: model.link,
        }
    }
}
