//! One generic SeaORM repository serving every plain name dictionary.
//!
//! The six dictionary tables share a shape, so the CRUD queries are written
//! once against [`DictionaryDef`] and each entity module is bound to it with
//! a small declarative impl.

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, Order, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::model::{DictionaryEntry, DictionarySort};
use crate::domain::page::{LimitCfg, Page, PageRequest, SortDir};
use crate::domain::repo::{DictionaryRepository, RepoResult};

use super::entity::{
    motherboard_form_factor, psu_certificate, psu_form_factor, ram_type, socket, vendor,
};

/// Binds a SeaORM entity to the shared dictionary repository.
pub trait DictionaryDef: EntityTrait<Model: IntoActiveModel<Self::AM>> {
    type AM: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send;

    fn id_column() -> Self::Column;
    fn name_column() -> Self::Column;
    fn into_entry(model: <Self as EntityTrait>::Model) -> DictionaryEntry;
    fn active_model(entry: &DictionaryEntry) -> Self::AM;
}

macro_rules! dictionary_def {
    ($module:ident) => {
        impl DictionaryDef for $module::Entity {
            type AM = $module::ActiveModel;

            fn id_column() -> Self::Column {
                $module::Column::Id
            }

            fn name_column() -> Self::Column {
                $module::Column::Name
            }

            fn into_entry(model: $module::Model) -> DictionaryEntry {
                DictionaryEntry {
                    id: model.id,
                    name: model.name,
                    created_at: model.created_at,
                    updated_at: model.updated_at,
                }
            }

            fn active_model(entry: &DictionaryEntry) -> Self::AM {
                $module::ActiveModel {
                    id: Set(entry.id),
                    name: Set(entry.name.clone()),
                    created_at: Set(entry.created_at),
                    updated_at: Set(entry.updated_at),
                }
            }
        }
    };
}

dictionary_def!(socket);
dictionary_def!(vendor);
dictionary_def!(ram_type);
dictionary_def!(motherboard_form_factor);
dictionary_def!(psu_form_factor);
dictionary_def!(psu_certificate);

pub struct SeaOrmDictionaryRepo<E> {
    db: DatabaseConnection,
    limits: LimitCfg,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmDictionaryRepo<E> {
    pub fn new(db: DatabaseConnection, limits: LimitCfg) -> Self {
        Self {
            db,
            limits,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E> DictionaryRepository for SeaOrmDictionaryRepo<E>
where
    E: DictionaryDef,
    <E as EntityTrait>::Model: Send + Sync,
{
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<DictionaryEntry>> {
        let found = E::find()
            .filter(E::id_column().eq(id))
            .one(&self.db)
            .await?;
        Ok(found.map(E::into_entry))
    }

    async fn find_by_name(
        &self,
        name: &str,
        exclude: Option<Uuid>,
    ) -> RepoResult<Option<DictionaryEntry>> {
        let mut query = E::find().filter(E::name_column().eq(name));
        if let Some(id) = exclude {
            query = query.filter(E::id_column().ne(id));
        }
        Ok(query.one(&self.db).await?.map(E::into_entry))
    }

    async fn list(&self) -> RepoResult<Vec<DictionaryEntry>> {
        let rows = E::find()
            .order_by(E::name_column(), Order::Asc)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(E::into_entry).collect())
    }

    async fn list_page(
        &self,
        req: &PageRequest<DictionarySort>,
    ) -> RepoResult<Page<DictionaryEntry>> {
        let limit = self.limits.resolve(req.limit);
        let order = match req.dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let column = match req.sort {
            DictionarySort::Name => E::name_column(),
        };
        // One extra row answers has_more without a count query.
        let mut rows = E::find()
            .order_by(column, order)
            .order_by(E::id_column(), Order::Asc)
            .offset(req.offset)
            .limit(limit + 1)
            .all(&self.db)
            .await?;
        let has_more = rows.len() as u64 > limit;
        rows.truncate(limit as usize);
        Ok(Page {
            items: rows.into_iter().map(E::into_entry).collect(),
            has_more,
        })
    }

    async fn insert(&self, entry: DictionaryEntry) -> RepoResult<()> {
        E::insert(E::active_model(&entry))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, entry: DictionaryEntry) -> RepoResult<()> {
        E::update_many()
            .set(E::active_model(&entry))
            .filter(E::id_column().eq(entry.id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let res = E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
