//! Address book repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::address::{Address, AddressParam};

pub struct AddressRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AddressRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, param: AddressParam) -> Result<Address, DbErr> {
        let entity = entity::address::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            address1: ActiveValue::Set(param.address1),
            address2: ActiveValue::Set(param.address2),
            city: ActiveValue::Set(param.city),
            state: ActiveValue::Set(param.state),
            zip: ActiveValue::Set(param.zip),
            country: ActiveValue::Set(param.country),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Address::from_entity(entity))
    }

    pub async fn find_by_id(&self, address_id: i32) -> Result<Option<Address>, DbErr> {
        let entity = entity::prelude::Address::find_by_id(address_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Address::from_entity))
    }

    /// Gets all addresses owned by the user in creation order.
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<Address>, DbErr> {
        let entities = entity::prelude::Address::find()
            .filter(entity::address::Column::UserId.eq(user_id))
            .order_by_asc(entity::address::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Address::from_entity).collect())
    }

    /// Replaces every field of an existing address. Ownership is unchanged.
    pub async fn update(&self, address_id: i32, param: AddressParam) -> Result<Address, DbErr> {
        let entity = entity::address::ActiveModel {
            id: ActiveValue::Unchanged(address_id),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            address1: ActiveValue::Set(param.address1),
            address2: ActiveValue::Set(param.address2),
            city: ActiveValue::Set(param.city),
            state: ActiveValue::Set(param.state),
            zip: ActiveValue::Set(param.zip),
            country: ActiveValue::Set(param.country),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Address::from_entity(entity))
    }

    pub async fn delete(&self, address_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Address::delete_by_id(address_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
