//! Stored card repository.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::payment::{Card, NewCardParam};

pub struct CardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        param: NewCardParam,
        billing_address_id: i32,
    ) -> Result<Card, DbErr> {
        let entity = entity::card::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            cardholder_name: ActiveValue::Set(param.cardholder_name),
            card_number: ActiveValue::Set(param.card_number),
            exp_month: ActiveValue::Set(param.exp_month),
            exp_year: ActiveValue::Set(param.exp_year),
            cvv: ActiveValue::Set(param.cvv),
            billing_address_id: ActiveValue::Set(billing_address_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Card::from_entity(entity))
    }

    pub async fn find_by_id(&self, card_id: i32) -> Result<Option<Card>, DbErr> {
        let entity = entity::prelude::Card::find_by_id(card_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Card::from_entity))
    }

    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<Card>, DbErr> {
        let entities = entity::prelude::Card::find()
            .filter(entity::card::Column::UserId.eq(user_id))
            .order_by_asc(entity::card::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Card::from_entity).collect())
    }

    pub async fn set_billing_address(&self, card_id: i32, address_id: i32) -> Result<(), DbErr> {
        entity::prelude::Card::update_many()
            .col_expr(
                entity::card::Column::BillingAddressId,
                Expr::value(address_id),
            )
            .filter(entity::card::Column::Id.eq(card_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Counts cards billed to the address.
    pub async fn count_by_billing_address(&self, address_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Card::find()
            .filter(entity::card::Column::BillingAddressId.eq(address_id))
            .count(self.db)
            .await
    }

    pub async fn delete(&self, card_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Card::delete_by_id(card_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
