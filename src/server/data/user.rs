//! User data repository for database operations.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User, UserCredentials};

/// Repository providing database operations for customer accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation when the email is taken
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            primary_address_id: ActiveValue::Set(None),
            primary_payment_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by normalized email.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|entity| UserCredentials {
            password_hash: entity.password_hash.clone(),
            user: User::from_entity(entity),
        }))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates the user's names.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotUpdated)` - No user with that id
    pub async fn update_name(
        &self,
        user_id: i32,
        first_name: String,
        last_name: String,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn set_primary_address(
        &self,
        user_id: i32,
        address_id: Option<i32>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::PrimaryAddressId,
                Expr::value(address_id),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn set_primary_payment(
        &self,
        user_id: i32,
        payment_id: Option<i32>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::PrimaryPaymentId,
                Expr::value(payment_id),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Clears `primary_address_id` if it currently points at `address_id`.
    pub async fn clear_primary_address(&self, user_id: i32, address_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::PrimaryAddressId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::PrimaryAddressId.eq(address_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Clears `primary_payment_id` if it currently points at `payment_id`.
    pub async fn clear_primary_payment(&self, user_id: i32, payment_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::PrimaryPaymentId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::PrimaryPaymentId.eq(payment_id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
