use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000003_create_address_table::Address,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(pk_auto(Card::Id))
                    .col(integer(Card::UserId))
                    .col(string(Card::CardholderName))
                    .col(string(Card::CardNumber))
                    .col(integer(Card::ExpMonth))
                    .col(integer(Card::ExpYear))
                    .col(string(Card::Cvv))
                    .col(integer(Card::BillingAddressId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_user_id")
                            .from(Card::Table, Card::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_billing_address_id")
                            .from(Card::Table, Card::BillingAddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    #[sea_orm(iden = "cards")]
    Table,
    Id,
    UserId,
    CardholderName,
    CardNumber,
    ExpMonth,
    ExpYear,
    Cvv,
    BillingAddressId,
}
