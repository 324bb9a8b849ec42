use crate::server::{
    data::{card::CardRepository, user::UserRepository},
    error::AppError,
    model::{
        address::AddressChoice,
        payment::{CreatePaymentParam, NewCardParam},
    },
    service::payment::PaymentService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
