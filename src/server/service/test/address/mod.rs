use crate::server::{
    data::{address::AddressRepository, user::UserRepository},
    error::AppError,
    service::address::AddressService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
