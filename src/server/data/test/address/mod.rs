use crate::server::{data::address::AddressRepository, model::address::AddressParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list_by_user;
