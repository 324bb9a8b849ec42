use crate::server::data::order::OrderRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod items;
mod list_by_user;
