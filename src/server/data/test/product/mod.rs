use crate::server::data::product::ProductRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
