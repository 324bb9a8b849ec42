use crate::server::{
    data::cart::CartRepository,
    error::AppError,
    model::cart::CartCaller,
    service::cart::CartService,
};
use test_utils::{builder::TestBuilder, factory};

mod add_item;
mod resolve;
mod set_quantity;

fn guest(session_cart_id: Option<i32>) -> CartCaller {
    CartCaller {
        user_id: None,
        session_cart_id,
    }
}

fn member(user_id: i32, session_cart_id: Option<i32>) -> CartCaller {
    CartCaller {
        user_id: Some(user_id),
        session_cart_id,
    }
}
