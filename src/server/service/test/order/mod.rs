use crate::server::{
    data::{cart::CartRepository, order::OrderRepository},
    error::AppError,
    model::order::CheckoutBundle,
    service::order::OrderService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::CheckoutFixture},
};

mod place;

fn bundle(fixture: &CheckoutFixture) -> CheckoutBundle {
    CheckoutBundle {
        user_id: fixture.user.id,
        cart_id: fixture.cart.id,
        shipping_address_id: fixture.address.id,
        billing_address_id: fixture.address.id,
        payment_id: fixture.card.id,
    }
}
