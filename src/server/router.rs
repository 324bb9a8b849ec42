use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{account, auth, cart, checkout, product},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/products", get(product::get_products))
        .route("/api/products/{product_id}", get(product::get_product))
        .route("/api/cart", get(cart::get_cart).delete(cart::delete_cart))
        .route("/api/cart/items", post(cart::add_item))
        .route(
            "/api/cart/items/{product_id}",
            put(cart::update_item).delete(cart::remove_item),
        )
        .route(
            "/api/account",
            get(account::get_account).put(account::update_account),
        )
        .route(
            "/api/account/addresses",
            get(account::list_addresses).post(account::create_address),
        )
        .route(
            "/api/account/addresses/{address_id}",
            get(account::get_address)
                .put(account::update_address)
                .delete(account::delete_address),
        )
        .route(
            "/api/account/payments",
            get(account::list_payments).post(account::create_payment),
        )
        .route(
            "/api/account/payments/{payment_id}",
            get(account::get_payment).delete(account::delete_payment),
        )
        .route(
            "/api/account/primary-address",
            put(account::set_primary_address),
        )
        .route(
            "/api/account/primary-payment",
            put(account::set_primary_payment),
        )
        .route("/api/account/orders", get(account::list_orders))
        .route("/api/account/orders/{order_id}", get(account::get_order))
        .route("/checkout", get(checkout::begin))
        .route("/checkout/auth", get(checkout::auth_step))
        .route("/checkout/auth/login", post(checkout::auth_login))
        .route("/checkout/auth/register", post(checkout::auth_register))
        .route(
            "/checkout/shipping",
            get(checkout::shipping_step).post(checkout::submit_shipping),
        )
        .route(
            "/checkout/payment",
            get(checkout::payment_step).post(checkout::submit_payment),
        )
        .route(
            "/checkout/order",
            get(checkout::review).post(checkout::place_order),
        )
        .route(
            "/checkout/order/confirmation",
            get(checkout::confirmation),
        )
}
