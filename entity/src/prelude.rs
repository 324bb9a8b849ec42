pub use super::address::Entity as Address;
pub use super::card::Entity as Card;
pub use super::cart::Entity as Cart;
pub use super::cart_item::Entity as CartItem;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::product::Entity as Product;
pub use super::user::Entity as User;
