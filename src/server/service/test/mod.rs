mod address;
mod cart;
mod checkout;
mod order;
mod payment;
