mod address;
mod order;
mod product;
mod user;
