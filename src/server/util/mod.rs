pub mod cookie;
pub mod money;
pub mod parse;
pub mod redirect;
