pub mod deform;
pub mod generate;
pub mod query;
