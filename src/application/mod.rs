pub mod comparison;
pub mod feed;
