pub mod builder;
pub mod classify;
pub mod corpus;
pub mod filter;
pub mod parsing;
pub mod records;
pub mod tables;
