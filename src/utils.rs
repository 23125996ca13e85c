pub mod date;
pub mod ddb;
pub mod json;

#[cfg(test)]
pub(crate) mod fixtures;
