pub mod adapters;
pub mod join;
