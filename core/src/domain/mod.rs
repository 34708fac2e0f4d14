pub mod common;
pub mod sorting;
pub mod trading;
