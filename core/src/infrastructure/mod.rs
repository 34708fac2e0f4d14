pub mod db;
pub mod sorting;
pub mod trading;
