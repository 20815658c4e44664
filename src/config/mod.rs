pub mod cors;
pub mod database;
pub mod storage;
