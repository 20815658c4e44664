pub mod errors;
pub mod pagination;
pub mod password;
pub mod storage;
