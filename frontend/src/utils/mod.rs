pub mod download;
pub mod pagination;
pub mod storage;
pub mod time;
