pub mod config;
pub mod icons;
pub mod markdown;
pub mod storage;
pub mod transport;
