pub mod a001_settings;
pub mod a002_chat_message;
pub mod a003_chat_session;
pub mod common;
