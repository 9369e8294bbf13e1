pub mod a001_settings;
pub mod a003_chat_session;
