pub mod config;
pub mod contact;
pub mod i18n;
pub mod manifest;
pub mod notify;
pub mod server;
pub mod storage;
pub mod submission;
pub mod wizard;
