pub mod config;
pub mod logging;

// Core modules
pub mod download;
pub mod fetch;
pub mod harvest;
pub mod retry;
pub mod run;
pub mod storage;
pub mod url_model;
