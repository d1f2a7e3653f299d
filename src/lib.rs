//! Turns requirements documents into reviewable user stories and test cases,
//! then pushes them to an issue tracker or exports them as a spreadsheet.

pub mod api;
pub mod clients;
pub mod config;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod prompt;
pub mod store;
