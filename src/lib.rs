pub mod domain;
pub mod infra;
pub mod ui;
