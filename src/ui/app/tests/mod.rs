pub mod fixtures;

mod scenarios;
