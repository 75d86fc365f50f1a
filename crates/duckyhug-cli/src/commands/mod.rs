pub mod config;
pub mod run;
pub mod subscribe;
pub mod tour;
