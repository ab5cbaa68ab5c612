pub mod config;
pub mod pages;
pub mod roster;
pub mod run;
