pub mod list;
pub mod run;
pub mod run_all;
