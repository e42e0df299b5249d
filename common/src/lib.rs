pub mod log_setup;
