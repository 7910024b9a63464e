pub mod overflow_config_file;
