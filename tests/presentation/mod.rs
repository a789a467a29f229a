mod environment_test;
mod error_test;
mod settings_test;
