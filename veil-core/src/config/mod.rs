pub mod defaults;

mod privacy_config;

pub use privacy_config::PrivacyConfig;
