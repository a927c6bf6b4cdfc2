pub mod notifier;
pub mod request_builder;
pub mod response_preview;
