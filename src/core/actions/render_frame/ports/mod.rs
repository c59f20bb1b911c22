pub mod cancel_token;
pub mod progress_sink;
