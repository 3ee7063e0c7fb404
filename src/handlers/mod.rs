pub mod fallback;
pub mod health;
pub mod hello;

pub use fallback::fallback_handler;
pub use health::health_handler;
pub use hello::hello_handler;
