pub mod deepseek;
pub mod mock;

pub use deepseek::DeepSeekProvider;
pub use mock::MockProvider;
