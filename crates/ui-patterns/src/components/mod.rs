pub mod button;
pub mod card;
pub mod input;

// Re-exports for convenience
pub use button::*;
pub use card::*;
pub use input::*;
