pub mod colors;
pub mod mask;
pub mod spinner;

pub use colors::*;
pub use mask::*;
pub use spinner::*;
