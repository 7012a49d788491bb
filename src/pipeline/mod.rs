pub mod bits;
pub mod entity;
pub mod morse;
pub mod numeral;
pub mod percent;
pub mod radix;
pub mod zero_width;

pub use bits::*;
pub use entity::*;
pub use morse::*;
pub use numeral::*;
pub use percent::*;
pub use radix::*;
pub use zero_width::*;
