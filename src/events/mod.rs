pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_arrow_keys;
pub use pointer::wire_border_hover;
