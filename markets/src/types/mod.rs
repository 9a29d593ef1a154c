mod enums;
mod open_orders;
mod route;
mod token;

pub use enums::*;
pub use open_orders::*;
pub use route::*;
pub use token::*;
