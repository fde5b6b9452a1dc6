//! Raw record models as consumed from the backend API

mod product;
mod purchase;
mod sale;

pub use product::*;
pub use purchase::*;
pub use sale::*;
