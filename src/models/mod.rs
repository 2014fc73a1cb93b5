pub mod alert;
pub mod quote;

pub use alert::Alert;
pub use quote::Quote;
