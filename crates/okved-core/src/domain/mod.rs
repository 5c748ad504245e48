pub mod okved;
pub mod phone;

pub use okved::OkvedEntry;
pub use phone::{NormalizedPhone, COUNTRY_PREFIX};
