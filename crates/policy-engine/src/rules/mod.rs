pub mod country;
pub mod lists;
pub mod private;
