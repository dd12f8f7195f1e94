pub mod errors;
pub mod faker;
pub mod table;

pub use errors::GenError;
pub use faker::Faker;
pub use table::Table;
