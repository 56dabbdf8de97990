pub mod schema;

pub use schema::validate;
