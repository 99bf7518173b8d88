pub mod error;

pub mod collection;
pub mod events;
pub mod text;
pub mod timing;
