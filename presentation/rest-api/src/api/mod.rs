pub mod error;
pub mod health;
pub mod lookup;
pub mod tags;
