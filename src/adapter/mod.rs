pub mod envelope;
pub mod handlers;
pub mod normalize;

pub use envelope::{InvocationEvent, InvocationResponse};
