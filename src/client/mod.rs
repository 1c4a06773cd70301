pub mod http;
pub mod traits;

pub use http::{HttpEventClient, DEFAULT_API_URL};
pub use traits::*;
