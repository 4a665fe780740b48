mod fetch;
mod http;
mod transport;

pub use fetch::fetch_schema;
pub(crate) use fetch::with_timeout;
pub use http::ReqwestTransport;
pub use transport::{HttpReply, Transport};
