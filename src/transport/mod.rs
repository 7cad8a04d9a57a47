mod http_transport;
mod response_parser;

pub use http_transport::{ByteStream, HttpTransport, ReqwestTransport};
pub use response_parser::ResponseParser;
