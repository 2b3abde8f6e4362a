//! Content inspection for uploads: signature sniffing and category validation.

pub mod sniffer;
pub mod validator;

pub use sniffer::sniff;
pub use validator::MediaValidator;
