pub mod codec;
pub mod logging;
