/// Race detection ports
pub mod clock_port;
pub mod thread_name_port;

pub use clock_port::*;
pub use thread_name_port::*;
