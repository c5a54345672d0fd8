mod status;
pub use status::*;

mod into_status;
pub use into_status::*;

mod error;
pub use error::*;

mod node_type;
pub use node_type::*;
