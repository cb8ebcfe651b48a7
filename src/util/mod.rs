pub mod clock;
pub mod constraint;
pub mod file;
pub mod id;
pub mod random;
pub mod telemetry;
pub mod time;

pub use clock::*;
pub use constraint::*;
pub use file::*;
pub use id::*;
pub use random::*;
pub use telemetry::*;
pub use time::*;
