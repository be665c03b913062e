pub mod error;
pub mod validate;

pub mod campaign;
pub mod manifest;
pub mod policy;
pub mod repr;
pub mod segment;
pub mod session;
pub mod table;

pub use crate::campaign::{Agent, Campaign};
pub use crate::error::{Result, SegError};
pub use crate::policy::Policy;
pub use crate::segment::{segment, Download, NamingContext, Segment};
pub use crate::session::Session;
pub use crate::table::{Cell, Table};
