pub mod extract;
pub mod parser;
pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{FlatRecord, OrderRecord, RunOutcome};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
pub use self::extract::extract_records;
pub use self::parser::parse_orders;
