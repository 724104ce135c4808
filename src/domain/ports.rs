use crate::domain::model::{FlatRecord, OrderRecord};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<String>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn filter_year(&self) -> Option<&str>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<OrderRecord>>;
    fn transform(&self, orders: Vec<OrderRecord>) -> Result<Vec<FlatRecord>>;
    fn load(&self, records: Vec<FlatRecord>) -> Result<String>;
}
