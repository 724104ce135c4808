use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<String> {
        let data = fs::read_to_string(path)?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        fs::write(path, data)?;
        Ok(())
    }
}
