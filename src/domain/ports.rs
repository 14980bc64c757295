use crate::utils::error::Result;

/// One named unit of durable state. Reads distinguish "absent" from failure;
/// writes replace the whole value. Everything is synchronous: the core runs
/// on a single logical thread with no suspension points.
pub trait SlotBackend {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
}
