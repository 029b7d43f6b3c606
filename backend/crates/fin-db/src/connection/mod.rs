pub mod pool_settings;
pub mod sqlite_pool;
