pub mod in_memory_store;
pub mod ssm_store;
