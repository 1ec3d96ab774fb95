pub mod bcrypt_password_hasher;
pub mod in_memory_store;
