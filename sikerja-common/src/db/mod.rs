//! Database layer shared by SI-KERJA services

mod init;

pub use init::{create_schema, init_database, init_memory_database};
