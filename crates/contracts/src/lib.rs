//! Types and pure logic shared by the admin frontend: wire contracts with the
//! REST backend, the category tree engine, pagination and table planning,
//! session storage.

pub mod domain;
pub mod shared;
pub mod system;
