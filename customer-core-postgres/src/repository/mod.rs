pub mod customer;
pub mod db_init;
