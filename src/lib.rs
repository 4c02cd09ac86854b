pub mod db;
pub mod handlers;
pub mod models;
pub mod password;
pub mod repositories;
pub mod services;
