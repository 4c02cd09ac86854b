pub mod category_service;
pub mod expense_service;
pub mod user_service;
