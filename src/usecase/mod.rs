pub mod login_usecase;
pub mod register_account_usecase;
