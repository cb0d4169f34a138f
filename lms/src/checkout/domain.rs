use crate::checkout::dto::{BorrowedBooksDto, CheckoutDto};
use crate::core::library::LibraryResult;

pub mod service;

pub(crate) trait CheckoutService {
    fn issue_book(&mut self, member_id: &str, title: &str) -> LibraryResult<CheckoutDto>;
    fn return_book(&mut self, member_id: &str, title: &str) -> LibraryResult<CheckoutDto>;
    fn list_borrowed_books(&self, member_id: &str) -> LibraryResult<BorrowedBooksDto>;
}
