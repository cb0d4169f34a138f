use tracing::{debug, info};
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::{BorrowedBookDto, BorrowedBooksDto, CheckoutDto};
use crate::core::circulation::Library;
use crate::core::domain::Identifiable;
use crate::core::events::{DomainEvent, EventName};
use crate::core::library::{LibraryError, LibraryResult};
use crate::members::dto::MemberDto;

impl CheckoutService for Library {
    fn issue_book(&mut self, member_id: &str, title: &str) -> LibraryResult<CheckoutDto> {
        let member = self.member_repository.find_by_id_mut(member_id)
            .ok_or_else(|| LibraryError::member_not_found(member_id))?;
        let key = self.book_repository.find_by_title(title)
            .ok_or_else(|| LibraryError::book_not_found(title))?;
        let book = self.book_repository.get_mut(&key)
            .ok_or_else(|| LibraryError::book_not_found(title))?;

        if member.has_borrowed(book.isbn.as_str()) {
            debug!(member_id, isbn = book.isbn.as_str(), "book already borrowed");
            return Err(LibraryError::already_borrowed(member_id, book.title.as_str()));
        }
        if !book.borrow_copy() {
            debug!(member_id, isbn = book.isbn.as_str(), "no copies available");
            return Err(LibraryError::unavailable(book.title.as_str()));
        }
        member.borrow_book(book.isbn.as_str());

        let checkout = CheckoutDto::from_member_book(
            self.branch_id.as_str(), &MemberDto::from(&*member), &BookDto::from(&*book));
        info!(member_id, isbn = checkout.isbn.as_str(), available = checkout.available_copies, "book issued");
        let metadata = self.metadata();
        self.publish(DomainEvent::new(EventName::BookIssued, checkout.id().as_str(), &metadata, &checkout));
        Ok(checkout)
    }

    fn return_book(&mut self, member_id: &str, title: &str) -> LibraryResult<CheckoutDto> {
        let member = self.member_repository.find_by_id_mut(member_id)
            .ok_or_else(|| LibraryError::member_not_found(member_id))?;
        let key = self.book_repository.find_by_title(title)
            .ok_or_else(|| LibraryError::book_not_found(title))?;
        let book = self.book_repository.get_mut(&key)
            .ok_or_else(|| LibraryError::book_not_found(title))?;

        if !member.has_borrowed(book.isbn.as_str()) {
            return Err(LibraryError::not_borrowed(member_id, book.title.as_str(), book.author.as_str()));
        }
        member.return_book(book.isbn.as_str());
        book.return_copy();

        let checkout = CheckoutDto::from_member_book(
            self.branch_id.as_str(), &MemberDto::from(&*member), &BookDto::from(&*book));
        info!(member_id, isbn = checkout.isbn.as_str(), available = checkout.available_copies, "book returned");
        let metadata = self.metadata();
        self.publish(DomainEvent::new(EventName::BookReturned, checkout.id().as_str(), &metadata, &checkout));
        Ok(checkout)
    }

    fn list_borrowed_books(&self, member_id: &str) -> LibraryResult<BorrowedBooksDto> {
        let member = self.member_repository.find_by_id(member_id)
            .ok_or_else(|| LibraryError::member_not_found(member_id))?;
        // an ISBN that no longer resolves is skipped
        let books = member.borrowed_isbns().iter()
            .filter_map(|isbn| self.book_repository.find_by_isbn(isbn))
            .filter_map(|key| self.book_repository.get(&key))
            .map(|book| BorrowedBookDto { title: book.title.to_string(), isbn: book.isbn.to_string() })
            .collect();
        Ok(BorrowedBooksDto { member_id: member_id.to_string(), books })
    }
}
