use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::members::Member;


// CheckoutDto abstracts one copy of a book that was issued to or returned by a member.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct CheckoutDto {
    pub branch_id: String,
    pub member_id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub available_copies: i32,
}

impl CheckoutDto {
    pub fn from_member_book(branch_id: &str, member: &dyn Member, book: &dyn Book) -> Self {
        CheckoutDto {
            branch_id: branch_id.to_string(),
            member_id: member.id(),
            isbn: book.isbn().to_string(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            available_copies: book.available_copies(),
        }
    }
}

impl Identifiable for CheckoutDto {
    fn id(&self) -> String {
        format!("{}/{}", self.member_id, self.isbn)
    }
}

// BorrowedBookDto is one line of a member's borrowed books listing.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BorrowedBookDto {
    pub title: String,
    pub isbn: String,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BorrowedBooksDto {
    pub member_id: String,
    pub books: Vec<BorrowedBookDto>,
}


#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::checkout::dto::CheckoutDto;
    use crate::core::domain::Identifiable;
    use crate::members::dto::MemberDto;

    #[test]
    fn test_should_build_checkout() {
        let member = MemberDto::new("M1", "Alice");
        let book = BookDto::new("Dune", "Frank Herbert", "111", 2);
        let checkout = CheckoutDto::from_member_book("test", &member, &book);
        assert_eq!("M1", checkout.member_id.as_str());
        assert_eq!("111", checkout.isbn.as_str());
        assert_eq!("Frank Herbert", checkout.author.as_str());
        assert_eq!(2, checkout.available_copies);
        assert_eq!("M1/111", checkout.id().as_str());
    }
}
