use crate::core::library::LibraryResult;

// Command wraps a single request against one of the library services.
pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> LibraryResult<Response>;
}
