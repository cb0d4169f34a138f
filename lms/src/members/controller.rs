use crate::console::view;
use crate::core::command::Command;
use crate::core::controller::{AppState, Transcript};
use crate::core::library::LibraryResult;
use crate::members::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest};

pub(crate) fn add_member(state: &mut AppState, req: AddMemberCommandRequest) -> LibraryResult<Transcript> {
    let res = AddMemberCommand::new(&mut state.library).execute(req)?;
    Ok(view::added_member(&res.member))
}

#[cfg(test)]
mod tests {
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::members::command::add_member_cmd::AddMemberCommandRequest;
    use crate::members::controller::add_member;

    #[test]
    fn test_should_add_member() {
        let mut state = AppState::new(Configuration::new("test"));
        let lines = add_member(&mut state, AddMemberCommandRequest::new("Alice")).expect("should add member");
        assert_eq!(vec!["Member added: Alice (Member ID: M1)".to_string()], lines);
    }
}
