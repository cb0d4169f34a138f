use crate::console::view;
use crate::core::circulation::{create_library, Library};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

// AppState is everything a console session needs between two menu choices.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) library: Library,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        AppState {
            library: create_library(&config),
            config,
        }
    }
}

// Transcript is the lines a handler prints in reply to one request.
pub(crate) type Transcript = Vec<String>;

// circulation errors are reported to the user and the session goes on, anything else ends it
pub(crate) fn error_to_transcript(err: LibraryError) -> LibraryResult<Transcript> {
    if err.is_circulation() {
        Ok(view::circulation_error(&err))
    } else {
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::controller::{AppState, error_to_transcript};
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_build_app_state() {
        let state = AppState::new(Configuration::new("test"));
        assert_eq!("test", state.config.branch_id.as_str());
        assert_eq!("test", state.library.branch_id.as_str());
    }

    #[test]
    fn test_should_render_circulation_errors() {
        let lines = error_to_transcript(LibraryError::member_not_found("M1")).expect("should render");
        assert_eq!(vec!["Member ID not found.".to_string()], lines);
    }

    #[test]
    fn test_should_propagate_other_errors() {
        let err = error_to_transcript(LibraryError::runtime("broken", None)).expect_err("should fail");
        assert!(matches!(err, LibraryError::Runtime{ .. }));
    }
}
