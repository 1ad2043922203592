use thiserror::Error;

use crate::model::Namespace;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server answered with status {0}")]
    Status(u16),
}

/// Everything that can go wrong during a single navigation attempt.
/// None of these are fatal; the router stays usable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("no section with id `{id}`")]
    UnknownSection { id: String },
    #[error("no section is marked as the start section")]
    NoStartSection,
    #[error("could not load {namespace} fragment `{id}`: {source}")]
    FragmentFetch {
        namespace: Namespace,
        id: String,
        source: FetchError,
    },
    #[error("history update rejected: {0}")]
    History(String),
    #[error("invalid data for cloud `{cloud_id}`: {reason}")]
    CloudData { cloud_id: String, reason: String },
    #[error("DOM unavailable: {0}")]
    Dom(String),
}

impl NavError {
    pub fn unknown_section(id: &str) -> Self {
        NavError::UnknownSection { id: id.to_owned() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failure_message_names_fragment() {
        let err = NavError::FragmentFetch {
            namespace: Namespace::Words,
            id: "ferment".into(),
            source: FetchError::Status(404),
        };
        assert_eq!(
            err.to_string(),
            "could not load words fragment `ferment`: server answered with status 404"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
