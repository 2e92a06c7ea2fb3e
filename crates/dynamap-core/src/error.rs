use thiserror::Error as ThisError;

///
/// UnknownEntityError
///
/// Raised by the generated table registry when asked about an identity
/// outside the generated set. Carries every known identity so the message
/// is actionable without re-running generation.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown table entity '{entity}'; known entities: {}", .known.join(", "))]
pub struct UnknownEntityError {
    pub entity: String,
    pub known: Vec<String>,
}

impl UnknownEntityError {
    #[must_use]
    pub fn new(entity: &str, known: &[&str]) -> Self {
        Self {
            entity: entity.to_string(),
            known: known.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_enumerates_known_identities() {
        let err = UnknownEntityError::new("domain::Stray", &["domain::Route", "domain::TestUser"]);

        assert_eq!(
            err.to_string(),
            "unknown table entity 'domain::Stray'; known entities: domain::Route, domain::TestUser"
        );
    }
}
