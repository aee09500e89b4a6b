//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in tilesem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Command dispatch begins
    CommandBegin,
    /// Command finished
    CommandComplete,

    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Schemas
    /// Metadata schema loaded
    SchemaLoaded,
    /// Metadata schema could not be loaded
    SchemaLoadFailed,

    // Validation
    /// Declared property matches its semantic
    SemanticAccepted,
    /// Declared property does not match its semantic
    SemanticRejected,
    /// Semantic is outside the catalog and passed through
    SemanticUngoverned,
    /// All semantics in a schema checked
    CheckComplete,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::CommandBegin => "COMMAND_BEGIN",
            Event::CommandComplete => "COMMAND_COMPLETE",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaLoaded => "SCHEMA_LOADED",
            Event::SchemaLoadFailed => "SCHEMA_LOAD_FAILED",
            Event::SemanticAccepted => "SEMANTIC_ACCEPTED",
            Event::SemanticRejected => "SEMANTIC_REJECTED",
            Event::SemanticUngoverned => "SEMANTIC_UNGOVERNED",
            Event::CheckComplete => "SCHEMA_CHECK_COMPLETE",
        }
    }

    /// Returns true if this event reports a failed operation
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::SchemaLoadFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::CommandBegin,
            Event::CommandComplete,
            Event::ConfigLoaded,
            Event::SchemaLoaded,
            Event::SchemaLoadFailed,
            Event::SemanticAccepted,
            Event::SemanticRejected,
            Event::SemanticUngoverned,
            Event::CheckComplete,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_failure_events() {
        assert!(Event::SchemaLoadFailed.is_failure());
        assert!(!Event::SemanticRejected.is_failure());
        assert!(!Event::CheckComplete.is_failure());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::CheckComplete), "SCHEMA_CHECK_COMPLETE");
    }
}
