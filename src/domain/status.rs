use std::fmt;

use serde::{Deserialize, Serialize};

/// Processing status of a unit of work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Not started yet.
    #[default]
    Pending,
    /// Currently being processed.
    Active,
    /// Finished.
    Completed,
}

impl Status {
    /// All statuses in ordinal order.
    pub const ALL: [Status; 3] = [Status::Pending, Status::Active, Status::Completed];

    /// Ordinal code of this status.
    pub fn code(&self) -> i64 {
        match self {
            Status::Pending => 0,
            Status::Active => 1,
            Status::Completed => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Status> {
        Status::ALL.into_iter().find(|status| status.code() == code)
    }

    /// Lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Active => "active",
            Status::Completed => "completed",
        }
    }

    /// Parse a status from its label, ignoring case.
    pub fn parse(name: &str) -> Option<Status> {
        match name.to_lowercase().as_str() {
            "pending" => Some(Status::Pending),
            "active" => Some(Status::Active),
            "completed" => Some(Status::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_declaration_order() {
        for (index, status) in Status::ALL.iter().enumerate() {
            assert_eq!(status.code(), index as i64);
        }
    }

    #[test]
    fn from_code_roundtrips() {
        for status in Status::ALL {
            assert_eq!(Status::from_code(status.code()), Some(status));
        }
        assert_eq!(Status::from_code(3), None);
        assert_eq!(Status::from_code(-1), None);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Status::parse("ACTIVE"), Some(Status::Active));
        assert_eq!(Status::parse("Completed"), Some(Status::Completed));
        assert_eq!(Status::parse("done"), None);
    }

    #[test]
    fn default_is_pending() {
        assert_eq!(Status::default(), Status::Pending);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Status::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let parsed: Status = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(parsed, Status::Active);
        assert_eq!(Status::Active.to_string(), "active");
    }
}
