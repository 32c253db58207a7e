//! Status vocabulary of agent replies.
//!
//! The agent answers every request with a short status frame. The
//! protocol only ever branches on `"ok"`; the remaining values exist so
//! logs and errors can name what the agent actually said.

/// A status reply from the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Request accepted (`ok`).
    Ok,
    /// Generic refusal (`error`).
    Error,
    /// The agent did not recognize the request type (`typeErr`).
    TypeError,
    /// Anything else the agent sent.
    Other(String),
}

impl Status {
    /// Parses a reply frame into a status.
    pub fn parse(reply: &str) -> Self {
        match reply {
            "ok" => Status::Ok,
            "error" => Status::Error,
            "typeErr" => Status::TypeError,
            other => Status::Other(other.to_string()),
        }
    }

    /// Whether the reply signals acceptance.
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Error => write!(f, "error"),
            Status::TypeError => write!(f, "typeErr"),
            Status::Other(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(Status::parse("ok"), Status::Ok);
        assert_eq!(Status::parse("error"), Status::Error);
        assert_eq!(Status::parse("typeErr"), Status::TypeError);
    }

    #[test]
    fn test_parse_other() {
        let status = Status::parse("busy");
        assert_eq!(status, Status::Other("busy".to_string()));
        assert!(!status.is_ok());
    }

    #[test]
    fn test_only_ok_is_ok() {
        assert!(Status::Ok.is_ok());
        assert!(!Status::Error.is_ok());
        assert!(!Status::TypeError.is_ok());
    }
}
