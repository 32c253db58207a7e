//! Database descriptor models.
//!
//! Contains the connection descriptors handed out by the agent in
//! response to a `dbList` request.

use serde::{Deserialize, Serialize};

/// Known database type: MySQL.
pub const TYPE_MYSQL: &str = "mysql";
/// Known database type: Microsoft SQL Server.
pub const TYPE_SQLSERVER: &str = "sqlserver";
/// Known database type: InfluxDB.
pub const TYPE_INFLUXDB: &str = "influxdb";

/// One database connection descriptor from the agent's inventory.
///
/// Produced only by deserializing the agent's `dbList` response; the
/// array order is server-assigned and preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseDescriptor {
    /// Database type (mysql, sqlserver, influxdb; extensible).
    #[serde(rename = "type")]
    pub db_type: String,
    /// Database host address.
    pub addr: String,
    /// Database name.
    pub database: String,
    /// Login username.
    pub username: String,
    /// Login password.
    pub password: String,
}

impl DatabaseDescriptor {
    /// Whether the descriptor carries one of the types this crate knows
    /// about. Unknown types are still returned verbatim.
    pub fn is_known_type(&self) -> bool {
        matches!(
            self.db_type.as_str(),
            TYPE_MYSQL | TYPE_SQLSERVER | TYPE_INFLUXDB
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_fields() {
        let json = r#"{"type":"mysql","addr":"h:3306","database":"d","username":"u","password":"p"}"#;
        let d: DatabaseDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(d.db_type, "mysql");
        assert_eq!(d.addr, "h:3306");
        assert_eq!(d.database, "d");
        assert_eq!(d.username, "u");
        assert_eq!(d.password, "p");
        assert!(d.is_known_type());
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let json = r#"{"type":"cassandra","addr":"a","database":"b","username":"c","password":"d"}"#;
        let d: DatabaseDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(d.db_type, "cassandra");
        assert!(!d.is_known_type());
    }
}
