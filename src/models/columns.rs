use serde::Serialize;

/// Logical role a sheet column can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Member,
    Date,
    Status,
    Hours,
    Email,
    Timestamp,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Date => "date",
            Role::Status => "status",
            Role::Hours => "hours",
            Role::Email => "email",
            Role::Timestamp => "timestamp",
        }
    }

    /// Member and date are required; every other role only enables extra detail.
    pub fn is_mandatory(&self) -> bool {
        matches!(self, Role::Member | Role::Date)
    }
}

/// Concrete column names resolved for each role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMap {
    pub member: String,
    pub date: String,
    pub status: Option<String>,
    pub hours: Option<String>,
    pub email: Option<String>,
    pub timestamp: Option<String>,
}

impl ColumnMap {
    pub fn get(&self, role: Role) -> Option<&str> {
        match role {
            Role::Member => Some(self.member.as_str()),
            Role::Date => Some(self.date.as_str()),
            Role::Status => self.status.as_deref(),
            Role::Hours => self.hours.as_deref(),
            Role::Email => self.email.as_deref(),
            Role::Timestamp => self.timestamp.as_deref(),
        }
    }
}
