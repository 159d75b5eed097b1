use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use crate::errors::AppError;

pub const POSITION_ERROR: &str = "position must be either supervisor or coordinator only (case sensitive)";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Supervisor,
    Coordinator,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Supervisor => "supervisor",
            Position::Coordinator => "coordinator",
        }
    }
}

impl FromStr for Position {
    type Err = AppError;

    // Case sensitive: "Supervisor" is rejected.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "supervisor" => Ok(Position::Supervisor),
            "coordinator" => Ok(Position::Coordinator),
            _ => Err(AppError::InvalidArgument(POSITION_ERROR.to_string())),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub age: i32,
    pub position: Position,
    pub on_leave: bool,
    pub hire_date: NaiveDate,
    pub annual_leave: i32,
}

impl Employee {
    pub fn is_supervisor(&self) -> bool {
        self.position == Position::Supervisor
    }
}
