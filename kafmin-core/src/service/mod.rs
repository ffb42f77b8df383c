//! Console-facing services over the admin capability.

use std::str::FromStr;

use kafmin_model::Fault;

pub mod configs;
pub mod topics;


/// Optional entity sections a caller may ask to have populated.
///
/// Each flag turns on one concern lane of the describe orchestration; an
/// entity is complete for the caller even when none are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Include {
    Partitions,
    Configs,
    AuthorizedOperations,
}

impl Include {
    pub fn as_str(&self) -> &'static str {
        match self {
            Include::Partitions => "partitions",
            Include::Configs => "configs",
            Include::AuthorizedOperations => "authorizedOperations",
        }
    }
}

impl FromStr for Include {
    type Err = Fault;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "partitions" => Ok(Include::Partitions),
            "configs" => Ok(Include::Configs),
            "authorizedOperations" => Ok(Include::AuthorizedOperations),
            other => Err(Fault::Unknown(format!("unknown include: {other}"))),
        }
    }
}
