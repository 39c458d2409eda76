use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use clap::ValueEnum;

/// Thunderbird folder the archive was exported from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FolderType {
    Inbox,
    Sent,
}

impl FolderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FolderType::Inbox => "inbox",
            FolderType::Sent => "sent",
        }
    }

    /// Default output file name, e.g. `events_inbox.json`
    pub fn output_file_name(&self) -> String {
        format!("events_{}.json", self.as_str())
    }
}

impl fmt::Display for FolderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FolderType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inbox" => Ok(FolderType::Inbox),
            "sent" => Ok(FolderType::Sent),
            other => bail!("Unknown folder type '{}' (expected inbox or sent)", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("inbox".parse::<FolderType>().unwrap(), FolderType::Inbox);
        assert_eq!("INBOX".parse::<FolderType>().unwrap(), FolderType::Inbox);
        assert_eq!(" Sent ".parse::<FolderType>().unwrap(), FolderType::Sent);
    }

    #[test]
    fn test_parse_rejects_other_folders() {
        assert!("drafts".parse::<FolderType>().is_err());
        assert!("".parse::<FolderType>().is_err());
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(FolderType::Inbox.output_file_name(), "events_inbox.json");
        assert_eq!(FolderType::Sent.output_file_name(), "events_sent.json");
    }
}
