use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: i32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is {} years old",
            self.first_name, self.last_name, self.age
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformId {
    Win32Nt,
    Unix,
    MacOsx,
}

/// Stand-in for an arbitrary reference object placed in an untyped list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatingSystem {
    pub platform: PlatformId,
    pub major: u32,
    pub minor: u32,
}

impl OperatingSystem {
    pub fn new(platform: PlatformId, major: u32, minor: u32) -> Self {
        Self {
            platform,
            major,
            minor,
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.platform {
            PlatformId::Win32Nt => "Microsoft Windows NT",
            PlatformId::Unix => "Unix",
            PlatformId::MacOsx => "Mac OS X",
        };
        write!(f, "{} {}.{}", name, self.major, self.minor)
    }
}
