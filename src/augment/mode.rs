// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which virtual folder nodes the augmenter adds to pull related files together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VirtualDirMode {
    /// No folder nodes.
    #[serde(rename = "none")]
    Ignore,
    /// One folder node per immediate parent folder.
    #[default]
    #[serde(rename = "one")]
    OnlyOne,
    /// One folder node per ancestor folder at every depth.
    #[serde(rename = "all")]
    All,
}

impl VirtualDirMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "none",
            Self::OnlyOne => "one",
            Self::All => "all",
        }
    }
}

impl fmt::Display for VirtualDirMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid virtual dir mode {0:?}, expected one of: none, one, all")]
pub struct ParseVirtualDirModeError(pub String);

impl FromStr for VirtualDirMode {
    type Err = ParseVirtualDirModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::Ignore),
            "one" => Ok(Self::OnlyOne),
            "all" => Ok(Self::All),
            other => Err(ParseVirtualDirModeError(other.to_owned())),
        }
    }
}
