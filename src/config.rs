// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Build options for the load pipeline.
//!
//! Defaults can be overridden from `DIRGRAPH_SQUASH` and `DIRGRAPH_DIR_MODE`; CLI flags are
//! applied on top by the binary.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::augment::{ParseVirtualDirModeError, VirtualDirMode};

pub const SQUASH_ENV: &str = "DIRGRAPH_SQUASH";
pub const DIR_MODE_ENV: &str = "DIRGRAPH_DIR_MODE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name}={value:?} is not a boolean (expected true, false, 1 or 0)")]
    InvalidBool { name: String, value: String },
    #[error("{name}: {source}")]
    InvalidDirMode {
        name: String,
        #[source]
        source: ParseVirtualDirModeError,
    },
    #[error("{name} is not valid unicode")]
    NotUnicode { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildOptions {
    /// Merge single-child folder chains before ordering.
    pub squash: bool,
    pub dir_mode: VirtualDirMode,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            squash: true,
            dir_mode: VirtualDirMode::default(),
        }
    }
}

impl BuildOptions {
    /// Defaults with the process environment applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env(|name| match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                name: name.to_owned(),
            }),
        })
    }

    /// Applies overrides read through `lookup`. Unset and blank variables keep the current
    /// value.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        if let Some(value) = non_blank(lookup(SQUASH_ENV)?) {
            self.squash = parse_bool(SQUASH_ENV, &value)?;
        }
        if let Some(value) = non_blank(lookup(DIR_MODE_ENV)?) {
            self.dir_mode = value
                .parse()
                .map_err(|source| ConfigError::InvalidDirMode {
                    name: DIR_MODE_ENV.to_owned(),
                    source,
                })?;
        }
        Ok(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name: name.to_owned(),
            value: value.to_owned(),
        }),
    }
}
