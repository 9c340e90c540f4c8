// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

/// What a mutation did to the folder whose listeners receive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMessage {
    Tag {
        key: SmolStr,
        value: SmolStr,
    },
    Untag {
        key: SmolStr,
    },
    TagFile {
        file: SmolStr,
        key: SmolStr,
        value: SmolStr,
    },
    UntagFile {
        file: SmolStr,
        key: SmolStr,
    },
    TagAllFolders {
        key: SmolStr,
        value: SmolStr,
    },
    TagAll {
        key: SmolStr,
        value: SmolStr,
    },
    UntagAll {
        key: SmolStr,
    },
}

impl TagMessage {
    pub fn key(&self) -> &str {
        match self {
            Self::Tag { key, .. }
            | Self::Untag { key }
            | Self::TagFile { key, .. }
            | Self::UntagFile { key, .. }
            | Self::TagAllFolders { key, .. }
            | Self::TagAll { key, .. }
            | Self::UntagAll { key } => key,
        }
    }

    pub fn file(&self) -> Option<&str> {
        match self {
            Self::TagFile { file, .. } | Self::UntagFile { file, .. } => Some(file),
            _ => None,
        }
    }
}

/// Callback registered on a single folder.
///
/// Listeners run synchronously inside the mutating call and only see the message, never the
/// tree, so they cannot re-enter it.
pub type Listener = Box<dyn FnMut(&TagMessage)>;
