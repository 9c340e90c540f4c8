// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smol_str::SmolStr;

pub(crate) fn push_indent(line: &mut String, indent: usize) {
    line.extend(std::iter::repeat(' ').take(indent));
}

/// Appends ` [k=v, k2=v2]` in key order, or nothing when `tags` is empty.
pub(crate) fn push_tags(line: &mut String, tags: &BTreeMap<SmolStr, SmolStr>) {
    if tags.is_empty() {
        return;
    }
    line.push_str(" [");
    for (idx, (key, value)) in tags.iter().enumerate() {
        if idx > 0 {
            line.push_str(", ");
        }
        line.push_str(key);
        line.push('=');
        line.push_str(value);
    }
    line.push(']');
}
