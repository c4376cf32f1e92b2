// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Detection of COPASI model documents.  Advisory only: the converter never
//! consults it.

use std::io::BufRead;
use std::path::Path;

pub const COPASI_XML_NAMESPACE: &str = "http://www.copasi.org/static/schema";

/// Number of leading lines searched for the namespace.
pub const LINES_TO_CHECK: usize = 5;

/// File extensions a COPASI document may carry; the empty string accepts
/// files without an extension.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["xml", "cps", ""];

/// Whether one of the first `LINES_TO_CHECK` lines mentions the COPASI
/// namespace.  Read errors count as "not a COPASI document".
pub fn is_copasi_document(reader: &mut dyn BufRead) -> bool {
    reader
        .lines()
        .take(LINES_TO_CHECK)
        .map_while(|line| line.ok())
        .any(|line| line.contains(COPASI_XML_NAMESPACE))
}

pub fn has_accepted_extension(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();
    ACCEPTED_EXTENSIONS.contains(&ext.as_str())
}
