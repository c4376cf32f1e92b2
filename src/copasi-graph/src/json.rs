// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! JSON input and output.
//!
//! Models arrive as the JSON rendering of a loaded COPASI model (see
//! `datamodel`); converted networks leave as JSON for an external graph
//! store.
//!
//! # Example
//! ```no_run
//! use copasi_graph::{convert, json};
//!
//! let mut reader = std::io::BufReader::new(std::fs::File::open("model.json")?);
//! let model = json::open_json(&mut reader)?;
//! let conversion = convert(Some(&model), "model.json")?;
//! println!("{}", json::to_json(&conversion.network, true)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::BufRead;

use crate::common::{Error, ErrorCode, ErrorKind, Result};
use crate::datamodel::Model;
use crate::graph::Network;

pub fn open_json(reader: &mut dyn BufRead) -> Result<Model> {
    serde_json::from_reader(reader).map_err(|err| {
        Error::new(
            ErrorKind::Import,
            ErrorCode::JsonDeserialization,
            Some(err.to_string()),
        )
    })
}

pub fn to_json(network: &Network, pretty: bool) -> Result<String> {
    let result = if pretty {
        serde_json::to_string_pretty(network)
    } else {
        serde_json::to_string(network)
    };
    result.map_err(|err| {
        Error::new(
            ErrorKind::Conversion,
            ErrorCode::JsonSerialization,
            Some(err.to_string()),
        )
    })
}
