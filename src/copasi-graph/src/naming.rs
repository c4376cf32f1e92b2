// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use crate::datamodel::{DataObject, Model};

/// Names derived for a converted network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkNames {
    /// Name of the collection (root network) the graph belongs to.
    pub collection: String,
    /// Name of the graph itself, e.g. `"ALL: model.cps"`.
    pub network: String,
}

/// The model's own identifier, or the last path component of the
/// originating document's label when the model has none.
pub fn network_name(model: &Model, document_label: &str) -> String {
    if !model.key().is_empty() {
        return model.key().to_owned();
    }
    document_label
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(document_label)
        .to_owned()
}

pub fn network_names(model: &Model, document_label: &str, prefix: &str) -> NetworkNames {
    let name = network_name(model, document_label);
    NetworkNames {
        network: format!("{prefix}: {name}"),
        collection: name,
    }
}
