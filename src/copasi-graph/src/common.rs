// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::fmt;
use std::{error, result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NoError, // will never be produced
    NoModel, // the top-level model reference is absent
    JsonDeserialization,
    JsonSerialization,
    Io,
    Generic,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ErrorCode::*;
        let name = match self {
            NoError => "no_error",
            NoModel => "no_model",
            JsonDeserialization => "json_deserialization",
            JsonSerialization => "json_serialization",
            Io => "io",
            Generic => "generic",
        };

        write!(f, "{name}")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Import,
    Model,
    Conversion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub code: ErrorCode,
    pub details: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, code: ErrorCode, details: Option<String>) -> Self {
        Error {
            kind,
            code,
            details,
        }
    }

    pub fn get_details(&self) -> Option<String> {
        self.details.clone()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::Import => "ImportError",
            ErrorKind::Model => "ModelError",
            ErrorKind::Conversion => "ConversionError",
        };
        match self.details {
            Some(ref details) => write!(f, "{}{{{}: {}}}", kind, self.code, details),
            None => write!(f, "{}{{{}}}", kind, self.code),
        }
    }
}

impl error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(ErrorKind::Import, ErrorCode::Io, Some(err.to_string()))
    }
}

pub type Result<T> = result::Result<T, Error>;

#[macro_export]
macro_rules! model_err(
    ($code:tt, $str:expr) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(
            ErrorKind::Model,
            ErrorCode::$code,
            Some($str),
        ))
    }};
    ($code:tt) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Model, ErrorCode::$code, None))
    }};
);

/// Which side of a chemical equation a reference came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EquationRole {
    Substrate,
    Product,
}

impl fmt::Display for EquationRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EquationRole::Substrate => write!(f, "substrate"),
            EquationRole::Product => write!(f, "product"),
        }
    }
}

/// A recoverable problem found during conversion.  Warnings never abort a
/// conversion; they are returned alongside the finished network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// A stoichiometric reference whose species was not registered when the
    /// reaction was processed.  The edge was skipped.
    UnresolvedReference {
        /// key of the reaction holding the reference
        reaction: String,
        /// canonical name of the missing species
        species: String,
        role: EquationRole,
    },
    /// Two entities shared a canonical name; the later one replaced the
    /// earlier one in the registry.
    DuplicateCanonicalName { cn: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::UnresolvedReference {
                reaction,
                species,
                role,
            } => write!(
                f,
                "reaction '{reaction}': {role} '{species}' not found, edge skipped"
            ),
            Warning::DuplicateCanonicalName { cn } => {
                write!(f, "duplicate canonical name '{cn}', last definition wins")
            }
        }
    }
}

#[test]
fn test_error_display() {
    let err = Error::new(ErrorKind::Model, ErrorCode::NoModel, None);
    assert_eq!("ModelError{no_model}", format!("{err}"));

    let err = Error::new(
        ErrorKind::Import,
        ErrorCode::JsonDeserialization,
        Some("expected value at line 1 column 1".to_owned()),
    );
    assert_eq!(
        "ImportError{json_deserialization: expected value at line 1 column 1}",
        format!("{err}")
    );
}

#[test]
fn test_model_err_macro() {
    let result: Result<()> = model_err!(NoModel);
    let err = result.unwrap_err();
    assert_eq!(ErrorKind::Model, err.kind);
    assert_eq!(ErrorCode::NoModel, err.code);
    assert_eq!(None, err.get_details());

    let result: Result<()> = model_err!(Generic, "bad".to_owned());
    assert_eq!(Some("bad".to_owned()), result.unwrap_err().get_details());
}

#[test]
fn test_warning_display() {
    let w = Warning::UnresolvedReference {
        reaction: "Reaction_0".to_owned(),
        species: "CN=Root,Model=m,Vector=Compartments[c],Vector=Metabolites[X]".to_owned(),
        role: EquationRole::Product,
    };
    let display = format!("{w}");
    assert!(display.contains("Reaction_0"));
    assert!(display.contains("product"));
    assert!(display.contains("Metabolites[X]"));

    let w = Warning::DuplicateCanonicalName {
        cn: "CN=Root".to_owned(),
    };
    assert!(format!("{w}").contains("CN=Root"));
}
