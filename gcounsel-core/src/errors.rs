use std::fmt::{self, Display};

use thiserror::Error;

/// The public data sources gcounsel talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream {
    Ensembl,
    MyGene,
}

impl Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Ensembl => write!(f, "Ensembl"),
            Upstream::MyGene => write!(f, "mygene.info"),
        }
    }
}

///
/// A request to an upstream data source that did not produce usable data.
///
/// `status` is set when the server answered with a non-success HTTP status; it is `None`
/// for transport and decoding failures.
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{upstream} request failed{}: {message}", status_suffix(.status))]
pub struct UpstreamError {
    pub upstream: Upstream,
    pub status: Option<u16>,
    pub message: String,
}

impl UpstreamError {
    pub fn new(upstream: Upstream, status: Option<u16>, message: impl Into<String>) -> Self {
        UpstreamError {
            upstream,
            status,
            message: message.into(),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" with status {code}"),
        None => String::new(),
    }
}
