//! CIR Resolver Crate
//!
//! A client for the NCI/CADD Chemical Identifier Resolver: turn any chemical
//! identifier (name, SMILES, CAS number, InChI, ...) into other
//! representations, computed properties, files or structure images.
//!
//! # Architecture
//!
//! ```text
//! +--------------------+
//! | ResolutionRequest  |  (identifier, representation, resolvers, options)
//! +--------------------+
//!           |
//!           v
//! +--------------------+
//! |    build_url       |  (pure, deterministic)
//! +--------------------+
//!           |
//!           v
//! +--------------------+
//! |    Transport       |  (one blocking GET, reqwest by default)
//! +--------------------+
//!           |
//!           v
//! +--------------------+
//! |  parse_response    |  (XML -> Vec<ResolutionResult>, document order)
//! +--------------------+
//!           |
//!           v
//! +--------------------+     +--------------------+
//! |     CirClient      | <-- |     Molecule       |  (memoized per property)
//! +--------------------+     +--------------------+
//! ```
//!
//! # Core Types
//!
//! - [`ResolutionRequest`] - Everything needed to build one request URL
//! - [`ResolutionResult`] - One resolver's answer, with its [`ResolvedValue`]
//! - [`CirClient`] - `query`, `resolve`, `resolve_image` and file export
//! - [`Molecule`] - An identifier with lazily fetched, cached properties
//! - [`CirError`] - Every failure the crate reports
//!
//! # Quick start
//!
//! ```no_run
//! use cir_resolver::ResolutionRequest;
//!
//! let request = ResolutionRequest::new("Aspirin", "smiles");
//! if let Some(smiles) = cir_resolver::resolve(&request)? {
//!     println!("{}", smiles);
//! }
//! # Ok::<(), cir_resolver::CirError>(())
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod molecule;
pub mod parser;
pub mod transport;
pub mod url_builder;

#[cfg(test)]
mod test_support;

use std::path::Path;

pub use client::{CirClient, DownloadOutcome, ImageFormat, ImageOptions, SymbolMode};
pub use config::ClientConfig;
pub use errors::{CirError, Result};
pub use models::{
    is_file_format, OptionValue, QueryOptions, ResolutionRequest, ResolutionResult,
    ResolvedValue, FILE_FORMATS,
};
pub use molecule::{Molecule, Property};
pub use parser::parse_response;
pub use transport::{HttpResponse, HttpTransport, Transport};
pub use url_builder::{build_url, encode_identifier, API_BASE};

// Convenience functions: each builds a client from the environment and
// performs a single call.

/// Fetch every result for `request`. See [`CirClient::query`].
pub fn query(request: &ResolutionRequest) -> Result<Vec<ResolutionResult>> {
    CirClient::from_env()?.query(request)
}

/// Resolve `request` to its top-priority value. See [`CirClient::resolve`].
pub fn resolve(request: &ResolutionRequest) -> Result<Option<ResolvedValue>> {
    CirClient::from_env()?.resolve(request)
}

/// Fetch a rendered structure image. See [`CirClient::resolve_image`].
pub fn resolve_image<S: AsRef<str>>(
    identifier: &str,
    resolvers: &[S],
    options: &ImageOptions,
) -> Result<Vec<u8>> {
    CirClient::from_env()?.resolve_image(identifier, resolvers, options)
}

/// Resolve `request` and write the value to `path`. See [`CirClient::download`].
pub fn download(
    request: &ResolutionRequest,
    path: impl AsRef<Path>,
    overwrite: bool,
) -> Result<DownloadOutcome> {
    CirClient::from_env()?.download(request, path, overwrite)
}

/// The URL `request` maps to on the public service.
pub fn api_url(request: &ResolutionRequest) -> String {
    build_url(API_BASE, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_targets_public_service() {
        let request = ResolutionRequest::new("C#N", "smiles").with_resolvers(["smiles"]);
        assert_eq!(
            api_url(&request),
            "https://cactus.nci.nih.gov/chemical/structure/C%23N/smiles/xml?resolver=smiles"
        );
    }

    #[test]
    fn test_api_url_for_file_format() {
        let request = ResolutionRequest::new("Aspirin", "mol").with_get3d(true);
        assert_eq!(
            api_url(&request),
            "https://cactus.nci.nih.gov/chemical/structure/Aspirin/file/xml?get3d=true&format=mol"
        );
    }
}
