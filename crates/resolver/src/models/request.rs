//! The resolution request consumed by the URL builder.

use serde::{Deserialize, Serialize};

use super::formats::{is_file_format, FILE_REPRESENTATION};
use super::options::{OptionValue, QueryOptions};

/// Everything needed to build one resolver URL.
///
/// `representation` is the caller-visible name. For file-format tokens the
/// request is sent to the `file` endpoint instead (see
/// [`wire_representation`](Self::wire_representation)).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRequest {
    /// Chemical identifier to resolve (name, SMILES, CAS number, InChI, ...)
    pub identifier: String,

    /// Requested output representation (e.g., "smiles", "stdinchikey", "mol")
    pub representation: String,

    /// Resolver names in priority order. Empty uses the service default order.
    #[serde(default)]
    pub resolvers: Vec<String>,

    /// Ask the service for 3D coordinates
    #[serde(default)]
    pub get3d: bool,

    /// Expand the identifier into all of its tautomers
    #[serde(default)]
    pub tautomers: bool,

    /// Request the XML-wrapped answer
    #[serde(default = "default_xml")]
    pub xml: bool,

    /// Extra options forwarded verbatim as query parameters
    #[serde(default)]
    pub options: QueryOptions,
}

fn default_xml() -> bool {
    true
}

impl ResolutionRequest {
    /// Create an XML request with default resolvers and no extra options.
    pub fn new(identifier: impl Into<String>, representation: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            representation: representation.into(),
            resolvers: Vec::new(),
            get3d: false,
            tautomers: false,
            xml: true,
            options: QueryOptions::new(),
        }
    }

    /// Set the resolver priority list.
    pub fn with_resolvers<I, S>(mut self, resolvers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resolvers = resolvers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_get3d(mut self, get3d: bool) -> Self {
        self.get3d = get3d;
        self
    }

    pub fn with_tautomers(mut self, tautomers: bool) -> Self {
        self.tautomers = tautomers;
        self
    }

    pub fn with_xml(mut self, xml: bool) -> Self {
        self.xml = xml;
        self
    }

    /// Add a single extra option.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.set(name, value);
        self
    }

    /// Merge a set of extra options, overriding names already present.
    pub fn with_options(mut self, options: &QueryOptions) -> Self {
        self.options.merge(options);
        self
    }

    /// Whether the representation is a file-format token.
    pub fn is_file_format(&self) -> bool {
        is_file_format(&self.representation)
    }

    /// The representation segment actually sent to the service.
    pub fn wire_representation(&self) -> &str {
        if self.is_file_format() {
            FILE_REPRESENTATION
        } else {
            &self.representation
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = ResolutionRequest::new("Aspirin", "smiles");
        assert_eq!(request.identifier, "Aspirin");
        assert_eq!(request.representation, "smiles");
        assert!(request.resolvers.is_empty());
        assert!(!request.get3d);
        assert!(!request.tautomers);
        assert!(request.xml);
        assert!(request.options.is_empty());
    }

    #[test]
    fn test_builder_setters() {
        let request = ResolutionRequest::new("Aspirin", "sdf")
            .with_resolvers(["name_by_opsin", "name_by_cir"])
            .with_get3d(true)
            .with_tautomers(true)
            .with_xml(false)
            .with_option("width", 300);

        assert_eq!(request.resolvers, vec!["name_by_opsin", "name_by_cir"]);
        assert!(request.get3d);
        assert!(request.tautomers);
        assert!(!request.xml);
        assert_eq!(request.options.get("width"), Some(&OptionValue::Int(300)));
    }

    #[test]
    fn test_deserialize_minimal_request_uses_defaults() {
        let request: ResolutionRequest =
            serde_json::from_str(r#"{"identifier":"x","representation":"smiles"}"#).unwrap();
        assert_eq!(request, ResolutionRequest::new("x", "smiles"));

        let request: ResolutionRequest =
            serde_json::from_str(r#"{"identifier":"x","representation":"smiles","xml":false}"#)
                .unwrap();
        assert!(!request.xml);
    }

    #[test]
    fn test_wire_representation_for_file_formats() {
        let request = ResolutionRequest::new("Aspirin", "mol2");
        assert!(request.is_file_format());
        assert_eq!(request.wire_representation(), "file");
        assert_eq!(request.representation, "mol2");

        let request = ResolutionRequest::new("Aspirin", "smiles");
        assert!(!request.is_file_format());
        assert_eq!(request.wire_representation(), "smiles");
    }
}
