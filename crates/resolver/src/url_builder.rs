//! Resolver URL construction.
//!
//! Turns a [`ResolutionRequest`] into the single URL the service expects:
//!
//! ```text
//! {base}/{encoded identifier}/{representation}[/xml]?[resolver=r1,r2][&get3d=true][&<extra options>]
//! ```
//!
//! Construction is pure and never fails. A malformed identifier simply yields
//! a URL the service will reject.

use std::borrow::Cow;

use url::form_urlencoded;

use crate::models::{QueryOptions, ResolutionRequest};

/// Default endpoint of the Chemical Identifier Resolver.
pub const API_BASE: &str = "https://cactus.nci.nih.gov/chemical/structure";

const TAUTOMERS_PREFIX: &str = "tautomers:";

/// Build the URL for `request` against `base_url`.
///
/// # Examples
///
/// ```
/// use cir_resolver::{build_url, ResolutionRequest};
///
/// let request = ResolutionRequest::new("C#N", "smiles").with_resolvers(["smiles"]);
/// assert_eq!(
///     build_url("https://cactus.nci.nih.gov/chemical/structure", &request),
///     "https://cactus.nci.nih.gov/chemical/structure/C%23N/smiles/xml?resolver=smiles"
/// );
/// ```
pub fn build_url(base_url: &str, request: &ResolutionRequest) -> String {
    let identifier: Cow<'_, str> = if request.tautomers {
        Cow::Owned(format!("{}{}", TAUTOMERS_PREFIX, request.identifier))
    } else {
        Cow::Borrowed(&request.identifier)
    };

    let mut url = format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        encode_identifier(&identifier),
        request.wire_representation()
    );
    if request.xml {
        url.push_str("/xml");
    }

    let query = encode_query(&query_options(request));
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url
}

/// Percent-encode an identifier for the URL path.
///
/// Everything outside the unreserved set is escaped (`#` → `%23`, space →
/// `%20`, `,` → `%2C`). `/` stays literal so InChI layers keep their
/// separators.
pub fn encode_identifier(identifier: &str) -> String {
    identifier
        .split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

/// Collect the query options in wire order: `resolver`, `get3d`, then the
/// extra options in insertion order, with `format` set for file formats.
fn query_options(request: &ResolutionRequest) -> QueryOptions {
    let mut options = QueryOptions::new();
    let has_resolvers = !request.resolvers.is_empty();

    if has_resolvers {
        options.set("resolver", request.resolvers.join(","));
    }
    if request.get3d {
        options.set("get3d", true);
    }

    for (name, value) in request.options.iter() {
        let shadowed = (name == "resolver" && has_resolvers) || (name == "get3d" && request.get3d);
        if !shadowed {
            options.set(name, value.clone());
        }
    }

    if request.is_file_format() {
        options.set("format", request.representation.as_str());
    }
    options
}

fn encode_query(options: &QueryOptions) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in options.iter() {
        serializer.append_pair(name, &value.to_string());
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FILE_FORMATS;

    const BASE: &str = "https://cactus.nci.nih.gov/chemical/structure";

    fn url(request: &ResolutionRequest) -> String {
        build_url(BASE, request)
    }

    #[test]
    fn test_hash_is_escaped() {
        let request = ResolutionRequest::new("C#N", "smiles").with_resolvers(["smiles"]);
        assert_eq!(url(&request), format!("{}/C%23N/smiles/xml?resolver=smiles", BASE));
    }

    #[test]
    fn test_plain_request_has_no_query() {
        let request = ResolutionRequest::new("Morphine", "stdinchi");
        assert_eq!(url(&request), format!("{}/Morphine/stdinchi/xml", BASE));
    }

    #[test]
    fn test_without_xml_wrapper() {
        let request = ResolutionRequest::new("Morphine", "stdinchi").with_xml(false);
        assert_eq!(url(&request), format!("{}/Morphine/stdinchi", BASE));
    }

    #[test]
    fn test_identifier_escaping() {
        assert_eq!(encode_identifier("acetic acid"), "acetic%20acid");
        assert_eq!(encode_identifier("2,4,6-trinitrotoluene"), "2%2C4%2C6-trinitrotoluene");
        assert_eq!(encode_identifier("CC(=O)O"), "CC%28%3DO%29O");
        assert_eq!(encode_identifier("50-00-0"), "50-00-0");
        assert_eq!(encode_identifier("100%?"), "100%25%3F");
    }

    #[test]
    fn test_inchi_keeps_layer_separators() {
        assert_eq!(
            encode_identifier("InChI=1S/CH4/h1H4"),
            "InChI%3D1S/CH4/h1H4"
        );
    }

    #[test]
    fn test_resolvers_are_comma_joined() {
        let request = ResolutionRequest::new("2,4,6-trinitrotoluene", "smiles")
            .with_resolvers(["name_by_opsin", "name_by_cir"]);
        assert_eq!(
            url(&request),
            format!(
                "{}/2%2C4%2C6-trinitrotoluene/smiles/xml?resolver=name_by_opsin%2Cname_by_cir",
                BASE
            )
        );
    }

    #[test]
    fn test_get3d_and_extra_options_order() {
        let request = ResolutionRequest::new("Aspirin", "sdf")
            .with_option("width", 300)
            .with_option("frame", true)
            .with_resolvers(["name_by_cir"])
            .with_get3d(true);
        assert_eq!(
            url(&request),
            format!(
                "{}/Aspirin/sdf/xml?resolver=name_by_cir&get3d=true&width=300&frame=true",
                BASE
            )
        );
    }

    #[test]
    fn test_get3d_omitted_when_false() {
        let request = ResolutionRequest::new("Aspirin", "sdf").with_get3d(false);
        assert!(!url(&request).contains("get3d"));
    }

    #[test]
    fn test_tautomers_prefix() {
        let request = ResolutionRequest::new("warfarin", "smiles").with_tautomers(true);
        assert_eq!(url(&request), format!("{}/tautomers%3Awarfarin/smiles/xml", BASE));
    }

    #[test]
    fn test_every_file_format_targets_file_endpoint() {
        for token in FILE_FORMATS {
            let request = ResolutionRequest::new("Aspirin", *token);
            assert_eq!(
                url(&request),
                format!("{}/Aspirin/file/xml?format={}", BASE, token)
            );

            let request = ResolutionRequest::new("Aspirin", *token).with_xml(false);
            assert_eq!(url(&request), format!("{}/Aspirin/file?format={}", BASE, token));
        }
    }

    #[test]
    fn test_file_format_overrides_caller_format_option() {
        let request = ResolutionRequest::new("Aspirin", "pdb").with_option("format", "xyz");
        assert_eq!(url(&request), format!("{}/Aspirin/file/xml?format=pdb", BASE));
    }

    #[test]
    fn test_typed_fields_shadow_extra_options() {
        let request = ResolutionRequest::new("Aspirin", "smiles")
            .with_option("resolver", "ignored")
            .with_resolvers(["name_by_cir"]);
        assert_eq!(
            url(&request),
            format!("{}/Aspirin/smiles/xml?resolver=name_by_cir", BASE)
        );

        // Without typed resolvers the extra option is forwarded verbatim.
        let request = ResolutionRequest::new("Aspirin", "smiles").with_option("resolver", "cas_number");
        assert_eq!(
            url(&request),
            format!("{}/Aspirin/smiles/xml?resolver=cas_number", BASE)
        );
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let request = ResolutionRequest::new("Aspirin", "smiles");
        assert_eq!(
            build_url("https://example.org/structure/", &request),
            "https://example.org/structure/Aspirin/smiles/xml"
        );
    }

    #[test]
    fn test_deterministic() {
        let request = ResolutionRequest::new("C#N", "names")
            .with_resolvers(["smiles", "name_by_cir"])
            .with_option("header", "hydrogen cyanide")
            .with_option("width", 250);
        assert_eq!(url(&request), url(&request.clone()));
    }

    #[test]
    fn test_distinct_inputs_give_distinct_urls() {
        let base = ResolutionRequest::new("Aspirin", "smiles").with_resolvers(["name_by_cir"]);
        let variants = vec![
            base.clone(),
            ResolutionRequest {
                identifier: "Aspirine".to_string(),
                ..base.clone()
            },
            ResolutionRequest {
                representation: "stdinchi".to_string(),
                ..base.clone()
            },
            base.clone().with_resolvers(["name_by_opsin"]),
            base.clone().with_resolvers(["name_by_cir", "name_by_opsin"]),
            base.clone().with_get3d(true),
            base.clone().with_tautomers(true),
            base.clone().with_xml(false),
            base.clone().with_option("width", 300),
            base.clone().with_option("width", 301),
        ];

        let urls: Vec<String> = variants.iter().map(url).collect();
        for (i, a) in urls.iter().enumerate() {
            for b in urls.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_query_values_are_form_encoded() {
        let request = ResolutionRequest::new("Aspirin", "image")
            .with_xml(false)
            .with_option("header", "acetylsalicylic acid & co");
        assert_eq!(
            url(&request),
            format!("{}/Aspirin/image?header=acetylsalicylic+acid+%26+co", BASE)
        );
    }
}
