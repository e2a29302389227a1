//! In-memory transport and response fixtures shared by unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::errors::Result;
use crate::transport::{HttpResponse, Transport};

pub const BASE: &str = "https://cir.test/chemical/structure";

pub const NOT_FOUND_PAGE: &str = "<h1>Page not found (404)</h1>";

pub const MORPHINE_INCHI: &str = "InChI=1/C17H19NO3/c1-18-7-6-17-10-3-5-13(20)16(17)21-15-12(19)4-2-9(14(15)17)8-11(10)18/h2-5,10-11,13,16,19-20H,6-8H2,1H3/t10-,11+,13?,16-,17-/m0/s1";

pub const TNT_OPSIN_SMILES: &str = "[N+](=O)([O-])C1=C(C(=CC(=C1)[N+](=O)[O-])[N+](=O)[O-])C";
pub const TNT_CIR_SMILES: &str = "C1=C(C=C(C(=C1[N+]([O-])=O)C)[N+]([O-])=O)[N+]([O-])=O";

pub fn morphine_inchi_xml() -> String {
    format!(
        r#"<request string="Morphine" representation="inchi"><data id="1" resolver="name_by_cir" string_class="chemical name" notation="Morphine"><item id="1">{}</item></data></request>"#,
        MORPHINE_INCHI
    )
}

/// TNT answered by both name resolvers, `first` listed first.
pub fn tnt_smiles_xml(first: &str, second: &str) -> String {
    let data = |resolver: &str, id: usize| {
        let (notation, smiles) = if resolver == "name_by_opsin" {
            ("2,4,6-trinitrotoluene", TNT_OPSIN_SMILES)
        } else {
            ("2,4,6-Trinitrotoluene", TNT_CIR_SMILES)
        };
        format!(
            r#"  <data id="{id}" resolver="{resolver}" string_class="chemical name" notation="{notation}">
    <item id="1" classification="SMILES">{smiles}</item>
  </data>
"#
        )
    };
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<request string=\"2,4,6-trinitrotoluene\" representation=\"smiles\">\n{}{}</request>\n",
        data(first, 1),
        data(second, 2)
    )
}

pub fn empty_xml(input: &str, representation: &str) -> String {
    format!(
        r#"<request string="{}" representation="{}"></request>"#,
        input, representation
    )
}

/// Transport answering from a fixed URL → response table.
///
/// Unknown URLs get the service's 404 page. Every requested URL is recorded.
#[derive(Default)]
pub struct MockTransport {
    routes: HashMap<String, HttpResponse>,
    requests: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `status` and `body`. `url` is relative to [`BASE`].
    pub fn route(mut self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes
            .insert(format!("{}{}", BASE, url), HttpResponse::new(status, body));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(self
            .routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| HttpResponse::new(404, NOT_FOUND_PAGE)))
    }
}
