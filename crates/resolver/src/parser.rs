//! XML response parsing.
//!
//! The service wraps every answer in a document of this shape:
//!
//! ```text
//! <request string="Morphine" representation="stdinchi">
//!   <data id="1" resolver="name_by_cir" string_class="chemical name" notation="Morphine">
//!     <item id="1">InChI=1S/...</item>
//!   </data>
//! </request>
//! ```
//!
//! Each `data` element (at any depth, in document order) becomes one
//! [`ResolutionResult`]. Order is significant: it reflects resolver priority.

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::errors::{CirError, Result};
use crate::models::{ResolutionResult, ResolvedValue};

const ROOT_ELEMENT: &[u8] = b"request";

/// Parse a response body into results, in document order.
///
/// `requested_input` and `requested_representation` are used when the root
/// element does not carry `string` / `representation` attributes.
///
/// Zero `data` elements is a valid answer and yields an empty vector. A body
/// that is not a single well-formed `request` document yields
/// [`CirError::UnparseableResponse`].
pub fn parse_response(
    body: &[u8],
    requested_input: &str,
    requested_representation: &str,
) -> Result<Vec<ResolutionResult>> {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut state = ParseState::default();

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| {
            CirError::unparseable(format!("{} (at byte {})", e, reader.buffer_position()))
        })?;

        match event {
            Event::Start(e) => {
                state.ensure_single_root(depth)?;
                depth += 1;
                state.open(&e, depth)?;
            }
            Event::Empty(e) => {
                state.ensure_single_root(depth)?;
                state.open(&e, depth + 1)?;
                state.close(depth + 1);
            }
            Event::End(_) => {
                if depth == 0 {
                    return Err(CirError::unparseable("closing tag without opening tag"));
                }
                state.close(depth);
                depth -= 1;
            }
            Event::Text(e) => {
                if depth == 0 && !e.iter().all(u8::is_ascii_whitespace) {
                    return Err(CirError::unparseable("text outside the root element"));
                }
                if state.is_capturing(depth) {
                    let text = e
                        .unescape()
                        .map_err(|e| CirError::unparseable(format!("invalid item text: {}", e)))?;
                    state.push_text(&text);
                }
            }
            Event::CData(e) => {
                if depth == 0 {
                    return Err(CirError::unparseable("CDATA outside the root element"));
                }
                if state.is_capturing(depth) {
                    let bytes = e.into_inner();
                    let text = std::str::from_utf8(&bytes).map_err(|e| {
                        CirError::unparseable(format!("invalid CDATA section: {}", e))
                    })?;
                    state.push_text(text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(CirError::unparseable("unexpected end of document"));
    }
    let Some(root) = state.root else {
        return Err(CirError::unparseable("no element found"));
    };

    let input = root.input.unwrap_or_else(|| requested_input.to_string());
    let representation = root
        .representation
        .unwrap_or_else(|| requested_representation.to_string());

    debug!(
        "Parsed {} result(s) for '{}' ({})",
        state.records.len(),
        input,
        representation
    );

    Ok(state
        .records
        .into_iter()
        .map(|record| ResolutionResult {
            input: input.clone(),
            representation: representation.clone(),
            resolver: record.resolver,
            input_format: record.input_format,
            notation: record.notation,
            value: ResolvedValue::from_items(record.items),
        })
        .collect())
}

#[derive(Default)]
struct RootAttributes {
    input: Option<String>,
    representation: Option<String>,
}

struct DataRecord {
    resolver: String,
    notation: String,
    input_format: String,
    items: Vec<String>,
}

#[derive(Default)]
struct ParseState {
    root: Option<RootAttributes>,
    records: Vec<DataRecord>,
    /// Open `data` elements as (depth, index into `records`)
    open_data: Vec<(usize, usize)>,
    /// The `item` being read as (depth, text so far)
    item: Option<(usize, String)>,
}

impl ParseState {
    /// A document has exactly one top-level element.
    fn ensure_single_root(&self, depth: usize) -> Result<()> {
        if depth == 0 && self.root.is_some() {
            return Err(CirError::unparseable("content after the root element"));
        }
        Ok(())
    }

    fn open(&mut self, element: &BytesStart<'_>, depth: usize) -> Result<()> {
        if depth == 1 && self.root.is_none() {
            if element.local_name().as_ref() != ROOT_ELEMENT {
                return Err(CirError::unparseable(format!(
                    "unexpected root element <{}>",
                    String::from_utf8_lossy(element.name().as_ref())
                )));
            }
            self.root = Some(RootAttributes {
                input: attribute(element, b"string")?,
                representation: attribute(element, b"representation")?,
            });
        }

        match element.local_name().as_ref() {
            b"data" => {
                self.records.push(DataRecord {
                    resolver: attribute(element, b"resolver")?.unwrap_or_default(),
                    notation: attribute(element, b"notation")?.unwrap_or_default(),
                    input_format: attribute(element, b"string_class")?.unwrap_or_default(),
                    items: Vec::new(),
                });
                self.open_data.push((depth, self.records.len() - 1));
            }
            b"item" => {
                let is_direct_child = self
                    .open_data
                    .last()
                    .is_some_and(|(data_depth, _)| depth == data_depth + 1);
                if is_direct_child {
                    self.item = Some((depth, String::new()));
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, depth: usize) {
        if self.item.as_ref().is_some_and(|(d, _)| *d == depth) {
            if let (Some((_, text)), Some((_, index))) = (self.item.take(), self.open_data.last()) {
                self.records[*index].items.push(text);
            }
        }
        if self.open_data.last().is_some_and(|(d, _)| *d == depth) {
            self.open_data.pop();
        }
    }

    fn is_capturing(&self, depth: usize) -> bool {
        self.item.as_ref().is_some_and(|(d, _)| *d == depth)
    }

    fn push_text(&mut self, text: &str) {
        if let Some((_, buffer)) = self.item.as_mut() {
            buffer.push_str(text);
        }
    }
}

/// Read and unescape a single attribute by name.
fn attribute(element: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| CirError::unparseable(format!("invalid attribute: {}", e)))?;
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|e| CirError::unparseable(format!("invalid attribute value: {}", e)))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
