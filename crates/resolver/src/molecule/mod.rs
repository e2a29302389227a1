//! Identifier-as-object facade.
//!
//! A [`Molecule`] wraps one identifier plus its resolution options and exposes
//! every known representation as an accessor. Each accessor performs at most
//! one request over the molecule's lifetime:
//!
//! ```text
//! molecule.smiles() ──▶ slot[Smiles] populated? ──yes──▶ cached value
//!                              │ no
//!                              ▼
//!                  CirClient::resolve ──ok──▶ populate slot
//!                              │ err
//!                              ▼
//!                  slot stays empty, next read retries
//! ```
//!
//! An absent answer (`None`) is cached like any other value.

mod property;

use std::fmt;
use std::path::Path;

use log::debug;
use once_cell::unsync::OnceCell;

pub use property::Property;

use crate::client::{image_request, CirClient, DownloadOutcome, ImageOptions};
use crate::errors::Result;
use crate::models::{
    OptionValue, QueryOptions, ResolutionRequest, ResolvedValue, TWIRL_REPRESENTATION,
};
use crate::transport::{HttpTransport, Transport};

type Slot = OnceCell<Option<ResolvedValue>>;

/// A chemical identifier with lazily fetched, memoized representations.
///
/// Slots are single-threaded lazy cells: a `Molecule` can be moved between
/// threads but not shared by reference across them.
///
/// # Examples
///
/// ```no_run
/// use cir_resolver::Molecule;
///
/// let molecule = Molecule::new("Morphine")?.with_resolvers(["name_by_cir"]);
/// if let Some(formula) = molecule.formula()? {
///     println!("{}", formula);
/// }
/// # Ok::<(), cir_resolver::CirError>(())
/// ```
pub struct Molecule<T = HttpTransport> {
    identifier: String,
    resolvers: Vec<String>,
    options: QueryOptions,
    client: CirClient<T>,
    slots: [Slot; Property::COUNT],
    image: OnceCell<Vec<u8>>,
}

impl Molecule<HttpTransport> {
    /// Create a molecule backed by a client configured from the environment.
    pub fn new(identifier: impl Into<String>) -> Result<Self> {
        Ok(Self::with_client(CirClient::from_env()?, identifier))
    }
}

impl<T: Transport> Molecule<T> {
    pub fn with_client(client: CirClient<T>, identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            resolvers: Vec::new(),
            options: QueryOptions::new(),
            client,
            slots: empty_slots(),
            image: OnceCell::new(),
        }
    }

    /// Set the resolver priority list. Clears every cached value.
    pub fn with_resolvers<I, S>(mut self, resolvers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resolvers = resolvers.into_iter().map(Into::into).collect();
        self.reset()
    }

    /// Add an option sent with every request. Clears every cached value.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.set(name, value);
        self.reset()
    }

    /// Merge options sent with every request. Clears every cached value.
    pub fn with_options(mut self, options: &QueryOptions) -> Self {
        self.options.merge(options);
        self.reset()
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn resolvers(&self) -> &[String] {
        &self.resolvers
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    pub fn client(&self) -> &CirClient<T> {
        &self.client
    }

    /// Read a property, fetching it on first access.
    ///
    /// A failed fetch is returned as an error and leaves the slot empty.
    pub fn get(&self, property: Property) -> Result<Option<&ResolvedValue>> {
        let value = self.slots[property.slot()].get_or_try_init(|| {
            debug!("Fetching {} for '{}'", property, self.identifier);
            self.client.resolve(&self.request(property.representation()))
        })?;
        Ok(value.as_ref())
    }

    /// Read any representation by name.
    ///
    /// Names of a [`Property`] go through its cached slot; any other
    /// representation is resolved on every call.
    pub fn lookup(&self, representation: &str) -> Result<Option<ResolvedValue>> {
        match representation.parse::<Property>() {
            Ok(property) => Ok(self.get(property)?.cloned()),
            Err(_) => self.client.resolve(&self.request(representation)),
        }
    }

    /// Whether `property` has been fetched successfully.
    pub fn is_cached(&self, property: Property) -> bool {
        self.slots[property.slot()].get().is_some()
    }

    pub fn stdinchi(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::StdInchi)
    }

    pub fn stdinchikey(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::StdInchiKey)
    }

    pub fn inchi(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::Inchi)
    }

    pub fn smiles(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::Smiles)
    }

    /// FICTS identifier (charge and tautomer sensitive)
    pub fn ficts(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::Ficts)
    }

    /// FICuS identifier (tautomer insensitive)
    pub fn ficus(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::Ficus)
    }

    /// uuuuu identifier (ignores charge, tautomers and stereochemistry)
    pub fn uuuuu(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::Uuuuu)
    }

    /// CACTVS hashcode
    pub fn hashisy(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::Hashisy)
    }

    pub fn sdf(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::Sdf)
    }

    /// All known names, usually several.
    pub fn names(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::Names)
    }

    pub fn iupac_name(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::IupacName)
    }

    /// CAS registry numbers, one or more.
    pub fn cas(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::Cas)
    }

    pub fn chemspider_id(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::ChemspiderId)
    }

    /// Molecular weight, as the service formats it.
    pub fn mw(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::Mw)
    }

    pub fn formula(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::Formula)
    }

    pub fn h_bond_donor_count(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::HBondDonorCount)
    }

    pub fn h_bond_acceptor_count(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::HBondAcceptorCount)
    }

    pub fn h_bond_center_count(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::HBondCenterCount)
    }

    pub fn rule_of_5_violation_count(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::RuleOf5ViolationCount)
    }

    pub fn rotor_count(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::RotorCount)
    }

    pub fn effective_rotor_count(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::EffectiveRotorCount)
    }

    pub fn ring_count(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::RingCount)
    }

    pub fn ringsys_count(&self) -> Result<Option<&ResolvedValue>> {
        self.get(Property::RingsysCount)
    }

    /// Rendered structure image, fetched once with the molecule's options.
    pub fn image(&self) -> Result<&[u8]> {
        let image = self.image.get_or_try_init(|| {
            debug!("Fetching image for '{}'", self.identifier);
            self.client
                .resolve_image(&self.identifier, &self.resolvers, &self.image_options())
        })?;
        Ok(image.as_slice())
    }

    /// URL of the rendered structure image. Nothing is fetched.
    pub fn image_url(&self) -> String {
        self.client.url(&image_request(
            &self.identifier,
            &self.resolvers,
            &self.image_options(),
        ))
    }

    /// URL of the interactive 3D viewer page. Nothing is fetched.
    pub fn twirl_url(&self) -> String {
        self.client.url(&self.request(TWIRL_REPRESENTATION).with_xml(false))
    }

    /// Resolve `representation` and write it to `path`.
    ///
    /// Always fetches; see [`CirClient::download`] for the overwrite and
    /// no-result rules.
    pub fn download(
        &self,
        path: impl AsRef<Path>,
        representation: &str,
        overwrite: bool,
    ) -> Result<DownloadOutcome> {
        self.client.download(&self.request(representation), path, overwrite)
    }

    fn request(&self, representation: &str) -> ResolutionRequest {
        ResolutionRequest::new(self.identifier.as_str(), representation)
            .with_resolvers(self.resolvers.iter().cloned())
            .with_options(&self.options)
    }

    fn image_options(&self) -> ImageOptions {
        ImageOptions::default().with_options(&self.options)
    }

    fn reset(mut self) -> Self {
        self.slots = empty_slots();
        self.image = OnceCell::new();
        self
    }
}

fn empty_slots() -> [Slot; Property::COUNT] {
    std::array::from_fn(|_| OnceCell::new())
}

impl<T> fmt::Display for Molecule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Molecule({:?}, {:?})", self.identifier, self.resolvers)
    }
}

impl<T> fmt::Debug for Molecule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
