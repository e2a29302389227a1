//! Representation names that change how a request is sent.

/// Representation tokens the service serves through its generic `file` endpoint.
///
/// Requesting one of these is rewritten to `file` with the token passed as the
/// `format` query option.
pub const FILE_FORMATS: &[&str] = &[
    "alc",
    "cdxml",
    "cerius",
    "charmm",
    "cif",
    "cml",
    "ctx",
    "gjf",
    "gromacs",
    "hyperchem",
    "jme",
    "maestro",
    "mol",
    "mol2",
    "mrv",
    "pdb",
    "sdf3000",
    "sln",
    "xyz",
];

/// Wire representation used for every file-format token.
pub const FILE_REPRESENTATION: &str = "file";

/// Wire representation returning a rendered structure image.
pub const IMAGE_REPRESENTATION: &str = "image";

/// Wire representation returning the interactive 3D viewer page.
pub const TWIRL_REPRESENTATION: &str = "twirl";

/// Whether `representation` is served through the `file` endpoint.
pub fn is_file_format(representation: &str) -> bool {
    FILE_FORMATS.contains(&representation)
}
