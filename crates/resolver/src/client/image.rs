//! Image rendering options.
//!
//! Every field maps to a query option of the `image` endpoint. Unset fields
//! are not sent, so the service defaults apply (300x300 PNG, special
//! hydrogen/carbon symbols, wedges on).

use serde::{Deserialize, Serialize};

use crate::models::{OptionValue, QueryOptions};

/// Image file format returned by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Gif,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Gif => "gif",
        }
    }
}

/// Which hydrogen or carbon atom symbols to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolMode {
    All,
    Special,
    None,
}

impl SymbolMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Special => "special",
            Self::None => "none",
        }
    }
}

/// Rendering options for [`CirClient::resolve_image`](super::CirClient::resolve_image).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageOptions {
    pub format: Option<ImageFormat>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Draw a frame around the image
    pub frame: Option<bool>,
    /// Crop to the structure, leaving this much padding
    pub crop: Option<u32>,
    /// Background color; `"transparent"` turns anti-aliasing off
    pub bgcolor: Option<String>,
    pub atomcolor: Option<String>,
    pub hcolor: Option<String>,
    pub bondcolor: Option<String>,
    pub framecolor: Option<String>,
    pub symbolfontsize: Option<u32>,
    pub linewidth: Option<u32>,
    pub hsymbol: Option<SymbolMode>,
    pub csymbol: Option<SymbolMode>,
    /// Label stereocenters (sent as `showstereo`)
    pub stereo_labels: Option<bool>,
    /// Draw wedge and dash bonds (sent as `wedges` and `dashes`)
    pub stereo_wedges: Option<bool>,
    pub header: Option<String>,
    pub footer: Option<String>,
    /// Any other option, forwarded verbatim
    #[serde(default)]
    pub extra: QueryOptions,
}

impl ImageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_frame(mut self, frame: bool) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn with_crop(mut self, padding: u32) -> Self {
        self.crop = Some(padding);
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.bgcolor = Some(color.into());
        self
    }

    pub fn with_atom_color(mut self, color: impl Into<String>) -> Self {
        self.atomcolor = Some(color.into());
        self
    }

    pub fn with_hydrogen_color(mut self, color: impl Into<String>) -> Self {
        self.hcolor = Some(color.into());
        self
    }

    pub fn with_bond_color(mut self, color: impl Into<String>) -> Self {
        self.bondcolor = Some(color.into());
        self
    }

    pub fn with_frame_color(mut self, color: impl Into<String>) -> Self {
        self.framecolor = Some(color.into());
        self
    }

    pub fn with_symbol_font_size(mut self, size: u32) -> Self {
        self.symbolfontsize = Some(size);
        self
    }

    pub fn with_line_width(mut self, width: u32) -> Self {
        self.linewidth = Some(width);
        self
    }

    pub fn with_hydrogen_symbols(mut self, mode: SymbolMode) -> Self {
        self.hsymbol = Some(mode);
        self
    }

    pub fn with_carbon_symbols(mut self, mode: SymbolMode) -> Self {
        self.csymbol = Some(mode);
        self
    }

    pub fn with_stereo_labels(mut self, show: bool) -> Self {
        self.stereo_labels = Some(show);
        self
    }

    pub fn with_stereo_wedges(mut self, show: bool) -> Self {
        self.stereo_wedges = Some(show);
        self
    }

    pub fn with_header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    /// Add an option the typed fields don't cover.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.extra.set(name, value);
        self
    }

    /// Merge options the typed fields don't cover.
    pub fn with_options(mut self, options: &QueryOptions) -> Self {
        self.extra.merge(options);
        self
    }

    /// Render to wire options.
    ///
    /// Applies the service's naming rules: stereo labels become `showstereo`,
    /// stereo wedges become both `wedges` and `dashes`, and a transparent
    /// background forces `antialiasing=false`. Typed fields take precedence
    /// over `extra` options with the same wire name.
    pub fn to_query_options(&self) -> QueryOptions {
        let mut options = QueryOptions::new();

        set_opt(&mut options, "format", self.format.map(|f| f.as_str()));
        set_opt(&mut options, "width", self.width);
        set_opt(&mut options, "height", self.height);
        set_opt(&mut options, "frame", self.frame);
        set_opt(&mut options, "crop", self.crop);
        set_opt(&mut options, "bgcolor", self.bgcolor.as_deref());
        set_opt(&mut options, "atomcolor", self.atomcolor.as_deref());
        set_opt(&mut options, "hcolor", self.hcolor.as_deref());
        set_opt(&mut options, "bondcolor", self.bondcolor.as_deref());
        set_opt(&mut options, "framecolor", self.framecolor.as_deref());
        set_opt(&mut options, "symbolfontsize", self.symbolfontsize);
        set_opt(&mut options, "linewidth", self.linewidth);
        set_opt(&mut options, "hsymbol", self.hsymbol.map(|m| m.as_str()));
        set_opt(&mut options, "csymbol", self.csymbol.map(|m| m.as_str()));
        set_opt(&mut options, "showstereo", self.stereo_labels);
        set_opt(&mut options, "wedges", self.stereo_wedges);
        set_opt(&mut options, "dashes", self.stereo_wedges);
        set_opt(&mut options, "header", self.header.as_deref());
        set_opt(&mut options, "footer", self.footer.as_deref());

        for (name, value) in self.extra.iter() {
            if !options.contains(name) {
                options.set(name, value.clone());
            }
        }

        let transparent = matches!(
            options.get("bgcolor"),
            Some(OptionValue::Text(color)) if color == "transparent"
        );
        if transparent {
            options.set("antialiasing", false);
        }

        options
    }
}

fn set_opt<V: Into<OptionValue>>(options: &mut QueryOptions, name: &str, value: Option<V>) {
    if let Some(value) = value {
        options.set(name, value);
    }
}
