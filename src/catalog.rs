//! Static catalog data: gear types, their zones, and the swatch palette.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ValidationError;

/// Default palette page size.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Color used wherever a style has no value for a zone (or no style is selected).
pub const DEFAULT_COLOR: Hex = Hex::new(0x7F, 0x8C, 0x8D);

/// A 24-bit RGB color written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hex {
    rgb: [u8; 3],
}

impl Hex {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            rgb: [red, green, blue],
        }
    }

    /// Parse a strict `#RRGGBB` value (case-insensitive).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let malformed = || ValidationError::MalformedColor {
            input: input.to_string(),
        };

        let digits = input.strip_prefix('#').ok_or_else(malformed)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(malformed());
        }

        let srgb = Srgb::<u8>::from_str(digits).map_err(|_| malformed())?;
        Ok(Self::from(srgb))
    }

    /// Components as a tuple, for terminal color construction.
    pub fn rgb(self) -> (u8, u8, u8) {
        let [r, g, b] = self.rgb;
        (r, g, b)
    }

    /// Perceived brightness on a 0-255 scale.
    pub fn luminance(self) -> f32 {
        let [r, g, b] = self.rgb;
        0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b)
    }
}

impl From<Srgb<u8>> for Hex {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for Hex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Hex {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Hex> for String {
    fn from(hex: Hex) -> Self {
        hex.to_string()
    }
}

/// Equipment category being customized.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GearType {
    #[default]
    Gloves,
    Shorts,
    Boots,
}

impl GearType {
    /// All gear types in display order.
    pub const ALL: [GearType; 3] = [GearType::Gloves, GearType::Shorts, GearType::Boots];

    /// Stable lowercase identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Gloves => "gloves",
            Self::Shorts => "shorts",
            Self::Boots => "boots",
        }
    }

    /// Position in [`GearType::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Gloves => 0,
            Self::Shorts => 1,
            Self::Boots => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for GearType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a gear identifier does not name a known gear type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown gear type '{0}' (expected gloves, shorts or boots)")]
pub struct UnknownGear(pub String);

impl FromStr for GearType {
    type Err = UnknownGear;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownGear(s.to_string()))
    }
}

/// Outline used by renderers to draw the live preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewShape {
    Gloves,
    Shorts,
    Boots,
}

/// A separately colorable region of a gear type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneDef {
    pub id: String,
    pub label: String,
}

impl ZoneDef {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Definition of one gear type: display label, ordered zones, preview outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearDef {
    pub label: String,
    pub zones: Vec<ZoneDef>,
    pub preview: PreviewShape,
}

/// One selectable swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub name: String,
    pub color: Hex,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, color: Hex) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Standard palette in display order.
const STANDARD_PALETTE: [(&str, Hex); 12] = [
    ("Red", Hex::new(0xC0, 0x39, 0x2B)),
    ("Blue", Hex::new(0x2E, 0x86, 0xC1)),
    ("Black", Hex::new(0x1C, 0x1C, 0x1C)),
    ("White", Hex::new(0xF4, 0xF6, 0xF6)),
    ("Grey", Hex::new(0x7F, 0x8C, 0x8D)),
    ("Green", Hex::new(0x2E, 0x8B, 0x57)),
    ("Orange", Hex::new(0xE6, 0x7E, 0x22)),
    ("Yellow", Hex::new(0xF1, 0xC4, 0x0F)),
    ("Pink", Hex::new(0xEB, 0xDE, 0xF0)),
    ("Purple", Hex::new(0x7D, 0x3C, 0x98)),
    ("Teal", Hex::new(0x16, 0xA0, 0x85)),
    ("Tan", Hex::new(0xD2, 0xB4, 0x8C)),
];

/// Immutable catalog shared by the engine and the view projector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    palette: Vec<PaletteEntry>,
    gears: [GearDef; 3],
    page_size: usize,
}

impl Catalog {
    /// Build a catalog from explicit data. `gears` is indexed by [`GearType::index`].
    /// A page size of zero is raised to one.
    pub fn new(palette: Vec<PaletteEntry>, gears: [GearDef; 3], page_size: usize) -> Self {
        Self {
            palette,
            gears,
            page_size: page_size.max(1),
        }
    }

    /// The 12-color palette and the gloves/shorts/boots zone layout.
    pub fn standard() -> Self {
        let palette = STANDARD_PALETTE
            .iter()
            .map(|(name, color)| PaletteEntry::new(*name, *color))
            .collect();

        let gears = [
            GearDef {
                label: "GLOVES".to_string(),
                zones: vec![
                    ZoneDef::new("body", "BODY"),
                    ZoneDef::new("cuff", "CUFF"),
                    ZoneDef::new("stripe", "STRIPE"),
                ],
                preview: PreviewShape::Gloves,
            },
            GearDef {
                label: "SHORTS".to_string(),
                zones: vec![
                    ZoneDef::new("body", "BODY"),
                    ZoneDef::new("waist", "WAIST"),
                    ZoneDef::new("stripe", "STRIPE"),
                ],
                preview: PreviewShape::Shorts,
            },
            GearDef {
                label: "BOOTS".to_string(),
                zones: vec![
                    ZoneDef::new("body", "BODY"),
                    ZoneDef::new("trim", "TRIM"),
                    ZoneDef::new("accent", "ACCENT"),
                ],
                preview: PreviewShape::Boots,
            },
        ];

        Self::new(palette, gears, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn palette(&self) -> &[PaletteEntry] {
        &self.palette
    }

    pub fn gear(&self, gear: GearType) -> &GearDef {
        &self.gears[gear.index()]
    }

    pub fn zones(&self, gear: GearType) -> &[ZoneDef] {
        &self.gear(gear).zones
    }

    pub fn zone_count(&self, gear: GearType) -> usize {
        self.zones(gear).len()
    }

    /// Zone definition at `index` for `gear`, if in range.
    pub fn zone(&self, gear: GearType, index: usize) -> Option<&ZoneDef> {
        self.zones(gear).get(index)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of palette pages; an empty palette still has one (empty) page.
    pub fn total_pages(&self) -> usize {
        self.palette.len().div_ceil(self.page_size).max(1)
    }

    /// Entries shown on `page`, with their absolute palette indices.
    pub fn page(&self, page: usize) -> impl Iterator<Item = (usize, &PaletteEntry)> {
        self.palette
            .iter()
            .enumerate()
            .skip(page.saturating_mul(self.page_size))
            .take(self.page_size)
    }

    pub fn contains_color(&self, color: Hex) -> bool {
        self.palette.iter().any(|entry| entry.color == color)
    }

    /// Look up a swatch by name (case-insensitive).
    pub fn named(&self, name: &str) -> Option<&PaletteEntry> {
        self.palette
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
