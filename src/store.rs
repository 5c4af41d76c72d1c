//! Style presets per gear type.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{Catalog, DEFAULT_COLOR, GearType, Hex};

/// A named preset assigning one color per zone of its gear type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Style {
    pub id: String,
    pub name: String,
    colors: BTreeMap<String, Hex>,
}

impl Style {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        colors: impl IntoIterator<Item = (String, Hex)>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colors: colors.into_iter().collect(),
        }
    }

    /// Color for `zone_id`, falling back to [`DEFAULT_COLOR`].
    pub fn color(&self, zone_id: &str) -> Hex {
        self.colors.get(zone_id).copied().unwrap_or(DEFAULT_COLOR)
    }

    pub fn colors(&self) -> &BTreeMap<String, Hex> {
        &self.colors
    }

    pub(crate) fn set_color(&mut self, zone_id: &str, color: Hex) {
        self.colors.insert(zone_id.to_string(), color);
    }
}

/// Seed presets: (id, name, [(zone id, swatch name)]) per gear type.
type Preset = (&'static str, &'static str, [(&'static str, &'static str); 3]);

const GLOVES_PRESETS: [Preset; 3] = [
    ("style-1", "Style 1", [("body", "Red"), ("cuff", "Black"), ("stripe", "Tan")]),
    ("style-2", "Style 2", [("body", "Blue"), ("cuff", "White"), ("stripe", "Yellow")]),
    ("style-3", "Style 3", [("body", "Black"), ("cuff", "Orange"), ("stripe", "Teal")]),
];

const SHORTS_PRESETS: [Preset; 3] = [
    ("style-1", "Style 1", [("body", "Red"), ("waist", "Black"), ("stripe", "Tan")]),
    ("style-2", "Style 2", [("body", "Blue"), ("waist", "White"), ("stripe", "Yellow")]),
    ("style-3", "Style 3", [("body", "Black"), ("waist", "Orange"), ("stripe", "Teal")]),
];

const BOOTS_PRESETS: [Preset; 3] = [
    ("style-1", "Style 1", [("body", "Red"), ("trim", "Black"), ("accent", "Tan")]),
    ("style-2", "Style 2", [("body", "Blue"), ("trim", "White"), ("accent", "Yellow")]),
    ("style-3", "Style 3", [("body", "Black"), ("trim", "Orange"), ("accent", "Teal")]),
];

fn presets_for(gear: GearType) -> &'static [Preset; 3] {
    match gear {
        GearType::Gloves => &GLOVES_PRESETS,
        GearType::Shorts => &SHORTS_PRESETS,
        GearType::Boots => &BOOTS_PRESETS,
    }
}

/// Ordered style lists for every gear type. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleStore {
    styles: BTreeMap<GearType, Vec<Style>>,
}

impl StyleStore {
    /// Store with the three standard presets for every gear type.
    ///
    /// Zones the catalog defines but a preset does not mention are filled with
    /// [`DEFAULT_COLOR`]; preset zones the catalog does not define are dropped.
    pub fn seeded(catalog: &Catalog) -> Self {
        let mut store = Self::default();
        for gear in GearType::ALL {
            let styles = presets_for(gear)
                .iter()
                .map(|(id, name, colors)| {
                    let colors = catalog.zones(gear).iter().map(|zone| {
                        let color = colors
                            .iter()
                            .find(|(zone_id, _)| *zone_id == zone.id)
                            .and_then(|(_, swatch)| catalog.named(swatch))
                            .map_or(DEFAULT_COLOR, |entry| entry.color);
                        (zone.id.clone(), color)
                    });
                    Style::new(*id, *name, colors)
                })
                .collect();
            store.set_styles(gear, styles);
        }
        store
    }

    /// Replace the style list for `gear`. Used when building a store.
    pub fn set_styles(&mut self, gear: GearType, styles: Vec<Style>) {
        self.styles.insert(gear, styles);
    }

    pub fn with_styles(mut self, gear: GearType, styles: Vec<Style>) -> Self {
        self.set_styles(gear, styles);
        self
    }

    /// Styles for `gear`; empty if none were ever set.
    pub fn styles(&self, gear: GearType) -> &[Style] {
        self.styles.get(&gear).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find(&self, gear: GearType, style_id: &str) -> Option<&Style> {
        self.styles(gear).iter().find(|s| s.id == style_id)
    }

    pub(crate) fn find_mut(&mut self, gear: GearType, style_id: &str) -> Option<&mut Style> {
        self.styles
            .get_mut(&gear)?
            .iter_mut()
            .find(|s| s.id == style_id)
    }

    pub fn contains(&self, gear: GearType, style_id: &str) -> bool {
        self.find(gear, style_id).is_some()
    }
}
