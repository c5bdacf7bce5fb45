use crate::group::ColorGroup;

/// The presentation record for one palette group, ready for display or
/// serialization. Derived from a [`ColorGroup`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteEntry {
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    /// Literal `rgb(r, g, b)` text.
    pub rgb: String,
    /// Pixels covered by the group, merged colors included.
    pub count: u32,
    /// Share of the image, two decimals followed by `%`.
    pub percentage: String,
    /// Distinct colors merged into the group, excluding its leader.
    pub merged_colors: u32,
}

impl PaletteEntry {
    pub(crate) fn from_group(group: ColorGroup, total_pixels: u64) -> Self {
        let (r, g, b) = group.rgb();

        Self {
            hex: rgb_to_hex(r, g, b),
            rgb: format!("rgb({r}, {g}, {b})"),
            count: group.count(),
            percentage: format_percentage(group.count(), total_pixels),
            merged_colors: group.merged_count(),
        }
    }
}

/// Project groups into palette entries, keeping their order.
pub(crate) fn format_entries(groups: &[ColorGroup], total_pixels: u64) -> Vec<PaletteEntry> {
    groups
        .iter()
        .map(|group| PaletteEntry::from_group(*group, total_pixels))
        .collect()
}

fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

fn format_percentage(count: u32, total_pixels: u64) -> String {
    if total_pixels == 0 {
        return String::from("0.00%");
    }

    format!("{:.2}%", (count as f64 / total_pixels as f64) * 100.0)
}
