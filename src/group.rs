use crate::histogram::ColorCount;
use std::cmp::Reverse;

/// A palette group led by one distinct color. `count` covers the leader's own
/// pixels plus the pixels of every color merged into it; `merged_count` is the
/// number of distinct colors folded in, excluding the leader itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorGroup {
    red: u8,
    green: u8,
    blue: u8,
    count: u32,
    merged_count: u32,
}

impl ColorGroup {
    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn count(self) -> u32 {
        self.count
    }

    pub fn merged_count(self) -> u32 {
        self.merged_count
    }
}

/// Merge colors whose Euclidean RGB distance to a group leader is within
/// `threshold`, greedily and in a single pass.
///
/// The input must be sorted descending by count. Walking it in order, the
/// earliest unconsumed color becomes a leader and absorbs every unconsumed
/// color after it that lies within the threshold. Consumption is tracked in a
/// fixed-size mask since the histogram size is known upfront. A threshold of
/// zero turns every color into its own group, order untouched.
///
/// The result is re-sorted descending by post-merge count. The sort is
/// stable: groups with equal counts keep the order the pass produced them in,
/// and no other tie-break is applied.
pub(crate) fn group_colors(counts: Vec<ColorCount>, threshold: f64) -> Vec<ColorGroup> {
    if threshold == 0.0 {
        return counts.into_iter().map(ungrouped).collect();
    }

    let mut groups = Vec::new();
    let mut consumed = vec![false; counts.len()];

    for i in 0..counts.len() {
        if consumed[i] {
            continue;
        }

        let leader = counts[i];
        let mut count = leader.count();
        let mut merged_count = 0;
        consumed[i] = true;

        for j in (i + 1)..counts.len() {
            if consumed[j] {
                continue;
            }

            if color_distance(leader.rgb(), counts[j].rgb()) <= threshold {
                count += counts[j].count();
                merged_count += 1;
                consumed[j] = true;
            }
        }

        let (red, green, blue) = leader.rgb();
        groups.push(ColorGroup {
            red,
            green,
            blue,
            count,
            merged_count,
        });
    }

    // merging changed the counts, restore the descending order
    groups.sort_by_key(|group| Reverse(group.count));
    groups
}

fn ungrouped(color: ColorCount) -> ColorGroup {
    let (red, green, blue) = color.rgb();
    ColorGroup {
        red,
        green,
        blue,
        count: color.count(),
        merged_count: 0,
    }
}

/// Euclidean distance between two colors in plain, unweighted RGB space.
fn color_distance((r1, g1, b1): (u8, u8, u8), (r2, g2, b2): (u8, u8, u8)) -> f64 {
    let dr = r1 as f64 - r2 as f64;
    let dg = g1 as f64 - g2 as f64;
    let db = b1 as f64 - b2 as f64;

    (dr * dr + dg * dg + db * db).sqrt()
}
