use crate::dataset::Dataset;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarColor {
    Green,
    Red,
    Blue,
}

impl BarColor {
    /// Assigned positionally and cycled when there are more statuses than colors.
    pub const PALETTE: [BarColor; 3] = [BarColor::Green, BarColor::Red, BarColor::Blue];

    pub fn for_position(position: usize) -> Self {
        Self::PALETTE[position % Self::PALETTE.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BarColor::Green => "green",
            BarColor::Red => "red",
            BarColor::Blue => "blue",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusBar {
    pub label: String,
    pub count: usize,
    pub color: BarColor,
}

/// Bar chart of records per status, highest count first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusChart {
    bars: Vec<StatusBar>,
}

impl StatusChart {
    pub fn build(dataset: &Dataset) -> Self {
        let mut counts = BTreeMap::<String, usize>::new();
        for status in dataset.records().filter_map(|r| r.status()) {
            *counts.entry(status).or_default() += 1;
        }

        let mut counts: Vec<_> = counts.into_iter().collect();
        // stable: ties keep label order
        counts.sort_by(|(_, a), (_, b)| b.cmp(a));

        let bars = counts
            .into_iter()
            .enumerate()
            .map(|(position, (label, count))| StatusBar {
                label,
                count,
                color: BarColor::for_position(position),
            })
            .collect();

        Self { bars }
    }

    pub fn bars(&self) -> &[StatusBar] {
        &self.bars
    }

    pub fn max_count(&self) -> usize {
        self.bars.iter().map(|bar| bar.count).max().unwrap_or(0)
    }
}
