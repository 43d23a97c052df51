use crate::dataset::Dataset;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChurnMetrics {
    rate: f64,
    canceled: usize,
    total: usize,
}

impl ChurnMetrics {
    pub fn compute(dataset: &Dataset) -> Self {
        let canceled = dataset.records().filter(|r| r.is_canceled()).count();
        let total = dataset.len();
        let rate = if total > 0 {
            canceled as f64 / total as f64
        } else {
            0.0
        };

        Self {
            rate,
            canceled,
            total,
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn canceled(&self) -> usize {
        self.canceled
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn not_canceled(&self) -> usize {
        self.total - self.canceled
    }

    pub fn formatted_rate(&self) -> String {
        format!("{:.2}%", self.rate * 100.0)
    }
}
