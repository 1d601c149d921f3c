use crate::domain::ItemResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverallStatus {
    AllVerifiedLossless,
    VerificationFailed,
    IncompleteRun,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub identical: usize,
    pub different: usize,
    pub missing_or_error: usize,
    /// Items where the original or the codestream size could not be read.
    pub missing_sizes: usize,
    pub status: OverallStatus,
}

/// Append-only collection of per-item results, in recording order.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    items: Vec<ItemResult>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, item: ItemResult) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[ItemResult] {
        &self.items
    }

    pub fn summarize(&self) -> RunSummary {
        let total = self.items.len();
        let (mut identical, mut different, mut missing_or_error, mut missing_sizes) = (0, 0, 0, 0);
        for it in &self.items {
            if it.outcome.is_identical() {
                identical += 1;
            } else if it.outcome.is_different() {
                different += 1;
            } else if it.outcome.is_missing_or_error() {
                missing_or_error += 1;
            }
            if !it.sizes_present() {
                missing_sizes += 1;
            }
        }

        // any content mismatch outranks missing inputs
        let status = if different > 0 {
            OverallStatus::VerificationFailed
        } else if identical == total && missing_sizes == 0 {
            OverallStatus::AllVerifiedLossless
        } else {
            OverallStatus::IncompleteRun
        };

        RunSummary {
            total,
            identical,
            different,
            missing_or_error,
            missing_sizes,
            status,
        }
    }
}
