use super::model::{LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Outcome breakdown (pie-chart data)
// ---------------------------------------------------------------------------

/// Pie title for the all-sites view.
pub const TITLE_SUCCESS_BY_SITE: &str = "Total Success Launches By Site";
/// Scatter title for the all-sites view.
pub const TITLE_CORRELATION_ALL: &str = "Correlation between Payload and Success for All Sites";

/// Grouped launch-outcome counts for the pie chart: one `(label, count)`
/// slice per group, labels unique, in first-seen dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeBreakdown {
    pub title: String,
    pub slices: Vec<(String, usize)>,
}

impl OutcomeBreakdown {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|(_, n)| n).sum()
    }
}

/// Display label for an outcome class.
pub fn outcome_label(outcome: u8) -> &'static str {
    if outcome == 1 {
        "Success"
    } else {
        "Failure"
    }
}

/// Compute the pie-chart data for the current site selection.
///
/// * All sites: successful launches only, grouped by site.
/// * One site: that site's launches, grouped by success/failure.
///
/// A selection matching no records yields an empty slice list, never
/// fabricated rows.
pub fn outcome_breakdown(dataset: &LaunchDataset, selection: &SiteSelection) -> OutcomeBreakdown {
    match selection {
        SiteSelection::All => {
            let mut slices: Vec<(String, usize)> = Vec::new();
            for rec in dataset.records.iter().filter(|r| r.is_success()) {
                bump(&mut slices, &rec.launch_site);
            }
            OutcomeBreakdown {
                title: TITLE_SUCCESS_BY_SITE.to_string(),
                slices,
            }
        }
        SiteSelection::Site(site) => {
            let mut slices: Vec<(String, usize)> = Vec::new();
            for rec in dataset.records.iter().filter(|r| r.launch_site == *site) {
                bump(&mut slices, outcome_label(rec.outcome));
            }
            OutcomeBreakdown {
                title: format!("Total Success vs. Failure for site {site}"),
                slices,
            }
        }
    }
}

/// Increment the count for `label`, appending a new slice on first sight.
/// Linear scan: the dataset has a handful of sites and two outcome classes.
fn bump(slices: &mut Vec<(String, usize)>, label: &str) {
    match slices.iter_mut().find(|(l, _)| l == label) {
        Some((_, n)) => *n += 1,
        None => slices.push((label.to_string(), 1)),
    }
}

// ---------------------------------------------------------------------------
// Payload correlation (scatter-chart data)
// ---------------------------------------------------------------------------

/// Scatter-chart data: indices into `dataset.records` of every launch that
/// passes the payload-range and site filters. A filtered projection, no
/// aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationView {
    pub title: String,
    pub indices: Vec<usize>,
}

/// Compute the scatter-chart data for the current selection.
///
/// Keeps records with `low <= payload <= high` (inclusive both ends), further
/// restricted to the selected site unless all sites are shown. An inverted
/// range produces an empty view rather than an error.
pub fn payload_correlation(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> CorrelationView {
    let indices = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.payload_mass_kg) && selection.matches(rec))
        .map(|(i, _)| i)
        .collect();

    let title = match selection {
        SiteSelection::All => TITLE_CORRELATION_ALL.to_string(),
        SiteSelection::Site(site) => {
            format!("Correlation between Payload and Success for site {site}")
        }
    };

    CorrelationView { title, indices }
}
