use std::fmt;

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the launch-records table
// ---------------------------------------------------------------------------

/// A single launch record (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier, e.g. `"CCAFS LC-40"`.
    pub launch_site: String,
    /// Payload mass in kilograms, non-negative.
    pub payload_mass_kg: f64,
    /// Booster version label, e.g. `"v1.1"` or `"FT"`.
    pub booster_version_category: String,
    /// Launch outcome: 1 = success, 0 = failure.
    pub outcome: u8,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.outcome == 1
    }
}

// ---------------------------------------------------------------------------
// SiteSelection – dropdown state
// ---------------------------------------------------------------------------

/// Which launch site the dashboard is focused on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    /// All sites combined (the dropdown default).
    #[default]
    All,
    /// A single site, drawn from [`LaunchDataset::sites`].
    Site(String),
}

impl SiteSelection {
    /// Whether the record passes the site filter.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "All Sites"),
            SiteSelection::Site(site) => write!(f, "{site}"),
        }
    }
}

// ---------------------------------------------------------------------------
// PayloadRange – slider state
// ---------------------------------------------------------------------------

/// Inclusive payload-mass window selected on the range sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Inclusive on both ends; an inverted range contains nothing.
    pub fn contains(&self, mass_kg: f64) -> bool {
        self.low <= mass_kg && mass_kg <= self.high
    }

    /// Clamp both ends into `[min, max]` keeping `low <= high`.
    pub fn clamped(self, min: f64, max: f64) -> Self {
        let low = self.low.clamp(min, max);
        let high = self.high.clamp(low, max);
        PayloadRange { low, high }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed site/category indices and
/// payload bounds. Built once by the loader, read-only afterwards.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launch records (rows).
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites in first-seen order.
    pub sites: Vec<String>,
    /// Distinct booster version categories in first-seen order.
    pub categories: Vec<String>,
    /// Smallest payload mass across all records.
    pub min_payload: f64,
    /// Largest payload mass across all records.
    pub max_payload: f64,
}

impl LaunchDataset {
    /// Build the distinct-value indices and payload bounds.
    ///
    /// `records` must be non-empty; the loader rejects empty files before
    /// calling this.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut categories: Vec<String> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            if !categories.contains(&rec.booster_version_category) {
                categories.push(rec.booster_version_category.clone());
            }
            min_payload = min_payload.min(rec.payload_mass_kg);
            max_payload = max_payload.max(rec.payload_mass_kg);
        }

        LaunchDataset {
            records,
            sites,
            categories,
            min_payload,
            max_payload,
        }
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The widest slider range: `[min_payload, max_payload]`.
    pub fn full_range(&self) -> PayloadRange {
        PayloadRange::new(self.min_payload, self.max_payload)
    }

    /// Total number of successful launches across all sites.
    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }
}
