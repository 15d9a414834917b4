use crate::color::ColorMap;
use crate::data::aggregate::{
    outcome_breakdown, payload_correlation, CorrelationView, OutcomeBreakdown,
};
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Widget changes call the
/// setters below; each setter synchronously recomputes exactly the chart
/// data that depends on it.
pub struct AppState {
    /// Loaded dataset (None until a file loads).
    pub dataset: Option<LaunchDataset>,

    /// Site dropdown value.
    pub selected_site: SiteSelection,

    /// Payload range-slider value, kept within the dataset's bounds.
    pub payload_range: PayloadRange,

    /// Cached pie-chart data, rebuilt on site change.
    pub pie: Option<OutcomeBreakdown>,

    /// Cached scatter-chart data, rebuilt on site or range change.
    pub scatter: Option<CorrelationView>,

    /// Stable colours for booster version categories.
    pub category_colors: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selected_site: SiteSelection::All,
            payload_range: PayloadRange::new(0.0, 0.0),
            pie: None,
            scatter: None,
            category_colors: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: reset the controls to their defaults
    /// (all sites, full payload range) and rebuild both charts.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.selected_site = SiteSelection::All;
        self.payload_range = dataset.full_range();
        self.category_colors = Some(ColorMap::new(&dataset.categories));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.recompute_pie();
        self.recompute_scatter();
    }

    /// Dropdown change: both charts depend on the site.
    pub fn select_site(&mut self, selection: SiteSelection) {
        if self.selected_site == selection {
            return;
        }
        self.selected_site = selection;
        self.recompute_pie();
        self.recompute_scatter();
    }

    /// Slider change: only the scatter chart depends on the range. The range
    /// is clamped into the dataset's payload bounds with `low <= high`.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        let range = range.clamped(dataset.min_payload, dataset.max_payload);
        if self.payload_range == range {
            return;
        }
        self.payload_range = range;
        self.recompute_scatter();
    }

    fn recompute_pie(&mut self) {
        self.pie = self
            .dataset
            .as_ref()
            .map(|ds| outcome_breakdown(ds, &self.selected_site));
    }

    fn recompute_scatter(&mut self) {
        self.scatter = self
            .dataset
            .as_ref()
            .map(|ds| payload_correlation(ds, &self.selected_site, self.payload_range));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn rec(site: &str, mass: f64, outcome: u8) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: mass,
            booster_version_category: "FT".to_string(),
            outcome,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(LaunchDataset::from_records(vec![
            rec("CCAFS", 5000.0, 1),
            rec("CCAFS", 3000.0, 0),
            rec("KSC", 7000.0, 1),
        ]));
        state
    }

    #[test]
    fn set_dataset_resets_controls_and_builds_both_charts() {
        let state = loaded_state();
        assert_eq!(state.selected_site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(3000.0, 7000.0));
        assert_eq!(state.pie.as_ref().unwrap().slices.len(), 2);
        assert_eq!(state.scatter.as_ref().unwrap().indices.len(), 3);
    }

    #[test]
    fn site_change_recomputes_both_charts() {
        let mut state = loaded_state();
        state.select_site(SiteSelection::Site("KSC".to_string()));

        let pie = state.pie.as_ref().unwrap();
        assert_eq!(pie.title, "Total Success vs. Failure for site KSC");
        assert_eq!(state.scatter.as_ref().unwrap().indices, vec![2]);
    }

    #[test]
    fn range_change_recomputes_scatter_only() {
        let mut state = loaded_state();
        let pie_before = state.pie.clone();

        state.set_payload_range(PayloadRange::new(4000.0, 7000.0));

        assert_eq!(state.pie, pie_before);
        assert_eq!(state.scatter.as_ref().unwrap().indices, vec![0, 2]);
    }

    #[test]
    fn range_is_clamped_to_dataset_bounds() {
        let mut state = loaded_state();
        state.set_payload_range(PayloadRange::new(-1000.0, 99_999.0));
        assert_eq!(state.payload_range, PayloadRange::new(3000.0, 7000.0));
    }

    #[test]
    fn reselecting_same_site_is_a_no_op() {
        let mut state = loaded_state();
        let pie_before = state.pie.clone();
        let scatter_before = state.scatter.clone();

        state.select_site(SiteSelection::All);

        assert_eq!(state.pie, pie_before);
        assert_eq!(state.scatter, scatter_before);
    }
}
