use crate::color::ColorMap;
use crate::data::model::{CustomerId, Dataset, DayTotal};
use crate::data::query::{customers_matching_name, daily_totals, transactions_matching_amount};
use crate::data::seed::seed_dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset; the seed fixture until the user opens a file.
    pub dataset: Dataset,

    /// Live "search by name" term for the customer list.
    pub name_query: String,

    /// Live "search by amount" term for the transaction list.
    pub amount_query: String,

    /// Indices of customers passing the name filter (cached).
    pub visible_customers: Vec<usize>,

    /// Indices of transactions passing the amount filter (cached).
    pub visible_transactions: Vec<usize>,

    /// Customer whose daily totals are charted.
    pub selected_customer: Option<CustomerId>,

    /// Chart series for the selected customer (cached).
    pub daily_totals: Vec<DayTotal>,

    /// Per-customer colours.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = AppState {
            dataset: Dataset::default(),
            name_query: String::new(),
            amount_query: String::new(),
            visible_customers: Vec::new(),
            visible_transactions: Vec::new(),
            selected_customer: None,
            daily_totals: Vec::new(),
            color_map: ColorMap::new(&[]),
            status_message: None,
        };
        state.set_dataset(seed_dataset());
        state
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: reset searches, selection, and colours.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.name_query.clear();
        self.amount_query.clear();
        self.visible_customers = (0..dataset.customers().len()).collect();
        self.visible_transactions = (0..dataset.transactions().len()).collect();
        self.selected_customer = None;
        self.daily_totals.clear();
        self.color_map = ColorMap::new(dataset.customers());
        self.dataset = dataset;
        self.status_message = None;
    }

    /// Recompute `visible_customers` after a name query change.
    pub fn refilter_customers(&mut self) {
        self.visible_customers = customers_matching_name(&self.dataset, &self.name_query);
    }

    /// Recompute `visible_transactions` after an amount query change.
    pub fn refilter_transactions(&mut self) {
        self.visible_transactions =
            transactions_matching_amount(&self.dataset, &self.amount_query);
    }

    /// Select a customer and recompute their chart series.
    pub fn select_customer(&mut self, id: CustomerId) {
        self.selected_customer = Some(id);
        self.daily_totals = daily_totals(&self.dataset, id);
    }

    /// Display name of the selected customer, if any.
    pub fn selected_customer_name(&self) -> Option<&str> {
        self.selected_customer
            .and_then(|id| self.dataset.customer_name(id))
    }
}
