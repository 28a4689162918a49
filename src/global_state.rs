use leptos::*;
use once_cell::sync::OnceCell;

/// Reactive signals shared by the whole view. Setting any of them is what
/// triggers re-projection and a redraw; there is no render loop.
pub struct Globals {
    pub detail: RwSignal<f64>,
    pub start_from: RwSignal<usize>,
    pub is_panning: RwSignal<bool>,
    /// Bumped whenever the backing series is regenerated.
    pub series_revision: RwSignal<u64>,
    pub visible_count: RwSignal<usize>,
    pub series_len: RwSignal<usize>,
    pub status: RwSignal<String>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        detail: create_rw_signal(30.0),
        start_from: create_rw_signal(0),
        is_panning: create_rw_signal(false),
        series_revision: create_rw_signal(0),
        visible_count: create_rw_signal(0),
        series_len: create_rw_signal(0),
        status: create_rw_signal("Initializing...".to_string()),
    })
}

crate::global_signals! {
    pub detail_signal => detail: f64,
    pub start_from_signal => start_from: usize,
    pub is_panning_signal => is_panning: bool,
    pub series_revision_signal => series_revision: u64,
    pub visible_count_signal => visible_count: usize,
    pub series_len_signal => series_len: usize,
    pub status_signal => status: String,
}
