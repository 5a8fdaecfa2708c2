//! Dataset Page
//!
//! Real dataset table with the real vs. synthetic bar charts.

use leptos::*;
use synthlab::{DatasetKind, DatasetLoader};

use crate::components::{BarChartView, DatasetTableView, LoadingOverlay};
use crate::state::{GlobalState, SignalPage, TableState};

/// Dataset page component
#[component]
pub fn Dataset() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Load both datasets on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);
            state.table.set(TableState::Loading);
            state.charts.set(Vec::new());

            let loader = DatasetLoader::new(state.backend());
            let mut page = SignalPage::new(state.clone());

            if let Err(e) = loader.load(&mut page).await {
                web_sys::console::error_1(&format!("Error loading datasets: {}", e).into());
                state.table.update(|table| {
                    *table = std::mem::replace(table, TableState::Loading).after_error(&e)
                });
            }

            state.loading.set(false);
        });
    });

    let loading = state.loading;

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dataset"</h1>
                <p class="text-gray-400 mt-1">"Real sample rows and a real vs. synthetic comparison"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Real Dataset Sample"</h2>
                <LoadingOverlay loading=loading>
                    <DatasetTableView />
                </LoadingOverlay>
            </section>

            <section class="grid md:grid-cols-2 gap-6">
                <div>
                    <h2 class="text-lg font-semibold mb-2">"Before: Real"</h2>
                    <BarChartView kind=DatasetKind::Sample />
                </div>
                <div>
                    <h2 class="text-lg font-semibold mb-2">"After: Synthetic"</h2>
                    <BarChartView kind=DatasetKind::Synthetic />
                </div>
            </section>
        </div>
    }
}
