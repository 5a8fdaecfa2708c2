//! Dataset Table Component

use leptos::*;
use synthlab::DatasetTable;

use crate::state::{GlobalState, TableState};

/// Table of the real dataset
#[component]
pub fn DatasetTableView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="overflow-x-auto">
            <table id="dataTable" class="w-full text-left text-sm">
                <thead class="text-gray-400 border-b border-gray-700">
                    <tr>
                        {DatasetTable::headers()
                            .into_iter()
                            .map(|h| view! { <th class="px-4 py-2">{h}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || match state.table.get() {
                        TableState::Loading => view! {
                            <tr><td colspan="4" class="px-4 py-6 text-gray-500">"Loading..."</td></tr>
                        }.into_view(),
                        TableState::Failed(message) => view! {
                            <tr>
                                <td colspan="4" class="px-4 py-6 text-red-400">
                                    {format!("Could not load the dataset: {}", message)}
                                </td>
                            </tr>
                        }.into_view(),
                        TableState::Loaded(table) if table.is_empty() => view! {
                            <tr><td colspan="4" class="px-4 py-6 text-gray-500">"No records"</td></tr>
                        }.into_view(),
                        TableState::Loaded(table) => table
                            .rows()
                            .iter()
                            .map(|row| {
                                let [first, second, third] = row.cells.clone();
                                view! {
                                    <tr class="border-b border-gray-800" data-shape=row.shape.as_str()>
                                        <td class="px-4 py-2 text-gray-400">{row.index}</td>
                                        <td class="px-4 py-2">{first}</td>
                                        <td class="px-4 py-2">{second}</td>
                                        <td class="px-4 py-2">{third}</td>
                                    </tr>
                                }
                            })
                            .collect_view(),
                    }}
                </tbody>
            </table>
        </div>
    }
}
