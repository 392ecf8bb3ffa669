//! Platform statistics page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::types::UploadsPoint;
use crate::state::session::SessionStore;

/// Summary counters plus a simple uploads-over-time bar list.
#[component]
pub fn StatisticsPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let platform = LocalResource::new(move || api::fetch_platform_stats(store));
    let over_time = LocalResource::new(move || api::fetch_uploads_over_time(store));

    view! {
        <Navbar/>
        <div class="statistics-page">
            <h1>"Platform statistics"</h1>

            <Suspense fallback=move || view! { <p>"Loading statistics..."</p> }>
                {move || {
                    platform
                        .get()
                        .map(|result| match result {
                            Ok(stats) => {
                                view! {
                                    <div class="statistics-page__cards">
                                        <StatCard label="Users" value=stats.total_users/>
                                        <StatCard label="Documents" value=stats.total_documents/>
                                        <StatCard label="Downloads" value=stats.total_downloads/>
                                        <StatCard label="Subjects" value=stats.total_subjects/>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="statistics-page__error">{e.message()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <h2>"Uploads over time"</h2>
            <Suspense fallback=move || view! { <p>"Loading series..."</p> }>
                {move || {
                    over_time
                        .get()
                        .and_then(Result::ok)
                        .map(|points| view! { <UploadsChart points=points/> })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: u32) -> impl IntoView {
    view! {
        <div class="stat-card">
            <strong>{value}</strong>
            <span>{label}</span>
        </div>
    }
}

/// Horizontal bar per period, scaled against the series maximum.
#[component]
fn UploadsChart(points: Vec<UploadsPoint>) -> impl IntoView {
    let max = points.iter().map(|p| p.count).max().unwrap_or(0).max(1);

    view! {
        <ul class="uploads-chart">
            {points
                .into_iter()
                .map(|point| {
                    let width = point.count * 100 / max;
                    view! {
                        <li class="uploads-chart__row">
                            <span class="uploads-chart__period">{point.period}</span>
                            <span
                                class="uploads-chart__bar"
                                style=format!("width: {width}%")
                            ></span>
                            <span class="uploads-chart__count">{point.count}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
