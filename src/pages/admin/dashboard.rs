//! Admin Dashboard

use leptos::prelude::*;

use crate::api;
use crate::basket::format_price;
use crate::components::{spawn_load, EmptyState, ErrorBanner, LoadState, RequireAdmin, Spinner};
use crate::dashboard::{average_order_value, format_compact, month_over_month, revenue_bars, top_books};
use crate::error::ApiError;
use crate::models::DashboardStats;
use crate::pages::admin::AdminNav;
use crate::store::{store_token, use_app_store};

const TOP_BOOKS_SHOWN: usize = 5;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminNav />
            <Dashboard />
        </RequireAdmin>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let (stats, set_stats) = signal(LoadState::<DashboardStats>::Loading);
    let (log_lines, set_log_lines) = signal(Vec::<String>::new());

    Effect::new(move |_| {
        let token = store_token(&store);
        spawn_load(set_stats, async move {
            match token {
                Some(token) => api::get_dashboard(&token).await,
                None => Err(ApiError::Unauthorized("Please log in to continue.".to_string())),
            }
        });
    });

    view! {
        <section class="admin-dashboard">
            <h1>"Dashboard"</h1>
            {move || match stats.get() {
                LoadState::Loading => view! { <Spinner label="Loading metrics..." /> }.into_any(),
                LoadState::Failed(msg) => view! { <ErrorBanner message=msg /> }.into_any(),
                LoadState::Ready(stats) => view! { <DashboardBody stats=stats /> }.into_any(),
            }}

            <section class="client-log">
                <h2>"Recent client log"</h2>
                <button on:click=move |_| set_log_lines.set(browser_logger::recent_lines())>"Refresh"</button>
                <pre class="log-lines">{move || log_lines.get().join("\n")}</pre>
            </section>
        </section>
    }
}

#[component]
fn DashboardBody(stats: DashboardStats) -> impl IntoView {
    let aov = average_order_value(&stats);
    let trend = month_over_month(&stats.sales_by_month);
    let bars = revenue_bars(&stats.sales_by_month);
    let best = top_books(&stats, TOP_BOOKS_SHOWN);

    view! {
        <div class="stat-cards">
            <StatCard label="Users" value=format_compact(stats.total_users) />
            <StatCard label="Products" value=format_compact(stats.total_products) />
            <StatCard label="Orders" value=format_compact(stats.total_orders) />
            <StatCard label="Revenue" value=format_price(stats.total_revenue) />
            <StatCard label="Avg. order" value=format_price(aov) />
            <StatCard
                label="vs. last month"
                value=trend.map(|t| format!("{:+.1}%", t)).unwrap_or_else(|| "–".to_string())
            />
        </div>

        <section class="revenue-chart">
            <h2>"Revenue by month"</h2>
            {if bars.is_empty() {
                view! { <EmptyState message="No sales recorded yet." /> }.into_any()
            } else {
                view! {
                    <div class="bar-chart">
                        {bars.into_iter().map(|bar| view! {
                            <div class="bar" title=format_price(bar.value)>
                                <div class="bar-fill" style=format!("height: {:.1}%", bar.percent)></div>
                                <span class="bar-label">{bar.label}</span>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </section>

        <section class="top-books">
            <h2>"Best sellers"</h2>
            <table class="admin-table">
                <thead>
                    <tr><th>"Title"</th><th>"Sold"</th><th>"Revenue"</th></tr>
                </thead>
                <tbody>
                    {best.into_iter().map(|b| view! {
                        <tr><td>{b.title}</td><td>{b.sold}</td><td>{format_price(b.revenue)}</td></tr>
                    }).collect_view()}
                </tbody>
            </table>
        </section>

        <section class="recent-orders">
            <h2>"Recent orders"</h2>
            <table class="admin-table">
                <thead>
                    <tr><th>"Order"</th><th>"Customer"</th><th>"Total"</th><th>"Status"</th><th>"Date"</th></tr>
                </thead>
                <tbody>
                    {stats.recent_orders.into_iter().map(|o| view! {
                        <tr>
                            <td>{o.id}</td>
                            <td>{o.customer}</td>
                            <td>{format_price(o.total)}</td>
                            <td class="order-status">{o.status}</td>
                            <td>{o.created_at.map(|at| at.format("%Y-%m-%d").to_string()).unwrap_or_default()}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn StatCard(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{value}</span>
        </div>
    }
}
