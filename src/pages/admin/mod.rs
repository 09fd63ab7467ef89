//! Admin Panel
//!
//! Dashboard plus user and product management. Every page sits behind
//! `RequireAdmin`; the API enforces the same rule server-side.

mod dashboard;
mod products;
mod users;

pub use dashboard::AdminDashboardPage;
pub use products::AdminProductsPage;
pub use users::AdminUsersPage;

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
fn AdminNav() -> impl IntoView {
    view! {
        <nav class="admin-nav">
            <A href="/admin" exact=true>"Dashboard"</A>
            <A href="/admin/users">"Users"</A>
            <A href="/admin/products">"Products"</A>
        </nav>
    }
}
