//! BookCompass App
//!
//! Root component: provides the global store and toast context, then
//! routes each path to its page inside the shared layout.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Layout, ToastHost};
use crate::context::ToastContext;
use crate::pages::*;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(reactive_stores::Store::new(AppState::restore()));
    provide_context(ToastContext::new());

    view! {
        <Router>
            <Layout>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />

                    <Route path=path!("/audiobooks") view=AudiobooksPage />
                    <Route path=path!("/audiobooks/:id") view=AudiobookDetailPage />
                    <Route path=path!("/ebooks") view=EbooksPage />
                    <Route path=path!("/ebooks/:id") view=EbookDetailPage />
                    <Route path=path!("/textbooks") view=TextbooksPage />
                    <Route path=path!("/textbooks/:id") view=TextbookDetailPage />

                    <Route path=path!("/cart") view=CartPage />
                    <Route path=path!("/account") view=AccountPage />

                    <Route path=path!("/admin") view=AdminDashboardPage />
                    <Route path=path!("/admin/users") view=AdminUsersPage />
                    <Route path=path!("/admin/products") view=AdminProductsPage />

                    <Route path=path!("/faq") view=FaqPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/terms") view=TermsPage />
                </Routes>
            </Layout>
            <ToastHost />
        </Router>
    }
}
