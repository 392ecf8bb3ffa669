//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_guard::AuthGuard;
use crate::components::role_guard::RoleGuard;
use crate::components::toast_host::ToastHost;
use crate::net::types::UserRole;
use crate::pages::admin::ManagerPage;
use crate::pages::document::DocumentPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::{MyProfilePage, UserProfilePage};
use crate::pages::register::RegisterPage;
use crate::pages::statistics::StatisticsPage;
use crate::pages::upload::UploadPage;
use crate::state::search::SearchState;
use crate::state::session::SessionStore;
use crate::state::toasts::Toaster;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores the persisted session once
/// on the client, and sets up client-side routing. Authenticated routes are
/// wrapped in `AuthGuard`; the manager route additionally in `RoleGuard`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toaster = Toaster::default();
    let store = SessionStore::new(toaster);
    let search = RwSignal::new(SearchState::default());

    provide_context(toaster);
    provide_context(store);
    provide_context(search);

    // Session restoration runs once, client-side, before guards can settle.
    Effect::new(move || {
        store.hydrate();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/unishare.css"/>
        <Title text="UniShare"/>

        <ToastHost/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <AuthGuard>
                                <HomePage/>
                            </AuthGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("upload")
                    view=|| {
                        view! {
                            <AuthGuard>
                                <UploadPage/>
                            </AuthGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("document"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <AuthGuard>
                                <DocumentPage/>
                            </AuthGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("profile"), StaticSegment("me"))
                    view=|| {
                        view! {
                            <AuthGuard>
                                <MyProfilePage/>
                            </AuthGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("profile"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <AuthGuard>
                                <UserProfilePage/>
                            </AuthGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("statistics")
                    view=|| {
                        view! {
                            <AuthGuard>
                                <StatisticsPage/>
                            </AuthGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("manager"))
                    view=|| {
                        view! {
                            <AuthGuard>
                                <RoleGuard allowed=vec![UserRole::Moderator, UserRole::Admin]>
                                    <ManagerPage/>
                                </RoleGuard>
                            </AuthGuard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
