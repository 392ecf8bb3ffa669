//! Admin manager page: users, documents, subjects, majors, and activity logs.
//!
//! Business rules live on the server; every action here is "call the
//! endpoint, toast the outcome, refetch the list". The route is wrapped in
//! `RoleGuard` with the moderator/admin allow-list.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::types::{UserRole, UserStatus};
use crate::state::session::SessionStore;
use crate::state::toasts::Toaster;
use crate::util::format;

/// Tabs of the manager page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ManagerTab {
    #[default]
    Users,
    Documents,
    Subjects,
    Majors,
    Logs,
}

impl ManagerTab {
    const ALL: [ManagerTab; 5] = [
        ManagerTab::Users,
        ManagerTab::Documents,
        ManagerTab::Subjects,
        ManagerTab::Majors,
        ManagerTab::Logs,
    ];

    fn label(self) -> &'static str {
        match self {
            ManagerTab::Users => "Users",
            ManagerTab::Documents => "Documents",
            ManagerTab::Subjects => "Subjects",
            ManagerTab::Majors => "Majors",
            ManagerTab::Logs => "Logs",
        }
    }
}

/// Tabbed management console.
#[component]
pub fn ManagerPage() -> impl IntoView {
    let active = RwSignal::new(ManagerTab::default());

    view! {
        <Navbar/>
        <div class="manager-page">
            <h1>"Manager"</h1>

            <div class="manager-page__tabs">
                {ManagerTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="manager-page__tab"
                                class=("manager-page__tab--active", move || active.get() == tab)
                                on:click=move |_| active.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="manager-page__content">
                {move || match active.get() {
                    ManagerTab::Users => view! { <UsersTab/> }.into_any(),
                    ManagerTab::Documents => view! { <DocumentsTab/> }.into_any(),
                    ManagerTab::Subjects => view! { <SubjectsTab/> }.into_any(),
                    ManagerTab::Majors => view! { <MajorsTab/> }.into_any(),
                    ManagerTab::Logs => view! { <LogsTab/> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn UsersTab() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toaster = expect_context::<Toaster>();

    let search = RwSignal::new(String::new());
    let users = LocalResource::new(move || {
        let search = search.get();
        async move { api::admin_fetch_users(store, &search, None).await }
    });

    view! {
        <div class="manager-users">
            <input
                class="manager-users__search"
                type="search"
                placeholder="Search users..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|result| match result {
                            Ok(page) => {
                                view! {
                                    <table class="manager-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Email"</th>
                                                <th>"Role"</th>
                                                <th>"Status"</th>
                                                <th>"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {page
                                                .data
                                                .into_iter()
                                                .map(|user| {
                                                    let id = user.id.clone();
                                                    let blocked = user.status == UserStatus::Blocked;
                                                    let role_id = user.id.clone();
                                                    let role_value = user.role.as_str();
                                                    let on_toggle_block = move |_| {
                                                        #[cfg(feature = "hydrate")]
                                                        {
                                                            let id = id.clone();
                                                            let users = users.clone();
                                                            leptos::task::spawn_local(async move {
                                                                let result = if blocked {
                                                                    api::admin_unblock_user(store, &id).await
                                                                } else {
                                                                    api::admin_block_user(store, &id).await
                                                                };
                                                                match result {
                                                                    Ok(()) => users.refetch(),
                                                                    Err(e) => toaster.error(&e.message()),
                                                                }
                                                            });
                                                        }
                                                        #[cfg(not(feature = "hydrate"))]
                                                        {
                                                            let _ = (&id, &toaster);
                                                        }
                                                    };
                                                    let on_role_change = move |ev: leptos::ev::Event| {
                                                        let value = event_target_value(&ev);
                                                        let role = match value.as_str() {
                                                            "MODERATOR" => UserRole::Moderator,
                                                            "ADMIN" => UserRole::Admin,
                                                            _ => UserRole::User,
                                                        };
                                                        #[cfg(feature = "hydrate")]
                                                        {
                                                            let id = role_id.clone();
                                                            let users = users.clone();
                                                            leptos::task::spawn_local(async move {
                                                                match api::admin_set_role(store, &id, role).await {
                                                                    Ok(_) => {
                                                                        toaster.success("Role updated.");
                                                                        users.refetch();
                                                                    }
                                                                    Err(e) => toaster.error(&e.message()),
                                                                }
                                                            });
                                                        }
                                                        #[cfg(not(feature = "hydrate"))]
                                                        {
                                                            let _ = (&role_id, role);
                                                        }
                                                    };
                                                    view! {
                                                        <tr>
                                                            <td>{user.full_name}</td>
                                                            <td>{user.email}</td>
                                                            <td>
                                                                <select prop:value=role_value on:change=on_role_change>
                                                                    <option value="USER">"User"</option>
                                                                    <option value="MODERATOR">"Moderator"</option>
                                                                    <option value="ADMIN">"Admin"</option>
                                                                </select>
                                                            </td>
                                                            <td>{if blocked { "Blocked" } else { "Active" }}</td>
                                                            <td>
                                                                <button class="btn" on:click=on_toggle_block>
                                                                    {if blocked { "Unblock" } else { "Block" }}
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="manager-page__error">{e.message()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn DocumentsTab() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toaster = expect_context::<Toaster>();

    let documents = LocalResource::new(move || api::admin_fetch_documents(store, ""));

    view! {
        <Suspense fallback=move || view! { <p>"Loading documents..."</p> }>
            {move || {
                documents
                    .get()
                    .map(|result| match result {
                        Ok(page) => {
                            view! {
                                <table class="manager-table">
                                    <thead>
                                        <tr>
                                            <th>"Title"</th>
                                            <th>"Uploader"</th>
                                            <th>"Status"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {page
                                            .data
                                            .into_iter()
                                            .map(|doc| {
                                                use crate::net::types::DocumentStatus;
                                                let blocked = doc.status == DocumentStatus::Blocked;
                                                let toggle_id = doc.id.clone();
                                                let delete_id = doc.id.clone();
                                                let on_toggle = move |_| {
                                                    #[cfg(feature = "hydrate")]
                                                    {
                                                        let id = toggle_id.clone();
                                                        let documents = documents.clone();
                                                        leptos::task::spawn_local(async move {
                                                            let result = if blocked {
                                                                api::admin_unblock_document(store, &id).await
                                                            } else {
                                                                api::admin_block_document(store, &id).await
                                                            };
                                                            match result {
                                                                Ok(()) => documents.refetch(),
                                                                Err(e) => toaster.error(&e.message()),
                                                            }
                                                        });
                                                    }
                                                    #[cfg(not(feature = "hydrate"))]
                                                    {
                                                        let _ = (&toggle_id, &toaster);
                                                    }
                                                };
                                                let on_delete = move |_| {
                                                    #[cfg(feature = "hydrate")]
                                                    {
                                                        let id = delete_id.clone();
                                                        let documents = documents.clone();
                                                        leptos::task::spawn_local(async move {
                                                            match api::admin_delete_document(store, &id).await {
                                                                Ok(()) => {
                                                                    toaster.success("Document deleted.");
                                                                    documents.refetch();
                                                                }
                                                                Err(e) => toaster.error(&e.message()),
                                                            }
                                                        });
                                                    }
                                                    #[cfg(not(feature = "hydrate"))]
                                                    {
                                                        let _ = &delete_id;
                                                    }
                                                };
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <a href=format!("/document/{}", doc.id)>{doc.title}</a>
                                                        </td>
                                                        <td>{doc.uploader.full_name}</td>
                                                        <td>{format!("{:?}", doc.status)}</td>
                                                        <td>
                                                            <button class="btn" on:click=on_toggle>
                                                                {if blocked { "Unblock" } else { "Block" }}
                                                            </button>
                                                            <button class="btn btn--danger" on:click=on_delete>
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                        Err(e) => view! { <p class="manager-page__error">{e.message()}</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}

#[component]
fn SubjectsTab() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toaster = expect_context::<Toaster>();

    let subjects = LocalResource::new(move || api::admin_fetch_subjects(store));
    let name = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let faculty = RwSignal::new(String::new());

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let subjects = subjects.clone();
            leptos::task::spawn_local(async move {
                let result = api::admin_add_subject(
                    store,
                    name.get_untracked().trim(),
                    code.get_untracked().trim(),
                    faculty.get_untracked().trim(),
                )
                .await;
                match result {
                    Ok(()) => {
                        toaster.success("Subject added.");
                        name.set(String::new());
                        code.set(String::new());
                        faculty.set(String::new());
                        subjects.refetch();
                    }
                    Err(e) => toaster.error(&e.message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &toaster;
        }
    };

    view! {
        <div class="manager-subjects">
            <form class="manager-subjects__form" on:submit=on_add>
                <input
                    type="text"
                    required
                    placeholder="Subject name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    required
                    placeholder="Code"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Managing faculty"
                    prop:value=move || faculty.get()
                    on:input=move |ev| faculty.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Add subject"
                </button>
            </form>

            <Suspense fallback=move || view! { <p>"Loading subjects..."</p> }>
                {move || {
                    subjects
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="manager-list">
                                        {list
                                            .into_iter()
                                            .map(|subject| {
                                                let id = subject.id.clone();
                                                let on_delete = move |_| {
                                                    #[cfg(feature = "hydrate")]
                                                    {
                                                        let id = id.clone();
                                                        let subjects = subjects.clone();
                                                        leptos::task::spawn_local(async move {
                                                            match api::admin_delete_subject(store, &id).await {
                                                                Ok(()) => subjects.refetch(),
                                                                Err(e) => toaster.error(&e.message()),
                                                            }
                                                        });
                                                    }
                                                    #[cfg(not(feature = "hydrate"))]
                                                    {
                                                        let _ = &id;
                                                    }
                                                };
                                                view! {
                                                    <li class="manager-list__item">
                                                        <span>{format!("{} ({})", subject.name, subject.code)}</span>
                                                        <span>{subject.managing_faculty.unwrap_or_default()}</span>
                                                        <button class="btn btn--danger" on:click=on_delete>
                                                            "Delete"
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="manager-page__error">{e.message()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn MajorsTab() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toaster = expect_context::<Toaster>();

    let majors = LocalResource::new(move || api::admin_fetch_majors(store));
    let subjects = LocalResource::new(move || api::admin_fetch_subjects(store));
    let name = RwSignal::new(String::new());
    let selected = RwSignal::new(Vec::<String>::new());

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let majors = majors.clone();
            leptos::task::spawn_local(async move {
                let result = api::admin_add_major(
                    store,
                    name.get_untracked().trim(),
                    &selected.get_untracked(),
                )
                .await;
                match result {
                    Ok(()) => {
                        toaster.success("Major added.");
                        name.set(String::new());
                        selected.set(Vec::new());
                        majors.refetch();
                    }
                    Err(e) => toaster.error(&e.message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &toaster;
        }
    };

    view! {
        <div class="manager-majors">
            <form class="manager-majors__form" on:submit=on_add>
                <input
                    type="text"
                    required
                    placeholder="Major name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <Suspense fallback=|| ()>
                    {move || {
                        subjects
                            .get()
                            .and_then(Result::ok)
                            .map(|list| {
                                list.into_iter()
                                    .map(|subject| {
                                        let id = subject.id.clone();
                                        let check_id = subject.id.clone();
                                        view! {
                                            <label class="manager-majors__subject">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || {
                                                        selected.get().iter().any(|s| *s == check_id)
                                                    }
                                                    on:change=move |_| {
                                                        selected.update(|sel| {
                                                            *sel = crate::components::filter_sidebar::toggle_subject(
                                                                std::mem::take(sel),
                                                                &id,
                                                            );
                                                        });
                                                    }
                                                />
                                                {subject.name}
                                            </label>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </Suspense>
                <button class="btn btn--primary" type="submit">
                    "Add major"
                </button>
            </form>

            <Suspense fallback=move || view! { <p>"Loading majors..."</p> }>
                {move || {
                    majors
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="manager-list">
                                        {list
                                            .into_iter()
                                            .map(|major| {
                                                let id = major.id.clone();
                                                let on_delete = move |_| {
                                                    #[cfg(feature = "hydrate")]
                                                    {
                                                        let id = id.clone();
                                                        let majors = majors.clone();
                                                        leptos::task::spawn_local(async move {
                                                            match api::admin_delete_major(store, &id).await {
                                                                Ok(()) => majors.refetch(),
                                                                Err(e) => toaster.error(&e.message()),
                                                            }
                                                        });
                                                    }
                                                    #[cfg(not(feature = "hydrate"))]
                                                    {
                                                        let _ = &id;
                                                    }
                                                };
                                                view! {
                                                    <li class="manager-list__item">
                                                        <span>{major.name}</span>
                                                        <span>{format!("{} subjects", major.subjects.len())}</span>
                                                        <button class="btn btn--danger" on:click=on_delete>
                                                            "Delete"
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="manager-page__error">{e.message()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn LogsTab() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let logs = LocalResource::new(move || api::admin_fetch_logs(store));

    view! {
        <Suspense fallback=move || view! { <p>"Loading logs..."</p> }>
            {move || {
                logs
                    .get()
                    .map(|result| match result {
                        Ok(entries) => {
                            view! {
                                <table class="manager-table">
                                    <thead>
                                        <tr>
                                            <th>"When"</th>
                                            <th>"Actor"</th>
                                            <th>"Action"</th>
                                            <th>"Target"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {entries
                                            .into_iter()
                                            .map(|entry| {
                                                view! {
                                                    <tr>
                                                        <td>{format::date_only(&entry.timestamp).to_owned()}</td>
                                                        <td>{entry.actor}</td>
                                                        <td>{entry.action}</td>
                                                        <td>{entry.target}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                        Err(e) => view! { <p class="manager-page__error">{e.message()}</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}
