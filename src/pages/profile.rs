//! Profile pages: the signed-in user's own profile and public profiles.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::types::{ChangePasswordRequest, Document, UpdateProfileRequest, User, UserStats};
use crate::state::session::SessionStore;
use crate::state::toasts::Toaster;
use crate::util::format;

/// Client-side checks for the change-password form.
pub fn validate_password_change(new_password: &str, confirm: &str) -> Result<(), &'static str> {
    if new_password != confirm {
        return Err("New passwords do not match.");
    }
    if new_password.len() < 6 {
        return Err("New password must be at least 6 characters.");
    }
    Ok(())
}

/// The signed-in user's profile: header, stats, uploads, and an edit form
/// that writes the updated profile back into the session store.
#[component]
pub fn MyProfilePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let profile = LocalResource::new(move || api::fetch_my_profile(store));
    let stats = LocalResource::new(move || api::fetch_my_stats(store));
    let uploads = LocalResource::new(move || api::fetch_my_uploads(store));

    view! {
        <Navbar/>
        <div class="profile-page">
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(user) => {
                                view! {
                                    <ProfileHeader user=user.clone()/>
                                    <EditProfileForm user=user/>
                                    <ChangePasswordForm/>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="profile-page__error">{e.message()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Suspense fallback=|| ()>
                {move || {
                    stats
                        .get()
                        .and_then(Result::ok)
                        .map(|stats| view! { <StatsRow stats=stats/> })
                }}
            </Suspense>

            <h2>"My uploads"</h2>
            <Suspense fallback=move || view! { <p>"Loading uploads..."</p> }>
                {move || {
                    uploads
                        .get()
                        .map(|result| match result {
                            Ok(docs) => view! { <UploadList documents=docs/> }.into_any(),
                            Err(e) => {
                                view! { <p class="profile-page__error">{e.message()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Another user's public profile, loaded from the route parameter.
#[component]
pub fn UserProfilePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let params = use_params_map();
    let user_id = move || params.read().get("id").unwrap_or_default();

    let profile = LocalResource::new(move || {
        let id = user_id();
        async move { api::fetch_user_profile(store, &id).await }
    });
    let stats = LocalResource::new(move || {
        let id = user_id();
        async move { api::fetch_user_stats(store, &id).await }
    });
    let uploads = LocalResource::new(move || {
        let id = user_id();
        async move { api::fetch_user_uploads(store, &id).await }
    });

    view! {
        <Navbar/>
        <div class="profile-page">
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(user) => view! { <ProfileHeader user=user/> }.into_any(),
                            Err(e) => {
                                view! { <p class="profile-page__error">{e.message()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Suspense fallback=|| ()>
                {move || {
                    stats
                        .get()
                        .and_then(Result::ok)
                        .map(|stats| view! { <StatsRow stats=stats/> })
                }}
            </Suspense>

            <h2>"Uploads"</h2>
            <Suspense fallback=move || view! { <p>"Loading uploads..."</p> }>
                {move || {
                    uploads
                        .get()
                        .and_then(Result::ok)
                        .map(|docs| view! { <UploadList documents=docs/> })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProfileHeader(user: User) -> impl IntoView {
    view! {
        <header class="profile-header">
            <div class="profile-header__avatar">
                {user
                    .avatar_url
                    .map(|url| view! { <img src=url alt="avatar"/> }.into_any())
                    .unwrap_or_else(|| {
                        let initial = user.full_name.chars().next().unwrap_or('?').to_string();
                        view! { <span class="profile-header__initial">{initial}</span> }
                            .into_any()
                    })}
            </div>
            <div class="profile-header__info">
                <h1>{user.full_name}</h1>
                <p>{user.email}</p>
                <p class="profile-header__role">{user.role.label()}</p>
                <p>{format!("Joined {}", format::date_only(&user.joined_date))}</p>
            </div>
        </header>
    }
}

#[component]
fn StatsRow(stats: UserStats) -> impl IntoView {
    view! {
        <div class="stats-row">
            <div class="stats-row__item">
                <strong>{stats.uploads_count}</strong>
                <span>"Uploads"</span>
            </div>
            <div class="stats-row__item">
                <strong>{stats.downloads_count}</strong>
                <span>"Downloads"</span>
            </div>
            <div class="stats-row__item">
                <strong>{stats.total_views}</strong>
                <span>"Views"</span>
            </div>
        </div>
    }
}

#[component]
fn UploadList(documents: Vec<Document>) -> impl IntoView {
    view! {
        <ul class="upload-list">
            {if documents.is_empty() {
                vec![view! { <li class="upload-list__empty">"No uploads yet."</li> }.into_any()]
            } else {
                documents
                    .into_iter()
                    .map(|doc| {
                        view! {
                            <li class="upload-list__item">
                                <a href=format!("/document/{}", doc.id)>{doc.title}</a>
                                <span>{doc.subject.name}</span>
                                <span>{format!("{} downloads", doc.download_count)}</span>
                                <span>{format::date_only(&doc.upload_date).to_owned()}</span>
                            </li>
                        }
                            .into_any()
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}

/// Inline profile edit; a successful save replaces the profile in the
/// session store so the navbar and guards see the new data immediately.
#[component]
fn EditProfileForm(user: User) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toaster = expect_context::<Toaster>();

    let full_name = RwSignal::new(user.full_name.clone());
    let avatar_url = RwSignal::new(user.avatar_url.clone().unwrap_or_default());
    let saving = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            saving.set(true);
            let req = UpdateProfileRequest {
                full_name: Some(full_name.get_untracked().trim().to_owned()),
                avatar_url: {
                    let url = avatar_url.get_untracked().trim().to_owned();
                    if url.is_empty() { None } else { Some(url) }
                },
            };
            leptos::task::spawn_local(async move {
                match api::update_my_profile(store, &req).await {
                    Ok(updated) => {
                        store.set_user(updated);
                        toaster.success("Profile updated.");
                    }
                    Err(e) => toaster.error(&e.message()),
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, &toaster);
        }
    };

    view! {
        <form class="edit-profile" on:submit=submit>
            <h2>"Edit profile"</h2>
            <label class="edit-profile__label">
                "Full name"
                <input
                    type="text"
                    required
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
            </label>
            <label class="edit-profile__label">
                "Avatar URL"
                <input
                    type="url"
                    prop:value=move || avatar_url.get()
                    on:input=move |ev| avatar_url.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}

/// Change-password form; fields clear on success, validation errors and
/// server rejections (e.g. wrong current password) surface as toasts.
#[component]
fn ChangePasswordForm() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toaster = expect_context::<Toaster>();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let old_v = old_password.get_untracked();
        let new_v = new_password.get_untracked();
        if let Err(msg) = validate_password_change(&new_v, &confirm.get_untracked()) {
            toaster.error(msg);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            saving.set(true);
            leptos::task::spawn_local(async move {
                let req = ChangePasswordRequest { old_password: old_v, new_password: new_v };
                match api::change_password(store, &req).await {
                    Ok(()) => {
                        toaster.success("Password changed.");
                        old_password.set(String::new());
                        new_password.set(String::new());
                        confirm.set(String::new());
                    }
                    Err(e) => toaster.error(&e.message()),
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (old_v, new_v, &store);
        }
    };

    view! {
        <form class="change-password" on:submit=submit>
            <h2>"Change password"</h2>
            <label class="change-password__label">
                "Current password"
                <input
                    type="password"
                    required
                    autocomplete="current-password"
                    prop:value=move || old_password.get()
                    on:input=move |ev| old_password.set(event_target_value(&ev))
                />
            </label>
            <label class="change-password__label">
                "New password"
                <input
                    type="password"
                    required
                    autocomplete="new-password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
            </label>
            <label class="change-password__label">
                "Confirm new password"
                <input
                    type="password"
                    required
                    autocomplete="new-password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Changing..." } else { "Change password" }}
            </button>
        </form>
    }
}
