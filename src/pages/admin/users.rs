//! Admin User Management

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{spawn_load, DeleteConfirmButton, ErrorBanner, LoadState, RequireAdmin, Spinner};
use crate::context::use_toasts;
use crate::error::ApiError;
use crate::models::{NewUser, Role, User};
use crate::pages::admin::AdminNav;
use crate::store::{store_handle_error, store_token, store_user, use_app_store};
use crate::validation::{validate_email, validate_password, validate_required};

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminNav />
            <UserManagement />
        </RequireAdmin>
    }
}

#[component]
fn UserManagement() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let (users, set_users) = signal(LoadState::<Vec<User>>::Loading);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        let token = store_token(&store);
        spawn_load(set_users, async move {
            match token {
                Some(token) => api::list_users(&token).await,
                None => Err(ApiError::Unauthorized("Please log in to continue.".to_string())),
            }
        });
    });

    let current_user_id = move || store_user(&store).map(|u| u.id);

    let delete_user = move |id: String| {
        let Some(token) = store_token(&store) else { return };
        spawn_local(async move {
            match api::delete_user(&token, &id).await {
                Ok(()) => {
                    let _ = set_users.try_update(|state| {
                        if let LoadState::Ready(list) = state {
                            list.retain(|u| u.id != id);
                        }
                    });
                    toasts.success("User deleted");
                }
                Err(e) => {
                    store_handle_error(&store, &e);
                    toasts.api_error(&e);
                }
            }
        });
    };

    view! {
        <section class="admin-users">
            <h1>"Users"</h1>
            <NewUserForm on_created=move |_| set_reload.update(|v| *v += 1) />
            {move || match users.get() {
                LoadState::Loading => view! { <Spinner /> }.into_any(),
                LoadState::Failed(msg) => view! { <ErrorBanner message=msg /> }.into_any(),
                LoadState::Ready(list) => {
                    let me = current_user_id();
                    view! {
                        <table class="admin-table">
                            <thead>
                                <tr><th>"Name"</th><th>"Email"</th><th>"Role"</th><th></th></tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|user| {
                                    let is_me = me.as_deref() == Some(user.id.as_str());
                                    let id = user.id.clone();
                                    view! {
                                        <tr>
                                            <td>{user.name}</td>
                                            <td>{user.email}</td>
                                            <td>{match user.role { Role::Admin => "admin", Role::User => "user" }}</td>
                                            <td>
                                                {if is_me {
                                                    view! { <span class="muted">"(you)"</span> }.into_any()
                                                } else {
                                                    view! {
                                                        <DeleteConfirmButton
                                                            button_class="delete-btn"
                                                            label="Delete"
                                                            on_confirm=move |_| delete_user(id.clone())
                                                        />
                                                    }.into_any()
                                                }}
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn NewUserForm(#[prop(into)] on_created: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::User);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = NewUser {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        let check = validate_required("Name", &user.name)
            .and_then(|_| validate_email(&user.email))
            .and_then(|_| validate_password(&user.password));
        if let Err(msg) = check {
            set_error.set(Some(msg));
            return;
        }
        let Some(token) = store_token(&store) else { return };
        set_error.set(None);
        spawn_local(async move {
            match api::create_user(&token, &user).await {
                Ok(created) => {
                    toasts.success(format!("Created {}", created.email));
                    let _ = set_name.try_set(String::new());
                    let _ = set_email.try_set(String::new());
                    let _ = set_password.try_set(String::new());
                    on_created.run(());
                }
                Err(e) => {
                    store_handle_error(&store, &e);
                    let _ = set_error.try_set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <form class="admin-form" on:submit=on_submit>
            <h2>"Add user"</h2>
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <select on:change=move |ev| {
                set_role.set(if event_target_value(&ev) == "admin" { Role::Admin } else { Role::User })
            }>
                <option value="user" selected=move || role.get() == Role::User>"User"</option>
                <option value="admin" selected=move || role.get() == Role::Admin>"Admin"</option>
            </select>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit">"Create"</button>
        </form>
    }
}
