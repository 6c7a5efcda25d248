use yew::prelude::*;

use crate::models::UserRecord;
use crate::routes::Route;
use crate::services::{delete_user, fetch_users};
use crate::utils::PAGE_SIZE;

use super::{use_snackbar, ConfirmDialog, PaginationControls};

#[derive(Properties, PartialEq)]
pub struct AdminUsersPageProps {
    pub navigate: Callback<Route>,
}

#[function_component(AdminUsersPage)]
pub fn admin_users_page(props: &AdminUsersPageProps) -> Html {
    let snackbar = use_snackbar();
    let users = use_state(Vec::<UserRecord>::new);
    let page = use_state(|| 1u32);
    let total_pages = use_state(|| 1u32);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let pending_delete = use_state(|| None::<UserRecord>);
    let refresh = use_state(|| 0u32);

    {
        let users = users.clone();
        let total_pages = total_pages.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((*page, *refresh), move |(page, _)| {
            let page = *page;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_users(page, PAGE_SIZE).await {
                    Ok(response) => {
                        users.set(response.users);
                        total_pages.set(response.total_pages.unwrap_or(1));
                        error.set(None);
                        loading.set(false);
                    }
                    Err(e) => {
                        log::error!("❌ Error loading users: {}", e);
                        error.set(Some(e));
                        loading.set(false);
                    }
                }
            });
            || ()
        });
    }

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let users = users.clone();
        let page = page.clone();
        let refresh = refresh.clone();
        let snackbar = snackbar.clone();
        Callback::from(move |_| {
            let Some(user) = (*pending_delete).clone() else {
                return;
            };
            pending_delete.set(None);

            let users = users.clone();
            let page = page.clone();
            let refresh = refresh.clone();
            let snackbar = snackbar.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_user(&user.id).await {
                    Ok(response) => {
                        snackbar.success(
                            response
                                .message
                                .unwrap_or_else(|| "User deleted".to_string()),
                        );
                        if users.len() == 1 && *page > 1 {
                            page.set(*page - 1);
                        } else {
                            refresh.set(*refresh + 1);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Delete failed: {}", e);
                        snackbar.error(e);
                    }
                }
            });
        })
    };

    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let on_new = {
        let navigate = props.navigate.clone();
        Callback::from(move |_| navigate.emit(Route::AdminUserNew))
    };

    let on_page = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let rows = users.iter().map(|user| {
        let on_edit = {
            let navigate = props.navigate.clone();
            let id = user.id.clone();
            Callback::from(move |_| navigate.emit(Route::AdminUserEdit(id.clone())))
        };
        let on_delete = {
            let pending_delete = pending_delete.clone();
            let user = user.clone();
            Callback::from(move |_| pending_delete.set(Some(user.clone())))
        };
        html! {
            <tr key={user.id.clone()}>
                <td>{&user.name}</td>
                <td>{&user.email}</td>
                <td><span class={format!("role-badge role-{}", user.role.as_str())}>{user.role.as_str()}</span></td>
                <td class="row-actions">
                    <button class="btn" onclick={on_edit}>{"Edit"}</button>
                    <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                </td>
            </tr>
        }
    });

    let dialog_message = (*pending_delete)
        .as_ref()
        .map(|user| format!("Delete user \"{}\"? This cannot be undone.", user.email))
        .unwrap_or_default();

    html! {
        <div class="admin-page">
            <div class="admin-header">
                <h2>{"Users"}</h2>
                <button class="btn btn-primary" onclick={on_new}>{"Add user"}</button>
            </div>

            { if *loading {
                html! { <div class="loading">{"Loading…"}</div> }
            } else if let Some(message) = &*error {
                html! { <div class="page-error">{message.clone()}</div> }
            } else {
                html! {
                    <>
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>{"Name"}</th>
                                    <th>{"Email"}</th>
                                    <th>{"Role"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>{for rows}</tbody>
                        </table>
                        <PaginationControls page={*page} total_pages={*total_pages} on_page={on_page} />
                    </>
                }
            } }

            <ConfirmDialog
                open={pending_delete.is_some()}
                title={"Delete user".to_string()}
                message={dialog_message}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </div>
    }
}
