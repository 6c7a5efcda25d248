// ============================================================================
// AUTH CONTEXT - share the session handle across the component tree
// ============================================================================

use yew::prelude::*;

use super::use_auth::{use_auth, UseAuthHandle};

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    pub children: Children,
}

/// Provider wrapping the app; owns the one auth handle everything reads.
#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let auth = use_auth();

    html! {
        <ContextProvider<UseAuthHandle> context={auth}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

/// Read the shared auth handle. Must be called under AuthContextProvider.
#[hook]
pub fn use_auth_context() -> UseAuthHandle {
    use_context::<UseAuthHandle>().expect("use_auth_context outside AuthContextProvider")
}
