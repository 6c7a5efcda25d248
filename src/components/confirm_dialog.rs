use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub title: String,
    pub message: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h3>{&props.title}</h3>
                <p>{&props.message}</p>
                <div class="dialog-actions">
                    <button class="btn" onclick={on_cancel}>{"Cancel"}</button>
                    <button class="btn btn-danger" onclick={on_confirm}>{"Delete"}</button>
                </div>
            </div>
        </div>
    }
}
