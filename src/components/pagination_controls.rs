use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationControlsProps {
    pub page: u32,
    pub total_pages: u32,
    pub on_page: Callback<u32>,
}

#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationControlsProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }

    let page = props.page;
    let prev = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| on_page.emit(page - 1))
    };
    let next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| on_page.emit(page + 1))
    };

    html! {
        <div class="pagination">
            <button class="btn" disabled={props.page <= 1} onclick={prev}>{"‹ Prev"}</button>
            <span class="pagination-label">
                {format!("Page {} of {}", props.page, props.total_pages)}
            </span>
            <button class="btn" disabled={props.page >= props.total_pages} onclick={next}>{"Next ›"}</button>
        </div>
    }
}
