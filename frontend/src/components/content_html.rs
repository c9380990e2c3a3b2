use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContentHtmlProps {
    pub html: &'static str,
    #[prop_or_default]
    pub class: Classes,
}

/// Mounts a trusted, build-time HTML blob from the content catalog.
#[function_component(ContentHtml)]
pub fn content_html(props: &ContentHtmlProps) -> Html {
    let node = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.create_element("div").ok());

    match node {
        Some(div) => {
            div.set_inner_html(props.html);
            html! {
                <div class={props.class.clone()}>
                    { Html::VRef(div.into()) }
                </div>
            }
        }
        None => html! {},
    }
}
