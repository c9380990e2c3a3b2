use yew::prelude::*;
use yew_router::prelude::*;

use crate::seo::{Seo, SeoProps};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let meta = SeoProps {
        noindex: true,
        ..SeoProps::page("Page not found", "The page you were looking for doesn't exist.", "/404")
    };
    html! {
        <div class="catalog-page">
            <Seo {meta} />
            <div class="not-found-page">
                <h1>{"Page not found"}</h1>
                <p>{"The page you were looking for has moved or never existed."}</p>
                <Link<Route> to={Route::Home} classes="back-link">{"Back to home"}</Link<Route>>
            </div>
            <style>{crate::components::cards::CATALOG_STYLE}</style>
        </div>
    }
}
