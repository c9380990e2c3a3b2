use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::ContentKind;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_quote: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Utc::now().year();
    let on_quote = {
        let on_quote = props.on_quote.clone();
        Callback::from(move |_: MouseEvent| on_quote.emit(()))
    };

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <img src="/logo-white.png" alt={config::SITE_NAME} class="footer-logo" />
                    <p>{"Honest roofing across Hampshire. We survey first and quote properly."}</p>
                    <button class="footer-cta" onclick={on_quote}>{"Book Free Survey"}</button>
                </div>
                <div class="footer-links">
                    <h4>{"Services"}</h4>
                    { for ContentKind::Services.entries().iter().map(|s| html! {
                        <Link<Route> to={Route::ServiceDetail { slug: s.slug.to_string() }}>{s.title}</Link<Route>>
                    }) }
                </div>
                <div class="footer-links">
                    <h4>{"Areas"}</h4>
                    { for ContentKind::Areas.entries().iter().map(|a| html! {
                        <Link<Route> to={Route::AreaDetail { slug: a.slug.to_string() }}>{a.area_name()}</Link<Route>>
                    }) }
                </div>
                <div class="footer-contact">
                    <h4>{"Contact"}</h4>
                    <a href={config::tel_href()}>{config::PHONE_DISPLAY}</a>
                    <a href={config::mailto_href("Roofing enquiry")}>{config::EMAIL}</a>
                    <p>{"Mon-Fri, 8am - 6pm"}</p>
                </div>
            </div>
            <div class="footer-legal">
                <span>{format!("© {} {}. All rights reserved.", year, config::SITE_NAME)}</span>
                <Link<Route> to={Route::PrivacyPolicy}>{"Privacy Policy"}</Link<Route>>
                <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                <Link<Route> to={Route::CookiePolicy}>{"Cookie Policy"}</Link<Route>>
            </div>
        </footer>
    }
}
