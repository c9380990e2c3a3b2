use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::use_window_scroll;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod content;
mod quote;
mod seo;
mod components {
    pub mod before_after;
    pub mod cards;
    pub mod content_html;
    pub mod faq_item;
    pub mod footer;
    pub mod quote_modal;
    pub mod sections;
    pub mod stat_counter;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod areas;
    pub mod guides;
    pub mod contact;
    pub mod about;
    pub mod reviews;
    pub mod faq;
    pub mod legal;
    pub mod not_found;
}

use components::{footer::Footer, quote_modal::QuoteModal};
use pages::{
    about::About,
    areas::AreaPage,
    contact::Contact,
    faq::Faqs,
    guides::GuidePage,
    home::Home,
    legal::{Legal, LegalDoc},
    not_found::NotFound,
    reviews::Reviews,
    services::ServicePage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/:slug")]
    ServiceDetail { slug: String },
    #[at("/areas")]
    Areas,
    #[at("/areas/:slug")]
    AreaDetail { slug: String },
    #[at("/guides")]
    Guides,
    #[at("/guides/:slug")]
    GuideDetail { slug: String },
    #[at("/contact")]
    Contact,
    #[at("/about")]
    About,
    #[at("/reviews")]
    Reviews,
    #[at("/faqs")]
    Faqs,
    #[at("/privacy-policy")]
    PrivacyPolicy,
    #[at("/terms")]
    Terms,
    #[at("/cookie-policy")]
    CookiePolicy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, on_quote: Callback<()>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {on_quote} /> }
        }
        Route::Services => {
            info!("Rendering Services hub");
            html! { <ServicePage {on_quote} /> }
        }
        Route::ServiceDetail { slug } => {
            info!("Rendering Service page for {}", slug);
            html! { <ServicePage slug={Some(slug)} {on_quote} /> }
        }
        Route::Areas => {
            info!("Rendering Areas hub");
            html! { <AreaPage {on_quote} /> }
        }
        Route::AreaDetail { slug } => {
            info!("Rendering Area page for {}", slug);
            html! { <AreaPage slug={Some(slug)} {on_quote} /> }
        }
        Route::Guides => {
            info!("Rendering Guides hub");
            html! { <GuidePage {on_quote} /> }
        }
        Route::GuideDetail { slug } => {
            info!("Rendering Guide page for {}", slug);
            html! { <GuidePage slug={Some(slug)} {on_quote} /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact {on_quote} /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About {on_quote} /> }
        }
        Route::Reviews => {
            info!("Rendering Reviews page");
            html! { <Reviews {on_quote} /> }
        }
        Route::Faqs => {
            info!("Rendering FAQ page");
            html! { <Faqs {on_quote} /> }
        }
        Route::PrivacyPolicy => {
            info!("Rendering Privacy page");
            html! { <Legal doc={LegalDoc::Privacy} /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <Legal doc={LegalDoc::Terms} /> }
        }
        Route::CookiePolicy => {
            info!("Rendering Cookie policy page");
            html! { <Legal doc={LegalDoc::Cookies} /> }
        }
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        }
    }
}

fn nav_links() -> [(&'static str, Route); 6] {
    [
        ("Home", Route::Home),
        ("Services", Route::Services),
        ("Areas", Route::Areas),
        ("Guides", Route::Guides),
        ("About", Route::About),
        ("Reviews", Route::Reviews),
    ]
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_quote: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 20.0;
    let location = use_location();

    // Navigating anywhere closes the mobile menu.
    {
        let menu_open = menu_open.clone();
        let path = location.map(|l| l.path().to_string()).unwrap_or_default();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            path,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let book_survey = {
        let menu_open = menu_open.clone();
        let on_quote = props.on_quote.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_quote.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/logo-dark.png" alt={config::SITE_NAME} />
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for nav_links().into_iter().map(|(label, route)| html! {
                        <Link<Route> to={route} classes="nav-link">
                            {label}
                        </Link<Route>>
                    }) }
                    <a href={config::tel_href()} class="nav-phone">{config::PHONE_DISPLAY}</a>
                    <button onclick={book_survey} class="nav-cta">
                        {"Book Free Survey"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

/// Jumps back to the top of the page whenever the path changes.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let location = use_location();
    let path = location.map(|l| l.path().to_string()).unwrap_or_default();
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        path,
    );
    html! {}
}

#[function_component]
fn App() -> Html {
    let quote_open = use_state(|| false);

    let open_quote = {
        let quote_open = quote_open.clone();
        Callback::from(move |_: ()| {
            info!("Opening quote form");
            quote_open.set(true);
        })
    };
    let close_quote = {
        let quote_open = quote_open.clone();
        Callback::from(move |_: ()| quote_open.set(false))
    };

    let render = {
        let open_quote = open_quote.clone();
        move |route: Route| switch(route, open_quote.clone())
    };

    html! {
        <BrowserRouter>
            <ScrollToTop />
            <Nav on_quote={open_quote.clone()} />
            <main>
                <Switch<Route> {render} />
            </main>
            <Footer on_quote={open_quote} />
            <QuoteModal is_open={*quote_open} on_close={close_quote} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::log!("logger was already initialised");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::{nav_links, Route};
    use crate::content::ContentKind;
    use yew_router::Routable;

    #[test]
    fn detail_paths_carry_the_slug() {
        let route = Route::ServiceDetail { slug: "leadwork".into() };
        assert_eq!(route.to_path(), "/services/leadwork");
        assert_eq!(
            Route::recognize("/areas/winchester"),
            Some(Route::AreaDetail { slug: "winchester".into() })
        );
    }

    #[test]
    fn legal_pages_have_their_own_paths() {
        assert_eq!(Route::PrivacyPolicy.to_path(), "/privacy-policy");
        assert_eq!(Route::CookiePolicy.to_path(), "/cookie-policy");
        assert_eq!(Route::recognize("/faqs"), Some(Route::Faqs));
    }

    #[test]
    fn hub_labels_match_the_nav() {
        let links = nav_links();
        for kind in [ContentKind::Services, ContentKind::Areas, ContentKind::Guides] {
            let (label, route) = links
                .iter()
                .find(|(label, _)| *label == kind.hub_label())
                .unwrap_or_else(|| panic!("no nav link for {:?}", kind));
            assert_eq!(*label, kind.hub_label());
            assert_eq!(route.to_path(), kind.hub_path());
        }
    }
}
