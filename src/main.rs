use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use chrono::{Datelike, Utc};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod quote;
mod preview;
mod submit;
mod pages {
    pub mod home;
    pub mod portfolio;
}
mod components {
    pub mod preview_modal;
}

use pages::{home::Home, portfolio::Portfolio};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/portfolio")]
    Portfolio,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        },
    }
}

const SECTION_LINKS: &[(&str, &str)] = &[
    ("/#expertise", "Expertise"),
    ("/#quote", "Quote"),
    ("/#blog", "Blog"),
    ("/#contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 20);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"INCODEX"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Portfolio} classes="nav-link">
                            {"Portfolio"}
                        </Link<Route>>
                    </div>
                    {
                        SECTION_LINKS.iter().map(|(href, label)| {
                            html! {
                                <a key={*href} href={*href} class="nav-link" onclick={close_menu.clone()}>
                                    {*label}
                                </a>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </nav>
    }
}

const COMPANY_LINKS: &[&str] = &["About Us", "Careers", "Press", "Privacy"];
const LEGAL_LINKS: &[&str] = &["Terms", "Security", "Cookies", "Support"];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{"INCODEX"}</span>
                    <p>
                        {"Superior software engineering firm specializing in complex system \
                          architectures and intelligent product development. We bridge the gap \
                          between imagination and digital reality."}
                    </p>
                    <a class="footer-mail" href={format!("mailto:{}", config::contact_email())}>
                        { config::contact_email() }
                    </a>
                </div>
                <div class="footer-links">
                    <h4>{"Company"}</h4>
                    <ul>
                        { COMPANY_LINKS.iter().map(|item| html! {
                            <li key={*item}><a href="#">{*item}</a></li>
                        }).collect::<Html>() }
                    </ul>
                </div>
                <div class="footer-links">
                    <h4>{"Legal"}</h4>
                    <ul>
                        { LEGAL_LINKS.iter().map(|item| html! {
                            <li key={*item}><a href="#">{*item}</a></li>
                        }).collect::<Html>() }
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{ format!("© {} INCODEX Systems Corp.", Utc::now().year()) }</span>
                <div class="footer-tags">
                    <span>{"Global Access"}</span>
                    <span>{"Architects of Alpha"}</span>
                </div>
            </div>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
            <style>
                {r#"
                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    background: #000000;
                    color: #ffffff;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                }
                a {
                    color: inherit;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 2rem 0;
                    background: transparent;
                    transition: all 0.5s ease;
                }
                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.3rem;
                    font-weight: 900;
                    letter-spacing: 0.3em;
                    color: #ffffff;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2.5rem;
                }
                .nav-link {
                    font-size: 0.8rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.5);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #ffffff;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #ffffff;
                }
                .site-footer {
                    background: #000000;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 6rem 1.5rem 3rem;
                }
                .footer-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 3rem;
                    margin-bottom: 4rem;
                }
                .footer-logo {
                    font-size: 1.5rem;
                    font-weight: 900;
                    letter-spacing: 0.3em;
                    display: block;
                    margin-bottom: 2rem;
                }
                .footer-brand p {
                    color: rgba(255, 255, 255, 0.5);
                    max-width: 28rem;
                    line-height: 1.7;
                    font-weight: 300;
                    margin-bottom: 2rem;
                }
                .footer-mail {
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.85rem;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }
                .footer-mail:hover {
                    color: #ffffff;
                }
                .footer-links h4 {
                    font-size: 0.65rem;
                    font-weight: 900;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.3);
                    margin-bottom: 2rem;
                }
                .footer-links ul {
                    list-style: none;
                }
                .footer-links li {
                    margin-bottom: 1rem;
                }
                .footer-links a {
                    font-size: 0.8rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.4);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .footer-links a:hover {
                    color: #ffffff;
                }
                .footer-bottom {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding-top: 3rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    color: rgba(255, 255, 255, 0.2);
                    font-size: 0.7rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                }
                .footer-tags {
                    display: flex;
                    gap: 2rem;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1.5rem;
                        padding: 2rem 1.5rem;
                        background: #000000;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                    .footer-content {
                        grid-template-columns: 1fr;
                    }
                    .footer-bottom {
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
