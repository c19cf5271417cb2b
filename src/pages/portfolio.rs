use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::preview_modal::PreviewModal;
use crate::preview::{BodyScroll, Preview, ScrollLockKeeper, ViewMode};

struct Project {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    url: &'static str,
    category: &'static str,
    image: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Ajker Bangla News",
        subtitle: "আজকের বাংলা - দেশের কণ্ঠ প্রান্তিকের অন্তর",
        description: "A comprehensive digital news portal delivering real-time updates on \
                      politics, economy, and culture across Bangladesh.",
        url: "https://ajkerbangla.news",
        category: "Media & News",
        image: "https://ajkerbangla.news/wp-content/uploads/2025/09/logo_AB.png",
    },
    Project {
        title: "MCRL - DU",
        subtitle: "Material Chemistry Research Lab",
        description: "An extraordinary research facility at the University of Dhaka focusing on \
                      material science innovations and chemical engineering.",
        url: "https://mcrl.du.ac.bd",
        category: "Research",
        image: "https://mcrl.du.ac.bd/wp-content/uploads/2025/11/IMG-20251028-WA0000.jpg",
    },
    Project {
        title: "DUNC - Nanotech Center",
        subtitle: "Dhaka University Nanotechnology Centre",
        description: "Leading the frontier of nanoscale engineering and material physics. \
                      Architects of tomorrow's technological foundations.",
        url: "https://dunc.incodexbd.com",
        category: "Engineering",
        image: "https://dunc.incodexbd.com/wp-content/uploads/2026/02/dunc_logo-04-2048x639.png",
    },
    Project {
        title: "Criminology - DU",
        subtitle: "Department of Criminology",
        description: "Official academic portal for the Department of Criminology at University \
                      of Dhaka, showcasing research, faculty, and programs.",
        url: "https://criminology.du.ac.bd",
        category: "Academic",
        image: "https://criminology.du.ac.bd/images/du_logo.png",
    },
];

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let preview = use_state(Preview::default);
    let scroll_lock = use_mut_ref(|| ScrollLockKeeper::new(BodyScroll));

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Keep the page scroll lock in step with the modal. The cleanup also
    // releases on unmount, so a dismantled page never stays unscrollable.
    {
        let scroll_lock = scroll_lock.clone();
        use_effect_with_deps(
            move |open: &bool| {
                scroll_lock.borrow_mut().sync(*open);
                let scroll_lock = scroll_lock.clone();
                move || scroll_lock.borrow_mut().sync(false)
            },
            preview.is_open(),
        );
    }

    let on_close = {
        let preview = preview.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*preview).clone();
            next.close();
            preview.set(next);
        })
    };

    let on_select_mode = {
        let preview = preview.clone();
        Callback::from(move |mode: ViewMode| {
            let mut next = (*preview).clone();
            next.set_view_mode(mode);
            preview.set(next);
        })
    };

    let back_to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <div class="portfolio-page">
            <div class="portfolio-header">
                <span class="portfolio-kicker">{"Proven Excellence"}</span>
                <h2>{"Our Projects"}</h2>
            </div>
            <div class="project-grid">
                { PROJECTS.iter().map(|project| {
                    let open_preview = {
                        let preview = preview.clone();
                        let url = project.url;
                        let title = project.title;
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*preview).clone();
                            next.open(url, title);
                            preview.set(next);
                        })
                    };
                    html! {
                        <div class="project-card" key={project.title}>
                            <div class="project-image">
                                <img src={project.image} alt={project.title} loading="lazy" />
                            </div>
                            <div class="project-body">
                                <span class="project-category">{ project.category }</span>
                                <h3>{ project.title }</h3>
                                <span class="project-subtitle">{ project.subtitle }</span>
                                <p>{ project.description }</p>
                                <div class="project-actions">
                                    <button class="preview-button" onclick={open_preview}>
                                        {"Live Preview"}
                                    </button>
                                    <a
                                        class="visit-link"
                                        href={project.url}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {"Open Project"}
                                    </a>
                                </div>
                            </div>
                        </div>
                    }
                }).collect::<Html>() }
            </div>
            <div class="portfolio-footer">
                <button class="back-to-top" onclick={back_to_top}>{"Back to top"}</button>
            </div>
            {
                if let (Some(target), Some(mode)) = (preview.target(), preview.view_mode()) {
                    html! {
                        <PreviewModal
                            target={target.clone()}
                            mode={mode}
                            on_close={on_close}
                            on_select_mode={on_select_mode}
                        />
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .portfolio-page {
                    min-height: 100vh;
                    padding: 10rem 1.5rem 8rem;
                }
                .portfolio-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .portfolio-kicker {
                    display: block;
                    font-size: 0.7rem;
                    font-weight: 700;
                    letter-spacing: 0.5em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.3);
                    margin-bottom: 1rem;
                }
                .portfolio-header h2 {
                    font-size: clamp(2rem, 5vw, 3.5rem);
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .project-card {
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 12px;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    transition: border-color 0.5s ease;
                }
                .project-card:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .project-image {
                    aspect-ratio: 16 / 10;
                    background: #141414;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .project-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    padding: 1rem;
                    opacity: 0.7;
                    transition: opacity 0.7s ease;
                }
                .project-card:hover .project-image img {
                    opacity: 1;
                }
                .project-body {
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    flex-grow: 1;
                }
                .project-category {
                    font-size: 0.55rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.3);
                    margin-bottom: 0.4rem;
                }
                .project-body h3 {
                    font-size: 1.1rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    line-height: 1.2;
                }
                .project-subtitle {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.35);
                    margin: 0.4rem 0 1rem;
                }
                .project-body p {
                    font-size: 0.8rem;
                    color: rgba(255, 255, 255, 0.5);
                    line-height: 1.7;
                    font-weight: 300;
                    flex-grow: 1;
                    margin-bottom: 1.5rem;
                }
                .project-actions {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .preview-button {
                    background: #ffffff;
                    color: #000000;
                    border: none;
                    border-radius: 999px;
                    padding: 0.7rem 1.4rem;
                    font-size: 0.65rem;
                    font-weight: 900;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .preview-button:hover {
                    background: #d4d4d4;
                }
                .visit-link {
                    font-size: 0.6rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.2);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .visit-link:hover {
                    color: #ffffff;
                }
                .portfolio-footer {
                    text-align: center;
                    margin-top: 5rem;
                }
                .back-to-top {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.2);
                    font-size: 0.65rem;
                    font-weight: 700;
                    letter-spacing: 0.4em;
                    text-transform: uppercase;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }
                .back-to-top:hover {
                    color: #ffffff;
                }
                "#}
            </style>
        </div>
    }
}
