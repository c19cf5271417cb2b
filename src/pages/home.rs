use yew::prelude::*;
use chrono::NaiveDate;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::quote::{self, Selection};
use crate::submit::{DiscardSubmitter, QuoteFields, QuoteSubmitter, SubmitError};

struct Package {
    title: &'static str,
    price_range: &'static str,
    features: &'static [&'static str],
    action: &'static str,
}

const PACKAGES: &[Package] = &[
    Package {
        title: "Fifty Shades of Website",
        price_range: "$157 – $900",
        features: &[
            "E-commerce",
            "Portfolio",
            "Personal Blogs",
            "News Portal",
            "Organisations",
            "Travel Agency",
            "Fundraising",
        ],
        action: "Order Now",
    },
    Package {
        title: "Innovative Graphics & SEO",
        price_range: "$17 – $500",
        features: &[
            "Logo Design",
            "Banner Design",
            "Vector Illustrations",
            "UI/UX Design",
            "On-Page SEO",
            "Off-Page SEO",
        ],
        action: "Contact Now",
    },
];

const EXPERTISE: &[(&str, &str)] = &[
    (
        "Web Design and Development",
        "Crafting immersive digital experiences with cutting-edge technologies. From responsive \
         interfaces to complex backend systems, we build for performance and scale.",
    ),
    (
        "SEO Optimisation & Marketing",
        "Driving growth through data-backed strategies. We optimize your digital presence to \
         ensure your brand reaches the right audience at the perfect moment.",
    ),
    (
        "Graphics Design",
        "Visual storytelling that resonates. Our design philosophy combines minimalist \
         aesthetics with powerful brand identity to make your vision unforgettable.",
    ),
    (
        "Backlink Building",
        "Strengthening your domain authority through high-quality backlink strategies. We focus \
         on ethical, high-impact link acquisition to boost your search rankings.",
    ),
    (
        "E-commerce Solution",
        "Building scalable online stores that convert. From seamless checkout experiences to \
         inventory management, we create shops that drive revenue.",
    ),
];

struct Review {
    title: &'static str,
    content: &'static str,
    author: &'static str,
    role: &'static str,
}

const REVIEWS: &[Review] = &[
    Review {
        title: "A game-changer for our online news portal!",
        content: "The team at INCODEX delivered a fast, dynamic website for our news agency. The \
                  design perfectly balances aesthetics with functionality, easy to navigate and \
                  stay updated. We've got more engagement and traffic.",
        author: "A R Ahmed Sujon",
        role: "Editor, Nobojug News",
    },
    Review {
        title: "Our online store to a sales powerhouse!",
        content: "We couldn't be happier with the e-commerce website built by INCODEX. The design \
                  is sleek, user-friendly, and optimized for conversions. Our customers love the \
                  smooth shopping experience, and we've already seen an increase in sales.",
        author: "Shamim Reza",
        role: "Owner, Shopping 24",
    },
    Review {
        title: "A perfect platform for our mission!",
        content: "The website INCODEX created is professional, user-friendly, and truly reflects \
                  our organization's values. It's made connecting with our community much easier. \
                  We're thrilled with the results and highly recommend their work!",
        author: "Tasbil Tonmoy",
        role: "President, CDFB",
    },
];

struct Post {
    title: &'static str,
    published: (i32, u32, u32),
    excerpt: &'static str,
}

const POSTS: &[Post] = &[
    Post {
        title: "The Importance of Website Maintenance",
        published: (2024, 10, 1),
        excerpt: "Launching a website is just the beginning; ongoing maintenance is crucial to \
                  ensure its continued success. Regular website maintenance involves updating \
                  content, monitoring performance, and addressing technical issues to provide…",
    },
    Post {
        title: "Harnessing the Power of Cloud Computing",
        published: (2024, 9, 28),
        excerpt: "Cloud computing has revolutionized the way we store, manage, and access data. \
                  By providing on-demand computing resources over the internet, cloud computing \
                  offers numerous benefits that cater to the needs…",
    },
    Post {
        title: "The Importance of Machine Learning in Today's World",
        published: (2024, 8, 2),
        excerpt: "Machine learning, a subset of artificial intelligence, has become a \
                  game-changer in various industries. It involves training algorithms to learn \
                  from data, enabling systems to make predictions and decisions without…",
    },
];

fn format_post_date(published: (i32, u32, u32)) -> String {
    let (year, month, day) = published;
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

#[function_component(Hero)]
fn hero() -> Html {
    let stage = use_state(|| 0u32);

    {
        let stage_clone = stage.clone();
        let stage_setter = stage.setter();
        use_effect(move || {
            // Reveal the headline lines one at a time, then stop
            if *stage_clone < 5 {
                let delay = match *stage_clone {
                    0 => 150,
                    4 => 500,
                    _ => 350,
                };
                let next_stage = *stage_clone + 1;
                let timeout = Timeout::new(delay, move || {
                    stage_setter.set(next_stage);
                });
                timeout.forget();
            }
            || ()
        });
    }

    let line_class = |at: u32| {
        if *stage >= at {
            "hero-line revealed"
        } else {
            "hero-line"
        }
    };

    html! {
        <section class="hero">
            <div class="hero-backdrop">{"INCODEX"}</div>
            <div class="hero-inner">
                <h1 class={line_class(1)}>{"Beautiful things"}</h1>
                <h1 class={line_class(2)}>{"come together"}</h1>
                <h1 class={classes!(line_class(3), "hero-line-last")}>
                    {"one "}<span class="hero-dim">{"byte"}</span>{" at a time."}
                </h1>
                <p class={if *stage >= 4 { "hero-sub revealed" } else { "hero-sub" }}>
                    {"You have no idea how "}<strong>{"rapidly you can grow."}</strong>
                    <br />
                    {"Let's find out together."}
                </p>
                <a href="#quote" class={if *stage >= 5 { "hero-cta revealed" } else { "hero-cta" }}>
                    {"Start Project"}
                </a>
            </div>
            <div class="scroll-indicator"></div>
        </section>
    }
}

#[function_component(Packages)]
fn packages() -> Html {
    html! {
        <section class="packages">
            <h2>{"Businesses growing with INCODEX"}</h2>
            <div class="package-badges">
                <span>{"Free maintenance first month"}</span>
                <span>{"Powerful upgrade options"}</span>
            </div>
            <div class="package-grid">
                { PACKAGES.iter().map(|package| html! {
                    <div class="package-card" key={package.title}>
                        <h3>{ package.title }</h3>
                        <p class="package-price">{ package.price_range }</p>
                        <ul>
                            { package.features.iter().map(|feature| html! {
                                <li key={*feature}>{*feature}</li>
                            }).collect::<Html>() }
                        </ul>
                        <a href="#quote" class="package-action">{ package.action }</a>
                    </div>
                }).collect::<Html>() }
            </div>
        </section>
    }
}

#[function_component(Expertise)]
fn expertise() -> Html {
    html! {
        <section id="expertise" class="expertise">
            <h2>{"Our Expertise"}</h2>
            <div class="expertise-grid">
                { EXPERTISE.iter().map(|(title, blurb)| html! {
                    <div class="expertise-card" key={*title}>
                        <h3>{*title}</h3>
                        <p>{*blurb}</p>
                    </div>
                }).collect::<Html>() }
            </div>
        </section>
    }
}

#[function_component(QuoteSection)]
fn quote_section() -> Html {
    let fields = use_state(QuoteFields::default);
    let selection = use_state(Selection::new);
    let status = use_state(|| None::<Result<(), SubmitError>>);

    let onsubmit = {
        let fields = fields.clone();
        let selection = selection.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let result = DiscardSubmitter.submit(&fields, &selection.ids(), selection.total());
            status.set(Some(result));
        })
    };

    html! {
        <section id="quote" class="quote-section">
            <div class="quote-header">
                <h2>{"Request a Quote"}</h2>
                <p>{"Fill out the form below and we'll get back to you with a tailored proposal."}</p>
            </div>
            <form onsubmit={onsubmit}>
                <div class="field-row">
                    <div class="field">
                        <label>{"First Name"}</label>
                        <input
                            type="text"
                            placeholder="John"
                            value={fields.first_name.clone()}
                            onchange={let fields = fields.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*fields).clone();
                                next.first_name = input.value();
                                fields.set(next);
                            }}
                        />
                    </div>
                    <div class="field">
                        <label>{"Last Name"}</label>
                        <input
                            type="text"
                            placeholder="Doe"
                            value={fields.last_name.clone()}
                            onchange={let fields = fields.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*fields).clone();
                                next.last_name = input.value();
                                fields.set(next);
                            }}
                        />
                    </div>
                </div>
                <div class="field-row">
                    <div class="field">
                        <label>{"Email Address"}</label>
                        <input
                            type="email"
                            placeholder="john@example.com"
                            value={fields.email.clone()}
                            onchange={let fields = fields.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*fields).clone();
                                next.email = input.value();
                                fields.set(next);
                            }}
                        />
                    </div>
                    <div class="field">
                        <label>{"Subject"}</label>
                        <input
                            type="text"
                            placeholder="Project Inquiry"
                            value={fields.subject.clone()}
                            onchange={let fields = fields.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*fields).clone();
                                next.subject = input.value();
                                fields.set(next);
                            }}
                        />
                    </div>
                </div>
                <div class="service-select">
                    <div class="service-select-header">
                        <label>{"Select Services"}</label>
                        <div class="estimate">
                            <span class="estimate-label">{"Estimated Investment"}</span>
                            <span class="estimate-total">{ format!("${}", selection.total()) }</span>
                            <span class="estimate-currency">{"USD"}</span>
                        </div>
                    </div>
                    <div class="service-grid">
                        { quote::CATALOG.iter().map(|service| {
                            let onclick = {
                                let selection = selection.clone();
                                let id = service.id;
                                Callback::from(move |_| {
                                    let mut next = (*selection).clone();
                                    next.toggle(id);
                                    selection.set(next);
                                })
                            };
                            let class = if selection.contains(service.id) {
                                "service-option selected"
                            } else {
                                "service-option"
                            };
                            html! {
                                <button type="button" key={service.id} class={class} onclick={onclick}>
                                    { service.name }
                                </button>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>
                <div class="field">
                    <label>{"Your Message"}</label>
                    <textarea
                        rows="6"
                        placeholder="Tell us about your project..."
                        value={fields.message.clone()}
                        onchange={let fields = fields.clone(); move |e: Event| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            let mut next = (*fields).clone();
                            next.message = input.value();
                            fields.set(next);
                        }}
                    />
                </div>
                {
                    match (*status).as_ref() {
                        Some(Ok(())) => html! {
                            <p class="form-status success">
                                {"Request received. We'll get back to you with a tailored proposal."}
                            </p>
                        },
                        Some(Err(e)) => html! {
                            <p class="form-status error">{ e.to_string() }</p>
                        },
                        None => html! {},
                    }
                }
                <div class="quote-submit">
                    <button type="submit">{"Quote"}</button>
                </div>
            </form>
        </section>
    }
}

#[function_component(ServicesInfo)]
fn services_info() -> Html {
    html! {
        <section class="services-info">
            <h2>{"Top-notch services for your business"}</h2>
            <p>
                {"Our expertise in website design, development, graphic design, and SEO ensures \
                  that you not only stand out online but also attract and engage your target \
                  audience. With a commitment to quality and innovation, we are dedicated to \
                  helping your business thrive in the digital landscape."}
            </p>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <h2>{"Client Voices"}</h2>
            <div class="spotlight">
                <h3>{"\"We feel confident to use their skills to boost our presence online!\""}</h3>
                <p>
                    {"Working with INCODEX was a great experience. They developed a modern, \
                      user-friendly website that exceeded our expectations. Their attention to \
                      detail and dedication to delivering high-quality work stood out. The \
                      positive feedback from our users has been overwhelming. We highly recommend \
                      their services."}
                </p>
                <span class="spotlight-author">{"Chairman"}</span>
                <span class="spotlight-role">{"Dept. of Criminology, University of Dhaka"}</span>
            </div>
            <div class="review-grid">
                { REVIEWS.iter().map(|review| html! {
                    <div class="review-card" key={review.author}>
                        <h4>{ review.title }</h4>
                        <p>{ review.content }</p>
                        <span class="review-author">{ review.author }</span>
                        <span class="review-role">{ review.role }</span>
                    </div>
                }).collect::<Html>() }
            </div>
        </section>
    }
}

#[function_component(Journal)]
fn journal() -> Html {
    html! {
        <section id="blog" class="journal">
            <h2>{"The Journal"}</h2>
            <div class="journal-grid">
                { POSTS.iter().map(|post| html! {
                    <article class="journal-card" key={post.title}>
                        <span class="journal-date">{ format_post_date(post.published) }</span>
                        <h3>{ post.title }</h3>
                        <p>{ post.excerpt }</p>
                        <a href="#blog" class="journal-read">{"Read Story"}</a>
                    </article>
                }).collect::<Html>() }
            </div>
        </section>
    }
}

#[function_component(ClosingCta)]
fn closing_cta() -> Html {
    html! {
        <section class="closing-cta">
            <h2>
                {"Beautiful things"}<br />
                {"come together"}<br />
                {"one "}<span class="hero-dim">{"byte"}</span>{" at a time."}
            </h2>
            <p>{"Discover just how capable you really are"}</p>
            <a href="#quote" class="cta-button">{"Order Now"}</a>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
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

    html! {
        <div class="home-page">
            <Hero />
            <Packages />
            <Expertise />
            <QuoteSection />
            <ServicesInfo />
            <Testimonials />
            <Journal />
            <ClosingCta />
            <style>
                {r#"
                .home-page section {
                    padding: 8rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .home-page h2 {
                    font-size: clamp(2rem, 5vw, 3.5rem);
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    border-top: none;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: clamp(6rem, 22vw, 20rem);
                    font-weight: 900;
                    letter-spacing: 0.1em;
                    color: rgba(255, 255, 255, 0.04);
                    pointer-events: none;
                    user-select: none;
                }
                .hero-inner {
                    position: relative;
                    z-index: 2;
                    text-align: center;
                    max-width: 56rem;
                    padding-top: 5rem;
                }
                .hero-line {
                    font-size: clamp(2.5rem, 7vw, 4.5rem);
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                    line-height: 1.1;
                    opacity: 0;
                    transform: translateY(100%);
                    transition: opacity 0.8s ease, transform 0.8s cubic-bezier(0.33, 1, 0.68, 1);
                }
                .hero-line.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .hero-line-last {
                    font-size: clamp(2rem, 6vw, 3.8rem);
                    margin-bottom: 2rem;
                }
                .hero-dim {
                    color: rgba(255, 255, 255, 0.4);
                }
                .hero-sub {
                    font-size: 1.2rem;
                    font-weight: 300;
                    color: rgba(255, 255, 255, 0.5);
                    line-height: 1.7;
                    margin-bottom: 3rem;
                    opacity: 0;
                    transition: opacity 0.8s ease;
                }
                .hero-sub.revealed {
                    opacity: 1;
                }
                .hero-sub strong {
                    color: #ffffff;
                    text-transform: uppercase;
                }
                .hero-cta {
                    display: inline-block;
                    background: #ffffff;
                    color: #000000;
                    padding: 1.5rem 3rem;
                    border-radius: 999px;
                    font-weight: 900;
                    font-size: 1.1rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    text-decoration: none;
                    opacity: 0;
                    transform: scale(0.9);
                    transition: opacity 0.5s ease, transform 0.5s ease, background 0.3s ease;
                }
                .hero-cta.revealed {
                    opacity: 1;
                    transform: scale(1);
                }
                .hero-cta:hover {
                    background: #d4d4d4;
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 1.5rem;
                    width: 1px;
                    height: 3rem;
                    background: linear-gradient(to bottom, #ffffff, transparent);
                }
                .package-badges {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                    margin-bottom: 4rem;
                }
                .package-badges span {
                    padding: 0.5rem 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    font-size: 0.7rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.7);
                }
                .package-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2.5rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .package-card {
                    padding: 3rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: #0a0a0a;
                    display: flex;
                    flex-direction: column;
                    transition: transform 0.4s ease, border-color 0.4s ease;
                }
                .package-card:hover {
                    transform: translateY(-10px);
                    border-color: rgba(255, 255, 255, 0.4);
                }
                .package-card h3 {
                    font-size: 1.8rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    margin-bottom: 0.5rem;
                }
                .package-price {
                    font-size: 1.5rem;
                    font-weight: 300;
                    color: rgba(255, 255, 255, 0.3);
                    margin-bottom: 2.5rem;
                }
                .package-card ul {
                    list-style: none;
                    flex-grow: 1;
                    margin-bottom: 3rem;
                }
                .package-card li {
                    color: rgba(255, 255, 255, 0.6);
                    font-weight: 300;
                    font-size: 0.9rem;
                    letter-spacing: 0.05em;
                    padding: 0.6rem 0;
                    padding-left: 1.5rem;
                    position: relative;
                }
                .package-card li::before {
                    content: '';
                    position: absolute;
                    left: 0;
                    top: 50%;
                    width: 6px;
                    height: 6px;
                    background: #ffffff;
                    opacity: 0.3;
                }
                .package-action {
                    display: block;
                    text-align: center;
                    padding: 1.2rem;
                    border: 1px solid #ffffff;
                    color: #ffffff;
                    font-weight: 900;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    text-decoration: none;
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .package-action:hover {
                    background: #ffffff;
                    color: #000000;
                }
                .expertise-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .expertise-card {
                    padding: 2.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: #0a0a0a;
                    min-height: 280px;
                    transition: border-color 0.5s ease;
                }
                .expertise-card:hover {
                    border-color: #ffffff;
                }
                .expertise-card h3 {
                    font-size: 1.1rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    margin-bottom: 1.5rem;
                    line-height: 1.4;
                }
                .expertise-card p {
                    color: rgba(255, 255, 255, 0.4);
                    font-weight: 300;
                    line-height: 1.7;
                }
                .quote-section {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .quote-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .quote-header h2 {
                    margin-bottom: 1.5rem;
                }
                .quote-header p {
                    color: rgba(255, 255, 255, 0.5);
                    font-weight: 300;
                    font-size: 0.85rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .field-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                .field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .field label {
                    font-size: 0.65rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    color: rgba(255, 255, 255, 0.3);
                    margin-left: 1rem;
                }
                .field input,
                .field textarea {
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.2rem 2rem;
                    color: #ffffff;
                    font-size: 0.9rem;
                    letter-spacing: 0.1em;
                    transition: border-color 0.3s ease;
                    resize: none;
                }
                .field input:focus,
                .field textarea:focus {
                    outline: none;
                    border-color: rgba(255, 255, 255, 0.4);
                }
                .field input::placeholder,
                .field textarea::placeholder {
                    color: rgba(255, 255, 255, 0.15);
                }
                .service-select {
                    margin: 3rem 0;
                }
                .service-select-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    padding: 0 1rem;
                    margin-bottom: 1.5rem;
                }
                .service-select-header label {
                    font-size: 0.65rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    color: rgba(255, 255, 255, 0.3);
                }
                .estimate {
                    text-align: right;
                }
                .estimate-label {
                    display: block;
                    font-size: 0.55rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    color: rgba(255, 255, 255, 0.2);
                    margin-bottom: 0.4rem;
                }
                .estimate-total {
                    font-size: 2rem;
                    font-weight: 900;
                    letter-spacing: -0.03em;
                }
                .estimate-currency {
                    font-size: 0.65rem;
                    font-weight: 700;
                    color: rgba(255, 255, 255, 0.2);
                    margin-left: 0.3rem;
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }
                .service-option {
                    padding: 1.2rem 1rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    background: #0a0a0a;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.65rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    cursor: pointer;
                    transition: all 0.4s ease;
                }
                .service-option:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .service-option.selected {
                    background: #ffffff;
                    color: #000000;
                    border-color: #ffffff;
                    box-shadow: 0 0 30px rgba(255, 255, 255, 0.1);
                }
                .form-status {
                    text-align: center;
                    font-size: 0.85rem;
                    letter-spacing: 0.05em;
                    margin-top: 2rem;
                }
                .form-status.success {
                    color: #7ee2a8;
                }
                .form-status.error {
                    color: #ff7e7e;
                }
                .quote-submit {
                    display: flex;
                    justify-content: center;
                    margin-top: 3rem;
                    padding-top: 3rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .quote-submit button {
                    background: #ffffff;
                    color: #000000;
                    border: none;
                    padding: 1.6rem 6rem;
                    border-radius: 999px;
                    font-size: 1.2rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .quote-submit button:hover {
                    background: #d4d4d4;
                }
                .services-info {
                    max-width: 52rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .services-info p {
                    font-size: 1.15rem;
                    color: rgba(255, 255, 255, 0.6);
                    line-height: 1.8;
                    font-weight: 300;
                }
                .spotlight {
                    max-width: 52rem;
                    margin: 0 auto 6rem;
                    padding-bottom: 5rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    text-align: center;
                }
                .spotlight h3 {
                    font-size: clamp(1.5rem, 4vw, 2.3rem);
                    font-weight: 900;
                    text-transform: uppercase;
                    line-height: 1.2;
                    margin-bottom: 2.5rem;
                }
                .spotlight p {
                    font-size: 1.1rem;
                    color: rgba(255, 255, 255, 0.5);
                    line-height: 1.8;
                    font-style: italic;
                    font-weight: 300;
                    margin-bottom: 3rem;
                }
                .spotlight-author {
                    display: block;
                    font-weight: 900;
                    font-size: 0.85rem;
                    letter-spacing: 0.4em;
                    text-transform: uppercase;
                    margin-bottom: 0.5rem;
                }
                .spotlight-role {
                    display: block;
                    font-size: 0.65rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.3);
                }
                .review-grid,
                .journal-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 3rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .review-card h4 {
                    font-size: 1.1rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    line-height: 1.3;
                    margin-bottom: 1.5rem;
                }
                .review-card p {
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.4);
                    line-height: 1.7;
                    font-weight: 300;
                    margin-bottom: 2rem;
                }
                .review-author {
                    display: block;
                    font-size: 0.65rem;
                    font-weight: 900;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                }
                .review-role {
                    display: block;
                    font-size: 0.55rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.2);
                    margin-top: 0.4rem;
                }
                .journal-date {
                    display: block;
                    font-size: 0.65rem;
                    font-weight: 900;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.3);
                    margin-bottom: 1.8rem;
                }
                .journal-card h3 {
                    font-size: 1.2rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    line-height: 1.3;
                    margin-bottom: 1.5rem;
                }
                .journal-card p {
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.4);
                    line-height: 1.7;
                    font-weight: 300;
                    margin-bottom: 2rem;
                }
                .journal-read {
                    font-size: 0.65rem;
                    font-weight: 900;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.4);
                    text-decoration: none;
                    transition: color 0.4s ease;
                }
                .journal-read:hover {
                    color: #ffffff;
                }
                .closing-cta {
                    text-align: center;
                }
                .closing-cta h2 {
                    margin-bottom: 2rem;
                }
                .closing-cta p {
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.6);
                    margin-bottom: 3rem;
                }
                .cta-button {
                    display: inline-block;
                    background: #ffffff;
                    color: #000000;
                    padding: 1.5rem 3rem;
                    border-radius: 999px;
                    font-size: 1.2rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }
                .cta-button:hover {
                    background: #d4d4d4;
                }
                @media (max-width: 768px) {
                    .home-page section {
                        padding: 5rem 1rem;
                    }
                    .field-row {
                        grid-template-columns: 1fr;
                    }
                    .service-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .service-select-header {
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1.5rem;
                    }
                    .estimate {
                        text-align: left;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_dates_format_without_zero_padding() {
        assert_eq!(format_post_date((2024, 10, 1)), "October 1, 2024");
        assert_eq!(format_post_date((2024, 9, 28)), "September 28, 2024");
        assert_eq!(format_post_date((2024, 8, 2)), "August 2, 2024");
    }

    #[test]
    fn invalid_post_date_formats_empty() {
        assert_eq!(format_post_date((2024, 13, 1)), "");
    }
}
