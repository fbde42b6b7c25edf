use chrono::Datelike;
use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::contact_modal::ContactModal;
use crate::components::error_boundary::{ErrorBoundary, RenderError, RenderFn, RenderResult};
use crate::pages::content::{
    Testimonial, ABOUT_PARAGRAPHS, AWARDS, BRAND, BRAND_SHORT, CONTACT_INFO, CORE_VALUES,
    FOOTER_COMPANY, FOOTER_SERVICES, NAV_LINKS, SERVICES, SOCIAL_LINKS, STATS, TEAM, TESTIMONIALS,
};
use crate::shell::{ShellAction, ShellState};

const MAX_STARS: u8 = 5;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
    pub on_get_started: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, on_toggle_menu, on_close_menu, on_get_started } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    let close_menu = {
        let on_close_menu = on_close_menu.clone();
        Callback::from(move |_: MouseEvent| on_close_menu.emit(()))
    };

    let get_started = {
        let on_get_started = on_get_started.clone();
        Callback::from(move |_: MouseEvent| on_get_started.emit(()))
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logo gradient-text slide-in-left">{BRAND}</div>
                <div class="nav-links">
                    { for NAV_LINKS.iter().enumerate().map(|(i, link)| html! {
                        <a href={link.href} class="nav-link drop-in" style={format!("animation-delay: {:.1}s", 0.7 + 0.1 * i as f64)}>
                            {link.label}
                        </a>
                    }) }
                    <button class="nav-cta drop-in" style="animation-delay: 1s" onclick={get_started.clone()}>
                        {"Get Started"}
                    </button>
                </div>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href} class="nav-link" onclick={close_menu.clone()}>{link.label}</a>
                    }) }
                    <button class="nav-cta" onclick={get_started}>{"Get Started"}</button>
                </div>
            }
        </nav>
    }
}

pub fn stars(rating: u8) -> RenderResult {
    if rating == 0 || rating > MAX_STARS {
        return Err(RenderError::Section {
            section: "testimonials",
            reason: format!("rating {} is outside 1..={}", rating, MAX_STARS),
        });
    }

    Ok(html! {
        <span class="stars" aria-label={format!("{} out of {} stars", rating, MAX_STARS)}>
            { for (0..rating).map(|_| html! { <span class="star">{"★"}</span> }) }
        </span>
    })
}

fn hero(on_start: Callback<MouseEvent>) -> RenderResult {
    let rating = stars(MAX_STARS)?;

    Ok(html! {
        <section class="hero fade-in">
            <div class="hero-grid">
                <div>
                    <h1 class="hero-title">
                        {"Growing Brands"}
                        <span class="gradient-text">{" Online"}</span>
                    </h1>
                    <p class="hero-text">
                        {"We're a full-service digital agency focused on creating exceptional online experiences that drive growth and deliver results."}
                    </p>
                    <button class="primary-button" onclick={on_start}>
                        {"Start Your Project →"}
                    </button>
                    <div class="social-proof">
                        <div class="avatars">
                            <span></span><span></span><span></span>
                        </div>
                        <span>{"200+ Happy Clients"}</span>
                        {rating}
                        <span>{"4.9/5 Rating"}</span>
                    </div>
                </div>
                <div class="hero-image">
                    <img src="/assets/growth.jpg" alt="Growth chart" />
                </div>
            </div>
        </section>
    })
}

fn stats() -> Html {
    html! {
        <section class="stats slide-in-left">
            { for STATS.iter().map(|stat| html! {
                <div class="stat">
                    <div class="stat-number gradient-text">{stat.number}</div>
                    <div class="stat-label">{stat.label}</div>
                </div>
            }) }
        </section>
    }
}

fn services() -> Html {
    html! {
        <section id="services" class="services zoom-in">
            <div class="section-heading">
                <h2>{"Our Services"}</h2>
                <p>{"We offer comprehensive digital solutions to help your business thrive in the digital landscape"}</p>
            </div>
            <div class="card-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card">
                        <div class="service-icon">{service.icon}</div>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                        <span class="learn-more">{"Learn More →"}</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn about() -> Html {
    html! {
        <section id="about" class="about flip-in">
            <div class="about-grid">
                <div>
                    <h2 class="gradient-text">{"About JDS"}</h2>
                    { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    <a href="#team" class="outline-button">{"Meet Our Team"}</a>
                </div>
                <div>
                    <div class="panel">
                        <h3>{"Our Core Values"}</h3>
                        { for CORE_VALUES.iter().map(|value| html! {
                            <div class="core-value">
                                <span class="dot"></span>
                                <div>
                                    <h4>{value.title}</h4>
                                    <p>{value.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="panel">
                        <h3>{"Awards & Recognition"}</h3>
                        <div class="award-grid">
                            { for AWARDS.iter().map(|award| html! {
                                <div class="award">
                                    <div class="award-icon">{award.icon}</div>
                                    <div class="award-title">{award.title}</div>
                                    <div class="award-year">{award.year.to_string()}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
            <div id="team" class="team">
                <h3>{"Our Team"}</h3>
                <p>{"Meet the talented individuals who bring creativity, expertise, and passion to every project"}</p>
                <div class="team-grid">
                    { for TEAM.iter().map(|member| html! {
                        <div class="team-count">
                            <div class="stat-number gradient-text">{member.count}</div>
                            <div class="stat-label">{member.role}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn testimonial_card(testimonial: &Testimonial) -> RenderResult {
    let rating = stars(testimonial.rating)?;

    Ok(html! {
        <div class="testimonial">
            {rating}
            <p class="quote">{format!("\"{}\"", testimonial.quote)}</p>
            <div class="testimonial-name">{testimonial.name}</div>
            <div class="testimonial-company">{testimonial.company}</div>
        </div>
    })
}

fn testimonials() -> RenderResult {
    let cards = TESTIMONIALS
        .iter()
        .map(testimonial_card)
        .collect::<Result<Html, _>>()?;

    Ok(html! {
        <section class="testimonials zoom-in">
            <div class="section-heading">
                <h2>{"What Our Clients Say"}</h2>
                <p>{"Don't just take our word for it"}</p>
            </div>
            <div class="card-grid">{cards}</div>
        </section>
    })
}

fn cta(on_start: Callback<MouseEvent>) -> Html {
    html! {
        <section class="cta rise-in">
            <h2>{"Ready to Grow Your Brand Online?"}</h2>
            <p>{"Let's work together to create something amazing that drives real results for your business"}</p>
            <button class="light-button" onclick={on_start}>{"Schedule a Consultation"}</button>
        </section>
    }
}

fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand gradient-text">{BRAND_SHORT}</div>
                    <p>{"Growing brands online through exceptional digital experiences."}</p>
                    <div class="socials">
                        { for SOCIAL_LINKS.iter().map(|social| match social.href {
                            Some(href) => html! {
                                <a href={href} target="_blank" rel="noopener noreferrer" class="social">{social.label}</a>
                            },
                            None => html! { <div class="social">{social.label}</div> },
                        }) }
                    </div>
                </div>
                <div>
                    <h3>{"Services"}</h3>
                    { for FOOTER_SERVICES.iter().map(|item| html! { <a href="#">{*item}</a> }) }
                </div>
                <div>
                    <h3>{"Company"}</h3>
                    { for FOOTER_COMPANY.iter().map(|item| html! { <a href="#">{*item}</a> }) }
                </div>
                <div>
                    <h3>{"Contact Info"}</h3>
                    { for CONTACT_INFO.iter().map(|line| html! { <p>{*line}</p> }) }
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, BRAND_SHORT)}</p>
            </div>
        </footer>
    }
}

fn landing_sections(on_start: Callback<MouseEvent>) -> RenderResult {
    let hero = hero(on_start.clone())?;
    let testimonials = testimonials()?;

    Ok(html! {
        <>
            {hero}
            {stats()}
            {services()}
            {about()}
            {testimonials}
            {cta(on_start)}
            {footer()}
        </>
    })
}

#[function_component(Home)]
pub fn home() -> Html {
    let shell = use_reducer_eq(ShellState::default);
    let scroll = use_window_scroll();

    {
        let shell = shell.clone();
        use_effect_with_deps(
            move |(_, y)| {
                shell.dispatch(ShellAction::Scrolled(*y));
                || ()
            },
            scroll,
        );
    }

    let open_contact = {
        let shell = shell.clone();
        Callback::from(move |_| {
            info!("Opening contact form");
            shell.dispatch(ShellAction::OpenContact);
        })
    };

    let close_contact = {
        let shell = shell.clone();
        Callback::from(move |_| {
            info!("Closing contact form");
            shell.dispatch(ShellAction::CloseContact);
        })
    };

    let toggle_menu = {
        let shell = shell.clone();
        Callback::from(move |_| shell.dispatch(ShellAction::ToggleMenu))
    };

    let close_menu = {
        let shell = shell.clone();
        Callback::from(move |_| shell.dispatch(ShellAction::CloseMenu))
    };

    let render = {
        let menu_open = shell.menu_open;
        let open_contact = open_contact.clone();
        RenderFn::new(move || {
            let start = {
                let open_contact = open_contact.clone();
                Callback::from(move |_: MouseEvent| open_contact.emit(()))
            };
            let sections = landing_sections(start)?;
            Ok(html! {
                <>
                    <Nav
                        menu_open={menu_open}
                        on_toggle_menu={toggle_menu.clone()}
                        on_close_menu={close_menu.clone()}
                        on_get_started={open_contact.clone()}
                    />
                    {sections}
                </>
            })
        })
    };

    html! {
        <div class="jds-page">
            <style>{PAGE_CSS}</style>
            <ErrorBoundary render={render} />
            <ContactModal open={shell.contact_open} on_close={close_contact} />
            <BackToTop visible={shell.back_to_top_visible} />
        </div>
    }
}

const PAGE_CSS: &str = r#"
.jds-page {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #111827;
    background: #fff;
    overflow-x: hidden;
}
.gradient-text {
    background: linear-gradient(to right, #dc2626, #fb923c);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
@keyframes slideInLeft { from { opacity: 0; transform: translateX(-100px); } to { opacity: 1; transform: translateX(0); } }
@keyframes dropIn { from { opacity: 0; transform: translateY(-20px); } to { opacity: 1; transform: translateY(0); } }
@keyframes zoomIn { from { opacity: 0; transform: scale(0.5); } to { opacity: 1; transform: scale(1); } }
@keyframes flipIn { from { opacity: 0; transform: perspective(1200px) rotateY(100deg); } to { opacity: 1; transform: perspective(1200px) rotateY(0); } }
@keyframes riseIn { from { opacity: 0; transform: translateY(100px); } to { opacity: 1; transform: translateY(0); } }
.fade-in { animation: fadeIn 1.5s ease-out both; }
.slide-in-left { animation: slideInLeft 1s ease-out both; }
.drop-in { animation: dropIn 0.6s ease-out both; }
.zoom-in { animation: zoomIn 1s ease-out both; }
.flip-in { animation: flipIn 1s ease-out both; }
.rise-in { animation: riseIn 1s ease-out both; }
.top-nav {
    position: sticky;
    top: 0;
    z-index: 30;
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(8px);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
}
.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    font-size: 1.5rem;
    font-weight: 800;
}
.nav-links {
    display: flex;
    align-items: center;
    gap: 2rem;
}
.nav-link {
    color: #374151;
    text-decoration: none;
    font-weight: 500;
}
.nav-link:hover {
    color: #dc2626;
}
.nav-cta, .primary-button {
    border: none;
    border-radius: 9999px;
    padding: 0.75rem 1.5rem;
    color: #fff;
    font-weight: 600;
    cursor: pointer;
    background: linear-gradient(to right, #dc2626, #fb923c);
    transition: transform 0.3s, box-shadow 0.3s;
}
.nav-cta:hover, .primary-button:hover {
    transform: scale(1.05);
    box-shadow: 0 10px 20px rgba(220, 38, 38, 0.25);
}
.burger-menu {
    display: none;
    background: none;
    border: none;
    font-size: 1.5rem;
    cursor: pointer;
}
.mobile-menu {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1rem 1.5rem 1.5rem;
    border-top: 1px solid #f3f4f6;
}
.hero, .stats, .services, .about, .testimonials, .cta, .footer {
    padding: 5rem 1.5rem;
}
.hero-grid, .about-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}
.hero-title {
    font-size: 3.75rem;
    line-height: 1.1;
    margin: 0 0 1.5rem;
}
.hero-title span {
    display: block;
}
.hero-text {
    font-size: 1.25rem;
    color: #4b5563;
    margin-bottom: 2rem;
}
.hero-image img {
    width: 100%;
    border-radius: 1.5rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
}
.social-proof {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 1rem;
    margin-top: 2rem;
    color: #4b5563;
}
.avatars span {
    display: inline-block;
    width: 2rem;
    height: 2rem;
    margin-left: -0.5rem;
    border: 2px solid #fff;
    border-radius: 50%;
    background: linear-gradient(to right, #dc2626, #fb923c);
}
.stars {
    color: #facc15;
}
.stats {
    background: #111827;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    text-align: center;
    gap: 2rem;
}
.stats .stat-label {
    color: #d1d5db;
}
.stat-number {
    font-size: 2.5rem;
    font-weight: 800;
}
.stat-label {
    color: #6b7280;
}
.section-heading {
    text-align: center;
    max-width: 48rem;
    margin: 0 auto 4rem;
}
.section-heading h2 {
    font-size: 2.5rem;
    margin: 0 0 1rem;
}
.section-heading p {
    color: #4b5563;
    font-size: 1.25rem;
}
.card-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
    gap: 2rem;
}
.service-card, .testimonial, .panel {
    background: #fff;
    border-radius: 1.5rem;
    padding: 2rem;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
    transition: transform 0.3s;
}
.service-card:hover {
    transform: translateY(-0.5rem);
}
.service-icon {
    font-size: 2.5rem;
    margin-bottom: 1rem;
}
.learn-more {
    color: #dc2626;
    font-weight: 600;
}
.about {
    background: #f9fafb;
}
.about h2 {
    font-size: 2.5rem;
}
.about p {
    color: #4b5563;
    line-height: 1.7;
}
.outline-button {
    display: inline-block;
    margin-top: 1rem;
    padding: 0.75rem 1.5rem;
    border: 2px solid #dc2626;
    border-radius: 9999px;
    color: #dc2626;
    text-decoration: none;
    font-weight: 600;
}
.panel + .panel {
    margin-top: 2rem;
}
.core-value {
    display: flex;
    gap: 1rem;
    margin-top: 1rem;
}
.core-value h4 {
    margin: 0 0 0.25rem;
}
.core-value p {
    margin: 0;
}
.dot {
    flex: none;
    width: 0.75rem;
    height: 0.75rem;
    margin-top: 0.35rem;
    border-radius: 50%;
    background: linear-gradient(to right, #dc2626, #fb923c);
}
.award-grid, .team-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1rem;
    text-align: center;
}
.award-icon {
    font-size: 2rem;
}
.award-title {
    font-weight: 600;
}
.award-year {
    color: #6b7280;
    font-size: 0.875rem;
}
.team {
    max-width: 80rem;
    margin: 4rem auto 0;
    text-align: center;
}
.team-grid {
    grid-template-columns: repeat(4, 1fr);
    margin-top: 2rem;
}
.quote {
    font-style: italic;
    color: #374151;
}
.testimonial-name {
    font-weight: 700;
}
.testimonial-company {
    color: #6b7280;
}
.cta {
    text-align: center;
    color: #fff;
    background: linear-gradient(to right, #dc2626, #fb923c);
}
.cta h2 {
    font-size: 2.5rem;
    margin: 0 0 1rem;
}
.light-button {
    border: none;
    border-radius: 9999px;
    padding: 1rem 2rem;
    background: #fff;
    color: #dc2626;
    font-weight: 700;
    cursor: pointer;
}
.footer {
    background: #111827;
    color: #d1d5db;
}
.footer-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 2fr 1fr 1fr 1fr;
    gap: 2rem;
}
.footer h3 {
    color: #fff;
}
.footer a {
    display: block;
    color: #9ca3af;
    text-decoration: none;
    margin-bottom: 0.5rem;
}
.footer-brand {
    font-size: 2rem;
    font-weight: 800;
}
.socials {
    display: flex;
    gap: 0.75rem;
}
.socials .social {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    background: #1f2937;
    color: #fff;
    margin: 0;
}
.footer-bottom {
    max-width: 80rem;
    margin: 3rem auto 0;
    padding-top: 2rem;
    border-top: 1px solid #1f2937;
    text-align: center;
    color: #6b7280;
}
@media (max-width: 768px) {
    .nav-links {
        display: none;
    }
    .burger-menu {
        display: block;
    }
    .hero-grid, .about-grid, .footer-grid {
        grid-template-columns: 1fr;
    }
    .hero-title {
        font-size: 2.5rem;
    }
    .stats, .team-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_accept_one_through_five() {
        for rating in 1..=MAX_STARS {
            assert!(stars(rating).is_ok());
        }
    }

    #[test]
    fn stars_reject_out_of_range_ratings() {
        assert_eq!(
            stars(0).unwrap_err().to_string(),
            "testimonials section failed to render: rating 0 is outside 1..=5"
        );
        assert!(stars(6).is_err());
    }

    #[test]
    fn every_testimonial_renders() {
        assert!(testimonials().is_ok());
    }
}
