use yew::prelude::*;

use crate::config::LandingConfig;
use crate::controller::initialize;
use crate::error::ControllerError;

const FAQ_ITEMS: [(&str, &str, &str); 5] = [
    (
        "faq-what",
        "What is Streamflix?",
        "Streamflix is a streaming service that offers a wide variety of award-winning TV shows, movies, anime, documentaries and more on thousands of internet-connected devices.",
    ),
    (
        "faq-cost",
        "How much does Streamflix cost?",
        "Watch on your smartphone, tablet, smart TV, laptop or streaming device, all for one fixed monthly fee. No extra costs, no contracts.",
    ),
    (
        "faq-where",
        "Where can I watch?",
        "Watch anywhere, anytime. Sign in with your account to watch instantly on the web or on any internet-connected device that offers the app.",
    ),
    (
        "faq-cancel",
        "How do I cancel?",
        "Streamflix is flexible. There are no annoying contracts and no commitments. You can easily cancel your account online in two clicks.",
    ),
    (
        "faq-kids",
        "Is Streamflix good for kids?",
        "The Kids experience is included in your membership to give parents control while kids enjoy family-friendly TV shows and movies in their own space.",
    ),
];

fn signup_form(heading: &str) -> Html {
    html! {
        <form class="email-signup" novalidate={true}>
            <p class="signup-heading">{heading}</p>
            <div class="signup-row">
                <input type="email" placeholder="Email address" autocomplete="email" />
                <button type="submit">{"Get Started"}</button>
            </div>
        </form>
    }
}

/// Splash page. The markup here is what the controller binds to once mounted.
#[function_component(Landing)]
pub fn landing() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                let controller = match start_controller() {
                    Ok(controller) => Some(controller),
                    Err(e) => {
                        log::error!("Landing controller failed to start: {}", e);
                        None
                    }
                };
                move || {
                    drop(controller);
                }
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <header class="header">
                <nav>
                    <span class="logo">{"STREAMFLIX"}</span>
                    <div class="nav-actions">
                        <div class="language-select">
                            <button type="button" class="language-btn">
                                {"English "}
                                <img src="image/down-icon.png" alt="" />
                            </button>
                        </div>
                        <button type="button" class="signin-btn">{"Sign In"}</button>
                    </div>
                </nav>
                <section class="hero">
                    <h1>{"Unlimited movies, TV shows and more"}</h1>
                    <p class="hero-sub">{"Watch anywhere. Cancel anytime."}</p>
                    { signup_form("Ready to watch? Enter your email to create or restart your membership.") }
                </section>
            </header>

            <section class="faq">
                <h2>{"Frequently Asked Questions"}</h2>
                <ul class="accordion">
                    { for FAQ_ITEMS.iter().map(|(id, question, answer)| html! {
                        <li>
                            <input type="radio" name="faq" id={*id} />
                            <label for={*id}>{*question}</label>
                            <div class="answer"><p>{*answer}</p></div>
                        </li>
                    }) }
                </ul>
                { signup_form("Ready to watch? Enter your email to create or restart your membership.") }
            </section>

            <footer class="landing-footer">
                <p>{"Questions? Call 000-800-919-1694"}</p>
            </footer>
        </div>
    }
}

fn start_controller() -> Result<crate::controller::Controller, ControllerError> {
    let document = web_sys::window()
        .ok_or(ControllerError::NoWindow)?
        .document()
        .ok_or(ControllerError::NoWindow)?;

    let config = LandingConfig::from_document(&document).unwrap_or_else(|e| {
        log::warn!("Ignoring landing config: {}", e);
        LandingConfig::default()
    });
    initialize(&document, config)
}

const LANDING_CSS: &str = r#"
body {
    margin: 0;
    background: #000;
    color: #fff;
    font-family: "Helvetica Neue", Helvetica, Arial, sans-serif;
}
.header {
    min-height: 90vh;
    background: radial-gradient(ellipse at top, #3a0a0d 0%, #141414 55%, #000 100%);
    border-bottom: 8px solid #232323;
}
.header nav {
    position: sticky;
    top: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1.5rem 3rem;
    transition: background 0.3s ease, backdrop-filter 0.3s ease;
}
.logo {
    color: #e50914;
    font-size: 2rem;
    font-weight: 800;
    letter-spacing: 0.05em;
}
.nav-actions {
    display: flex;
    align-items: center;
    gap: 1rem;
}
.language-btn {
    display: flex;
    align-items: center;
    gap: 0.4rem;
    padding: 0.4rem 1rem;
    border: 1px solid rgba(255,255,255,0.6);
    border-radius: 4px;
    background: rgba(0,0,0,0.6);
    color: #fff;
    cursor: pointer;
}
.language-btn img {
    width: 12px;
}
.lang-item {
    color: #111;
}
.lang-item:hover {
    background: #f0f0f0;
}
.signin-btn {
    padding: 0.45rem 1rem;
    border: 0;
    border-radius: 4px;
    background: #e50914;
    color: #fff;
    font-weight: 600;
    cursor: pointer;
}
.hero {
    max-width: 900px;
    margin: 0 auto;
    padding: 8rem 1.5rem 4rem;
    text-align: center;
}
.hero h1 {
    font-size: 3rem;
    margin: 0 0 1rem;
}
.hero-sub {
    font-size: 1.5rem;
    margin: 0 0 2rem;
}
.email-signup {
    max-width: 680px;
    margin: 2rem auto 0;
    text-align: center;
}
.signup-heading {
    font-size: 1.2rem;
}
.signup-row {
    display: flex;
    gap: 0.5rem;
}
.signup-row input {
    flex: 1;
    padding: 1rem;
    border: 1px solid rgba(255,255,255,0.5);
    border-radius: 4px;
    background: rgba(0,0,0,0.6);
    color: #fff;
    font-size: 1rem;
}
.signup-row button {
    padding: 0 1.75rem;
    border: 0;
    border-radius: 4px;
    background: #e50914;
    color: #fff;
    font-size: 1.4rem;
    cursor: pointer;
}
.signup-row button:disabled {
    opacity: 0.7;
    cursor: progress;
}
.faq {
    max-width: 900px;
    margin: 0 auto;
    padding: 4rem 1.5rem;
    text-align: center;
}
.faq h2 {
    font-size: 2.5rem;
}
ul.accordion {
    list-style: none;
    margin: 0;
    padding: 0;
    text-align: left;
}
ul.accordion li {
    margin-bottom: 0.5rem;
}
ul.accordion li input {
    display: none;
}
ul.accordion li label {
    display: block;
    padding: 1.5rem;
    background: #2d2d2d;
    font-size: 1.4rem;
    cursor: pointer;
}
ul.accordion li label:focus {
    outline: 2px solid #fff;
}
ul.accordion li .answer {
    max-height: 0;
    overflow: hidden;
    background: #2d2d2d;
    border-top: 1px solid #000;
    transition: max-height 0.3s ease;
}
ul.accordion li .answer p {
    margin: 0;
    padding: 1.5rem;
    font-size: 1.2rem;
}
ul.accordion li input:checked ~ .answer {
    max-height: 600px;
}
.landing-footer {
    padding: 3rem;
    color: rgba(255,255,255,0.7);
    border-top: 8px solid #232323;
}
@media (max-width: 768px) {
    .header nav {
        padding: 1rem 1.25rem;
    }
    .hero h1 {
        font-size: 2rem;
    }
    .signup-row {
        flex-direction: column;
    }
    .signup-row button {
        padding: 0.75rem;
    }
}
"#;
