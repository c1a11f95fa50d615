use web_sys::TouchEvent;
use yew::prelude::*;

use crate::config::LandingConfig;
use crate::content::HERO_VIDEO;
use crate::landing::command::{Event, TypewriterSlot};
use crate::landing::mosaic::{CENTER, SLOTS};
use crate::landing::{LandingContent, LandingController};
use crate::utils::runtime::LandingRuntime;

const LANDING_CSS: &str = r#"
    .landing-page {
        font-family: 'Segoe UI', sans-serif;
        color: #1d2b1f;
        background: #f4f7f1;
    }
    .hero {
        position: relative;
        height: 100vh;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .hero-video {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        z-index: 0;
    }
    .hero-content {
        position: relative;
        z-index: 1;
        text-align: center;
        color: #fff;
    }
    .hero-toggle {
        position: absolute;
        bottom: 2rem;
        right: 2rem;
        z-index: 1;
    }
    .overlay {
        position: fixed;
        inset: 0;
        background: rgba(10, 30, 10, 0.85);
        z-index: 10;
        display: flex;
        align-items: center;
        justify-content: center;
        animation: overlay-in 0.7s ease forwards;
    }
    .overlay.closing {
        animation: overlay-out 0.7s ease forwards;
    }
    @keyframes overlay-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes overlay-out {
        from { opacity: 1; }
        to { opacity: 0; }
    }
    .typed-text .caret {
        animation: blink 1s step-end infinite;
    }
    @keyframes blink {
        50% { opacity: 0; }
    }
    .carousel {
        position: relative;
        min-height: 80vh;
        background-size: cover;
        background-position: center;
        display: flex;
        align-items: flex-end;
    }
    .slide-content {
        background: rgba(0, 0, 0, 0.55);
        color: #fff;
        padding: 2rem;
        max-width: 900px;
        margin: 2rem;
        border-radius: 12px;
    }
    .slide-content.animate {
        animation: slide-in 0.8s ease;
    }
    @keyframes slide-in {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .carousel-controls {
        position: absolute;
        top: 1rem;
        right: 1rem;
        display: flex;
        gap: 0.5rem;
    }
    .carousel-dots {
        position: absolute;
        bottom: 1rem;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        gap: 0.5rem;
    }
    .carousel-dots .dot {
        width: 12px;
        height: 12px;
        border-radius: 50%;
        border: none;
        background: rgba(255, 255, 255, 0.5);
    }
    .carousel-dots .dot.active {
        background: #fff;
    }
    .mosaic {
        display: grid;
        grid-template-columns: 1fr 2fr 1fr;
        gap: 1rem;
        padding: 3rem 2rem;
        align-items: center;
    }
    .mosaic video {
        width: 100%;
        border-radius: 12px;
        cursor: pointer;
    }
    .mosaic video.center {
        cursor: default;
        box-shadow: 0 0 24px rgba(0, 80, 0, 0.4);
    }
    .faq-section {
        max-width: 800px;
        margin: 0 auto;
        padding: 3rem 1rem;
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        padding: 1rem;
        font-size: 1.1rem;
        background: none;
        border: none;
        border-bottom: 1px solid #c8d5c0;
        cursor: pointer;
    }
    .faq-answer {
        padding: 1rem;
        line-height: 1.6;
    }
    .footer {
        text-align: center;
        padding: 3rem 1rem;
        background: #1d2b1f;
        color: #fff;
    }
    @media (max-width: 768px) {
        .mosaic {
            grid-template-columns: 1fr;
        }
        .slide-content {
            margin: 1rem;
            padding: 1rem;
        }
    }
"#;

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.changed_touches().get(0).map(|touch| f64::from(touch.screen_x()))
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let revision = use_state(|| 0u64);
    let runtime = {
        let revision = revision.clone();
        let built = use_memo(
            move |_| {
                let on_change = Callback::from(move |next: u64| revision.set(next));
                LandingController::new(LandingConfig::default(), LandingContent::default())
                    .map(|controller| LandingRuntime::new(controller, on_change))
            },
            (),
        );
        match &*built {
            Ok(runtime) => Ok(runtime.clone()),
            Err(e) => Err(e.to_string()),
        }
    };

    // Mount, attach the videos, and release every timer on unmount
    {
        let runtime = runtime.clone().ok();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                if let Some(runtime) = runtime.as_ref() {
                    runtime.dispatch(Event::Mounted);
                    runtime.dispatch(Event::ViewAttached);
                }
                move || {
                    if let Some(runtime) = runtime {
                        runtime.shutdown();
                    }
                }
            },
            (),
        );
    }

    let runtime = match runtime {
        Ok(runtime) => runtime,
        Err(message) => {
            log::error!("Landing page failed to start: {}", message);
            return html! {
                <div class="landing-page">
                    <p class="landing-error">{message}</p>
                </div>
            };
        }
    };

    let dispatch = {
        let runtime = runtime.clone();
        Callback::from(move |event: Event| runtime.dispatch(event))
    };
    let on_toggle_overlay = dispatch.reform(|_: MouseEvent| Event::ToggleOverlay);
    let on_toggle_hero = dispatch.reform(|_: MouseEvent| Event::ToggleHeroVideo);
    let on_prev = dispatch.reform(|_: MouseEvent| Event::PrevSlide);
    let on_next = dispatch.reform(|_: MouseEvent| Event::NextSlide);
    let on_toggle_pause = dispatch.reform(|_: MouseEvent| Event::TogglePause);
    let on_copy = dispatch.reform(|_: MouseEvent| Event::CopyContact);
    let on_touch_start = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                dispatch.emit(Event::TouchStart(x));
            }
        })
    };
    let on_touch_end = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                dispatch.emit(Event::TouchEnd(x));
            }
        })
    };

    let controller = runtime.controller();
    let overlay = controller.overlay();
    let carousel = controller.carousel();
    let slide = carousel.current_slide();
    let contact = controller.contact();

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <header class="hero">
                <video
                    class="hero-video"
                    ref={runtime.hero_ref()}
                    src={HERO_VIDEO}
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                ></video>
                <div class="hero-content">
                    <h1 class="typed-text">
                        {controller.typed(TypewriterSlot::Introduction)}
                        <span class="caret">{"|"}</span>
                    </h1>
                    <button class="hero-cta" onclick={on_toggle_overlay.clone()}>
                        {"Conheça os projetos"}
                    </button>
                </div>
                <button class="hero-toggle" onclick={on_toggle_hero}>
                    {if controller.hero().playing() { "Pausar vídeo" } else { "Reproduzir vídeo" }}
                </button>
            </header>

            if overlay.visible() {
                <div
                    class={classes!("overlay", overlay.closing().then_some("closing"))}
                    onclick={on_toggle_overlay}
                >
                    <div class="overlay-content">
                        <h2>{"V.A.R.D & Bicudo's"}</h2>
                        <p>{"Projetos da Fatec Pompeia para monitoramento inteligente de pragas agrícolas."}</p>
                    </div>
                </div>
            }

            <section
                class="carousel"
                style={format!("background-image: url('{}');", slide.background_image)}
                ontouchstart={on_touch_start}
                ontouchend={on_touch_end}
            >
                <div class={classes!("slide-content", carousel.show_animation().then_some("animate"))}>
                    <h2>{&slide.title}</h2>
                    <p>{&slide.description}</p>
                </div>
                <div class="carousel-controls">
                    <button class="carousel-prev" onclick={on_prev}>{"‹"}</button>
                    <button class="carousel-pause" onclick={on_toggle_pause}>
                        {if carousel.is_paused() { "▶" } else { "❚❚" }}
                    </button>
                    <button class="carousel-next" onclick={on_next}>{"›"}</button>
                </div>
                <div class="carousel-dots">
                    { for (0..carousel.slides().len()).map(|index| {
                        let onclick = dispatch.reform(move |_: MouseEvent| Event::SelectSlide(index));
                        html! {
                            <button
                                class={classes!("dot", (index == carousel.current()).then_some("active"))}
                                {onclick}
                            ></button>
                        }
                    }) }
                </div>
            </section>

            <section class="mosaic">
                { for (0..SLOTS).map(|slot| {
                    let onclick = dispatch.reform(move |_: MouseEvent| Event::VideoClicked(slot));
                    html! {
                        <video
                            class={classes!((slot == CENTER).then_some("center"))}
                            ref={runtime.mosaic_ref(slot)}
                            src={controller.mosaic().source_at(slot).unwrap_or_default().to_string()}
                            muted=true
                            loop=true
                            playsinline=true
                            {onclick}
                        ></video>
                    }
                }) }
            </section>

            <section class="faq-section">
                <h2>{"Perguntas Frequentes"}</h2>
                { for controller.faqs().iter().enumerate().map(|(index, faq)| {
                    let onclick = dispatch.reform(move |_: MouseEvent| Event::ToggleFaq(index));
                    html! {
                        <div class={classes!("faq-item", faq.is_open.then_some("open"))}>
                            <button class="faq-question" {onclick}>
                                <span class="question-text">{&faq.title}</span>
                                <span class="toggle-icon">{if faq.is_open { "−" } else { "+" }}</span>
                            </button>
                            if faq.is_open {
                                <div class="faq-answer">
                                    <p>{&faq.description}</p>
                                </div>
                            }
                        </div>
                    }
                }) }
            </section>

            <footer class="footer">
                <h2 class="typed-text">
                    {controller.typed(TypewriterSlot::Footer)}
                    <span class="caret">{"|"}</span>
                </h2>
                <p class="contact">{contact.contact()}</p>
                <button class="copy-contact" onclick={on_copy}>
                    {if contact.copied() { "Copiado!" } else { "Copiar e-mail" }}
                </button>
            </footer>
        </div>
    }
}
