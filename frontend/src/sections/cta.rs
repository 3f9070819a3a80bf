use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::motion::Motion;

const CTA_CSS: &str = r#"
    .cta {
        position: relative;
        padding: 8rem 0;
        overflow: hidden;
    }
    .cta-backdrop {
        position: absolute;
        inset: 0;
        background: linear-gradient(135deg, #2563eb, #9333ea, #db2777);
    }
    .cta-pattern {
        position: absolute;
        inset: 0;
        opacity: 0.3;
        background-image: radial-gradient(rgba(255, 255, 255, 0.35) 1px, transparent 1px);
        background-size: 24px 24px;
    }
    .cta-body {
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
    }
    .cta h2 {
        font-size: clamp(2.25rem, 6vw, 3.75rem);
        font-weight: 900;
        letter-spacing: -0.025em;
        margin: 0 0 1.5rem;
    }
    .cta p {
        font-size: 1.25rem;
        color: rgba(255, 255, 255, 0.8);
        max-width: 42rem;
        margin: 0 auto 2.5rem;
    }
    .cta-actions {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1rem;
    }
    .cta-actions .btn {
        padding: 1.25rem 2.5rem;
        font-size: 1.125rem;
        font-weight: 700;
    }
    @media (min-width: 640px) {
        .cta-actions {
            flex-direction: row;
        }
    }
"#;

const HEADING: Motion = Motion::fade_up(40.0);
const LEAD: Motion = Motion::fade_up(40.0).delay(100);
const ACTIONS: Motion = Motion::fade_up(40.0).delay(200);

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section class="cta">
            <style>{CTA_CSS}</style>
            <div class="cta-backdrop">
                <div class="cta-pattern"></div>
            </div>

            <div class="container layered">
                <div class="cta-body">
                    <Reveal motion={HEADING} tag="h2">
                        {"Готовы начать свой проект?"}
                    </Reveal>
                    <Reveal motion={LEAD} tag="p">
                        {"Давайте обсудим ваши идеи и создадим что-то невероятное вместе"}
                    </Reveal>
                    <Reveal motion={ACTIONS} class="cta-actions">
                        <button class="btn btn-light">{"Бесплатная консультация"}</button>
                        <button class="btn btn-glass">{"Посмотреть кейсы"}</button>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
