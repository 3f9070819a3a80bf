use yew::prelude::*;

use crate::components::icon::SafeIcon;
use crate::components::reveal::Reveal;
use crate::content::{ABOUT_CHECKLIST, ABOUT_IMAGE_URL};
use crate::motion::Motion;
use crate::page::anchor;

const ABOUT_CSS: &str = r#"
    .about-grid {
        display: grid;
        gap: 4rem;
        align-items: center;
    }
    .about-media {
        position: relative;
    }
    .about-photo {
        position: relative;
        aspect-ratio: 1 / 1;
        border-radius: 1.5rem;
        overflow: hidden;
    }
    .about-photo img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .about-photo-tint {
        position: absolute;
        inset: 0;
        background: linear-gradient(45deg, rgba(37, 99, 235, 0.2), rgba(147, 51, 234, 0.2));
        mix-blend-mode: overlay;
    }
    .rating-card {
        position: absolute;
        bottom: -2rem;
        right: -2rem;
        padding: 1.5rem;
        border-radius: 1rem;
        background: rgba(15, 23, 42, 0.9);
        backdrop-filter: blur(24px);
        border: 1px solid rgba(255, 255, 255, 0.1);
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
    }
    .rating-card-row {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .rating-star {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        background: linear-gradient(135deg, #3b82f6, #a855f7);
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
    }
    .rating-value {
        font-size: 1.5rem;
        font-weight: 900;
    }
    .rating-label {
        font-size: 0.875rem;
        color: #94a3b8;
    }
    .about-text {
        font-size: 1.125rem;
        color: #94a3b8;
        line-height: 1.7;
        margin: 0 0 2rem;
    }
    .checklist {
        list-style: none;
        padding: 0;
        margin: 0 0 2.5rem;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .checklist-item {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        color: #cbd5e1;
    }
    .checklist-mark {
        width: 1.5rem;
        height: 1.5rem;
        flex-shrink: 0;
        border-radius: 9999px;
        background: rgba(16, 185, 129, 0.2);
        display: flex;
        align-items: center;
        justify-content: center;
        color: #34d399;
    }
    @media (min-width: 1024px) {
        .about-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
"#;

const MEDIA: Motion = Motion::slide_x(-40.0);
const RATING: Motion = Motion::pop(0.8).delay(300);
const COPY: Motion = Motion::slide_x(40.0);
const CHECK_ITEM: Motion = Motion::slide_x(20.0).duration(400);

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={anchor::ABOUT} class="section">
            <style>{ABOUT_CSS}</style>
            <div class="container">
                <div class="about-grid">
                    <Reveal motion={MEDIA} class="about-media">
                        <div class="about-photo">
                            <img src={ABOUT_IMAGE_URL} alt="Team" loading="lazy" />
                            <div class="about-photo-tint"></div>
                        </div>

                        <Reveal motion={RATING} class="rating-card">
                            <div class="rating-card-row">
                                <div class="rating-star">
                                    <SafeIcon name="star" size={24} />
                                </div>
                                <div>
                                    <div class="rating-value">{"4.9/5"}</div>
                                    <div class="rating-label">{"Рейтинг клиентов"}</div>
                                </div>
                            </div>
                        </Reveal>
                    </Reveal>

                    <Reveal motion={COPY}>
                        <span class="section-badge emerald">{"О нас"}</span>
                        <h2 class="section-title">
                            <span class="gradient-text-vertical">{"Мы команда экспертов,"}</span>
                            <br />
                            <span class="muted">{"влюбленных в технологии"}</span>
                        </h2>
                        <p class="about-text">
                            {"С 2016 года мы помогаем компаниям трансформировать свои идеи в цифровую реальность. \
                              Наш подход сочетает техническое совершенство с креативным дизайном."}
                        </p>

                        <ul class="checklist">
                            { for ABOUT_CHECKLIST.iter().enumerate().map(|(index, item)| html! {
                                <Reveal key={*item} tag="li" motion={CHECK_ITEM.staggered(index)} class="checklist-item">
                                    <span class="checklist-mark">
                                        <SafeIcon name="check-circle-2" size={14} />
                                    </span>
                                    <span>{*item}</span>
                                </Reveal>
                            }) }
                        </ul>

                        <button class="btn btn-light btn-large">{"Узнать больше о нас"}</button>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
