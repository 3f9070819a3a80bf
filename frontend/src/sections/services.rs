use yew::prelude::*;

use crate::components::icon::SafeIcon;
use crate::components::reveal::Reveal;
use crate::content::{ServiceCard, SERVICES};
use crate::motion::Motion;
use crate::page::anchor;

const SERVICES_CSS: &str = r#"
    .services-grid {
        display: grid;
        gap: 1.5rem;
    }
    .service-card {
        position: relative;
        padding: 2rem;
        border-radius: 1.5rem;
        background: rgba(15, 23, 42, 0.5);
        border: 1px solid rgba(255, 255, 255, 0.05);
        overflow: hidden;
    }
    .service-card:hover {
        border-color: rgba(255, 255, 255, 0.1);
    }
    .service-card-inner {
        position: relative;
        z-index: 10;
        transition: transform 300ms;
    }
    .service-card:hover .service-card-inner {
        transform: translateY(-5px);
    }
    .service-card-wash {
        position: absolute;
        inset: 0;
        opacity: 0;
        transition: opacity 500ms;
    }
    .service-card:hover .service-card-wash {
        opacity: 0.05;
    }
    .service-icon {
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1.5rem;
        color: #fff;
    }
    .service-card h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin: 0 0 1rem;
        transition: color 300ms;
    }
    .service-card:hover h3 {
        color: #60a5fa;
    }
    .service-card p {
        color: #94a3b8;
        line-height: 1.7;
        margin: 0 0 1.5rem;
    }
    .service-more {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        color: #fff;
        font-weight: 500;
        text-decoration: none;
    }
    .service-more:hover .icon {
        transform: translate(0.25rem, -0.25rem);
    }
    @media (min-width: 768px) {
        .services-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
"#;

const HEADER: Motion = Motion::fade_up(40.0);
const CARD: Motion = Motion::fade_up(40.0);

fn gradient(accent: (&str, &str)) -> String {
    format!("background: linear-gradient(135deg, {}, {});", accent.0, accent.1)
}

fn service_card(index: usize, service: &ServiceCard) -> Html {
    let accent = gradient(service.accent);
    html! {
        <Reveal key={service.title} motion={CARD.staggered(index)} class="service-card">
            <div class="service-card-wash" style={accent.clone()}></div>
            <div class="service-card-inner">
                <div class="service-icon" style={accent}>
                    <SafeIcon name={service.icon} size={28} />
                </div>
                <h3>{service.title}</h3>
                <p>{service.description}</p>
                <a href="#" class="service-more">
                    {"Подробнее"}
                    <SafeIcon name="arrow-up-right" size={16} />
                </a>
            </div>
        </Reveal>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={anchor::SERVICES} class="section">
            <style>{SERVICES_CSS}</style>
            <div class="container">
                <Reveal motion={HEADER} class="section-header centered">
                    <span class="section-badge blue">{"Наши услуги"}</span>
                    <h2 class="section-title">
                        <span class="gradient-text-vertical">{"Комплексные решения"}</span>
                        <br />
                        <span class="muted">{"для вашего бизнеса"}</span>
                    </h2>
                    <p class="section-lead">
                        {"От идеи до запуска — мы сопровождаем вас на каждом этапе цифровой трансформации"}
                    </p>
                </Reveal>

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| service_card(index, service)) }
                </div>
            </div>
        </section>
    }
}
