use yew::prelude::*;

use crate::components::icon::SafeIcon;
use crate::components::reveal::Reveal;
use crate::content::PORTFOLIO;
use crate::motion::Motion;
use crate::page::anchor;

const PORTFOLIO_CSS: &str = r#"
    .portfolio {
        overflow: hidden;
    }
    .portfolio-fade {
        position: absolute;
        inset: 0;
        background: linear-gradient(180deg, #020617, rgba(15, 23, 42, 0.5), #020617);
    }
    .portfolio-header {
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        gap: 1.5rem;
        margin-bottom: 4rem;
    }
    .portfolio-all {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        background: none;
        border: none;
        color: #fff;
        font: inherit;
        font-weight: 500;
        cursor: pointer;
        transition: color 300ms;
    }
    .portfolio-all:hover {
        color: #60a5fa;
    }
    .portfolio-grid {
        display: grid;
        gap: 1.5rem;
    }
    .portfolio-tile {
        position: relative;
        aspect-ratio: 4 / 5;
        border-radius: 1.5rem;
        overflow: hidden;
        cursor: pointer;
    }
    .portfolio-tile img {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 700ms;
    }
    .portfolio-tile:hover img {
        transform: scale(1.1);
    }
    .portfolio-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(0deg, #020617, rgba(2, 6, 23, 0.5), transparent);
        opacity: 0.6;
        transition: opacity 500ms;
    }
    .portfolio-tile:hover .portfolio-shade {
        opacity: 0.8;
    }
    .portfolio-caption {
        position: absolute;
        inset: 0;
        padding: 1.5rem;
        display: flex;
        flex-direction: column;
        justify-content: flex-end;
    }
    .portfolio-category {
        width: fit-content;
        padding: 0.25rem 0.75rem;
        margin-bottom: 0.75rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(4px);
        color: rgba(255, 255, 255, 0.8);
        font-size: 0.75rem;
        font-weight: 500;
    }
    .portfolio-caption h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin: 0 0 0.5rem;
        transition: color 300ms;
    }
    .portfolio-tile:hover h3 {
        color: #60a5fa;
    }
    .portfolio-case {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: #cbd5e1;
        font-size: 0.875rem;
        font-weight: 500;
        opacity: 0;
        transform: translateY(1rem);
        transition: opacity 500ms, transform 500ms;
    }
    .portfolio-tile:hover .portfolio-case {
        opacity: 1;
        transform: translateY(0);
    }
    @media (min-width: 768px) {
        .portfolio-header {
            flex-direction: row;
            align-items: flex-end;
        }
        .portfolio-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (min-width: 1024px) {
        .portfolio-grid {
            grid-template-columns: repeat(3, 1fr);
        }
    }
"#;

const HEADER: Motion = Motion::fade_up(40.0);
const TILE: Motion = Motion::fade_up(40.0);

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <section id={anchor::PORTFOLIO} class="section portfolio">
            <style>{PORTFOLIO_CSS}</style>
            <div class="portfolio-fade"></div>
            <div class="container layered">
                <Reveal motion={HEADER} class="portfolio-header">
                    <div>
                        <span class="section-badge purple">{"Портфолио"}</span>
                        <h2 class="section-title">
                            <span class="gradient-text-vertical">{"Избранные работы"}</span>
                        </h2>
                    </div>
                    <button class="portfolio-all">
                        {"Смотреть все проекты"}
                        <SafeIcon name="arrow-right" size={18} class="nudge-right" />
                    </button>
                </Reveal>

                <div class="portfolio-grid">
                    { for PORTFOLIO.iter().enumerate().map(|(index, project)| html! {
                        <Reveal key={project.title} motion={TILE.staggered(index)} class="portfolio-tile">
                            <img src={project.image_url} alt={project.title} loading="lazy" />
                            <div class="portfolio-shade"></div>
                            <div class="portfolio-caption">
                                <span class="portfolio-category">{project.category}</span>
                                <h3>{project.title}</h3>
                                <div class="portfolio-case">
                                    <span>{"Смотреть кейс"}</span>
                                    <SafeIcon name="arrow-up-right" size={14} />
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
