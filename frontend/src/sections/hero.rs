use yew::prelude::*;

use crate::components::icon::SafeIcon;
use crate::components::reveal::Entrance;
use crate::content::HERO_STATS;
use crate::hooks::scroll::use_scroll_map;
use crate::motion::{Easing, Motion, Parallax};

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        padding-top: 5rem;
    }
    .hero-backdrop {
        position: absolute;
        inset: 0;
        background: #020617;
    }
    .hero-glow {
        position: absolute;
        width: 24rem;
        height: 24rem;
        border-radius: 9999px;
        filter: blur(128px);
        will-change: transform;
    }
    .hero-glow.blue {
        top: 5rem;
        left: 25%;
        background: rgba(59, 130, 246, 0.2);
    }
    .hero-glow.purple {
        bottom: 5rem;
        right: 25%;
        background: rgba(168, 85, 247, 0.2);
    }
    .hero-glow.center {
        top: 50%;
        left: 50%;
        width: 800px;
        height: 800px;
        transform: translate(-50%, -50%);
        background: rgba(99, 102, 241, 0.1);
        filter: blur(150px);
    }
    .hero-grid {
        position: absolute;
        inset: 0;
        opacity: 0.02;
        background-image:
            linear-gradient(rgba(255, 255, 255, 0.1) 1px, transparent 1px),
            linear-gradient(90deg, rgba(255, 255, 255, 0.1) 1px, transparent 1px);
        background-size: 60px 60px;
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 64rem;
        margin: 0 auto;
        text-align: center;
    }
    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        margin-bottom: 2rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        color: #cbd5e1;
        font-size: 0.875rem;
        font-weight: 500;
    }
    .hero-badge .icon {
        color: #60a5fa;
    }
    .hero-title {
        font-size: clamp(3rem, 9vw, 6rem);
        font-weight: 900;
        letter-spacing: -0.025em;
        line-height: 1.05;
        margin: 0 0 1.5rem;
    }
    .hero-title .accent {
        background: linear-gradient(90deg, #60a5fa, #a855f7, #ec4899);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .hero-subtitle {
        font-size: 1.125rem;
        color: #94a3b8;
        max-width: 42rem;
        margin: 0 auto 2.5rem;
        line-height: 1.7;
    }
    .hero-actions {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1rem;
    }
    .hero-stats {
        margin-top: 5rem;
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 2rem;
    }
    .hero-stat-value {
        font-size: 2rem;
        font-weight: 900;
        margin-bottom: 0.5rem;
    }
    .hero-stat-label {
        font-size: 0.875rem;
        color: #64748b;
        font-weight: 500;
    }
    .scroll-hint {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        margin-left: -0.75rem;
    }
    .scroll-hint-frame {
        width: 1.5rem;
        height: 2.5rem;
        border: 2px solid rgba(255, 255, 255, 0.2);
        border-radius: 9999px;
        display: flex;
        justify-content: center;
        padding-top: 0.5rem;
        box-sizing: border-box;
    }
    .scroll-hint-dot {
        width: 0.375rem;
        height: 0.375rem;
        background: #fff;
        border-radius: 9999px;
        animation: scroll-hint 1.5s ease-in-out infinite;
    }
    @keyframes scroll-hint {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(12px); }
    }
    @media (min-width: 640px) {
        .hero-actions {
            flex-direction: row;
        }
    }
    @media (min-width: 768px) {
        .hero-subtitle {
            font-size: 1.25rem;
        }
        .hero-stats {
            grid-template-columns: repeat(4, 1fr);
            gap: 3rem;
        }
        .hero-stat-value {
            font-size: 2.25rem;
        }
    }
"#;

const PARALLAX_END: f64 = 500.0;
const GLOW_DOWN: Parallax = Parallax::new((0.0, PARALLAX_END), (0.0, 200.0));
const GLOW_UP: Parallax = Parallax::new((0.0, PARALLAX_END), (0.0, -100.0));

/// Scroll offset as far as the glows care; flat past the end of their range.
fn parallax_scroll(offset: f64) -> f64 {
    offset.clamp(0.0, PARALLAX_END)
}

const BADGE: Motion = Motion::fade_up(20.0);
const HEADING: Motion = Motion::fade_up(30.0).delay(100);
const SUBTITLE: Motion = Motion::fade_up(30.0).delay(200);
const ACTIONS: Motion = Motion::fade_up(30.0).delay(300);
const STATS: Motion = Motion::fade_up(40.0).delay(500);
const SCROLL_HINT: Motion = Motion::fade()
    .duration(1000)
    .delay(1000)
    .easing(Easing::EaseInOut);

#[function_component(Hero)]
pub fn hero() -> Html {
    let scroll = use_scroll_map(parallax_scroll);

    html! {
        <section class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-backdrop">
                <div class="hero-glow blue" style={GLOW_DOWN.style(scroll)}></div>
                <div class="hero-glow purple" style={GLOW_UP.style(scroll)}></div>
                <div class="hero-glow center"></div>
                <div class="hero-grid"></div>
            </div>

            <div class="container">
                <div class="hero-content">
                    <Entrance motion={BADGE} class="hero-badge">
                        <SafeIcon name="sparkles" size={16} />
                        <span>{"Новое поколение digital-решений"}</span>
                    </Entrance>

                    <Entrance motion={HEADING} tag="h1" class="hero-title">
                        <span class="gradient-text-vertical">{"Создаем"}</span>
                        <br />
                        <span class="accent">{"цифровое будущее"}</span>
                    </Entrance>

                    <Entrance motion={SUBTITLE} tag="p" class="hero-subtitle">
                        {"Мы разрабатываем инновационные веб-приложения, мобильные платформы и цифровые продукты, которые меняют правила игры"}
                    </Entrance>

                    <Entrance motion={ACTIONS} class="hero-actions">
                        <button class="btn btn-gradient">
                            {"Обсудить проект"}
                            <SafeIcon name="arrow-right" size={18} class="nudge-right" />
                        </button>
                        <button class="btn btn-ghost">
                            <SafeIcon name="play" size={18} color="#60a5fa" />
                            {"Смотреть видео"}
                        </button>
                    </Entrance>

                    <Entrance motion={STATS} class="hero-stats">
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div key={stat.label} class="hero-stat">
                                <div class="hero-stat-value gradient-text-vertical">{stat.value}</div>
                                <div class="hero-stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </Entrance>
                </div>
            </div>

            <Entrance motion={SCROLL_HINT} class="scroll-hint">
                <div class="scroll-hint-frame">
                    <div class="scroll-hint-dot"></div>
                </div>
            </Entrance>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glows_settle_once_scrolled_past_their_range() {
        assert_eq!(parallax_scroll(250.0), 250.0);
        assert_eq!(parallax_scroll(500.0), parallax_scroll(4000.0));
        assert_eq!(parallax_scroll(-20.0), 0.0);

        for glow in [GLOW_DOWN, GLOW_UP] {
            assert_eq!(glow.style(parallax_scroll(4000.0)), glow.style(4000.0));
            assert_eq!(glow.style(parallax_scroll(120.0)), glow.style(120.0));
        }
    }
}
