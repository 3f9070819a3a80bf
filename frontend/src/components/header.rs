use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::SafeIcon;
use crate::config::MENU_ANIMATION_MS;
use crate::content::{NavLink, BRAND, NAV_LINKS, START_PROJECT};
use crate::dom::DomAnchorScroller;
use crate::hooks::entrance::use_entered;
use crate::hooks::scroll::use_scroll_map;
use crate::motion::Motion;
use crate::navigation::{is_scrolled, NavState, PanelPhase};

const HEADER_CSS: &str = r#"
    .site-header-frame {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
    }
    .site-header {
        background: transparent;
        border-bottom: 1px solid transparent;
        transition: background 500ms, backdrop-filter 500ms, border-color 500ms;
    }
    .site-header.scrolled {
        background: rgba(2, 6, 23, 0.8);
        backdrop-filter: blur(40px);
        -webkit-backdrop-filter: blur(40px);
        border-bottom-color: rgba(255, 255, 255, 0.05);
    }
    .nav-bar {
        padding-top: 1rem;
        padding-bottom: 1rem;
    }
    .nav-row {
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        text-decoration: none;
        transition: transform 200ms;
    }
    .brand:hover {
        transform: scale(1.02);
    }
    .nav-links {
        display: none;
        align-items: center;
        gap: 2rem;
    }
    .nav-link {
        font-size: 0.875rem;
        font-weight: 500;
        color: #94a3b8;
        text-decoration: none;
        transition: color 300ms;
    }
    .nav-link:hover {
        color: #fff;
    }
    .nav-actions {
        display: none;
    }
    .menu-toggle {
        width: 2.5rem;
        height: 2.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        background: none;
        border: none;
        color: #fff;
        cursor: pointer;
    }
    .mobile-panel {
        margin-top: 1rem;
        padding: 1rem 0;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        overflow: hidden;
        animation: menu-open 300ms ease-out forwards;
    }
    .mobile-panel.closing {
        animation: menu-close 300ms ease-in forwards;
    }
    .mobile-links {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .mobile-links .nav-link {
        font-size: 1rem;
    }
    .mobile-links .btn {
        margin-top: 1rem;
        width: 100%;
    }
    @keyframes menu-open {
        from { opacity: 0; max-height: 0; }
        to { opacity: 1; max-height: 24rem; }
    }
    @keyframes menu-close {
        from { opacity: 1; max-height: 24rem; }
        to { opacity: 0; max-height: 0; }
    }
    @media (min-width: 768px) {
        .nav-links, .nav-actions {
            display: flex;
        }
        .menu-toggle, .mobile-panel {
            display: none;
        }
    }
"#;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let scrolled = use_scroll_map(is_scrolled);
    let menu_open = use_state_eq(|| false);
    let panel = use_state_eq(PanelPhase::default);
    let entered = use_entered();

    let state = NavState {
        is_scrolled: scrolled,
        is_mobile_menu_open: *menu_open,
    };

    // Keep the panel around until the close animation is done
    {
        let panel = panel.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let next = (*panel).sync(*open);
                panel.set(next);
                let exit = (next == PanelPhase::Closing).then(|| {
                    let panel = panel.clone();
                    Timeout::new(MENU_ANIMATION_MS, move || panel.set(next.finish_exit()))
                });
                move || drop(exit)
            },
            *menu_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(state.toggle_menu().is_mobile_menu_open);
        })
    };

    let follow_link = {
        let menu_open = menu_open.clone();
        Callback::from(move |(e, link): (MouseEvent, NavLink)| {
            e.prevent_default();
            let next = state.follow(&link, &DomAnchorScroller);
            menu_open.set(next.is_mobile_menu_open);
        })
    };

    let link_list = || -> Html {
        html! {
            <>
                { for NAV_LINKS.iter().map(|link| {
                    let link = *link;
                    let onclick = {
                        let follow_link = follow_link.clone();
                        Callback::from(move |e: MouseEvent| follow_link.emit((e, link)))
                    };
                    html! {
                        <a key={link.anchor} href={link.href()} class="nav-link" {onclick}>
                            {link.label}
                        </a>
                    }
                }) }
            </>
        }
    };

    html! {
        <header class="site-header-frame" style={Motion::drop_in(100.0).style(entered)}>
            <style>{HEADER_CSS}</style>
            <div class={state.header_class()}>
                <nav class="container nav-bar">
                    <div class="nav-row">
                        <a href="#" class="brand">
                            <span class="brand-mark">
                                <SafeIcon name="sparkles" size={20} />
                            </span>
                            <span class="brand-name gradient-text">{BRAND}</span>
                        </a>

                        <div class="nav-links">
                            { link_list() }
                        </div>

                        <div class="nav-actions">
                            <button class="btn btn-light btn-small">{START_PROJECT}</button>
                        </div>

                        <button
                            class="menu-toggle"
                            aria-label="Menu"
                            aria-expanded={state.is_mobile_menu_open.to_string()}
                            onclick={toggle_menu}
                        >
                            <SafeIcon name={state.toggle_icon()} size={24} />
                        </button>
                    </div>

                    {
                        if panel.is_mounted() {
                            html! {
                                <div class={panel.class()}>
                                    <div class="mobile-links">
                                        { link_list() }
                                        <button class="btn btn-light">{START_PROJECT}</button>
                                    </div>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </nav>
            </div>
        </header>
    }
}
