use log::{info, Level};
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod motion;
mod navigation;
mod observer;
mod page;
mod submit;

mod hooks {
    pub mod entrance;
    pub mod reveal;
    pub mod scroll;
}
mod components {
    pub mod header;
    pub mod icon;
    pub mod reveal;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod portfolio;
    pub mod services;
}

use hooks::scroll::ScrollProvider;
use page::Page;
use submit::SubmitterHandle;

#[function_component]
fn App() -> Html {
    let submitter = use_state(SubmitterHandle::from_config);

    html! {
        <>
            <Global css={css!(r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    min-height: 100vh;
                    background: #020617;
                    color: #fff;
                    overflow-x: hidden;
                    font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }
                .page {
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                .container {
                    width: 100%;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding-left: 1rem;
                    padding-right: 1rem;
                    box-sizing: border-box;
                }
                .layered {
                    position: relative;
                    z-index: 10;
                }
                .section {
                    position: relative;
                    padding: 8rem 0;
                    background: #020617;
                }
                .section-header {
                    max-width: 48rem;
                    margin: 0 auto 5rem;
                }
                .section-header.centered {
                    text-align: center;
                }
                .section-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    margin-bottom: 1.5rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .section-badge.blue {
                    background: rgba(59, 130, 246, 0.1);
                    border: 1px solid rgba(59, 130, 246, 0.2);
                    color: #60a5fa;
                }
                .section-badge.purple {
                    background: rgba(168, 85, 247, 0.1);
                    border: 1px solid rgba(168, 85, 247, 0.2);
                    color: #c084fc;
                }
                .section-badge.emerald {
                    background: rgba(16, 185, 129, 0.1);
                    border: 1px solid rgba(16, 185, 129, 0.2);
                    color: #34d399;
                }
                .section-badge.pink {
                    background: rgba(236, 72, 153, 0.1);
                    border: 1px solid rgba(236, 72, 153, 0.2);
                    color: #f472b6;
                }
                .section-title {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 900;
                    letter-spacing: -0.025em;
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }
                .section-lead {
                    font-size: 1.125rem;
                    color: #94a3b8;
                    margin: 0;
                }
                .muted {
                    color: #475569;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #fff, #94a3b8);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .gradient-text-vertical {
                    background: linear-gradient(180deg, #fff, #94a3b8);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .brand-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #3b82f6, #9333ea);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                }
                .brand-name {
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .btn {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    border: none;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 300ms, background 300ms, box-shadow 300ms;
                }
                .btn:hover {
                    transform: scale(1.05);
                }
                .btn-small {
                    padding: 0.625rem 1.5rem;
                    font-size: 0.875rem;
                }
                .btn-large {
                    padding: 1rem 2rem;
                }
                .btn-light {
                    background: #fff;
                    color: #020617;
                }
                .btn-light:hover {
                    background: #e2e8f0;
                }
                .btn-gradient {
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                    color: #fff;
                }
                .btn-gradient:hover {
                    box-shadow: 0 10px 15px -3px rgba(59, 130, 246, 0.25);
                }
                .btn-ghost {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #fff;
                }
                .btn-ghost:hover {
                    background: rgba(255, 255, 255, 0.1);
                    transform: none;
                }
                .btn-glass {
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                    color: #fff;
                }
                .btn-glass:hover {
                    background: rgba(255, 255, 255, 0.2);
                    transform: none;
                }
                .icon {
                    flex-shrink: 0;
                    transition: transform 300ms;
                }
                .btn:hover .nudge-right, .portfolio-all:hover .nudge-right {
                    transform: translateX(0.25rem);
                }
                @media (min-width: 768px) {
                    .container {
                        padding-left: 1.5rem;
                        padding-right: 1.5rem;
                    }
                }
            "#)} />
            <ContextProvider<SubmitterHandle> context={(*submitter).clone()}>
                <ScrollProvider>
                    <Page />
                </ScrollProvider>
            </ContextProvider<SubmitterHandle>>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
