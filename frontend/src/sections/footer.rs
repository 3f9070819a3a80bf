use yew::prelude::*;

use crate::components::icon::SafeIcon;
use crate::content::{BRAND, COPYRIGHT, SOCIAL_LINKS};

const FOOTER_CSS: &str = r#"
    .site-footer {
        padding: 3rem 0;
        background: #020617;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
    }
    .footer-row {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: space-between;
        gap: 1.5rem;
    }
    .footer-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .footer-brand .brand-mark {
        width: 2rem;
        height: 2rem;
        border-radius: 0.5rem;
    }
    .footer-brand .brand-name {
        font-size: 1.125rem;
    }
    .footer-copyright {
        font-size: 0.875rem;
        color: #64748b;
        text-align: center;
    }
    .footer-social {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .social-link {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        background: #0f172a;
        border: 1px solid rgba(255, 255, 255, 0.05);
        display: flex;
        align-items: center;
        justify-content: center;
        color: #94a3b8;
        transition: color 200ms, border-color 200ms;
    }
    .social-link:hover {
        color: #fff;
        border-color: rgba(255, 255, 255, 0.1);
    }
    @media (min-width: 768px) {
        .footer-row {
            flex-direction: row;
        }
    }
"#;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="container">
                <div class="footer-row">
                    <div class="footer-brand">
                        <span class="brand-mark">
                            <SafeIcon name="sparkles" size={16} />
                        </span>
                        <span class="brand-name gradient-text">{BRAND}</span>
                    </div>

                    <div class="footer-copyright">{COPYRIGHT}</div>

                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <a key={social.name} href={social.href} class="social-link" aria-label={social.name}>
                                <SafeIcon name="globe" size={18} />
                            </a>
                        }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}
