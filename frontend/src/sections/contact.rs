use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icon::SafeIcon;
use crate::components::reveal::Reveal;
use crate::content::CONTACT_CHANNELS;
use crate::motion::Motion;
use crate::page::anchor;
use crate::submit::{ContactField, ContactForm, FormAction, FormStatus, SubmitterHandle};

const CONTACT_CSS: &str = r#"
    .contact-grid {
        display: grid;
        gap: 4rem;
    }
    .contact-lead {
        font-size: 1.125rem;
        color: #94a3b8;
        margin: 0 0 2.5rem;
    }
    .contact-channels {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .contact-channel {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .contact-channel-icon {
        width: 3rem;
        height: 3rem;
        border-radius: 0.75rem;
        background: #0f172a;
        border: 1px solid rgba(255, 255, 255, 0.05);
        display: flex;
        align-items: center;
        justify-content: center;
        color: #60a5fa;
    }
    .contact-channel-label {
        font-size: 0.875rem;
        color: #64748b;
        margin-bottom: 0.25rem;
    }
    .contact-channel-value {
        font-weight: 500;
    }
    .contact-card {
        padding: 2rem;
        border-radius: 1.5rem;
        background: rgba(15, 23, 42, 0.5);
        border: 1px solid rgba(255, 255, 255, 0.05);
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .contact-form-row {
        display: grid;
        gap: 1.5rem;
    }
    .contact-form label {
        display: block;
        font-size: 0.875rem;
        font-weight: 500;
        color: #94a3b8;
        margin-bottom: 0.5rem;
    }
    .contact-form input, .contact-form textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem 1rem;
        background: #020617;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.75rem;
        color: #fff;
        font: inherit;
        transition: border-color 300ms;
    }
    .contact-form textarea {
        resize: none;
    }
    .contact-form input::placeholder, .contact-form textarea::placeholder {
        color: #475569;
    }
    .contact-form input:focus, .contact-form textarea:focus {
        outline: none;
        border-color: #3b82f6;
    }
    .contact-submit {
        width: 100%;
        padding: 1rem;
        border-radius: 0.75rem;
    }
    .contact-submit:hover {
        transform: scale(1.02);
    }
    .contact-submit:disabled {
        opacity: 0.6;
        cursor: progress;
        transform: none;
    }
    .contact-status {
        font-size: 0.875rem;
        color: #94a3b8;
        text-align: center;
        margin: 0;
    }
    .contact-status.failed {
        color: #f87171;
    }
    @media (min-width: 640px) {
        .contact-form-row {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (min-width: 1024px) {
        .contact-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
"#;

const INFO: Motion = Motion::fade_up(40.0);
const FORM_CARD: Motion = Motion::fade_up(40.0).delay(200);

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={anchor::CONTACT} class="section">
            <style>{CONTACT_CSS}</style>
            <div class="container">
                <div class="contact-grid">
                    <Reveal motion={INFO}>
                        <span class="section-badge pink">{"Контакты"}</span>
                        <h2 class="section-title">
                            <span class="gradient-text-vertical">{"Давайте работать"}</span>
                            <br />
                            <span class="muted">{"вместе"}</span>
                        </h2>
                        <p class="contact-lead">
                            {"Свяжитесь с нами любым удобным способом. Мы всегда на связи и готовы ответить на ваши вопросы."}
                        </p>

                        <div class="contact-channels">
                            { for CONTACT_CHANNELS.iter().map(|channel| html! {
                                <div key={channel.label} class="contact-channel">
                                    <div class="contact-channel-icon">
                                        <SafeIcon name={channel.icon} size={20} />
                                    </div>
                                    <div>
                                        <div class="contact-channel-label">{channel.label}</div>
                                        <div class="contact-channel-value">{channel.value}</div>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </Reveal>

                    <Reveal motion={FORM_CARD} class="contact-card">
                        <ContactFormView />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// The four-field form. Delivery goes through the [`SubmitterHandle`] found
/// in context, or the configured default when none is provided.
#[function_component(ContactFormView)]
pub fn contact_form_view() -> Html {
    let form = use_reducer(ContactForm::default);
    let submitter = use_context::<SubmitterHandle>();
    let fallback = use_state(SubmitterHandle::from_config);
    let submitter = submitter.unwrap_or_else(|| (*fallback).clone());

    let edit = |field: ContactField| {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = e.target().and_then(|target| {
                match target.dyn_ref::<HtmlInputElement>() {
                    Some(input) => Some(input.value()),
                    None => target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value()),
                }
            });
            if let Some(value) = value {
                form.dispatch(FormAction::Edit(field, value));
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_sending() {
                return;
            }
            let message = form.message.clone();
            let dispatcher = form.dispatcher();
            let submitter = submitter.clone();
            form.dispatch(FormAction::Submit);
            spawn_local(async move {
                let result = submitter.0.submit(message).await;
                if let Err(err) = &result {
                    log::error!("contact form submission failed: {}", err);
                }
                dispatcher.dispatch(FormAction::Finished(result));
            });
        })
    };

    let status = form.status.note().map(|note| {
        let class = match form.status {
            FormStatus::Failed(_) => "contact-status failed",
            _ => "contact-status",
        };
        html! { <p class={class} role="status">{note}</p> }
    });

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="contact-form-row">
                <div>
                    <label for="contact-name">{"Имя"}</label>
                    <input
                        id="contact-name"
                        name="name"
                        type="text"
                        required={true}
                        placeholder="Ваше имя"
                        value={form.message.get(ContactField::Name).to_string()}
                        oninput={edit(ContactField::Name)}
                    />
                </div>
                <div>
                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        name="email"
                        type="email"
                        required={true}
                        placeholder="your@email.com"
                        value={form.message.get(ContactField::Email).to_string()}
                        oninput={edit(ContactField::Email)}
                    />
                </div>
            </div>

            <div>
                <label for="contact-subject">{"Тема"}</label>
                <input
                    id="contact-subject"
                    name="subject"
                    type="text"
                    placeholder="О чем хотите поговорить?"
                    value={form.message.get(ContactField::Subject).to_string()}
                    oninput={edit(ContactField::Subject)}
                />
            </div>

            <div>
                <label for="contact-message">{"Сообщение"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="4"
                    required={true}
                    placeholder="Расскажите о вашем проекте..."
                    value={form.message.get(ContactField::Message).to_string()}
                    oninput={edit(ContactField::Message)}
                />
            </div>

            <button type="submit" class="btn btn-gradient contact-submit" disabled={form.is_sending()}>
                {"Отправить сообщение"}
            </button>
            { for status }
        </form>
    }
}
