use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::debug;

use site::{
    config::{ContactConfig, SocialKind},
    contact::{ContactForm, Field, FieldError, error_for},
    section::SectionId,
};

use crate::components::{
    button::Button,
    card::{Card, CardContent},
    icons::{Icon, IconKind},
};

const STATUS_TIMEOUT_MS: u32 = 5000;

fn social_icon(kind: SocialKind) -> IconKind {
    match kind {
        SocialKind::Linkedin => IconKind::Linkedin,
        SocialKind::Github => IconKind::Github,
    }
}

#[component]
fn ContactDetail(icon: IconKind, text: String) -> Element {
    rsx! {
        div { class: "contact-detail",
            Icon { kind: icon, class: "muted" }
            span { "{text}" }
        }
    }
}

#[component]
fn FieldMessage(#[props(!optional)] message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "field-error", "{message}" }
        }
    }
}

#[component]
pub fn Contact(contact: ContactConfig) -> Element {
    let mut draft = use_signal(ContactForm::default);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut status = use_signal(String::new);

    // nothing is sent: a valid form is acknowledged and cleared
    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let result = draft.read().validate();
        match result {
            Ok(()) => {
                debug!("contact form accepted");
                errors.set(Vec::new());
                draft.with_mut(|draft| draft.clear());
                status.set("Thanks for your message! I'll get back to you soon.".into());

                Timeout::new(STATUS_TIMEOUT_MS, move || status.set(String::new())).forget();
            }
            Err(found) => {
                debug!({ errors = found.len() }, "contact form rejected");
                errors.set(found);
                status.set(String::new());
            }
        }
    };

    let message_for = move |field: Field| error_for(&errors.read(), field).map(ToString::to_string);
    let name_error = message_for(Field::Name);
    let email_error = message_for(Field::Email);
    let message_error = message_for(Field::Message);

    rsx! {
        section { id: SectionId::Contact.dom_id(), class: "section section-tinted",
            div { class: "container narrow",
                h2 { class: "section-heading", "Get In Touch" }

                div { class: "two-column",
                    div {
                        h3 { class: "subheading", "Let's Connect" }
                        p { class: "body-text spaced-below-lg", "{contact.intro}" }

                        div { class: "stack-sm",
                            ContactDetail { icon: IconKind::Mail, text: contact.email.clone() }
                            if let Some(phone) = &contact.phone {
                                ContactDetail { icon: IconKind::Phone, text: phone.clone() }
                            }
                            if let Some(location) = &contact.location {
                                ContactDetail { icon: IconKind::MapPin, text: location.clone() }
                            }
                        }

                        div { class: "socials",
                            for social in contact.socials.iter() {
                                a {
                                    class: "social-link",
                                    href: "{social.url}",
                                    Icon { kind: social_icon(social.kind), class: "icon-lg" }
                                }
                            }
                        }
                    }

                    Card {
                        CardContent { class: "padded-lg",
                            form { class: "contact-form", onsubmit: submit,
                                div {
                                    label { class: "form-label", "Name" }
                                    input {
                                        r#type: "text",
                                        class: "form-input",
                                        placeholder: "Your name",
                                        value: "{draft.read().name}",
                                        oninput: move |evt| draft.write().name = evt.value(),
                                    }
                                    FieldMessage { message: name_error }
                                }
                                div {
                                    label { class: "form-label", "Email" }
                                    input {
                                        r#type: "email",
                                        class: "form-input",
                                        placeholder: "your.email@example.com",
                                        value: "{draft.read().email}",
                                        oninput: move |evt| draft.write().email = evt.value(),
                                    }
                                    FieldMessage { message: email_error }
                                }
                                div {
                                    label { class: "form-label", "Message" }
                                    textarea {
                                        class: "form-input",
                                        rows: "4",
                                        placeholder: "Your message...",
                                        value: "{draft.read().message}",
                                        oninput: move |evt| draft.write().message = evt.value(),
                                    }
                                    FieldMessage { message: message_error }
                                }

                                Button { class: "btn-block btn-lg", submit: true, "Send Message" }

                                if !status().is_empty() {
                                    p { class: "form-status", "{status}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
