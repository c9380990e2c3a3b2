use yew::prelude::*;
use gloo_net::http::Request;
use gloo_console::log;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::config;
use crate::content::{PROPERTY_TYPES, ROOF_TYPES, SERVICE_TYPES};
use crate::quote::{Field, QuoteError, QuoteSession, QuoteStep, QuoteSubmission, TOTAL_STEPS};

#[derive(Properties, PartialEq)]
pub struct QuoteModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

pub enum QuoteModalMsg {
    Set(Field, String),
    Next,
    Back,
    Close,
    Submit,
    Submitted,
    Failed(QuoteError),
}

pub struct QuoteModal {
    session: QuoteSession,
}

async fn send(body: QuoteSubmission) -> Result<(), QuoteError> {
    let request = Request::post(config::form_endpoint())
        .header("Accept", "application/json")
        .json(&body)
        .map_err(|e| QuoteError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| QuoteError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(QuoteError::Rejected(response.status()))
    }
}

impl Component for QuoteModal {
    type Message = QuoteModalMsg;
    type Properties = QuoteModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: QuoteSession::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            QuoteModalMsg::Set(field, value) => {
                self.session.form.set(field, value);
                true
            }
            QuoteModalMsg::Next => {
                self.session.advance();
                true
            }
            QuoteModalMsg::Back => {
                self.session.back();
                true
            }
            QuoteModalMsg::Close => {
                self.session.close();
                ctx.props().on_close.emit(());
                true
            }
            QuoteModalMsg::Submit => {
                if let Some(body) = self.session.begin_submit() {
                    ctx.link().send_future(async move {
                        match send(body).await {
                            Ok(()) => QuoteModalMsg::Submitted,
                            Err(e) => QuoteModalMsg::Failed(e),
                        }
                    });
                }
                true
            }
            QuoteModalMsg::Submitted => {
                log!("Quote request sent");
                if self.session.finish_submit(Ok(())) {
                    ctx.props().on_close.emit(());
                }
                true
            }
            QuoteModalMsg::Failed(e) => {
                log!(format!("Quote request failed: {:?}", e));
                if self.session.finish_submit(Err(e)) {
                    ctx.props().on_close.emit(());
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().is_open {
            return html! {};
        }

        let link = ctx.link();
        let step = self.session.form.step;
        let close = link.callback(|_: MouseEvent| QuoteModalMsg::Close);
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            QuoteModalMsg::Submit
        });

        html! {
            <>
                <div class="quote-backdrop" onclick={close.clone()}></div>
                <div class="quote-modal" role="dialog" aria-modal="true">
                    <div class="quote-header">
                        <button class="quote-close" onclick={close} aria-label="Close modal">{"✕"}</button>
                        <h2>{"Get Your Free Quote"}</h2>
                        <p>{"We'll get back to you within 24 hours"}</p>
                        <div class="quote-progress">
                            { for (1..=TOTAL_STEPS).map(|n| html! {
                                <div class={classes!("quote-progress-bar", (n <= step.number()).then(|| "done"))}></div>
                            }) }
                        </div>
                        <p class="quote-step-count">{format!("Step {} of {}", step.number(), TOTAL_STEPS)}</p>
                    </div>

                    <form {onsubmit}>
                        <div class="quote-body">
                            <h3>{step.heading()}</h3>
                            { self.step_fields(ctx) }
                        </div>

                        if let Some(error) = &self.session.error {
                            <div class="error-message">{error}</div>
                        }

                        <div class="quote-footer">
                            if step.prev().is_some() {
                                <button type="button" class="quote-back" onclick={link.callback(|_| QuoteModalMsg::Back)}>
                                    {"Back"}
                                </button>
                            } else {
                                <div />
                            }
                            if step.is_last() {
                                <button type="submit" class="quote-submit" disabled={self.session.submitting || !self.session.form.can_advance()}>
                                    { if self.session.submitting { "Sending..." } else { "Get My Quote" } }
                                </button>
                            } else {
                                <button
                                    type="button"
                                    class="quote-next"
                                    disabled={!self.session.form.can_advance()}
                                    onclick={link.callback(|_| QuoteModalMsg::Next)}
                                >
                                    {"Continue"}
                                </button>
                            }
                        </div>
                    </form>

                    <div class="quote-trust">
                        {"Your information is secure and will never be shared with third parties."}
                    </div>
                </div>
            </>
        }
    }
}

impl QuoteModal {
    fn step_fields(&self, ctx: &Context<Self>) -> Html {
        match self.session.form.step {
            QuoteStep::ServiceType => self.choices(ctx, Field::Service, SERVICE_TYPES),
            QuoteStep::PropertyType => self.choices(ctx, Field::PropertyType, PROPERTY_TYPES),
            QuoteStep::RoofType => self.choices(ctx, Field::RoofType, ROOF_TYPES),
            QuoteStep::ContactDetails => html! {
                <>
                    { self.input(ctx, Field::Name, "text", "Your Name", "Enter your full name") }
                    { self.input(ctx, Field::Email, "email", "Email Address", "your@email.com") }
                    { self.input(ctx, Field::Phone, "tel", "Phone Number", "07XXX XXXXXX") }
                    { self.input(ctx, Field::Postcode, "text", "Your Postcode", "e.g. SO14 1AA") }
                </>
            },
            QuoteStep::Message => html! {
                <div class="quote-field">
                    <label for="message">{"Brief description "}<span class="optional">{"(optional)"}</span></label>
                    <textarea
                        id="message"
                        rows="3"
                        placeholder="Tell us about your roof..."
                        value={self.session.form.message.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            QuoteModalMsg::Set(Field::Message, input.value())
                        })}
                    />
                </div>
            },
        }
    }

    fn choices(&self, ctx: &Context<Self>, field: Field, options: &'static [(&'static str, &'static str)]) -> Html {
        let current = self.session.form.get(field);
        html! {
            <div class="quote-choices">
                { for options.iter().map(|(value, label)| {
                    let selected = current == *value;
                    let value = value.to_string();
                    html! {
                        <button
                            type="button"
                            class={classes!("quote-choice", selected.then(|| "selected"))}
                            onclick={ctx.link().callback(move |_| QuoteModalMsg::Set(field, value.clone()))}
                        >
                            {*label}
                        </button>
                    }
                }) }
            </div>
        }
    }

    fn input(&self, ctx: &Context<Self>, field: Field, kind: &'static str, label: &'static str, placeholder: &'static str) -> Html {
        let id = field.label().replace(' ', "-");
        html! {
            <div class="quote-field">
                <label for={id.clone()}>{label}</label>
                <input
                    id={id}
                    type={kind}
                    required={true}
                    placeholder={placeholder}
                    value={self.session.form.get(field).to_string()}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        QuoteModalMsg::Set(field, input.value())
                    })}
                />
            </div>
        }
    }
}
