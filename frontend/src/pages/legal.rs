use yew::prelude::*;

use crate::components::content_html::ContentHtml;
use crate::seo::{Seo, SeoProps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDoc {
    Privacy,
    Terms,
    Cookies,
}

impl LegalDoc {
    pub fn title(self) -> &'static str {
        match self {
            LegalDoc::Privacy => "Privacy Policy",
            LegalDoc::Terms => "Terms & Conditions",
            LegalDoc::Cookies => "Cookie Policy",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            LegalDoc::Privacy => "/privacy-policy",
            LegalDoc::Terms => "/terms",
            LegalDoc::Cookies => "/cookie-policy",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LegalDoc::Privacy => "How Hampshire Roof Care uses and protects the information you give us.",
            LegalDoc::Terms => "The terms that apply to quotes and roofing work carried out by Hampshire Roof Care.",
            LegalDoc::Cookies => "Which cookies this website uses and how to control them.",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            LegalDoc::Privacy => PRIVACY,
            LegalDoc::Terms => TERMS,
            LegalDoc::Cookies => COOKIES,
        }
    }
}

const PRIVACY: &str = r#"<p>This privacy policy explains how Hampshire Roof Care Company uses and protects any information that you give us when you use this website.</p>
<p>We are committed to ensuring that your privacy is protected. Any information you provide will only be used in accordance with this privacy statement.</p>
<h2>Information we collect</h2>
<ul>
<li>Name and contact information including email address and phone number</li>
<li>Property address and postcode</li>
<li>Information about your roofing enquiry</li>
</ul>
<h2>What we do with the information</h2>
<p>We use this information solely to respond to your enquiry and to provide you with our roofing services. We do not share your information with third parties for marketing purposes.</p>
<h2>Your rights</h2>
<p>You have the right to request a copy of the information we hold about you, to have any inaccuracies corrected, and to ask us to delete your data.</p>
<h2>Contact</h2>
<p>If you have any questions about this policy, email info.hampshireroofcare@gmail.com.</p>"#;

const TERMS: &str = r#"<p>These terms apply to quotes given and work carried out by Hampshire Roof Care Company.</p>
<h2>Quotes</h2>
<p>Quotes are given in writing after a site survey and are valid for 30 days. Hidden defects found once work starts will be discussed with you before any extra cost is incurred.</p>
<h2>Payment</h2>
<p>Payment is due on completion unless agreed otherwise in writing. Larger projects may be invoiced in stages.</p>
<h2>Guarantees</h2>
<p>Workmanship guarantees are stated on your quote and start from the completion date.</p>
<h2>Cancellations</h2>
<p>You may cancel within 14 days of accepting a quote without charge, unless work has already started at your request.</p>"#;

const COOKIES: &str = r#"<p>This website uses only the cookies it needs to work.</p>
<h2>Essential cookies</h2>
<p>We do not set advertising or tracking cookies. The quote form is processed by a third-party form service, which may set a cookie to prevent spam.</p>
<h2>Managing cookies</h2>
<p>You can block or delete cookies in your browser settings. Blocking essential cookies may stop the quote form from working.</p>"#;

#[derive(Properties, PartialEq)]
pub struct LegalProps {
    pub doc: LegalDoc,
}

#[function_component(Legal)]
pub fn legal(props: &LegalProps) -> Html {
    let doc = props.doc;
    let meta = SeoProps::page(doc.title(), doc.description(), doc.path());

    html! {
        <div class="legal-page">
            <Seo {meta} />
            <h1>{doc.title()}</h1>
            <ContentHtml html={doc.body()} class={classes!("legal-body")} />
            <style>
                {r#"
                .legal-page {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 5rem;
                    color: #0f172a;
                    line-height: 1.7;
                }

                .legal-body h2 {
                    margin-top: 2rem;
                    font-size: 1.4rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Route;
    use yew_router::Routable;

    #[test]
    fn each_doc_has_its_own_route_and_body() {
        let docs = [
            (LegalDoc::Privacy, Route::PrivacyPolicy),
            (LegalDoc::Terms, Route::Terms),
            (LegalDoc::Cookies, Route::CookiePolicy),
        ];
        for (doc, route) in docs {
            assert_eq!(doc.path(), route.to_path());
            assert!(!doc.body().is_empty());
        }
        assert_ne!(LegalDoc::Privacy.body(), LegalDoc::Terms.body());
    }
}
