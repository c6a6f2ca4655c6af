//! Site footer: contact details, opening hours, social links.

use leptos::prelude::*;

const CONTACT_PHONE: &str = "+961 XXX XXX";
const CONTACT_EMAIL: &str = "info@epiclounge.com";
const CONTACT_ADDRESS: &str = "Your Address, Lebanon";

const OPENING_HOURS: [(&str, &str); 3] = [
    ("Monday - Thursday", "2:00 PM - 2:00 AM"),
    ("Friday - Saturday", "2:00 PM - 4:00 AM"),
    ("Sunday", "2:00 PM - 12:00 AM"),
];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Facebook", "#"),
    ("Instagram", "#"),
    ("Twitter", "#"),
];

/// Bottom-of-page footer shared by every page.
#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <div class="site-footer__column">
                    <h3 class="site-footer__heading">"EPIC LOUNGE"</h3>
                    <p>{CONTACT_ADDRESS}</p>
                    <p>{CONTACT_PHONE}</p>
                    <p>{CONTACT_EMAIL}</p>
                </div>
                <div class="site-footer__column">
                    <h3 class="site-footer__heading">"Opening Hours"</h3>
                    <ul class="site-footer__hours">
                        {OPENING_HOURS
                            .iter()
                            .map(|(days, hours)| {
                                view! {
                                    <li>
                                        <span class="site-footer__days">{*days}</span>
                                        <span class="site-footer__times">{*hours}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="site-footer__column">
                    <h3 class="site-footer__heading">"Follow Us"</h3>
                    <ul class="site-footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <li>
                                        <a href=*href>{*label}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <p class="site-footer__copyright">"© Epic Lounge. All rights reserved."</p>
        </footer>
    }
}
